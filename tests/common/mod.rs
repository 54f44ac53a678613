// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty temporary directory to build a tree in
pub fn create_test_tree() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();
    (dir, root)
}

/// Write a file of exactly `size` bytes, creating parent directories
pub fn write_file(root: &Path, rel: &str, size: usize) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, vec![b'x'; size]).unwrap();
    path
}

/// Create a file of `size` bytes without writing its contents
pub fn write_sparse_file(root: &Path, rel: &str, size: u64) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = fs::File::create(&path).unwrap();
    file.set_len(size).unwrap();
    path
}

/// Files of sizes {0, 5, 1000, 123456789} spread over a few directories
pub fn create_example_tree() -> (TempDir, PathBuf) {
    let (dir, root) = create_test_tree();
    write_file(&root, "empty.txt", 0);
    write_file(&root, "docs/five.txt", 5);
    write_file(&root, "docs/nested/thousand.bin", 1000);
    write_sparse_file(&root, "big/blob.img", 123_456_789);
    (dir, root)
}

/// Whether this process can read a directory regardless of its mode
/// (running as root, for instance)
pub fn ignores_permissions(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok()
}
