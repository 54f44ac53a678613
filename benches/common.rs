// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use afs::model::Observation;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Generate N synthetic file observations with sizes spread over many bands
pub fn generate_observations(count: usize) -> Vec<Observation> {
    (0..count)
        .map(|i| {
            let size = (i as u64).wrapping_mul(2_654_435_761) >> (i % 48);
            Observation::file(format!("src/dir_{}/file_{}.rs", i / 100, i), size)
        })
        .collect()
}

/// Create a directory tree with `num_files` small files, `per_dir` per directory
pub fn create_bench_tree(num_files: usize, per_dir: usize) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();

    for i in 0..num_files {
        let sub = root.join(format!("dir_{}/sub_{}", i / (per_dir * 10), i / per_dir));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(format!("file_{}.txt", i)), vec![b'x'; i % 4096]).unwrap();
    }

    (dir, root)
}
