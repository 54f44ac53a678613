// End-to-end tests
// Full pipeline from a directory tree to the printed report

mod common;

use afs::config::ScanOptions;
use afs::model::SizeBand;
use afs::scanner::{NoopObserver, Scanner};
use std::path::Path;
use std::process::{Command, Output};

fn afs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_afs"))
        .args(args)
        .output()
        .unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_example_tree_report() {
    let (_dir, root) = common::create_example_tree();

    let report = Scanner::new(ScanOptions::new(&root).with_histogram(true))
        .run(&mut NoopObserver)
        .unwrap();

    assert_eq!(report.total_files, 4);
    assert_eq!(report.total_bytes, 124_457_794);
    assert_eq!(report.average, Some(31_114_448));

    let shares = report.histogram.unwrap();
    let counted: u64 = shares.iter().map(|s| s.count).sum();
    assert_eq!(counted, 4);

    let occupied: Vec<_> = shares
        .iter()
        .filter(|s| s.count > 0)
        .map(|s| (s.band, s.percent))
        .collect();
    assert_eq!(
        occupied,
        vec![
            (SizeBand::Empty, 25.0),
            (SizeBand::B1, 25.0),
            (SizeBand::Kb1, 25.0),
            (SizeBand::Mb100, 25.0),
        ]
    );
}

#[test]
fn test_rescan_is_identical() {
    let (_dir, root) = common::create_example_tree();
    let scanner = Scanner::new(ScanOptions::new(&root).with_histogram(true));

    let first = scanner.run(&mut NoopObserver).unwrap();
    let second = scanner.run(&mut NoopObserver).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cli_text_report() {
    let (_dir, root) = common::create_example_tree();

    let output = afs(&["-d", path_arg(&root)]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = format!(
        "\
Path: {}
Total: 124457794 bytes, 4 files.
Average: 31114448
File size distribution:
     empty: 25.0% (1 files)
     1-9 B: 25.0% (1 files)
   10-99 B: 0.0% (0 files)
 100-999 B: 0.0% (0 files)
    1-9 KB: 25.0% (1 files)
  10-99 KB: 0.0% (0 files)
100-999 KB: 0.0% (0 files)
    1-9 MB: 0.0% (0 files)
  10-99 MB: 0.0% (0 files)
100-999 MB: 25.0% (1 files)
",
        root.display()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_cli_verbose_listing() {
    let (_dir, root) = common::create_test_tree();
    common::write_file(&root, "a.txt", 12);
    common::write_file(&root, "b/c.txt", 3);

    let output = afs(&["-v", path_arg(&root)]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = format!(
        "Size       File name\n        12 {a}\n         3 {c}\n\nPath: {root}\nTotal: 15 bytes, 2 files.\nAverage: 7\n",
        a = root.join("a.txt").display(),
        c = root.join("b/c.txt").display(),
        root = root.display()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_cli_empty_directory() {
    let (_dir, root) = common::create_test_tree();
    std::fs::create_dir(root.join("nothing_here")).unwrap();

    let output = afs(&["-d", path_arg(&root)]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("Path: {}\nTotal: 0 bytes, 0 files.\n", root.display())
    );
}

#[test]
fn test_cli_json_report() {
    let (_dir, root) = common::create_example_tree();

    let output = afs(&["--json", "-d", path_arg(&root)]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_files"], 4);
    assert_eq!(json["average"], 31114448);
    assert_eq!(json["histogram"][0]["band"], "empty");
    assert_eq!(json["histogram"][9]["band"], "100-999 MB");
}

#[test]
fn test_cli_missing_root_fails() {
    let (_dir, root) = common::create_test_tree();
    let missing = root.join("does/not/exist");

    let output = afs(&[path_arg(&missing)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_cli_exit_codes() {
    let help = afs(&["-h"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&help.stderr).starts_with("Usage:"));
    assert!(help.stdout.is_empty());

    let version = afs(&["-V"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&version.stdout).starts_with("Average File Size v"));

    let missing = afs(&[]);
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).starts_with("Usage:"));

    let unknown = afs(&["-q", "."]);
    assert_eq!(unknown.status.code(), Some(1));
}
