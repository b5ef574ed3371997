use std::{fs, process::Command};

#[test]
fn generates_fresh_files_in_target_dir() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("Http-07.log"), "stale\n").unwrap();
    fs::write(dir.path().join("keep.txt"), "keep\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_log-generator"))
        .args(["--files", "3", "--entries", "5", "--seed", "17", "--dir"])
        .arg(dir.path())
        .output()
        .expect("Failed to start log-generator");
    assert!(output.status.success(), "log-generator exited with {}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Generated 3 log files with 5 entries each."));
    assert!(stdout.contains("Files created: Http-01.log, Http-02.log, Http-03.log"));

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["Http-01.log", "Http-02.log", "Http-03.log", "keep.txt"]);

    for name in ["Http-01.log", "Http-02.log", "Http-03.log"] {
        let content = fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(content.lines().count(), 5);
        assert!(content.lines().all(|l| l.contains(" user-identifier ")));
    }
}

#[test]
fn unwritable_dir_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing");

    let output = Command::new(env!("CARGO_BIN_EXE_log-generator"))
        .args(["--files", "1", "--entries", "1", "--dir"])
        .arg(&missing)
        .output()
        .expect("Failed to start log-generator");

    assert!(!output.status.success());
    assert!(!missing.exists());
}
