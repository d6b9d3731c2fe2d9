use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("particle-stats").unwrap()
}

#[test]
fn missing_run_id_fails_with_usage() {
    cmd().assert().failure().stderr(contains("Usage"));
}

#[test]
fn missing_stats_file_names_the_path() {
    // Run from a fresh nested dir so `../build/particlestats` resolves
    // inside the tempdir and is guaranteed absent. The pressure file is
    // the first open attempt and the failure must name it.
    let dir = tempfile::tempdir().unwrap();
    let work = dir.path().join("work");
    std::fs::create_dir(&work).unwrap();

    cmd()
        .current_dir(&work)
        .arg("no-such-run")
        .assert()
        .failure()
        .stderr(contains("psr-no-such-run.txt"));
}

#[test]
fn generate_sample_writes_a_parseable_triple() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("generate_sample")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success();

    for prefix in ["psr", "pfm", "vel"] {
        let path = dir.path().join(format!("{prefix}-sample.txt"));
        let text = std::fs::read_to_string(&path).unwrap();
        let values: Vec<f64> = text
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 95, "{prefix} sample size");
    }
}
