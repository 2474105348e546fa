//! CLI 바이너리의 단발성(one-shot) 보고서 경로 테스트.
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::new(env!("CARGO_BIN_EXE_carbon_footprint_calculator_cli"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run cli")
}

fn has_hangul(text: &str) -> bool {
    text.chars().any(|c| ('\u{AC00}'..='\u{D7A3}').contains(&c))
}

#[test]
fn input_flags_print_one_report_and_exit() {
    let out = run_cli(&["--lang", "en", "--electricity", "300", "--car-km", "10"]);
    assert!(out.status.success(), "{out:?}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total Emissions: 14.60"), "{stdout}");
    assert!(stdout.contains("100% of recommended daily limit"), "{stdout}");
}

#[test]
fn meat_flag_alone_uses_zero_for_other_inputs() {
    let out = run_cli(&["--lang", "en", "--meat", "never"]);
    assert!(out.status.success(), "{out:?}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total Emissions: 0.10"), "{stdout}");
    assert!(stdout.contains("2% of recommended daily limit"), "{stdout}");
}

#[test]
fn negative_flag_exits_with_code_one_in_english() {
    let out = run_cli(&["--lang", "en", "--car-km", "-2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Error: Car distance must be 0 or greater: -2"),
        "{stderr}"
    );
    assert!(!has_hangul(&stderr), "{stderr}");
}
