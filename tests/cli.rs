use std::{
    fs,
    process::{Command, Output},
};

fn calcengine(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calcengine")).args(args)
                                                  .env_remove("RUST_LOG")
                                                  .output()
                                                  .unwrap_or_else(|e| panic!("Failed to run calcengine: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn evaluates_expression_argument() {
    let output = calcengine(&["(1 + 2) * 3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "9");
}

#[test]
fn expression_may_start_with_minus() {
    let output = calcengine(&["-2 + 3"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "1");

    let output = calcengine(&["--ast", "-(1+2)"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "-(1 + 2)");
}

#[test]
fn ast_flag_prints_rendered_expression() {
    let output = calcengine(&["--ast", "(1+2)*3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(1 + 2) * 3");
}

#[test]
fn file_flag_evaluates_each_line() {
    let path = std::env::temp_dir().join(format!("calcengine-cli-{}.calc", std::process::id()));
    fs::write(&path, "# sums\n1 + 1\n\n-2 * 3\n1 +\n").unwrap();

    let output = calcengine(&["--file", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "2\n-6");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error on line 5"));
}

#[test]
fn invalid_expression_fails() {
    let output = calcengine(&["1 $ 2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn large_results_use_signed_exponent() {
    let output = calcengine(&["1000000000 * 1000000000000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1e+21");
}
