use anyhow::Result;

use crate::CliTest;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_strips_comments_in_place() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/Main.kt",
        "// header\nfun main() {\n    println(\"hi\") // trailing\n    /* block */ val x = 1\n}\n",
    )?;

    let output = test.command().arg("src").output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/Main.kt")?,
        "\nfun main() {\n    println(\"hi\") \n     val x = 1\n}\n"
    );
    assert!(stdout_of(&output).contains("Cleaned 1 of 1 source file"));
    Ok(())
}

#[test]
fn test_comment_free_file_is_left_alone() -> Result<()> {
    let test = CliTest::new()?;
    let content = "fun main() {\n    println(\"http://example.com\")\n}\n";
    test.write_file("src/Main.kt", content)?;

    let output = test.command().arg("src").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Main.kt")?, content);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("(unchanged)"));
    assert!(stdout.contains("nothing to clean"));
    Ok(())
}

#[test]
fn test_strict_mode_collapses_blank_lines() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/Main.kt",
        "fun a() {}\n// one\n// two\n\nfun b() {}\n",
    )?;

    let output = test
        .command()
        .args(["src", "--mode", "strict"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Main.kt")?, "fun a() {}\n\nfun b() {}\n");
    Ok(())
}

#[test]
fn test_dry_run_reports_without_rewriting() -> Result<()> {
    let test = CliTest::new()?;
    let content = "fun main() {} // entry\n";
    test.write_file("src/Main.kt", content)?;

    let output = test.command().args(["src", "--dry-run"]).output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Main.kt")?, content);
    assert!(stdout_of(&output).contains("Would clean 1 of 1 source file"));
    Ok(())
}

#[test]
fn test_missing_root_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("no_such_dir").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("root directory not found"));
    Ok(())
}

#[test]
fn test_unreadable_file_does_not_abort_the_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("src/Broken.kt", &[0xff, 0xfe, 0x2f, 0x2f])?;
    test.write_file("src/Main.kt", "fun main() {} // entry\n")?;

    let output = test.command().arg("src").output()?;

    // Per-file failures are reported but the run still succeeds.
    assert!(output.status.success());
    assert_eq!(test.read_file("src/Main.kt")?, "fun main() {} \n");
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Broken.kt"));
    assert!(stdout.contains("Cleaned 1 of 2 source files"));
    assert!(stderr_of(&output).contains("1 file(s) could not be processed"));
    Ok(())
}

#[test]
fn test_extension_filter_from_cli() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Main.java", "class Main {} // entry\n")?;
    test.write_file("src/notes.txt", "// not source code\n")?;

    let output = test
        .command()
        .args(["src", "--ext", "java"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Main.java")?, "class Main {} \n");
    assert_eq!(test.read_file("src/notes.txt")?, "// not source code\n");
    Ok(())
}

#[test]
fn test_root_and_extensions_from_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".decommentrc.json",
        r#"{
            "sourceRoot": "app",
            "extensions": ["java"]
        }"#,
    )?;
    test.write_file("app/Main.java", "class Main {} // entry\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("app/Main.java")?, "class Main {} \n");
    Ok(())
}

#[test]
fn test_config_ignores_exclude_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".decommentrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("src/Main.kt", "fun main() {} // entry\n")?;
    test.write_file("src/generated/Gen.kt", "// generated file\n")?;

    let output = test.command().arg("src").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Main.kt")?, "fun main() {} \n");
    assert_eq!(test.read_file("src/generated/Gen.kt")?, "// generated file\n");
    Ok(())
}

#[test]
fn test_broken_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".decommentrc.json", "{ not json")?;
    test.write_file("src/Main.kt", "fun main() {}\n")?;

    let output = test.command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to parse"));
    Ok(())
}

#[test]
fn test_second_run_reports_nothing_to_clean() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Main.kt", "fun main() {} // entry\n")?;

    let first = test.command().arg("src").output()?;
    assert!(first.status.success());
    assert!(stdout_of(&first).contains("Cleaned 1 of 1"));

    let second = test.command().arg("src").output()?;
    assert!(second.status.success());
    assert!(stdout_of(&second).contains("nothing to clean"));
    Ok(())
}
