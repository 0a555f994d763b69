use std::env;

use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of, yaml};

fn setup(guess_command: &str) -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        ".transcat.yml",
        &format!(
            "master_language: en\nlanguages: [en, ca]\npaths: [translations]\n{}",
            guess_command
        ),
    )?;
    test.write_file("translations/domain.en.yml", "a: {b: hello, c: world}\n")?;
    Ok(test)
}

fn guess_command(test: &CliTest) -> std::process::Command {
    let mut cmd = test.command();
    if let Some(path) = env::var_os("PATH") {
        cmd.env("PATH", path);
    }
    cmd.arg("guess");
    cmd
}

#[cfg(unix)]
#[test]
fn test_guess_fills_missing_keys() -> Result<()> {
    let test = setup("guess_command: [echo, \"{to}-{text}\"]\n")?;

    let output = guess_command(&test).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[transcat] Translation : ca-hello"));
    assert!(stdout.contains("Guessed 2 translations, 0 failed"));
    assert_eq!(
        test.read_yaml("translations/domain.ca.yml")?,
        yaml("a: {b: ca-hello, c: ca-world}")
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_guess_limit() -> Result<()> {
    let test = setup("guess_command: [echo, \"{text}\"]\n")?;

    let output = guess_command(&test).args(["--limit", "1"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Guessed 1 translation, 0 failed"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_guess_failures_are_reported() -> Result<()> {
    let test = setup("guess_command: [\"false\"]\n")?;

    let output = guess_command(&test).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Could not guess a translation for 'hello'"));
    assert!(stdout.contains("Guessed 0 translations, 2 failed"));
    assert!(!test.root().join("translations/domain.ca.yml").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_guess_domain_filter_writes_filtered_domain() -> Result<()> {
    let test = setup("guess_command: [echo, \"{to}-{text}\"]\n")?;
    test.write_file("translations/a.en.yml", "x: hello\n")?;
    test.write_file("translations/b.en.yml", "x: hi\n")?;
    test.write_file("translations/a.ca.yml", "x: hola\n")?;

    let output = guess_command(&test).args(["-d", "b"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Guessed 1 translation, 0 failed"));
    assert_eq!(test.read_yaml("translations/b.ca.yml")?, yaml("x: ca-hi"));
    assert_eq!(test.read_file("translations/a.ca.yml")?, "x: hola\n");
    assert!(!test.root().join("translations/domain.ca.yml").exists());

    Ok(())
}

#[test]
fn test_guess_requires_command() -> Result<()> {
    let test = setup("")?;

    let output = guess_command(&test).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("No 'guess_command' configured"));

    Ok(())
}
