use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(stdout_of(&output), @"✓ Created .transcat.yml");

    let config = test.read_yaml(".transcat.yml")?;
    assert_eq!(config["master_language"], "en");
    assert!(config["languages"].is_sequence());
    assert!(config["paths"].is_sequence());
    assert!(config.get("guess_command").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcat.yml", "master_language: fr\n")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains(".transcat.yml already exists"));
    assert_eq!(test.read_file(".transcat.yml")?, "master_language: fr\n");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("translations/messages.en.yml", "hello: Hello\n")?;

    let output = test.metrics_command().output()?;
    assert!(
        output.status.success(),
        "metrics should work with the initialized config. stderr: {}",
        stderr_of(&output)
    );

    Ok(())
}
