use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of, yaml};

fn numbered(count: usize) -> String {
    (0..count).map(|i| format!("key{}: value{}\n", i, i)).collect()
}

fn setup() -> Result<CliTest> {
    let test = CliTest::with_config(&["en", "ca", "fr"])?;
    test.write_file("translations/messages.en.yml", &numbered(10))?;
    test.write_file("translations/messages.ca.yml", &numbered(4))?;
    Ok(test)
}

#[test]
fn test_metrics_report() -> Result<()> {
    let test = setup()?;

    let output = test.metrics_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    insta::assert_snapshot!(stdout_of(&output), @r"
    [transcat] Command started
    [transcat] Translations for [en] is 100.00% completed. 0 missing (master)
    [transcat] Translations for [ca] is 40.00% completed. 6 missing
    [transcat] Translations for [fr] is 0.00% completed. 10 missing
    [transcat] Command finished
    ");

    Ok(())
}

#[test]
fn test_metrics_language_filter() -> Result<()> {
    let test = setup()?;

    let output = test.metrics_command().args(["-l", "fr"]).output()?;

    let stdout = stdout_of(&output);
    assert!(stdout.contains("[fr]"));
    assert!(!stdout.contains("[ca]"));

    Ok(())
}

#[test]
fn test_metrics_json() -> Result<()> {
    let test = setup()?;

    let output = test.metrics_command().arg("--json").output()?;

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["masterLanguage"], "en");
    assert_eq!(report["masterCount"], 10);
    let ca = &report["languages"][1];
    assert_eq!(ca["language"], "ca");
    assert_eq!(ca["translated"], 4);
    assert_eq!(ca["missing"], 6);
    assert_eq!(ca["completion"], 40.0);

    Ok(())
}

#[test]
fn test_metrics_empty_master() -> Result<()> {
    let test = CliTest::with_config(&["en", "ca"])?;
    test.write_file("translations/messages.en.yml", "")?;
    test.write_file("translations/messages.ca.yml", "a: b\n")?;

    let output = test.metrics_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(
        stdout_of(&output).contains("Translations for [ca] is 0.00% completed. 0 missing")
    );

    Ok(())
}

#[test]
fn test_metrics_export_to_directory() -> Result<()> {
    let test = CliTest::with_config(&["en", "ca"])?;
    test.write_file(
        "translations/messages.en.yml",
        "greeting: {hello: Hello, bye: Bye}\ntitle: Title\n",
    )?;
    test.write_file("translations/messages.ca.yml", "greeting: {hello: Hola}\n")?;

    let output = test
        .metrics_command()
        .args(["--export", "exported"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Export missing file in exported/missing.ca.yml for ca"));
    assert_eq!(
        test.read_yaml("exported/missing.ca.yml")?,
        yaml("greeting: {bye: Bye}\ntitle: Title\n")
    );

    Ok(())
}

#[test]
fn test_metrics_export_uses_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transcat.yml",
        "master_language: en\nlanguages: [en, de]\npaths: [translations]\nexport_path: out\n",
    )?;
    test.write_file("translations/messages.en.yml", "a: A\n")?;

    let output = test.metrics_command().arg("--export").output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(test.read_yaml("out/missing.de.yml")?, yaml("a: A\n"));

    Ok(())
}

#[test]
fn test_metrics_with_config_dir_option() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "app/.transcat.yml",
        "master_language: en\nlanguages: [en]\npaths: [i18n]\n",
    )?;
    test.write_file("app/i18n/messages.en.yml", "a: A\n")?;

    let output = test.metrics_command().args(["-c", "app"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("[en] is 100.00% completed"));

    Ok(())
}

#[test]
fn test_metrics_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcat.yml", "master_language: en\nlanguages: []\npaths: [.]\n")?;

    let output = test.metrics_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("languages"));

    Ok(())
}
