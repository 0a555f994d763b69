use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_sort_rewrites_documents() -> Result<()> {
    let test = CliTest::with_config(&["en", "ca"])?;
    test.write_file(
        "translations/messages.en.yml",
        "zebra: Zebra\nanimals:\n  dog: Dog\n  cat: Cat\n",
    )?;
    test.write_file("translations/messages.ca.yml", "zebra: Zebra\nanimals: {cat: Gat}\n")?;

    let output = test.sort_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    insta::assert_snapshot!(stdout_of(&output), @r"
    [transcat] Command started
    [transcat] ✓ Your translations have been sorted successfully (2 files)
    [transcat] Command finished
    ");
    insta::assert_snapshot!(test.read_file("translations/messages.en.yml")?, @r"
    animals:
      cat: Cat
      dog: Dog
    zebra: Zebra
    ");

    Ok(())
}

#[test]
fn test_sort_twice_is_stable() -> Result<()> {
    let test = CliTest::with_config(&["en"])?;
    test.write_file("translations/messages.en.yml", "b: {y: 2, x: 1}\na: 0\n")?;

    test.sort_command().output()?;
    let first = test.read_file("translations/messages.en.yml")?;
    test.sort_command().output()?;
    let second = test.read_file("translations/messages.en.yml")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_sort_keeps_yaml_extension() -> Result<()> {
    let test = CliTest::with_config(&["en"])?;
    test.write_file("translations/messages.en.yaml", "b: 2\na: 1\n")?;

    let output = test.sort_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("translations/messages.en.yaml")?, "a: 1\nb: 2\n");
    assert!(!test.root().join("translations/messages.en.yml").exists());

    Ok(())
}

#[test]
fn test_sort_without_config_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.sort_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains(".transcat.yml"));

    Ok(())
}

#[test]
fn test_sort_with_broken_document_fails() -> Result<()> {
    let test = CliTest::with_config(&["en"])?;
    test.write_file("translations/messages.en.yml", "a: [unclosed\n")?;

    let output = test.sort_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("messages.en.yml"));
    assert_eq!(test.read_file("translations/messages.en.yml")?, "a: [unclosed\n");

    Ok(())
}
