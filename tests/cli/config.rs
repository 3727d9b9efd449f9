use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::with_file(
        ".localizerc.json",
        r#"{
  "locales": ["en-US", "es-ES"],
  "js": ["src/**/*.js"],
  "outputDirectory": "./locales",
  "outputType": "yaml"
}"#,
    )?;
    test.write_file("src/app.js", r#"localize("Bonjour")"#)?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("locales/en-US.yaml")?, "Bonjour: Bonjour\n");
    assert_eq!(test.read_file("locales/es-ES.yaml")?, "Bonjour: Bonjour\n");
    assert!(stderr(&output).contains("using config file"));

    Ok(())
}

#[test]
fn test_config_file_found_from_subdirectory() -> Result<()> {
    let test = CliTest::with_file(
        ".localizerc.json",
        r#"{ "locales": ["en-US"], "js": ["app.js"] }"#,
    )?;
    test.write_file("nested/dir/app.js", r#"localize("Nested")"#)?;

    let output = test
        .command()
        .current_dir(test.root().join("nested/dir"))
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("nested/dir/lang/en-US.json").exists());

    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".localizerc.json",
        r#"{ "locales": ["en-US"], "js": ["app.js"], "purge": false }"#,
    )?;
    test.write_file("app.js", r#"localize("Kept")"#)?;
    test.write_file("lang/fr-FR.json", r#"{"Old": "Vieux"}"#)?;

    let output = test.run(&["-l", "fr-FR", "--purge"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(!test.root().join("lang/en-US.json").exists());
    assert_eq!(
        test.read_file("lang/fr-FR.json")?,
        "{\n  \"Kept\": \"Kept\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::with_file(
        "settings/extract.json",
        r#"{ "locales": ["it-IT"], "js": ["app.js"] }"#,
    )?;
    test.write_file("app.js", r#"localize("Ciao")"#)?;

    let output = test.run(&["--config", "settings/extract.json"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("lang/it-IT.json").exists());

    Ok(())
}

#[test]
fn test_config_path_from_env() -> Result<()> {
    let test = CliTest::with_file(
        "extract.json",
        r#"{ "locales": ["pt-BR"], "js": ["app.js"] }"#,
    )?;
    test.write_file("app.js", r#"localize("Oi")"#)?;

    let output = test
        .command()
        .env("EXTRACT_LOCALES_CONFIG", "extract.json")
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("lang/pt-BR.json").exists());

    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let test = CliTest::with_file(".localizerc.json", r#"{ "locales": "#)?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
