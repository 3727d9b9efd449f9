use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn sample_project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "index.html",
        r#"<!DOCTYPE html>
<html>
  <head><title data-localize>My app</title></head>
  <body>
    <span data-localize>Hello {USER}</span>
    <p>Not localized</p>
  </body>
</html>
"#,
    )?;
    test.write_file(
        "src/app.js",
        r#"const greeting = "Hi";
document.title = localize("Welcome");
alert(localize(greeting));
"#,
    )?;
    Ok(test)
}

#[test]
fn test_writes_one_file_per_locale() -> Result<()> {
    let test = sample_project()?;

    let output = test.run(&["-l", "en-US,fr-FR", "-H", "index.html", "-j", "src"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let expected = "{\n  \"Hello {USER}\": \"Hello {USER}\",\n  \"My app\": \"My app\",\n  \"Welcome\": \"Welcome\"\n}\n";
    assert_eq!(test.read_file("lang/en-US.json")?, expected);
    assert_eq!(test.read_file("lang/fr-FR.json")?, expected);
    assert!(stdout(&output).contains("Extracted 3 keys from 2 files into 2 locale files"));

    Ok(())
}

#[test]
fn test_existing_translations_are_kept() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"localize("A"); localize("B");"#)?;
    test.write_file("lang/en-US.json", r#"{"A": "Ah", "C": "Cee"}"#)?;

    let output = test.run(&["-l", "en-US", "-j", "app.js"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang/en-US.json")?,
        "{\n  \"A\": \"Ah\",\n  \"B\": \"B\",\n  \"C\": \"Cee\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_purge_removes_unused_keys() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"localize("A"); localize("B");"#)?;
    test.write_file("lang/en-US.json", r#"{"A": "Ah", "C": "Cee"}"#)?;

    let output = test.run(&["-l", "en-US", "-j", "app.js", "--purge"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang/en-US.json")?,
        "{\n  \"A\": \"Ah\",\n  \"B\": \"B\"\n}\n"
    );
    assert!(stderr(&output).contains("old key purged"));

    Ok(())
}

#[test]
fn test_yaml_output() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"localize("Hello")"#)?;

    let output = test.run(&["-l", "de-DE", "-j", "app.js", "-t", "yml", "-o", "i18n"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("i18n/de-DE.yml")?, "Hello: Hello\n");

    Ok(())
}

#[test]
fn test_custom_query_and_function() -> Result<()> {
    let test = CliTest::with_file(
        "page.html",
        r#"<p class="i18n">Title</p><p data-localize>Ignored</p>"#,
    )?;
    test.write_file("app.js", r#"__("Saved"); localize("Ignored too");"#)?;

    let output = test.run(&[
        "-l",
        "en",
        "-H",
        "page.html",
        "-j",
        "app.js",
        "--html-query",
        ".i18n",
        "--js-function",
        "__",
    ])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang/en.json")?,
        "{\n  \"Saved\": \"Saved\",\n  \"Title\": \"Title\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_parse_error_aborts_without_writing() -> Result<()> {
    let test = CliTest::with_file("good.js", r#"localize("Fine")"#)?;
    test.write_file("bad.js", "localize(\"never closed")?;

    let output = test.run(&["-l", "en-US", "-j", "good.js,bad.js"])?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("bad.js"), "stderr: {}", err);
    assert!(err.contains("error in your Javascript syntax"), "stderr: {}", err);
    assert!(!test.root().join("lang").exists());

    Ok(())
}

#[test]
fn test_keep_going_skips_broken_files() -> Result<()> {
    let test = CliTest::with_file("good.js", r#"localize("Fine")"#)?;
    test.write_file("bad.js", "localize(\"never closed")?;

    let output = test.run(&["-l", "en-US", "-j", "good.js,bad.js", "--keep-going"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        test.read_file("lang/en-US.json")?,
        "{\n  \"Fine\": \"Fine\"\n}\n"
    );
    assert!(stderr(&output).contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_broken_locale_file_does_not_block_others() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"localize("Hello")"#)?;
    test.write_file("lang/en-US.json", "{ not json")?;

    let output = test.run(&["-l", "en-US,fr-FR", "-j", "app.js"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("lang/en-US.json")?, "{ not json");
    assert_eq!(
        test.read_file("lang/fr-FR.json")?,
        "{\n  \"Hello\": \"Hello\"\n}\n"
    );
    let out = stdout(&output);
    assert!(out.contains("cannot parse"), "stdout: {}", out);
    assert!(out.contains("1 of 2 locale files could not be written"));
    assert!(!stderr(&output).contains("cannot parse"));

    Ok(())
}

#[test]
fn test_invalid_locale_is_rejected() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"localize("Hello")"#)?;

    let output = test.run(&["-l", "not-a-locale!!", "-j", "app.js"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not-a-locale!! is not a bcp47 compliant locale"));
    assert!(!test.root().join("lang").exists());

    Ok(())
}

#[test]
fn test_missing_locales_is_rejected() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"localize("Hello")"#)?;

    let output = test.run(&["-j", "app.js"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing supported locales"));

    Ok(())
}

#[test]
fn test_missing_input_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-l", "en-US", "-j", "nowhere.js"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("input not found: nowhere.js"));

    Ok(())
}

#[test]
fn test_second_run_is_idempotent() -> Result<()> {
    let test = sample_project()?;
    let args = ["-l", "en-US", "-H", "index.html", "-j", "src"];

    test.run(&args)?;
    let first = test.read_file("lang/en-US.json")?;
    let output = test.run(&args)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("lang/en-US.json")?, first);

    Ok(())
}

#[test]
fn test_table_row_template_and_flow_source() -> Result<()> {
    let test = CliTest::with_file(
        "views/row.html",
        r#"<tr><td data-localize>Name</td><td>{{ name }}</td></tr>"#,
    )?;
    test.write_file(
        "src/typed.js",
        r#"function label(count: number) { return localize("Items"); }"#,
    )?;

    let output = test.run(&["-l", "en-US", "-H", "views", "-j", "src"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("lang/en-US.json")?,
        "{\n  \"Items\": \"Items\",\n  \"Name\": \"Name\"\n}\n"
    );

    Ok(())
}
