use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_locate_nested_key() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["locate", "admin.dashboard.title"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "app/lang/admin.cs.neon:2\n");

    Ok(())
}

#[test]
fn test_locate_prefers_default_locale() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["locate", "admin.dashboard.title", "--default-locale", "en"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "app/lang/admin.en.neon:2\n");

    Ok(())
}

#[test]
fn test_locate_default_locale_from_config() -> Result<()> {
    let test = CliTest::with_admin_locales()?;
    test.write_config(r#"{ "defaultLocaleTag": "en" }"#)?;

    let output = test.run(&["locate", "admin.dashboard.title"])?;

    assert_eq!(stdout(&output), "app/lang/admin.en.neon:2\n");

    Ok(())
}

#[test]
fn test_locate_falls_back_to_next_candidate() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["locate", "admin.dashboard.subtitle", "--default-locale", "en"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "app/lang/admin.cs.neon:3\n");

    Ok(())
}

#[test]
fn test_locate_undefined_key() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["locate", "admin.dashboard.missing"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ \"admin.dashboard.missing\" is not defined in 2 candidate files\n"
    );

    Ok(())
}

#[test]
fn test_locate_unknown_domain() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["locate", "front.title"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "✘ No locale files for domain \"front\"\n");

    Ok(())
}

#[test]
fn test_locate_from_template_position() -> Result<()> {
    let test = CliTest::with_admin_locales()?;
    test.write_file(
        "app/templates/Dashboard/default.latte",
        "{translator admin.dashboard}\n<h1>{_title}</h1> <p>{_subtitle}</p>\n{/translator}\n",
    )?;

    let output = test.run(&[
        "locate",
        "--template",
        "app/templates/Dashboard/default.latte",
        "--line",
        "2",
        "--column",
        "23",
    ])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "app/lang/admin.cs.neon:3\n");

    Ok(())
}

#[test]
fn test_locate_template_without_macro_fails() -> Result<()> {
    let test = CliTest::with_admin_locales()?;
    test.write_file("app/templates/plain.latte", "<h1>Hello</h1>\n")?;

    let output = test.run(&["locate", "--template", "app/templates/plain.latte", "--line", "1"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No translation macro"));

    Ok(())
}

#[test]
fn test_locate_invalid_key() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["locate", "admin..title"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));

    Ok(())
}
