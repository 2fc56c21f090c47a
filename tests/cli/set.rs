use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_set_updates_existing_lines() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["set", "admin.dashboard.title", "cs=Přehled", "en=Overview"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ cs  updated   app/lang/admin.cs.neon:2\n\
         ✓ en  updated   app/lang/admin.en.neon:2\n"
    );
    assert_eq!(
        test.read_file("app/lang/admin.cs.neon")?,
        "dashboard:\n    title: \"Přehled\"\n    subtitle: Přehled\n"
    );
    assert_eq!(
        test.read_file("app/lang/admin.en.neon")?,
        "dashboard:\n    title: \"Overview\"\n"
    );

    Ok(())
}

#[test]
fn test_set_appends_missing_key() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["set", "admin.dashboard.subtitle", "en=Overview"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ en  appended  app/lang/admin.en.neon:3\n");
    assert_eq!(
        test.read_file("app/lang/admin.en.neon")?,
        "dashboard:\n    title: Dashboard\nadmin.dashboard.subtitle: \"Overview\"\n"
    );

    Ok(())
}

#[test]
fn test_set_escapes_quotes() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["set", "admin.dashboard.title", r#"en=Say "hi""#])?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("app/lang/admin.en.neon")?,
        "dashboard:\n    title: \"Say \\\"hi\\\"\"\n"
    );

    Ok(())
}

#[test]
fn test_set_unknown_locale_fails() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["set", "admin.dashboard.title", "de=Übersicht"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ de  no de file for \"admin.dashboard.title\"\n"
    );

    Ok(())
}

#[test]
fn test_set_ignores_empty_value() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["set", "admin.dashboard.title", "cs=", "en=Overview"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ en  updated   app/lang/admin.en.neon:2\n\
         warning: empty value for cs ignored\n"
    );
    assert!(test.read_file("app/lang/admin.cs.neon")?.contains("\"Nástěnka\""));

    Ok(())
}

#[test]
fn test_set_requires_assignment() -> Result<()> {
    let test = CliTest::with_admin_locales()?;

    let output = test.run(&["set", "admin.dashboard.title", "Overview"])?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
