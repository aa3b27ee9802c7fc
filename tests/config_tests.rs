//! Tests for cleaner configuration: builder validation and JSON loading

use anyhow::Result;
use notecleaner::{CleanConfig, CleanError, HeadingLevel, NoteCleaner};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_match_editor_export() {
    let config = CleanConfig::default();
    assert_eq!(config.wrapper_tags(), ["div".to_string()]);
    assert_eq!(config.forbidden_attributes(), ["lang".to_string()]);
    assert_eq!(config.default_styles().value_of("margin"), Some("0in"));
    assert_eq!(config.default_styles().value_of("font-family"), Some("Calibri"));
    assert_eq!(config.default_styles().value_of("font-size"), Some("11.0pt"));
    assert_eq!(
        config.headings().get(HeadingLevel::H2).value_of("color"),
        Some("#2E75B5")
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_rejects_blank_names() {
    let result = CleanConfig::builder().wrapper_tags(["div", " "]).build();
    assert!(matches!(result, Err(CleanError::InvalidConfig(_))));

    let result = CleanConfig::builder().forbidden_attributes([""]).build();
    assert!(matches!(result, Err(CleanError::InvalidConfig(_))));
}

#[test]
fn test_builder_rejects_empty_heading_and_zero_limit() {
    let empty: [(&str, &str); 0] = [];
    let result = CleanConfig::builder().heading(HeadingLevel::H3, empty).build();
    assert!(matches!(result, Err(CleanError::InvalidConfig(_))));

    let result = CleanConfig::builder().max_input_bytes(0).build();
    assert!(matches!(result, Err(CleanError::InvalidConfig(_))));
}

#[test]
fn test_custom_wrapper_and_heading() -> Result<()> {
    let config = CleanConfig::builder()
        .wrapper_tags(["section"])
        .heading(HeadingLevel::H1, [("color", "navy")])
        .build()?;
    let cleaner = NoteCleaner::new(config);
    assert_eq!(
        cleaner.clean(r#"<section><p style="color:navy">T</p></section>"#)?,
        "<h1>T</h1>"
    );
    Ok(())
}

#[test]
fn test_overlapping_signatures_resolve_from_h6_down() -> Result<()> {
    let config = CleanConfig::builder()
        .heading(HeadingLevel::H1, [("color", "navy")])
        .heading(HeadingLevel::H6, [("color", "navy")])
        .build()?;
    let cleaner = NoteCleaner::new(config);
    assert_eq!(cleaner.clean(r#"<p style="color:navy">x</p>"#)?, "<h6>x</h6>");
    Ok(())
}

#[test]
fn test_json_roundtrip() -> Result<()> {
    let config = CleanConfig::default();
    let json = config.to_json_pretty()?;
    assert_eq!(CleanConfig::from_json_str(&json)?, config);
    Ok(())
}

#[test]
fn test_partial_json_keeps_defaults() -> Result<()> {
    let config = CleanConfig::from_json_str(r#"{"forbidden_attributes": ["lang", "class"]}"#)?;
    assert!(config.is_forbidden_attribute("CLASS"));
    assert_eq!(config.wrapper_tags(), ["div".to_string()]);
    assert_eq!(config.headings(), CleanConfig::default().headings());

    let config = CleanConfig::from_json_str(r#"{"headings": {"h5": {"color": "teal"}}}"#)?;
    assert_eq!(
        config.headings().get(HeadingLevel::H5).value_of("color"),
        Some("teal")
    );
    assert_eq!(
        config.headings().get(HeadingLevel::H1),
        CleanConfig::default().headings().get(HeadingLevel::H1)
    );
    Ok(())
}

#[test]
fn test_json_validation_errors() {
    let err = CleanConfig::from_json_str(r#"{"max_input_bytes": 0}"#).err();
    assert!(matches!(err, Some(CleanError::InvalidConfig(_))));

    let err = CleanConfig::from_json_str("{not json").err();
    assert!(matches!(err, Some(CleanError::Json(_))));
    assert!(err.is_some_and(|e| e.is_config_error()));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{"wrapper_tags": ["div", "section"]}}"#)?;
    let config = CleanConfig::from_json_file(file.path())?;
    assert_eq!(config.wrapper_tags().len(), 2);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = CleanConfig::from_json_file(dir.path().join("missing.json")).err();
    assert!(matches!(err, Some(CleanError::Io(_))));
    Ok(())
}
