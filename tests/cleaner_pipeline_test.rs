//! End-to-end tests for the note cleaning pipeline
//!
//! Each test feeds a note editor export through the default cleaner and
//! checks the serialized fragment.

use anyhow::Result;
use notecleaner::{CleanConfig, CleanError, NoteCleaner, RewritePass, clean_note_html};

fn clean(html: &str) -> Result<String> {
    Ok(NoteCleaner::default().clean(html)?)
}

#[test]
fn test_exact_heading_match_any_order() -> Result<()> {
    assert_eq!(
        clean(r#"<p style="color:#1E4E79;font-size:16.0pt">Title</p>"#)?,
        "<h1>Title</h1>"
    );
    assert_eq!(
        clean(r#"<p style="font-size:16.0pt;color:#1E4E79">Title</p>"#)?,
        "<h1>Title</h1>"
    );
    Ok(())
}

#[test]
fn test_default_margin_stripped_before_heading_match() -> Result<()> {
    // margin:0in is a default, so the remaining style is an exact H1 match
    assert_eq!(
        clean(r#"<p style="color:#1E4E79;font-size:16.0pt;margin:0in">Title</p>"#)?,
        "<h1>Title</h1>"
    );
    Ok(())
}

#[test]
fn test_superset_style_is_not_a_heading() -> Result<()> {
    let html = r#"<p style="color:#1E4E79;font-size:16.0pt;margin:1in">Title</p>"#;
    assert_eq!(clean(html)?, html);

    // Without margin in the default table the extra declaration survives
    let config = CleanConfig::builder()
        .default_styles([("font-family", "Calibri")])
        .build()?;
    let html = r#"<p style="color:#1E4E79;font-size:16.0pt;margin:0in">Title</p>"#;
    assert_eq!(NoteCleaner::new(config).clean(html)?, html);
    Ok(())
}

#[test]
fn test_trailing_separator_blocks_heading_match() -> Result<()> {
    // The blank segment after `;` is a declaration of its own
    let html = r#"<p style="color:#2E75B5;">x</p>"#;
    assert_eq!(clean(html)?, html);
    Ok(())
}

#[test]
fn test_formatting_triggers_nest_and_span_disappears() -> Result<()> {
    let html =
        r#"<span style="font-weight:bold;font-style:italic;text-decoration:underline">X</span>"#;
    assert_eq!(clean(html)?, "<u><i><b>X</b></i></u>");
    Ok(())
}

#[test]
fn test_overlapping_span_collapses_then_converts() -> Result<()> {
    let html = r#"<p style="color:red"><span style="font-weight:bold">X</span></p>"#;
    assert_eq!(clean(html)?, r#"<p style="color:red"><b>X</b></p>"#);
    Ok(())
}

#[test]
fn test_collapse_span_wins_on_collision() -> Result<()> {
    let html = r#"<p style="color:red"><span style="color:blue">X</span></p>"#;
    assert_eq!(clean(html)?, r#"<p style="color:blue">X</p>"#);
    Ok(())
}

#[test]
fn test_empty_paragraphs_removed() -> Result<()> {
    assert_eq!(clean("<p>&nbsp;</p><p>   </p><p>&nbsp;X</p>")?, "<p>&nbsp;X</p>");
    Ok(())
}

#[test]
fn test_meaningless_spans_unwrapped() -> Result<()> {
    assert_eq!(clean("<p>a<span>b</span>c</p>")?, "<p>abc</p>");
    let kept = r#"<p><span class="x">b</span></p>"#;
    assert_eq!(clean(kept)?, kept);
    Ok(())
}

#[test]
fn test_forbidden_and_empty_attributes_removed() -> Result<()> {
    assert_eq!(
        clean(r#"<p lang="en-US" class=" " id="a">x</p>"#)?,
        r#"<p id="a">x</p>"#
    );
    Ok(())
}

#[test]
fn test_wrappers_below_root_survive() -> Result<()> {
    let html = "<ul><li><div>x</div></li></ul>";
    assert_eq!(clean(html)?, html);
    Ok(())
}

#[test]
fn test_comments_pass_through() -> Result<()> {
    assert_eq!(clean("<div><p>a<!-- note -->b</p></div>")?, "<p>a<!-- note -->b</p>");
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    assert_eq!(clean("")?, "");
    Ok(())
}

const EXPORT_SAMPLE: &str = concat!(
    "<div><div>",
    r#"<p style="margin:0in;font-family:Calibri;font-size:11.0pt" lang="en-US">Plain text</p>"#,
    r#"<p style="margin:0in;font-size:16.0pt;color:#1E4E79">Heading</p>"#,
    r#"<p style="margin:0in"><span style="font-weight:bold">Bold</span> tail</p>"#,
    "<p>&nbsp;</p>",
    "</div></div>",
);

#[test]
fn test_representative_export() -> Result<()> {
    assert_eq!(
        clean(EXPORT_SAMPLE)?,
        "<p>Plain text</p><h1>Heading</h1><p><b>Bold</b> tail</p>"
    );
    Ok(())
}

#[test]
fn test_idempotent_on_representative_samples() -> Result<()> {
    let samples = [
        EXPORT_SAMPLE,
        r#"<div><p style="color:red"><span style="font-weight:bold">X</span></p></div>"#,
        r#"<p><span style="font-style:italic">a</span><span>b</span></p>"#,
        r#"<p style="color:#1E4E79;font-size:16.0pt;margin:1in">Title</p>"#,
    ];
    let cleaner = NoteCleaner::default();
    for sample in samples {
        let once = cleaner.clean(sample)?;
        let (twice, report) = cleaner.clean_with_report(&once)?;
        assert_eq!(twice, once, "second run changed output of {sample}");
        assert_eq!(report.total_changes(), 0, "second run found work in {sample}");
    }
    Ok(())
}

#[test]
fn test_report_counts_each_pass() -> Result<()> {
    let (_, report) = NoteCleaner::default().clean_with_report(EXPORT_SAMPLE)?;
    assert_eq!(report.changes_for(RewritePass::FlattenWrappers), 2);
    assert_eq!(report.changes_for(RewritePass::StripDefaultStyles), 3);
    assert_eq!(report.changes_for(RewritePass::RemoveForbiddenAttributes), 1);
    assert_eq!(report.changes_for(RewritePass::RemoveEmptyParagraphs), 1);
    assert_eq!(report.changes_for(RewritePass::PromoteHeadings), 1);
    assert_eq!(report.changes_for(RewritePass::ConvertFormatting), 1);
    assert_eq!(report.changes_for(RewritePass::RemoveMeaninglessSpans), 1);
    Ok(())
}

#[test]
fn test_oversized_input_rejected() -> Result<()> {
    let config = CleanConfig::builder().max_input_bytes(16).build()?;
    let err = NoteCleaner::new(config)
        .clean("<p>this input is too long</p>")
        .err();
    assert!(matches!(err, Some(CleanError::InputTooLarge { limit: 16, .. })));
    Ok(())
}

#[test]
fn test_excessive_nesting_rejected_without_losing_text() {
    let html = format!("{}KEEPME{}", "<b>".repeat(300), "</b>".repeat(300));
    let result = NoteCleaner::default().clean(&html);
    assert!(matches!(result, Err(CleanError::NestingTooDeep { .. })));
}

#[test]
fn test_deep_nesting_within_limit_keeps_text() -> Result<()> {
    let html = format!("{}KEEPME{}", "<b>".repeat(100), "</b>".repeat(100));
    assert!(clean(&html)?.contains("KEEPME"));
    Ok(())
}

#[test]
fn test_convenience_function_uses_defaults() -> Result<()> {
    assert_eq!(
        clean_note_html(r#"<div><p style="color:#2E75B5">Sub</p></div>"#)?,
        "<h5>Sub</h5>"
    );
    Ok(())
}
