//! Note editor HTML cleaning pipeline
//!
//! Parses the export, runs the rewrite passes of [`RewritePass::PIPELINE`]
//! in order over the owned tree, and serializes the result.
//!
//! # Usage
//!
//! ```rust
//! # use notecleaner::{CleanConfig, NoteCleaner};
//! let cleaner = NoteCleaner::new(CleanConfig::default());
//! let html = r#"<div><p style="margin:0in;font-size:16.0pt;color:#1E4E79">Title</p></div>"#;
//! assert_eq!(cleaner.clean(html)?, "<h1>Title</h1>");
//! # Ok::<(), notecleaner::CleanError>(())
//! ```

pub mod passes;
pub mod pipeline;
pub mod signatures;
pub mod style;

pub use pipeline::RewritePass;
pub use signatures::{
    FORMATTING_TRIGGERS, FormattingTrigger, HeadingLevel, HeadingSignatures, StyleSignature,
};
pub use style::StyleMap;

use crate::config::CleanConfig;
use crate::error::{CleanError, CleanResult};
use crate::markup::{Document, ScraperTreeProvider, TreeProvider};

/// Number of changes each pass made during one conversion, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub passes: Vec<(RewritePass, usize)>,
}

impl CleanReport {
    /// Total number of changes across all passes.
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.passes.iter().map(|(_, changes)| changes).sum()
    }

    /// Changes made by `pass`, or zero if it did not run.
    #[must_use]
    pub fn changes_for(&self, pass: RewritePass) -> usize {
        self.passes
            .iter()
            .find(|(p, _)| *p == pass)
            .map_or(0, |(_, changes)| *changes)
    }
}

/// Converts note editor exports into semantic HTML fragments.
#[derive(Debug, Clone)]
pub struct NoteCleaner<P = ScraperTreeProvider> {
    config: CleanConfig,
    provider: P,
}

impl NoteCleaner {
    /// Create a cleaner backed by the default html5ever parser.
    #[must_use]
    pub fn new(config: CleanConfig) -> Self {
        Self::with_provider(config, ScraperTreeProvider)
    }
}

impl Default for NoteCleaner {
    fn default() -> Self {
        Self::new(CleanConfig::default())
    }
}

impl<P: TreeProvider> NoteCleaner<P> {
    /// Create a cleaner that parses and serializes through `provider`.
    pub fn with_provider(config: CleanConfig, provider: P) -> Self {
        Self { config, provider }
    }

    #[must_use]
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Clean `html` and return the resulting fragment.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::InputTooLarge` when `html` exceeds the configured
    /// size limit and `CleanError::NestingTooDeep` when the provider cannot
    /// hold the whole tree. Malformed markup never fails; the parser
    /// recovers from it.
    pub fn clean(&self, html: &str) -> CleanResult<String> {
        self.clean_with_report(html).map(|(output, _)| output)
    }

    /// Clean `html`, also returning per-pass change counts.
    ///
    /// # Errors
    ///
    /// Same as [`NoteCleaner::clean`].
    pub fn clean_with_report(&self, html: &str) -> CleanResult<(String, CleanReport)> {
        let limit = self.config.max_input_bytes();
        if html.len() > limit {
            return Err(CleanError::InputTooLarge {
                size: html.len(),
                limit,
            });
        }

        let span = tracing::debug_span!("clean_note", input_bytes = html.len());
        let _guard = span.enter();

        let mut document = self.provider.parse(html)?;
        let report = self.clean_document(&mut document);
        let output = self.provider.serialize(&document);

        tracing::debug!(
            output_bytes = output.len(),
            changes = report.total_changes(),
            "Note cleaned"
        );
        Ok((output, report))
    }

    /// Run every pass over an already parsed document.
    pub fn clean_document(&self, document: &mut Document) -> CleanReport {
        let mut report = CleanReport::default();
        for pass in RewritePass::PIPELINE {
            let changes = pass.apply(&mut document.root, &self.config);
            tracing::debug!(pass = pass.name(), changes, "Applied rewrite pass");
            report.passes.push((pass, changes));
        }
        report
    }
}
