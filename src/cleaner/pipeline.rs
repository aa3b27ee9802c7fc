//! Ordered list of rewrite passes.
//!
//! The order is load-bearing:
//! - default styles go first, leftover boilerplate would defeat the exact
//!   heading match and the formatting triggers
//! - span collapse runs before bare-span removal, the collapsed paragraph
//!   owns the style instead of an attribute-less span
//! - heading promotion runs before formatting conversion, a promoted
//!   heading has no style left to convert

use crate::config::CleanConfig;
use crate::markup::Element;

use super::passes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewritePass {
    FlattenWrappers,
    StripDefaultStyles,
    RemoveForbiddenAttributes,
    RemoveEmptyAttributes,
    RemoveEmptyParagraphs,
    CollapseOverlappingSpans,
    PromoteHeadings,
    ConvertFormatting,
    RemoveMeaninglessSpans,
}

impl RewritePass {
    /// Every pass, in the order the cleaner applies them.
    pub const PIPELINE: [RewritePass; 9] = [
        RewritePass::FlattenWrappers,
        RewritePass::StripDefaultStyles,
        RewritePass::RemoveForbiddenAttributes,
        RewritePass::RemoveEmptyAttributes,
        RewritePass::RemoveEmptyParagraphs,
        RewritePass::CollapseOverlappingSpans,
        RewritePass::PromoteHeadings,
        RewritePass::ConvertFormatting,
        RewritePass::RemoveMeaninglessSpans,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RewritePass::FlattenWrappers => "flatten_wrappers",
            RewritePass::StripDefaultStyles => "strip_default_styles",
            RewritePass::RemoveForbiddenAttributes => "remove_forbidden_attributes",
            RewritePass::RemoveEmptyAttributes => "remove_empty_attributes",
            RewritePass::RemoveEmptyParagraphs => "remove_empty_paragraphs",
            RewritePass::CollapseOverlappingSpans => "collapse_overlapping_spans",
            RewritePass::PromoteHeadings => "promote_headings",
            RewritePass::ConvertFormatting => "convert_formatting",
            RewritePass::RemoveMeaninglessSpans => "remove_meaningless_spans",
        }
    }

    /// Run this pass over the tree under `root`, returning the number of
    /// changes it made.
    pub fn apply(self, root: &mut Element, config: &CleanConfig) -> usize {
        match self {
            // Root level only
            RewritePass::FlattenWrappers => {
                passes::flatten_wrappers(root, |element| config.is_wrapper(element))
            }
            RewritePass::StripDefaultStyles => {
                passes::strip_default_styles(root, config.default_styles())
            }
            RewritePass::RemoveForbiddenAttributes => {
                passes::remove_forbidden_attributes(root, config)
            }
            RewritePass::RemoveEmptyAttributes => passes::remove_empty_attributes(root),
            RewritePass::RemoveEmptyParagraphs => passes::remove_empty_paragraphs(root),
            RewritePass::CollapseOverlappingSpans => passes::collapse_overlapping_spans(root),
            RewritePass::PromoteHeadings => passes::promote_headings(root, config.headings()),
            RewritePass::ConvertFormatting => passes::convert_formatting(root),
            RewritePass::RemoveMeaninglessSpans => passes::remove_meaningless_spans(root),
        }
    }
}

impl std::fmt::Display for RewritePass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
