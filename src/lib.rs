pub mod cleaner;
pub mod config;
pub mod error;
pub mod markup;
pub mod utils;

use std::sync::LazyLock;

pub use cleaner::{CleanReport, HeadingLevel, NoteCleaner, RewritePass, StyleMap, StyleSignature};
pub use config::{CleanConfig, CleanConfigBuilder};
pub use error::{CleanError, CleanResult};
pub use markup::{Document, Element, Node, ScraperTreeProvider, TreeProvider, parse_fragment};

static DEFAULT_CLEANER: LazyLock<NoteCleaner> = LazyLock::new(NoteCleaner::default);

/// Clean a note editor export with the default configuration.
///
/// # Errors
///
/// Returns `CleanError::InputTooLarge` when `html` exceeds the default size
/// limit and `CleanError::NestingTooDeep` for over-deep markup.
pub fn clean_note_html(html: &str) -> CleanResult<String> {
    DEFAULT_CLEANER.clean(html)
}
