//! Preroll Reply Normalization
//!
//! Turns the free-form text a generation service returns into a canonical
//! [`CanonicalResult`](preroll_document::CanonicalResult), whatever shape the
//! reply took.
//!
//! # Routes
//!
//! - **JSON sections**: `{generation_type, sections: [{title, bullets}]}`
//! - **JSON legacy**: nine fixed keys such as `executive_summary`
//! - **Headings**: free text segmented at recognized headings
//! - **Paragraphs**: free text without headings, split at blank lines
//!
//! ```text
//! reply → SectionsJsonParser → LegacyJsonParser → HeadingSegmenter → CanonicalResult
//!              (declines)           (declines)        (never fails)
//! ```
//!
//! # Example
//!
//! ```rust
//! use preroll_parse::{format_document, parse};
//!
//! let doc = parse("## Key Actions\n- Chase across the roof\n- Fall");
//! assert_eq!(doc.sections()[0].id().as_str(), "key-actions-0");
//! assert_eq!(format_document(&doc), "Key Actions\n- Chase across the roof\n- Fall");
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod budget;
pub mod classify;
pub mod error;
pub mod format;
pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod scene;
pub mod views;
pub mod vocabulary;

// Re-exports for convenience
pub use budget::{split_budget, BudgetSplit};
pub use error::ParseError;
pub use format::{
    format_bullets, format_characters, format_document, format_scene_overview, format_section,
    format_tier,
};
pub use normalize::{normalize_characters, normalize_list, normalize_text};
pub use pipeline::Pipeline;
pub use scene::{parse_scene_overview, LabeledValue, SceneBlock, SceneOverview};
pub use views::BudgetBreakdown;
pub use vocabulary::HeadingVocabulary;

use once_cell::sync::Lazy;
use preroll_document::CanonicalResult;

static DEFAULT_PIPELINE: Lazy<Pipeline> = Lazy::new(Pipeline::new);

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Normalize a reply with the default pipeline
#[must_use]
pub fn parse(raw: &str) -> CanonicalResult {
    DEFAULT_PIPELINE.parse(raw)
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with replies
    pub use crate::error::ParseError;
    pub use crate::format::{format_document, format_section};
    pub use crate::parsers::{ParserRegistry, ReplyParser};
    pub use crate::pipeline::Pipeline;
    pub use crate::views::BudgetBreakdown;
    pub use crate::vocabulary::HeadingVocabulary;
    pub use preroll_document::{
        BudgetTier, CanonicalResult, ParseRoute, Section, SectionFlavor, SectionKey,
    };
}
