//! Normalization pipeline - main entry point
//!
//! Owns the parser registry and the heading vocabulary, and exposes the
//! section-oriented views built on top of a parsed document.

use crate::parsers::{default_parsers, segment, ParserRegistry, ReplyParser, Segmentation};
use crate::scene::SceneOverview;
use crate::views::{self, BudgetBreakdown};
use crate::vocabulary::HeadingVocabulary;
use preroll_document::{CanonicalResult, CharacterRole, LegacyFixedFields, SectionKey};

/// Reply normalization pipeline
///
/// Parsing never fails: structured replies go through the JSON parsers,
/// everything else is segmented at headings.
#[derive(Debug, Default)]
pub struct Pipeline {
    /// Parsers tried in priority order
    parsers: ParserRegistry,
    /// Phrases recognized as section headings
    vocabulary: HeadingVocabulary,
}

impl Pipeline {
    /// Create pipeline with the built-in parsers and vocabulary
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: default_parsers(),
            vocabulary: HeadingVocabulary::default(),
        }
    }

    /// Replace the heading vocabulary
    #[inline]
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: HeadingVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Add one heading phrase to the vocabulary
    #[must_use]
    pub fn with_heading(mut self, phrase: &str, key: SectionKey) -> Self {
        self.vocabulary = self.vocabulary.with_entry(phrase, key);
        self
    }

    /// Register an additional parser
    #[must_use]
    pub fn with_parser<P: ReplyParser>(mut self, parser: P) -> Self {
        self.parsers.register(parser);
        self
    }

    /// Heading vocabulary in use
    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &HeadingVocabulary {
        &self.vocabulary
    }

    /// Parser registry in use
    #[inline]
    #[must_use]
    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    /// Normalize a reply into a canonical document
    #[must_use]
    pub fn parse(&self, raw: &str) -> CanonicalResult {
        self.parsers.parse(raw, &self.vocabulary)
    }

    /// Segment free text without trying the JSON parsers
    #[must_use]
    pub fn segment(&self, text: &str) -> Segmentation {
        segment(text, &self.vocabulary)
    }

    /// Nine fixed fields of a reply, whatever its shape
    ///
    /// Free text is projected straight from its segments, so ad hoc
    /// headings fold into the preceding field instead of being dropped.
    #[must_use]
    pub fn parse_legacy(&self, raw: &str) -> LegacyFixedFields {
        let result = self.parse(raw);
        match result.legacy() {
            Some(fields) => fields.clone(),
            None if result.route().is_free_text() => self.segment(raw).to_legacy(),
            None => views::legacy_fields(&result),
        }
    }

    /// Budget tiers of a document
    #[inline]
    #[must_use]
    pub fn budget(&self, result: &CanonicalResult) -> BudgetBreakdown {
        views::budget_breakdown(result)
    }

    /// Scene overview of a document
    #[inline]
    #[must_use]
    pub fn scene_overview(&self, result: &CanonicalResult) -> SceneOverview {
        views::scene_overview(result)
    }

    /// Character records of a document
    #[inline]
    #[must_use]
    pub fn characters(&self, result: &CanonicalResult) -> Vec<CharacterRole> {
        views::characters(result)
    }
}
