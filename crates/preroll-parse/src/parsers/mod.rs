//! Reply parsers
//!
//! Each parser recognizes one reply shape:
//! - `{generation_type, sections: [...]}` JSON
//! - nine-key legacy JSON
//! - free text segmented at headings
//!
//! Parsers are tried highest priority first. The first success wins; a
//! [`ParseError`] only routes the reply to the next parser.

use crate::error::ParseError;
use crate::vocabulary::HeadingVocabulary;
use preroll_document::CanonicalResult;

mod headings;
mod json;
mod legacy;

pub use headings::{segment, HeadingSegmenter, Segment, Segmentation};
pub use json::{extract_json_object, generation_type, SectionsJsonParser};
pub use legacy::{project_legacy, LegacyJsonParser};

/// Parser turning a raw reply into a canonical document
///
/// Implement this trait to add support for a new reply shape.
pub trait ReplyParser: Send + Sync + 'static {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Parse a reply, or decline it with the reason
    fn parse(
        &self,
        raw: &str,
        vocabulary: &HeadingVocabulary,
    ) -> Result<CanonicalResult, ParseError>;

    /// Parser priority (higher = tried first)
    fn priority(&self) -> i32 {
        0
    }
}

/// Ordered set of reply parsers
pub struct ParserRegistry {
    parsers: Vec<Box<dyn ReplyParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        default_parsers()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.names())
            .finish()
    }
}

impl ParserRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser
    pub fn register<P: ReplyParser>(&mut self, parser: P) {
        self.parsers.push(Box::new(parser));
        // Stable sort keeps registration order among equal priorities
        self.parsers
            .sort_by_key(|parser| std::cmp::Reverse(parser.priority()));
    }

    /// Parser names in trial order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|parser| parser.name()).collect()
    }

    /// Number of registered parsers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// No parsers registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Run parsers in order; the first success wins
    ///
    /// When every parser declines, the heading segmenter runs anyway, so
    /// the result is total even for a hand-built registry.
    #[must_use]
    pub fn parse(&self, raw: &str, vocabulary: &HeadingVocabulary) -> CanonicalResult {
        for parser in &self.parsers {
            match parser.parse(raw, vocabulary) {
                Ok(result) => {
                    tracing::debug!(
                        parser = parser.name(),
                        route = ?result.route(),
                        sections = result.sections().len(),
                        "reply normalized"
                    );
                    return result;
                }
                Err(err) => {
                    tracing::trace!(parser = parser.name(), error = %err, "parser declined reply");
                }
            }
        }

        tracing::debug!("no registered parser accepted reply, segmenting");
        segment(raw, vocabulary).into_result(raw)
    }
}

/// Create default registry with the built-in parsers
#[inline]
#[must_use]
pub fn default_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();

    // Structured replies
    registry.register(SectionsJsonParser);
    registry.register(LegacyJsonParser);

    // Free text
    registry.register(HeadingSegmenter);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use preroll_document::ParseRoute;

    struct Declining;

    impl ReplyParser for Declining {
        fn name(&self) -> &'static str {
            "declining"
        }

        fn parse(
            &self,
            _raw: &str,
            _vocabulary: &HeadingVocabulary,
        ) -> Result<CanonicalResult, ParseError> {
            Err(ParseError::UnrecognizedShape)
        }

        fn priority(&self) -> i32 {
            100
        }
    }

    #[test]
    fn default_order_is_by_priority() {
        assert_eq!(
            default_parsers().names(),
            vec!["json-sections", "json-legacy", "headings"]
        );
    }

    #[test]
    fn registration_sorts_by_priority() {
        let mut registry = ParserRegistry::new();
        registry.register(HeadingSegmenter);
        registry.register(Declining);
        assert_eq!(registry.names(), vec!["declining", "headings"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn declined_replies_fall_through() {
        let mut registry = ParserRegistry::new();
        registry.register(Declining);
        let result = registry.parse("SUMMARY\n- Hello", &HeadingVocabulary::default());
        assert_eq!(result.route(), ParseRoute::Headings);
        assert_eq!(result.sections()[0].bullets(), &["Hello".to_string()]);
    }

    #[test]
    fn empty_registry_still_parses() {
        let registry = ParserRegistry::new();
        assert!(registry.is_empty());
        let result = registry.parse("just a line", &HeadingVocabulary::default());
        assert_eq!(result.route(), ParseRoute::Paragraphs);
    }
}
