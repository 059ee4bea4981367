//! Error types for reply parsing
//!
//! Every variant is a routing signal between parsers: a parser that declines
//! a reply returns one, and the registry moves on to the next. The heading
//! segmenter never fails, so none of these reach callers of
//! [`Pipeline::parse`](crate::Pipeline::parse).

/// Why a parser declined a reply
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Reply holds no `{` to start a JSON object
    #[error("no JSON object candidate in reply")]
    NoJsonCandidate,

    /// Candidate text is not valid JSON
    #[error("invalid JSON: {0}")]
    Syntax(String),

    /// Valid JSON, but not an object
    #[error("JSON value is not an object")]
    NotAnObject,

    /// `sections` array present but no element survived normalization
    #[error("sections array yielded no usable sections")]
    NoSections,

    /// Object has neither a `sections` array nor any known field
    #[error("JSON object has no recognized shape")]
    UnrecognizedShape,
}

impl ParseError {
    /// Create syntax error from a serde error
    #[must_use]
    pub fn syntax(err: &serde_json::Error) -> Self {
        Self::Syntax(err.to_string())
    }

    /// The reply looked like JSON
    ///
    /// `false` for replies that never had an object candidate, which is the
    /// ordinary path for free text.
    #[inline]
    #[must_use]
    pub fn looked_like_json(&self) -> bool {
        !matches!(self, Self::NoJsonCandidate)
    }
}

/// Result alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_carries_serde_message() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").expect_err("invalid");
        let parse_err = ParseError::syntax(&err);
        assert!(parse_err.to_string().starts_with("invalid JSON:"));
        assert!(parse_err.looked_like_json());
    }

    #[test]
    fn no_candidate_is_not_json() {
        assert!(!ParseError::NoJsonCandidate.looked_like_json());
    }
}
