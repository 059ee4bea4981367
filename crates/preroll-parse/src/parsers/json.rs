//! `sections` JSON parser
//!
//! Uses `serde_json` on the outermost `{...}` span of the reply, so fenced or
//! chatty replies still parse.

use crate::error::ParseError;
use crate::normalize::{normalize_list, strip_markdown, stringify_item};
use crate::parsers::ReplyParser;
use crate::vocabulary::HeadingVocabulary;
use once_cell::sync::Lazy;
use preroll_document::{CanonicalResult, ParseRoute, Section};
use regex::Regex;
use serde_json::{Map, Value};

/// Keys an element may use for its title, first non-empty wins
const TITLE_KEYS: [&str; 4] = ["title", "heading", "name", "section"];

/// Keys an element may use for its bullets, first non-empty list wins
const BULLET_KEYS: [&str; 5] = ["bullets", "items", "points", "content", "lines"];

static TITLE_NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[).]\s*").expect("valid title numbering regex"));

/// Parse the outermost `{...}` span of `raw` as a JSON object
///
/// # Errors
///
/// - [`ParseError::NoJsonCandidate`] when the reply has no `{`
/// - [`ParseError::Syntax`] when the span is not valid JSON
/// - [`ParseError::NotAnObject`] when it parses to something else
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, ParseError> {
    let trimmed = raw.trim();
    let start = trimmed.find('{').ok_or(ParseError::NoJsonCandidate)?;
    let candidate = match trimmed.rfind('}') {
        Some(end) if end > start => &trimmed[start..=end],
        _ => trimmed,
    };

    match serde_json::from_str(candidate).map_err(|err| ParseError::syntax(&err))? {
        Value::Object(map) => Ok(map),
        _ => Err(ParseError::NotAnObject),
    }
}

/// `generation_type` (or `generationType`) reported by the reply
#[must_use]
pub fn generation_type(map: &Map<String, Value>) -> Option<String> {
    ["generation_type", "generationType"]
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(strip_markdown)
        .find(|value| !value.is_empty())
}

/// Parser for `{generation_type, sections: [{title, bullets}]}` replies
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionsJsonParser;

impl ReplyParser for SectionsJsonParser {
    fn name(&self) -> &'static str {
        "json-sections"
    }

    fn parse(
        &self,
        raw: &str,
        vocabulary: &HeadingVocabulary,
    ) -> Result<CanonicalResult, ParseError> {
        let map = extract_json_object(raw)?;
        let Some(Value::Array(items)) = map.get("sections") else {
            return Err(ParseError::UnrecognizedShape);
        };

        let sections: Vec<Section> = items
            .iter()
            .filter_map(|item| section_from_value(item, vocabulary))
            .collect();
        if sections.is_empty() {
            return Err(ParseError::NoSections);
        }

        Ok(CanonicalResult::from_sections(sections, ParseRoute::JsonSections, raw)
            .with_generation_type(generation_type(&map)))
    }

    fn priority(&self) -> i32 {
        20
    }
}

/// One `sections` element; untitled or non-object elements are dropped
fn section_from_value(item: &Value, vocabulary: &HeadingVocabulary) -> Option<Section> {
    let record = item.as_object()?;

    let title = TITLE_KEYS
        .iter()
        .filter_map(|key| record.get(*key).and_then(stringify_item))
        .map(|title| clean_title(&title))
        .find(|title| !title.is_empty())?;

    let bullets = BULLET_KEYS
        .iter()
        .filter_map(|key| record.get(*key))
        .map(normalize_list)
        .find(|bullets| !bullets.is_empty())
        .unwrap_or_default();

    let key = vocabulary.key_for_title(&title);
    Some(Section::new(0, title, bullets).with_key(key))
}

fn clean_title(title: &str) -> String {
    let stripped = strip_markdown(title);
    TITLE_NUMBERING
        .replace(&stripped, "")
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_string()
}
