//! Field normalizers
//!
//! Coerce heterogeneous JSON values or raw text blocks into canonical lists,
//! plain text or character records. Every function here is total: wrong-typed
//! or malformed input degrades to empty output.

use once_cell::sync::Lazy;
use preroll_document::CharacterRole;
use regex::Regex;
use serde_json::Value;

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*•]|\d+[).])\s+").expect("valid list marker regex"));

static HEADING_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#{1,6}\s+)+").expect("valid heading marks regex"));

static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\r?\n\s*").expect("valid line break regex"));

static CHARACTER_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s[-–—:]\s|:\s").expect("valid character separator regex"));

/// Keys whose string value stands in for an object inside a list
const ITEM_TEXT_KEYS: [&str; 6] = ["text", "content", "value", "title", "name", "item"];

/// Remove emphasis markers and leading `#` heading marks, then trim
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let without_emphasis = text.replace(['*', '`'], "").replace("__", "");
    HEADING_MARKS
        .replace(without_emphasis.trim(), "")
        .trim()
        .to_string()
}

/// Remove one leading bullet (`-`, `*`, `•`) or number (`1.`, `2)`) marker
#[must_use]
pub fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

/// Line starts with a bullet or number marker
#[inline]
#[must_use]
pub fn is_list_item(line: &str) -> bool {
    LIST_MARKER.is_match(line)
}

/// Split text into cleaned bullet strings, one per non-empty line
#[must_use]
pub fn split_to_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_markdown(strip_list_marker(line)))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Group non-blank lines into paragraphs separated by blank lines
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

/// List Normalizer
///
/// - array → each item stringified, line breaks collapsed, markdown stripped
/// - string → [`split_to_bullets`]
/// - object → `Key: value` items
/// - number/bool → one item; null → nothing
///
/// Empty items are dropped. Applying the normalizer to its own output
/// returns the same list.
#[must_use]
pub fn normalize_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(stringify_item)
            .map(|item| clean_item(&item))
            .filter(|item| !item.is_empty())
            .collect(),
        Value::String(text) => split_to_bullets(text),
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| {
                stringify_item(value).map(|text| format!("{}: {}", key.trim(), text.trim()))
            })
            .map(|item| clean_item(&item))
            .filter(|item| !item.is_empty())
            .collect(),
        Value::Number(number) => vec![number.to_string()],
        Value::Bool(flag) => vec![flag.to_string()],
        Value::Null => Vec::new(),
    }
}

/// Text Normalizer: strings are markdown-stripped and trimmed, anything else is empty
#[must_use]
pub fn normalize_text(value: &Value) -> String {
    match value {
        Value::String(text) => strip_markdown(text),
        _ => String::new(),
    }
}

/// Character Normalizer
///
/// - array of objects → `{name, role, notes}`, missing keys become empty
/// - array of strings → each string is a name
/// - string → bulleted lines split on ` - ` / `:` into name, role, notes
#[must_use]
pub fn normalize_characters(value: &Value) -> Vec<CharacterRole> {
    let records: Vec<CharacterRole> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(CharacterRole::new(strip_markdown(name), "", "")),
                Value::Object(record) => Some(CharacterRole::new(
                    record_field(record, "name"),
                    record_field(record, "role"),
                    record_field(record, "notes"),
                )),
                _ => None,
            })
            .collect(),
        Value::String(text) => split_to_bullets(text)
            .iter()
            .map(|line| character_from_line(line))
            .collect(),
        _ => Vec::new(),
    };

    records.into_iter().filter(|record| !record.is_empty()).collect()
}

/// Split one `Name - Role - Notes` / `Name: Role` line
fn character_from_line(line: &str) -> CharacterRole {
    let parts: Vec<&str> = CHARACTER_SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => CharacterRole::new(line, "", ""),
        [name] => CharacterRole::new(name, "", ""),
        [name, role] => CharacterRole::new(name, role, ""),
        [name, role, notes @ ..] => CharacterRole::new(name, role, notes.join(" ")),
    }
}

fn record_field(record: &serde_json::Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(stringify_item)
        .map(|text| strip_markdown(&text))
        .unwrap_or_default()
}

fn clean_item(item: &str) -> String {
    strip_markdown(&LINE_BREAKS.replace_all(item, " "))
}

/// Scalar-ish string form of a JSON value; `None` for null
pub(crate) fn stringify_item(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(stringify_item).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(map) => ITEM_TEXT_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).map(str::to_string))
            .or_else(|| Some(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strip_markdown_removes_emphasis_and_heading_marks() {
        assert_eq!(strip_markdown("**Bold** and `code`"), "Bold and code");
        assert_eq!(strip_markdown("## # Title  "), "Title");
        assert_eq!(strip_markdown("__under__score"), "underscore");
        assert_eq!(strip_markdown("snake_case_name"), "snake_case_name");
        assert_eq!(strip_markdown("#hashtag"), "#hashtag");
    }

    #[test]
    fn strip_list_marker_removes_one_marker() {
        assert_eq!(strip_list_marker("- item"), "item");
        assert_eq!(strip_list_marker("• item"), "item");
        assert_eq!(strip_list_marker("12) item"), "item");
        assert_eq!(strip_list_marker("- 1. item"), "1. item");
        assert_eq!(strip_list_marker("-item"), "-item");
        assert_eq!(strip_list_marker("**bold**"), "**bold**");
    }

    #[test]
    fn list_from_string_strips_markers() {
        let text = "- First beat\n* **Second** beat\n\n3. Third beat\n   ";
        assert_eq!(
            normalize_list(&json!(text)),
            vec!["First beat", "Second beat", "Third beat"]
        );
    }

    #[test]
    fn list_from_array_stringifies() {
        let value = json!(["  one ", 2, true, null, "", "multi\nline", {"text": "from object"}]);
        assert_eq!(
            normalize_list(&value),
            vec!["one", "2", "true", "multi line", "from object"]
        );
    }

    #[test]
    fn list_from_object_uses_key_value_items() {
        let value = json!({"Sound": "High", "VFX": "Low"});
        assert_eq!(normalize_list(&value), vec!["Sound: High", "VFX: Low"]);
    }

    #[test]
    fn list_from_scalars() {
        assert_eq!(normalize_list(&json!(42)), vec!["42"]);
        assert!(normalize_list(&Value::Null).is_empty());
    }

    #[test]
    fn list_normalization_is_idempotent_on_examples() {
        for value in [
            json!("- a\n- **b**\n1. c"),
            json!(["- a", "1. b", "**c**"]),
            json!("## Heading\n* item"),
        ] {
            let once = normalize_list(&value);
            let twice = normalize_list(&json!(once.clone()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn text_normalizer() {
        assert_eq!(normalize_text(&json!("  **Night** exterior ")), "Night exterior");
        assert_eq!(normalize_text(&json!(["not", "text"])), "");
        assert_eq!(normalize_text(&Value::Null), "");
    }

    #[test]
    fn characters_from_objects() {
        let value = json!([
            {"name": "Ava", "role": "Lead", "notes": "Driven"},
            {"name": "Ben"},
            {"role": 7},
            {}
        ]);
        let characters = normalize_characters(&value);
        assert_eq!(characters.len(), 3);
        assert_eq!(characters[0], CharacterRole::new("Ava", "Lead", "Driven"));
        assert_eq!(characters[1], CharacterRole::new("Ben", "", ""));
        assert_eq!(characters[2], CharacterRole::new("", "7", ""));
    }

    #[test]
    fn characters_from_strings() {
        let characters = normalize_characters(&json!(["Ava", "  ", "Ben"]));
        let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ava", "Ben"]);
    }

    #[test]
    fn characters_from_text_lines() {
        let text = "- Ava - Lead - Ex-detective, restless\n- Ben: Rival\n- Chorus";
        let characters = normalize_characters(&json!(text));
        assert_eq!(characters[0], CharacterRole::new("Ava", "Lead", "Ex-detective, restless"));
        assert_eq!(characters[1], CharacterRole::new("Ben", "Rival", ""));
        assert_eq!(characters[2], CharacterRole::new("Chorus", "", ""));
    }

    #[test]
    fn characters_from_wrong_type() {
        assert!(normalize_characters(&json!(12)).is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First line\nsecond line\n\n\n  Next para  \n";
        assert_eq!(split_paragraphs(text), vec!["First line\nsecond line", "Next para"]);
        assert!(split_paragraphs("   \n  ").is_empty());
    }
}
