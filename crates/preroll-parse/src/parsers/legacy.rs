//! Nine-key legacy JSON parser and the legacy projection of sections

use crate::error::ParseError;
use crate::normalize::{normalize_characters, normalize_list, normalize_text};
use crate::parsers::json::{extract_json_object, generation_type};
use crate::parsers::ReplyParser;
use crate::vocabulary::HeadingVocabulary;
use preroll_document::{CanonicalResult, LegacyField, LegacyFixedFields, Section};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Parser for `{executive_summary, scene_overview, ...}` replies
///
/// Accepts snake_case and camelCase keys. Declines objects carrying none of
/// the nine keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyJsonParser;

impl ReplyParser for LegacyJsonParser {
    fn name(&self) -> &'static str {
        "json-legacy"
    }

    fn parse(
        &self,
        raw: &str,
        _vocabulary: &HeadingVocabulary,
    ) -> Result<CanonicalResult, ParseError> {
        let map = extract_json_object(raw)?;
        let fields = fields_from_map(&map).ok_or(ParseError::UnrecognizedShape)?;
        Ok(CanonicalResult::from_legacy(fields, raw).with_generation_type(generation_type(&map)))
    }

    fn priority(&self) -> i32 {
        10
    }
}

fn fields_from_map(map: &Map<String, Value>) -> Option<LegacyFixedFields> {
    let lookup = |field: LegacyField| map.get(field.json_key()).or_else(|| map.get(field.camel_key()));

    if !LegacyField::DISPLAY_ORDER
        .iter()
        .any(|field| lookup(*field).is_some())
    {
        return None;
    }

    let value = |field: LegacyField| lookup(field).unwrap_or(&NULL);
    let list = |field: LegacyField| normalize_list(value(field));

    Some(LegacyFixedFields {
        executive_summary: list(LegacyField::ExecutiveSummary),
        scene_overview: overview_text(value(LegacyField::SceneOverview)),
        key_actions: list(LegacyField::KeyActions),
        characters_roles: normalize_characters(value(LegacyField::CharactersRoles)),
        visual_style: list(LegacyField::VisualStyle),
        sound_design: list(LegacyField::SoundDesign),
        budget_considerations: list(LegacyField::BudgetConsiderations),
        director_notes: list(LegacyField::DirectorNotes),
        assumptions_made: list(LegacyField::AssumptionsMade),
    })
}

/// Scene overview is prose; a list of lines is joined rather than lost
fn overview_text(value: &Value) -> String {
    match value {
        Value::Array(_) => normalize_list(value).join("\n"),
        other => normalize_text(other),
    }
}

/// Fold a section list into the nine fixed fields
///
/// Sections map through their key; sections without a legacy counterpart are
/// skipped. Repeated keys append.
#[must_use]
pub fn project_legacy(sections: &[Section]) -> LegacyFixedFields {
    let mut fields = LegacyFixedFields::default();

    for section in sections.iter().filter(|section| section.has_content()) {
        let Some(field) = section.key().and_then(|key| key.legacy_field()) else {
            continue;
        };
        match field {
            LegacyField::SceneOverview => {
                if !fields.scene_overview.is_empty() {
                    fields.scene_overview.push_str("\n\n");
                }
                fields.scene_overview.push_str(section.body().trim());
            }
            LegacyField::CharactersRoles => fields
                .characters_roles
                .extend(normalize_characters(&Value::String(section.body().to_string()))),
            list_field => {
                if let Some(list) = fields.list_mut(list_field) {
                    list.extend(section.bullets().iter().cloned());
                }
            }
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use preroll_document::{CharacterRole, ParseRoute, SectionKey};

    fn parse(raw: &str) -> Result<CanonicalResult, ParseError> {
        LegacyJsonParser.parse(raw, &HeadingVocabulary::default())
    }

    #[test]
    fn parses_snake_and_camel_keys() {
        let raw = r#"{
            "executive_summary": "- Tense standoff\n- Rain",
            "sceneOverview": "  Rooftop at **night**. ",
            "characters_roles": [{"name": "Ava", "role": "Lead"}],
            "budgetConsiderations": ["Crane", "Rain rig"]
        }"#;
        let result = parse(raw).expect("parsed");
        assert_eq!(result.route(), ParseRoute::JsonLegacy);

        let fields = result.legacy().expect("legacy payload");
        assert_eq!(fields.executive_summary, vec!["Tense standoff", "Rain"]);
        assert_eq!(fields.scene_overview, "Rooftop at night.");
        assert_eq!(fields.characters_roles, vec![CharacterRole::new("Ava", "Lead", "")]);
        assert_eq!(fields.budget_considerations.len(), 2);
        assert!(fields.key_actions.is_empty());
    }

    #[test]
    fn overview_list_is_joined() {
        let fields = parse(r#"{"scene_overview": ["Night", "Rain"]}"#)
            .expect("parsed")
            .legacy()
            .cloned()
            .expect("legacy payload");
        assert_eq!(fields.scene_overview, "Night\nRain");
    }

    #[test]
    fn declines_unknown_objects() {
        assert_eq!(parse(r#"{"title": "x"}"#), Err(ParseError::UnrecognizedShape));
        assert_eq!(parse("free text"), Err(ParseError::NoJsonCandidate));
    }

    #[test]
    fn projection_from_sections() {
        let sections = vec![
            Section::new(0, "Overview", vec!["Night".into()])
                .with_key(Some(SectionKey::SceneOverview)),
            Section::new(1, "Key Beats", vec!["Chase".into()]).with_key(Some(SectionKey::KeyActions)),
            Section::new(2, "Characters", vec!["Ava - Lead".into()])
                .with_key(Some(SectionKey::CharactersRoles)),
            Section::new(3, "Props", vec!["Umbrella".into()]),
            Section::new(4, "More Beats", vec!["Fall".into()]).with_key(Some(SectionKey::KeyActions)),
            Section::new(5, "Visual Style", Vec::new()).with_key(Some(SectionKey::VisualStyle)),
        ];
        let fields = project_legacy(&sections);
        assert_eq!(fields.scene_overview, "Night");
        assert_eq!(fields.key_actions, vec!["Chase", "Fall"]);
        assert_eq!(fields.characters_roles, vec![CharacterRole::new("Ava", "Lead", "")]);
        assert!(fields.visual_style.is_empty());
    }
}
