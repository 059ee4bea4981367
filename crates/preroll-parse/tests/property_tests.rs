use preroll_document::{slugify, ParseRoute, Section, PLACEHOLDER};
use preroll_parse::{format_document, format_section, normalize_list, parse, parse_scene_overview};
use preroll_test_utils::sections_reply;
use proptest::prelude::*;
use serde_json::Value;
use std::collections::HashSet;

/// Lines that exercise every classifier rule
fn reply_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("SUMMARY".to_string()),
        Just("## Budget Considerations".to_string()),
        Just("**Key Actions:** chase".to_string()),
        Just("Characters:".to_string()),
        Just("INT. KITCHEN - NIGHT".to_string()),
        Just("LOCATION: Dock 9".to_string()),
        Just("LOW BUDGET: $5k".to_string()),
        Just("1. Opening Shot".to_string()),
        Just("{\"sections\": [".to_string()),
        "[-*] [A-Za-z ]{1,20}",
        "[A-Z ]{1,15}",
        "[A-Za-z ,.:]{0,40}",
    ]
}

fn reply_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(reply_line(), 0..30).prop_map(|lines| lines.join("\n"))
}

fn assert_well_formed(raw: &str) {
    let doc = parse(raw);
    assert_eq!(doc.raw(), raw);
    assert_eq!(doc.is_empty(), doc.route() == ParseRoute::Empty);

    for (position, section) in doc.sections().iter().enumerate() {
        assert!(!section.bullets().is_empty());
        assert_eq!(
            section.id().as_str(),
            format!("{}-{}", slugify(section.title()), position)
        );
    }

    if doc.route() == ParseRoute::Headings {
        let mut keys = HashSet::new();
        for key in doc.sections().iter().filter_map(Section::key) {
            assert!(keys.insert(key), "vocabulary key {key:?} appears twice");
        }
    }
}

proptest! {
    #[test]
    fn prop_parse_is_total_on_arbitrary_text(raw in "(?s).{0,400}") {
        assert_well_formed(&raw);
    }

    #[test]
    fn prop_parse_is_total_on_reply_like_text(raw in reply_text()) {
        assert_well_formed(&raw);
    }

    #[test]
    fn prop_list_normalization_is_idempotent(raw in "(?s).{0,200}") {
        let once = normalize_list(&Value::String(raw));
        let twice = normalize_list(&Value::from(once.clone()));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_array_normalization_is_idempotent(
        items in proptest::collection::vec("(?s).{0,40}", 0..8)
    ) {
        let once = normalize_list(&Value::from(items));
        let twice = normalize_list(&Value::from(once.clone()));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_scenes_and_paragraphs_are_exclusive(raw in reply_text()) {
        let overview = parse_scene_overview(&raw);
        prop_assert!(overview.scene_blocks.is_empty() || overview.paragraphs.is_empty());
    }

    #[test]
    fn prop_empty_sections_render_placeholder(
        title in "[A-Za-z][A-Za-z ]{0,20}",
        position in 0usize..50
    ) {
        let rendered = format_section(&Section::new(position, title.clone(), Vec::new()));
        prop_assert_eq!(rendered, format!("{title}\n- {PLACEHOLDER}"));
    }

    #[test]
    fn prop_json_sections_keep_order_and_titles(
        sections in proptest::collection::vec(
            (
                "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10}){0,2}",
                proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,3}", 0..4),
            ),
            1..6,
        )
    ) {
        let pairs: Vec<(&str, Vec<&str>)> = sections
            .iter()
            .map(|(title, bullets)| (title.as_str(), bullets.iter().map(String::as_str).collect()))
            .collect();
        let borrowed: Vec<(&str, &[&str])> = pairs
            .iter()
            .map(|(title, bullets)| (*title, bullets.as_slice()))
            .collect();

        let doc = parse(&sections_reply("Scene Breakdown", &borrowed));
        prop_assert_eq!(doc.route(), ParseRoute::JsonSections);
        prop_assert_eq!(doc.sections().len(), sections.len());

        for (position, ((title, bullets), section)) in sections.iter().zip(doc.sections()).enumerate() {
            prop_assert_eq!(section.title(), title.as_str());
            prop_assert_eq!(section.id().as_str(), format!("{}-{}", slugify(title), position));
            if bullets.is_empty() {
                prop_assert_eq!(section.bullets(), &[PLACEHOLDER.to_string()][..]);
            } else {
                prop_assert_eq!(section.bullets(), bullets.as_slice());
            }
        }
    }

    #[test]
    fn prop_formatted_json_documents_reparse_unchanged(
        sections in proptest::collection::vec(
            (
                prop_oneof![
                    "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10}){0,2}",
                    "[A-Z][a-z]{2,10}: [A-Z][a-z]{2,10}",
                    "[A-Z][a-z]{2,10}( [a-z]{2,8}){1,3}\\.",
                    Just("Key Actions: Act Two".to_string()),
                    Just("Budget".to_string()),
                    Just("Notes on tone.".to_string()),
                ],
                proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,3}", 0..4),
            ),
            1..6,
        )
    ) {
        let pairs: Vec<(&str, Vec<&str>)> = sections
            .iter()
            .map(|(title, bullets)| (title.as_str(), bullets.iter().map(String::as_str).collect()))
            .collect();
        let borrowed: Vec<(&str, &[&str])> = pairs
            .iter()
            .map(|(title, bullets)| (*title, bullets.as_slice()))
            .collect();

        let doc = parse(&sections_reply("Scene Breakdown", &borrowed));
        let mut keys = HashSet::new();
        prop_assume!(doc.sections().iter().filter_map(Section::key).all(|key| keys.insert(key)));

        let text = format_document(&doc);
        let again = parse(&text);
        prop_assert_eq!(again.route(), ParseRoute::Headings);
        prop_assert_eq!(format_document(&again), text);

        let titles: Vec<&str> = doc.sections().iter().map(Section::title).collect();
        let reparsed: Vec<&str> = again.sections().iter().map(Section::title).collect();
        prop_assert_eq!(reparsed, titles);
        for (before, after) in doc.sections().iter().zip(again.sections()) {
            prop_assert_eq!(before.key(), after.key());
            prop_assert_eq!(before.id().as_str(), after.id().as_str());
        }
    }
}
