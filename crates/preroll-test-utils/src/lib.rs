//! Testing utilities for the Preroll workspace
//!
//! Reply fixtures in every shape the pipeline accepts, plus builders for
//! documents and sections.

#![allow(missing_docs)]

use preroll_document::{CanonicalResult, ParseRoute, Section, SectionKey};
use serde_json::json;

pub const SECTIONS_JSON: &str = r#"{
  "generation_type": "Scene Breakdown",
  "sections": [
    {"title": "Scene Objective", "bullets": ["Establish the stakes of the heist", "Introduce Ava"]},
    {"title": "Key Beats", "bullets": ["Ava scales the fence", "Alarm trips", "Chase across the roof"]},
    {"title": "Lighting Approach", "bullets": ["Sodium vapour practicals", "Hard rim light on wet surfaces"]},
    {"title": "Budget Plan", "bullets": ["LOW BUDGET: $5k-10k handheld", "MEDIUM BUDGET: $10k-25k with drone", "HIGH BUDGET: $25k+ with crane"]}
  ]
}"#;

pub const FENCED_SECTIONS_JSON: &str = "Here is your breakdown:\n```json\n{\"generation_type\": \"Shot List\", \
\"sections\": [{\"title\": \"1. Opening Shot\", \"bullets\": \"- Wide of the harbour\\n- Slow push in\"}]}\n```\nLet me know!";

pub const LEGACY_JSON: &str = r#"{
  "executive_summary": ["A tense rooftop standoff in the rain"],
  "scene_overview": "Night. A rooftop above the harbour.\nTwo rivals meet.",
  "key_actions": "- Ava arrives\n- Ben draws\n- Thunder",
  "characters_roles": [{"name": "Ava", "role": "Lead", "notes": "Ex-detective"}, {"name": "Ben", "role": "Rival"}],
  "visual_style": ["Teal and orange", "Long lenses"],
  "sound_design": "Rain bed, distant foghorn",
  "budget_considerations": ["Rain towers", "Night permits"],
  "director_notes": [],
  "assumptions_made": null
}"#;

pub const LEGACY_CAMEL_JSON: &str = r#"{"executiveSummary": "- Quiet reunion", "keyActions": ["Hug", "Rain stops"]}"#;

pub const HEADED_BREAKDOWN: &str = "\
Here is the breakdown you asked for.

## EXECUTIVE SUMMARY
- A heist goes wrong on a rainy rooftop.

**Scene Overview:** Night exterior above the harbour.
Wind and rain, neon signage below.

KEY ACTIONS & BEATS
1. Ava scales the fence
2. The alarm trips
3. Chase across the roof

Characters & Roles:
- Ava - Lead - Ex-detective, restless
- Ben: Rival

PRODUCTION TIMELINE
- Day 1: rooftop
- Day 2: pickups

Sound Design
- Rain bed
SFX: distant foghorn

Budget:
- Rain towers
- Night permits";

pub const SCREENPLAY_REPLY: &str = "\
SCREENPLAY
Tone: Noir

INT. WAREHOUSE - NIGHT
LOCATION: Dock 9
TIME: 02:00
Ava slips through the loading door.

AVA
Where is it?

EXT. ROOFTOP - DAWN
SFX: thunder
Ben waits at the edge.

CHARACTERS
- Ava - Lead
- Ben - Rival";

pub const BUDGET_TIERS_REPLY: &str = "\
SUMMARY
- Two-day shoot.

ESTIMATED BUDGET
LOW BUDGET: $5K-10K
- Handheld, available light
MEDIUM BUDGET: $10K-25K
- Drone unit
HIGH BUDGET: $25K+
- Crane and rain towers";

pub const PARAGRAPH_REPLY: &str = "\
The camera drifts over the harbour at night.
Rain needles the water.

Ava waits under a flickering sign.";

pub const MALFORMED_JSON_REPLY: &str = "{\"sections\": [ {\"title\": \"Broken\"\nKEY ACTIONS\n- Chase";

/// Every fixture with a short name
#[must_use]
pub fn all_fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        ("sections_json", SECTIONS_JSON),
        ("fenced_sections_json", FENCED_SECTIONS_JSON),
        ("legacy_json", LEGACY_JSON),
        ("legacy_camel_json", LEGACY_CAMEL_JSON),
        ("headed_breakdown", HEADED_BREAKDOWN),
        ("screenplay", SCREENPLAY_REPLY),
        ("budget_tiers", BUDGET_TIERS_REPLY),
        ("paragraphs", PARAGRAPH_REPLY),
        ("malformed_json", MALFORMED_JSON_REPLY),
    ]
}

/// Free-text fixtures only
#[must_use]
pub fn free_text_fixtures() -> Vec<(&'static str, &'static str)> {
    all_fixtures()
        .into_iter()
        .filter(|(_, raw)| !raw.trim_start().starts_with('{') && !raw.contains("```json"))
        .collect()
}

/// Section at position 0 with string bullets
#[must_use]
pub fn section(title: &str, bullets: &[&str]) -> Section {
    Section::new(0, title, bullets.iter().map(|b| (*b).to_string()).collect())
}

/// Section carrying a canonical key
#[must_use]
pub fn keyed_section(title: &str, key: SectionKey, bullets: &[&str]) -> Section {
    section(title, bullets).with_key(Some(key))
}

/// Document from sections, as if parsed from `sections` JSON
#[must_use]
pub fn document(sections: Vec<Section>) -> CanonicalResult {
    CanonicalResult::from_sections(sections, ParseRoute::JsonSections, "")
}

/// `sections` JSON reply built from `(title, bullets)` pairs
#[must_use]
pub fn sections_reply(generation_type: &str, sections: &[(&str, &[&str])]) -> String {
    let sections: Vec<_> = sections
        .iter()
        .map(|(title, bullets)| json!({"title": title, "bullets": bullets}))
        .collect();
    json!({"generation_type": generation_type, "sections": sections}).to_string()
}

/// Service envelope carrying `output`
#[must_use]
pub fn envelope(output: &str) -> String {
    json!({ "output": output }).to_string()
}
