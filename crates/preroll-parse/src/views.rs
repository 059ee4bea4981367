//! Specialised views over a canonical document
//!
//! Each view locates its section by flavour and parses it further, falling
//! back to wider text when the section is missing or unhelpful.

use crate::budget::{cost_lines, is_tier_heading, split_budget};
use crate::classify::is_scene_heading;
use crate::normalize::normalize_characters;
use crate::parsers::project_legacy;
use crate::scene::{parse_scene_overview, SceneOverview};
use preroll_document::{
    BudgetTier, BudgetTierSlice, CanonicalResult, CharacterRole, LegacyFixedFields, ParseRoute,
    SectionFlavor,
};
use serde::Serialize;
use serde_json::Value;

/// Budget information recovered from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BudgetBreakdown {
    /// Low, medium and high slices (absent tiers have empty text)
    Tiered(Vec<BudgetTierSlice>),
    /// Budget text without tier headings
    Undifferentiated(String),
    /// Cost-related lines gathered from the whole document
    KeywordLines(String),
    /// No budget information
    Missing,
}

impl BudgetBreakdown {
    /// Slice for `tier`, when tiered
    #[must_use]
    pub fn tier(&self, tier: BudgetTier) -> Option<&BudgetTierSlice> {
        match self {
            Self::Tiered(slices) => slices.iter().find(|slice| slice.tier == tier),
            _ => None,
        }
    }

    /// All budget text
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Tiered(slices) => Some(
                slices
                    .iter()
                    .filter(|slice| !slice.is_empty())
                    .map(|slice| slice.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            ),
            Self::Undifferentiated(text) | Self::KeywordLines(text) => Some(text.clone()),
            Self::Missing => None,
        }
    }

    /// No budget information
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Free-text routes keep the reply; structured routes use section bodies
fn document_text(result: &CanonicalResult) -> String {
    if result.route().is_free_text() {
        return result.raw().to_string();
    }
    result
        .sections()
        .iter()
        .filter(|section| section.has_content())
        .map(|section| format!("{}\n{}", section.title(), section.body()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Body of the first section with `flavor`
///
/// For free text, unrecognized headings right after the section are
/// appended with their titles while they belong to it: tier labels under a
/// budget, character cues inside a screenplay. The first heading that does
/// not belong ends the run.
fn flavored_text(result: &CanonicalResult, flavor: SectionFlavor) -> Option<String> {
    let sections = result.sections();
    let start = sections.iter().position(|section| section.flavor() == flavor)?;

    let mut text = sections[start].body().to_string();
    if result.route() == ParseRoute::Headings {
        for follower in &sections[start + 1..] {
            if follower.key().is_some() || !belongs_to(flavor, follower.title(), &text) {
                break;
            }
            text.push('\n');
            text.push_str(follower.title());
            if !follower.body().is_empty() {
                text.push('\n');
                text.push_str(follower.body());
            }
        }
    }

    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Longest speaker cue, in words
const MAX_CUE_WORDS: usize = 4;

fn belongs_to(flavor: SectionFlavor, title: &str, text_so_far: &str) -> bool {
    match flavor {
        SectionFlavor::Budget => is_tier_heading(title),
        SectionFlavor::SceneOverview => {
            text_so_far.lines().any(is_scene_heading) && is_speaker_cue(title)
        }
        _ => false,
    }
}

/// Short all-caps name line such as `AVA` or `BEN (V.O.)`
fn is_speaker_cue(title: &str) -> bool {
    title.split_whitespace().count() <= MAX_CUE_WORDS
        && title.chars().any(char::is_alphabetic)
        && !title.chars().any(char::is_lowercase)
        && !title.contains(':')
        && !is_scene_heading(title)
}

/// Budget tiers of a document
///
/// Tries the budget section, then the whole document, then keyword lines.
#[must_use]
pub fn budget_breakdown(result: &CanonicalResult) -> BudgetBreakdown {
    let section_text = flavored_text(result, SectionFlavor::Budget);

    if let Some(text) = &section_text {
        let split = split_budget(text);
        if split.has_tiers() {
            return BudgetBreakdown::Tiered(split.tiers);
        }
    }

    let whole = document_text(result);
    let split = split_budget(&whole);
    if split.has_tiers() {
        return BudgetBreakdown::Tiered(split.tiers);
    }

    if let Some(text) = section_text {
        return BudgetBreakdown::Undifferentiated(split_budget(&text).block);
    }

    let lines = cost_lines(whole.lines());
    if lines.is_empty() {
        BudgetBreakdown::Missing
    } else {
        BudgetBreakdown::KeywordLines(lines.join("\n"))
    }
}

/// Scene overview of a document
///
/// Uses the scene or screenplay section, else the whole document.
#[must_use]
pub fn scene_overview(result: &CanonicalResult) -> SceneOverview {
    let text = flavored_text(result, SectionFlavor::SceneOverview)
        .unwrap_or_else(|| document_text(result));
    parse_scene_overview(&text)
}

/// Character records of a document
#[must_use]
pub fn characters(result: &CanonicalResult) -> Vec<CharacterRole> {
    if let Some(fields) = result.legacy() {
        return fields.characters_roles.clone();
    }
    flavored_text(result, SectionFlavor::Characters)
        .map(|text| normalize_characters(&Value::String(text)))
        .unwrap_or_default()
}

/// Nine fixed fields of any document
#[must_use]
pub fn legacy_fields(result: &CanonicalResult) -> LegacyFixedFields {
    match result.legacy() {
        Some(fields) => fields.clone(),
        None => project_legacy(result.sections()),
    }
}
