//! Plain-text rendering
//!
//! Output re-parses to the same document: titles become headings or captions,
//! bullets become `- ` lines.

use crate::scene::SceneOverview;
use preroll_document::{BudgetTierSlice, CanonicalResult, CharacterRole, Section, PLACEHOLDER};

/// `- item` lines
#[must_use]
pub fn format_bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title line followed by bullets; no bullets renders the placeholder
#[must_use]
pub fn format_section(section: &Section) -> String {
    let bullets = if section.bullets().is_empty() {
        format_bullets(&[PLACEHOLDER])
    } else {
        format_bullets(section.bullets())
    };
    format!("{}\n{}", section.title(), bullets)
}

/// Every section, separated by a blank line
#[must_use]
pub fn format_document(result: &CanonicalResult) -> String {
    result
        .sections()
        .iter()
        .map(format_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One line per character
#[must_use]
pub fn format_characters(characters: &[CharacterRole]) -> String {
    let lines: Vec<String> = characters
        .iter()
        .map(|character| {
            let mut line = character.display_name().to_string();
            if !character.role.is_empty() {
                line.push_str(" - ");
                line.push_str(&character.role);
            }
            if !character.notes.is_empty() {
                line.push_str(" - ");
                line.push_str(&character.notes);
            }
            line
        })
        .collect();
    format_bullets(&lines)
}

/// Tier text, or a placeholder for an absent tier
#[must_use]
pub fn format_tier(slice: &BudgetTierSlice) -> String {
    if slice.is_empty() {
        format!("{}\n{}", slice.tier.heading(), format_bullets(&[PLACEHOLDER]))
    } else {
        slice.text.clone()
    }
}

/// Scene overview as labelled lines, scenes and paragraphs
#[must_use]
pub fn format_scene_overview(overview: &SceneOverview) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if !overview.key_value_pairs.is_empty() {
        blocks.push(
            overview
                .key_value_pairs
                .iter()
                .map(|pair| format!("{}: {}", pair.label, pair.value))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    if !overview.preamble.is_empty() {
        blocks.push(overview.preamble.join("\n"));
    }
    for scene in &overview.scene_blocks {
        let mut lines = vec![scene.heading.clone()];
        lines.extend(
            scene
                .metadata
                .iter()
                .map(|meta| format!("{}: {}", meta.label, meta.value)),
        );
        lines.extend(scene.body.iter().cloned());
        blocks.push(lines.join("\n"));
    }
    blocks.extend(overview.paragraphs.iter().cloned());

    blocks.join("\n\n")
}
