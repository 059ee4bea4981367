//! Prompt composition
//!
//! The endpoint receives a brief followed by one line per production
//! parameter:
//!
//! ```text
//! Project brief:
//! <prompt>
//!
//! Production parameters:
//! Generation type: Scene Breakdown
//! Genre: Unspecified
//! ...
//! ```

use crate::error::{ClientError, Result};
use crate::params::GenerationParams;

/// Characters kept by [`summarize_prompt`]
pub const SUMMARY_CHARS: usize = 140;

/// Shown in place of an empty prompt summary
pub const EMPTY_SUMMARY: &str = "—";

/// Compose the full prompt for `params`
///
/// # Errors
/// - `ClientError::EmptyPrompt` if `prompt` is blank
/// - `ClientError::PromptTooLong` if the composed text exceeds `max_chars`
pub fn compose_prompt(prompt: &str, params: &GenerationParams, max_chars: usize) -> Result<String> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(ClientError::EmptyPrompt);
    }

    let mut lines = vec![
        "Project brief:".to_string(),
        prompt.to_string(),
        String::new(),
        "Production parameters:".to_string(),
    ];
    lines.extend(
        params
            .lines()
            .iter()
            .map(|(label, value)| format!("{label}: {value}")),
    );
    let composed = lines.join("\n");

    let len = composed.chars().count();
    if len > max_chars {
        return Err(ClientError::PromptTooLong { len, max: max_chars });
    }
    Ok(composed)
}

/// One-line preview of a prompt for listings
#[must_use]
pub fn summarize_prompt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    match trimmed.char_indices().nth(SUMMARY_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GenerationType;
    use pretty_assertions::assert_eq;

    #[test]
    fn composes_brief_and_parameters() {
        let params = GenerationParams::new()
            .with_genre("Noir")
            .with_scene_complexity("High")
            .with_generation_type(GenerationType::BudgetPlan);
        let composed = compose_prompt("  A rooftop chase in the rain.\n", &params, 3000)
            .expect("valid prompt");
        assert_eq!(
            composed,
            "Project brief:\n\
             A rooftop chase in the rain.\n\
             \n\
             Production parameters:\n\
             Generation type: Budget Plan\n\
             Genre: Noir\n\
             Budget tier: Unspecified\n\
             Runtime estimate: Unspecified\n\
             Location count: Unspecified\n\
             Scene complexity: High"
        );
    }

    #[test]
    fn rejects_blank_prompt() {
        assert_eq!(
            compose_prompt(" \n\t", &GenerationParams::new(), 3000),
            Err(ClientError::EmptyPrompt)
        );
    }

    #[test]
    fn limit_applies_to_composed_text() {
        let params = GenerationParams::new();
        let fits = compose_prompt("x", &params, 3000).expect("fits");
        let len = fits.chars().count();

        assert!(compose_prompt("x", &params, len).is_ok());
        assert_eq!(
            compose_prompt("x", &params, len - 1),
            Err(ClientError::PromptTooLong { len, max: len - 1 })
        );
    }

    #[test]
    fn summary_truncates_on_characters() {
        assert_eq!(summarize_prompt("   "), EMPTY_SUMMARY);
        assert_eq!(summarize_prompt(" short brief "), "short brief");

        let long = "é".repeat(SUMMARY_CHARS + 10);
        let summary = summarize_prompt(&long);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), SUMMARY_CHARS + 3);

        let exact = "a".repeat(SUMMARY_CHARS);
        assert_eq!(summarize_prompt(&exact), exact);
    }
}
