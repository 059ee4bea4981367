//! Budget tier splitting
//!
//! Finds the budget block of a text and cuts it into `LOW`, `MEDIUM` and
//! `HIGH BUDGET` slices. Each slice runs from its heading line to the next
//! tier heading, whatever order the tiers appear in.

use crate::normalize::{strip_list_marker, strip_markdown};
use once_cell::sync::Lazy;
use preroll_document::{BudgetTier, BudgetTierSlice};
use regex::Regex;

static COST_SIGNAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:budget|costs?|usd|inr|gbp|eur)\b|\$").expect("valid cost regex")
});

/// Headings that open a budget block
const BLOCK_HEADINGS: [&str; 2] = ["ESTIMATED BUDGET", "BUDGET"];

/// A text cut at its budget block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetSplit {
    /// Text before the budget block
    pub rest: String,
    /// Budget block, heading line included
    pub block: String,
    /// All three tiers in low/medium/high order, or empty when the block
    /// names no tier
    pub tiers: Vec<BudgetTierSlice>,
}

impl BudgetSplit {
    /// At least one tier heading was found
    #[inline]
    #[must_use]
    pub fn has_tiers(&self) -> bool {
        self.tiers.iter().any(|slice| !slice.is_empty())
    }

    /// Slice for `tier`
    #[must_use]
    pub fn tier(&self, tier: BudgetTier) -> Option<&BudgetTierSlice> {
        self.tiers.iter().find(|slice| slice.tier == tier)
    }
}

/// Split `text` into the part before its budget block, the block, and tiers
///
/// Without a budget heading the whole text is treated as the block.
#[must_use]
pub fn split_budget(text: &str) -> BudgetSplit {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| {
            let normalized = normalize_line(line);
            BLOCK_HEADINGS
                .iter()
                .any(|heading| normalized.starts_with(heading))
        })
        .unwrap_or(0);

    let block_lines = &lines[start..];
    let mut found: Vec<(usize, BudgetTier)> = BudgetTier::ALL
        .iter()
        .filter_map(|tier| {
            block_lines
                .iter()
                .position(|line| normalize_line(line).starts_with(tier.heading()))
                .map(|index| (index, *tier))
        })
        .collect();
    found.sort_by_key(|(index, _)| *index);

    let tiers = if found.is_empty() {
        Vec::new()
    } else {
        BudgetTier::ALL
            .iter()
            .map(|tier| {
                let text = found
                    .iter()
                    .enumerate()
                    .find(|(_, (_, candidate))| candidate == tier)
                    .map(|(order, (index, _))| {
                        let end = found
                            .get(order + 1)
                            .map_or(block_lines.len(), |(next, _)| *next);
                        block_lines[*index..end].join("\n").trim().to_string()
                    })
                    .unwrap_or_default();
                BudgetTierSlice::new(*tier, text)
            })
            .collect()
    };

    BudgetSplit {
        rest: lines[..start].join("\n").trim().to_string(),
        block: block_lines.join("\n").trim().to_string(),
        tiers,
    }
}

/// Lines mentioning a cost, currency or budget
#[must_use]
pub fn cost_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && COST_SIGNAL.is_match(line))
        .map(str::to_string)
        .collect()
}

/// Line opens a `LOW`, `MEDIUM` or `HIGH BUDGET` slice
#[must_use]
pub(crate) fn is_tier_heading(line: &str) -> bool {
    let normalized = normalize_line(line);
    BudgetTier::ALL
        .iter()
        .any(|tier| normalized.starts_with(tier.heading()))
}

/// Upper-cased line without markers, `-` and `_` read as spaces
fn normalize_line(line: &str) -> String {
    strip_markdown(strip_list_marker(line.trim()))
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_tiers_in_order() {
        let text = "Crew of six.\nESTIMATED BUDGET\nLOW BUDGET: $5k-10k\n- Handheld\n\
                    MEDIUM BUDGET: $10k-20k\nHIGH BUDGET: $20k+\n- Crane";
        let split = split_budget(text);

        assert_eq!(split.rest, "Crew of six.");
        assert!(split.block.starts_with("ESTIMATED BUDGET"));
        assert_eq!(split.tiers.len(), 3);
        assert_eq!(split.tiers[0].text, "LOW BUDGET: $5k-10k\n- Handheld");
        assert_eq!(split.tiers[1].text, "MEDIUM BUDGET: $10k-20k");
        assert_eq!(split.tiers[2].text, "HIGH BUDGET: $20k+\n- Crane");
    }

    #[test]
    fn tiers_out_of_order_stop_at_next_heading() {
        let text = "BUDGET\n**High-Budget**: lavish\nLow budget: scrappy";
        let split = split_budget(text);
        assert_eq!(split.tier(BudgetTier::High).map(|s| s.text.as_str()), Some("**High-Budget**: lavish"));
        assert_eq!(split.tier(BudgetTier::Low).map(|s| s.text.as_str()), Some("Low budget: scrappy"));
        assert!(split.tier(BudgetTier::Medium).is_some_and(BudgetTierSlice::is_empty));
    }

    #[test]
    fn no_tiers_without_tier_headings() {
        let split = split_budget("BUDGET CONSIDERATIONS\n- Crane rental");
        assert!(split.tiers.is_empty());
        assert!(!split.has_tiers());
        assert_eq!(split.block, "BUDGET CONSIDERATIONS\n- Crane rental");
    }

    #[test]
    fn whole_text_is_block_without_budget_heading() {
        let split = split_budget("LOW BUDGET: $1k\nHIGH BUDGET: $9k");
        assert_eq!(split.rest, "");
        assert!(split.has_tiers());
    }

    #[test]
    fn cost_lines_match_keywords() {
        let lines = cost_lines("Crew of six\nCosts are high\nAbout $4k\nINR 3 lakh\nbudgetary".lines());
        assert_eq!(lines, vec!["Costs are high", "About $4k", "INR 3 lakh"]);
    }
}
