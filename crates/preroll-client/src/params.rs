//! Generation parameters
//!
//! Each [`GenerationType`] carries the section titles its output contract
//! requires, so a parsed reply can be checked for sections the model skipped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value shown for a parameter the user left blank
pub const UNSPECIFIED: &str = "Unspecified";

/// Kind of production document to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenerationType {
    /// Scene-by-scene production breakdown
    #[default]
    #[serde(rename = "Scene Breakdown")]
    SceneBreakdown,
    /// Sound layers and mixing notes
    #[serde(rename = "Sound Design")]
    SoundDesign,
    /// Departmental cost ranges
    #[serde(rename = "Budget Plan")]
    BudgetPlan,
    /// Look, palette and camera language
    #[serde(rename = "Visual Direction")]
    VisualDirection,
    /// Directing and on-set priorities
    #[serde(rename = "Production Notes")]
    ProductionNotes,
}

impl GenerationType {
    /// All generation types
    pub const ALL: [Self; 5] = [
        Self::SceneBreakdown,
        Self::SoundDesign,
        Self::BudgetPlan,
        Self::VisualDirection,
        Self::ProductionNotes,
    ];

    /// Display label, as sent to the endpoint
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SceneBreakdown => "Scene Breakdown",
            Self::SoundDesign => "Sound Design",
            Self::BudgetPlan => "Budget Plan",
            Self::VisualDirection => "Visual Direction",
            Self::ProductionNotes => "Production Notes",
        }
    }

    /// Section titles the reply must contain, in order
    #[must_use]
    pub const fn required_sections(self) -> &'static [&'static str] {
        match self {
            Self::SceneBreakdown => &[
                "Scene Objective",
                "Characters Present",
                "Locations Required",
                "Props & Set Dressing",
                "Key Actions & Beats",
                "Production Challenges",
                "Estimated Time & Coverage",
            ],
            Self::SoundDesign => &[
                "Ambient Bed",
                "Diegetic Sounds",
                "Non-Diegetic Elements",
                "Transitions & Accents",
                "Technical & Mixing Notes",
            ],
            Self::BudgetPlan => &[
                "Cast Costs",
                "Crew Costs",
                "Locations & Permits",
                "Equipment & Gear",
                "Art, Wardrobe & Props",
                "Sound & Post-Production",
                "Contingency & Risk Buffer",
            ],
            Self::VisualDirection => &[
                "Visual Tone & Mood",
                "Color Palette & Contrast",
                "Camera Movement & Framing",
                "Lighting Approach",
                "Production Design & Texture",
                "Visual References",
            ],
            Self::ProductionNotes => &[
                "Directorial Intent",
                "Performance Notes",
                "Blocking & Movement",
                "Continuity Considerations",
                "Safety & Logistics",
                "On-Set Priorities",
            ],
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown generation type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown generation type '{0}'")]
pub struct UnknownGenerationType(pub String);

impl FromStr for GenerationType {
    type Err = UnknownGenerationType;

    /// Accepts labels and kebab/snake forms, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownGenerationType(s.to_string()))
    }
}

/// Production parameters sent alongside the prompt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Genre, e.g. "Noir"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Budget tier, e.g. "Low"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tier: Option<String>,
    /// Runtime estimate, e.g. "3 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_estimate: Option<String>,
    /// Number of locations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_count: Option<String>,
    /// Scene complexity, e.g. "High"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_complexity: Option<String>,
    /// Document to generate
    #[serde(default)]
    pub generation_type: GenerationType,
}

impl GenerationParams {
    /// Create parameters with every value unspecified
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With generation type
    #[inline]
    #[must_use]
    pub fn with_generation_type(mut self, generation_type: GenerationType) -> Self {
        self.generation_type = generation_type;
        self
    }

    /// With genre
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// With budget tier
    #[must_use]
    pub fn with_budget_tier(mut self, tier: impl Into<String>) -> Self {
        self.budget_tier = Some(tier.into());
        self
    }

    /// With runtime estimate
    #[must_use]
    pub fn with_runtime_estimate(mut self, runtime: impl Into<String>) -> Self {
        self.runtime_estimate = Some(runtime.into());
        self
    }

    /// With location count
    #[must_use]
    pub fn with_location_count(mut self, count: impl Into<String>) -> Self {
        self.location_count = Some(count.into());
        self
    }

    /// With scene complexity
    #[must_use]
    pub fn with_scene_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.scene_complexity = Some(complexity.into());
        self
    }

    /// `(label, value)` lines in prompt order, blanks as "Unspecified"
    #[must_use]
    pub fn lines(&self) -> [(&'static str, &str); 6] {
        [
            ("Generation type", self.generation_type.label()),
            ("Genre", or_unspecified(self.genre.as_deref())),
            ("Budget tier", or_unspecified(self.budget_tier.as_deref())),
            ("Runtime estimate", or_unspecified(self.runtime_estimate.as_deref())),
            ("Location count", or_unspecified(self.location_count.as_deref())),
            ("Scene complexity", or_unspecified(self.scene_complexity.as_deref())),
        ]
    }
}

fn or_unspecified(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => UNSPECIFIED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generation_type_parses_loosely() {
        assert_eq!("Budget Plan".parse(), Ok(GenerationType::BudgetPlan));
        assert_eq!("sound-design".parse(), Ok(GenerationType::SoundDesign));
        assert_eq!("VISUAL_DIRECTION".parse(), Ok(GenerationType::VisualDirection));
        assert!("Shot List".parse::<GenerationType>().is_err());
    }

    #[test]
    fn every_type_has_a_contract() {
        for kind in GenerationType::ALL {
            assert!(kind.required_sections().len() >= 5, "{kind}");
        }
        assert_eq!(GenerationType::BudgetPlan.required_sections()[0], "Cast Costs");
    }

    #[test]
    fn serializes_camel_case() {
        let params = GenerationParams::new()
            .with_genre("Noir")
            .with_budget_tier("Low")
            .with_generation_type(GenerationType::SoundDesign);
        assert_eq!(
            serde_json::to_value(&params).expect("serializable"),
            json!({"genre": "Noir", "budgetTier": "Low", "generationType": "Sound Design"})
        );
    }

    #[test]
    fn blank_values_are_unspecified() {
        let params = GenerationParams::new().with_genre("  ").with_location_count("2");
        let lines = params.lines();
        assert_eq!(lines[0], ("Generation type", "Scene Breakdown"));
        assert_eq!(lines[1], ("Genre", UNSPECIFIED));
        assert_eq!(lines[4], ("Location count", "2"));
    }
}
