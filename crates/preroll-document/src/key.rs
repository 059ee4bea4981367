//! Canonical section keys and their semantic flavors

use crate::legacy::LegacyField;
use serde::Serialize;

/// Canonical key a heading resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    /// Short summary bullets
    ExecutiveSummary,
    /// Scene purpose and narrative function
    SceneOverview,
    /// Major beats and actions
    KeyActions,
    /// Characters and their roles
    CharactersRoles,
    /// Lighting, lensing, composition
    VisualStyle,
    /// Ambience, music cues, silence beats
    SoundDesign,
    /// Cost drivers and tiers
    BudgetConsiderations,
    /// Blocking, pacing, continuity
    DirectorNotes,
    /// Assumptions used for generation
    AssumptionsMade,
    /// Screenplay text with scene headings
    Screenplay,
    /// Casting recommendations
    Casting,
}

impl SectionKey {
    /// Every key, in display order
    pub const ALL: [Self; 11] = [
        Self::ExecutiveSummary,
        Self::SceneOverview,
        Self::Screenplay,
        Self::KeyActions,
        Self::CharactersRoles,
        Self::Casting,
        Self::VisualStyle,
        Self::SoundDesign,
        Self::BudgetConsiderations,
        Self::DirectorNotes,
        Self::AssumptionsMade,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary",
            Self::SceneOverview => "Scene Overview",
            Self::KeyActions => "Key Actions",
            Self::CharactersRoles => "Characters & Roles",
            Self::VisualStyle => "Visual Style & Cinematography",
            Self::SoundDesign => "Sound & Mood Design",
            Self::BudgetConsiderations => "Budget Considerations",
            Self::DirectorNotes => "Director / Production Notes",
            Self::AssumptionsMade => "Assumptions Made",
            Self::Screenplay => "Screenplay",
            Self::Casting => "Casting Recommendations",
        }
    }

    /// Semantic purpose implied by the key
    #[must_use]
    pub const fn flavor(self) -> SectionFlavor {
        match self {
            Self::BudgetConsiderations => SectionFlavor::Budget,
            Self::SceneOverview | Self::Screenplay => SectionFlavor::SceneOverview,
            Self::CharactersRoles => SectionFlavor::Characters,
            _ => SectionFlavor::General,
        }
    }

    /// Legacy fixed field this key feeds, if any
    #[must_use]
    pub const fn legacy_field(self) -> Option<LegacyField> {
        match self {
            Self::ExecutiveSummary => Some(LegacyField::ExecutiveSummary),
            Self::SceneOverview => Some(LegacyField::SceneOverview),
            Self::KeyActions => Some(LegacyField::KeyActions),
            Self::CharactersRoles => Some(LegacyField::CharactersRoles),
            Self::VisualStyle => Some(LegacyField::VisualStyle),
            Self::SoundDesign => Some(LegacyField::SoundDesign),
            Self::BudgetConsiderations => Some(LegacyField::BudgetConsiderations),
            Self::DirectorNotes => Some(LegacyField::DirectorNotes),
            Self::AssumptionsMade => Some(LegacyField::AssumptionsMade),
            Self::Screenplay | Self::Casting => None,
        }
    }
}

/// Semantic purpose of a section, used to pick specialised parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionFlavor {
    /// Budget tiers and cost lines
    Budget,
    /// Scene headings, metadata, prose
    SceneOverview,
    /// Character/role records
    Characters,
    /// Plain bullets
    General,
}

impl SectionFlavor {
    /// Flavor from key, falling back to title keywords
    #[must_use]
    pub fn of(key: Option<SectionKey>, title: &str) -> Self {
        if let Some(flavor) = key.map(SectionKey::flavor) {
            if flavor != Self::General {
                return flavor;
            }
        }

        let upper = title.to_uppercase();
        if upper.contains("BUDGET") || upper.contains("COST") {
            Self::Budget
        } else if upper.contains("CHARACTER") || upper.contains("CAST") {
            Self::Characters
        } else if upper.contains("SCENE OVERVIEW")
            || upper.contains("SCREENPLAY")
            || upper.contains("SCRIPT")
        {
            Self::SceneOverview
        } else {
            Self::General
        }
    }
}
