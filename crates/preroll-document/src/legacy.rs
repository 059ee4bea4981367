//! Nine-key result shape that predates the generic `sections` schema

use crate::character::CharacterRole;
use crate::key::SectionKey;
use crate::section::Section;
use serde::Serialize;

/// One of the nine fixed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LegacyField {
    /// `executive_summary`
    ExecutiveSummary,
    /// `scene_overview`
    SceneOverview,
    /// `key_actions`
    KeyActions,
    /// `characters_roles`
    CharactersRoles,
    /// `visual_style`
    VisualStyle,
    /// `sound_design`
    SoundDesign,
    /// `budget_considerations`
    BudgetConsiderations,
    /// `director_notes`
    DirectorNotes,
    /// `assumptions_made`
    AssumptionsMade,
}

impl LegacyField {
    /// Fields in the order a document renders them
    pub const DISPLAY_ORDER: [Self; 9] = [
        Self::ExecutiveSummary,
        Self::SceneOverview,
        Self::KeyActions,
        Self::CharactersRoles,
        Self::VisualStyle,
        Self::SoundDesign,
        Self::BudgetConsiderations,
        Self::DirectorNotes,
        Self::AssumptionsMade,
    ];

    /// snake_case key in the JSON reply
    #[must_use]
    pub const fn json_key(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executive_summary",
            Self::SceneOverview => "scene_overview",
            Self::KeyActions => "key_actions",
            Self::CharactersRoles => "characters_roles",
            Self::VisualStyle => "visual_style",
            Self::SoundDesign => "sound_design",
            Self::BudgetConsiderations => "budget_considerations",
            Self::DirectorNotes => "director_notes",
            Self::AssumptionsMade => "assumptions_made",
        }
    }

    /// camelCase spelling some replies use instead
    #[must_use]
    pub const fn camel_key(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executiveSummary",
            Self::SceneOverview => "sceneOverview",
            Self::KeyActions => "keyActions",
            Self::CharactersRoles => "charactersRoles",
            Self::VisualStyle => "visualStyle",
            Self::SoundDesign => "soundDesign",
            Self::BudgetConsiderations => "budgetConsiderations",
            Self::DirectorNotes => "directorNotes",
            Self::AssumptionsMade => "assumptionsMade",
        }
    }

    /// Section key with the same meaning
    #[must_use]
    pub const fn section_key(self) -> SectionKey {
        match self {
            Self::ExecutiveSummary => SectionKey::ExecutiveSummary,
            Self::SceneOverview => SectionKey::SceneOverview,
            Self::KeyActions => SectionKey::KeyActions,
            Self::CharactersRoles => SectionKey::CharactersRoles,
            Self::VisualStyle => SectionKey::VisualStyle,
            Self::SoundDesign => SectionKey::SoundDesign,
            Self::BudgetConsiderations => SectionKey::BudgetConsiderations,
            Self::DirectorNotes => SectionKey::DirectorNotes,
            Self::AssumptionsMade => SectionKey::AssumptionsMade,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.section_key().label()
    }

    /// Message shown when the field is empty
    #[must_use]
    pub const fn empty_text(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive summary will appear here.",
            Self::SceneOverview => "Scene overview was not provided.",
            Self::KeyActions => "Key actions were not provided.",
            Self::CharactersRoles => "No character details were provided.",
            Self::VisualStyle => "Visual style notes were not provided.",
            Self::SoundDesign => "Sound design notes were not provided.",
            Self::BudgetConsiderations => "Budget considerations were not provided.",
            Self::DirectorNotes => "Director notes were not provided.",
            Self::AssumptionsMade => "No explicit assumptions were listed.",
        }
    }
}

/// Back-compatible nine-key document
///
/// Every field is independently optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFixedFields {
    /// Summary bullets
    pub executive_summary: Vec<String>,
    /// Overview prose
    pub scene_overview: String,
    /// Beats and actions
    pub key_actions: Vec<String>,
    /// Character records
    pub characters_roles: Vec<CharacterRole>,
    /// Visual notes
    pub visual_style: Vec<String>,
    /// Sound notes
    pub sound_design: Vec<String>,
    /// Cost notes
    pub budget_considerations: Vec<String>,
    /// Director notes
    pub director_notes: Vec<String>,
    /// Assumptions
    pub assumptions_made: Vec<String>,
}

impl LegacyFixedFields {
    /// List-valued field (`None` for scene overview and characters)
    #[must_use]
    pub fn list(&self, field: LegacyField) -> Option<&[String]> {
        match field {
            LegacyField::ExecutiveSummary => Some(&self.executive_summary),
            LegacyField::KeyActions => Some(&self.key_actions),
            LegacyField::VisualStyle => Some(&self.visual_style),
            LegacyField::SoundDesign => Some(&self.sound_design),
            LegacyField::BudgetConsiderations => Some(&self.budget_considerations),
            LegacyField::DirectorNotes => Some(&self.director_notes),
            LegacyField::AssumptionsMade => Some(&self.assumptions_made),
            LegacyField::SceneOverview | LegacyField::CharactersRoles => None,
        }
    }

    /// Mutable list-valued field
    pub fn list_mut(&mut self, field: LegacyField) -> Option<&mut Vec<String>> {
        match field {
            LegacyField::ExecutiveSummary => Some(&mut self.executive_summary),
            LegacyField::KeyActions => Some(&mut self.key_actions),
            LegacyField::VisualStyle => Some(&mut self.visual_style),
            LegacyField::SoundDesign => Some(&mut self.sound_design),
            LegacyField::BudgetConsiderations => Some(&mut self.budget_considerations),
            LegacyField::DirectorNotes => Some(&mut self.director_notes),
            LegacyField::AssumptionsMade => Some(&mut self.assumptions_made),
            LegacyField::SceneOverview | LegacyField::CharactersRoles => None,
        }
    }

    /// Field rendered as bullet strings
    ///
    /// Scene overview yields its non-empty lines; characters render as
    /// `name - role - notes`.
    #[must_use]
    pub fn bullets(&self, field: LegacyField) -> Vec<String> {
        match field {
            LegacyField::SceneOverview => self
                .scene_overview
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            LegacyField::CharactersRoles => self
                .characters_roles
                .iter()
                .map(CharacterRole::render)
                .filter(|line| !line.is_empty())
                .collect(),
            other => self.list(other).map(<[String]>::to_vec).unwrap_or_default(),
        }
    }

    /// Whether the field holds anything
    #[must_use]
    pub fn has(&self, field: LegacyField) -> bool {
        !self.bullets(field).is_empty()
    }

    /// All fields empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        LegacyField::DISPLAY_ORDER.iter().all(|field| !self.has(*field))
    }

    /// One section per field, in display order
    ///
    /// Empty fields still produce a section carrying the placeholder.
    #[must_use]
    pub fn to_sections(&self) -> Vec<Section> {
        LegacyField::DISPLAY_ORDER
            .iter()
            .enumerate()
            .map(|(position, field)| {
                let section = Section::new(position, field.label(), self.bullets(*field))
                    .with_key(Some(field.section_key()));
                if *field == LegacyField::SceneOverview {
                    section.with_body(self.scene_overview.trim())
                } else {
                    section
                }
            })
            .collect()
    }
}
