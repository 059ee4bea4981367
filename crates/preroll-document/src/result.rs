//! The canonical result of normalizing one reply

use crate::key::{SectionFlavor, SectionKey};
use crate::legacy::LegacyFixedFields;
use crate::section::Section;
use serde::Serialize;

/// Which route produced the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseRoute {
    /// `{generation_type, sections: [...]}` JSON
    JsonSections,
    /// Nine-key JSON
    JsonLegacy,
    /// Heading-segmented free text
    Headings,
    /// Blank-line paragraphs of free text without headings
    Paragraphs,
    /// Nothing to parse
    Empty,
}

impl ParseRoute {
    /// Produced by segmenting free text rather than parsing JSON
    #[inline]
    #[must_use]
    pub const fn is_free_text(self) -> bool {
        matches!(self, Self::Headings | Self::Paragraphs | Self::Empty)
    }
}

/// Shape-specific payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Payload {
    /// Generic section list
    Sections {
        /// Sections in reply order
        sections: Vec<Section>,
    },
    /// Nine fixed fields plus the sections derived from them
    Legacy {
        /// The fixed fields
        fields: LegacyFixedFields,
        /// Display-order sections
        sections: Vec<Section>,
    },
}

/// Normalized, renderable document built from one reply
///
/// Immutable once constructed; re-derivation re-parses from [`raw`](Self::raw).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResult {
    payload: Payload,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_type: Option<String>,
    raw: String,
    route: ParseRoute,
}

impl CanonicalResult {
    /// Build from a section list; ids are re-derived from positions
    #[must_use]
    pub fn from_sections(sections: Vec<Section>, route: ParseRoute, raw: impl Into<String>) -> Self {
        let sections = sections
            .into_iter()
            .enumerate()
            .map(|(position, section)| section.at_position(position))
            .collect();

        Self {
            payload: Payload::Sections { sections },
            generation_type: None,
            raw: raw.into(),
            route,
        }
    }

    /// Build from the nine fixed fields
    #[must_use]
    pub fn from_legacy(fields: LegacyFixedFields, raw: impl Into<String>) -> Self {
        let sections = fields.to_sections();
        Self {
            payload: Payload::Legacy { fields, sections },
            generation_type: None,
            raw: raw.into(),
            route: ParseRoute::JsonLegacy,
        }
    }

    /// Document with no sections
    #[inline]
    #[must_use]
    pub fn empty(raw: impl Into<String>) -> Self {
        Self::from_sections(Vec::new(), ParseRoute::Empty, raw)
    }

    /// With generation type reported by the reply
    #[inline]
    #[must_use]
    pub fn with_generation_type(mut self, generation_type: Option<String>) -> Self {
        self.generation_type = generation_type;
        self
    }

    /// Sections in document order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        match &self.payload {
            Payload::Sections { sections } | Payload::Legacy { sections, .. } => sections,
        }
    }

    /// Shape-specific payload
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Fixed fields, when the reply used the nine-key shape
    #[must_use]
    pub fn legacy(&self) -> Option<&LegacyFixedFields> {
        match &self.payload {
            Payload::Legacy { fields, .. } => Some(fields),
            Payload::Sections { .. } => None,
        }
    }

    /// Generation type reported by the reply
    #[inline]
    #[must_use]
    pub fn generation_type(&self) -> Option<&str> {
        self.generation_type.as_deref()
    }

    /// Original reply text
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Route that produced the document
    #[inline]
    #[must_use]
    pub fn route(&self) -> ParseRoute {
        self.route
    }

    /// No sections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }

    /// Section by id
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections().iter().find(|section| section.id() == id)
    }

    /// First section resolved to `key`
    #[must_use]
    pub fn section_by_key(&self, key: SectionKey) -> Option<&Section> {
        self.sections().iter().find(|section| section.key() == Some(key))
    }

    /// First section with `flavor`
    #[must_use]
    pub fn first_with_flavor(&self, flavor: SectionFlavor) -> Option<&Section> {
        self.sections().iter().find(|section| section.flavor() == flavor)
    }

    /// Expected titles with no matching section (case-insensitive)
    #[must_use]
    pub fn missing_titles<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|title| {
                !self
                    .sections()
                    .iter()
                    .any(|section| section.title().eq_ignore_ascii_case(title.trim()))
            })
            .collect()
    }
}
