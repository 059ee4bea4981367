//! Character/role records

use serde::Serialize;

/// One character entry of a characters section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterRole {
    /// Character name
    pub name: String,
    /// Role in the scene
    pub role: String,
    /// Free-form notes
    pub notes: String,
}

impl CharacterRole {
    /// Create record, trimming every part
    #[must_use]
    pub fn new(name: impl AsRef<str>, role: impl AsRef<str>, notes: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            role: role.as_ref().trim().to_string(),
            notes: notes.as_ref().trim().to_string(),
        }
    }

    /// All parts empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.role.is_empty() && self.notes.is_empty()
    }

    /// Name for display
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Character"
        } else {
            &self.name
        }
    }

    /// Non-empty parts joined by ` - `
    #[must_use]
    pub fn render(&self) -> String {
        [self.name.as_str(), self.role.as_str(), self.notes.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}
