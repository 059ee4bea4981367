//! Sections of a canonical document
//!
//! Provides [`Section`] and its positional [`SectionId`].

use crate::key::{SectionFlavor, SectionKey};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Bullet inserted when a section has no extracted content
pub const PLACEHOLDER: &str = "Not provided.";

/// Stable identifier of a section within one document
///
/// Derived from the slugified title plus the section's zero-based position,
/// so duplicate titles still get distinct ids.
///
/// # Examples
/// - `("Scene Objective", 0)` → `scene-objective-0`
/// - `("Props & Set Dressing", 3)` → `props-set-dressing-3`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Derive id from title and position
    #[inline]
    #[must_use]
    pub fn derive(title: &str, position: usize) -> Self {
        Self(format!("{}-{}", slugify(title), position))
    }

    /// Id as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Lowercase ASCII alphanumeric runs joined by `-`
///
/// Returns `section` when the text has no alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// A titled, bulleted unit of a canonical document
///
/// `bullets` is never empty: [`PLACEHOLDER`] is inserted when nothing was
/// extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    id: SectionId,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<SectionKey>,
    bullets: Vec<String>,
    body: String,
}

impl Section {
    /// Create section at `position`
    ///
    /// The body defaults to the bullets joined by newlines.
    #[must_use]
    pub fn new(position: usize, title: impl Into<String>, bullets: Vec<String>) -> Self {
        let title = title.into();
        let body = bullets.join("\n");
        let bullets = if bullets.is_empty() {
            vec![PLACEHOLDER.to_string()]
        } else {
            bullets
        };

        Self {
            id: SectionId::derive(&title, position),
            title,
            key: None,
            bullets,
            body,
        }
    }

    /// With resolved vocabulary key
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: Option<SectionKey>) -> Self {
        self.key = key;
        self
    }

    /// With the source text the section was built from
    #[inline]
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Same section moved to another position (id is re-derived)
    #[inline]
    #[must_use]
    pub fn at_position(mut self, position: usize) -> Self {
        self.id = SectionId::derive(&self.title, position);
        self
    }

    /// Section id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Section title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Vocabulary key resolved for the title, if any
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<SectionKey> {
        self.key
    }

    /// Bullets (never empty)
    #[inline]
    #[must_use]
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    /// Cleaned source text, paragraph breaks preserved
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// False when the only bullet is the placeholder
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        !(self.bullets.len() == 1 && self.bullets[0] == PLACEHOLDER && self.body.is_empty())
    }

    /// Semantic purpose of the section
    #[inline]
    #[must_use]
    pub fn flavor(&self) -> SectionFlavor {
        SectionFlavor::of(self.key, &self.title)
    }
}
