//! Heading vocabulary
//!
//! Maps recognized heading phrases to canonical [`SectionKey`]s. Matching is
//! case-insensitive and prefers the longest phrase, so `BUDGET CONSIDERATIONS`
//! wins over `BUDGET`.

use indexmap::IndexMap;
use preroll_document::SectionKey;

/// Extra words a heading may carry after a known phrase
const MAX_EXTRA_WORDS: usize = 2;

/// Built-in phrases
const DEFAULT_ENTRIES: &[(&str, SectionKey)] = &[
    ("EXECUTIVE SUMMARY", SectionKey::ExecutiveSummary),
    ("SUMMARY", SectionKey::ExecutiveSummary),
    ("SCENE OVERVIEW", SectionKey::SceneOverview),
    ("SCREENPLAY", SectionKey::Screenplay),
    ("KEY ACTIONS & BEATS", SectionKey::KeyActions),
    ("KEY ACTIONS", SectionKey::KeyActions),
    ("KEY BEATS", SectionKey::KeyActions),
    ("CHARACTERS & ROLES", SectionKey::CharactersRoles),
    ("CHARACTERS AND ROLES", SectionKey::CharactersRoles),
    ("CHARACTER PROFILES", SectionKey::CharactersRoles),
    ("CHARACTERS", SectionKey::CharactersRoles),
    ("VISUAL STYLE & CINEMATOGRAPHY", SectionKey::VisualStyle),
    ("VISUAL STYLE", SectionKey::VisualStyle),
    ("VISUAL DIRECTION", SectionKey::VisualStyle),
    ("SOUND & MOOD DESIGN", SectionKey::SoundDesign),
    ("SOUND DESIGN PLAN", SectionKey::SoundDesign),
    ("SOUND DESIGN", SectionKey::SoundDesign),
    ("BUDGET CONSIDERATIONS", SectionKey::BudgetConsiderations),
    ("ESTIMATED BUDGET", SectionKey::BudgetConsiderations),
    ("BUDGET PLAN", SectionKey::BudgetConsiderations),
    ("BUDGET", SectionKey::BudgetConsiderations),
    ("DIRECTOR / PRODUCTION NOTES", SectionKey::DirectorNotes),
    ("DIRECTOR NOTES", SectionKey::DirectorNotes),
    ("PRODUCTION NOTES", SectionKey::DirectorNotes),
    ("ASSUMPTIONS MADE", SectionKey::AssumptionsMade),
    ("ASSUMPTIONS", SectionKey::AssumptionsMade),
    ("CASTING RECOMMENDATIONS", SectionKey::Casting),
    ("CASTING", SectionKey::Casting),
];

/// Heading recognized by the vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyMatch {
    /// Canonical key
    pub key: SectionKey,
    /// Heading text as written, without trailing content
    pub heading: String,
    /// Content after `:` on the heading line
    pub trailing: Option<String>,
}

/// Phrase table keyed by upper-cased phrase
///
/// Insertion order is irrelevant to matching; lookups walk phrases longest
/// first.
#[derive(Debug, Clone)]
pub struct HeadingVocabulary {
    entries: IndexMap<String, SectionKey>,
}

impl Default for HeadingVocabulary {
    fn default() -> Self {
        DEFAULT_ENTRIES
            .iter()
            .fold(Self::empty(), |vocabulary, (phrase, key)| {
                vocabulary.with_entry(phrase, *key)
            })
    }
}

impl HeadingVocabulary {
    /// Vocabulary with no phrases
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add or replace a phrase
    #[must_use]
    pub fn with_entry(mut self, phrase: &str, key: SectionKey) -> Self {
        let phrase = normalize_phrase(phrase);
        if !phrase.is_empty() {
            self.entries.insert(phrase, key);
            self.entries
                .sort_by(|a, _, b, _| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        }
        self
    }

    /// Number of phrases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No phrases
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phrases longest first
    pub fn phrases(&self) -> impl Iterator<Item = (&str, SectionKey)> {
        self.entries.iter().map(|(phrase, key)| (phrase.as_str(), *key))
    }

    /// Match a cleaned line against the vocabulary
    ///
    /// The text before the first `:` must equal a phrase or extend it by at
    /// most two words. Text after the `:` is returned as trailing content.
    #[must_use]
    pub fn lookup(&self, line: &str) -> Option<VocabularyMatch> {
        let (head, tail) = match line.split_once(':') {
            Some((head, tail)) => (head, Some(tail.trim())),
            None => (line, None),
        };

        let heading = head.trim().trim_end_matches(is_heading_dash).trim_end();
        if heading.is_empty() || heading.ends_with(['.', '!', '?']) {
            return None;
        }

        let key = self.key_for(&normalize_phrase(heading))?;
        Some(VocabularyMatch {
            key,
            heading: heading.to_string(),
            trailing: tail.filter(|text| !text.is_empty()).map(str::to_string),
        })
    }

    /// Key for a section title, if the title names a known heading
    #[must_use]
    pub fn key_for_title(&self, title: &str) -> Option<SectionKey> {
        self.lookup(title).map(|found| found.key)
    }

    fn key_for(&self, candidate: &str) -> Option<SectionKey> {
        self.entries.iter().find_map(|(phrase, key)| {
            if candidate == phrase {
                return Some(*key);
            }
            let rest = candidate.strip_prefix(phrase.as_str())?;
            let at_boundary = rest.starts_with([' ', '(', '/', '&', '-', ',']);
            let extra_words = rest
                .split(|c: char| c.is_whitespace() || "()/&-,".contains(c))
                .filter(|word| !word.is_empty())
                .count();
            (at_boundary && extra_words <= MAX_EXTRA_WORDS).then_some(*key)
        })
    }
}

fn is_heading_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—' | ' ')
}

fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
