//! Line classification for the heading segmenter
//!
//! Rules are applied in order, first match wins:
//!
//! 1. bulleted lines and screenplay scene headings are body
//! 2. vocabulary headings (with optional `: content`)
//! 3. shot metadata such as `LOCATION:` or `SFX:`
//! 4. numbered title-like lines, lines ending in `:`, `**bold**` lines
//! 5. short all-caps labels
//! 6. everything else is body
//!
//! Metadata sits ahead of the generic heading rules so that a line like
//! `TIME: NIGHT` stays with its scene instead of opening a section.

use crate::normalize::strip_markdown;
use crate::vocabulary::HeadingVocabulary;
use once_cell::sync::Lazy;
use preroll_document::SectionKey;
use regex::Regex;

static SCENE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:INT\./EXT\.|EXT\./INT\.|INT/EXT\.|INT\.|EXT\.)").expect("valid scene regex")
});

static METADATA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(LOCATION|BG|TIME|SFX|CAMERA|SHOT|WEATHER|VFX)\s*:\s*(.*)$")
        .expect("valid metadata regex")
});

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+").expect("valid bullet regex"));

static NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[).]\s+").expect("valid numbering regex"));

/// Longest line that may act as a `Title:` heading
const MAX_COLON_HEADING_CHARS: usize = 60;

/// Most words a title-like or shouted heading may have
const MAX_HEADING_WORDS: usize = 6;

/// Heading found on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Cleaned heading text
    pub title: String,
    /// Canonical key when the vocabulary recognized it
    pub key: Option<SectionKey>,
    /// Content following the heading on the same line
    pub trailing: Option<String>,
}

/// Classification of one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Opens a new section
    Heading(Heading),
    /// `LABEL: value` shot metadata
    Metadata {
        /// Upper-cased label
        label: String,
        /// Value after the colon
        value: String,
    },
    /// Ordinary content
    Body,
}

/// Scene heading such as `INT. KITCHEN - NIGHT`
#[inline]
#[must_use]
pub fn is_scene_heading(line: &str) -> bool {
    SCENE_HEADING.is_match(line.trim())
}

/// Split a shot metadata line into label and value
#[must_use]
pub fn metadata_pair(line: &str) -> Option<(String, String)> {
    let caps = METADATA.captures(line.trim())?;
    Some((caps[1].to_uppercase(), caps[2].trim().to_string()))
}

/// Classifies lines against a vocabulary
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'v> {
    vocabulary: &'v HeadingVocabulary,
}

impl<'v> LineClassifier<'v> {
    /// Create classifier over `vocabulary`
    #[inline]
    #[must_use]
    pub fn new(vocabulary: &'v HeadingVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Classify a single line
    #[must_use]
    pub fn classify(&self, line: &str) -> LineClass {
        let line = line.trim();
        if line.is_empty() || BULLET.is_match(line) {
            return LineClass::Body;
        }

        let cleaned = clean_heading(line);
        if cleaned.is_empty() || is_scene_heading(&cleaned) {
            return LineClass::Body;
        }

        if let Some(found) = self.vocabulary.lookup(&cleaned) {
            return LineClass::Heading(Heading {
                title: found.heading,
                key: Some(found.key),
                trailing: found.trailing,
            });
        }

        if let Some((label, value)) = metadata_pair(&cleaned) {
            return LineClass::Metadata { label, value };
        }

        let numbered = NUMBERING.is_match(strip_bold(line).trim_start_matches('#').trim_start());
        let ends_with_colon =
            cleaned.ends_with(':') && cleaned.chars().count() <= MAX_COLON_HEADING_CHARS;

        let is_heading = (numbered && looks_like_title(&cleaned))
            || ends_with_colon
            || is_bold_wrapped(line)
            || is_shouted_label(&cleaned);

        if !is_heading {
            return LineClass::Body;
        }

        let title = cleaned.trim_end_matches(':').trim_end();
        if title.is_empty() {
            return LineClass::Body;
        }
        LineClass::Heading(Heading {
            title: title.to_string(),
            key: None,
            trailing: None,
        })
    }
}

/// Strip emphasis, heading marks and one leading number from a line
fn clean_heading(line: &str) -> String {
    let stripped = strip_markdown(line);
    strip_markdown(&NUMBERING.replace(&stripped, ""))
}

fn strip_bold(line: &str) -> String {
    line.replace("**", "").replace("__", "")
}

fn is_bold_wrapped(line: &str) -> bool {
    line.len() > 4 && line.starts_with("**") && line.ends_with("**")
}

/// Title-case or all-caps phrase of a few words without sentence punctuation
fn looks_like_title(text: &str) -> bool {
    let text = text.trim_end_matches(':');
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || words.len() > MAX_HEADING_WORDS || text.ends_with(['.', '!', '?']) {
        return false;
    }
    let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
    starts_upper
        && words
            .iter()
            .filter(|word| word.chars().count() > 3)
            .all(|word| !word.chars().next().is_some_and(char::is_lowercase))
}

/// Short all-caps label such as `JOHN` or `PRODUCTION TIMELINE`
fn is_shouted_label(text: &str) -> bool {
    let letters: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let word_count = letters.split_whitespace().count();
    (1..=MAX_HEADING_WORDS).contains(&word_count)
        && letters.chars().filter(|c| c.is_alphabetic()).count() > 1
        && letters.chars().any(char::is_uppercase)
        && !letters.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineClass {
        let vocabulary = HeadingVocabulary::default();
        LineClassifier::new(&vocabulary).classify(line)
    }

    fn heading(title: &str, key: Option<SectionKey>) -> LineClass {
        LineClass::Heading(Heading {
            title: title.into(),
            key,
            trailing: None,
        })
    }

    #[test]
    fn vocabulary_headings_in_many_dresses() {
        let key = Some(SectionKey::SoundDesign);
        assert_eq!(classify("## Sound Design"), heading("Sound Design", key));
        assert_eq!(classify("**SOUND DESIGN:**"), heading("SOUND DESIGN", key));
        assert_eq!(classify("3. Sound Design"), heading("Sound Design", key));
    }

    #[test]
    fn vocabulary_heading_with_content() {
        match classify("Budget: roughly $40k") {
            LineClass::Heading(found) => {
                assert_eq!(found.key, Some(SectionKey::BudgetConsiderations));
                assert_eq!(found.trailing.as_deref(), Some("roughly $40k"));
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn bullets_are_never_headings() {
        assert_eq!(classify("- BUDGET"), LineClass::Body);
        assert_eq!(classify("* Visual Style:"), LineClass::Body);
    }

    #[test]
    fn scene_headings_are_body() {
        assert_eq!(classify("INT. WAREHOUSE - NIGHT"), LineClass::Body);
        assert_eq!(classify("EXT./INT. CAR - DAY"), LineClass::Body);
    }

    #[test]
    fn metadata_lines() {
        assert_eq!(
            classify("Location: Abandoned pier"),
            LineClass::Metadata {
                label: "LOCATION".into(),
                value: "Abandoned pier".into()
            }
        );
        assert_eq!(
            classify("SFX: distant thunder"),
            LineClass::Metadata {
                label: "SFX".into(),
                value: "distant thunder".into()
            }
        );
    }

    #[test]
    fn ad_hoc_headings() {
        assert_eq!(classify("Props needed:"), heading("Props needed", None));
        assert_eq!(classify("**The Arrival**"), heading("The Arrival", None));
        assert_eq!(classify("2. Lighting Approach"), heading("Lighting Approach", None));
        assert_eq!(classify("PRODUCTION TIMELINE"), heading("PRODUCTION TIMELINE", None));
        assert_eq!(classify("JOHN"), heading("JOHN", None));
    }

    #[test]
    fn prose_is_body() {
        assert_eq!(classify("1. Establish the mood early"), LineClass::Body);
        assert_eq!(classify("The rain starts as she reaches the pier."), LineClass::Body);
        assert_eq!(classify("A"), LineClass::Body);
        assert_eq!(classify("**"), LineClass::Body);
        assert_eq!(classify(":"), LineClass::Body);
    }

    #[test]
    fn long_colon_lines_are_body() {
        let line = format!("{}:", "word ".repeat(20));
        assert_eq!(classify(&line), LineClass::Body);
    }
}
