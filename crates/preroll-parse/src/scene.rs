//! Scene overview parsing
//!
//! Reads a scene-flavoured text as either screenplay scenes (`INT.`/`EXT.`
//! headings with shot metadata) or plain paragraphs, never both.

use crate::classify::{is_scene_heading, metadata_pair};
use crate::normalize::{strip_list_marker, strip_markdown};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9 /&()'\-]{0,23}):\s*(.+)$").expect("valid key-value regex")
});

/// `Label: value` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    /// Label as written (metadata labels upper-cased)
    pub label: String,
    /// Value after the colon
    pub value: String,
}

impl LabeledValue {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One screenplay scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneBlock {
    /// `INT. KITCHEN - NIGHT`
    pub heading: String,
    /// Shot metadata lines (`LOCATION`, `SFX`, ...)
    pub metadata: Vec<LabeledValue>,
    /// Action and dialogue lines
    pub body: Vec<String>,
}

impl SceneBlock {
    fn new(heading: String) -> Self {
        Self {
            heading,
            metadata: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// Structured scene overview
///
/// `scene_blocks` and `paragraphs` are never both non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneOverview {
    /// Labels before the first scene heading
    pub key_value_pairs: Vec<LabeledValue>,
    /// Screenplay scenes
    pub scene_blocks: Vec<SceneBlock>,
    /// Prose paragraphs when there are no scenes
    pub paragraphs: Vec<String>,
    /// Prose before the first scene heading
    pub preamble: Vec<String>,
}

impl SceneOverview {
    /// Nothing recognized
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_value_pairs.is_empty()
            && self.scene_blocks.is_empty()
            && self.paragraphs.is_empty()
            && self.preamble.is_empty()
    }
}

/// Parse scene-flavoured text
#[must_use]
pub fn parse_scene_overview(text: &str) -> SceneOverview {
    let mut overview = SceneOverview::default();
    // `None` marks a paragraph break in prose before any scene
    let mut prose: Vec<Option<String>> = Vec::new();

    for raw_line in text.lines() {
        let line = strip_markdown(strip_list_marker(raw_line.trim()));
        if line.is_empty() {
            if overview.scene_blocks.is_empty() {
                prose.push(None);
            }
            continue;
        }

        if is_scene_heading(&line) {
            overview.scene_blocks.push(SceneBlock::new(line));
            continue;
        }

        if let Some(scene) = overview.scene_blocks.last_mut() {
            match metadata_pair(&line) {
                Some((label, value)) => scene.metadata.push(LabeledValue::new(label, value)),
                None => scene.body.push(line),
            }
        } else if let Some(caps) = KEY_VALUE.captures(&line) {
            overview
                .key_value_pairs
                .push(LabeledValue::new(caps[1].trim(), caps[2].trim()));
        } else {
            prose.push(Some(line));
        }
    }

    if overview.scene_blocks.is_empty() {
        overview.paragraphs = group_paragraphs(prose);
    } else {
        overview.preamble = prose.into_iter().flatten().collect();
    }
    overview
}

fn group_paragraphs(prose: Vec<Option<String>>) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in prose {
        match line {
            Some(line) => current.push(line),
            None if !current.is_empty() => paragraphs.push(std::mem::take(&mut current).join("\n")),
            None => {}
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}
