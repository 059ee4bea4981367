//! Heading segmenter
//!
//! Walks free text line by line, opening a new segment at each heading the
//! [`LineClassifier`] recognizes. Vocabulary headings that repeat merge into
//! their first segment; ad hoc headings always open a fresh one. Text with
//! no heading at all becomes blank-line paragraphs.

use crate::classify::{is_scene_heading, LineClass, LineClassifier};
use crate::error::ParseError;
use crate::normalize::{
    is_list_item, normalize_characters, split_paragraphs, split_to_bullets, strip_markdown,
};
use crate::parsers::ReplyParser;
use crate::vocabulary::HeadingVocabulary;
use preroll_document::{
    CanonicalResult, LegacyField, LegacyFixedFields, ParseRoute, Section, SectionKey,
};
use serde_json::Value;

/// Title of text that precedes the first heading
const PREAMBLE_TITLE: &str = "Overview";

/// Longest line that may caption the bullet list below it
const MAX_CAPTION_CHARS: usize = 80;

/// Where a segment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrigin {
    /// Text before the first heading
    Preamble,
    /// Vocabulary heading
    Known(SectionKey),
    /// Any other heading
    AdHoc,
}

/// Lines gathered under one heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    origin: SegmentOrigin,
    title: String,
    lines: Vec<String>,
}

impl Segment {
    fn new(origin: SegmentOrigin, title: impl Into<String>) -> Self {
        Self {
            origin,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Heading origin
    #[inline]
    #[must_use]
    pub fn origin(&self) -> SegmentOrigin {
        self.origin
    }

    /// Heading text as first written
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Canonical key, when a vocabulary heading opened the segment
    #[must_use]
    pub fn key(&self) -> Option<SectionKey> {
        match self.origin {
            SegmentOrigin::Known(key) => Some(key),
            SegmentOrigin::Preamble | SegmentOrigin::AdHoc => None,
        }
    }

    /// Body text, blank lines between paragraphs preserved
    #[must_use]
    pub fn body(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }

    /// Any non-blank line
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.lines.iter().any(|line| !line.trim().is_empty())
    }

    fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    fn push_blank(&mut self) {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }
}

/// Free text split at headings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    segments: Vec<Segment>,
    current: usize,
    saw_heading: bool,
}

impl Default for Segmentation {
    fn default() -> Self {
        Self {
            segments: vec![Segment::new(SegmentOrigin::Preamble, PREAMBLE_TITLE)],
            current: 0,
            saw_heading: false,
        }
    }
}

impl Segmentation {
    /// Segments in order of first appearance
    ///
    /// The preamble is always first, even when empty.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// At least one heading was recognized
    #[inline]
    #[must_use]
    pub fn saw_heading(&self) -> bool {
        self.saw_heading
    }

    fn open(&mut self, origin: SegmentOrigin, title: String) {
        self.saw_heading = true;
        if let SegmentOrigin::Known(key) = origin {
            if let Some(existing) = self
                .segments
                .iter()
                .position(|segment| segment.origin == SegmentOrigin::Known(key))
            {
                self.current = existing;
                return;
            }
        }
        self.segments.push(Segment::new(origin, title));
        self.current = self.segments.len() - 1;
    }

    fn current_mut(&mut self) -> &mut Segment {
        &mut self.segments[self.current]
    }

    /// Sections in segment order
    ///
    /// Segments opened by a heading are kept even when empty; they render
    /// the placeholder. An empty preamble is dropped.
    #[must_use]
    pub fn to_sections(&self) -> Vec<Section> {
        self.segments
            .iter()
            .filter(|segment| segment.origin != SegmentOrigin::Preamble || segment.has_content())
            .enumerate()
            .map(|(position, segment)| {
                let body = segment.body();
                Section::new(position, segment.title.clone(), split_to_bullets(&body))
                    .with_key(segment.key())
                    .with_body(body)
            })
            .collect()
    }

    /// Project segments onto the nine fixed fields
    ///
    /// Segments without a legacy counterpart fold into the most recent
    /// legacy segment, heading line included. Text before any heading is
    /// scene overview.
    #[must_use]
    pub fn to_legacy(&self) -> LegacyFixedFields {
        let mut buckets: Vec<(LegacyField, Vec<&str>)> = Vec::new();
        let mut target = LegacyField::SceneOverview;

        for segment in &self.segments {
            let field = match segment.origin {
                SegmentOrigin::Preamble => Some(LegacyField::SceneOverview),
                SegmentOrigin::Known(SectionKey::Screenplay) => Some(LegacyField::SceneOverview),
                SegmentOrigin::Known(key) => key.legacy_field(),
                SegmentOrigin::AdHoc => None,
            };
            let lines = match field {
                Some(field) => {
                    target = field;
                    bucket_for(&mut buckets, target)
                }
                None => {
                    let lines = bucket_for(&mut buckets, target);
                    lines.push(segment.title.as_str());
                    lines
                }
            };
            lines.extend(segment.lines.iter().map(String::as_str));
        }

        let mut fields = LegacyFixedFields::default();
        for (field, lines) in buckets {
            let text = lines.join("\n");
            match field {
                LegacyField::SceneOverview => fields.scene_overview = text.trim().to_string(),
                LegacyField::CharactersRoles => {
                    fields.characters_roles = normalize_characters(&Value::String(text));
                }
                list_field => {
                    if let Some(list) = fields.list_mut(list_field) {
                        *list = split_to_bullets(&text);
                    }
                }
            }
        }
        fields
    }

    /// Canonical document for `raw`
    ///
    /// Without any heading the text is split into paragraphs, each its own
    /// `Overview` section. Blank input yields an empty document.
    #[must_use]
    pub fn into_result(self, raw: &str) -> CanonicalResult {
        if self.saw_heading {
            return CanonicalResult::from_sections(self.to_sections(), ParseRoute::Headings, raw);
        }

        let sections: Vec<Section> = split_paragraphs(raw)
            .into_iter()
            .filter_map(|paragraph| {
                let bullets = split_to_bullets(&paragraph);
                (!bullets.is_empty())
                    .then(|| Section::new(0, PREAMBLE_TITLE, bullets).with_body(paragraph))
            })
            .collect();

        if sections.is_empty() {
            CanonicalResult::empty(raw)
        } else {
            CanonicalResult::from_sections(sections, ParseRoute::Paragraphs, raw)
        }
    }
}

fn bucket_for<'a, 's>(
    buckets: &'a mut Vec<(LegacyField, Vec<&'s str>)>,
    field: LegacyField,
) -> &'a mut Vec<&'s str> {
    let index = match buckets.iter().position(|(existing, _)| *existing == field) {
        Some(index) => index,
        None => {
            buckets.push((field, Vec::new()));
            buckets.len() - 1
        }
    };
    &mut buckets[index].1
}

/// Segment free text at headings
#[must_use]
pub fn segment(text: &str, vocabulary: &HeadingVocabulary) -> Segmentation {
    let classifier = LineClassifier::new(vocabulary);
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut segmentation = Segmentation::default();

    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            segmentation.current_mut().push_blank();
            continue;
        }

        let class = classifier.classify(line);
        if is_caption(&lines, index) && !matches!(class, LineClass::Metadata { .. }) {
            let title = caption_title(line);
            let origin = vocabulary
                .key_for_title(&title)
                .map_or(SegmentOrigin::AdHoc, SegmentOrigin::Known);
            segmentation.open(origin, title);
            continue;
        }

        match class {
            LineClass::Heading(heading) => {
                let origin = heading.key.map_or(SegmentOrigin::AdHoc, SegmentOrigin::Known);
                segmentation.open(origin, heading.title);
                if let Some(trailing) = heading.trailing {
                    segmentation.current_mut().push_line(trailing);
                }
            }
            LineClass::Metadata { label, value } => {
                segmentation
                    .current_mut()
                    .push_line(format!("{label}: {value}").trim().to_string());
            }
            LineClass::Body => segmentation.current_mut().push_line((*line).to_string()),
        }
    }

    segmentation
}

/// Line at a paragraph start directly above a list
///
/// The whole line is the caption, colons and closing punctuation included,
/// so a title never loses its tail to the vocabulary split.
fn is_caption(lines: &[&str], index: usize) -> bool {
    let line = lines[index];
    let after_break = index == 0 || lines[index - 1].is_empty();
    let before_list = lines.get(index + 1).is_some_and(|next| is_list_item(next));

    after_break
        && before_list
        && !is_list_item(line)
        && !is_scene_heading(line)
        && line.chars().count() <= MAX_CAPTION_CHARS
        && !caption_title(line).is_empty()
}

fn caption_title(line: &str) -> String {
    strip_markdown(line).trim_end_matches(':').trim_end().to_string()
}

/// Infallible free-text parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingSegmenter;

impl ReplyParser for HeadingSegmenter {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn parse(
        &self,
        raw: &str,
        vocabulary: &HeadingVocabulary,
    ) -> Result<CanonicalResult, ParseError> {
        Ok(segment(raw, vocabulary).into_result(raw))
    }

    fn priority(&self) -> i32 {
        0
    }
}
