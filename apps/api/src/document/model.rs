//! Document tree value types.
//!
//! A `Document` is built once, serialized once and dropped. Measurements use
//! WordprocessingML units: twips (1/20 pt) for spacing, indents, tab stops
//! and margins; half-points for font sizes; eighths of a point for borders.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Runs
// ────────────────────────────────────────────────────────────────────────────

/// A span of text sharing one style. A run with `link` set is rendered as an
/// external hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    /// Font size in half-points (22 = 11pt).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Hex RGB without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..Run::default()
        }
    }

    /// A lone tab character; pairs with a paragraph tab stop.
    pub fn tab() -> Self {
        Run::new("\t")
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn color(mut self, hex: &str) -> Self {
        self.color = Some(hex.to_string());
        self
    }

    pub fn link(mut self, target: impl Into<String>) -> Self {
        self.link = Some(target.into());
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraph properties
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Center,
    Justified,
}

/// Right-aligned tab stop; pushes trailing text (dates) to the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStop {
    /// Position from the left margin, in twips.
    pub position: u32,
}

impl TabStop {
    pub fn right(position: u32) -> Self {
        TabStop { position }
    }
}

/// A single-line paragraph border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    /// Line width in eighths of a point.
    pub size: u32,
    /// Gap between text and border, in points.
    pub space: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

/// One paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub runs: Vec<Run>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub spacing: Spacing,
    /// Left indent in twips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_left: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tab_stops: Vec<TabStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_border: Option<Border>,
}

impl Block {
    pub fn new() -> Self {
        Block::default()
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn runs(mut self, runs: impl IntoIterator<Item = Run>) -> Self {
        self.runs.extend(runs);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn spacing_before(mut self, twips: u32) -> Self {
        self.spacing.before = Some(twips);
        self
    }

    pub fn spacing_after(mut self, twips: u32) -> Self {
        self.spacing.after = Some(twips);
        self
    }

    pub fn indent_left(mut self, twips: u32) -> Self {
        self.indent_left = Some(twips);
        self
    }

    pub fn tab_stop(mut self, stop: TabStop) -> Self {
        self.tab_stops.push(stop);
        self
    }

    pub fn bottom_border(mut self, border: Border) -> Self {
        self.bottom_border = Some(border);
        self
    }

    /// Concatenated text of all runs.
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[cfg(test)]
    pub fn links(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().filter(|r| r.link.is_some())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections and document
// ────────────────────────────────────────────────────────────────────────────

/// Résumé sections in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Contact,
    Summary,
    WorkExperience,
    Education,
    Projects,
    Skills,
    Certifications,
}

impl SectionKind {
    /// Heading text; `None` for the untitled header and contact sections.
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Header | SectionKind::Contact => None,
            SectionKind::Summary => Some("Professional Summary"),
            SectionKind::WorkExperience => Some("Work Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::Skills => Some("Skills"),
            SectionKind::Certifications => Some("Certifications"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl PageMargins {
    pub fn uniform(twips: u32) -> Self {
        PageMargins {
            top: twips,
            right: twips,
            bottom: twips,
            left: twips,
        }
    }
}

/// Page size and margins in twips. Defaults to US letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margins: PageMargins,
}

impl PageSetup {
    pub fn letter(margins: PageMargins) -> Self {
        PageSetup {
            width: 12240,
            height: 15840,
            margins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document-wide default run font and size (half-points).
    pub default_font: String,
    pub default_size: u32,
    pub page: PageSetup,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    #[cfg(test)]
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}
