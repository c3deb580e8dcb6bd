//! `.docx` packaging.
//!
//! Maps the document tree onto `docx-rs` paragraphs, runs and hyperlinks and
//! packs the result into an in-memory buffer. Relationship ids, XML escaping
//! and the package layout are left to the library.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, Hyperlink, HyperlinkType, LineSpacing,
    PageMargin, Paragraph, ParagraphBorder, ParagraphBorderPosition, ParagraphBorders, Run as DocxRun, RunFonts,
    Tab, TabValueType,
};
use thiserror::Error;

use crate::document::model::{Alignment, Block, Document, Run};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Docx packaging failed: {0}")]
    Pack(String),
}

/// Serializes the document tree into `.docx` bytes. All-or-nothing: on error
/// no bytes are returned.
pub fn write_docx(doc: &Document) -> Result<Vec<u8>, DocxError> {
    let margins = &doc.page.margins;
    let mut docx = Docx::new()
        .page_size(doc.page.width, doc.page.height)
        .page_margin(
            PageMargin::new()
                .top(twips(margins.top))
                .right(twips(margins.right))
                .bottom(twips(margins.bottom))
                .left(twips(margins.left)),
        )
        .default_fonts(fonts(&doc.default_font))
        .default_size(doc.default_size as usize);

    for block in doc.blocks() {
        docx = docx.add_paragraph(paragraph(block));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocxError::Pack(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn twips(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn fonts(name: &str) -> RunFonts {
    RunFonts::new()
        .ascii(name)
        .hi_ansi(name)
        .east_asia(name)
        .cs(name)
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraphs and runs
// ────────────────────────────────────────────────────────────────────────────

fn paragraph(block: &Block) -> Paragraph {
    let mut p = Paragraph::new();

    if let Some(border) = &block.bottom_border {
        p = p.set_borders(ParagraphBorders::new().set(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .val(BorderType::Single)
                .size(border.size as usize)
                .space(border.space as usize)
                .color(border.color.as_str()),
        ));
    }
    for stop in &block.tab_stops {
        p = p.add_tab(
            Tab::new()
                .val(TabValueType::Right)
                .pos(stop.position as usize),
        );
    }
    if block.spacing.before.is_some() || block.spacing.after.is_some() {
        let mut spacing = LineSpacing::new();
        if let Some(before) = block.spacing.before {
            spacing = spacing.before(before);
        }
        if let Some(after) = block.spacing.after {
            spacing = spacing.after(after);
        }
        p = p.line_spacing(spacing);
    }
    if let Some(left) = block.indent_left {
        p = p.indent(Some(twips(left)), None, None, None);
    }
    if let Some(alignment) = block.alignment {
        p = p.align(match alignment {
            Alignment::Center => AlignmentType::Center,
            Alignment::Justified => AlignmentType::Both,
        });
    }

    for run in &block.runs {
        p = match &run.link {
            Some(target) => p.add_hyperlink(
                Hyperlink::new(target.as_str(), HyperlinkType::External).add_run(text_run(run)),
            ),
            None => p.add_run(text_run(run)),
        };
    }

    p
}

fn text_run(run: &Run) -> DocxRun {
    let mut out = DocxRun::new();
    if let Some(font) = &run.font {
        out = out.fonts(fonts(font));
    }
    if run.bold {
        out = out.bold();
    }
    if let Some(color) = &run.color {
        out = out.color(color.as_str());
    }
    if let Some(size) = run.size {
        out = out.size(size as usize);
    }

    // Tabs and line breaks are run children of their own; other control
    // characters cannot be carried by XML 1.0 and are dropped.
    let mut segment = String::new();
    for c in run.text.chars() {
        match c {
            '\t' => out = flush_text(out, &mut segment).add_tab(),
            '\n' => out = flush_text(out, &mut segment).add_break(BreakType::TextWrapping),
            c if c.is_control() => {}
            c => segment.push(c),
        }
    }
    flush_text(out, &mut segment)
}

fn flush_text(run: DocxRun, segment: &mut String) -> DocxRun {
    if segment.is_empty() {
        run
    } else {
        run.add_text(std::mem::take(segment))
    }
}

/// Paragraph texts of a packed document, read back through `docx-rs`.
#[cfg(test)]
pub(crate) fn paragraph_texts(bytes: &[u8]) -> Vec<String> {
    use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

    fn collect(child: &ParagraphChild, out: &mut String) {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    if let RunChild::Text(t) = rc {
                        out.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    collect(inner, out);
                }
            }
            _ => {}
        }
    }

    let docx = read_docx(bytes).unwrap();
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => {
                let mut text = String::new();
                for pc in &para.children {
                    collect(pc, &mut text);
                }
                Some(text)
            }
            _ => None,
        })
        .collect()
}
