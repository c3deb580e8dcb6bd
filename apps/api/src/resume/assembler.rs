//! Document Assembler: orchestrates the résumé pipeline.
//!
//! Flow: canonicalize → build sections in fixed order → drop empty sections
//!       → attach page setup → serialize (blocking pool) → named blob.
//!
//! Everything up to serialization is synchronous and pure. Serialization is
//! the only await point; a failure there propagates and no bytes are kept.

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::document::{write_docx, Document, PageMargins, PageSetup, Section, SectionKind};
use crate::errors::AppError;
use crate::models::portfolio::{Portfolio, PortfolioRecord};
use crate::resume::normalize::canonicalize;
use crate::resume::sections::{self, BODY_SIZE, FONT};
use crate::resume::skills::{CategorizedSkills, SkillClassifier};
use crate::resume::summary::synthesize_summary;

/// 0.5 inch on every side.
const PAGE_MARGIN_TWIPS: u32 = 720;
const FILE_SUFFIX: &str = "_ATS_Resume.docx";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A serialized résumé ready for download.
#[derive(Debug, Clone)]
pub struct GeneratedResume {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Everything the generator derives from a portfolio, short of the bytes.
#[derive(Debug, Clone, Serialize)]
pub struct ResumePreview {
    pub file_name: String,
    pub summary: String,
    /// `None` when the portfolio has no technical skills to classify.
    pub skills: Option<CategorizedSkills>,
    pub document: Document,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// `"{name}_ATS_Resume.docx"` with every whitespace run in the name replaced
/// by a single underscore.
pub fn resume_file_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }
    format!("{stem}{FILE_SUFFIX}")
}

/// Builds the document tree for a canonical portfolio.
///
/// Section order: Header, Contact, Summary, Work Experience, Education,
/// Projects, Skills, Certifications. Sections whose builder yields no blocks
/// are left out.
pub fn build_document(portfolio: &Portfolio, classifier: &dyn SkillClassifier) -> Document {
    let summary = synthesize_summary(portfolio);

    let built = [
        (SectionKind::Header, sections::header(portfolio)),
        (SectionKind::Contact, sections::contact(portfolio)),
        (SectionKind::Summary, sections::summary(&summary)),
        (SectionKind::WorkExperience, sections::work_experience(portfolio)),
        (SectionKind::Education, sections::education(portfolio)),
        (SectionKind::Projects, sections::projects(portfolio)),
        (SectionKind::Skills, sections::skills(portfolio, classifier)),
        (SectionKind::Certifications, sections::certifications(portfolio)),
    ];

    let sections: Vec<Section> = built
        .into_iter()
        .filter(|(_, blocks)| !blocks.is_empty())
        .map(|(kind, blocks)| Section { kind, blocks })
        .collect();

    debug!(
        sections = sections.len(),
        blocks = sections.iter().map(|s| s.blocks.len()).sum::<usize>(),
        "Assembled resume document"
    );

    Document {
        default_font: FONT.to_string(),
        default_size: BODY_SIZE,
        page: PageSetup::letter(PageMargins::uniform(PAGE_MARGIN_TWIPS)),
        sections,
    }
}

/// Canonicalizes the record and derives summary, skill buckets and document
/// without serializing.
pub fn preview_resume(
    record: &PortfolioRecord,
    classifier: &dyn SkillClassifier,
) -> ResumePreview {
    let portfolio = canonicalize(record);
    let skills = (!portfolio.technical_skills.is_empty())
        .then(|| classifier.classify(&portfolio.technical_skills));

    ResumePreview {
        file_name: resume_file_name(&portfolio.name),
        summary: synthesize_summary(&portfolio),
        skills,
        document: build_document(&portfolio, classifier),
    }
}

/// Full pipeline: canonicalize, build, serialize.
///
/// Serialization runs via `spawn_blocking`; its failure is returned as
/// `AppError::Render` and nothing partial is handed back.
pub async fn generate_ats_resume(
    record: &PortfolioRecord,
    classifier: &dyn SkillClassifier,
) -> Result<GeneratedResume, AppError> {
    let portfolio = canonicalize(record);
    let file_name = resume_file_name(&portfolio.name);
    let document = build_document(&portfolio, classifier);

    let bytes = tokio::task::spawn_blocking(move || write_docx(&document))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in docx packaging: {e}"))
        })??;

    info!(file_name = %file_name, bytes = bytes.len(), "Generated ATS resume");

    Ok(GeneratedResume {
        file_name,
        bytes: Bytes::from(bytes),
    })
}
