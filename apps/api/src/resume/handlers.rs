//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::document::DOCX_MIME;
use crate::errors::AppError;
use crate::models::portfolio::{Portfolio, PortfolioRecord};
use crate::resume::assembler::{generate_ats_resume, preview_resume, ResumePreview};
use crate::resume::normalize::canonicalize;
use crate::state::AppState;

/// POST /api/v1/portfolios/normalize
///
/// Returns the canonical view of a stored portfolio record.
pub async fn handle_normalize(
    payload: Result<Json<PortfolioRecord>, JsonRejection>,
) -> Result<Json<Portfolio>, AppError> {
    let Json(record) = payload?;
    Ok(Json(canonicalize(&record)))
}

/// POST /api/v1/resumes/ats/preview
///
/// Summary, classified skills and the document tree, without packaging.
pub async fn handle_preview(
    State(state): State<AppState>,
    payload: Result<Json<PortfolioRecord>, JsonRejection>,
) -> Result<Json<ResumePreview>, AppError> {
    let Json(record) = payload?;
    Ok(Json(preview_resume(&record, state.skill_classifier.as_ref())))
}

/// POST /api/v1/resumes/ats
///
/// Generates the ATS résumé and returns it as a `.docx` attachment.
pub async fn handle_generate_ats(
    State(state): State<AppState>,
    payload: Result<Json<PortfolioRecord>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(record) = payload?;
    let resume = generate_ats_resume(&record, state.skill_classifier.as_ref()).await?;

    let disposition = HeaderValue::from_str(&content_disposition(&resume.file_name))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        resume.bytes,
    )
        .into_response())
}

/// `attachment` disposition with an ASCII `filename` fallback and an RFC 5987
/// `filename*` carrying the exact UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    )
}
