//! Field Normalizer: resolves the dual field spellings of a stored portfolio
//! into one canonical `Portfolio`. Applied once at the boundary; never fails.

use crate::models::portfolio::{Education, Portfolio, PortfolioRecord, Project};

const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Builds the canonical view of `record`.
///
/// Dual-named fields take the camelCase value when it is non-empty and fall
/// back to the snake_case value. Idempotent: canonicalizing the record
/// produced from a canonical portfolio yields the same portfolio.
pub fn canonicalize(record: &PortfolioRecord) -> Portfolio {
    Portfolio {
        id: record.id.clone(),
        user_id: first_non_blank(record.user_id.as_deref(), record.user_id_snake.as_deref()),
        name: record.name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
        location: record.location.clone(),
        bio: record.bio.clone(),
        github_url: normalize_url(&first_non_empty(
            record.github_url.as_deref(),
            record.github_url_snake.as_deref(),
        )),
        linkedin_url: normalize_url(&first_non_empty(
            record.linkedin_url.as_deref(),
            record.linkedin_url_snake.as_deref(),
        )),
        education: record.education.iter().map(canonical_education).collect(),
        work_experience: first_non_empty_list(
            record.work_experience.as_deref(),
            record.work_experience_snake.as_deref(),
        ),
        projects: record.projects.iter().map(canonical_project).collect(),
        skills: record.skills.clone(),
        technical_skills: first_non_empty_list(
            record.technical_skills.as_deref(),
            record.technical_skills_snake.as_deref(),
        ),
        achievements: record.achievements.clone(),
        profile_photo: first_non_empty(
            record.profile_photo.as_deref(),
            record.profile_photo_snake.as_deref(),
        ),
        resume_link: first_non_empty(
            record.resume_link.as_deref(),
            record.resume_link_snake.as_deref(),
        ),
        theme: record.theme,
        created_at: first_non_blank(
            record.created_at.as_deref(),
            record.created_at_snake.as_deref(),
        ),
        updated_at: first_non_blank(
            record.updated_at.as_deref(),
            record.updated_at_snake.as_deref(),
        ),
    }
}

/// Prefixes `https://` to a non-empty URL that lacks an http(s) scheme.
/// Surrounding whitespace is trimmed; an empty value stays empty.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if url.is_empty() {
        return String::new();
    }
    let lower = url.to_ascii_lowercase();
    if URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn first_non_empty(preferred: Option<&str>, alternate: Option<&str>) -> String {
    [preferred, alternate]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

fn first_non_empty_list<T: Clone>(preferred: Option<&[T]>, alternate: Option<&[T]>) -> Vec<T> {
    [preferred, alternate]
        .into_iter()
        .flatten()
        .find(|list| !list.is_empty())
        .map(<[T]>::to_vec)
        .unwrap_or_default()
}

fn first_non_blank(preferred: Option<&str>, alternate: Option<&str>) -> Option<String> {
    non_blank(Some(first_non_empty(preferred, alternate).as_str()))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Optional entry fields holding only whitespace are treated as absent.
fn canonical_education(entry: &Education) -> Education {
    Education {
        grade: non_blank(entry.grade.as_deref()),
        ..entry.clone()
    }
}

fn canonical_project(entry: &Project) -> Project {
    Project {
        live_link: non_blank(entry.live_link.as_deref()),
        github_link: non_blank(entry.github_link.as_deref()),
        image: non_blank(entry.image.as_deref()),
        ..entry.clone()
    }
}
