//! Portfolio records as they arrive on the wire and in canonical form.
//!
//! `PortfolioRecord` mirrors the stored row, which carries camelCase fields
//! written by the form and snake_case fields written by older database
//! mappings. `Portfolio` is the canonical view produced by
//! `resume::normalize::canonicalize`; nothing downstream reads the record.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    /// Free text, rendered verbatim ("2020 - 2024", "2023").
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// `YYYY-MM` as produced by a month picker.
    #[serde(default, alias = "start_date", deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, alias = "end_date", deserialize_with = "null_as_default")]
    pub end_date: String,
    /// When set, `end_date` is ignored and the range ends in "Present".
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, alias = "live_link", skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, alias = "github_link", skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Display preference of the portfolio site; the résumé ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Case-insensitive; anything other than "dark" reads as `Light`.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let theme = match value.as_str().map(|s| s.trim().to_ascii_lowercase()) {
            Some(name) if name == "dark" => Theme::Dark,
            _ => Theme::Light,
        };
        Ok(theme)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire record
// ────────────────────────────────────────────────────────────────────────────

/// A portfolio exactly as supplied by the caller.
///
/// Fields that exist under two spellings are kept side by side; the
/// `*_snake` members hold the database spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "user_id", default, skip_serializing_if = "Option::is_none")]
    pub user_id_snake: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: Theme,

    #[serde(rename = "githubUrl", default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(rename = "github_url", default, skip_serializing_if = "Option::is_none")]
    pub github_url_snake: Option<String>,

    #[serde(rename = "linkedinUrl", default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(rename = "linkedin_url", default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url_snake: Option<String>,

    #[serde(rename = "workExperience", default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(rename = "work_experience", default, skip_serializing_if = "Option::is_none")]
    pub work_experience_snake: Option<Vec<WorkExperience>>,

    #[serde(rename = "technicalSkills", default, skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<Vec<String>>,
    #[serde(rename = "technical_skills", default, skip_serializing_if = "Option::is_none")]
    pub technical_skills_snake: Option<Vec<String>>,

    #[serde(rename = "profilePhoto", default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(rename = "profile_photo", default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_snake: Option<String>,

    #[serde(rename = "resumeLink", default, skip_serializing_if = "Option::is_none")]
    pub resume_link: Option<String>,
    #[serde(rename = "resume_link", default, skip_serializing_if = "Option::is_none")]
    pub resume_link_snake: Option<String>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at_snake: Option<String>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "updated_at", default, skip_serializing_if = "Option::is_none")]
    pub updated_at_snake: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Canonical record
// ────────────────────────────────────────────────────────────────────────────

/// One authoritative field per logical attribute. Lists are never absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    /// Scheme-normalized; empty when neither spelling carried a value.
    pub github_url: String,
    pub linkedin_url: String,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub achievements: Vec<String>,
    pub profile_photo: String,
    pub resume_link: String,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Portfolio> for PortfolioRecord {
    /// Writes the canonical values back under the camelCase spellings only.
    fn from(p: Portfolio) -> Self {
        PortfolioRecord {
            id: p.id,
            user_id: p.user_id,
            name: p.name,
            email: p.email,
            phone: p.phone,
            location: p.location,
            bio: p.bio,
            education: p.education,
            projects: p.projects,
            skills: p.skills,
            achievements: p.achievements,
            theme: p.theme,
            github_url: Some(p.github_url),
            linkedin_url: Some(p.linkedin_url),
            work_experience: Some(p.work_experience),
            technical_skills: Some(p.technical_skills),
            profile_photo: Some(p.profile_photo),
            resume_link: Some(p.resume_link),
            created_at: p.created_at,
            updated_at: p.updated_at,
            ..PortfolioRecord::default()
        }
    }
}
