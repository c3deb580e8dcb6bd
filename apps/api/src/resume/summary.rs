//! Summary Synthesizer: composes the Professional Summary paragraph from
//! what the portfolio contains. Works on any input, including an empty one.

use crate::models::portfolio::Portfolio;

/// Number of leading skills named in the opening sentence.
const TOP_SKILL_COUNT: usize = 4;

const PROJECTS_SENTENCE: &str =
    "Demonstrated ability to build full-stack applications and deliver innovative solutions. ";
const CLOSING_SENTENCE: &str = "Passionate about creating efficient, scalable software solutions and contributing to dynamic development teams.";

/// The first four technical skills, or the first four general skills when
/// there are no technical ones.
pub fn top_skills(portfolio: &Portfolio) -> &[String] {
    let source = if portfolio.technical_skills.is_empty() {
        &portfolio.skills
    } else {
        &portfolio.technical_skills
    };
    &source[..source.len().min(TOP_SKILL_COUNT)]
}

/// Builds the summary. "Most recent" job and education mean the first
/// entries of their lists; callers own the ordering.
pub fn synthesize_summary(portfolio: &Portfolio) -> String {
    let skills = top_skills(portfolio).join(", ");

    let mut summary = match portfolio.work_experience.first() {
        Some(latest) => format!("Experienced {} with expertise in {skills}. ", latest.title),
        None => format!("Motivated software developer with strong foundation in {skills}. "),
    };

    if !portfolio.projects.is_empty() {
        summary.push_str(PROJECTS_SENTENCE);
    }

    if let Some(education) = portfolio.education.first() {
        summary.push_str(&format!(
            "{} graduate from {}. ",
            education.degree, education.institution
        ));
    }

    summary.push_str(CLOSING_SENTENCE);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Education, Project, WorkExperience};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_experience_opening() {
        let portfolio = Portfolio {
            technical_skills: strings(&["React", "Docker", "PostgreSQL", "Python"]),
            ..Portfolio::default()
        };
        let summary = synthesize_summary(&portfolio);
        assert!(summary.starts_with(
            "Motivated software developer with strong foundation in React, Docker, PostgreSQL, Python. "
        ));
        assert!(summary.ends_with(CLOSING_SENTENCE));
    }

    #[test]
    fn test_experience_uses_first_job_title() {
        let portfolio = Portfolio {
            work_experience: vec![
                WorkExperience {
                    title: "Senior Engineer".to_string(),
                    ..WorkExperience::default()
                },
                WorkExperience {
                    title: "Intern".to_string(),
                    ..WorkExperience::default()
                },
            ],
            technical_skills: strings(&["Rust", "Go"]),
            ..Portfolio::default()
        };
        assert!(synthesize_summary(&portfolio)
            .starts_with("Experienced Senior Engineer with expertise in Rust, Go. "));
    }

    #[test]
    fn test_caps_at_four_skills() {
        let portfolio = Portfolio {
            technical_skills: strings(&["A1", "B2", "C3", "D4", "E5", "F6"]),
            ..Portfolio::default()
        };
        assert_eq!(top_skills(&portfolio), &strings(&["A1", "B2", "C3", "D4"])[..]);
    }

    #[test]
    fn test_falls_back_to_general_skills() {
        let portfolio = Portfolio {
            skills: strings(&["Communication", "Leadership"]),
            ..Portfolio::default()
        };
        assert!(synthesize_summary(&portfolio)
            .contains("strong foundation in Communication, Leadership. "));
    }

    #[test]
    fn test_projects_and_education_sentences() {
        let portfolio = Portfolio {
            projects: vec![Project::default()],
            education: vec![
                Education {
                    degree: "B.Tech in CSE".to_string(),
                    institution: "IIT Delhi".to_string(),
                    ..Education::default()
                },
                Education {
                    degree: "High School".to_string(),
                    institution: "DPS".to_string(),
                    ..Education::default()
                },
            ],
            ..Portfolio::default()
        };
        let summary = synthesize_summary(&portfolio);
        assert!(summary.contains(PROJECTS_SENTENCE));
        assert!(summary.contains("B.Tech in CSE graduate from IIT Delhi. "));
        assert!(!summary.contains("DPS"));
    }

    #[test]
    fn test_empty_portfolio_still_produces_summary() {
        let summary = synthesize_summary(&Portfolio::default());
        assert_eq!(
            summary,
            format!("Motivated software developer with strong foundation in . {CLOSING_SENTENCE}")
        );
    }
}
