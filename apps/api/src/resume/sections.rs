//! Section Builders: one function per résumé section.
//!
//! Each builder maps the canonical portfolio to the blocks of its section,
//! heading included. A builder whose data is empty returns no blocks and the
//! assembler drops the section entirely.

use crate::document::{Alignment, Block, Border, Run, SectionKind, TabStop};
use crate::models::portfolio::{Education, Portfolio, Project, WorkExperience};
use crate::resume::dates::format_date_range;
use crate::resume::skills::SkillClassifier;

pub const FONT: &str = "Calibri";
/// Body text, 11pt.
pub const BODY_SIZE: u32 = 22;
const NAME_SIZE: u32 = 32;
const HEADING_SIZE: u32 = 26;
const RULE_SIZE: u32 = 4;
const LINK_COLOR: &str = "000000";

const BULLET_INDENT: u32 = 360;
const RIGHT_TAB_POSITION: u32 = 9000;

const CONTACT_SPACER: &str = "     ";
const PHONE_PLACEHOLDER: &str = "Phone not provided";

// ────────────────────────────────────────────────────────────────────────────
// Shared block shapes
// ────────────────────────────────────────────────────────────────────────────

fn body(text: impl Into<String>) -> Run {
    Run::new(text).size(BODY_SIZE).font(FONT)
}

fn link(label: &str, target: &str) -> Run {
    body(label).color(LINK_COLOR).link(target)
}

/// Upper-cased bold title followed by an empty paragraph carrying the rule.
fn heading(title: &str) -> Vec<Block> {
    vec![
        Block::new()
            .run(Run::new(title.to_uppercase()).bold().size(HEADING_SIZE).font(FONT))
            .spacing_before(240)
            .spacing_after(0),
        Block::new()
            .run(Run::new("").size(RULE_SIZE))
            .bottom_border(Border {
                size: 6,
                space: 1,
                color: "000000".to_string(),
            })
            .spacing_after(180),
    ]
}

fn bullet(text: &str) -> Block {
    Block::new()
        .run(body(format!("• {text}")))
        .spacing_after(100)
        .indent_left(BULLET_INDENT)
}

fn spacer() -> Block {
    Block::new().spacing_after(120)
}

/// Bold left text, then a tab to the right-aligned stop, then `right`.
fn entry_line(left: &str, right: &str, after: u32) -> Block {
    Block::new()
        .run(body(left).bold())
        .run(Run::tab().size(BODY_SIZE))
        .run(body(right))
        .tab_stop(TabStop::right(RIGHT_TAB_POSITION))
        .spacing_after(after)
}

fn titled(kind: SectionKind, entries: Vec<Block>) -> Vec<Block> {
    let mut blocks = heading(kind.title().unwrap_or_default());
    blocks.extend(entries);
    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Header and contact
// ────────────────────────────────────────────────────────────────────────────

pub fn header(portfolio: &Portfolio) -> Vec<Block> {
    vec![Block::new()
        .run(
            Run::new(portfolio.name.to_uppercase())
                .bold()
                .size(NAME_SIZE)
                .font(FONT),
        )
        .align(Alignment::Center)
        .spacing_after(120)]
}

/// Email link, phone (or placeholder), then GitHub and LinkedIn links when
/// present, on one centered line.
pub fn contact(portfolio: &Portfolio) -> Vec<Block> {
    let mut runs = vec![body("📧 ")];
    let email = portfolio.email.trim();
    if email.is_empty() {
        runs.push(body(""));
    } else {
        runs.push(link(email, &format!("mailto:{email}")));
    }

    runs.push(body(format!("{CONTACT_SPACER}📞 ")));
    let phone = portfolio.phone.trim();
    runs.push(body(if phone.is_empty() { PHONE_PLACEHOLDER } else { phone }));

    for (label, url) in [
        ("GitHub", &portfolio.github_url),
        ("LinkedIn", &portfolio.linkedin_url),
    ] {
        if !url.is_empty() {
            runs.push(body(CONTACT_SPACER));
            runs.push(link(label, url));
        }
    }

    vec![Block::new()
        .runs(runs)
        .align(Alignment::Center)
        .spacing_after(240)]
}

// ────────────────────────────────────────────────────────────────────────────
// Body sections
// ────────────────────────────────────────────────────────────────────────────

/// Always present; `text` comes from the Summary Synthesizer.
pub fn summary(text: &str) -> Vec<Block> {
    titled(
        SectionKind::Summary,
        vec![Block::new()
            .run(body(text))
            .spacing_after(240)
            .align(Alignment::Justified)],
    )
}

pub fn work_experience(portfolio: &Portfolio) -> Vec<Block> {
    if portfolio.work_experience.is_empty() {
        return vec![];
    }
    titled(
        SectionKind::WorkExperience,
        portfolio.work_experience.iter().flat_map(job_blocks).collect(),
    )
}

fn job_blocks(job: &WorkExperience) -> Vec<Block> {
    let dates = format_date_range(&job.start_date, &job.end_date, job.current);
    let mut blocks = vec![entry_line(
        &format!("{} - {}", job.company, job.title),
        &dates,
        100,
    )];
    blocks.extend(
        job.description
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| bullet(line)),
    );
    blocks.push(spacer());
    blocks
}

pub fn education(portfolio: &Portfolio) -> Vec<Block> {
    if portfolio.education.is_empty() {
        return vec![];
    }
    titled(
        SectionKind::Education,
        portfolio.education.iter().flat_map(education_blocks).collect(),
    )
}

fn education_blocks(entry: &Education) -> Vec<Block> {
    let degree = match &entry.grade {
        Some(grade) => format!("{} (Aggregate CGPA: {grade})", entry.degree),
        None => entry.degree.clone(),
    };
    vec![
        entry_line(&entry.institution, &entry.year, 80),
        Block::new().run(body(degree)).spacing_after(120),
    ]
}

pub fn projects(portfolio: &Portfolio) -> Vec<Block> {
    if portfolio.projects.is_empty() {
        return vec![];
    }
    titled(
        SectionKind::Projects,
        portfolio.projects.iter().flat_map(project_blocks).collect(),
    )
}

fn project_blocks(project: &Project) -> Vec<Block> {
    let mut title = Block::new()
        .run(body(project.title.as_str()).bold())
        .spacing_after(100);
    for (label, target) in [
        ("Demo", &project.live_link),
        ("GitHub", &project.github_link),
    ] {
        if let Some(target) = target {
            title = title.run(body(" | ")).run(link(label, target));
        }
    }

    vec![
        title,
        bullet(&format!("Tech Stack: {}", project.technologies.join(", "))),
        bullet(&project.description),
        spacer(),
    ]
}

/// Categorized technical skills when there are any, otherwise one bullet of
/// general skills. Omitted when both lists are empty.
pub fn skills(portfolio: &Portfolio, classifier: &dyn SkillClassifier) -> Vec<Block> {
    let entries: Vec<Block> = if !portfolio.technical_skills.is_empty() {
        classifier
            .classify(&portfolio.technical_skills)
            .non_empty()
            .map(|(category, skills)| {
                Block::new()
                    .run(body(format!("• {}: ", category.label())).bold())
                    .run(body(skills.join(", ")))
                    .spacing_after(100)
                    .indent_left(BULLET_INDENT)
            })
            .collect()
    } else if !portfolio.skills.is_empty() {
        vec![bullet(&portfolio.skills.join(", "))]
    } else {
        return vec![];
    };

    let mut blocks = titled(SectionKind::Skills, entries);
    blocks.push(spacer());
    blocks
}

pub fn certifications(portfolio: &Portfolio) -> Vec<Block> {
    if portfolio.achievements.is_empty() {
        return vec![];
    }
    titled(
        SectionKind::Certifications,
        portfolio.achievements.iter().map(|a| bullet(a)).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::skills::KeywordSkillClassifier;

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks.iter().map(Block::text).collect()
    }

    #[test]
    fn test_header_upper_cases_name() {
        let portfolio = Portfolio {
            name: "Jane Doe".to_string(),
            ..Portfolio::default()
        };
        let blocks = header(&portfolio);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "JANE DOE");
        assert!(blocks[0].runs[0].bold);
        assert_eq!(blocks[0].runs[0].size, Some(NAME_SIZE));
        assert_eq!(blocks[0].alignment, Some(Alignment::Center));
    }

    #[test]
    fn test_contact_links() {
        let portfolio = Portfolio {
            email: "jane@x.com".to_string(),
            linkedin_url: "https://linkedin.com/in/jane".to_string(),
            ..Portfolio::default()
        };
        let blocks = contact(&portfolio);
        let links: Vec<(&str, &str)> = blocks[0]
            .links()
            .map(|r| (r.text.as_str(), r.link.as_deref().unwrap_or_default()))
            .collect();

        assert_eq!(
            links,
            vec![
                ("jane@x.com", "mailto:jane@x.com"),
                ("LinkedIn", "https://linkedin.com/in/jane"),
            ]
        );
        assert!(blocks[0].text().contains(PHONE_PLACEHOLDER));
        assert!(!blocks[0].text().contains("GitHub"));
    }

    #[test]
    fn test_contact_trims_email() {
        let portfolio = Portfolio {
            email: "  jane@x.com ".to_string(),
            ..Portfolio::default()
        };
        let blocks = contact(&portfolio);
        let links: Vec<(&str, &str)> = blocks[0]
            .links()
            .map(|r| (r.text.as_str(), r.link.as_deref().unwrap_or_default()))
            .collect();
        assert_eq!(links, vec![("jane@x.com", "mailto:jane@x.com")]);
    }

    #[test]
    fn test_contact_blank_email_has_no_mailto() {
        let portfolio = Portfolio {
            email: "   ".to_string(),
            phone: "555".to_string(),
            ..Portfolio::default()
        };
        let blocks = contact(&portfolio);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].links().count(), 0);
        assert_eq!(blocks[0].text(), "📧      📞 555");
    }

    #[test]
    fn test_contact_phone_literal() {
        let portfolio = Portfolio {
            email: "jane@x.com".to_string(),
            phone: "+1 555 0100".to_string(),
            github_url: "https://github.com/jane".to_string(),
            ..Portfolio::default()
        };
        let text = contact(&portfolio)[0].text();
        assert_eq!(
            text,
            "📧 jane@x.com     📞 +1 555 0100     GitHub"
        );
    }

    #[test]
    fn test_summary_is_justified_under_heading() {
        let blocks = summary("Hello.");
        assert_eq!(texts(&blocks), vec!["PROFESSIONAL SUMMARY", "", "Hello."]);
        assert!(blocks[1].bottom_border.is_some());
        assert_eq!(blocks[2].alignment, Some(Alignment::Justified));
    }

    #[test]
    fn test_work_experience_current_job() {
        let portfolio = Portfolio {
            work_experience: vec![WorkExperience {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                start_date: "2022-01".to_string(),
                end_date: String::new(),
                current: true,
                description: vec!["Built things".to_string(), "   ".to_string()],
                ..WorkExperience::default()
            }],
            ..Portfolio::default()
        };
        let blocks = work_experience(&portfolio);

        // heading, rule, job line, one bullet, spacer
        assert_eq!(blocks.len(), 5);
        let job = &blocks[2];
        assert_eq!(job.runs[0].text, "Acme - Engineer");
        assert!(job.runs[0].bold);
        assert_eq!(job.runs[1].text, "\t");
        assert_eq!(job.runs[2].text, "Jan 2022 - Present");
        assert_eq!(job.tab_stops, vec![TabStop::right(RIGHT_TAB_POSITION)]);
        assert_eq!(blocks[3].text(), "• Built things");
        assert_eq!(blocks[3].indent_left, Some(BULLET_INDENT));
        assert!(blocks[4].runs.is_empty());
    }

    #[test]
    fn test_work_experience_bad_dates_pass_through() {
        let portfolio = Portfolio {
            work_experience: vec![WorkExperience {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                start_date: "not-a-date".to_string(),
                end_date: "2023-06".to_string(),
                ..WorkExperience::default()
            }],
            ..Portfolio::default()
        };
        assert_eq!(
            work_experience(&portfolio)[2].runs[2].text,
            "not-a-date - Jun 2023"
        );
    }

    #[test]
    fn test_education_with_and_without_grade() {
        let portfolio = Portfolio {
            education: vec![
                Education {
                    degree: "B.Tech".to_string(),
                    institution: "IIT Delhi".to_string(),
                    year: "2019 - 2023".to_string(),
                    grade: Some("8.7".to_string()),
                    ..Education::default()
                },
                Education {
                    degree: "Class XII".to_string(),
                    institution: "DPS".to_string(),
                    year: "2019".to_string(),
                    grade: None,
                    ..Education::default()
                },
            ],
            ..Portfolio::default()
        };
        let blocks = education(&portfolio);
        assert_eq!(
            texts(&blocks[2..]),
            vec![
                "IIT Delhi\t2019 - 2023",
                "B.Tech (Aggregate CGPA: 8.7)",
                "DPS\t2019",
                "Class XII",
            ]
        );
        assert!(!blocks[3].runs[0].bold);
    }

    #[test]
    fn test_project_links_and_bullets() {
        let portfolio = Portfolio {
            projects: vec![Project {
                title: "Folio".to_string(),
                description: "Portfolio builder".to_string(),
                technologies: vec!["React".to_string(), "Supabase".to_string()],
                live_link: Some("https://folio.dev".to_string()),
                github_link: Some("https://github.com/jane/folio".to_string()),
                ..Project::default()
            }],
            ..Portfolio::default()
        };
        let blocks = projects(&portfolio);

        assert_eq!(blocks[2].text(), "Folio | Demo | GitHub");
        let targets: Vec<_> = blocks[2].links().filter_map(|r| r.link.clone()).collect();
        assert_eq!(
            targets,
            vec!["https://folio.dev", "https://github.com/jane/folio"]
        );
        assert_eq!(blocks[3].text(), "• Tech Stack: React, Supabase");
        assert_eq!(blocks[4].text(), "• Portfolio builder");
        assert!(blocks[5].runs.is_empty());
    }

    #[test]
    fn test_project_without_links() {
        let portfolio = Portfolio {
            projects: vec![Project {
                title: "CLI".to_string(),
                ..Project::default()
            }],
            ..Portfolio::default()
        };
        assert_eq!(projects(&portfolio)[2].text(), "CLI");
    }

    #[test]
    fn test_skills_categorized() {
        let portfolio = Portfolio {
            technical_skills: ["React", "Docker", "PostgreSQL", "Python"]
                .map(String::from)
                .to_vec(),
            skills: vec!["Leadership".to_string()],
            ..Portfolio::default()
        };
        let blocks = skills(&portfolio, &KeywordSkillClassifier);
        assert_eq!(
            texts(&blocks),
            vec![
                "SKILLS",
                "",
                "• Programming Languages: Python",
                "• Frontend Technologies: React",
                "• Database Management Systems (DBMS): PostgreSQL",
                "• Tools & Platforms: Docker",
                "",
            ]
        );
        assert!(blocks[2].runs[0].bold);
        assert!(!blocks[2].runs[1].bold);
    }

    #[test]
    fn test_skills_general_fallback() {
        let portfolio = Portfolio {
            skills: vec!["Communication".to_string(), "Leadership".to_string()],
            ..Portfolio::default()
        };
        let blocks = skills(&portfolio, &KeywordSkillClassifier);
        assert_eq!(blocks[2].text(), "• Communication, Leadership");
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let portfolio = Portfolio::default();
        assert!(work_experience(&portfolio).is_empty());
        assert!(education(&portfolio).is_empty());
        assert!(projects(&portfolio).is_empty());
        assert!(skills(&portfolio, &KeywordSkillClassifier).is_empty());
        assert!(certifications(&portfolio).is_empty());
    }

    #[test]
    fn test_certifications_verbatim_in_order() {
        let portfolio = Portfolio {
            achievements: vec!["AWS SAA".to_string(), "CKA".to_string()],
            ..Portfolio::default()
        };
        assert_eq!(
            texts(&certifications(&portfolio)[2..]),
            vec!["• AWS SAA", "• CKA"]
        );
    }
}
