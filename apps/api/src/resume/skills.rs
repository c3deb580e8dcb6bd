//! Skill Classifier: partitions free-text technical skills into fixed
//! résumé categories by keyword matching.
//!
//! Default: `KeywordSkillClassifier` (pure, deterministic, fully testable).
//!
//! `AppState` holds an `Arc<dyn SkillClassifier>` so the matching strategy
//! can be swapped without touching the section builders.
//!
//! # Matching
//! Each skill is lower-cased and tested against the keyword sets in priority
//! order languages → frontend → backend → databases → tools. The first
//! category with a hit wins; a skill with no hit lands in tools.
//!
//! Multi-character keywords match anywhere inside the skill ("javascript"
//! hits "JavaScript (ES6)"). This is heuristic: "go" also hits "Django" and
//! "MongoDB", which therefore land in languages. Single-character keywords
//! ("r", "c") only match a whole token, otherwise every skill containing
//! the letter would be a language.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Databases,
    Tools,
}

impl SkillCategory {
    /// Priority order; also the display order of the Skills section.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Databases,
        SkillCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Programming Languages",
            SkillCategory::Frontend => "Frontend Technologies",
            SkillCategory::Backend => "Backend Technologies",
            SkillCategory::Databases => "Database Management Systems (DBMS)",
            SkillCategory::Tools => "Tools & Platforms",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Languages => LANGUAGE_KEYWORDS,
            SkillCategory::Frontend => FRONTEND_KEYWORDS,
            SkillCategory::Backend => BACKEND_KEYWORDS,
            SkillCategory::Databases => DATABASE_KEYWORDS,
            SkillCategory::Tools => TOOL_KEYWORDS,
        }
    }
}

const LANGUAGE_KEYWORDS: &[&str] = &[
    "javascript", "python", "java", "c++", "c#", "typescript", "go", "rust", "php", "ruby",
    "swift", "kotlin", "scala", "r", "matlab", "c", "html", "css",
];

const FRONTEND_KEYWORDS: &[&str] = &[
    "react", "vue", "angular", "tailwind", "bootstrap", "sass", "scss", "jquery", "webpack",
    "vite", "next.js", "nuxt.js",
];

const BACKEND_KEYWORDS: &[&str] = &[
    "node.js", "express", "django", "flask", "spring", "laravel", "rails", "asp.net", "fastapi",
    "nestjs", "koa",
];

const DATABASE_KEYWORDS: &[&str] = &[
    "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle", "cassandra", "dynamodb",
    "firebase", "supabase",
];

const TOOL_KEYWORDS: &[&str] = &[
    "git", "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "gitlab", "github", "jira",
    "figma", "postman", "npm", "yarn", "linux", "windows",
];

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Classified skills. Each list keeps input order and original casing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
}

impl CategorizedSkills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tools => &self.tools,
        }
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Non-empty categories in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        SkillCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, skills)| !skills.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to change how skills are bucketed without touching the
/// section builders or handlers.
pub trait SkillClassifier: Send + Sync {
    fn classify(&self, skills: &[String]) -> CategorizedSkills;
}

/// Keyword classifier described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSkillClassifier;

impl SkillClassifier for KeywordSkillClassifier {
    fn classify(&self, skills: &[String]) -> CategorizedSkills {
        let mut out = CategorizedSkills::default();
        for skill in skills {
            out.bucket_mut(classify_skill(skill)).push(skill.clone());
        }
        out
    }
}

/// Category of a single skill string.
pub fn classify_skill(skill: &str) -> SkillCategory {
    let lower = skill.to_lowercase();
    SkillCategory::ALL
        .into_iter()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| matches_keyword(&lower, keyword))
        })
        .unwrap_or(SkillCategory::Tools)
}

fn matches_keyword(lower_skill: &str, keyword: &str) -> bool {
    if keyword.chars().count() == 1 {
        lower_skill
            .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
            .any(|token| token == keyword)
    } else {
        lower_skill.contains(keyword)
    }
}
