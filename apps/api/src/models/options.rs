use serde::Serialize;

use crate::models::profile::{ContentType, ExperienceLevel, Role, UserProfile, DEFAULT_QUERY};

/// Skills offered by the form when no catalog is configured.
pub const DEFAULT_SKILL_CATALOG: &[&str] = &["Kafka", "Java", "Spring Boot", "Python", "SQL"];

pub const PAGE_TITLE: &str = "LLM Quality Enhancement using Content Taxonomy";

pub const PAGE_CAPTION: &str = "Demonstrating how structured taxonomy + prompt design improves \
    output quality irrespective of the LLM model used.";

pub const PAGE_FOOTER: &str = "Demo Purpose: Showcasing how taxonomy-driven prompting improves \
    LLM output quality independent of the underlying model.";

/// Shown next to every generated result.
pub const RESULT_NOTICE: &str = "This output quality is driven by taxonomy + prompt structure, \
    not by a specific LLM model.";

#[derive(Debug, Clone, Serialize)]
pub struct PageCopy {
    pub title: &'static str,
    pub caption: &'static str,
    pub footer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormDefaults {
    pub profile: UserProfile,
    pub query: &'static str,
}

/// Everything a client needs to render the profile form.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub roles: Vec<Role>,
    pub skills: Vec<String>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub content_types: Vec<ContentType>,
    pub defaults: FormDefaults,
    pub page: PageCopy,
}

impl FormOptions {
    pub fn new(skill_catalog: &[String]) -> Self {
        Self {
            roles: Role::ALL.to_vec(),
            skills: skill_catalog.to_vec(),
            experience_levels: ExperienceLevel::ALL.to_vec(),
            content_types: ContentType::KNOWN.to_vec(),
            defaults: FormDefaults {
                profile: UserProfile::default(),
                query: DEFAULT_QUERY,
            },
            page: PageCopy {
                title: PAGE_TITLE,
                caption: PAGE_CAPTION,
                footer: PAGE_FOOTER,
            },
        }
    }
}
