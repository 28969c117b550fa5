use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback skill when the profile selects none.
pub const GENERAL_SKILL: &str = "General";

/// Skill pre-selected by the form.
pub const DEFAULT_SKILL: &str = "Kafka";

/// Query text pre-filled by the form.
pub const DEFAULT_QUERY: &str = "Kafka training";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Backend Engineer")]
    BackendEngineer,
    #[serde(rename = "Data Engineer")]
    DataEngineer,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::BackendEngineer, Role::DataEngineer, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::BackendEngineer => "Backend Engineer",
            Role::DataEngineer => "Data Engineer",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type selected by the user. Picks the prompt/output template pair.
///
/// `Unrecognized` carries any other value through untouched. The taxonomy
/// stage never rejects it; only the HTTP boundary does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    #[default]
    Training,
    Assessment,
    Explanation,
    Unrecognized(String),
}

impl ContentType {
    pub const KNOWN: [ContentType; 3] = [
        ContentType::Training,
        ContentType::Assessment,
        ContentType::Explanation,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Training => "Training",
            ContentType::Assessment => "Assessment",
            ContentType::Explanation => "Explanation",
            ContentType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ContentType::Unrecognized(_))
    }
}

impl From<&str> for ContentType {
    fn from(raw: &str) -> Self {
        match raw {
            "Training" => ContentType::Training,
            "Assessment" => ContentType::Assessment,
            "Explanation" => ContentType::Explanation,
            other => ContentType::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(raw: String) -> Self {
        match ContentType::from(raw.as_str()) {
            ContentType::Unrecognized(_) => ContentType::Unrecognized(raw),
            known => known,
        }
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes collected by the form. Missing fields take the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub role: Role,
    pub skills: Vec<String>,
    #[serde(alias = "experience")]
    pub experience_level: ExperienceLevel,
    pub content_type_selection: ContentType,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            role: Role::default(),
            skills: vec![DEFAULT_SKILL.to_string()],
            experience_level: ExperienceLevel::default(),
            content_type_selection: ContentType::default(),
        }
    }
}
