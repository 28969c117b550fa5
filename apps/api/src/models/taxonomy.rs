use serde::{Deserialize, Serialize};

use crate::models::profile::{ContentType, ExperienceLevel, Role};

pub const OUTPUT_FORMAT: &str = "Structured";
pub const CONTEXT_DEPTH: &str = "High";
pub const MODEL_DEPENDENCY: &str = "None (Model-Agnostic)";

/// Structured record derived from a profile and query. Drives both the prompt
/// and the mock output.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub skill: String,
    pub content_type: ContentType,
    pub difficulty: ExperienceLevel,
    pub user_role: Role,
    pub learning_goal: String,
    pub output_format: String,
    pub context_depth: String,
    pub model_dependency: String,
    pub query: String,
}

/// Template pair selected by a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Training,
    Assessment,
    Explanation,
}

impl From<&ContentType> for TemplateKind {
    fn from(content_type: &ContentType) -> Self {
        match content_type {
            ContentType::Training => TemplateKind::Training,
            ContentType::Assessment => TemplateKind::Assessment,
            // Anything that is not Training or Assessment renders as an explanation
            ContentType::Explanation | ContentType::Unrecognized(_) => TemplateKind::Explanation,
        }
    }
}

impl Taxonomy {
    pub fn template_kind(&self) -> TemplateKind {
        TemplateKind::from(&self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_content_type_uses_explanation_templates() {
        let kind = TemplateKind::from(&ContentType::Unrecognized("Quiz".to_string()));
        assert_eq!(kind, TemplateKind::Explanation);
    }

    #[test]
    fn test_known_content_types_map_one_to_one() {
        assert_eq!(TemplateKind::from(&ContentType::Training), TemplateKind::Training);
        assert_eq!(TemplateKind::from(&ContentType::Assessment), TemplateKind::Assessment);
        assert_eq!(TemplateKind::from(&ContentType::Explanation), TemplateKind::Explanation);
    }
}
