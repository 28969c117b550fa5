//! Mock responder — stands in for a model completion with canned markdown.
//!
//! Only the skill is interpolated; the difficulty never appears in any
//! template. Training output always lists all three exercise tiers.

use crate::models::taxonomy::{Taxonomy, TemplateKind};
use crate::taxonomy::prompts::{
    ASSESSMENT_OUTPUT_TEMPLATE, EXPLANATION_OUTPUT_TEMPLATE, TRAINING_OUTPUT_TEMPLATE,
};

pub fn mock_response(taxonomy: &Taxonomy) -> String {
    let template = match taxonomy.template_kind() {
        TemplateKind::Training => TRAINING_OUTPUT_TEMPLATE,
        TemplateKind::Assessment => ASSESSMENT_OUTPUT_TEMPLATE,
        TemplateKind::Explanation => EXPLANATION_OUTPUT_TEMPLATE,
    };

    template.replace("{skill}", &taxonomy.skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{ContentType, ExperienceLevel, Role, UserProfile};
    use crate::taxonomy::builder::build_taxonomy;

    fn taxonomy(skills: &[&str], level: ExperienceLevel, content_type: ContentType) -> Taxonomy {
        let profile = UserProfile {
            role: Role::Student,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_level: level,
            content_type_selection: content_type,
        };
        build_taxonomy("q", &profile)
    }

    #[test]
    fn test_training_lists_all_tiers_for_every_difficulty() {
        for level in ExperienceLevel::ALL {
            let out = mock_response(&taxonomy(&["Kafka"], level, ContentType::Training));
            assert!(out.contains("- Beginner: Simple exercises to understand basics"));
            assert!(out.contains("- Intermediate: Create projects and mini pipelines"));
            assert!(out.contains("- Advanced: Optimize performance, design scalable solutions"));
        }
    }

    #[test]
    fn test_training_sections() {
        let out = mock_response(&taxonomy(
            &["Spring Boot"],
            ExperienceLevel::Beginner,
            ContentType::Training,
        ));
        for heading in [
            "### Learning Objectives",
            "### Core Concepts",
            "### Hands-on Exercise",
            "### Common Pitfalls",
            "### Self-Check",
        ] {
            assert!(out.contains(heading), "missing section: {heading}");
        }
        assert!(out.contains("- Understand Spring Boot core concepts"));
        assert!(out.contains("Spring Boot is a widely-used platform/technology"));
        assert!(out.contains("1. Explain the core idea of Spring Boot."));
        assert!(out.contains("2. Apply Spring Boot to a sample scenario."));
    }

    #[test]
    fn test_assessment_rubric_has_three_scored_bullets() {
        let out = mock_response(&taxonomy(&["SQL"], ExperienceLevel::Advanced, ContentType::Assessment));
        assert!(out.starts_with("### Assessment"));
        assert!(out.contains("1. What is the main purpose of SQL?"));
        assert!(out.contains("### Scenario\nDesign a solution using SQL for a practical problem."));

        let rubric = out.split("### Evaluation Rubric").nth(1).unwrap();
        let scored: Vec<_> = rubric
            .lines()
            .filter(|l| l.starts_with("- ") && l.ends_with("(0–5)"))
            .collect();
        assert_eq!(scored.len(), 3);
    }

    #[test]
    fn test_explanation_heading_names_skill() {
        let out = mock_response(&taxonomy(&[], ExperienceLevel::Intermediate, ContentType::Explanation));
        assert!(out.starts_with("### General Explained\n"));
        assert!(out.contains("### Architecture"));
        assert!(out.contains("### Real-World Usage"));
    }

    #[test]
    fn test_difficulty_never_interpolated() {
        // "Beginner" appears literally in the training tiers, so check the other kinds
        for content_type in [ContentType::Assessment, ContentType::Explanation] {
            let out = mock_response(&taxonomy(&["Java"], ExperienceLevel::Beginner, content_type));
            assert!(!out.contains("Beginner"));
        }
    }

    #[test]
    fn test_response_is_pure() {
        let t = taxonomy(&["Python"], ExperienceLevel::Advanced, ContentType::Assessment);
        assert_eq!(mock_response(&t), mock_response(&t));
    }
}
