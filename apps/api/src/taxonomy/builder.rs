//! Taxonomy builder — folds a user profile and query into a `Taxonomy`.

use crate::models::profile::{ContentType, UserProfile, GENERAL_SKILL};
use crate::models::taxonomy::{Taxonomy, CONTEXT_DEPTH, MODEL_DEPENDENCY, OUTPUT_FORMAT};

/// Learning goal for a content type. Unrecognized types get the training goal.
pub fn learning_goal_for(content_type: &ContentType) -> &'static str {
    match content_type {
        ContentType::Training => "Hands-on learning",
        ContentType::Assessment => "Evaluate understanding",
        ContentType::Explanation => "Conceptual clarity",
        ContentType::Unrecognized(_) => "Hands-on learning",
    }
}

/// First selected skill, or `"General"` when none is selected.
pub fn focus_skill(skills: &[String]) -> &str {
    skills.first().map(String::as_str).unwrap_or(GENERAL_SKILL)
}

/// Builds the taxonomy for a query and profile. Total and deterministic.
pub fn build_taxonomy(query: &str, profile: &UserProfile) -> Taxonomy {
    let content_type = profile.content_type_selection.clone();

    Taxonomy {
        skill: focus_skill(&profile.skills).to_string(),
        learning_goal: learning_goal_for(&content_type).to_string(),
        content_type,
        difficulty: profile.experience_level,
        user_role: profile.role,
        output_format: OUTPUT_FORMAT.to_string(),
        context_depth: CONTEXT_DEPTH.to_string(),
        model_dependency: MODEL_DEPENDENCY.to_string(),
        query: query.to_string(),
    }
}
