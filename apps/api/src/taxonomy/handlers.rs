//! Axum route handlers for the Taxonomy API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::options::{FormOptions, RESULT_NOTICE};
use crate::models::profile::{ContentType, UserProfile, DEFAULT_QUERY};
use crate::models::taxonomy::Taxonomy;
use crate::state::AppState;
use crate::taxonomy::pipeline::run_pipeline;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default = "default_query")]
    pub query: String,
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub taxonomy: Taxonomy,
    pub prompt: String,
    pub output: String,
    pub notice: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Boundary validation
// ────────────────────────────────────────────────────────────────────────────

/// Rejects values the form could never produce and drops duplicate skills,
/// keeping the first occurrence of each.
pub fn validate_profile(
    mut profile: UserProfile,
    skill_catalog: &[String],
) -> Result<UserProfile, AppError> {
    if !profile.content_type_selection.is_recognized() {
        let allowed: Vec<&str> = ContentType::KNOWN.iter().map(|c| c.as_str()).collect();
        return Err(AppError::Validation(format!(
            "content_type_selection '{}' must be one of: {}",
            profile.content_type_selection,
            allowed.join(", ")
        )));
    }

    if let Some(unknown) = profile
        .skills
        .iter()
        .find(|skill| !skill_catalog.contains(skill))
    {
        return Err(AppError::Validation(format!(
            "skill '{unknown}' is not offered; choose from: {}",
            skill_catalog.join(", ")
        )));
    }

    let mut seen: Vec<String> = Vec::with_capacity(profile.skills.len());
    for skill in profile.skills.drain(..) {
        if !seen.contains(&skill) {
            seen.push(skill);
        }
    }
    profile.skills = seen;

    Ok(profile)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/taxonomy/options
///
/// Returns the form choices, defaults and page copy.
pub async fn handle_get_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(FormOptions::new(&state.config.skill_catalog))
}

/// POST /api/v1/taxonomy/generate
///
/// Runs taxonomy → prompt → mock output for one profile and query.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let Json(request) = payload?;

    let profile = validate_profile(request.profile, &state.config.skill_catalog).map_err(|e| {
        warn!(%request_id, "Rejected generate request: {e}");
        e
    })?;

    let result = run_pipeline(&request.query, &profile);
    info!(
        %request_id,
        skill = %result.taxonomy.skill,
        content_type = %result.taxonomy.content_type,
        difficulty = %result.taxonomy.difficulty,
        "Generated taxonomy output"
    );

    Ok(Json(GenerateResponse {
        request_id,
        taxonomy: result.taxonomy,
        prompt: result.prompt,
        output: result.output,
        notice: RESULT_NOTICE,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::options::DEFAULT_SKILL_CATALOG;

    fn catalog() -> Vec<String> {
        DEFAULT_SKILL_CATALOG.iter().map(|s| s.to_string()).collect()
    }

    fn profile_with(skills: &[&str]) -> UserProfile {
        UserProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_duplicate_skills_removed_in_order() {
        let p = validate_profile(profile_with(&["Java", "Kafka", "Java", "SQL", "Kafka"]), &catalog())
            .unwrap();
        assert_eq!(p.skills, vec!["Java", "Kafka", "SQL"]);
    }

    #[test]
    fn test_skill_outside_catalog_rejected() {
        let err = validate_profile(profile_with(&["Kafka", "Cobol"]), &catalog()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Cobol")));
    }

    #[test]
    fn test_empty_skills_allowed() {
        let p = validate_profile(profile_with(&[]), &catalog()).unwrap();
        assert!(p.skills.is_empty());
    }

    #[test]
    fn test_unrecognized_content_type_rejected() {
        let mut p = profile_with(&["Kafka"]);
        p.content_type_selection = ContentType::Unrecognized("Quiz".to_string());
        let err = validate_profile(p, &catalog()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Quiz")));
    }

    #[test]
    fn test_request_defaults() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.query, "Kafka training");
        assert_eq!(request.profile, UserProfile::default());
    }
}
