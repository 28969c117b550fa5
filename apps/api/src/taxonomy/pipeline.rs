//! Pipeline glue: taxonomy → prompt and mock output.

use serde::Serialize;

use crate::models::profile::UserProfile;
use crate::models::taxonomy::Taxonomy;
use crate::taxonomy::builder::build_taxonomy;
use crate::taxonomy::prompt_generator::generate_prompt;
use crate::taxonomy::responder::mock_response;

/// The three artifacts derived from one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    pub taxonomy: Taxonomy,
    pub prompt: String,
    pub output: String,
}

pub fn run_pipeline(query: &str, profile: &UserProfile) -> PipelineOutput {
    let taxonomy = build_taxonomy(query, profile);
    let prompt = generate_prompt(&taxonomy);
    let output = mock_response(&taxonomy);

    PipelineOutput {
        taxonomy,
        prompt,
        output,
    }
}
