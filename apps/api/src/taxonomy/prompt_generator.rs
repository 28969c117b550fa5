//! Prompt generator — renders a taxonomy into instructional prompt text.

use crate::models::taxonomy::{Taxonomy, TemplateKind};
use crate::taxonomy::prompts::{
    ASSESSMENT_PROMPT_TEMPLATE, EXPLANATION_PROMPT_TEMPLATE, TRAINING_PROMPT_TEMPLATE,
};

/// Renders the prompt for the taxonomy's content type.
///
/// Explanation prompts never mention the difficulty. The result carries no
/// leading or trailing whitespace.
pub fn generate_prompt(taxonomy: &Taxonomy) -> String {
    let prompt = match taxonomy.template_kind() {
        TemplateKind::Training => TRAINING_PROMPT_TEMPLATE
            .replace("{difficulty}", taxonomy.difficulty.as_str())
            .replace("{user_role}", taxonomy.user_role.as_str())
            .replace("{skill}", &taxonomy.skill),
        TemplateKind::Assessment => ASSESSMENT_PROMPT_TEMPLATE
            .replace("{difficulty}", taxonomy.difficulty.as_str())
            .replace("{skill}", &taxonomy.skill),
        TemplateKind::Explanation => EXPLANATION_PROMPT_TEMPLATE.replace("{skill}", &taxonomy.skill),
    };

    prompt.trim().to_string()
}
