// Taxonomy engine: profile + query → taxonomy → prompt and mock output.
// Every stage is a pure function; handlers only validate and call `pipeline`.

pub mod builder;
pub mod handlers;
pub mod pipeline;
pub mod prompt_generator;
pub mod prompts;
pub mod responder;
