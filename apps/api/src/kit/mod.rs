// Kit generation pipeline: prompt building, completion call, reply parsing,
// fallback content, orchestration, HTTP handlers.
// All LLM calls go through llm_client, no direct Gemini calls here.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
