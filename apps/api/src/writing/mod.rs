// Writing pipeline: safety screening, template selection, prompt rendering,
// generation and fallback substitution.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod mode;
pub mod prompts;
pub mod renderer;
pub mod safety;
pub mod templates;
pub mod tone;

pub use generator::Writer;
