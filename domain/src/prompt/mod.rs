//! Prompt templates for the crew tasks

mod template;

pub use template::PromptTemplate;
