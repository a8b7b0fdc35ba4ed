//! All Bedrock/LLM functionality

pub mod client;
pub mod extract;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{BedrockInvoker, ModelInvoker};
pub use prompt_builder::PromptTemplate;
