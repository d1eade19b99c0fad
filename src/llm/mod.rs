//! Hosted language-model scoring, an alternative to the keyword matcher

pub mod client;
pub mod prompts;
pub mod analyzer;

#[cfg(test)]
pub(crate) mod mock_server;

pub use analyzer::LlmMatcher;
pub use client::ChatClient;
