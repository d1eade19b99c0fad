//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;

pub use error::{Result, ResumeMatcherError};
pub use config::Config;
pub use processing::{extract, extract_and_score, score, MatchResult, TermSet};
