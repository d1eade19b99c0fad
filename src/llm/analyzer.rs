//! Hosted-model match scoring, an alternative to the keyword matcher.
//!
//! The reply is free text: the score is the first percentage found in it and the
//! details are its non-empty lines. No floor is applied to this score.

use crate::error::Result;
use crate::llm::client::ChatClient;
use crate::llm::prompts::PromptTemplates;
use crate::processing::analyzer::MatchStrategy;
use crate::processing::match_scorer::{MatchResult, SCORE_CEILING};
use log::{info, warn};
use regex::Regex;
use std::sync::OnceLock;

/// Score used when the reply contains no percentage
pub const DEFAULT_LLM_SCORE: u8 = 50;

pub struct LlmMatcher {
    client: ChatClient,
    prompts: PromptTemplates,
}

impl LlmMatcher {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            prompts: PromptTemplates::default(),
        }
    }

    pub fn with_prompts(mut self, prompts: PromptTemplates) -> Self {
        self.prompts = prompts;
        self
    }
}

impl MatchStrategy for LlmMatcher {
    fn name(&self) -> &str {
        "llm"
    }

    async fn analyze(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        info!("Requesting match analysis from model {}", self.client.model());
        let prompt = self.prompts.render_match_analysis(resume_text, job_text);
        let reply = self.client.complete(&self.prompts.system, &prompt).await?;
        Ok(parse_reply(&reply))
    }
}

/// Turn a free-text model reply into a match result
pub fn parse_reply(reply: &str) -> MatchResult {
    let score = match first_percentage(reply) {
        Some(value) => value.min(SCORE_CEILING as u32) as u8,
        None => {
            warn!("No percentage found in model reply, using {}", DEFAULT_LLM_SCORE);
            DEFAULT_LLM_SCORE
        }
    };

    let details = reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    MatchResult {
        score,
        details,
        categories: Vec::new(),
    }
}

fn first_percentage(text: &str) -> Option<u32> {
    static PERCENTAGE: OnceLock<Option<Regex>> = OnceLock::new();
    let regex = PERCENTAGE.get_or_init(|| Regex::new(r"(\d+)%").ok()).as_ref()?;

    // Digits that overflow u32 are certainly above the ceiling
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse().unwrap_or(u32::MAX))
}
