//! Report structure combining a match result with run metadata

use crate::processing::match_scorer::MatchResult;
use crate::processing::term_extractor::TermSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub result: MatchResult,

    /// Terms extracted from the resume (keyword strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_terms: Option<TermSet>,

    /// Terms extracted from the job description (keyword strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_terms: Option<TermSet>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_file: String,
    pub strategy: String,
    pub matcher_version: String,
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(resume_file: &str, job_file: &str, strategy: &str, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_file: resume_file.to_string(),
            job_file: job_file.to_string(),
            strategy: strategy.to_string(),
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms,
        }
    }
}

impl MatchReport {
    pub fn new(result: MatchResult, metadata: ReportMetadata) -> Self {
        Self {
            result,
            resume_terms: None,
            job_terms: None,
            metadata,
        }
    }

    pub fn with_terms(mut self, resume_terms: TermSet, job_terms: TermSet) -> Self {
        self.resume_terms = Some(resume_terms);
        self.job_terms = Some(job_terms);
        self
    }

    /// Short rating for the score
    pub fn verdict(&self) -> &'static str {
        match self.result.score {
            90..=100 => "Excellent match",
            75..=89 => "Strong match",
            60..=74 => "Good match",
            50..=59 => "Partial match",
            _ => "Weak match",
        }
    }
}
