//! Analysis entry points: the keyword matcher and the strategy seam shared with
//! the hosted-model scorer

use crate::error::Result;
use crate::processing::categories::CategoryRegistry;
use crate::processing::match_scorer::{MatchResult, MatchScorer};
use crate::processing::term_extractor::{TermExtractor, TermSet};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A way of scoring a resume against a job description from their raw text
pub trait MatchStrategy {
    /// Short identifier shown in reports
    fn name(&self) -> &str;

    fn analyze(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> impl Future<Output = Result<MatchResult>> + Send;
}

/// Match result together with the term sets it was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedMatch {
    pub result: MatchResult,
    pub resume_terms: TermSet,
    pub job_terms: TermSet,
}

/// Deterministic keyword-category matcher
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    registry: CategoryRegistry,
}

impl KeywordMatcher {
    /// Matcher over the built-in categories
    pub fn new() -> Self {
        Self::with_registry(CategoryRegistry::builtin().clone())
    }

    pub fn with_registry(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn extract(&self, text: &str) -> TermSet {
        TermExtractor::new(&self.registry).extract(text)
    }

    pub fn score(&self, resume_terms: &TermSet, job_terms: &TermSet) -> MatchResult {
        MatchScorer::new(&self.registry).score(resume_terms, job_terms)
    }

    pub fn extract_and_score(&self, resume_text: &str, job_text: &str) -> MatchResult {
        self.analyze_detailed(resume_text, job_text).result
    }

    pub fn analyze_detailed(&self, resume_text: &str, job_text: &str) -> DetailedMatch {
        let resume_terms = self.extract(resume_text);
        let job_terms = self.extract(job_text);
        let result = self.score(&resume_terms, &job_terms);

        DetailedMatch {
            result,
            resume_terms,
            job_terms,
        }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStrategy for KeywordMatcher {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn analyze(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        Ok(self.extract_and_score(resume_text, job_text))
    }
}

/// Extract categorized terms using the built-in categories
pub fn extract(text: &str) -> TermSet {
    TermExtractor::new(CategoryRegistry::builtin()).extract(text)
}

/// Score two term sets using the built-in categories
pub fn score(resume_terms: &TermSet, job_terms: &TermSet) -> MatchResult {
    MatchScorer::new(CategoryRegistry::builtin()).score(resume_terms, job_terms)
}

/// Extract both documents and score them using the built-in categories
pub fn extract_and_score(resume_text: &str, job_text: &str) -> MatchResult {
    score(&extract(resume_text), &extract(job_text))
}
