//! Weighted category scoring of resume terms against job description terms

use crate::processing::categories::{Category, CategoryRegistry};
use crate::processing::similarity::is_fuzzy_match;
use crate::processing::term_extractor::TermSet;
use log::debug;
use serde::{Deserialize, Serialize};

/// Lowest score reported for any document pair
pub const SCORE_FLOOR: u8 = 40;
/// Highest score, earned by matching every job term in every weighted category
pub const SCORE_CEILING: u8 = 100;

/// Score and explanations for one resume / job description pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Match percentage in `[0, 100]`
    pub score: u8,
    /// One line per category with at least one matched term
    pub details: Vec<String>,
    /// Per-category breakdown (empty for strategies that do not categorize)
    #[serde(default)]
    pub categories: Vec<CategoryScore>,
}

impl MatchResult {
    /// Result for a pair with nothing to compare
    pub fn floor() -> Self {
        Self {
            score: SCORE_FLOOR,
            details: Vec::new(),
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub weight: f64,
    /// Job terms found in the resume, in job extraction order
    pub matched: Vec<String>,
    /// Job terms with no counterpart in the resume
    pub missing: Vec<String>,
    /// `matched / job terms * weight`
    pub earned: f64,
}

impl CategoryScore {
    pub fn job_term_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Fraction of job terms matched, `None` when the job had no terms here
    pub fn coverage(&self) -> Option<f64> {
        match self.job_term_count() {
            0 => None,
            total => Some(self.matched.len() as f64 / total as f64),
        }
    }
}

/// Compares two term sets category by category
pub struct MatchScorer<'a> {
    registry: &'a CategoryRegistry,
}

impl<'a> MatchScorer<'a> {
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self { registry }
    }

    /// Score a resume against a job description. Never fails: missing or empty
    /// categories simply contribute nothing, leaving the score at the floor.
    pub fn score(&self, resume_terms: &TermSet, job_terms: &TermSet) -> MatchResult {
        let mut total_score = 0.0;
        let mut total_weight = 0.0;
        let mut details = Vec::new();
        let mut categories = Vec::new();

        for category in self.registry.weighted() {
            let breakdown = score_category(category, resume_terms, job_terms);

            if breakdown.job_term_count() > 0 {
                total_score += breakdown.earned;
                total_weight += breakdown.weight;
            }
            if !breakdown.matched.is_empty() {
                details.push(format!(
                    "{} skills matched: {}",
                    category.label(),
                    breakdown.matched.join(", ")
                ));
            }
            categories.push(breakdown);
        }

        let score = final_score(total_score, total_weight);
        debug!(
            "Match score {} (earned {:.2} of weight {:.2})",
            score, total_score, total_weight
        );

        MatchResult {
            score,
            details,
            categories,
        }
    }
}

fn score_category(category: &Category, resume_terms: &TermSet, job_terms: &TermSet) -> CategoryScore {
    let resume_category_terms = resume_terms.get(category.name());
    let (matched, missing): (Vec<String>, Vec<String>) = job_terms
        .get(category.name())
        .iter()
        .cloned()
        .partition(|job_term| {
            resume_category_terms
                .iter()
                .any(|resume_term| is_fuzzy_match(job_term, resume_term))
        });

    let job_term_count = matched.len() + missing.len();
    let earned = if job_term_count == 0 {
        0.0
    } else {
        matched.len() as f64 / job_term_count as f64 * category.weight()
    };

    CategoryScore {
        category: category.name().to_string(),
        weight: category.weight(),
        matched,
        missing,
        earned,
    }
}

fn final_score(total_score: f64, total_weight: f64) -> u8 {
    if total_weight <= 0.0 {
        return SCORE_FLOOR;
    }
    let percentage = (total_score / total_weight * 100.0).round();
    percentage.clamp(SCORE_FLOOR as f64, SCORE_CEILING as f64) as u8
}
