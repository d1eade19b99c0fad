//! Skill term extraction and match scoring

pub mod categories;
pub mod similarity;
pub mod term_extractor;
pub mod match_scorer;
pub mod analyzer;

pub use analyzer::{extract, extract_and_score, score, KeywordMatcher, MatchStrategy};
pub use categories::{get_categories, Category, CategoryRegistry, OTHER_CATEGORY};
pub use match_scorer::{CategoryScore, MatchResult, SCORE_CEILING, SCORE_FLOOR};
pub use similarity::{similarity, FUZZY_THRESHOLD};
pub use term_extractor::TermSet;
