//! Tokenization and category classification of document text

use crate::processing::categories::{CategoryRegistry, OTHER_CATEGORY};
use crate::processing::similarity::{similarity, FUZZY_THRESHOLD};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Shorter tokens are treated as noise
pub const MIN_TOKEN_CHARS: usize = 3;

/// Terms matched for one category, deduplicated, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTerms {
    pub category: String,
    pub terms: Vec<String>,
}

/// Categorized terms extracted from one document.
///
/// Holds an entry for every category of the registry it was built from, even when
/// nothing was matched for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSet {
    entries: Vec<CategoryTerms>,
}

impl TermSet {
    /// Empty term set with one entry per registry category
    pub fn for_registry(registry: &CategoryRegistry) -> Self {
        Self {
            entries: registry
                .categories()
                .iter()
                .map(|c| CategoryTerms {
                    category: c.name().to_string(),
                    terms: Vec::new(),
                })
                .collect(),
        }
    }

    /// Add a term to a category. Returns `false` when the term was already present
    /// or the category is unknown.
    pub fn insert(&mut self, category: &str, term: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) if !entry.terms.iter().any(|t| t == term) => {
                entry.terms.push(term.to_string());
                true
            }
            _ => false,
        }
    }

    /// Terms for a category in insertion order; empty for unknown categories
    pub fn get(&self, category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.terms.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str, term: &str) -> bool {
        self.get(category).iter().any(|t| t == term)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTerms> {
        self.entries.iter()
    }

    /// Number of terms across all categories
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.terms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.terms.is_empty())
    }
}

/// Classifies document tokens into registry categories
pub struct TermExtractor<'a> {
    registry: &'a CategoryRegistry,
}

impl<'a> TermExtractor<'a> {
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self { registry }
    }

    /// Extract categorized terms from raw document text
    pub fn extract(&self, text: &str) -> TermSet {
        let mut terms = TermSet::for_registry(self.registry);

        for token in tokenize(text) {
            let (category, term) = self.classify(&token);
            terms.insert(category, term);
        }

        debug!(
            "Extracted {} terms ({} uncategorized)",
            terms.len(),
            terms.get(OTHER_CATEGORY).len()
        );
        terms
    }

    /// Category and stored term for a single token.
    ///
    /// Exact keyword hits are tried across every category before any fuzzy
    /// comparison; the first category (then keyword) to accept the token wins.
    fn classify<'t>(&self, token: &'t str) -> (&'a str, &'t str)
    where
        'a: 't,
    {
        let registry = self.registry;
        let skill_categories = move || registry.categories().iter().filter(|c| !c.is_catch_all());

        if let Some(category) = skill_categories().find(|c| c.contains(token)) {
            trace!("'{}' -> {} (exact)", token, category.name());
            return (category.name(), token);
        }

        for category in skill_categories() {
            if let Some(keyword) = category
                .keywords()
                .find(|keyword| similarity(token, keyword) > FUZZY_THRESHOLD)
            {
                trace!("'{}' -> {} as '{}' (fuzzy)", token, category.name(), keyword);
                return (category.name(), keyword);
            }
        }

        (OTHER_CATEGORY, token)
    }
}

/// Lowercase, turn anything but letters, digits and whitespace into spaces, split on
/// whitespace and drop short tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
