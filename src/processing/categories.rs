//! Skill category registry: ordered, weighted keyword groups

use crate::error::{Result, ResumeMatcherError};
use log::debug;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

/// Name of the catch-all category for tokens no skill category claims
pub const OTHER_CATEGORY: &str = "other";

/// A named, weighted group of canonical skill keywords.
///
/// Only built through [`Category::new`] or [`Category::catch_all`], so keywords are
/// always normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    weight: f64,
    keywords: BTreeSet<String>,
}

impl Category {
    /// Build a category, normalizing every keyword to lowercase with no surrounding whitespace.
    /// Keywords that are empty after trimming are dropped.
    pub fn new<I, S>(name: &str, weight: f64, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.trim().to_lowercase(),
            weight,
            keywords: normalize_keywords(keywords),
        }
    }

    /// The catch-all category: no weight, no keywords, never scored
    pub fn catch_all() -> Self {
        Self {
            name: OTHER_CATEGORY.to_string(),
            weight: 0.0,
            keywords: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Canonical keywords in sorted order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.keywords.contains(term)
    }

    pub fn is_catch_all(&self) -> bool {
        self.name == OTHER_CATEGORY
    }

    /// Whether this category takes part in scoring
    pub fn is_weighted(&self) -> bool {
        !self.is_catch_all() && self.weight > 0.0
    }

    /// Display label, e.g. `technical` -> `Technical`
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered, immutable set of categories. Declaration order decides
/// classification tie-breaks and the order of match details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Validate and build a registry. A catch-all category is appended when absent.
    pub fn new(mut categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.is_empty() {
                return Err(ResumeMatcherError::Configuration(
                    "Category name must not be empty".to_string(),
                ));
            }
            if !seen.insert(category.name.clone()) {
                return Err(ResumeMatcherError::Configuration(format!(
                    "Duplicate category: {}",
                    category.name
                )));
            }
            if category.is_catch_all() {
                if category.keyword_count() > 0 {
                    return Err(ResumeMatcherError::Configuration(format!(
                        "The '{}' category cannot declare keywords",
                        OTHER_CATEGORY
                    )));
                }
            } else if !category.weight.is_finite() || category.weight <= 0.0 {
                return Err(ResumeMatcherError::Configuration(format!(
                    "Category '{}' must have a positive weight, got {}",
                    category.name, category.weight
                )));
            }
        }

        // The catch-all always sits last so it never shadows a skill category
        categories.retain(|c| !c.is_catch_all());
        categories.push(Category::catch_all());

        Ok(Self { categories })
    }

    /// Process-wide built-in registry, built on first use
    pub fn builtin() -> &'static CategoryRegistry {
        static BUILTIN: OnceLock<CategoryRegistry> = OnceLock::new();
        BUILTIN.get_or_init(CategoryRegistry::default)
    }

    /// Copy of this registry with extra keywords merged into existing categories
    pub fn with_additional_keywords(&self, extra: &HashMap<String, Vec<String>>) -> Result<Self> {
        let mut categories = self.categories.clone();

        for (name, keywords) in extra {
            let name = name.trim().to_lowercase();
            let category = categories
                .iter_mut()
                .find(|c| c.name == name)
                .ok_or_else(|| {
                    ResumeMatcherError::Configuration(format!("Unknown category: {}", name))
                })?;
            if category.is_catch_all() {
                return Err(ResumeMatcherError::Configuration(format!(
                    "Keywords cannot be added to the '{}' category",
                    OTHER_CATEGORY
                )));
            }

            let before = category.keyword_count();
            category.keywords.extend(normalize_keywords(keywords));
            debug!(
                "Added {} keywords to category '{}'",
                category.keyword_count() - before,
                name
            );
        }

        Self::new(categories)
    }

    /// All categories in declaration order, catch-all last
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories that take part in scoring
    pub fn weighted(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_weighted())
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(Category::keyword_count).sum()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            categories: vec![
                Category::new("technical", 2.0, default_technical_keywords()),
                Category::new("soft", 1.5, default_soft_keywords()),
                Category::new("industry", 1.0, default_industry_keywords()),
                Category::catch_all(),
            ],
        }
    }
}

/// Ordered categories of the built-in registry
pub fn get_categories() -> &'static [Category] {
    CategoryRegistry::builtin().categories()
}

fn normalize_keywords<I, S>(keywords: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn default_technical_keywords() -> &'static [&'static str] {
    &[
        // Languages
        "python", "javascript", "typescript", "java", "rust", "golang", "ruby", "php",
        "swift", "kotlin", "scala", "sql",
        // Web
        "react", "angular", "vue", "svelte", "html", "css", "nodejs", "django", "flask",
        "graphql",
        // Infrastructure
        "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "jenkins",
        "git", "linux", "microservices", "api",
        // Data
        "postgresql", "mysql", "mongodb", "redis", "tensorflow", "pytorch", "pandas",
        "numpy", "spark", "hadoop", "kafka", "airflow",
    ]
}

fn default_soft_keywords() -> &'static [&'static str] {
    &[
        "leadership", "communication", "teamwork", "collaboration", "mentoring", "coaching",
        "presentation", "negotiation", "adaptability", "creativity", "empathy", "ownership",
        "initiative", "analytical", "organized", "motivated", "accountability",
        "interpersonal", "resilience",
    ]
}

fn default_industry_keywords() -> &'static [&'static str] {
    &[
        "agile", "scrum", "kanban", "finance", "fintech", "banking", "healthcare",
        "insurance", "retail", "ecommerce", "logistics", "saas", "startup", "compliance",
        "cybersecurity", "analytics", "marketing", "consulting", "telecommunications",
        "manufacturing", "education", "automotive", "blockchain", "gaming",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_order() {
        let names: Vec<&str> = get_categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["technical", "soft", "industry", "other"]);
    }

    #[test]
    fn test_builtin_weights() {
        let registry = CategoryRegistry::builtin();
        assert_eq!(registry.get("technical").unwrap().weight(), 2.0);
        assert_eq!(registry.get("soft").unwrap().weight(), 1.5);
        assert_eq!(registry.get("industry").unwrap().weight(), 1.0);
        assert_eq!(registry.get(OTHER_CATEGORY).unwrap().weight(), 0.0);
        assert_eq!(registry.weighted().count(), 3);
    }

    #[test]
    fn test_keywords_are_normalized() {
        for category in get_categories() {
            for keyword in category.keywords() {
                assert_eq!(keyword, keyword.to_lowercase());
                assert_eq!(keyword, keyword.trim());
                assert!(!keyword.is_empty());
            }
        }

        let category = Category::new("Technical", 2.0, ["  Elixir ", "ZIG", "   "]);
        assert_eq!(category.name(), "technical");
        assert_eq!(category.keywords().collect::<Vec<_>>(), vec!["elixir", "zig"]);
    }

    #[test]
    fn test_serialized_category_has_normalized_keywords() {
        let category = Category::new(" Tools ", 1.0, ["  VIM", "Emacs "]);
        let value = serde_json::to_value(&category).unwrap();

        assert_eq!(value["name"], "tools");
        assert_eq!(value["keywords"], serde_json::json!(["emacs", "vim"]));
    }

    #[test]
    fn test_label_capitalizes_name() {
        assert_eq!(Category::new("soft", 1.5, ["empathy"]).label(), "Soft");
        assert_eq!(Category::catch_all().label(), "Other");
    }

    #[test]
    fn test_catch_all_is_appended_last() {
        let registry = CategoryRegistry::new(vec![
            Category::catch_all(),
            Category::new("tools", 1.0, ["vim"]),
        ])
        .unwrap();

        let names: Vec<&str> = registry.categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["tools", "other"]);
    }

    #[test]
    fn test_rejects_invalid_categories() {
        assert!(CategoryRegistry::new(vec![Category::new("tools", 0.0, ["vim"])]).is_err());
        assert!(CategoryRegistry::new(vec![Category::new("tools", f64::NAN, ["vim"])]).is_err());
        assert!(CategoryRegistry::new(vec![
            Category::new("tools", 1.0, ["vim"]),
            Category::new("Tools", 2.0, ["emacs"]),
        ])
        .is_err());
        assert!(CategoryRegistry::new(vec![Category::new("other", 0.0, ["misc"])]).is_err());
    }

    #[test]
    fn test_additional_keywords() {
        let mut extra = HashMap::new();
        extra.insert("Technical".to_string(), vec!["Elixir".to_string(), "python".to_string()]);

        let base = CategoryRegistry::builtin();
        let registry = base.with_additional_keywords(&extra).unwrap();

        let technical = registry.get("technical").unwrap();
        assert!(technical.contains("elixir"));
        assert_eq!(
            technical.keyword_count(),
            base.get("technical").unwrap().keyword_count() + 1
        );
        assert!(!base.get("technical").unwrap().contains("elixir"));
    }

    #[test]
    fn test_additional_keywords_unknown_category() {
        let mut extra = HashMap::new();
        extra.insert("hobbies".to_string(), vec!["knitting".to_string()]);
        assert!(CategoryRegistry::builtin().with_additional_keywords(&extra).is_err());

        let mut extra = HashMap::new();
        extra.insert("other".to_string(), vec!["knitting".to_string()]);
        assert!(CategoryRegistry::builtin().with_additional_keywords(&extra).is_err());
    }
}
