//! Keyword-based transaction categorization
//!
//! Rules are checked in order and the first rule with a keyword contained in
//! the lowercased `description + " " + merchant` wins. Anything unmatched gets
//! the fallback label.

use serde::{Deserialize, Serialize};

use crate::model::TransactionRecord;

/// Label for transactions no rule matches
pub const FALLBACK_CATEGORY: &str = "Other";

/// Keywords that map a transaction to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    /// Matched as lowercase substrings
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            category: category.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && text.contains(&keyword.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    fallback: String,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(default_rules(), FALLBACK_CATEGORY)
    }
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn categorize(&self, description: &str, merchant: Option<&str>) -> &str {
        let text = format!("{} {}", description, merchant.unwrap_or_default()).to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&text))
            .map(|rule| rule.category.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Overwrite the category of every record from its description and merchant
    pub fn apply(&self, records: &mut [TransactionRecord]) {
        for record in records.iter_mut() {
            let category = self
                .categorize(&record.description, record.merchant.as_deref())
                .to_string();
            record.category = Some(category);
        }
    }
}

/// Built-in rules, most specific first
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "Food & Dining",
            &[
                "restaurant",
                "cafe",
                "coffee",
                "dining",
                "starbucks",
                "dunkin",
                "mcdonald",
                "pizza",
                "burger",
                "subway",
                "chipotle",
                "food",
                "bar",
                "bakery",
                "doordash",
                "ubereats",
                "grubhub",
                "postmates",
                "noodle",
                "noodles",
                "dumpling",
                "hot pot",
                "beef",
                "poke",
                "ai ki ya",
                "jollibee",
                "chahalo",
                "chief beef",
                "guo bao",
                "mala hotpot",
                "teapsy",
                "kung fu tea",
                "hi tea",
                "flower and dessert",
                "popeyes",
                "wegmans",
                "schine",
                "fantuan",
                "chowbus",
            ],
        ),
        CategoryRule::new(
            "Shopping",
            &[
                "amazon", "target", "walmart", "best buy", "costco", "store", "mall", "shop",
                "retail", "market", "grocery", "uniqlo", "miniso", "jewelry", "luk fook", "loewe",
                "arcteryx",
            ],
        ),
        CategoryRule::new(
            "Transportation",
            &[
                "uber", "lyft", "gas", "fuel", "parking", "transit", "metro", "car",
            ],
        ),
        CategoryRule::new(
            "Entertainment",
            &[
                "spotify",
                "movie",
                "regal",
                "amc",
                "theater",
                "game",
                "concert",
                "ticket",
                "entertainment",
            ],
        ),
        CategoryRule::new(
            "Bills & Utilities",
            &[
                "electric",
                "water",
                "internet",
                "phone",
                "utility",
                "insurance",
                "rent",
                "payment",
                "ach deposit",
                "anthropic",
            ],
        ),
        CategoryRule::new(
            "Health & Wellness",
            &[
                "pharmacy",
                "cvs",
                "walgreens",
                "clinic",
                "hospital",
                "health",
                "doctor",
                "dentist",
            ],
        ),
    ]
}
