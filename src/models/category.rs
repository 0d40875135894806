//! Category keyword table
//!
//! An ordered mapping from category label to the keyword substrings that
//! select it. Order is significant: the first category with a matching
//! keyword wins, so the table is stored as a list rather than a map.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Label used when nothing matches
pub const OTHER_CATEGORY: &str = "Other";

/// Keywords for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable, validated keyword table
///
/// Category labels are trimmed; keywords are trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CategoryRule>", into = "Vec<CategoryRule>")]
pub struct CategoryKeywordTable {
    rules: Vec<CategoryRule>,
}

impl CategoryKeywordTable {
    /// Build a table from rules in priority order
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self, KeywordTableError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(rules.len());

        for rule in rules {
            let category = rule.category.trim().to_string();
            if category.is_empty() {
                return Err(KeywordTableError::EmptyCategory);
            }
            if !seen.insert(category.clone()) {
                return Err(KeywordTableError::DuplicateCategory(category));
            }

            let mut keywords = Vec::with_capacity(rule.keywords.len());
            for keyword in rule.keywords {
                // An empty keyword is a substring of every description
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(KeywordTableError::EmptyKeyword(category));
                }
                keywords.push(keyword);
            }

            normalized.push(CategoryRule { category, keywords });
        }

        Ok(Self { rules: normalized })
    }

    /// Rules in scan order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category labels in scan order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for CategoryKeywordTable {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(category, keywords)| CategoryRule::new(*category, keywords.iter().copied()))
            .collect();
        Self { rules }
    }
}

impl TryFrom<Vec<CategoryRule>> for CategoryKeywordTable {
    type Error = KeywordTableError;

    fn try_from(rules: Vec<CategoryRule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl From<CategoryKeywordTable> for Vec<CategoryRule> {
    fn from(table: CategoryKeywordTable) -> Self {
        table.rules
    }
}

/// Built-in table, already lowercase
const DEFAULT_RULES: &[(&str, &[&str])] = &[
    (
        "Food & Dining",
        &[
            "pizza", "burger", "restaurant", "dominos", "mcdonalds", "kfc", "food", "cafe",
            "coffee", "starbucks", "subway", "dining", "lunch", "dinner", "breakfast", "snacks",
            "bakery",
        ],
    ),
    (
        "Shopping",
        &[
            "shirt", "clothes", "zara", "h&m", "shopping", "mall", "amazon", "flipkart", "shoes",
            "dress", "jeans", "electronics", "mobile", "laptop", "book", "gift",
        ],
    ),
    (
        "Transport",
        &[
            "uber", "petrol", "fuel", "bus", "taxi", "ola", "metro", "train", "flight",
            "parking", "toll", "auto", "rickshaw", "bike", "car",
        ],
    ),
    (
        "Health",
        &[
            "hospital", "medicines", "doctor", "pharmacy", "medical", "clinic", "health",
            "medicine", "pills", "treatment", "checkup", "dentist",
        ],
    ),
    (
        "Bills & Utilities",
        &[
            "recharge", "wifi", "bill", "electricity", "water", "gas", "internet", "mobile",
            "phone", "utility", "rent", "maintenance", "insurance",
        ],
    ),
    (
        "Entertainment",
        &[
            "movie", "cinema", "netflix", "spotify", "game", "concert", "party", "club", "bar",
            "entertainment", "music", "youtube",
        ],
    ),
    (
        "Education",
        &[
            "school", "college", "course", "book", "education", "tuition", "fees", "training",
            "certification", "exam",
        ],
    ),
    (
        "Travel",
        &[
            "hotel", "booking", "vacation", "trip", "travel", "flight", "train", "bus", "tour",
            "holiday", "resort",
        ],
    ),
];

/// Errors building a keyword table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordTableError {
    EmptyCategory,
    DuplicateCategory(String),
    EmptyKeyword(String),
}

impl fmt::Display for KeywordTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category label cannot be empty"),
            Self::DuplicateCategory(name) => write!(f, "Duplicate category: {}", name),
            Self::EmptyKeyword(name) => write!(f, "Empty keyword in category '{}'", name),
        }
    }
}

impl std::error::Error for KeywordTableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let table = CategoryKeywordTable::default();
        let names: Vec<_> = table.categories().collect();
        assert_eq!(
            names,
            vec![
                "Food & Dining",
                "Shopping",
                "Transport",
                "Health",
                "Bills & Utilities",
                "Entertainment",
                "Education",
                "Travel",
            ]
        );
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = CategoryKeywordTable::default();
        let rebuilt = CategoryKeywordTable::new(table.rules().to_vec()).unwrap();
        assert_eq!(table, rebuilt);
    }

    #[test]
    fn test_new_normalizes_keywords() {
        let table = CategoryKeywordTable::new(vec![CategoryRule::new(
            "  Pets ",
            ["  Vet ", "PETCO"],
        )])
        .unwrap();
        assert_eq!(table.rules()[0].category, "Pets");
        assert_eq!(table.rules()[0].keywords, vec!["vet", "petco"]);
    }

    #[test]
    fn test_new_rejects_bad_rules() {
        assert_eq!(
            CategoryKeywordTable::new(vec![CategoryRule::new(" ", ["x"])]),
            Err(KeywordTableError::EmptyCategory)
        );
        assert_eq!(
            CategoryKeywordTable::new(vec![CategoryRule::new("Pets", ["vet", " "])]),
            Err(KeywordTableError::EmptyKeyword("Pets".into()))
        );
        assert_eq!(
            CategoryKeywordTable::new(vec![
                CategoryRule::new("Pets", ["vet"]),
                CategoryRule::new("Pets", ["dog"]),
            ]),
            Err(KeywordTableError::DuplicateCategory("Pets".into()))
        );
    }

    #[test]
    fn test_deserialize_preserves_order_and_validates() {
        let json = r#"[
            {"category": "Zoo", "keywords": ["Lion"]},
            {"category": "Aquarium", "keywords": ["shark"]}
        ]"#;
        let table: CategoryKeywordTable = serde_json::from_str(json).unwrap();
        let names: Vec<_> = table.categories().collect();
        assert_eq!(names, vec!["Zoo", "Aquarium"]);
        assert_eq!(table.rules()[0].keywords, vec!["lion"]);

        let bad = r#"[{"category": "Zoo", "keywords": [""]}]"#;
        assert!(serde_json::from_str::<CategoryKeywordTable>(bad).is_err());
    }
}
