use serde::{Deserialize, Serialize};

/// Category for names no rule matches
pub const DEFAULT_CATEGORY: &str = "other";

/// Keywords that put an ingredient into a grocery aisle
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

pub fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "produce",
            &[
                "onion", "garlic", "tomato", "potato", "carrot", "celery", "lettuce", "spinach",
                "bell pepper", "cucumber", "zucchini", "eggplant", "mushroom", "lemon", "lime",
                "apple", "banana", "avocado", "basil", "parsley", "cilantro", "ginger",
                "broccoli", "cabbage", "scallion",
            ],
        ),
        CategoryRule::new(
            "dairy",
            &["milk", "butter", "cream", "cheese", "yogurt", "egg"],
        ),
        CategoryRule::new(
            "meat & seafood",
            &[
                "chicken", "beef", "pork", "bacon", "sausage", "turkey", "lamb", "fish", "salmon",
                "shrimp", "tuna",
            ],
        ),
        CategoryRule::new("bakery", &["bread", "bun", "tortilla", "bagel", "pita"]),
        CategoryRule::new(
            "spices & seasonings",
            &[
                "salt", "pepper", "cinnamon", "cumin", "paprika", "oregano", "thyme", "nutmeg",
                "chili powder", "garlic powder", "vanilla", "extract", "spice",
            ],
        ),
        CategoryRule::new(
            "pantry",
            &[
                "flour", "sugar", "rice", "pasta", "oil", "vinegar", "baking soda",
                "baking powder", "honey", "oats", "beans", "broth", "stock", "sauce",
                "chicken broth", "chicken stock",
            ],
        ),
    ]
}

/// Assigns a grocery category to a normalized ingredient name
pub trait CategoryResolver: Send + Sync {
    fn category_for(&self, normalized_name: &str) -> String;
}

/// Local keyword fallback used when no external category is available.
///
/// The longest keyword contained in the name decides, so "bell pepper" beats
/// "pepper" and "unsalted butter" lands in dairy rather than seasonings. On
/// equal length the earlier rule wins.
#[derive(Debug, Clone)]
pub struct KeywordCategorizer {
    rules: Vec<CategoryRule>,
}

impl KeywordCategorizer {
    pub fn new(rules: &[CategoryRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CategoryRule {
                category: rule.category.trim().to_lowercase(),
                keywords: rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();
        Self { rules }
    }
}

impl Default for KeywordCategorizer {
    fn default() -> Self {
        Self::new(&default_category_rules())
    }
}

impl CategoryResolver for KeywordCategorizer {
    fn category_for(&self, normalized_name: &str) -> String {
        let name = normalized_name.to_lowercase();
        let mut best: Option<(usize, &str)> = None;

        for rule in &self.rules {
            for keyword in &rule.keywords {
                if !name.contains(keyword.as_str()) {
                    continue;
                }
                if best.map_or(true, |(len, _)| keyword.len() > len) {
                    best = Some((keyword.len(), rule.category.as_str()));
                }
            }
        }

        best.map(|(_, category)| category.to_string())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }
}
