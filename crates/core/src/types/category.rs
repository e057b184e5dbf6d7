//! The closed set of product categories.
//!
//! The storefront groups products into a fixed, ordered list of ten
//! category buckets. The set is closed: creating or updating a product
//! with a label outside it is a validation failure, and the display
//! order below is the order buckets appear on the storefront.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known category label.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a valid category")]
pub struct CategoryError(pub String);

/// A product category.
///
/// Serialized as its lowercase slug (e.g. `"lavash"`), matching the
/// labels persisted in the product store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lavash,
    Burger,
    Pizza,
    Hotdog,
    Sandwich,
    Chips,
    Sous,
    Mix,
    Cake,
    Drinks,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Self; 10] = [
        Self::Lavash,
        Self::Burger,
        Self::Pizza,
        Self::Hotdog,
        Self::Sandwich,
        Self::Chips,
        Self::Sous,
        Self::Mix,
        Self::Cake,
        Self::Drinks,
    ];

    /// The lowercase slug used as the stored label.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Lavash => "lavash",
            Self::Burger => "burger",
            Self::Pizza => "pizza",
            Self::Hotdog => "hotdog",
            Self::Sandwich => "sandwich",
            Self::Chips => "chips",
            Self::Sous => "sous",
            Self::Mix => "mix",
            Self::Cake => "cake",
            Self::Drinks => "drinks",
        }
    }

    /// Human-readable name for templates.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Lavash => "Lavash",
            Self::Burger => "Burger",
            Self::Pizza => "Pizza",
            Self::Hotdog => "Hotdog",
            Self::Sandwich => "Sandwich",
            Self::Chips => "Chips",
            Self::Sous => "Sous",
            Self::Mix => "Mix",
            Self::Cake => "Cake",
            Self::Drinks => "Drinks",
        }
    }

    /// Parse a stored label into a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError`] if the label is not one of the ten
    /// known slugs. Matching is exact: labels are stored lowercase.
    pub fn parse(s: &str) -> Result<Self, CategoryError> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_known_slugs() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.slug()).unwrap(), category);
        }
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = Category::parse("sushi").unwrap_err();
        assert_eq!(err, CategoryError("sushi".to_owned()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Labels are stored lowercase; anything else is rejected.
        assert!(Category::parse("Burger").is_err());
    }

    #[test]
    fn test_display_order_is_fixed() {
        let slugs: Vec<&str> = Category::ALL.iter().map(Category::slug).collect();
        assert_eq!(
            slugs,
            [
                "lavash", "burger", "pizza", "hotdog", "sandwich", "chips", "sous", "mix",
                "cake", "drinks"
            ]
        );
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::Hotdog).unwrap();
        assert_eq!(json, "\"hotdog\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Hotdog);
    }
}
