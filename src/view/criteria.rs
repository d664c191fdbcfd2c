use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Value that disables a categorical filter when typed by the user.
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Quantity,
    Price,
    Discount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Parses `quantity-asc`, `price-desc`, ... ; `none` and the empty string mean no sort.
    pub fn parse_option(s: &str) -> Result<Option<Sort>, DomainError> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl FromStr for Sort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidInput(format!("unknown sort option '{s}'"));
        let (key, direction) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let key = match key.to_ascii_lowercase().as_str() {
            "quantity" => SortKey::Quantity,
            "price" => SortKey::Price,
            "discount" => SortKey::Discount,
            _ => return Err(invalid()),
        };
        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return Err(invalid()),
        };
        Ok(Sort { key, direction })
    }
}

/// Turns user input for a categorical filter into a selection; `all` or blank clears it.
pub fn selection(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCriteria {
    /// Matched case-insensitively against name, article, description and brand.
    pub query: String,
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub sort: Option<Sort>,
}

impl ProductCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && self.supplier.is_none()
            && self.category.is_none()
            && self.sort.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderCriteria {
    /// Matched case-insensitively against the receipt code.
    pub query: String,
    pub status: Option<String>,
}

impl OrderCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_sort_option() {
        let cases = [
            ("quantity-asc", SortKey::Quantity, SortDirection::Ascending),
            ("quantity-desc", SortKey::Quantity, SortDirection::Descending),
            ("price-asc", SortKey::Price, SortDirection::Ascending),
            ("price-desc", SortKey::Price, SortDirection::Descending),
            ("discount-asc", SortKey::Discount, SortDirection::Ascending),
            ("Discount-DESC", SortKey::Discount, SortDirection::Descending),
        ];
        for (text, key, direction) in cases {
            assert_eq!(text.parse::<Sort>().unwrap(), Sort::new(key, direction), "{text}");
        }
    }

    #[test]
    fn none_means_no_sort() {
        assert_eq!(Sort::parse_option("none").unwrap(), None);
        assert_eq!(Sort::parse_option("").unwrap(), None);
    }

    #[test]
    fn rejects_unknown_sort() {
        assert!("rating-asc".parse::<Sort>().is_err());
        assert!("price-up".parse::<Sort>().is_err());
        assert!("price".parse::<Sort>().is_err());
    }

    #[test]
    fn all_sentinel_clears_selection() {
        assert_eq!(selection("all"), None);
        assert_eq!(selection("ALL"), None);
        assert_eq!(selection("  "), None);
        assert_eq!(selection("Shoes"), Some("Shoes".to_string()));
    }

    #[test]
    fn default_criteria_are_unfiltered() {
        assert!(ProductCriteria::default().is_unfiltered());
        assert!(OrderCriteria::default().is_unfiltered());
    }
}
