//! Category and Search Filtering

use crate::item::Item;

/// Label of the synthetic entry that lifts the category restriction
pub const ALL_LABEL: &str = "All";

/// Selected category
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => item.category.as_deref() == Some(name.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_text: String,
}

impl FilterState {
    /// Normalized search needle, `None` when the search box is blank.
    fn needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Indices of the items passing both the category and the search predicate,
/// in fetch order.
pub fn apply_filters(items: &[Item], filter: &FilterState) -> Vec<usize> {
    let needle = filter.needle();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.category.matches(item))
        .filter(|(_, item)| match &needle {
            Some(n) => item.item_name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .map(|(index, _)| index)
        .collect()
}

/// One entry of the category navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub filter: CategoryFilter,
    pub active: bool,
}

impl CategoryEntry {
    pub fn label(&self) -> &str {
        self.filter.label()
    }
}

/// Distinct non-empty categories in order of first appearance.
pub fn build_categories(items: &[Item]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in items.iter().filter_map(Item::category_label) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Tent", 5, 100.0, Some("Outdoor")),
            Item::new("Folding Chair", 40, 150.0, Some("Seating")),
            Item::new("Canopy Tent", 2, 800.0, Some("Outdoor")),
            Item::new("Speaker", 1, 2500.0, None),
            Item::new("Bench", 6, 300.0, Some("")),
        ]
    }

    #[test]
    fn test_all_without_search_keeps_everything() {
        let items = sample();
        assert_eq!(apply_filters(&items, &FilterState::default()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let items = sample();
        let filter = FilterState {
            category: CategoryFilter::Named("Outdoor".to_string()),
            search_text: String::new(),
        };
        assert_eq!(apply_filters(&items, &filter), vec![0, 2]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let items = sample();
        let filter = FilterState {
            category: CategoryFilter::All,
            search_text: "  TENT ".to_string(),
        };
        assert_eq!(apply_filters(&items, &filter), vec![0, 2]);

        let blank = FilterState {
            category: CategoryFilter::All,
            search_text: "   ".to_string(),
        };
        assert_eq!(apply_filters(&items, &blank).len(), items.len());
    }

    #[test]
    fn test_both_predicates_apply() {
        let items = sample();
        let filter = FilterState {
            category: CategoryFilter::Named("Seating".to_string()),
            search_text: "tent".to_string(),
        };
        assert!(apply_filters(&items, &filter).is_empty());
    }

    #[test]
    fn test_categories_skip_empty_and_dedupe() {
        let items = sample();
        assert_eq!(build_categories(&items), vec!["Outdoor".to_string(), "Seating".to_string()]);
    }

    #[test]
    fn test_category_named_all_is_not_the_sentinel() {
        let items = vec![
            Item::new("Tent", 5, 100.0, Some("all")),
            Item::new("Chair", 5, 100.0, Some("Seating")),
        ];
        let filter = FilterState {
            category: CategoryFilter::Named("all".to_string()),
            search_text: String::new(),
        };
        assert_eq!(apply_filters(&items, &filter), vec![0]);
    }
}
