/// Category operations: normalization, uniqueness, autocomplete data

use crate::config::WidgetConfig;
use crate::website_data::Category;
use std::collections::HashSet;

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Work out the category sent with a submission.
///
/// A supplied category is capitalized when `normalize_category` is on and sent
/// raw otherwise. A missing one falls back to `default_category`, or to an
/// empty string when no default is configured.
pub fn resolve_category(category: Option<&str>, config: &WidgetConfig) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(c) if config.normalize_category => capitalize_first(c),
        Some(c) => c.to_string(),
        None => config.default_category.clone().unwrap_or_default(),
    }
}

/// Drop repeated categories by id (keep first occurrence)
pub fn make_categories_unique(categories: Vec<Category>) -> Vec<Category> {
    let mut seen_ids = HashSet::new();
    categories
        .into_iter()
        .filter(|category| seen_ids.insert(category.id.clone()))
        .collect()
}

/// Category names for autocomplete suggestions
pub fn autocomplete_names(categories: &[Category]) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|c| seen.insert(c.name.as_str()))
        .map(|c| c.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("blog"), "Blog");
        assert_eq!(capitalize_first("Blog"), "Blog");
        assert_eq!(capitalize_first("énfasis"), "Énfasis");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_resolve_category_normalized() {
        let config = WidgetConfig::tabs_variant();

        assert_eq!(resolve_category(Some("blog"), &config), "Blog");
        assert_eq!(resolve_category(None, &config), "All");
        assert_eq!(resolve_category(Some(""), &config), "All");
    }

    #[test]
    fn test_resolve_category_raw() {
        let config = WidgetConfig {
            normalize_category: false,
            ..WidgetConfig::tabs_variant()
        };

        assert_eq!(resolve_category(Some("blog"), &config), "blog");
        assert_eq!(resolve_category(None, &config), "All");
    }

    #[test]
    fn test_resolve_category_without_default() {
        let config = WidgetConfig::select_variant();
        assert_eq!(resolve_category(None, &config), "");
    }

    #[test]
    fn test_make_categories_unique() {
        let categories = vec![
            Category::new("1", "Blog"),
            Category::new("2", "News"),
            Category::new("1", "Blog (copy)"), // duplicate id
        ];

        let unique = make_categories_unique(categories);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].name, "Blog");
        assert_eq!(unique[1].name, "News");
    }

    #[test]
    fn test_autocomplete_names() {
        let categories = vec![
            Category::new("1", "Blog"),
            Category::new("2", "News"),
            Category::new("3", "Blog"),
        ];

        assert_eq!(autocomplete_names(&categories), vec!["Blog", "News"]);
    }
}
