//! Label Registry
//!
//! Household waste item labels grouped by category. Labels double as the
//! top-level prefix of every stored training image, so each one must be
//! usable as an object key segment without escaping.
//!
//! The taxonomy is data, not code: the built-in set lives in
//! `data/labels.json` and can be replaced at startup with `LABELS_FILE`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_TAXONOMY: &str = include_str!("../data/labels.json");

static STORAGE_SAFE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*$").expect("storage-safe pattern is a valid regex")
});

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to parse label taxonomy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read label taxonomy: {0}")]
    Io(#[from] std::io::Error),

    #[error("Category name must not be empty")]
    UnnamedCategory,

    #[error("Category '{0}' has no labels")]
    EmptyCategory(String),

    #[error("Label '{label}' in category '{category}' is not storage-safe")]
    UnsafeLabel { label: String, category: String },

    #[error("Label '{label}' appears in both '{first}' and '{second}'")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },
}

/// A named group of labels, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyDocument {
    categories: Vec<Category>,
}

/// Immutable label taxonomy, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct LabelRegistry {
    categories: Vec<Category>,
    // label -> index into `categories`
    index: HashMap<String, usize>,
}

impl LabelRegistry {
    /// The taxonomy shipped with the service.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_TAXONOMY)
    }

    /// Parse a taxonomy document of the form
    /// `{"categories": [{"name": "...", "labels": ["..."]}]}`.
    pub fn from_json(source: &str) -> Result<Self, RegistryError> {
        let document: TaxonomyDocument = serde_json::from_str(source)?;
        Self::from_categories(document.categories)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Build a registry, rejecting taxonomies that break any of its invariants.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, RegistryError> {
        let mut index = HashMap::new();

        for (position, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(RegistryError::UnnamedCategory);
            }
            if category.labels.is_empty() {
                return Err(RegistryError::EmptyCategory(category.name.clone()));
            }

            for label in &category.labels {
                if !is_storage_safe(label) {
                    return Err(RegistryError::UnsafeLabel {
                        label: label.clone(),
                        category: category.name.clone(),
                    });
                }
                if let Some(previous) = index.insert(label.clone(), position) {
                    return Err(RegistryError::DuplicateLabel {
                        label: label.clone(),
                        first: categories[previous].name.clone(),
                        second: category.name.clone(),
                    });
                }
            }
        }

        Ok(Self { categories, index })
    }

    /// Exact, case-sensitive membership test.
    pub fn is_valid_label(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Category the label belongs to, if registered.
    pub fn category_of(&self, label: &str) -> Option<&str> {
        self.index
            .get(label)
            .map(|&position| self.categories[position].name.as_str())
    }

    pub fn list_by_category(&self) -> &[Category] {
        &self.categories
    }

    /// Every registered label in alphabetical order.
    pub fn all_sorted(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.index.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Purely syntactic check: `^[a-z][a-z0-9-]*$`. Says nothing about membership.
pub fn is_storage_safe(label: &str) -> bool {
    STORAGE_SAFE_RE.is_match(label)
}

/// Human-readable form of a label: `aluminum-can` becomes `Aluminum Can`.
///
/// One-way formatting. Feeding the output back in does not reproduce the
/// label; lowercase and re-hyphenate first if you need that.
pub fn display_name(label: &str) -> String {
    label
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn category(name: &str, labels: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_taxonomy_loads() {
        let registry = LabelRegistry::builtin().unwrap();
        assert_eq!(registry.list_by_category().len(), 10);
        assert_eq!(registry.len(), 114);
    }

    #[test]
    fn test_every_builtin_label_is_storage_safe() {
        let registry = LabelRegistry::builtin().unwrap();
        for category in registry.list_by_category() {
            for label in &category.labels {
                assert!(is_storage_safe(label), "label '{}' is not storage-safe", label);
            }
        }
    }

    #[test]
    fn test_no_label_in_two_categories() {
        let registry = LabelRegistry::builtin().unwrap();
        let mut seen = HashSet::new();
        for category in registry.list_by_category() {
            for label in &category.labels {
                assert!(seen.insert(label.as_str()), "duplicate label '{}'", label);
            }
        }
        assert_eq!(seen.len(), registry.len());
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let registry = LabelRegistry::builtin().unwrap();
        let sum: usize = registry
            .list_by_category()
            .iter()
            .map(|c| c.labels.len())
            .sum();
        assert_eq!(sum, registry.len());
        assert_eq!(registry.all_sorted().len(), registry.len());
    }

    #[test]
    fn test_is_valid_label() {
        let registry = LabelRegistry::builtin().unwrap();
        assert!(registry.is_valid_label("aluminum-can"));
        assert!(registry.is_valid_label("glass-bottle"));
        assert!(registry.is_valid_label("newspaper"));

        assert!(!registry.is_valid_label("recyclable"));
        assert!(!registry.is_valid_label("not_recyclable"));
        assert!(!registry.is_valid_label(""));
        assert!(!registry.is_valid_label("Aluminum-Can"));
        assert!(!registry.is_valid_label("unknown-item-xyz"));
    }

    #[test]
    fn test_category_of() {
        let registry = LabelRegistry::builtin().unwrap();
        assert_eq!(registry.category_of("aluminum-can"), Some("Metal"));
        assert_eq!(registry.category_of("straw"), Some("Non-Recyclable Household"));
        assert_eq!(registry.category_of("spaceship"), None);
    }

    #[test]
    fn test_all_sorted_is_alphabetical() {
        let registry = LabelRegistry::builtin().unwrap();
        let labels = registry.all_sorted();
        let mut expected = labels.clone();
        expected.sort();
        assert_eq!(labels, expected);
        assert_eq!(labels.first(), Some(&"aerosol-can"));
    }

    #[test]
    fn test_is_storage_safe() {
        assert!(is_storage_safe("aluminum-can"));
        assert!(is_storage_safe("newspaper"));
        assert!(is_storage_safe("a"));
        assert!(is_storage_safe("light-bulb-2"));

        assert!(!is_storage_safe("Not Valid"));
        assert!(!is_storage_safe("has_underscore"));
        assert!(!is_storage_safe(""));
        assert!(!is_storage_safe("123-starts-with-digit"));
        assert!(!is_storage_safe("-leading-hyphen"));
        assert!(!is_storage_safe("slash/inside"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("aluminum-can"), "Aluminum Can");
        assert_eq!(display_name("newspaper"), "Newspaper");
        assert_eq!(display_name("light-bulb-led"), "Light Bulb Led");
        // One-way: the formatted form is not itself a label.
        assert_eq!(display_name("Aluminum Can"), "Aluminum Can");
        assert_eq!(
            display_name(&display_name("aluminum-can").to_lowercase().replace(' ', "-")),
            "Aluminum Can"
        );
    }

    #[test]
    fn test_display_name_keeps_empty_segments() {
        assert_eq!(display_name("a--b"), "A  B");
        assert_eq!(display_name("c-"), "C ");

        let registry = LabelRegistry::from_categories(vec![category("Odd", &["a--b", "c-"])])
            .unwrap();
        let names: Vec<String> = registry.list_by_category()[0]
            .labels
            .iter()
            .map(|label| display_name(label))
            .collect();
        assert_eq!(names, vec!["A  B", "C "]);
    }

    #[test]
    fn test_rejects_duplicate_across_categories() {
        let err = LabelRegistry::from_categories(vec![
            category("Glass", &["glass-jar", "wine-bottle"]),
            category("Bottles", &["wine-bottle"]),
        ])
        .unwrap_err();

        match err {
            RegistryError::DuplicateLabel { label, first, second } => {
                assert_eq!(label, "wine-bottle");
                assert_eq!(first, "Glass");
                assert_eq!(second, "Bottles");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rejects_unsafe_label() {
        let err = LabelRegistry::from_categories(vec![category("Metal", &["Tin Can"])])
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnsafeLabel { .. }));
    }

    #[test]
    fn test_rejects_empty_category() {
        let err = LabelRegistry::from_categories(vec![category("Metal", &[])]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyCategory(name) if name == "Metal"));

        let err = LabelRegistry::from_categories(vec![category("  ", &["tin-can"])])
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnnamedCategory));
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = LabelRegistry::from_json(r#"{"labels": []}"#).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories": [{{"name": "Binary", "labels": ["recyclable", "not-recyclable"]}}]}}"#
        )
        .unwrap();

        let registry = LabelRegistry::from_file(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.is_valid_label("not-recyclable"));
        assert!(!registry.is_valid_label("aluminum-can"));
    }
}
