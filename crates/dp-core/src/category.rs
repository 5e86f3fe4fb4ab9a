//! Event categories and the registry that hands out canonical ones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A category of events. Higher priority wins overlap resolution.
///
/// Equality and hashing are by value over `(name, priority)`. Within one run a
/// name must always carry the same priority; [`CategoryRegistry`] enforces this
/// for the categories it knows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub priority: i32,
}

impl Category {
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The set of known categories, looked up by name.
///
/// Keeps registration order so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Builds a registry, rejecting names registered with different priorities.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for category in categories {
            registry.insert(category)?;
        }
        Ok(registry)
    }

    /// Registers a category. Re-registering an identical category is a no-op.
    pub fn insert(&mut self, category: Category) -> Result<(), RegistryError> {
        match self.get(&category.name) {
            Some(existing) if existing.priority == category.priority => Ok(()),
            Some(existing) => Err(RegistryError::ConflictingPriority {
                name: category.name,
                existing: existing.priority,
                conflicting: category.priority,
            }),
            None => {
                self.categories.push(category);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns the canonical category for `name`.
    ///
    /// Unknown names get priority 0 so that loading never drops events.
    pub fn resolve(&self, name: &str) -> Category {
        self.get(name).cloned().unwrap_or_else(|| {
            tracing::warn!(category = name, "unknown category, using priority 0");
            Category::new(name, 0)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_rejects_conflicting_priority() {
        let result = CategoryRegistry::new([Category::new("work", 1), Category::new("work", 2)]);
        assert_eq!(
            result,
            Err(RegistryError::ConflictingPriority {
                name: "work".to_string(),
                existing: 1,
                conflicting: 2,
            })
        );
    }

    #[test]
    fn test_registry_tolerates_identical_duplicates() {
        let registry =
            CategoryRegistry::new([Category::new("work", 1), Category::new("work", 1)]).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = CategoryRegistry::new([Category::new("sleep", 10)]).unwrap();
        assert_eq!(registry.resolve("sleep"), Category::new("sleep", 10));
        assert_eq!(registry.resolve("gym"), Category::new("gym", 0));
        assert!(registry.get("gym").is_none());
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let registry = CategoryRegistry::new([
            Category::new("work", 1),
            Category::new("eating", 0),
            Category::new("sleep", 5),
        ])
        .unwrap();
        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["work", "eating", "sleep"]);
    }

    #[test]
    fn test_category_equality_is_by_value() {
        assert_eq!(Category::new("work", 1), Category::new("work", 1));
        assert_ne!(Category::new("work", 1), Category::new("work", 2));
    }

    #[test]
    fn test_priority_defaults_when_deserializing() {
        let category: Category = serde_json::from_str(r#"{"name":"misc"}"#).unwrap();
        assert_eq!(category, Category::new("misc", 0));
    }
}
