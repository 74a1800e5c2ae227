//! Layout definitions and the registry the menu builder resolves them from

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MegaMenuError, MegaMenuResult};

/// A named slot inside a layout that blocks can be placed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRegion {
    pub id: String,
    pub label: String,
}

impl LayoutRegion {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// An arrangement template for a dropdown panel. Regions are ordered; the
/// builder emits them in definition order regardless of block placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDefinition {
    pub id: String,
    pub label: String,
    pub regions: Vec<LayoutRegion>,
}

impl LayoutDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, regions: Vec<LayoutRegion>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            regions,
        }
    }

    pub fn has_region(&self, region_id: &str) -> bool {
        self.regions.iter().any(|region| region.id == region_id)
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|region| region.id.as_str())
    }
}

/// Registry of the layouts available to mega menu dropdowns.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: HashMap<String, LayoutDefinition>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in column layouts.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(LayoutDefinition::new(
            "single_column",
            "Single column",
            vec![LayoutRegion::new("content", "Content")],
        ));
        registry.register(LayoutDefinition::new(
            "two_column",
            "Two columns",
            vec![
                LayoutRegion::new("left", "Left"),
                LayoutRegion::new("right", "Right"),
            ],
        ));
        registry.register(LayoutDefinition::new(
            "three_column",
            "Three columns",
            vec![
                LayoutRegion::new("left", "Left"),
                LayoutRegion::new("middle", "Middle"),
                LayoutRegion::new("right", "Right"),
            ],
        ));

        registry
    }

    /// Register a layout, replacing any previous definition with the same id.
    pub fn register(&mut self, layout: LayoutDefinition) -> &mut Self {
        self.layouts.insert(layout.id.clone(), layout);
        self
    }

    pub fn get(&self, layout_id: &str) -> MegaMenuResult<&LayoutDefinition> {
        self.layouts
            .get(layout_id)
            .ok_or_else(|| MegaMenuError::LayoutNotFound(layout_id.to_string()))
    }

    pub fn contains(&self, layout_id: &str) -> bool {
        self.layouts.contains_key(layout_id)
    }

    /// `(id, label)` pairs for building a layout select list, label-sorted.
    pub fn options(&self) -> Vec<(&str, &str)> {
        let mut options: Vec<(&str, &str)> = self
            .layouts
            .values()
            .map(|layout| (layout.id.as_str(), layout.label.as_str()))
            .collect();

        options.sort_by_key(|(_, label)| *label);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layouts_are_registered() {
        let registry = LayoutRegistry::with_defaults();
        assert!(registry.contains("single_column"));
        assert!(registry.contains("two_column"));
        assert!(registry.contains("three_column"));
    }

    #[test]
    fn test_region_order_is_preserved() {
        let registry = LayoutRegistry::with_defaults();
        let layout = registry.get("three_column").unwrap();
        let ids: Vec<&str> = layout.region_ids().collect();
        assert_eq!(ids, vec!["left", "middle", "right"]);
    }

    #[test]
    fn test_unknown_layout_errors() {
        let registry = LayoutRegistry::with_defaults();
        let result = registry.get("mosaic");
        assert!(matches!(result, Err(MegaMenuError::LayoutNotFound(_))));
    }
}
