//! Mega menu configuration - which layout and which blocks each menu link carries

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MegaMenuError, MegaMenuResult};

/// Layout id for a menu link that has no dropdown content.
pub const NO_LAYOUT: &str = "mega_menu.no_layout";

/// Region id for a block that has not been placed in a layout region yet.
pub const NO_REGION: &str = "mega_menu.no_region";

/// Configuration for a single block placed inside a link's dropdown panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Unique id of this block instance within its link.
    pub id: String,
    /// Id of the block plugin that renders this instance.
    pub plugin: String,
    /// Human readable label.
    pub label: String,
    /// Whether the label should be rendered above the block content.
    #[serde(default)]
    pub label_display: bool,
    /// The layout region this block is placed in.
    #[serde(default = "default_region")]
    pub region: String,
    /// Ordering weight within the region. Lower weights render first.
    #[serde(default)]
    pub weight: i32,
    /// Plugin specific settings as free-form JSON.
    #[serde(default)]
    pub settings: Value,
}

fn default_region() -> String {
    NO_REGION.to_string()
}

impl BlockConfig {
    pub fn new(id: impl Into<String>, plugin: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plugin: plugin.into(),
            label: label.into(),
            label_display: false,
            region: NO_REGION.to_string(),
            weight: 0,
            settings: Value::Null,
        }
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }
}

/// Per-link configuration: the chosen layout and the block placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Selected layout id, or [`NO_LAYOUT`] when the link is a plain link.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Block instances keyed by their instance id.
    #[serde(default)]
    pub blocks: HashMap<String, BlockConfig>,
}

fn default_layout() -> String {
    NO_LAYOUT.to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            layout: NO_LAYOUT.to_string(),
            blocks: HashMap::new(),
        }
    }
}

/// A mega menu configuration entity.
///
/// The mega menu does not hold any links of its own. It references a menu by
/// machine name and stores per-link dropdown configuration keyed by a
/// sanitized version of the link id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MegaMenu {
    /// Machine name of this mega menu.
    pub name: String,
    /// Human readable label.
    pub label: String,
    /// Machine name of the menu this mega menu is configured for.
    pub menu: String,
    /// Per-link configuration keyed by sanitized link id.
    #[serde(default)]
    links: HashMap<String, LinkConfig>,
    /// Render the dropdown panels outside of the menu item list.
    #[serde(default)]
    render_content_outside: bool,
}

/// Sanitize a menu link id into a configuration key. Link ids may contain
/// dots, which are reserved separators in the host configuration system.
pub fn link_key(link_id: &str) -> String {
    link_id.replace('.', "_")
}

impl MegaMenu {
    pub fn new(name: impl Into<String>, label: impl Into<String>, menu: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            menu: menu.into(),
            links: HashMap::new(),
            render_content_outside: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.name
    }

    /// Machine name of the target menu.
    pub fn target_menu(&self) -> &str {
        &self.menu
    }

    pub fn should_render_content_outside(&self) -> bool {
        self.render_content_outside
    }

    pub fn set_render_content_outside(&mut self, outside: bool) -> &mut Self {
        self.render_content_outside = outside;
        self
    }

    /// Get the selected layout for a link, [`NO_LAYOUT`] if none was chosen.
    pub fn link_layout(&self, link_id: &str) -> &str {
        self.links
            .get(&link_key(link_id))
            .map(|link| link.layout.as_str())
            .unwrap_or(NO_LAYOUT)
    }

    /// Set the layout of a link, creating the link configuration on demand.
    pub fn set_link_layout(&mut self, link_id: &str, layout_id: impl Into<String>) -> &mut Self {
        self.links.entry(link_key(link_id)).or_default().layout = layout_id.into();
        self
    }

    /// Whether the link has dropdown content configured.
    pub fn has_layout(&self, link_id: &str) -> bool {
        self.link_layout(link_id) != NO_LAYOUT
    }

    /// Add a new block to a link's dropdown.
    pub fn add_block(&mut self, link_id: &str, block: BlockConfig) -> MegaMenuResult<&mut Self> {
        let key = link_key(link_id);
        let link = self.links.entry(key.clone()).or_default();

        if link.blocks.contains_key(&block.id) {
            return Err(MegaMenuError::DuplicateBlock(key, block.id));
        }

        link.blocks.insert(block.id.clone(), block);
        Ok(self)
    }

    /// Update an existing block by merging new settings over its current ones.
    /// Keys present in `settings` win; untouched keys survive.
    pub fn update_block(
        &mut self,
        link_id: &str,
        block_id: &str,
        settings: Value,
    ) -> MegaMenuResult<&mut Self> {
        let block = self.block_mut(link_id, block_id)?;
        block.settings = merge_settings(block.settings.take(), settings);
        Ok(self)
    }

    /// Move a block to another region and weight.
    pub fn move_block(
        &mut self,
        link_id: &str,
        block_id: &str,
        region: impl Into<String>,
        weight: i32,
    ) -> MegaMenuResult<&mut Self> {
        let block = self.block_mut(link_id, block_id)?;
        block.region = region.into();
        block.weight = weight;
        Ok(self)
    }

    /// Remove a block from a link's dropdown.
    pub fn remove_block(&mut self, link_id: &str, block_id: &str) -> MegaMenuResult<&mut Self> {
        let key = link_key(link_id);
        let link = self
            .links
            .get_mut(&key)
            .ok_or_else(|| MegaMenuError::LinkNotFound(key.clone()))?;

        link.blocks
            .remove(block_id)
            .ok_or_else(|| MegaMenuError::BlockNotFound(key, block_id.to_string()))?;

        Ok(self)
    }

    /// Check if a block exists.
    pub fn has_block(&self, link_id: &str, block_id: &str) -> bool {
        self.links
            .get(&link_key(link_id))
            .map(|link| link.blocks.contains_key(block_id))
            .unwrap_or(false)
    }

    /// Get the specified block.
    pub fn block(&self, link_id: &str, block_id: &str) -> MegaMenuResult<&BlockConfig> {
        let key = link_key(link_id);
        self.links
            .get(&key)
            .and_then(|link| link.blocks.get(block_id))
            .ok_or_else(|| MegaMenuError::BlockNotFound(key, block_id.to_string()))
    }

    fn block_mut(&mut self, link_id: &str, block_id: &str) -> MegaMenuResult<&mut BlockConfig> {
        let key = link_key(link_id);
        self.links
            .get_mut(&key)
            .and_then(|link| link.blocks.get_mut(block_id))
            .ok_or_else(|| MegaMenuError::BlockNotFound(key, block_id.to_string()))
    }

    /// All blocks configured for a link, sorted by weight.
    pub fn blocks_by_link(&self, link_id: &str) -> Vec<&BlockConfig> {
        let mut blocks: Vec<&BlockConfig> = self
            .links
            .get(&link_key(link_id))
            .map(|link| link.blocks.values().collect())
            .unwrap_or_default();

        blocks.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.id.cmp(&b.id)));
        blocks
    }

    /// Blocks for a link grouped by region, weight-sorted within each region.
    pub fn blocks_by_region(&self, link_id: &str) -> HashMap<&str, Vec<&BlockConfig>> {
        let mut grouped: HashMap<&str, Vec<&BlockConfig>> = HashMap::new();

        for block in self.blocks_by_link(link_id) {
            grouped.entry(block.region.as_str()).or_default().push(block);
        }

        grouped
    }

    /// Sanitized link ids that have configuration, in no particular order.
    pub fn configured_links(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }
}

/// Merge two JSON settings values. Object keys from `new` override `current`;
/// anything other than two objects replaces wholesale.
fn merge_settings(current: Value, new: Value) -> Value {
    match (current, new) {
        (Value::Object(mut current), Value::Object(new)) => {
            for (key, value) in new {
                current.insert(key, value);
            }
            Value::Object(current)
        }
        (_, new) => new,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn menu_with_block() -> MegaMenu {
        let mut menu = MegaMenu::new("main", "Main menu", "main-navigation");
        menu.set_link_layout("menu.products", "two_column");
        menu.add_block(
            "menu.products",
            BlockConfig::new("promo", "text", "Promo")
                .in_region("left")
                .with_settings(json!({"body": "Hello", "format": "plain"})),
        )
        .unwrap();
        menu
    }

    #[test]
    fn test_link_ids_are_sanitized() {
        let menu = menu_with_block();

        // Both the dotted and the sanitized spelling address the same link.
        assert_eq!(menu.link_layout("menu.products"), "two_column");
        assert_eq!(menu.link_layout("menu_products"), "two_column");
        assert!(menu.has_block("menu_products", "promo"));
    }

    #[test]
    fn test_unconfigured_link_has_no_layout() {
        let menu = menu_with_block();
        assert_eq!(menu.link_layout("menu.other"), NO_LAYOUT);
        assert!(!menu.has_layout("menu.other"));
    }

    #[test]
    fn test_duplicate_block_is_rejected() {
        let mut menu = menu_with_block();
        let result = menu.add_block("menu.products", BlockConfig::new("promo", "text", "Again"));
        assert!(matches!(result, Err(MegaMenuError::DuplicateBlock(_, _))));
    }

    #[test]
    fn test_update_merges_settings() {
        let mut menu = menu_with_block();
        menu.update_block("menu.products", "promo", json!({"body": "Updated"}))
            .unwrap();

        let block = menu.block("menu.products", "promo").unwrap();
        assert_eq!(block.settings["body"], "Updated");
        // Untouched keys survive the merge.
        assert_eq!(block.settings["format"], "plain");
    }

    #[test]
    fn test_remove_missing_block_errors() {
        let mut menu = menu_with_block();
        let result = menu.remove_block("menu.products", "nope");
        assert!(matches!(result, Err(MegaMenuError::BlockNotFound(_, _))));
    }

    #[test]
    fn test_blocks_by_region_sorts_by_weight() {
        let mut menu = menu_with_block();
        menu.add_block(
            "menu.products",
            BlockConfig::new("first", "text", "First")
                .in_region("left")
                .with_weight(-10),
        )
        .unwrap();

        let grouped = menu.blocks_by_region("menu.products");
        let left: Vec<&str> = grouped["left"].iter().map(|b| b.id.as_str()).collect();
        assert_eq!(left, vec!["first", "promo"]);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let menu = menu_with_block();
        let json = serde_json::to_string(&menu).unwrap();
        let restored: MegaMenu = serde_json::from_str(&json).unwrap();
        assert_eq!(menu, restored);
    }
}
