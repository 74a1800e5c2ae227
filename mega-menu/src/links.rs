//! Top-level menu links the mega menu attaches dropdown content to

use serde::{Deserialize, Serialize};

/// A single top-level link of the host menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    /// Stable link id, used to pair the link with its dropdown configuration.
    pub id: String,
    pub title: String,
    pub url: String,
    /// Ordering weight within the menu. Lower weights render first.
    #[serde(default)]
    pub weight: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl MenuLink {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            weight: 0,
            enabled: true,
        }
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// The depth-1 link tree of a menu. Mega menus only decorate top-level items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkTree {
    links: Vec<MenuLink>,
}

impl LinkTree {
    pub fn new(links: Vec<MenuLink>) -> Self {
        Self { links }
    }

    pub fn add(&mut self, link: MenuLink) -> &mut Self {
        self.links.push(link);
        self
    }

    /// Links in render order: weight-sorted, insertion order breaking ties.
    pub fn links(&self) -> Vec<&MenuLink> {
        let mut links: Vec<&MenuLink> = self.links.iter().collect();
        links.sort_by_key(|link| link.weight);
        links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
