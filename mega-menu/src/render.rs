//! Builds the renderable menu tree out of a mega menu configuration
//!
//! The build output is a plain data structure describing the markup contract
//! the front end consumes: a container tagged with the menu id, trigger items
//! tagged with a content target, and initially hidden panels tagged with the
//! matching content id. Anything that actually touches the DOM lives in the
//! web crate.

use log::debug;
use serde::Serialize;

use crate::config::{link_key, BlockConfig, MegaMenu, NO_LAYOUT};
use crate::error::MegaMenuResult;
use crate::layout::{LayoutRegion, LayoutRegistry};
use crate::links::{LinkTree, MenuLink};

/// Container attribute carrying the mega menu id.
pub const MENU_ATTRIBUTE: &str = "data-mega-menu";

/// Trigger item attribute carrying the target panel id.
pub const TARGET_ATTRIBUTE: &str = "data-mega-menu-content-target";

/// Panel attribute carrying the content id that pairs it with its trigger.
pub const CONTENT_ATTRIBUTE: &str = "data-mega-menu-content";

/// One block placed into a region, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockBuild {
    pub config: BlockConfig,
}

/// One layout region with its weight-sorted blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBuild {
    pub region: LayoutRegion,
    pub blocks: Vec<BlockBuild>,
}

/// One dropdown panel. Panels start hidden; visibility is owned by the
/// interaction controller after page load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelBuild {
    /// Value of the panel's content attribute, equal to the sanitized link id.
    pub content_id: String,
    pub layout: String,
    pub visible: bool,
    pub regions: Vec<RegionBuild>,
}

/// One menu item: the link itself plus its optional dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemBuild {
    pub link: MenuLink,
    /// Value of the trigger's target attribute. `None` for plain links, which
    /// keep their default navigation behaviour.
    pub content_target: Option<String>,
    /// The panel nested inside this item. `None` for plain links and for
    /// menus that render their content outside of the item list.
    pub panel: Option<PanelBuild>,
}

/// The renderable tree for one mega menu instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuBuild {
    /// Value of the container's menu attribute.
    pub menu_id: String,
    pub items: Vec<MenuItemBuild>,
    /// Panels rendered after the item list when the configuration asks for
    /// content outside of the list. Empty otherwise.
    pub outside_panels: Vec<PanelBuild>,
}

impl MenuBuild {
    /// All panels of this menu, wherever they are rendered.
    pub fn panels(&self) -> impl Iterator<Item = &PanelBuild> {
        self.items
            .iter()
            .filter_map(|item| item.panel.as_ref())
            .chain(self.outside_panels.iter())
    }

    /// Target ids of all trigger items that have a dropdown.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter_map(|item| item.content_target.as_deref())
    }
}

/// Build the renderable tree for a mega menu over the given link tree.
///
/// Disabled links are skipped. Links without a configured layout become plain
/// items. Block placements naming a region the layout does not define are
/// dropped from the build.
pub fn build_menu(
    menu: &MegaMenu,
    tree: &LinkTree,
    layouts: &LayoutRegistry,
) -> MegaMenuResult<MenuBuild> {
    let mut build = MenuBuild {
        menu_id: menu.id().to_string(),
        items: Vec::new(),
        outside_panels: Vec::new(),
    };

    for link in tree.links() {
        if !link.enabled {
            continue;
        }

        let key = link_key(&link.id);
        let layout_id = menu.link_layout(&key);

        if layout_id == NO_LAYOUT {
            build.items.push(MenuItemBuild {
                link: link.clone(),
                content_target: None,
                panel: None,
            });
            continue;
        }

        let layout = layouts.get(layout_id)?;
        let mut grouped = menu.blocks_by_region(&key);

        // Regions come out in layout definition order; placements pointing
        // at regions the layout does not define are dropped.
        let regions: Vec<RegionBuild> = layout
            .regions
            .iter()
            .map(|region| RegionBuild {
                region: region.clone(),
                blocks: grouped
                    .remove(region.id.as_str())
                    .unwrap_or_default()
                    .into_iter()
                    .map(|config| BlockBuild {
                        config: config.clone(),
                    })
                    .collect(),
            })
            .collect();

        for (region, blocks) in grouped {
            for block in blocks {
                debug!(
                    "mega menu '{}': dropping block '{}' placed in unknown region '{}'",
                    menu.id(),
                    block.id,
                    region
                );
            }
        }

        let panel = PanelBuild {
            content_id: key.clone(),
            layout: layout_id.to_string(),
            visible: false,
            regions,
        };

        let nested = if menu.should_render_content_outside() {
            build.outside_panels.push(panel);
            None
        } else {
            Some(panel)
        };

        build.items.push(MenuItemBuild {
            link: link.clone(),
            content_target: Some(key),
            panel: nested,
        });
    }

    debug!(
        "built mega menu '{}' with {} items and {} panels",
        build.menu_id,
        build.items.len(),
        build.panels().count()
    );

    Ok(build)
}
