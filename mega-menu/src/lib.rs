//! Mega menu - rich dropdown content for navigation menus
//!
//! This library holds everything about a mega menu that does not touch the
//! DOM: the configuration model (which layout and which blocks each top-level
//! menu link carries), the layout registry, the build step that turns a
//! configuration plus a link tree into a renderable structure, and the
//! interaction controller that owns the open/closed state of the rendered
//! dropdowns.
//!
//! ## Example
//! ```rust
//! use mega_menu::prelude::*;
//! use serde_json::json;
//!
//! let mut menu = MegaMenu::new("main", "Main menu", "main-navigation");
//! menu.set_link_layout("menu.products", "two_column");
//! menu.add_block(
//!     "menu.products",
//!     BlockConfig::new("promo", "text", "Promo")
//!         .in_region("left")
//!         .with_settings(json!({"body": "New arrivals"})),
//! )
//! .unwrap();
//!
//! let mut tree = LinkTree::default();
//! tree.add(MenuLink::new("menu.products", "Products", "/products"));
//!
//! let layouts = LayoutRegistry::with_defaults();
//! let build = build_menu(&menu, &tree, &layouts).unwrap();
//!
//! let mut controller = MenuInteractionController::from_build(&build);
//! controller.handle_trigger_click("menu_products");
//! assert_eq!(controller.state(), MenuState::Open("menu_products".into()));
//! ```

pub mod config;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod links;
pub mod render;

// Re-export common types
pub mod prelude {
    pub use crate::config::{BlockConfig, LinkConfig, MegaMenu, NO_LAYOUT, NO_REGION};
    pub use crate::error::{MegaMenuError, MegaMenuResult};
    pub use crate::interaction::{
        ClickOutcome, MenuEvent, MenuEventKind, MenuInteractionController, MenuState, Panel,
        Trigger,
    };
    pub use crate::layout::{LayoutDefinition, LayoutRegion, LayoutRegistry};
    pub use crate::links::{LinkTree, MenuLink};
    pub use crate::render::{build_menu, MenuBuild, MenuItemBuild, PanelBuild, RegionBuild};
}
