use dioxus::prelude::*;
use mega_menu::prelude::*;

use super::block::MenuBlock;

/// One dropdown panel: the layout's regions in definition order, each with
/// its weight-sorted blocks. Visibility is driven by the controller.
#[component]
pub fn MenuPanel(panel: PanelBuild, visible: bool) -> Element {
    rsx! {
        div {
            class: if visible { "mega-menu-content visible" } else { "mega-menu-content" },
            "data-mega-menu-content": "{panel.content_id}",

            div { class: "mega-menu-layout layout-{panel.layout}",
                for region in panel.regions.iter() {
                    div {
                        key: "{region.region.id}",
                        class: "mega-menu-region region-{region.region.id}",

                        for block in region.blocks.iter() {
                            MenuBlock {
                                key: "{block.config.id}",
                                block: block.config.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
