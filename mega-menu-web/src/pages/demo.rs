use dioxus::prelude::*;
use mega_menu::prelude::*;
use serde::Deserialize;

use crate::components::MegaMenuBar;

// Two independent menu configurations so instance isolation is visible.
static DEMO_MENUS: &str = include_str!("demo_menus.json");

#[derive(Deserialize)]
struct DemoFixture {
    menus: Vec<DemoMenu>,
}

#[derive(Deserialize)]
struct DemoMenu {
    config: MegaMenu,
    links: LinkTree,
}

fn build_demo_menus() -> MegaMenuResult<Vec<MenuBuild>> {
    let layouts = LayoutRegistry::with_defaults();
    let fixture: DemoFixture = serde_json::from_str(DEMO_MENUS)?;

    fixture
        .menus
        .iter()
        .map(|menu| build_menu(&menu.config, &menu.links, &layouts))
        .collect()
}

#[component]
pub fn Demo() -> Element {
    match build_demo_menus() {
        Ok(builds) => rsx! {
            div { class: "demo-page",
                header { class: "demo-header",
                    h1 { "Mega menu demo" }
                }

                for build in builds {
                    MegaMenuBar { menu: build }
                }

                main { class: "demo-body",
                    p {
                        "Click a menu item to open its dropdown. Clicking the "
                        "open item again, or anywhere outside a menu, closes it. "
                        "The two menus above keep their state independently."
                    }
                }
            }
        },
        Err(error) => rsx! {
            div { class: "demo-error", "Failed to build demo menus: {error}" }
        },
    }
}
