use dioxus::prelude::*;
use mega_menu::prelude::*;

use super::panel::MenuPanel;
use crate::hooks::use_mega_menu;

/// One mega menu instance: the trigger list plus its dropdown panels.
///
/// Triggers with a panel suppress link navigation and drive the controller;
/// plain links keep their default behaviour.
#[component]
pub fn MegaMenuBar(menu: MenuBuild) -> Element {
    let build = menu;
    let state = use_mega_menu(&build);
    let mut controller = state.controller;
    let open = state.open_panel();

    rsx! {
        nav {
            class: "mega-menu",
            "data-mega-menu": "{build.menu_id}",

            ul { class: "mega-menu-list",
                for item in build.items.iter() {
                    li {
                        key: "{item.link.id}",
                        class: if item.content_target.is_some() && item.content_target.as_deref() == open.as_deref() {
                            "mega-menu-item active"
                        } else {
                            "mega-menu-item"
                        },
                        "data-mega-menu-content-target": item.content_target.as_deref(),

                        a {
                            href: "{item.link.url}",
                            onclick: {
                                let target = item.content_target.clone();
                                move |event: Event<MouseData>| {
                                    let Some(target) = target.as_deref() else {
                                        return;
                                    };
                                    if controller.write().handle_trigger_click(target)
                                        == ClickOutcome::Handled
                                    {
                                        event.prevent_default();
                                    }
                                }
                            },
                            "{item.link.title}"
                        }

                        if let Some(panel) = &item.panel {
                            MenuPanel {
                                panel: panel.clone(),
                                visible: open.as_deref() == Some(panel.content_id.as_str()),
                            }
                        }
                    }
                }
            }

            for panel in build.outside_panels.iter() {
                MenuPanel {
                    key: "{panel.content_id}",
                    panel: panel.clone(),
                    visible: open.as_deref() == Some(panel.content_id.as_str()),
                }
            }
        }
    }
}
