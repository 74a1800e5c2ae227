use dioxus::prelude::*;
use mega_menu::prelude::*;

use crate::dom;

/// Per-instance menu state. Each bound container gets its own controller
/// signal; nothing is shared between menus on one page.
#[derive(Clone, Copy)]
pub struct MegaMenuState {
    pub controller: Signal<MenuInteractionController>,
}

/// Bind an interaction controller to a rendered menu build.
///
/// The controller is created once per component instance. A bridge listener
/// re-dispatches every lifecycle event as a cancelable DOM `CustomEvent` on
/// the container, and a document-level listener feeds outside clicks back in.
pub fn use_mega_menu(build: &MenuBuild) -> MegaMenuState {
    let controller = use_signal({
        let build = build.clone();
        move || {
            let mut controller = MenuInteractionController::from_build(&build);
            let menu_id = build.menu_id.clone();

            controller.on_event(move |event| {
                if !dom::dispatch_lifecycle_event(&menu_id, event) {
                    event.prevent_default();
                }
            });

            controller
        }
    });

    use_effect({
        let menu_id = build.menu_id.clone();
        move || dom::install_outside_click(menu_id.clone(), controller)
    });

    MegaMenuState { controller }
}

impl MegaMenuState {
    /// Identifier of the currently open panel, if any.
    pub fn open_panel(&self) -> Option<String> {
        self.controller.read().open_panel().map(str::to_string)
    }
}
