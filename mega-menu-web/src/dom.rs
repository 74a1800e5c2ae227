//! Browser plumbing: lifecycle events as DOM `CustomEvent`s and the
//! document-level outside-click listener. Everything in here is a no-op off
//! wasm so the crate still builds for the desktop/mobile renderers.

use mega_menu::prelude::MenuEventKind;

/// DOM event names for the three lifecycle notifications.
pub fn event_name(kind: MenuEventKind) -> &'static str {
    match kind {
        MenuEventKind::Opening => "mega-menu:opening",
        MenuEventKind::Changing => "mega-menu:changing",
        MenuEventKind::Closing => "mega-menu:closing",
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::event_name;
    use dioxus::prelude::*;
    use mega_menu::prelude::{MenuEvent, MenuInteractionController};
    use serde::Serialize;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// Payload attached to the dispatched `CustomEvent`s as `detail`.
    #[derive(Serialize)]
    struct EventDetail<'a> {
        panel: Option<&'a str>,
        previous: Option<&'a str>,
    }

    fn container(menu_id: &str) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .query_selector(&format!("[data-mega-menu=\"{menu_id}\"]"))
            .ok()
            .flatten()
    }

    /// Dispatch a cancelable `CustomEvent` on the menu container. Returns
    /// whether the transition should proceed; a missing container counts as
    /// uncancelled.
    pub fn dispatch_lifecycle_event(menu_id: &str, event: &MenuEvent) -> bool {
        let Some(element) = container(menu_id) else {
            return true;
        };

        let init = web_sys::CustomEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);

        let detail = EventDetail {
            panel: event.panel.as_deref(),
            previous: event.previous.as_deref(),
        };
        if let Ok(detail) = serde_wasm_bindgen::to_value(&detail) {
            init.set_detail(&detail);
        }

        match web_sys::CustomEvent::new_with_event_init_dict(event_name(event.kind), &init) {
            Ok(custom) => element.dispatch_event(&custom).unwrap_or(true),
            Err(_) => true,
        }
    }

    /// Register a document-level click listener that closes the menu when the
    /// pointer lands outside the container subtree. The container includes
    /// every panel, so outside-rendered panels do not count as outside.
    pub fn install_outside_click(
        menu_id: String,
        mut controller: Signal<MenuInteractionController>,
    ) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };

            let inside = container(&menu_id)
                .map(|element| element.contains(Some(&target)))
                .unwrap_or(false);

            if !inside {
                controller.write().handle_outside_click();
            }
        });

        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());

        // The listener lives for the rest of the page, like the menu itself.
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{dispatch_lifecycle_event, install_outside_click};

#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch_lifecycle_event(_menu_id: &str, _event: &mega_menu::prelude::MenuEvent) -> bool {
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_outside_click(
    _menu_id: String,
    _controller: dioxus::prelude::Signal<mega_menu::prelude::MenuInteractionController>,
) {
}
