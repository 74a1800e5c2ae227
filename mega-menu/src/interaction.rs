//! Open/close interaction state for one rendered mega menu
//!
//! Each bound menu container owns its own controller instance; nothing here is
//! shared between menus on the same page. All transitions run synchronously
//! inside the input callback that caused them, so a click is fully processed
//! before the next one is handled.

use std::fmt;

use log::debug;

use crate::render::MenuBuild;

/// The three lifecycle notifications fired on state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEventKind {
    /// A panel is about to become visible from the closed state.
    Opening,
    /// The open panel is about to be swapped for another one.
    Changing,
    /// The menu is about to close without opening another panel.
    Closing,
}

/// A cancellable lifecycle event. Listeners receive it mutably and may call
/// [`MenuEvent::prevent_default`] to veto the transition; the event still
/// counts as fired, but no visibility or activation state changes.
#[derive(Debug, Clone)]
pub struct MenuEvent {
    pub kind: MenuEventKind,
    /// The panel being opened (opening/changing) or hidden (closing).
    pub panel: Option<String>,
    /// The previously open panel, set for changing events.
    pub previous: Option<String>,
    prevented: bool,
}

impl MenuEvent {
    fn opening(panel: &str) -> Self {
        Self {
            kind: MenuEventKind::Opening,
            panel: Some(panel.to_string()),
            previous: None,
            prevented: false,
        }
    }

    fn changing(previous: &str, next: &str) -> Self {
        Self {
            kind: MenuEventKind::Changing,
            panel: Some(next.to_string()),
            previous: Some(previous.to_string()),
            prevented: false,
        }
    }

    fn closing(panel: &str) -> Self {
        Self {
            kind: MenuEventKind::Closing,
            panel: Some(panel.to_string()),
            previous: None,
            prevented: false,
        }
    }

    /// Veto the transition this event announces.
    pub fn prevent_default(&mut self) {
        self.prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.prevented
    }
}

/// One dropdown content region, paired with its trigger by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub identifier: String,
    pub visible: bool,
}

/// One clickable menu item that can open a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub identifier: String,
    pub active: bool,
}

/// Derived menu state: closed, or exactly one panel open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open(String),
}

/// What the caller should do with the input event that caused a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click addressed a trigger with a panel; suppress the default
    /// action. The transition itself may still have been vetoed.
    Handled,
    /// No matching panel; let the default action (navigation) proceed.
    PassThrough,
}

type Listener = Box<dyn FnMut(&mut MenuEvent)>;

/// Owns the open/closed/active state of the panels and triggers of a single
/// bound menu container, and drives the single-visible-panel invariant.
pub struct MenuInteractionController {
    menu_id: String,
    panels: Vec<Panel>,
    triggers: Vec<Trigger>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for MenuInteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuInteractionController")
            .field("menu_id", &self.menu_id)
            .field("panels", &self.panels)
            .field("triggers", &self.triggers)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MenuInteractionController {
    /// Bind a controller to explicit trigger and panel identifier lists.
    /// Panels start hidden and triggers inactive.
    pub fn bind(
        menu_id: impl Into<String>,
        trigger_ids: Vec<String>,
        panel_ids: Vec<String>,
    ) -> Self {
        Self {
            menu_id: menu_id.into(),
            panels: panel_ids
                .into_iter()
                .map(|identifier| Panel {
                    identifier,
                    visible: false,
                })
                .collect(),
            triggers: trigger_ids
                .into_iter()
                .map(|identifier| Trigger {
                    identifier,
                    active: false,
                })
                .collect(),
            listeners: Vec::new(),
        }
    }

    /// Bind a controller by scanning a menu build for triggers and panels,
    /// the way the front end scans the rendered markup at page load.
    pub fn from_build(build: &MenuBuild) -> Self {
        Self::bind(
            build.menu_id.clone(),
            build.targets().map(str::to_string).collect(),
            build
                .panels()
                .map(|panel| panel.content_id.clone())
                .collect(),
        )
    }

    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    /// Register a lifecycle event listener. Listeners run synchronously, in
    /// registration order, before the transition mutates any state.
    pub fn on_event(&mut self, listener: impl FnMut(&mut MenuEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current derived state.
    pub fn state(&self) -> MenuState {
        match self.open_panel() {
            Some(identifier) => MenuState::Open(identifier.to_string()),
            None => MenuState::Closed,
        }
    }

    /// Identifier of the currently visible panel, if any.
    pub fn open_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|panel| panel.visible)
            .map(|panel| panel.identifier.as_str())
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Process a click on a trigger item.
    ///
    /// A trigger without a matching panel causes no transition and reports
    /// [`ClickOutcome::PassThrough`] so the caller leaves the click's default
    /// action unsuppressed.
    pub fn handle_trigger_click(&mut self, trigger_id: &str) -> ClickOutcome {
        let known_trigger = self
            .triggers
            .iter()
            .any(|trigger| trigger.identifier == trigger_id);
        let has_panel = self
            .panels
            .iter()
            .any(|panel| panel.identifier == trigger_id);

        if !known_trigger || !has_panel {
            debug!(
                "mega menu '{}': click on '{}' has no matching panel, falling through",
                self.menu_id, trigger_id
            );
            return ClickOutcome::PassThrough;
        }

        match self.state() {
            MenuState::Open(open) if open == trigger_id => {
                self.close_open_panel(&open);
            }
            MenuState::Open(open) => {
                self.change_panel(&open, trigger_id);
            }
            MenuState::Closed => {
                self.open_from_closed(trigger_id);
            }
        }

        ClickOutcome::Handled
    }

    /// Process a pointer interaction outside the menu container. A no-op
    /// while the menu is already closed; no event is fired in that case.
    /// Returns whether a closing transition was attempted.
    pub fn handle_outside_click(&mut self) -> bool {
        match self.state() {
            MenuState::Open(open) => {
                self.close_open_panel(&open);
                true
            }
            MenuState::Closed => false,
        }
    }

    /// Programmatically open a panel, with the same event semantics as a
    /// trigger click. Opening the panel that is already open is a no-op.
    pub fn open(&mut self, panel_id: &str) -> bool {
        if !self
            .panels
            .iter()
            .any(|panel| panel.identifier == panel_id)
        {
            debug!(
                "mega menu '{}': open() for unknown panel '{}' ignored",
                self.menu_id, panel_id
            );
            return false;
        }

        match self.state() {
            MenuState::Open(open) if open == panel_id => false,
            MenuState::Open(open) => self.change_panel(&open, panel_id),
            MenuState::Closed => self.open_from_closed(panel_id),
        }
    }

    /// Programmatically close the menu, with the same event semantics as an
    /// outside click. A no-op while already closed.
    pub fn close(&mut self) -> bool {
        self.handle_outside_click()
    }

    fn open_from_closed(&mut self, panel_id: &str) -> bool {
        if !self.fire(MenuEvent::opening(panel_id)) {
            return false;
        }

        debug!("mega menu '{}': opening panel '{}'", self.menu_id, panel_id);
        self.show_only(panel_id);
        true
    }

    fn change_panel(&mut self, previous: &str, next: &str) -> bool {
        if !self.fire(MenuEvent::changing(previous, next)) {
            return false;
        }

        debug!(
            "mega menu '{}': changing panel '{}' -> '{}'",
            self.menu_id, previous, next
        );
        // Single swap, no observable intermediate closed state.
        self.show_only(next);
        true
    }

    fn close_open_panel(&mut self, open: &str) -> bool {
        if !self.fire(MenuEvent::closing(open)) {
            return false;
        }

        debug!("mega menu '{}': closing panel '{}'", self.menu_id, open);
        self.hide_all();
        true
    }

    /// Dispatch an event to all listeners; returns whether to proceed.
    fn fire(&mut self, mut event: MenuEvent) -> bool {
        for listener in &mut self.listeners {
            listener(&mut event);
        }
        !event.is_default_prevented()
    }

    /// Make exactly one panel visible and its trigger active.
    fn show_only(&mut self, panel_id: &str) {
        for panel in &mut self.panels {
            panel.visible = panel.identifier == panel_id;
        }
        for trigger in &mut self.triggers {
            trigger.active = trigger.identifier == panel_id;
        }
    }

    fn hide_all(&mut self) {
        for panel in &mut self.panels {
            panel.visible = false;
        }
        for trigger in &mut self.triggers {
            trigger.active = false;
        }
    }
}
