//! End-to-end interaction tests: configuration -> build -> click sequences

use std::cell::RefCell;
use std::rc::Rc;

use mega_menu::prelude::*;
use serde_json::json;

fn build_fixture_menu() -> MenuBuild {
    let mut menu = MegaMenu::new("main", "Main menu", "main-navigation");

    menu.set_link_layout("menu.products", "two_column");
    menu.add_block(
        "menu.products",
        BlockConfig::new("promo", "text", "Promo")
            .in_region("left")
            .with_settings(json!({"body": "New arrivals"})),
    )
    .unwrap();

    menu.set_link_layout("menu.services", "single_column");
    menu.add_block(
        "menu.services",
        BlockConfig::new("overview", "text", "Overview").in_region("content"),
    )
    .unwrap();

    let mut tree = LinkTree::default();
    tree.add(MenuLink::new("menu.products", "Products", "/products"));
    tree.add(MenuLink::new("menu.services", "Services", "/services").with_weight(5));
    tree.add(MenuLink::new("menu.contact", "Contact", "/contact").with_weight(10));

    let layouts = LayoutRegistry::with_defaults();
    build_menu(&menu, &tree, &layouts).unwrap()
}

fn controller() -> MenuInteractionController {
    MenuInteractionController::from_build(&build_fixture_menu())
}

fn visible_count(c: &MenuInteractionController) -> usize {
    c.panels().iter().filter(|p| p.visible).count()
}

/// Records every fired event so sequences can be asserted on.
fn recording(c: &mut MenuInteractionController) -> Rc<RefCell<Vec<(MenuEventKind, Option<String>)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    c.on_event(move |event| sink.borrow_mut().push((event.kind, event.panel.clone())));
    log
}

#[test]
fn at_most_one_panel_visible_across_any_click_sequence() {
    let mut c = controller();

    let sequence = [
        "menu_products",
        "menu_services",
        "menu_services",
        "menu_products",
        "menu_contact",
        "menu_products",
        "menu_services",
    ];

    for trigger in sequence {
        c.handle_trigger_click(trigger);
        assert!(
            visible_count(&c) <= 1,
            "invariant violated after clicking '{trigger}'"
        );
    }
}

#[test]
fn toggle_click_returns_to_closed() {
    let mut c = controller();

    c.handle_trigger_click("menu_products");
    assert_eq!(c.state(), MenuState::Open("menu_products".into()));

    c.handle_trigger_click("menu_products");
    assert_eq!(c.state(), MenuState::Closed);
    assert_eq!(visible_count(&c), 0);
    assert!(c.triggers().iter().all(|t| !t.active));
}

#[test]
fn changing_swaps_panels_atomically() {
    let mut c = controller();
    c.handle_trigger_click("menu_products");

    // A single changing event covers the swap; no closing/opening pair and
    // no point where both or neither panel is visible.
    let log = recording(&mut c);
    c.handle_trigger_click("menu_services");

    assert_eq!(c.state(), MenuState::Open("menu_services".into()));
    assert_eq!(visible_count(&c), 1);

    let events = log.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, MenuEventKind::Changing);
    assert_eq!(events[0].1.as_deref(), Some("menu_services"));

    let products = c
        .triggers()
        .iter()
        .find(|t| t.identifier == "menu_products")
        .unwrap();
    let services = c
        .triggers()
        .iter()
        .find(|t| t.identifier == "menu_services")
        .unwrap();
    assert!(!products.active);
    assert!(services.active);
}

#[test]
fn changing_event_carries_previous_and_next() {
    let mut c = controller();
    c.handle_trigger_click("menu_products");

    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    c.on_event(move |event| {
        if event.kind == MenuEventKind::Changing {
            *sink.borrow_mut() = Some((event.previous.clone(), event.panel.clone()));
        }
    });

    c.handle_trigger_click("menu_services");

    let seen = seen.borrow();
    let (previous, next) = seen.as_ref().unwrap();
    assert_eq!(previous.as_deref(), Some("menu_products"));
    assert_eq!(next.as_deref(), Some("menu_services"));
}

#[test]
fn prevented_opening_leaves_menu_closed() {
    let mut c = controller();
    c.on_event(|event| {
        if event.kind == MenuEventKind::Opening {
            event.prevent_default();
        }
    });

    let outcome = c.handle_trigger_click("menu_products");

    // The click addressed a real trigger, so it is still handled, but the
    // vetoed transition mutates nothing.
    assert_eq!(outcome, ClickOutcome::Handled);
    assert_eq!(c.state(), MenuState::Closed);
    assert_eq!(visible_count(&c), 0);
}

#[test]
fn prevented_closing_keeps_panel_open() {
    let mut c = controller();
    c.handle_trigger_click("menu_products");

    c.on_event(|event| {
        if event.kind == MenuEventKind::Closing {
            event.prevent_default();
        }
    });

    c.handle_trigger_click("menu_products");
    assert_eq!(c.state(), MenuState::Open("menu_products".into()));

    c.handle_outside_click();
    assert_eq!(c.state(), MenuState::Open("menu_products".into()));
}

#[test]
fn prevented_changing_keeps_previous_panel() {
    let mut c = controller();
    c.handle_trigger_click("menu_products");

    c.on_event(|event| {
        if event.kind == MenuEventKind::Changing {
            event.prevent_default();
        }
    });

    c.handle_trigger_click("menu_services");
    assert_eq!(c.state(), MenuState::Open("menu_products".into()));
    assert_eq!(visible_count(&c), 1);
}

#[test]
fn outside_click_closes_open_menu() {
    let mut c = controller();
    c.handle_trigger_click("menu_products");

    assert!(c.handle_outside_click());
    assert_eq!(c.state(), MenuState::Closed);
}

#[test]
fn outside_click_while_closed_fires_no_event() {
    let mut c = controller();
    let log = recording(&mut c);

    assert!(!c.handle_outside_click());
    assert!(log.borrow().is_empty());
    assert_eq!(c.state(), MenuState::Closed);
}

#[test]
fn plain_link_click_falls_through_without_transition() {
    let mut c = controller();
    let log = recording(&mut c);

    let outcome = c.handle_trigger_click("menu_contact");

    assert_eq!(outcome, ClickOutcome::PassThrough);
    assert_eq!(c.state(), MenuState::Closed);
    assert!(log.borrow().is_empty());
}

#[test]
fn plain_link_falls_through_while_another_panel_is_open() {
    let mut c = controller();
    c.handle_trigger_click("menu_products");

    let outcome = c.handle_trigger_click("menu_contact");

    assert_eq!(outcome, ClickOutcome::PassThrough);
    assert_eq!(c.state(), MenuState::Open("menu_products".into()));
}

#[test]
fn programmatic_open_and_close_match_click_semantics() {
    let mut c = controller();
    let log = recording(&mut c);

    assert!(c.open("menu_products"));
    assert_eq!(c.state(), MenuState::Open("menu_products".into()));

    assert!(c.open("menu_services"));
    assert_eq!(c.state(), MenuState::Open("menu_services".into()));

    assert!(c.close());
    assert_eq!(c.state(), MenuState::Closed);

    // Closing an already closed menu fires nothing.
    assert!(!c.close());

    let kinds: Vec<MenuEventKind> = log.borrow().iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        vec![
            MenuEventKind::Opening,
            MenuEventKind::Changing,
            MenuEventKind::Closing,
        ]
    );
}

#[test]
fn programmatic_open_of_unknown_panel_is_ignored() {
    let mut c = controller();
    let log = recording(&mut c);

    assert!(!c.open("menu_nowhere"));
    assert_eq!(c.state(), MenuState::Closed);
    assert!(log.borrow().is_empty());
}

#[test]
fn independent_menu_instances_do_not_share_state() {
    let mut first = controller();
    let mut second = controller();

    first.handle_trigger_click("menu_products");

    assert_eq!(first.state(), MenuState::Open("menu_products".into()));
    assert_eq!(second.state(), MenuState::Closed);

    second.handle_trigger_click("menu_services");
    first.handle_outside_click();

    assert_eq!(first.state(), MenuState::Closed);
    assert_eq!(second.state(), MenuState::Open("menu_services".into()));
}

#[test]
fn outside_rendered_panels_still_pair_with_triggers() {
    let mut menu = MegaMenu::new("footer", "Footer menu", "footer-navigation");
    menu.set_link_layout("menu.help", "single_column");
    menu.set_render_content_outside(true);

    let mut tree = LinkTree::default();
    tree.add(MenuLink::new("menu.help", "Help", "/help"));

    let layouts = LayoutRegistry::with_defaults();
    let build = build_menu(&menu, &tree, &layouts).unwrap();
    let mut c = MenuInteractionController::from_build(&build);

    assert_eq!(c.handle_trigger_click("menu_help"), ClickOutcome::Handled);
    assert_eq!(c.state(), MenuState::Open("menu_help".into()));
}
