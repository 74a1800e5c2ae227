//! Mega menu demo - build a menu and replay a click script against it

use mega_menu::prelude::*;
use serde_json::json;

fn main() {
    env_logger::init();

    println!("=== Mega menu demo ===\n");

    // Configure a mega menu over a three-link navigation menu.
    let mut menu = MegaMenu::new("main", "Main menu", "main-navigation");

    menu.set_link_layout("menu.products", "two_column");
    menu.add_block(
        "menu.products",
        BlockConfig::new("promo", "text", "Promo")
            .in_region("left")
            .with_settings(json!({"body": "New arrivals every week."})),
    )
    .expect("Failed to add promo block");
    menu.add_block(
        "menu.products",
        BlockConfig::new("categories", "links", "Categories")
            .in_region("right")
            .with_settings(json!({"links": [
                {"title": "Chairs", "url": "/products/chairs"},
                {"title": "Tables", "url": "/products/tables"},
            ]})),
    )
    .expect("Failed to add categories block");

    menu.set_link_layout("menu.services", "single_column");
    menu.add_block(
        "menu.services",
        BlockConfig::new("overview", "text", "Overview")
            .in_region("content")
            .with_settings(json!({"body": "Delivery, assembly and repairs."})),
    )
    .expect("Failed to add overview block");

    let mut tree = LinkTree::default();
    tree.add(MenuLink::new("menu.products", "Products", "/products"));
    tree.add(MenuLink::new("menu.services", "Services", "/services").with_weight(5));
    tree.add(MenuLink::new("menu.contact", "Contact", "/contact").with_weight(10));

    let layouts = LayoutRegistry::with_defaults();
    let build = build_menu(&menu, &tree, &layouts).expect("Failed to build menu");

    println!("Menu '{}' renders {} items:", build.menu_id, build.items.len());
    for item in &build.items {
        match &item.content_target {
            Some(target) => println!("  {} -> panel '{}'", item.link.title, target),
            None => println!("  {} (plain link to {})", item.link.title, item.link.url),
        }
    }

    // Drive the interaction controller through a click script.
    let mut controller = MenuInteractionController::from_build(&build);
    controller.on_event(|event| {
        println!(
            "  event: {:?} panel={:?} previous={:?}",
            event.kind, event.panel, event.previous
        );
    });

    let script = [
        "menu_products", // open
        "menu_services", // change
        "menu_services", // toggle closed
        "menu_contact",  // plain link, falls through
    ];

    println!("\nReplaying clicks:");
    for trigger in script {
        println!("click '{trigger}'");
        let outcome = controller.handle_trigger_click(trigger);
        println!("  outcome: {:?}, state: {:?}", outcome, controller.state());
    }

    controller.open("menu_products");
    println!("\nafter open(): {:?}", controller.state());
    controller.handle_outside_click();
    println!("after outside click: {:?}", controller.state());
}
