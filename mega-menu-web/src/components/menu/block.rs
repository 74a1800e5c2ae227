use dioxus::prelude::*;
use mega_menu::prelude::*;
use serde_json::Value;

/// Render one placed block by its plugin id.
///
/// Unknown plugins render a placeholder instead of failing the whole panel.
#[component]
pub fn MenuBlock(block: BlockConfig) -> Element {
    let body = match block.plugin.as_str() {
        "text" => {
            let text = block
                .settings
                .get("body")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            rsx! {
                p { class: "mega-menu-block-body", "{text}" }
            }
        }
        "links" => {
            let links: Vec<(String, String)> = block
                .settings
                .get("links")
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(|entry| {
                            let title = entry.get("title")?.as_str()?;
                            let url = entry.get("url")?.as_str()?;
                            Some((title.to_string(), url.to_string()))
                        })
                        .collect()
                })
                .unwrap_or_default();
            rsx! {
                ul { class: "mega-menu-block-links",
                    for (title, url) in links {
                        li { key: "{url}",
                            a { href: "{url}", "{title}" }
                        }
                    }
                }
            }
        }
        other => rsx! {
            p { class: "mega-menu-block-missing", "Unknown block plugin '{other}'" }
        },
    };

    rsx! {
        div { class: "mega-menu-block block-{block.plugin}",
            if block.label_display {
                h4 { class: "mega-menu-block-label", "{block.label}" }
            }
            {body}
        }
    }
}
