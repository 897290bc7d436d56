use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::platform::scroll_to_anchor;
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// In-page chapter anchor paired with its localized label.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: fn() -> String,
}

/// External link shown under "Resources".
#[derive(Debug, Clone, Copy)]
pub struct ResourceLink {
    pub href: &'static str,
    pub title: fn() -> String,
    pub detail: fn() -> String,
}

pub fn nav_items() -> [NavItem; 6] {
    [
        NavItem { anchor: "hero", label: || t!("nav-intro") },
        NavItem { anchor: "macro", label: || t!("nav-macro") },
        NavItem { anchor: "sensitivity", label: || t!("nav-sensitivity") },
        NavItem { anchor: "leaning", label: || t!("nav-leaning") },
        NavItem { anchor: "events", label: || t!("nav-events") },
        NavItem { anchor: "conclusion", label: || t!("nav-conclusion") },
    ]
}

pub fn resource_links() -> [ResourceLink; 4] {
    [
        ResourceLink {
            href: "https://github.com/SjJ1017/ada_penta_data_story",
            title: || t!("resource-website"),
            detail: || t!("resource-website-detail"),
        },
        ResourceLink {
            href: "https://github.com/epfl-ada/ada-2025-project-penta_data",
            title: || t!("resource-project"),
            detail: || t!("resource-project-detail"),
        },
        ResourceLink {
            href: "https://www.kaggle.com/datasets/jacksoncrow/stock-market-dataset",
            title: || t!("resource-dataset"),
            detail: || t!("resource-dataset-detail"),
        },
        ResourceLink {
            href: "https://github.com/fivethirtyeight/data/tree/master/polls",
            title: || t!("resource-polls"),
            detail: || t!("resource-polls-detail"),
        },
    ]
}

/// Fixed top bar: brand, chapter jump buttons, the resources menu and the
/// locale picker. Re-renders when the platform's language signal changes.
#[component]
pub fn StoryNavbar() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| i18n::FALLBACK.to_string());
    let mut resources_open = use_signal(|| false);

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                debug!(lang = %tag, "Language switched");
                if let Some(mut code) = lang_code {
                    code.set(tag);
                }
            }
            Err(err) => warn!(lang = %tag, "Language switch failed: {err}"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { style: "display:none", "{current_lang}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", {t!("brand-title")} }
                }

                nav { class: "navbar__links",
                    for item in nav_items() {
                        button {
                            key: "{item.anchor}",
                            r#type: "button",
                            class: "navbar__link",
                            onclick: move |_| scroll_to_anchor(item.anchor),
                            {(item.label)()}
                        }
                    }

                    div {
                        class: if resources_open() { "navbar__menu navbar__menu--open" } else { "navbar__menu" },
                        onmouseenter: move |_| resources_open.set(true),
                        onmouseleave: move |_| resources_open.set(false),
                        button {
                            r#type: "button",
                            class: "navbar__link",
                            aria_expanded: "{resources_open}",
                            onclick: move |_| resources_open.toggle(),
                            {t!("nav-resources")}
                        }
                        div { class: "navbar__dropdown",
                            for link in resource_links() {
                                a {
                                    key: "{link.href}",
                                    class: "navbar__dropdown-item",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    div { class: "navbar__dropdown-title", {(link.title)()} }
                                    div { class: "navbar__dropdown-detail", {(link.detail)()} }
                                }
                            }
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_jumps_to_the_hero() {
        let items = nav_items();
        assert_eq!(items[0].anchor, "hero");
        let anchors: Vec<_> = items.iter().map(|item| item.anchor).collect();
        assert_eq!(
            anchors,
            ["hero", "macro", "sensitivity", "leaning", "events", "conclusion"]
        );
    }

    #[test]
    fn nav_labels_are_localized() {
        let _guard = i18n::language_guard();
        assert_eq!((nav_items()[1].label)(), "Macro");
    }

    #[test]
    fn resources_open_external_sites() {
        assert!(resource_links()
            .iter()
            .all(|link| link.href.starts_with("https://")));
    }
}
