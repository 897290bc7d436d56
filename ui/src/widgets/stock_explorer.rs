use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::{story, StoryConfig};
use crate::core::ticker::{asset_file_name, asset_path, normalize_ticker, LookupState, TickerLookup};
use crate::t;

/// PCA cluster view plus a residual-plot lookup by ticker symbol.
#[component]
pub fn StockExplorer() -> Element {
    let config = story();
    let mut lookup = use_signal(|| TickerLookup::starting_with(&config.default_ticker));
    // Bumped on every search so re-requesting the same ticker reloads the image.
    let mut generation = use_signal(|| 0u32);

    let mut search = move || {
        if let Some(ticker) = lookup.write().search() {
            debug!(%ticker, "Ticker lookup");
            generation += 1;
        }
    };

    let state = lookup.read().state().clone();
    let hint_file = state
        .ticker()
        .map(asset_file_name)
        .or_else(|| normalize_ticker(lookup.read().input()).map(|t| asset_file_name(&t)))
        .unwrap_or_else(|| "....png".to_string());
    let input_value = lookup.read().input().to_string();
    let pca_src = config.asset("p4/pca_3d.html");

    rsx! {
        div { class: "stock-explorer",
            div { class: "stock-explorer__pca",
                iframe { src: "{pca_src}", title: "PCA 3D clustering visualization" }
            }
            div { class: "stock-explorer__lookup",
                div { class: "stock-explorer__controls",
                    h4 { class: "stock-explorer__heading", {t!("ticker-heading")} }
                    input {
                        class: "stock-explorer__input",
                        value: "{input_value}",
                        placeholder: t!("ticker-placeholder"),
                        oninput: move |evt: FormEvent| lookup.write().set_input(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                search();
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "stock-explorer__search",
                        onclick: move |_| search(),
                        {t!("ticker-search")}
                    }
                }
                p { class: "stock-explorer__hint", {t!("ticker-hint", file = hint_file)} }

                if let Some(ticker) = state.ticker().map(str::to_string) {
                    ResidualPlot { lookup, ticker, generation: generation() }
                }
            }
        }
    }
}

#[component]
fn ResidualPlot(lookup: Signal<TickerLookup>, ticker: String, generation: u32) -> Element {
    let mut lookup = lookup;
    let state = lookup.read().state().clone();
    let src = asset_path(story(), &ticker);
    let missing = not_found_detail(story(), &ticker);

    let loaded_ticker = ticker.clone();
    let failed_ticker = ticker.clone();

    rsx! {
        div { class: "residual-plot",
            {match &state {
                LookupState::Loading(_) => rsx! {
                    div { class: "residual-plot__overlay",
                        p { class: "residual-plot__loading", {t!("ticker-loading")} }
                    }
                },
                LookupState::NotFound(_) => rsx! {
                    div { class: "residual-plot__overlay",
                        div { class: "residual-plot__missing",
                            p { class: "residual-plot__missing-title", {t!("ticker-not-found")} }
                            p { class: "residual-plot__missing-detail",
                                "{missing}"
                            }
                            p { class: "residual-plot__missing-retry", {t!("ticker-retry")} }
                        }
                    }
                },
                _ => rsx! {},
            }}
            if !matches!(state, LookupState::NotFound(_)) {
                img {
                    key: "{ticker}-{generation}",
                    class: "residual-plot__image",
                    src: "{src}",
                    alt: t!("ticker-alt", ticker = ticker.clone()),
                    onload: move |_| {
                        lookup.write().asset_loaded(&loaded_ticker);
                    },
                    onerror: move |_| {
                        if lookup.write().asset_failed(&failed_ticker) {
                            debug!(ticker = %failed_ticker, "Residual plot missing");
                        }
                    },
                }
            }
            if matches!(state, LookupState::Loaded(_)) {
                div { class: "residual-plot__caption",
                    {t!("ticker-showing", ticker = ticker.clone())}
                }
            }
        }
    }
}

/// Names the exact file and folder the lookup expected.
fn not_found_detail(config: &StoryConfig, ticker: &str) -> String {
    let dir = format!("{}/", config.ticker_dir.trim_matches('/'));
    t!("ticker-not-found-detail", file = asset_file_name(ticker), dir = dir)
}
