use dioxus::prelude::*;

use crate::core::config::story;
use crate::core::rotation::Rotation;
use crate::core::timing::sleep_ms;
use crate::t;

/// Tickers with an ARIMA counterfactual figure under `p4/`.
pub const ARIMA_TICKERS: [&str; 5] = ["ABM", "BHP", "CCAP", "GUG", "AEYE"];

pub fn arima_figure(ticker: &str) -> String {
    format!("p4/{ticker}_arima.png")
}

/// Sliding strip of counterfactual figures. Advances on a timer, holds
/// still while hovered, and jumps on dot clicks.
#[component]
pub fn StockCarousel() -> Element {
    let mut rotation = use_signal(|| Rotation::new(ARIMA_TICKERS.len()));

    use_future(move || async move {
        let interval = story().carousel_interval_ms;
        loop {
            sleep_ms(interval).await;
            rotation.write().tick();
        }
    });

    let current = rotation.read().index();
    let ticker = ARIMA_TICKERS[current];
    let position = (current + 1).to_string();
    let total = ARIMA_TICKERS.len().to_string();
    let offset = rotation.read().track_offset();

    rsx! {
        div {
            class: "carousel",
            onmouseenter: move |_| rotation.write().pause(),
            onmouseleave: move |_| rotation.write().resume(),
            div { class: "carousel__viewport",
                div { class: "carousel__track", style: "transform: {offset};",
                    for ticker in ARIMA_TICKERS {
                        div { key: "{ticker}", class: "carousel__slide",
                            img {
                                src: story().asset(&arima_figure(ticker)),
                                alt: "ARIMA counterfactual vs. actual log(close) for {ticker}",
                            }
                        }
                    }
                }
            }
            div { class: "carousel__dots",
                for (index, ticker) in ARIMA_TICKERS.iter().enumerate() {
                    button {
                        key: "{ticker}",
                        r#type: "button",
                        class: if index == current { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                        aria_label: dot_label(ticker),
                        onclick: move |_| rotation.write().select(index),
                    }
                }
            }
            p { class: "carousel__caption",
                {t!("carousel-showing", ticker = ticker, position = position, total = total)}
            }
        }
    }
}

fn dot_label(ticker: &str) -> String {
    t!("carousel-goto", ticker = ticker.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_labelled_with_their_ticker() {
        let _guard = crate::i18n::language_guard();
        for ticker in ARIMA_TICKERS {
            assert_eq!(dot_label(ticker), format!("Show {ticker}"));
        }
    }

    #[test]
    fn figures_live_next_to_the_event_plots() {
        assert_eq!(arima_figure("ABM"), "p4/ABM_arima.png");
        assert_eq!(
            story().asset(&arima_figure("AEYE")),
            "./p4/AEYE_arima.png"
        );
    }

    #[test]
    fn five_distinct_tickers() {
        let mut tickers = ARIMA_TICKERS.to_vec();
        tickers.sort();
        tickers.dedup();
        assert_eq!(tickers.len(), 5);
    }
}
