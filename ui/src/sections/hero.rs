use dioxus::prelude::*;

use crate::core::platform::scroll_to_anchor;
use crate::t;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__glow hero__glow--blue" }
            div { class: "hero__glow hero__glow--red" }
            div { class: "hero__inner",
                div { class: "hero__eyebrow",
                    span { class: "hero__eyebrow-rule" }
                    span { "EPFL ADA Project" }
                }
                h1 { class: "hero__title",
                    "The" br {}
                    "Market's" br {}
                    span { class: "hero__title-accent", "Vote." }
                }
                div { class: "hero__lede",
                    p {
                        "Every four years, America decides. But while voters shout, the stock market whispers. "
                        span { class: "hero__lede-strong",
                            "We analyzed 34 years of NASDAQ data to decode that whisper."
                        }
                    }
                    button {
                        r#type: "button",
                        class: "hero__start",
                        onclick: move |_| scroll_to_anchor("prologue"),
                        span { class: "hero__start-icon", "↓" }
                        span { class: "hero__start-label", {t!("start-reading")} }
                    }
                }
            }
        }
    }
}
