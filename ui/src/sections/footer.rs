use dioxus::prelude::*;

use crate::core::scroll::ScrollSeries;
use crate::journey::FooterJourney;

#[component]
pub fn StoryFooter(series: Signal<ScrollSeries>) -> Element {
    rsx! {
        footer { class: "story-footer",
            div { class: "story-footer__inner",
                div { class: "story-footer__congrats",
                    h2 { "Congratulations!" }
                    p {
                        "Thank you for exploring "
                        strong { "34 years of market data" }
                        ", diving into political sensitivity, and uncovering the hidden patterns between elections and stock movements. Really a Bumpy Road!"
                    }
                }
                FooterJourney { series }
                div { class: "story-footer__credits",
                    p { "© Penta Data: a 2025 EPFL ADA Project Team" }
                    p { "Data Sources: Kaggle, FiveThirtyEight" }
                }
            }
        }
    }
}
