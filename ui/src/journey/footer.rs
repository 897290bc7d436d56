use dioxus::prelude::*;

use crate::core::config::story;
use crate::core::format::format_percent;
use crate::core::scroll::ScrollSeries;
use crate::core::trend::{downsample, FOOTER_FRAME};
use crate::journey::chart::{FlowChart, FOOTER_GRID};
use crate::journey::export::SaveJourneyButton;
use crate::t;

const FOOTER_STROKE: &str = "#3b82f6";

/// Compact replay of the whole reading session, with the snapshot button.
#[component]
pub fn FooterJourney(series: Signal<ScrollSeries>) -> Element {
    let (values, current) = {
        let series = series.read();
        (
            downsample(series.as_slice(), story().chart_points),
            format_percent(series.latest()),
        )
    };

    rsx! {
        div { class: "footer-journey",
            h4 { class: "footer-journey__title", {t!("footer-bonus-title")} }
            div { class: "footer-journey__chart",
                FlowChart {
                    values,
                    frame: FOOTER_FRAME,
                    stroke: FOOTER_STROKE.to_string(),
                    id_prefix: "footer-journey",
                    grid: FOOTER_GRID,
                    area_opacity: 0.3,
                }
            }
            div { class: "footer-journey__labels",
                span { "0%" }
                span { class: "footer-journey__current", "{current}" }
                span { "100%" }
            }
            SaveJourneyButton { series }
        }
    }
}
