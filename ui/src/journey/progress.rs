use dioxus::prelude::*;

use crate::core::format::css_width;
use crate::core::scroll::ScrollSeries;

/// Thin strip pinned to the top of the viewport.
#[component]
pub fn ProgressBar(series: Signal<ScrollSeries>) -> Element {
    let width = css_width(series.read().latest());

    rsx! {
        div { class: "reading-progress", role: "progressbar",
            div { class: "reading-progress__fill", style: "width: {width};" }
        }
    }
}
