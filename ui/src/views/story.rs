use dioxus::prelude::*;
use tracing::debug;

use crate::components::StoryNavbar;
use crate::core::platform::{KatexAutoRender, MathTypesetter, TypesetRetry, TypesetStep};
use crate::core::timing::sleep_ms;
use crate::journey::{use_scroll_series, ProgressBar, ReadingFlowPanel};
use crate::sections::{
    Conclusion, Events, Hero, Leaning, MacroAnalysis, Prologue, Sensitivity, StoryFooter,
};

const STORY_CSS: Asset = asset!("/assets/styling/story.css");
const JOURNEY_CSS: Asset = asset!("/assets/styling/journey.css");
const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js";
const KATEX_AUTO_RENDER_JS: &str =
    "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/contrib/auto-render.min.js";

const TYPESET_POLL_MS: u64 = 200;
const TYPESET_ATTEMPTS: u32 = 50;

/// The whole data story on one scrolling page.
#[component]
pub fn Story() -> Element {
    let series = use_scroll_series();
    // Auto-render is only injected once KaTeX itself has loaded.
    let mut katex_loaded = use_signal(|| false);

    use_future(move || async move {
        let mut retry = TypesetRetry::new(TYPESET_ATTEMPTS);
        loop {
            if !*katex_loaded.peek() && KatexAutoRender.engine_loaded() {
                katex_loaded.set(true);
            }
            match retry.step(&KatexAutoRender) {
                TypesetStep::Done => {
                    debug!("Formulas typeset");
                    break;
                }
                TypesetStep::GaveUp => {
                    debug!("Math typesetter never loaded; formulas stay as text");
                    break;
                }
                TypesetStep::Retry => sleep_ms(TYPESET_POLL_MS).await,
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: STORY_CSS }
        document::Link { rel: "stylesheet", href: JOURNEY_CSS }
        document::Link { rel: "stylesheet", href: KATEX_CSS }
        document::Script { src: KATEX_JS }
        if katex_loaded() {
            document::Script { src: KATEX_AUTO_RENDER_JS }
        }

        div { class: "story",
            ProgressBar { series }
            ReadingFlowPanel { series }
            StoryNavbar {}
            main {
                Hero {}
                Prologue {}
                MacroAnalysis {}
                Sensitivity {}
                Leaning {}
                Events {}
                Conclusion {}
            }
            StoryFooter { series }
        }
    }
}
