use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::i18n;
use ui::views::Story;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!("Launching The Market's Vote");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    // Shared language code, seeded with what the loader negotiated; the navbar
    // writes it, every localized view reads it.
    use_context_provider(|| Signal::new(i18n::current_language()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Story {}
    }
}
