use dioxus::prelude::*;

use crate::t;

/// "Start time machine" toggle that mounts `children` only while open.
#[component]
pub fn TimeMachine(children: Element) -> Element {
    let mut open = use_signal(|| false);
    let label = if open() {
        t!("reveal-stop")
    } else {
        t!("reveal-start")
    };

    rsx! {
        div { class: "time-machine",
            button {
                r#type: "button",
                class: "time-machine__toggle",
                aria_expanded: "{open}",
                onclick: move |_| open.toggle(),
                "{label}"
            }
            if open() {
                div { class: "time-machine__panel", {children} }
            }
        }
    }
}
