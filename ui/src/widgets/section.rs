//! Presentational building blocks for the narrative chapters.

use dioxus::prelude::*;

use crate::core::config::story;

/// One chapter of the story: badge, title, optional subtitle, prose body.
#[component]
pub fn Section(
    id: String,
    title: String,
    chapter: String,
    subtitle: Option<String>,
    #[props(default)] dark: bool,
    #[props(default)] compact: bool,
    children: Element,
) -> Element {
    let theme = if dark { "section--dark" } else { "section--light" };
    let size = if compact { "section--compact" } else { "" };

    rsx! {
        section { id: "{id}", class: "section {theme} {size}",
            div { class: "section__glow section__glow--blue" }
            div { class: "section__glow section__glow--red" }
            div { class: "section__inner",
                header { class: "section__header",
                    div { class: "section__badge-row",
                        span { class: "section__badge", "{chapter}" }
                        div { class: "section__rule" }
                    }
                    h2 { class: "section__title", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "section__subtitle", "{subtitle}" }
                    }
                }
                div { class: "section__prose", {children} }
            }
        }
    }
}

/// Large decorative initial followed by the rest of the paragraph.
#[component]
pub fn DropCap(letter: String, children: Element) -> Element {
    rsx! {
        p { class: "drop-cap",
            span { class: "drop-cap__letter", "{letter}" }
            {children}
        }
    }
}

/// Static image from the artifact folders. `src` is relative to the asset root.
#[component]
pub fn Figure(src: String, alt: String, #[props(default)] narrow: bool) -> Element {
    let src = story().asset(&src);
    let class = if narrow { "figure figure--narrow" } else { "figure" };

    rsx! {
        div { class: "{class}",
            img { src: "{src}", alt: "{alt}", "loading": "lazy" }
        }
    }
}

/// Pre-rendered interactive plot document. Without an explicit CSS `height`
/// the frame keeps a 16:9 box.
#[component]
pub fn PlotFrame(
    src: String,
    title: String,
    height: Option<String>,
    #[props(default)] narrow: bool,
) -> Element {
    let src = story().asset(&src);
    let class = if narrow { "plot-frame plot-frame--narrow" } else { "plot-frame" };
    let style = height.map(|h| format!("height: {h};")).unwrap_or_default();

    rsx! {
        div { class: "{class}", style: "{style}",
            iframe { src: "{src}", title: "{title}", "loading": "lazy" }
        }
    }
}

#[component]
pub fn AnalogyBox(title: String, children: Element) -> Element {
    rsx! {
        aside { class: "analogy",
            span { class: "analogy__quote", aria_hidden: "true", "“" }
            div { class: "analogy__card",
                div { class: "analogy__header",
                    span { class: "analogy__icon", "📖" }
                    span { class: "analogy__title", "{title}" }
                }
                div { class: "analogy__body", {children} }
            }
        }
    }
}

#[component]
pub fn MethodologyNote(title: String, children: Element) -> Element {
    rsx! {
        aside { class: "methodology",
            div { class: "methodology__label", "🎯 Methodology Note" }
            div { class: "methodology__body",
                strong { "{title}:" }
                " "
                {children}
            }
        }
    }
}

#[component]
pub fn PullQuote(text: String) -> Element {
    rsx! {
        blockquote { class: "pull-quote", "“{text}”" }
    }
}
