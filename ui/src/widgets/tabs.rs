//! Local-state selectors that swap which pre-rendered plot an iframe shows.

use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::story;

pub const FIRST_ELECTION_YEAR: u16 = 1980;
pub const LAST_ELECTION_YEAR: u16 = 2016;

/// Presidential election years with polling coverage, oldest first.
pub fn election_years() -> Vec<u16> {
    (FIRST_ELECTION_YEAR..=LAST_ELECTION_YEAR).step_by(4).collect()
}

/// Plot document for `year`, e.g. `p1/national_vs_market_2016.html`.
pub fn year_plot_src(prefix: &str, year: u16) -> String {
    format!("{prefix}{year}.html")
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotTab {
    pub key: &'static str,
    pub label: &'static str,
    pub src: &'static str,
    pub title: &'static str,
}

/// Card with a segmented control over `tabs`. With `heading` unset the card
/// is titled after the active tab.
#[component]
pub fn TabbedPlot(
    tabs: Vec<PlotTab>,
    heading: Option<String>,
    blurb: Option<String>,
    height: Option<String>,
) -> Element {
    let mut active = use_signal(|| 0usize);
    let Some(current) = tabs.get(active()).or_else(|| tabs.first()).cloned() else {
        return rsx! {};
    };
    let heading = heading.unwrap_or_else(|| current.title.to_string());
    let src = story().asset(current.src);
    let frame_style = height.map(|h| format!("height: {h};")).unwrap_or_default();

    rsx! {
        div { class: "plot-card",
            div { class: "plot-card__header",
                div {
                    h3 { class: "plot-card__title", "{heading}" }
                    if let Some(blurb) = blurb {
                        p { class: "plot-card__blurb", "{blurb}" }
                    }
                }
                div { class: "segmented", role: "tablist",
                    for (index, tab) in tabs.iter().enumerate() {
                        button {
                            key: "{tab.key}",
                            r#type: "button",
                            role: "tab",
                            class: if index == active() { "segmented__option segmented__option--active" } else { "segmented__option" },
                            onclick: move |_| active.set(index),
                            "{tab.label}"
                        }
                    }
                }
            }
            div { class: "plot-card__frame", style: "{frame_style}",
                iframe { key: "{current.key}", src: "{src}", title: "{current.title}" }
            }
        }
    }
}

fn party_class(index: usize, active: bool) -> String {
    let party = match index {
        0 => "party-tab--dem",
        1 => "party-tab--rep",
        _ => "party-tab--other",
    };
    if active {
        format!("party-tab {party} party-tab--active")
    } else {
        format!("party-tab {party}")
    }
}

/// Large party-coloured buttons above a single plot frame.
#[component]
pub fn PartyTabs(tabs: Vec<PlotTab>) -> Element {
    let mut active = use_signal(|| 0usize);
    let Some(current) = tabs.get(active()).or_else(|| tabs.first()).cloned() else {
        return rsx! {};
    };
    let src = story().asset(current.src);

    rsx! {
        div { class: "party-tabs",
            div { class: "party-tabs__buttons",
                for (index, tab) in tabs.iter().enumerate() {
                    button {
                        key: "{tab.key}",
                        r#type: "button",
                        class: party_class(index, index == active()),
                        onclick: move |_| active.set(index),
                        "{tab.label}"
                    }
                }
            }
            div { class: "plot-frame plot-frame--tall",
                iframe { key: "{current.key}", src: "{src}", title: "{current.title}" }
            }
        }
    }
}

/// Election-year picker driving a `{src_prefix}{year}.html` plot. Extra
/// content (`children`) renders below the frame.
#[component]
pub fn YearPlot(
    src_prefix: String,
    title_prefix: String,
    heading: String,
    blurb: String,
    subheading: Option<String>,
    sub_blurb: Option<String>,
    children: Element,
) -> Element {
    let mut year = use_signal(|| LAST_ELECTION_YEAR);
    let src = story().asset(&year_plot_src(&src_prefix, year()));

    rsx! {
        div { class: "plot-card",
            div { class: "plot-card__intro",
                h3 { class: "plot-card__title", "{heading}" }
                p { class: "plot-card__blurb", "{blurb}" }
            }
            if let Some(subheading) = subheading {
                h4 { class: "plot-card__subtitle", "{subheading}" }
            }
            if let Some(sub_blurb) = sub_blurb {
                p { class: "plot-card__blurb", "{sub_blurb}" }
            }
            div { class: "year-picker",
                for candidate in election_years() {
                    button {
                        key: "{candidate}",
                        r#type: "button",
                        class: if candidate == year() { "year-picker__year year-picker__year--active" } else { "year-picker__year" },
                        onclick: move |_| {
                            debug!(year = candidate, "Election year selected");
                            year.set(candidate);
                        },
                        "{candidate}"
                    }
                }
            }
            div { class: "plot-card__frame",
                iframe { key: "{year}", src: "{src}", title: "{title_prefix} {year}" }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn election_years_step_by_four() {
        let years = election_years();
        assert_eq!(years.len(), 10);
        assert_eq!(years.first(), Some(&1980));
        assert_eq!(years.last(), Some(&2016));
        assert!(years.windows(2).all(|pair| pair[1] - pair[0] == 4));
    }

    #[test]
    fn year_sources_follow_prefix() {
        assert_eq!(
            year_plot_src("p1/us_map_polling_volatility_", 1992),
            "p1/us_map_polling_volatility_1992.html"
        );
        assert_eq!(
            year_plot_src("p1/national_vs_market_", 2016),
            "p1/national_vs_market_2016.html"
        );
    }

    #[test]
    fn party_classes_by_position() {
        assert_eq!(party_class(0, true), "party-tab party-tab--dem party-tab--active");
        assert_eq!(party_class(1, false), "party-tab party-tab--rep");
        assert_eq!(party_class(4, false), "party-tab party-tab--other");
    }
}
