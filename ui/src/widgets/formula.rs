//! Interactive dual-phase regression formula.
//!
//! Each term of the equation can be hovered to show its definition. The
//! highlight also cycles on its own and stops while the pointer is over the
//! card. Switching phase starts again from the first term.

use dioxus::prelude::*;

use crate::core::config::story;
use crate::core::rotation::Rotation;
use crate::core::timing::sleep_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pre,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub key: &'static str,
    /// Symbol shown in the equation.
    pub symbol: &'static str,
    pub subscript: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const fn term(
    key: &'static str,
    symbol: &'static str,
    subscript: &'static str,
    label: &'static str,
    description: &'static str,
) -> Term {
    Term {
        key,
        symbol,
        subscript,
        label,
        description,
    }
}

const VOLATILITY: Term = term(
    "Volat",
    "β₄·Volat",
    "i,t",
    "Volatility",
    "Financial Control: 20-day rolling standard deviation of abnormal returns.",
);
const MOMENTUM: Term = term(
    "Momen",
    "β₅·Momen",
    "i,t",
    "Momentum",
    "Financial Control: 20-day rolling sum of past returns.",
);

const PRE_TERMS: [Term; 7] = [
    term(
        "AR",
        "CumAR",
        "i,t",
        "CumAR",
        "Cumulative Abnormal Return: Firm-specific performance above market expectations.",
    ),
    term(
        "alpha",
        "α",
        "i",
        "α",
        "Intercept: The baseline return for stock i during the pre-election window.",
    ),
    term(
        "P_Dem_Win",
        "β₁·P_Dem_Win",
        "t",
        "P_Dem_Win",
        "Polling-based Probability: The calculated likelihood of a Democratic win based on national polls.",
    ),
    term(
        "Incumbent",
        "β₂·Incumb",
        "t",
        "Incumbent",
        "Incumbency Factor: A dummy variable (1 if Democrats are currently in power).",
    ),
    term(
        "Days",
        "β₃·Days",
        "t",
        "Days_to_Elect",
        "Temporal Proximity: Absolute days until the election, capturing the \"heating up\" of market sentiment.",
    ),
    VOLATILITY,
    MOMENTUM,
];

const POST_TERMS: [Term; 7] = [
    term(
        "AR",
        "CumAR",
        "i,t",
        "CumAR",
        "Post-Election Cumulative Abnormal Return: Capturing the market's adjustment to the result.",
    ),
    term(
        "alpha",
        "α",
        "i",
        "α",
        "Intercept: The baseline return for stock i during the post-election window.",
    ),
    term(
        "Winner",
        "β₁·Winner",
        "t",
        "Winner_Party",
        "Outcome Variable: Binary indicator (1 if Democratic candidate won).",
    ),
    term(
        "Margin",
        "β₂·Margin",
        "t",
        "Margin",
        "Popular Vote Margin: Reflects the decisiveness of the win and mandate strength.",
    ),
    term(
        "Days",
        "β₃·Days",
        "t",
        "Days_from_Elect",
        "Time Elapsed: Days since the election, tracking the market's stabilization period.",
    ),
    VOLATILITY,
    MOMENTUM,
];

/// Terms on the first equation line; the rest wrap onto a second line.
const FIRST_LINE: usize = 5;

pub fn terms(phase: Phase) -> &'static [Term] {
    match phase {
        Phase::Pre => &PRE_TERMS,
        Phase::Post => &POST_TERMS,
    }
}

/// Alternating blue/red accent for the highlighted term.
pub fn accent(index: usize) -> &'static str {
    if index % 2 == 0 {
        "formula--blue"
    } else {
        "formula--red"
    }
}

#[component]
pub fn FormulaExplorer() -> Element {
    let mut phase = use_signal(|| Phase::Pre);
    let mut rotation = use_signal(|| Rotation::new(PRE_TERMS.len()));

    use_future(move || async move {
        let interval = story().formula_interval_ms;
        loop {
            sleep_ms(interval).await;
            rotation.write().tick();
        }
    });

    let mut switch_phase = move |next: Phase| {
        phase.set(next);
        rotation.write().reset();
    };

    let terms = terms(phase());
    let active = rotation.read().index().min(terms.len() - 1);
    let accent = accent(active);
    let selected = terms[active];

    let term_span = move |index: usize, term: &'static Term| {
        let class = if index == active {
            format!("formula__term formula__term--active {accent}")
        } else {
            "formula__term".to_string()
        };
        rsx! {
            span {
                key: "{term.key}",
                class: "{class}",
                onmouseenter: move |_| rotation.write().select(index),
                "{term.symbol}"
                sub { "{term.subscript}" }
            }
        }
    };

    rsx! {
        div {
            class: "formula",
            onmouseenter: move |_| rotation.write().pause(),
            onmouseleave: move |_| rotation.write().resume(),
            div { class: "formula__phases",
                button {
                    r#type: "button",
                    class: if phase() == Phase::Pre { "formula__phase formula__phase--pre formula__phase--active" } else { "formula__phase" },
                    onclick: move |_| switch_phase(Phase::Pre),
                    "Pre-Election Phase"
                }
                button {
                    r#type: "button",
                    class: if phase() == Phase::Post { "formula__phase formula__phase--post formula__phase--active" } else { "formula__phase" },
                    onclick: move |_| switch_phase(Phase::Post),
                    "Post-Election Phase"
                }
            }
            div { class: "formula__equation",
                div { class: "formula__line",
                    for (index, term) in terms.iter().enumerate().take(FIRST_LINE) {
                        if index == 1 {
                            span { class: "formula__op", "=" }
                        } else if index > 1 {
                            span { class: "formula__op", "+" }
                        }
                        {term_span(index, term)}
                    }
                }
                div { class: "formula__line formula__line--small",
                    for (index, term) in terms.iter().enumerate().skip(FIRST_LINE) {
                        span { class: "formula__op", "+" }
                        {term_span(index, term)}
                    }
                    span { class: "formula__op", "+" }
                    span { class: "formula__term formula__term--error",
                        "ε"
                        sub { "i,t" }
                    }
                }
            }
            div { class: "formula__legend",
                div { class: "formula__legend-label {accent}", "{selected.label}" }
                p { class: "formula__legend-text", "{selected.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_phases_share_the_frame_of_the_model() {
        for phase in [Phase::Pre, Phase::Post] {
            let terms = terms(phase);
            assert_eq!(terms.len(), 7);
            assert_eq!(terms[0].key, "AR");
            assert_eq!(terms[1].key, "alpha");
            assert_eq!(terms[4].key, "Days");
            assert_eq!(terms[5], VOLATILITY);
            assert_eq!(terms[6], MOMENTUM);
        }
    }

    #[test]
    fn phases_differ_in_the_political_terms() {
        let pre: Vec<_> = terms(Phase::Pre).iter().map(|t| t.key).collect();
        let post: Vec<_> = terms(Phase::Post).iter().map(|t| t.key).collect();
        assert!(pre.contains(&"P_Dem_Win") && pre.contains(&"Incumbent"));
        assert!(post.contains(&"Winner") && post.contains(&"Margin"));
        assert_eq!(terms(Phase::Pre)[4].label, "Days_to_Elect");
        assert_eq!(terms(Phase::Post)[4].label, "Days_from_Elect");
    }

    #[test]
    fn accent_alternates() {
        assert_eq!(accent(0), "formula--blue");
        assert_eq!(accent(1), "formula--red");
        assert_eq!(accent(6), "formula--blue");
    }
}
