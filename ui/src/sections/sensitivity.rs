use dioxus::prelude::*;

use crate::widgets::{AnalogyBox, DropCap, FormulaExplorer, MethodologyNote, PlotTab, PullQuote, Section, TabbedPlot};

fn heatmap_tabs() -> Vec<PlotTab> {
    vec![
        PlotTab {
            key: "pre",
            label: "PRE",
            src: "p2/pre_factor_heatmap.html",
            title: "Industry-Political Factor Heatmap: Pre-Election",
        },
        PlotTab {
            key: "post",
            label: "POST",
            src: "p2/post_factor_heatmap.html",
            title: "Industry-Political Factor Heatmap: Post-Election",
        },
    ]
}

fn sensitivity_tabs() -> Vec<PlotTab> {
    vec![
        PlotTab {
            key: "pre",
            label: "PRE",
            src: "p2/pre_industry_sensitivity.html",
            title: "Pre-Election Sensitivity",
        },
        PlotTab {
            key: "post",
            label: "POST",
            src: "p2/post_industry_sensitivity.html",
            title: "Post-Election Impact",
        },
    ]
}

#[component]
pub fn Sensitivity() -> Element {
    rsx! {
        Section {
            id: "sensitivity",
            title: "The Sharpest Nerves",
            subtitle: "Political Sensitivity",
            chapter: "02",
            DropCap { letter: "A",
                "s shown in the previous sections, presidential elections do affect stock markets. Having established this aggregate effect, the market is not uniform; individual stocks and sectors react differently: "
                strong { "Who is affected, how strongly, and in which direction?" }
            }
            p {
                "Treating the market as one single, monolithic entity is a fundamental oversight. The market is a collection of distinct industries, each with its own DNA, regulatory landscape, and political stakes. Just as voters take sides based on policy promises, different industries react to the political winds with vastly different temperaments. This section therefore asks: how politically sensitive are individual stocks, and how does this sensitivity vary across sectors?"
            }
            MethodologyNote { title: "Regression",
                "We employ a dual-phase linear regression framework to capture the distinct market dynamics before and after the election. Cumulative abnormal returns are modelled as a function of political and financial variables, estimated using Ordinary Least Squares (OLS). Running regressions at the individual stock level uncovers how diverse firms respond to political shifts, while mean-centering and scaling predictors ensures fair comparisons across variable types."
            }
            p { class: "lead-note",
                strong { "Why a Dual-Phase Model?" }
                " Because the determinants of market behavior differ before and after the election. Pre-election, the market reacts to polling-based probabilities, reflecting uncertainty and expectations. Post-election, the market reacts to actual outcomes, as policy implications become concrete."
            }
            h3 { class: "prose-heading", "Model Specification" }
            FormulaExplorer {}
            AnalogyBox { title: "Constructing Political Sensitivity",
                p {
                    "To summarize political exposure into a single, interpretable measure, we construct a "
                    strong { "Political Sensitivity score" }
                    ":"
                }
                div { class: "math-block",
                    div { class: "math-block__main",
                        "$$\\text{{Sensitivity}}_i = \\sum_k (\\beta_{{k,i}} \\times w_{{k,i}})$$"
                    }
                    div { class: "math-block__where",
                        "$$\\text{{where }} w_{{k,i}} = \\frac{{|t_{{k,i}}|}}{{\\sum_k |t_{{k,i}}|}}$$"
                    }
                }
                p {
                    "We weight each coefficient by its "
                    strong { "statistical significance (t-values)" }
                    ". Factors with stronger empirical support receive greater weight."
                }
            }
            PullQuote { text: "When the polls shift, the money moves. We tracked exactly where it goes." }
            TabbedPlot {
                tabs: heatmap_tabs(),
                blurb: "Interactive cross-sectional analysis of standardized beta coefficients.",
                height: "650px",
            }
            p {
                "The heatmaps illustrate how different sectors respond to various political factors. Prior to elections, sectoral reactions are "
                strong { "relatively mild and consistent" }
                ", indicating that market participants only gradually anticipate political outcomes. After elections, the implementation of actual policies creates more "
                strong { "heterogeneous impacts" }
                ", resulting in the diverse pattern seen in the post-election data."
            }
            h4 { class: "prose-heading", "Industry Policy Anticipation" }
            div { class: "aside-rule",
                p {
                    "For instance, the negative "
                    strong { "Winner_Party coefficient for Healthcare" }
                    " in the post-election period shows that healthcare stock returns tend to decline when the winning party is Democratic."
                }
                p {
                    "This likely reflects market anticipation of Democratic policies that could impose additional costs or restrictions, such as "
                    strong { "stricter pharmaceutical regulations or drug pricing reforms" }
                    ". Investors price in these regulatory burdens immediately after the election."
                }
            }
            TabbedPlot {
                tabs: sensitivity_tabs(),
                blurb: "Aggregated Industry Sensitivity Scores (Standardized)",
                height: "550px",
            }
            div { class: "legend-card",
                h4 { class: "legend-card__title", "Understanding Political Sensitivity" }
                p { class: "legend-card__lede",
                    "Political sensitivity measures how much a sector's stock returns respond to political variables in our regression framework."
                }
                ul { class: "legend-card__items",
                    li {
                        span { class: "legend-card__key legend-card__key--positive", "Positive (+)" }
                        span { "Moves with the factor (e.g., gains on Democratic win probability)." }
                    }
                    li {
                        span { class: "legend-card__key legend-card__key--negative", "Negative (-)" }
                        span { "Moves opposite to the factor (e.g., losses on Democratic win probability)." }
                    }
                    li {
                        span { class: "legend-card__key", "Magnitude" }
                        span { "Larger absolute values indicate stronger reactions to political shifts." }
                    }
                }
            }
            h4 { class: "prose-heading", "Overall Patterns" }
            p {
                "From the aggregated results, pre-election sensitivity is generally smaller, reflecting cautious positioning while uncertainty remains. Most sectors show sensitivities near zero, with a mix of slightly positive and slightly negative values. Post-election sensitivity tends to be larger, as confirmed outcomes trigger more pronounced adjustments."
            }
            h4 { class: "prose-heading", "Industry Reactions" }
            p { "Interestingly, we can observe two distinctive groups of industries with characteristic behaviors:" }
            div { class: "aside-rule aside-rule--blue",
                h5 { "Defensive Industries (Utilities, Consumer Defensive)" }
                p {
                    strong { "Pre-election:" }
                    " These sectors exhibit higher political sensitivity, reflecting investors' risk-averse behavior. Facing political uncertainty, market participants favor stable, dividend-paying industries as a \"safe haven\", so their returns react more strongly even before the outcome is known."
                }
                p {
                    strong { "Post-election:" }
                    " Sensitivity generally declines as uncertainty resolves. Being less exposed to policy-driven growth opportunities, defensive industries react more mutedly to the actual result."
                }
            }
            div { class: "aside-rule aside-rule--amber",
                h5 { "Growth Industries (Consumer Cyclical, Technology)" }
                p {
                    strong { "Pre-election:" }
                    " These sectors show relatively modest sensitivity to political probabilities. Investors focus on long-term growth potential rather than short-term election odds."
                }
                p {
                    strong { "Post-election:" }
                    " Sensitivity increases slightly, especially in sectors tied to economic cycles or policy-driven demand, as expected fiscal or regulatory changes come into view."
                }
            }
        }
    }
}
