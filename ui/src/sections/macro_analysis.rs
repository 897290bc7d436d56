use dioxus::prelude::*;

use crate::widgets::{AnalogyBox, PlotFrame, PlotTab, Section, TabbedPlot, YearPlot};

fn swing_state_tabs() -> Vec<PlotTab> {
    vec![
        PlotTab {
            key: "ts",
            label: "TIME SERIES",
            src: "p1/swing_state_polling_vs_nasdaq_time_series.html",
            title: "Swing States: Time Series",
        },
        PlotTab {
            key: "corr",
            label: "CORRELATION",
            src: "p1/swing_state_polling_vs_nasdaq_correlation_bars.html",
            title: "Swing States: Correlation",
        },
    ]
}

fn solid_state_tabs() -> Vec<PlotTab> {
    vec![
        PlotTab {
            key: "ts",
            label: "TIME SERIES",
            src: "p1/solid_state_polling_vs_nasdaq_time_series.html",
            title: "Solid States: Time Series",
        },
        PlotTab {
            key: "corr",
            label: "CORRELATION",
            src: "p1/solid_state_polling_vs_nasdaq_correlation_bars.html",
            title: "Solid States: Correlation",
        },
    ]
}

#[component]
pub fn MacroAnalysis() -> Element {
    rsx! {
        Section {
            id: "macro",
            title: "The Bumpy Road",
            subtitle: "Macro Analysis",
            chapter: "01",
            dark: true,
            p {
                "Elections are often described as moments of uncertainty. New leaders, new policies, and shifting expectations all arrive at once. But how does this uncertainty actually show up in financial markets?"
            }
            p {
                "To explore this question, we start from a simple but important distinction: "
                strong { "returns" }
                " versus "
                strong { "volatility" }
                ". These two concepts sound technical, but the intuition behind them is surprisingly straightforward."
            }
            AnalogyBox { title: "The Road Trip Analogy",
                p { "Think of investing in the stock market as taking a long road trip." }
                ul {
                    li {
                        strong { "Returns are the distance traveled." }
                        " Did you move closer to your destination, or did you end up going backward?"
                    }
                    li {
                        strong { "Volatility is the condition of the road." }
                        " Was the ride smooth and predictable, or full of bumps, detours, and sudden turns?"
                    }
                }
                p { class: "analogy__punchline",
                    "The key question of this chapter is not whether the market keeps moving forward during elections, but whether the ride becomes more uncomfortable."
                }
            }
            p {
                "Looking at decades of NASDAQ data, the answer turns out to be surprisingly nuanced. On average, election years do not dramatically change how far the market travels. Returns remain broadly similar to non-election years."
            }
            p {
                "What does change, however, is how the journey feels. As elections approach, the market becomes noticeably more volatile. Price movements grow larger, reactions become sharper, and investors appear more sensitive to incoming news."
            }
            PlotFrame {
                src: "p1/nasdaq_election_vs_nonelection.html",
                title: "Election vs Non-Election NASDAQ",
                narrow: true,
            }
            p {
                "Returns tell a more subtle story. Across most cycles, election years are not associated with dramatically higher gains. In fact, returns during election years often appear slightly lower, though this pattern is far from uniform."
            }
            p {
                "Volatility, however, behaves differently. Election years tend to coincide with sharper price movements and larger fluctuations, suggesting heightened market sensitivity as political uncertainty intensifies."
            }
            div { class: "plot-pair",
                PlotFrame { src: "p1/annual_nasdaq_AnnualVol.html", title: "Annual NASDAQ Volatility" }
                PlotFrame { src: "p1/annual_nasdaq_AnnualReturn.html", title: "Annual NASDAQ Return" }
            }
            p { class: "plot-caption",
                "Annual NASDAQ volatility and returns, with election years highlighted."
            }
            p {
                "Zooming in further, monthly patterns reveal how emotions fluctuate within election years. January often stands out with relatively strong performance, possibly reflecting early optimism around new leadership and policy expectations. In contrast, February frequently shows pullbacks, as initial enthusiasm gives way to reassessment and caution."
            }
            div { class: "plot-pair",
                PlotFrame { src: "p1/monthly_return.html", title: "Monthly Returns" }
                PlotFrame { src: "p1/monthly_volatility.html", title: "Monthly Volatility" }
            }
            p {
                "After examining the stock market at an aggregate level, attention shifts to the political dimension of the story. Rather than treating an election as a single event, "
                strong { "polling data" }
                " are used to track how electoral uncertainty evolves over time, week by week and state by state."
            }
            p {
                "The intuition is straightforward: larger fluctuations in polls reflect higher levels of electoral uncertainty faced by voters, and potentially by investors as well. The focus here is not on whether elections matter, but on whether "
                em { "where" }
                " that uncertainty arises plays a meaningful role."
            }
            TabbedPlot {
                tabs: swing_state_tabs(),
                heading: "Swing States: Politically Crucial, Market-Neutral?",
                blurb: "Swing states are defined by close elections and high political uncertainty. Intuitively, one might expect these states to exert the strongest influence on financial markets.",
            }
            p {
                "Although swing states are electorally pivotal, their relationship with stock market volatility appears weak and highly unstable. The correlation estimates fluctuate around zero and vary substantially across states, offering little evidence of a systematic link between local electoral uncertainty and nationwide market dynamics. Rather than acting as a direct driver of market behavior, polling volatility in swing states seems largely decoupled from financial volatility."
            }
            TabbedPlot {
                tabs: solid_state_tabs(),
                heading: "Solid States: Quiet Politics, Stronger Signals",
                blurb: "Solid states experience less electoral competition and lower political uncertainty, yet their polling dynamics may convey broader national signals.",
            }
            p {
                "Solid states do not exhibit a consistently stronger relationship with stock market volatility either. While a few states show moderate positive or negative correlations, the overall pattern remains fragmented and lacks a clear directional structure."
            }
            p {
                "Taken together, the state-level evidence suggests that correlations between polling volatility and market volatility are highly heterogeneous and difficult to interpret in isolation. Even in politically stable environments, polling dynamics do not map cleanly onto predictable market responses."
            }
            YearPlot {
                src_prefix: "p1/us_map_polling_volatility_",
                title_prefix: "Nationwide map",
                heading: "A Nationwide View: Where Do Politics and Markets Align?",
                blurb: "To synthesize the state-level patterns, we project the correlation between polling volatility and stock market volatility onto a map of the United States, allowing for a geographic comparison across election cycles.",
                p { class: "plot-caption",
                    "Each state is shaded by the correlation between its polling volatility and NASDAQ volatility in the selected cycle."
                }
            }
            YearPlot {
                src_prefix: "p1/national_vs_market_",
                title_prefix: "National polling vs market",
                heading: "Do Polling-Market Relationships Persist Over Time?",
                blurb: "Whether the relationship between polling volatility and market volatility is persistent or merely episodic may be revealed more clearly over time than across space. To explore this possibility, the correlation is traced across election cycles, before zooming in on individual years to examine the underlying national dynamics.",
                subheading: "National Polling vs. Market Volatility (By Year)",
                sub_blurb: "Selecting an election year reveals the time-series comparison between national polling volatility and market volatility during that cycle.",
                h4 { class: "plot-card__subtitle", "Correlation Across Election Cycles" }
                p { class: "plot-card__blurb",
                    "The figure below plots the correlation between national polling volatility and NASDAQ volatility across election years, with significance markers indicating statistical strength."
                }
                PlotFrame { src: "p1/corr_over_time.html", title: "Correlation over time" }
            }
            p {
                "Looking across election years, the geographic pattern of correlations changes a lot. Some states show strong positive or negative relationships in certain elections, but these patterns do not repeat consistently over time, whether the states are swing or solid. No stable geographic map emerges from one cycle to the next."
            }
            p {
                "If any persistence exists, it may be found more in time than in place. The evidence suggests a highly context-dependent relationship: electoral uncertainty does not generate a single, stable response in overall market volatility. Its impact appears to depend on the specific political and economic environment of each election cycle."
            }
            p {
                "These findings motivate a change in perspective. Rather than focusing on the market as a whole, attention turns to how different industries respond during election periods. Sector-level analysis may reveal clearer and more consistent patterns than those visible in aggregate market data."
            }
        }
    }
}
