use dioxus::prelude::*;

use crate::core::platform::scroll_to_anchor;
use crate::widgets::{
    AnalogyBox, DropCap, Figure, PlotFrame, PullQuote, Section, StockCarousel, StockExplorer,
    TimeMachine,
};

struct Cluster {
    label: &'static str,
    tone: &'static str,
    heading: &'static str,
    body: &'static str,
}

const CLUSTERS: [Cluster; 3] = [
    Cluster {
        label: "Cluster 0",
        tone: "blue",
        heading: "Downward pattern (46.6%)",
        body: "Residuals drift lower after the event: these stocks underperform their no-event counterfactual.",
    },
    Cluster {
        label: "Cluster 1",
        tone: "green",
        heading: "Upward pattern (31.2%)",
        body: "Residuals rise overall, corresponding to stocks that outperform the counterfactual after the event.",
    },
    Cluster {
        label: "Cluster 2",
        tone: "red",
        heading: "Moderate / stable pattern (22.2%)",
        body: "Residuals hover around zero with smaller swings, suggesting a muted reaction.",
    },
];

#[component]
fn Step(number: u8, title: String, children: Element) -> Element {
    rsx! {
        div { class: "method-step",
            div { class: "method-step__number", "{number}" }
            div { class: "method-step__body",
                h4 { "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        Section {
            id: "events",
            title: "The Shockwave",
            subtitle: "Event Studies",
            chapter: "04",
            DropCap { letter: "E",
                "lections are not just slow, grinding trends. They are punctuated by \"Black Swans\": sudden, shocking events that rewrite history in an instant."
            }
            h3 { class: "prose-heading", "Defining the Moments That Matter" }
            p {
                "Our analysis focuses on the "
                strong { "election cycle" }
                ", roughly 180 days before and after Election Day. During this window we track specific political shocks that jolt the race. Some are "
                strong { "policy-driven" }
                " (tax reform announcements), others are "
                strong { "scandal-driven" }
                " (leaked emails, legal troubles), and some are pure "
                strong { "black swans" }
                " (health crises, violent incidents)."
            }
            h3 { class: "prose-heading", "Why Start in 1992? The Data Speaks" }
            Figure { src: "p4/year_wise_available_stocks.png", alt: "Year-wise available stocks", narrow: true }
            p {
                "Before 1992, the number of continuously traded stocks on the NASDAQ was surprisingly thin. The "
                strong { "cumulative percentage of available stocks" }
                " shows a market far less liquid and diverse in earlier decades. By focusing on the "
                strong { "modern era" }
                " (1992 onward), the analysis rests on a robust foundation of consistently traded stocks."
            }
            p {
                "In short: fewer stocks before 1992 means noisier signals. More stocks after 1992 means clearer stories."
            }
            h3 { class: "prose-heading", "The Drama Timeline: 1992-2024" }
            p {
                strong { "July 13, 2024." }
                " A rally in Pennsylvania. A gunshot. In seconds, the probability of the election outcome shifted violently. Every election cycle seems to have its own \"drama moment\" that shakes the market, and we selected one remarkable event for each cycle from 1992 to 2024:"
            }
            PlotFrame { src: "p4/events.html", title: "Election drama timeline", height: "700px" }
            p {
                "From the 1992 Gennifer Flowers scandal to Bush's 2000 DUI exposure, from the 2008 Lehman Brothers bankruptcy to the 2016 Comey letter bombshell, each cycle delivered a moment that forced Wall Street to recalibrate overnight."
            }
            h3 { class: "prose-heading", "Measuring the Shockwaves" }
            p {
                "Do the events hit equally? No. Through the lens of "
                strong { "volatility" }
                ", we measure how the NASDAQ's uncertainty changed in the "
                strong { "30 days before and after" }
                " each event: the \"tremor intensity\" of each political earthquake."
            }
            PlotFrame { src: "p4/event_volatility_rank.html", title: "Event volatility rank", height: "500px", narrow: true }
            p {
                "Some events barely moved the needle, while others sent volatility soaring. The "
                strong { "2008 financial crisis" }
                " created a perfect storm, while some debate performances that dominated headlines had surprisingly muted market reactions."
            }
            p {
                "Zooming in with a "
                strong { "rolling volatility" }
                " gives a real-time heartbeat of market anxiety:"
            }
            PlotFrame { src: "p4/event_rolling_vol.html", title: "Rolling volatility around events", height: "500px", narrow: true }
            p {
                "Volatility doesn't spike and immediately return to normal; it often "
                strong { "lingers" }
                ". Events that genuinely change "
                strong { "expected policy outcomes" }
                " tend to have longer-lasting impacts."
            }
            PullQuote { text: "The market doesn't just react to what happened. It reacts to what might happen next." }
            p {
                "But how do we know the impact of such a chaotic moment? Stocks move for a million reasons. To isolate the impact of the shooting, we needed a "
                strong { "Time Machine" }
                "."
            }
            div { class: "method-card",
                h3 { class: "method-card__title", "Building the \"Time Machine\"" }
                p {
                    "We used "
                    strong { "Counterfactual Analysis" }
                    ". Here is how it works:"
                }
                Step { number: 1, title: "Teaching the Model What \"Normal\" Looks Like",
                    p {
                        "We trained an ARIMA-based forecasting model on the "
                        strong { "real market data before the event" }
                        ", so it could learn the business-as-usual pattern and project what would likely happen next in a calm world."
                    }
                    AnalogyBox { title: "Why ARIMA?",
                        ul {
                            li {
                                strong { "Stocks are time series." }
                                " Today is not independent of yesterday; prices have memory."
                            }
                            li {
                                strong { "ARIMA is a lightweight short-horizon autopilot." }
                                " It captures trend and autocorrelation without heavy feature engineering."
                            }
                            li {
                                strong { "Clear, interpretable, reproducible." }
                                " An event study needs a transparent counterfactual, not a black box."
                            }
                        }
                    }
                }
                Step { number: 2, title: "Simulating the Alternate Reality",
                    p {
                        "We asked the model: "
                        em { "\"Given everything we saw before, what would the stock price be if the shooting had never happened?\"" }
                    }
                }
                Step { number: 3, title: "Measuring the Gap",
                    p {
                        "The difference between the model's "
                        strong { "\"Peaceful Timeline\"" }
                        " and the chaotic "
                        strong { "\"Real Timeline\"" }
                        " is our estimate of the event's true economic impact."
                    }
                }
            }
            h3 { class: "prose-heading", "\"Time Machine\" on a Real-World Shock: Trump's assassination attempt" }
            p {
                "The incident occurred on a "
                strong { "Saturday" }
                ", when U.S. equity markets are closed. Any reassessment of political risk had to wait for the opening bell, which makes this a clean setup for an "
                strong { "event study" }
                " over the next trading days."
            }
            div { class: "data-choices",
                h4 { "Data choices (so our comparisons are fair)" }
                div { class: "data-choices__grid",
                    div {
                        span { class: "data-choices__tag", "Closing Price" }
                        p { "We start from the daily closing price, the standard end-of-day verdict." }
                    }
                    div {
                        span { class: "data-choices__tag", "Log Close" }
                        p { "Prices are converted to log close so moves read as percentage-like changes across stocks." }
                    }
                }
            }
            p { "NASDAQ log(close) from 2019 to 2025, with the assassination attempt marked:" }
            Figure { src: "p4/NASDAQ_trump.png", alt: "NASDAQ around the Trump assassination attempt" }
            h3 { class: "prose-heading", "Analysis for NASDAQ (what happens as a whole?)" }
            p {
                "We train ARIMA on the "
                strong { "20 weeks of pre-event data" }
                " and forecast the "
                strong { "following 1 week" }
                ". The same window is kept for every single stock later on, so all results are directly comparable."
            }
            TimeMachine {
                Figure {
                    src: "p4/NASDAQ_trump_arima.png",
                    alt: "NASDAQ around the Trump assassination attempt with ARIMA model (real vs. counterfactual)",
                }
                p {
                    "The ARIMA forecast suggests a relatively stable continuation of the previous upward trend. However, the actual log(NASDAQ Close) drops noticeably after the market reopens, falling below the no-event counterfactual."
                }
                p {
                    "The observed drop lies in the tail of the 95% prediction interval, so it is unlikely to be explained by normal volatility alone. The event did not lead to a crash, but it caused a clear deviation from the expected trajectory."
                }
            }
            h3 { class: "prose-heading", "Analysis for Individual Stocks (what happens to each stock?)" }
            p {
                "Does "
                em { "every" }
                " stock drop more than expected after the event? Applying the same procedure to "
                strong { "each individual stock" }
                " shows that stock-level responses vary: some tickers deviate negatively, while others beat the counterfactual."
            }
            TimeMachine {
                StockCarousel {}
                p {
                    "Some of the stocks above perform better than expected relative to the no-event counterfactual (e.g. ABM)."
                }
                p {
                    "To explore the results for each individual stock, use the interactive explorer "
                    a {
                        href: "#stock-explorer",
                        class: "inline-link",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll_to_anchor("stock-explorer");
                        },
                        "below"
                    }
                    ", where you can search for any ticker and view its residual plot."
                }
            }
            p {
                "This naturally motivates a "
                strong { "clustering step" }
                ": grouping stocks with similar post-event deviations summarizes heterogeneous reactions into representative patterns."
            }
            h3 { class: "prose-heading", "Clustering the Stock Responses" }
            p {
                "We run clustering on the gaps between actual and predicted prices to discover a small number of typical reaction patterns."
            }
            Figure { src: "p4/Cluster_center.png", alt: "Clustering results for the residual time series" }
            p { "With three clusters, the average residual patterns are easy to read:" }
            div { class: "cluster-cards",
                for cluster in CLUSTERS.iter() {
                    div { key: "{cluster.label}", class: "cluster-card cluster-card--{cluster.tone}",
                        span { class: "cluster-card__label", "{cluster.label}" }
                        h5 { "{cluster.heading}" }
                        p { "{cluster.body}" }
                    }
                }
            }
            p {
                "Notably, the downward cluster contains the largest share of stocks (46.6%), which matches the overall decline observed in the NASDAQ index."
            }
            p {
                "The residual series are also projected into 3D with PCA and colored by cluster. Filter by cluster and hover over any point to see its ticker."
            }
            div { id: "stock-explorer",
                StockExplorer {}
            }
        }
    }
}
