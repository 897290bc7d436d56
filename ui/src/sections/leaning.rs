use dioxus::prelude::*;

use crate::widgets::{DropCap, Figure, PartyTabs, PlotTab, Section};

fn party_tabs() -> Vec<PlotTab> {
    vec![
        PlotTab {
            key: "dem",
            label: "Democratic Top 100",
            src: "p3/democratic_top100.html",
            title: "Democratic-leaning stocks",
        },
        PlotTab {
            key: "rep",
            label: "Republican Top 100",
            src: "p3/republican_top100.html",
            title: "Republican-leaning stocks",
        },
    ]
}

#[component]
pub fn Leaning() -> Element {
    rsx! {
        Section {
            id: "leaning",
            title: "The Secret Ballot",
            subtitle: "Stock Partisanship",
            chapter: "03",
            dark: true,
            DropCap { letter: "I",
                "ndividuals can have political leanings, but can stocks? Imagine your favorite candidate finally wins: you feel optimistic about the future. Maybe the same thing happens to stocks. When a candidate wins, certain stocks tend to rise while others fall, as stakeholders who believe a candidate's policies will benefit their industry buy more of that stock and drive up its price."
            }
            p { "Given that, stocks can also have their own \"partisanship\", or \"color\":" }
            div { class: "party-cards",
                div { class: "party-card party-card--blue",
                    h4 { "The \"Blue\" Stock" }
                    p { "A stock that tends to rise when the Democratic candidate wins the presidential election." }
                }
                div { class: "party-card party-card--red",
                    h4 { "The \"Red\" Stock" }
                    p { "A stock that tends to rise when the Republican candidate wins the presidential election." }
                }
            }
            p {
                "But a stock's political leaning is hidden; the only way to uncover it is through its behavior. By calculating the difference in average returns between Democratic and Republican wins, a \"political score\" can be assigned to each stock. A positive score indicates a Democratic lean, while a negative score indicates a Republican lean."
            }
            p { "Here are the rankings of the top 100 stocks that lean Democratic and Republican, respectively." }
            PartyTabs { tabs: party_tabs() }
            p {
                "Sensitivity from the previous chapter, together with the Political Leaning score, produces a complete picture of each stock's political behavior. The hidden political landscape is represented along two dimensions: "
                strong { "Sensitivity" }
                " (how much the stock reacts to polling changes) and "
                strong { "Inclination" }
                " (which party it leans toward). Stocks on the left tend to rise more when Democrats win, those on the right when Republicans win."
            }
            p {
                "To make this abstract concept tangible, we plotted the logos of the "
                strong { "top 15 NASDAQ-100 companies" }
                " by market weight onto this political map. These are the giants of American capitalism: your Apples, your Microsofts, your Teslas."
            }
            Figure { src: "p3/leaning.png", alt: "Political Sensitivity and Inclination Map" }
            p {
                "The pattern is striking. The giants of the NASDAQ cluster "
                strong { "heavily on the Republican side or dead center" }
                ". Few lean Democratic. It's as if Wall Street's biggest players are quietly placing their bets with their stock price reactions. The invisible hand, it turns out, has a political preference."
            }
        }
    }
}
