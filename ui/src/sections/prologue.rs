use dioxus::prelude::*;

use crate::widgets::{DropCap, Figure, PlotFrame, Section};

#[component]
pub fn Prologue() -> Element {
    rsx! {
        Section {
            id: "prologue",
            title: "The Invisible Dialogue",
            subtitle: "Prologue",
            chapter: "00",
            DropCap { letter: "I",
                strong { "magine the stock market as a seismograph for the national mood." }
                " While political polls capture what people "
                em { "say" }
                ", stock prices capture what people "
                em { "do" }
                " with their money. It is the ultimate \"skin in the game.\""
            }
            p {
                "Our project began with a simple question: "
                em {
                    "Does the drama of the US Presidential Election actually matter to the cold, calculating logic of Wall Street?"
                }
            }
            p {
                "The answer "
                em { "might" }
                " lie buried in decades of trading data, if the market truly pays attention. Every election cycle brings its own theater: soaring campaign promises, heated debates, polling swings, and surprise October revelations. But does any of this political noise actually matter to investors? Beneath the headlines, millions are quietly placing their bets, not with votes, but with dollars. If their collective judgment means anything, it should create some kind of measurable signal across thousands of stocks. Perhaps a pattern emerges. Or perhaps the market simply shrugs and moves on, indifferent to the political drama. The question is: "
                em { "which is it?" }
            }
            p {
                "Among thousands of symbols on exchanges like the NASDAQ, it's crucial to distinguish between "
                strong { "individual stocks" }
                " and "
                strong { "Exchange-Traded Funds (ETFs)" }
                ". ETFs are investment funds, baskets of assets traded like a single stock, that primarily offer instant portfolio diversification. For research focused on a specific event such as the US election, "
                strong { "individual stocks are superior" }
                ": they offer "
                strong { "direct exposure to specific policy outcomes" }
                ", whereas the built-in diversification of ETFs dilutes the direct relationship. Fortunately, over 70% of the symbols in the dataset are individual stocks, providing a rich foundation for our analysis."
            }
            PlotFrame { src: "p0/etf.html", title: "ETF share of NASDAQ symbols", height: "500px", narrow: true }
            p {
                "The individual stocks belong to various sectors, which lets us trace how different industries react to the evolving electoral landscape. Apart from those in the "
                strong { class: "sector sector--unknown", "Unknown" }
                " sector, the top three sectors by number of stocks are "
                strong { class: "sector sector--financial", "Financial Services" }
                ", "
                strong { class: "sector sector--healthcare", "Healthcare" }
                " and "
                strong { class: "sector sector--technology", "Technology" }
                "."
            }
            PlotFrame { src: "p0/sector.html", title: "Stocks by sector", height: "700px" }
            p {
                "NASDAQ records stocks from a wide range of periods: some are new, while others date back decades. The oldest records reach into the 1970s, when the world was still in the grip of the "
                strong { "Cold War (1991)" }
                ". Stocks from that period may behave very differently from those in the "
                strong { "Contemporary Era" }
                ", and they are much rarer: less than 20% of stocks predate the end of 1991."
            }
            Figure { src: "p0/cdf.png", alt: "CDF Analysis" }
        }
    }
}
