use dioxus::prelude::*;

use crate::widgets::{DropCap, Section};

#[component]
pub fn Conclusion() -> Element {
    rsx! {
        Section {
            id: "conclusion",
            title: "The Listening Market",
            subtitle: "Conclusion",
            chapter: "05",
            DropCap { letter: "W",
                "hen you step back from the charts, a simple picture emerges. Markets don't react to politics because of party colors alone; they react to shifting expectations about what tomorrow might look like. In quiet times, the market hums. In loud times, it listens harder. And in the rare moments when the story suddenly bends, prices move fast to catch up."
            }
            p {
                "We saw this in the broader mood of the NASDAQ: election seasons carry more uncertainty, but not all years are equal. Some cycles feel like a steady walk; others feel like crossing a river on moving stones. We watched sensitivity by industry and learned that some corners of the market tighten first, while technology sometimes keeps building through the noise."
            }
            p {
                "We noticed how individual companies quietly signal their comfort zones. It isn't about slogans. It's about how their prices lean when the wind changes. Many of the biggest names seemed steadier or slightly right-leaning in their reactions: less a declaration, more a pattern of behavior shaped by how they see policy, taxes, regulation and growth."
            }
            p {
                "And then there are the nights that write their own chapters. A scandal. A collapse. A letter. An attempt that stops time for a moment. On those nights, the market doesn't wait for speeches. It sketches its own alternate path, what would have happened, then measures the gap. Some stocks stumble, some hold their ground, and a few step forward."
            }
            p {
                "If there's a lesson here, it's this: the market is a listener. It hears what might happen next and prices it quickly, then keeps listening as the story unfolds. For investors, that means paying attention not just to the destination, but to the turns in the road."
            }
            p {
                "This isn't a map to certainty. It's a way to read the room. Elections make the room louder, and the market responds with its own voice. Our hope is that this story helps you hear that voice more clearly. The next cycle will come soon enough. When it does, you'll know where to look, and what to listen for."
            }
        }
    }
}
