//! Story chapters, in reading order.

pub mod conclusion;
pub mod events;
pub mod footer;
pub mod hero;
pub mod leaning;
pub mod macro_analysis;
pub mod prologue;
pub mod sensitivity;

pub use conclusion::Conclusion;
pub use events::Events;
pub use footer::StoryFooter;
pub use hero::Hero;
pub use leaning::Leaning;
pub use macro_analysis::MacroAnalysis;
pub use prologue::Prologue;
pub use sensitivity::Sensitivity;
