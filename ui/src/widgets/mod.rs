//! Reusable building blocks for the story chapters.

pub mod carousel;
pub mod formula;
pub mod reveal;
pub mod section;
pub mod stock_explorer;
pub mod tabs;

pub use carousel::StockCarousel;
pub use formula::FormulaExplorer;
pub use reveal::TimeMachine;
pub use section::{AnalogyBox, DropCap, Figure, MethodologyNote, PlotFrame, PullQuote, Section};
pub use stock_explorer::StockExplorer;
pub use tabs::{PartyTabs, PlotTab, TabbedPlot, YearPlot};
