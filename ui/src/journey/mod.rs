//! Reading-progress features: the scroll tracker, the top progress strip,
//! the floating trend panel, the footer replay, and the PNG snapshot.

pub mod chart;
pub mod export;
pub mod flow_panel;
pub mod footer;
pub mod progress;
pub mod snapshot;
pub mod tracker;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod glyphs;
#[cfg(not(target_arch = "wasm32"))]
pub mod raster;

pub use flow_panel::ReadingFlowPanel;
pub use footer::FooterJourney;
pub use progress::ProgressBar;
pub use tracker::use_scroll_series;
