//! Platform-agnostic state and geometry for the story's interactive pieces.
//! Nothing in here touches the DOM; the components in `journey` and `widgets`
//! drive these models from browser events.

pub mod config;
pub mod format;
pub mod panel;
pub mod platform;
pub mod rotation;
pub mod scroll;
pub mod ticker;
pub mod timing;
pub mod trend;
