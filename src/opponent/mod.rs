//! Opponent profiling.
//!
//! ## Modules
//!
//! - `window`: Fixed-capacity boolean observation window
//! - `model`: Style classification, confidence and exploit hints

/// Statistics, classification and exploit hints.
pub mod model;
/// Fixed-capacity sample window.
pub mod window;

pub use model::{
    ExploitAdjustments, OpponentModel, OpponentStats, OpponentStyle, StyleKind, Tendency,
};
pub use window::SlidingWindow;
