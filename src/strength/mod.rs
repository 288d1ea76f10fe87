//! Strength and equity estimation.
//!
//! All operations here are pure functions of their inputs: no internal
//! state, no randomness, no I/O.
//!
//! ## Modules
//!
//! - `preflop`: Scalar strength of a hole hand before the flop
//! - `postflop`: Bucket and strength of a made hand with a board
//! - `draws`: Outs counting, draw equity and combined equity
//! - `odds`: Pot odds, expected value and the call test

/// Out counting and draw equity.
pub mod draws;
/// Pot odds and expected value.
pub mod odds;
/// Made-hand buckets.
pub mod postflop;
/// Three- and two-card hole scoring.
pub mod preflop;

pub use draws::{combined_equity, count_outs, draw_equity, DrawAssessment, DrawType};
pub use odds::{expected_value, pot_odds, should_call};
pub use postflop::{postflop_evaluate, HandBucket, StrengthEvaluation};
pub use preflop::preflop_strength;
