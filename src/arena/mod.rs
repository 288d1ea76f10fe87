//! Self-play harness.
//!
//! A minimal heads-up engine with the discard rule, a best-five showdown
//! evaluator and the match report. Nothing here is used by the bot when it
//! plays against an external engine.
//!
//! ## Modules
//!
//! - `dealer`: Round state machine, legal actions and raise bounds
//! - `showdown`: Best-five-of-seven hand ranking
//! - `report`: Per-match PnL statistics and multi-match summary

/// Round state machine and match driver.
pub mod dealer;
/// Match reports and summaries.
pub mod report;
/// Best-five showdown evaluation.
pub mod showdown;

pub use dealer::{Dealer, RoundOutcome, RoundState};
pub use report::{mean_std, ArenaSummary, MatchReport};
pub use showdown::{evaluate_best, HandCategory, ShowdownRank};

use crate::bot::BotConfig;
use crate::error::BotError;

/// Play one full match between two configurations.
pub fn run_match(hero: BotConfig, villain: BotConfig, seed: u64) -> Result<MatchReport, BotError> {
    log::debug!("match seed {}: {} vs {}", seed, hero.policy, villain.policy);
    Dealer::new(hero, villain, seed)?.run()
}
