//! The bot as the engine sees it.
//!
//! ## Modules
//!
//! - `config`: BotConfig and its JSON loading/validation
//! - `guard`: Bankroll guard overrides
//! - `session`: MatchSession with the round hooks and `decide`

/// Bot configuration and validation.
pub mod config;
/// Bankroll lock-in rules.
pub mod guard;
/// Per-match session state and decision entry point.
pub mod session;

pub use config::{BotConfig, ConfigError, GuardConfig, OpponentConfig, StakesConfig};
pub use guard::{BankrollGuard, BankrollState};
pub use session::{MatchSession, OpponentAction};
