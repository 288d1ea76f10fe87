//! # Rust Pokerbot
//!
//! Decision engine for a heads-up hold'em variant where each player is dealt
//! three hole cards and throws one away after the preflop betting round.
//!
//! ## Features
//!
//! - **Hand Strength**: Preflop scoring of three-card hands, postflop made-hand
//!   buckets, draw detection with out counting, and pot-odds math
//! - **Opponent Modeling**: Sliding-window VPIP / PFR / fold-to-raise /
//!   aggression statistics, style classification and exploit hints
//! - **Mixed Strategies**: Two interchangeable policies behind one trait, with
//!   all randomness injected
//! - **Bankroll Guard**: Lock in a winning match by folding out
//! - **Self-Play Arena**: Local dealer, showdown evaluator and match reports
//!
//! ## Quick Start
//!
//! ```ignore
//! use rust_pokerbot::{BotConfig, MatchSession};
//!
//! let mut session = MatchSession::new(BotConfig::default())?;
//! session.on_round_start(bankroll, round_num, game_clock, &hand, big_blind);
//! let action = session.decide(&round_context);
//! session.on_round_end(delta, final_street, None, opp_cards);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       MatchSession (bot)                        │
//! │  - Round hooks            - Bankroll guard                      │
//! │  - Opponent observation   - Seeded random source                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ calls ActionPolicy::decide
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!   ┌────────────┐       ┌────────────┐        ┌────────────┐
//!   │  strength  │       │  opponent  │        │  discard   │
//!   │ (equity)   │       │ (stats)    │        │ (scoring)  │
//!   └────────────┘       └────────────┘        └────────────┘
//! ```

#![warn(missing_docs)]

/// Error types.
pub mod error;

/// Cards, hands, boards and streets.
pub mod cards;

/// Hand strength, draws and pot odds.
pub mod strength;

/// Opponent statistics and style classification.
pub mod opponent;

/// Actions, round context and the action policies.
pub mod policy;

/// Configuration, bankroll guard and the per-match session.
pub mod bot;

/// Local self-play harness.
pub mod arena;

pub use bot::{BotConfig, MatchSession, OpponentAction};
pub use cards::{Board, Card, Hand, Street};
pub use error::BotError;
pub use policy::{Action, ActionKind, ActionPolicy, LegalActions, PolicyKind, RoundContext};
