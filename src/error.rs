//! Error types shared across the crate.

use thiserror::Error;

use crate::bot::config::ConfigError;

/// Errors raised for malformed inputs to the decision engine.
///
/// These are integration errors (a bad card string, a hand of the wrong size),
/// never game conditions. Action selection itself does not fail: the session
/// degrades to a legal fallback action instead.
#[derive(Debug, Error)]
pub enum BotError {
    /// A card string is not a rank character followed by a suit character.
    #[error("invalid card encoding: '{0}'")]
    InvalidCard(String),

    /// A hand has the wrong number of cards for its phase.
    #[error("hand must hold {expected} cards, got {actual}")]
    InvalidHand {
        /// Accepted card counts.
        expected: &'static str,
        /// Cards supplied.
        actual: usize,
    },

    /// A board has more than five cards or the wrong count for its street.
    #[error("board cannot hold {0} cards")]
    InvalidBoard(usize),

    /// A discard index does not name a hole card.
    #[error("discard index {0} is out of range")]
    InvalidDiscard(usize),

    /// Raise bounds with the minimum above the maximum.
    #[error("raise bounds [{min}, {max}] are inverted")]
    InvalidRaiseBounds {
        /// Supplied minimum target.
        min: u32,
        /// Supplied maximum target.
        max: u32,
    },

    /// Raising is legal but the bounds are missing.
    #[error("raise is legal but no raise bounds were supplied")]
    MissingRaiseBounds,

    /// The legal-action set is empty.
    #[error("no legal actions were supplied")]
    NoLegalActions,

    /// Configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
