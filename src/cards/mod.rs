//! Card and hand primitives.
//!
//! ## Modules
//!
//! - `card`: Card, rank, suit, hand, board, street and deck representations
//! - `profile`: Rank/suit multiplicities and straight/flush facts

/// Card, hand, board, street and deck types.
pub mod card;
/// Rank and suit statistics of a card set.
pub mod profile;

pub use card::{Board, Card, Deck, Hand, Rank, Street, Suit};
pub use profile::HandProfile;
