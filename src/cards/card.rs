//! Card representation for the discard variant.
//!
//! This module provides the card types used throughout the bot:
//! - `Card`: A single playing card with rank and suit
//! - `Hand`: A player's private cards (3 before the discard, 2 after)
//! - `Board`: Community cards (0-5 cards)
//! - `Street`: The betting round
//! - `Deck`: A deck of 52 cards with dealing functionality

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

/// Rank characters for display, indexed by `Rank as usize`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display, indexed by `Suit as usize`.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Rank of a card, Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Face value, 2 through 14 (Ace high).
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Display character.
    pub fn to_char(&self) -> char {
        RANK_CHARS[*self as usize]
    }

    fn from_char(c: char) -> Option<Self> {
        let idx = RANK_CHARS.iter().position(|&r| r == c.to_ascii_uppercase())?;
        Some(Self::ALL[idx])
    }
}

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Display character.
    pub fn to_char(&self) -> char {
        SUIT_CHARS[*self as usize]
    }

    fn from_char(c: char) -> Option<Self> {
        let idx = SUIT_CHARS.iter().position(|&s| s == c.to_ascii_lowercase())?;
        Some(Self::ALL[idx])
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { id: rank as u8 * 4 + suit as u8 }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.id / 4) as usize]
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.id % 4) as usize]
    }

    /// Parse a whitespace separated or concatenated card list like "AhKs Qd".
    pub fn parse_many(s: &str) -> Result<Vec<Card>, BotError> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() % 2 != 0 {
            return Err(BotError::InvalidCard(s.to_string()));
        }
        compact
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).parse())
            .collect()
    }
}

impl FromStr for Card {
    type Err = BotError;

    /// Parse a card from strings like "As", "Kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BotError::InvalidCard(s.to_string()));
        };
        let rank = Rank::from_char(r).ok_or_else(|| BotError::InvalidCard(s.to_string()))?;
        let suit = Suit::from_char(u).ok_or_else(|| BotError::InvalidCard(s.to_string()))?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().to_char(), self.suit().to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A player's private cards.
///
/// Holds exactly 3 cards from the deal until the discard, and exactly 2 after.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Cards dealt at round start.
    pub const DEALT: usize = 3;
    /// Cards kept after the discard.
    pub const KEPT: usize = 2;

    /// Create a hand from 2 or 3 cards.
    pub fn new(cards: Vec<Card>) -> Result<Self, BotError> {
        match cards.len() {
            Self::KEPT | Self::DEALT => Ok(Self { cards }),
            actual => Err(BotError::InvalidHand { expected: "2 or 3", actual }),
        }
    }

    /// Parse a hand from a string like "AhKsQd".
    pub fn parse(s: &str) -> Result<Self, BotError> {
        Self::new(Card::parse_many(s)?)
    }

    /// Check whether the discard is still pending.
    pub fn is_pre_discard(&self) -> bool {
        self.cards.len() == Self::DEALT
    }

    /// Remove the card at `index`, returning the two-card hand.
    pub fn discard(&self, index: usize) -> Result<Self, BotError> {
        if !self.is_pre_discard() {
            return Err(BotError::InvalidHand { expected: "3", actual: self.cards.len() });
        }
        if index >= self.cards.len() {
            return Err(BotError::InvalidDiscard(index));
        }
        let mut cards = self.cards.clone();
        cards.remove(index);
        Ok(Self { cards })
    }

    /// Get the cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed hand.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Community cards on the board.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Maximum number of board cards.
    pub const MAX: usize = 5;

    /// Create an empty board.
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(Self::MAX) }
    }

    /// Create a board from cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, BotError> {
        if cards.len() > Self::MAX {
            return Err(BotError::InvalidBoard(cards.len()));
        }
        Ok(Self { cards })
    }

    /// Parse a board from string like "AhKsQd".
    pub fn parse(s: &str) -> Result<Self, BotError> {
        Self::from_cards(Card::parse_many(s)?)
    }

    /// Get the number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Add a card to the board. Boards only grow within a round.
    pub fn add(&mut self, card: Card) -> Result<(), BotError> {
        if self.cards.len() >= Self::MAX {
            return Err(BotError::InvalidBoard(self.cards.len() + 1));
        }
        self.cards.push(card);
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Betting round. Monotonically increasing within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards only; also where the discard is decided.
    Preflop = 0,
    /// Three board cards.
    Flop = 1,
    /// Fourth board card.
    Turn = 2,
    /// Fifth board card.
    River = 3,
}

impl Street {
    /// Get the next street.
    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Number of board cards once this street is dealt.
    pub fn num_board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Streets still to be dealt after this one (used for draw equity).
    pub fn streets_remaining(&self) -> u8 {
        match self {
            Street::Preflop | Street::Flop => 2,
            Street::Turn => 1,
            Street::River => 0,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

/// A deck of 52 playing cards.
#[derive(Clone)]
pub struct Deck {
    cards: [Card; 52],
    /// Index of next card to deal.
    index: usize,
}

impl Deck {
    /// Create a new deck in standard order.
    pub fn new() -> Self {
        let mut cards = [Card::from_id(0); 52];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::from_id(i as u8);
        }
        Self { cards, index: 0 }
    }

    /// Create a freshly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        let card = *self.cards.get(self.index)?;
        self.index += 1;
        Some(card)
    }

    /// Deal multiple cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.deal()).collect()
    }

    /// Get the number of remaining cards.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}
