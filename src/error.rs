//! Error types for card, deck and point operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::{Rank, Suit};

/// Errors that can occur when building a card from symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank symbol is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("invalid rank: {0}")]
    InvalidRank(String),
    /// The suit symbol is not one of `♠`, `♣`, `♦`, `♥`.
    #[error("invalid suit: {0}")]
    InvalidSuit(String),
}

/// Errors that can occur when taking cards out of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Position is past the end of the deck.
    #[error("index {index} out of range for deck of {len} cards")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Cards remaining in the deck.
        len: usize,
    },
    /// Not enough cards in the deck to deal a full hand.
    #[error("not enough cards in the deck: needed {needed}, {remaining} remaining")]
    NotEnoughCards {
        /// Cards required.
        needed: usize,
        /// Cards remaining in the deck.
        remaining: usize,
    },
    /// The same card appears twice in a hand.
    #[error("duplicate card: {rank} {suit}")]
    DuplicateCard {
        /// Rank of the repeated card.
        rank: Rank,
        /// Suit of the repeated card.
        suit: Suit,
    },
}

/// Errors that can occur when parsing a hand category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The name does not match any category.
    #[error("unknown hand category: {0}")]
    Unknown(String),
}

/// Errors that can occur when building or recoloring an advanced point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    /// A coordinate is NaN or infinite.
    #[error("coordinate {axis} must be a finite number")]
    NonFiniteCoordinate {
        /// The offending axis, `x` or `y`.
        axis: char,
    },
    /// The color is not in the palette.
    #[error("color must be one of the palette colors, got {0}")]
    UnknownColor(String),
}
