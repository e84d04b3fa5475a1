//! Playing cards, a 52-card deck and five-card hand classification, with
//! optional `no_std` support.
//!
//! A [`Deck`] deals [`Card`]s into a [`Hand`], which answers whether it is a
//! flush, a straight, or one of the pair-based categories. [`Simulation`]
//! repeats that process to estimate how often a category turns up. The
//! [`point`] module holds a small family of plane points.
//!
//! # Example
//!
//! ```
//! use deckhand::{Deck, Hand};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let hand = Hand::deal_from(&mut deck).unwrap();
//! assert_eq!(deck.len(), 47);
//! let _ = hand.is_straight();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod point;
pub mod simulation;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, CategoryError, DeckError, PointError};
pub use hand::{Category, HAND_SIZE, Hand};
pub use options::SimulationOptions;
pub use point::{AdvancedPoint, ColorPoint, Point, PointFields};
pub use simulation::{Simulation, SimulationReport};
