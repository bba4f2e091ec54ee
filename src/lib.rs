//! A five-card draw poker hand evaluator with optional `no_std` support.
//!
//! The crate provides a [`Hand`] type that classifies five cards into a
//! [`Category`], scores them for comparison against other hands, and
//! advises which cards to throw before the draw.
//!
//! # Example
//!
//! ```
//! use drawpoker::{Deck, Hand};
//!
//! let deck = Deck::new(42);
//! let mut hand = Hand::deal(&deck).unwrap();
//! println!("{hand}: {}", hand.category());
//!
//! let thrown = hand.discard(&deck).unwrap();
//! assert!(thrown <= 3);
//! println!("drew {thrown}: {hand} worth {}", hand.value());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
mod discard;
pub mod error;
pub mod hand;
pub mod options;
mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use category::Category;
pub use deck::{CardSupply, Deck};
pub use error::{DealError, DiscardError, HandError, ParseCardError};
pub use hand::{HAND_SIZE, Hand};
pub use options::{DiscardOptions, MAX_DISCARDS};
