//! Error types for hand operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while dealing a new hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The card supply ran out before five cards were drawn.
    #[error("card supply exhausted while dealing")]
    SupplyExhausted,
}

/// Errors that can occur while discarding and redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The card supply could not provide every replacement card.
    #[error("card supply exhausted while drawing replacements")]
    SupplyExhausted,
}

/// Errors that can occur when building a hand from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold exactly five cards.
    #[error("a hand holds 5 cards, got {found}")]
    InvalidSize {
        /// Number of cards supplied.
        found: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Error returned when parsing a [`Card`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card")]
pub struct ParseCardError;
