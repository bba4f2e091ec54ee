//! Five-card hands.

use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt;

use log::{debug, trace, warn};

use crate::card::{Card, Suit};
use crate::category::{self, Category, RankGroups};
use crate::deck::CardSupply;
use crate::discard;
use crate::error::{DealError, DiscardError, HandError};
use crate::options::{DiscardOptions, MAX_DISCARDS};
use crate::score;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A five-card hand, always sorted by rank from highest to lowest.
///
/// ```
/// use drawpoker::{Category, Hand};
///
/// let cards = ["10S", "9S", "8S", "7S", "6S"].map(|c| c.parse().unwrap());
/// let hand = Hand::new(cards).unwrap();
/// assert_eq!(hand.category(), Category::StraightFlush);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Builds a hand from five distinct cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if a card appears twice.
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        sort(&mut cards);
        Ok(Self { cards })
    }

    /// Draws five cards from `supply`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::SupplyExhausted`] if the supply runs out. Cards
    /// drawn before that are handed back.
    pub fn deal<S: CardSupply + ?Sized>(supply: &S) -> Result<Self, DealError> {
        let mut cards: [Card; HAND_SIZE] = draw(supply, HAND_SIZE)
            .and_then(|drawn| drawn.try_into().ok())
            .ok_or(DealError::SupplyExhausted)?;

        sort(&mut cards);
        Ok(Self { cards })
    }

    /// Returns the cards, highest rank first.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the category of the hand.
    #[must_use]
    pub fn category(&self) -> Category {
        category::classify(&self.cards, &RankGroups::new(&self.cards))
    }

    /// Returns the hand value. A higher value is a stronger hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        let groups = RankGroups::new(&self.cards);
        let category = category::classify(&self.cards, &groups);
        score::hand_value(&self.cards, &groups, category)
    }

    /// Returns the most common suit with its count, when two to four cards
    /// share it.
    #[must_use]
    pub fn suit_frequency(&self) -> Option<(Suit, u8)> {
        discard::suit_frequency(&self.cards)
    }

    /// Returns how far the hand is from a straight.
    ///
    /// 0 is a made straight, 1 and 2 are one or two cards away, 3 is a
    /// distant draw and 4 is no draw at all.
    #[must_use]
    pub fn straight_proximity(&self) -> u8 {
        discard::straight_draw(&self.cards).proximity
    }

    /// Discard likelihood (0 to 100) for each card, with default tuning.
    #[must_use]
    pub fn discard_scores(&self) -> [u8; HAND_SIZE] {
        self.discard_scores_with(&DiscardOptions::default())
    }

    /// Discard likelihood (0 to 100) for each card.
    #[must_use]
    pub fn discard_scores_with(&self, options: &DiscardOptions) -> [u8; HAND_SIZE] {
        let groups = RankGroups::new(&self.cards);
        let category = category::classify(&self.cards, &groups);
        discard::discard_scores(&self.cards, &groups, category, options)
    }

    /// Throws the advised cards and draws replacements, with default tuning.
    ///
    /// # Errors
    ///
    /// See [`Hand::discard_with`].
    pub fn discard<S: CardSupply + ?Sized>(&mut self, supply: &S) -> Result<usize, DiscardError> {
        self.discard_with(supply, &DiscardOptions::default())
    }

    /// Throws the highest scored cards, up to `options.max_discards` and
    /// never more than [`MAX_DISCARDS`], and replaces them from `supply`.
    /// Returns how many cards were replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::SupplyExhausted`] if not every replacement
    /// can be drawn. The hand is left unchanged in that case.
    pub fn discard_with<S: CardSupply + ?Sized>(
        &mut self,
        supply: &S,
        options: &DiscardOptions,
    ) -> Result<usize, DiscardError> {
        let scores = self.discard_scores_with(options);
        trace!("discard scores for {self}: {scores:?}");

        let limit = options.max_discards.min(MAX_DISCARDS);
        let picks = discard::pick_discards(&scores, limit);
        if picks.is_empty() {
            return Ok(0);
        }

        let replacements = draw(supply, picks.len()).ok_or(DiscardError::SupplyExhausted)?;

        debug!("{self}: discarding {} cards", picks.len());
        for (&position, replacement) in picks.iter().zip(replacements) {
            let thrown = core::mem::replace(&mut self.cards[position], replacement);
            supply.return_card(thrown);
        }

        sort(&mut self.cards);
        Ok(picks.len())
    }

    /// Returns every card to `supply`, ending the hand.
    pub fn release<S: CardSupply + ?Sized>(self, supply: &S) {
        for card in self.cards {
            supply.return_card(card);
        }
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidSize { found: cards.len() })?;
        Self::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

fn sort(cards: &mut [Card; HAND_SIZE]) {
    cards.sort_by_key(|card| Reverse(card.rank));
}

/// Draws `count` cards, or none at all if the supply runs dry.
fn draw<S: CardSupply + ?Sized>(supply: &S, count: usize) -> Option<Vec<Card>> {
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(card) = supply.deal_next() {
            drawn.push(card);
        } else {
            warn!("card supply exhausted after {} of {count} cards", drawn.len());
            for card in drawn {
                supply.return_card(card);
            }
            return None;
        }
    }
    Some(drawn)
}
