//! Discard advisor tuning.

use crate::card::Rank;

/// Most cards a hand may replace in one draw.
pub const MAX_DISCARDS: usize = 3;

/// Scores and limits used by the discard advisor.
///
/// Scores are discard likelihoods in percent (0 keeps a card, 100 always
/// throws it). Use the builder methods to customize them:
///
/// ```
/// use drawpoker::{DiscardOptions, Rank};
///
/// let options = DiscardOptions::default()
///     .with_max_discards(2)
///     .with_weak_kicker_below(Rank::Nine);
/// assert_eq!(options.max_discards, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscardOptions {
    /// Score for a card that is always thrown (the odd card of a
    /// four-flush, kickers next to trips or better, weak pair kickers).
    pub certain: u8,
    /// Score for each off-suit card next to a three-card flush draw.
    pub three_flush: u8,
    /// Score for each off-suit card next to a two-card flush draw.
    pub two_flush: u8,
    /// Score for the card breaking a straight that is one card away.
    pub one_away: u8,
    /// Score for the cards breaking a straight that is two cards away.
    pub two_away: u8,
    /// Score for the two lowest cards of a hand with no live draw.
    pub dead_hand: u8,
    /// Score for the lowest kicker of a single pair.
    pub low_kicker: u8,
    /// Score for the middle kicker of a single pair.
    pub mid_kicker: u8,
    /// The highest pair kicker is thrown too when it ranks below this.
    pub weak_kicker_below: Rank,
    /// Maximum number of cards replaced in one draw, never above
    /// [`MAX_DISCARDS`].
    pub max_discards: usize,
}

impl Default for DiscardOptions {
    fn default() -> Self {
        Self {
            certain: 100,
            three_flush: 50,
            two_flush: 33,
            one_away: 80,
            two_away: 50,
            dead_hand: 50,
            low_kicker: 75,
            mid_kicker: 50,
            weak_kicker_below: Rank::Eight,
            max_discards: MAX_DISCARDS,
        }
    }
}

impl DiscardOptions {
    /// Sets the score for cards that are always thrown.
    #[must_use]
    pub const fn with_certain(mut self, score: u8) -> Self {
        self.certain = score;
        self
    }

    /// Sets the score for off-suit cards next to a three-card flush draw.
    #[must_use]
    pub const fn with_three_flush(mut self, score: u8) -> Self {
        self.three_flush = score;
        self
    }

    /// Sets the score for off-suit cards next to a two-card flush draw.
    #[must_use]
    pub const fn with_two_flush(mut self, score: u8) -> Self {
        self.two_flush = score;
        self
    }

    /// Sets the score for the card breaking a one-away straight.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::DiscardOptions;
    ///
    /// let options = DiscardOptions::default().with_one_away(90);
    /// assert_eq!(options.one_away, 90);
    /// ```
    #[must_use]
    pub const fn with_one_away(mut self, score: u8) -> Self {
        self.one_away = score;
        self
    }

    /// Sets the score for the cards breaking a two-away straight.
    #[must_use]
    pub const fn with_two_away(mut self, score: u8) -> Self {
        self.two_away = score;
        self
    }

    /// Sets the score for the two lowest cards of a dead hand.
    #[must_use]
    pub const fn with_dead_hand(mut self, score: u8) -> Self {
        self.dead_hand = score;
        self
    }

    /// Sets the score for the lowest kicker of a single pair.
    #[must_use]
    pub const fn with_low_kicker(mut self, score: u8) -> Self {
        self.low_kicker = score;
        self
    }

    /// Sets the score for the middle kicker of a single pair.
    #[must_use]
    pub const fn with_mid_kicker(mut self, score: u8) -> Self {
        self.mid_kicker = score;
        self
    }

    /// Sets the rank below which the top pair kicker is thrown as well.
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::{DiscardOptions, Rank};
    ///
    /// let options = DiscardOptions::default().with_weak_kicker_below(Rank::Ten);
    /// assert_eq!(options.weak_kicker_below, Rank::Ten);
    /// ```
    #[must_use]
    pub const fn with_weak_kicker_below(mut self, rank: Rank) -> Self {
        self.weak_kicker_below = rank;
        self
    }

    /// Sets the maximum number of cards replaced in one draw, capped at
    /// [`MAX_DISCARDS`].
    ///
    /// # Example
    ///
    /// ```
    /// use drawpoker::{DiscardOptions, MAX_DISCARDS};
    ///
    /// let options = DiscardOptions::default().with_max_discards(2);
    /// assert_eq!(options.max_discards, 2);
    ///
    /// let options = DiscardOptions::default().with_max_discards(5);
    /// assert_eq!(options.max_discards, MAX_DISCARDS);
    /// ```
    #[must_use]
    pub const fn with_max_discards(mut self, max: usize) -> Self {
        self.max_discards = if max > MAX_DISCARDS { MAX_DISCARDS } else { max };
        self
    }
}
