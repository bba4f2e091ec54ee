//! Hand categories and the classifier.

use core::fmt;

use crate::card::{Card, Rank};
use crate::hand::HAND_SIZE;

/// The category of a five-card hand, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// No pair, no draw made.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks in mixed suits.
    Straight,
    /// Five cards of one suit that do not form a run.
    Flush,
    /// Three of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A run in one suit, below ace high.
    StraightFlush,
    /// The ace-high straight flush.
    RoyalFlush,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Zero-based tier of the category; higher tiers beat lower ones.
    #[must_use]
    pub const fn tier(self) -> u32 {
        self as u32
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The distinct ranks of a hand with their multiplicity.
///
/// Groups are ordered by count, then by rank, both descending, so the
/// primary group of any made hand comes first and kickers follow from the
/// highest down.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankGroups {
    groups: [(Rank, u8); HAND_SIZE],
    len: usize,
}

impl RankGroups {
    pub(crate) fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut groups = [(Rank::Two, 0); HAND_SIZE];
        let mut len = 0;

        for card in cards {
            let seen = groups[..len].iter_mut().find(|(rank, _)| *rank == card.rank);
            if let Some((_, count)) = seen {
                *count += 1;
            } else {
                groups[len] = (card.rank, 1);
                len += 1;
            }
        }

        groups[..len].sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups, len }
    }

    /// Group sizes, largest first, padded with zeros.
    pub(crate) fn shape(&self) -> [u8; HAND_SIZE] {
        let mut shape = [0; HAND_SIZE];
        for (slot, (_, count)) in shape.iter_mut().zip(&self.groups[..self.len]) {
            *slot = *count;
        }
        shape
    }

    /// Ranks of the groups in order.
    pub(crate) fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.groups[..self.len].iter().map(|(rank, _)| *rank)
    }

    /// Rank of the `n`th group.
    pub(crate) const fn rank(&self, n: usize) -> Rank {
        self.groups[n].0
    }

    /// How many cards of `rank` the hand holds.
    pub(crate) fn count_of(&self, rank: Rank) -> u8 {
        self.groups[..self.len]
            .iter()
            .find(|(r, _)| *r == rank)
            .map_or(0, |(_, count)| *count)
    }
}

/// Whether the sorted cards form the wheel, `A-5-4-3-2`.
pub(crate) fn is_ace_low_run(cards: &[Card; HAND_SIZE]) -> bool {
    cards[0].rank == Rank::Ace && cards[4].rank == Rank::Two && is_run(cards)
}

/// Whether the sorted cards have five consecutive game values.
///
/// `A,5,4,3,2` counts, with the ace playing low.
pub(crate) fn is_run(cards: &[Card; HAND_SIZE]) -> bool {
    let steps_of_one = |cards: &[Card]| cards.windows(2).all(|w| w[0].value() == w[1].value() + 1);

    if cards[0].rank == Rank::Ace && cards[4].rank == Rank::Two {
        steps_of_one(&cards[1..])
    } else {
        steps_of_one(&cards[..])
    }
}

/// Whether all cards share one suit.
pub(crate) fn is_same_suit(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|card| card.suit == cards[0].suit)
}

/// Classifies cards sorted by rank, highest first.
pub(crate) fn classify(cards: &[Card; HAND_SIZE], groups: &RankGroups) -> Category {
    let run = is_run(cards);
    let suited = is_same_suit(cards);
    let ace_high = cards[0].rank == Rank::Ace && cards[1].rank == Rank::King;

    match (run, suited, groups.shape()) {
        (true, true, _) if ace_high => Category::RoyalFlush,
        (true, true, _) => Category::StraightFlush,
        (_, _, [4, 1, ..]) => Category::FourOfAKind,
        (_, _, [3, 2, ..]) => Category::FullHouse,
        (false, true, _) => Category::Flush,
        (true, false, _) => Category::Straight,
        (_, _, [3, 1, 1, ..]) => Category::ThreeOfAKind,
        (_, _, [2, 2, 1, ..]) => Category::TwoPair,
        (_, _, [2, 1, 1, 1, _]) => Category::OnePair,
        _ => Category::HighCard,
    }
}
