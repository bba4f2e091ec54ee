//! Hand values for total ordering.
//!
//! A value is `tier * TIER_SPACING + tie_break`. Every tie-break stays well
//! under the spacing (the largest, an ace-king high card, is 568,248), so a
//! hand of a higher category always outranks any hand of a lower one.

use crate::card::{Card, Rank};
use crate::category::{Category, RankGroups, is_ace_low_run};
use crate::hand::HAND_SIZE;

const TIER_SPACING: u32 = 1_000_000;

/// Tie-break shared by every royal flush.
const ROYAL_FLUSH_BONUS: u32 = 10_000;

/// High card of the wheel. The ace plays low, under a six-high straight.
const ACE_LOW_HIGH_CARD: u32 = 4;

fn pow(rank: Rank, exp: u32) -> u32 {
    u32::from(rank.value()).pow(exp)
}

/// Highest cards weighted by falling powers, plus the top card once more.
fn by_position(cards: &[Card; HAND_SIZE]) -> u32 {
    pow(cards[0].rank, 5)
        + pow(cards[1].rank, 4)
        + pow(cards[2].rank, 3)
        + pow(cards[3].rank, 2)
        + pow(cards[0].rank, 1)
}

fn straight_high(cards: &[Card; HAND_SIZE]) -> u32 {
    if is_ace_low_run(cards) {
        ACE_LOW_HIGH_CARD
    } else {
        u32::from(cards[0].value())
    }
}

/// Computes the value of sorted cards already classified as `category`.
pub fn hand_value(
    cards: &[Card; HAND_SIZE],
    groups: &RankGroups,
    category: Category,
) -> u32 {
    let tie_break = match category {
        Category::HighCard | Category::Flush => by_position(cards),
        // Pair first, then the three kickers from the highest down.
        Category::OnePair => groups
            .ranks()
            .zip([5, 3, 2, 1])
            .map(|(rank, exp)| pow(rank, exp))
            .sum(),
        Category::TwoPair => {
            pow(groups.rank(0), 4) + pow(groups.rank(1), 3) + pow(groups.rank(2), 1)
        }
        Category::ThreeOfAKind | Category::FourOfAKind => pow(groups.rank(0), 1),
        Category::Straight | Category::StraightFlush => straight_high(cards),
        Category::FullHouse => pow(groups.rank(0), 3) + pow(groups.rank(1), 2),
        Category::RoyalFlush => ROYAL_FLUSH_BONUS,
    };

    category.tier() * TIER_SPACING + tie_break
}
