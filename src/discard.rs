//! Discard advice for five-card draw.
//!
//! Every card gets a discard likelihood in percent. Made hands of a
//! straight or better are always held; weaker hands throw kickers or the
//! cards that spoil a flush or straight draw.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::category::{Category, RankGroups};
use crate::hand::HAND_SIZE;
use crate::options::DiscardOptions;

/// The suit with the most cards when it holds two to four of them.
///
/// Ties go to the suit of the higher card.
pub fn suit_frequency(cards: &[Card; HAND_SIZE]) -> Option<(Suit, u8)> {
    let mut counts = [0u8; 4];
    for card in cards {
        counts[card.suit.index()] += 1;
    }

    let mut best: Option<(Suit, u8)> = None;
    for card in cards {
        let count = counts[card.suit.index()];
        if best.is_none_or(|(_, most)| count > most) {
            best = Some((card.suit, count));
        }
    }

    best.filter(|(_, count)| (2..=4).contains(count))
}

/// The closest straight a hand can draw to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightDraw {
    /// 0 for a made straight up to 4 for no straight draw at all.
    pub proximity: u8,
    /// Cards that do not fit the target straight.
    pub outside: [bool; HAND_SIZE],
}

/// Game value of `card` within the run starting at `low`, if it fits.
fn run_slot(card: &Card, low: u8) -> Option<u8> {
    let value = if low == 1 && card.rank == Rank::Ace {
        1
    } else {
        card.value()
    };
    (low..low + 5).contains(&value).then_some(value)
}

/// Scores every five-rank run, from `10-A` down to `A-5`, by how many of
/// its ranks the hand is missing and keeps the closest one.
pub fn straight_draw(cards: &[Card; HAND_SIZE]) -> StraightDraw {
    let mut best = StraightDraw {
        proximity: 4,
        outside: [true; HAND_SIZE],
    };

    for low in (1..=10u8).rev() {
        let mut seen = 0u16;
        let mut outside = [true; HAND_SIZE];

        for (slot, card) in outside.iter_mut().zip(cards) {
            if let Some(value) = run_slot(card, low) {
                if seen & (1 << value) == 0 {
                    seen |= 1 << value;
                    *slot = false;
                }
            }
        }

        let hits = seen.count_ones() as u8;
        // A,2,3 / A,2,4 / A,3,4: the wheel needs only the five and one more.
        let missing = if low == 1 && hits == 3 && seen & (1 << 1) != 0 && seen & (1 << 5) == 0 {
            1
        } else {
            5 - hits
        };

        if missing < best.proximity {
            best = StraightDraw {
                proximity: missing,
                outside,
            };
        }
    }

    best
}

fn mark_off_suit(cards: &[Card; HAND_SIZE], suit: Suit, score: u8, scores: &mut [u8; HAND_SIZE]) {
    for (slot, card) in scores.iter_mut().zip(cards) {
        if card.suit != suit {
            *slot = score;
        }
    }
}

fn high_card(cards: &[Card; HAND_SIZE], options: &DiscardOptions, scores: &mut [u8; HAND_SIZE]) {
    let draw = straight_draw(cards);

    match suit_frequency(cards) {
        Some((suit, 4)) => mark_off_suit(cards, suit, options.certain, scores),
        Some((suit, 3)) => mark_off_suit(cards, suit, options.three_flush, scores),
        _ if draw.proximity <= 2 => {
            let severity = if draw.proximity <= 1 {
                options.one_away
            } else {
                options.two_away
            };
            for (slot, outside) in scores.iter_mut().zip(draw.outside) {
                if outside {
                    *slot = severity;
                }
            }
        }
        Some((suit, _)) => mark_off_suit(cards, suit, options.two_flush, scores),
        None => {
            scores[HAND_SIZE - 1] = options.dead_hand;
            scores[HAND_SIZE - 2] = options.dead_hand;
        }
    }
}

fn one_pair(
    cards: &[Card; HAND_SIZE],
    groups: &RankGroups,
    options: &DiscardOptions,
    scores: &mut [u8; HAND_SIZE],
) {
    if let Some((suit, 4)) = suit_frequency(cards) {
        mark_off_suit(cards, suit, options.certain, scores);
        return;
    }

    let mut kickers = (0..HAND_SIZE).filter(|&i| groups.count_of(cards[i].rank) == 1);
    let (Some(high), Some(mid), Some(low)) = (kickers.next(), kickers.next(), kickers.next())
    else {
        return;
    };

    scores[low] = options.low_kicker;
    scores[mid] = options.mid_kicker;
    if cards[high].rank < options.weak_kicker_below {
        scores[high] = options.certain;
    }
}

/// Discard likelihood for each card of a sorted, classified hand.
pub fn discard_scores(
    cards: &[Card; HAND_SIZE],
    groups: &RankGroups,
    category: Category,
    options: &DiscardOptions,
) -> [u8; HAND_SIZE] {
    let mut scores = [0; HAND_SIZE];

    match category {
        Category::HighCard => high_card(cards, options, &mut scores),
        Category::OnePair => one_pair(cards, groups, options, &mut scores),
        // Kickers can only improve these, the grouped cards stay.
        Category::TwoPair | Category::ThreeOfAKind | Category::FourOfAKind => {
            for (slot, card) in scores.iter_mut().zip(cards) {
                if groups.count_of(card.rank) == 1 {
                    *slot = options.certain;
                }
            }
        }
        Category::Straight
        | Category::Flush
        | Category::FullHouse
        | Category::StraightFlush
        | Category::RoyalFlush => {}
    }

    scores
}

/// Positions to throw: the highest non-zero scores, at most `max` of them.
///
/// Equal scores are taken from the lowest ranked card upward.
pub fn pick_discards(scores: &[u8; HAND_SIZE], max: usize) -> Vec<usize> {
    let mut picks: Vec<usize> = (0..HAND_SIZE).rev().filter(|&i| scores[i] > 0).collect();
    picks.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    picks.truncate(max);
    picks
}
