//! The card supply hands draw from and return cards to.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, trace};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::sync::Mutex;

/// A source of cards shared by one or more hands.
///
/// All methods take `&self`; an implementation shared between threads is
/// responsible for its own locking.
pub trait CardSupply {
    /// Removes and returns the top card, or `None` when the supply is
    /// exhausted.
    fn deal_next(&self) -> Option<Card>;

    /// Puts a previously dealt card back into the supply.
    fn return_card(&self, card: Card);

    /// Recreates a full, freshly shuffled supply.
    fn reset(&self);
}

struct DeckState {
    cards: VecDeque<Card>,
    dealt: usize,
    rng: ChaCha8Rng,
}

impl DeckState {
    fn refill(&mut self) {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(&mut self.rng);
        self.cards = VecDeque::from(cards);
        self.dealt = 0;
    }
}

/// A standard 52-card deck shuffled by a seeded generator.
///
/// Cards are dealt from the top and returned to the bottom. At most
/// [`DECK_SIZE`] cards are dealt between resets, even when some of them
/// have been returned in the meantime.
///
/// ```
/// use drawpoker::{CardSupply, DECK_SIZE, Deck};
///
/// let deck = Deck::new(7);
/// let card = deck.deal_next().unwrap();
/// assert_eq!(deck.remaining(), DECK_SIZE - 1);
/// deck.return_card(card);
/// assert_eq!(deck.remaining(), DECK_SIZE);
/// ```
pub struct Deck {
    state: Mutex<DeckState>,
}

impl Deck {
    /// Creates a shuffled deck using the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut state = DeckState {
            cards: VecDeque::with_capacity(DECK_SIZE),
            dealt: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        state.refill();

        Self {
            state: Mutex::new(state),
        }
    }

    /// Returns the number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.state.with(|state| state.cards.len())
    }

    /// Returns the number of cards dealt since the last reset.
    pub fn dealt(&self) -> usize {
        self.state.with(|state| state.dealt)
    }
}

impl CardSupply for Deck {
    fn deal_next(&self) -> Option<Card> {
        self.state.with(|state| {
            if state.dealt >= DECK_SIZE {
                return None;
            }

            let card = state.cards.pop_front()?;
            state.dealt += 1;
            trace!("dealt {card}, {} left", state.cards.len());
            Some(card)
        })
    }

    fn return_card(&self, card: Card) {
        self.state.with(|state| state.cards.push_back(card));
    }

    fn reset(&self) {
        self.state.with(DeckState::refill);
        debug!("deck reset and shuffled");
    }
}
