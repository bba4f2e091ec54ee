//! Helpers shared by the integration tests.

#![allow(dead_code)]

use core::cell::RefCell;

use drawpoker::{Card, CardSupply, Hand};

/// Parses a space separated list such as `"AS KH 10D 4C 2C"`.
pub fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace()
        .map(|c| c.parse().expect("valid card"))
        .collect()
}

/// Builds a hand from text.
pub fn hand(text: &str) -> Hand {
    Hand::try_from(cards(text).as_slice()).expect("valid hand")
}

/// A supply that deals a fixed list of cards in order and records every
/// card handed back.
pub struct Stack {
    pub cards: RefCell<Vec<Card>>,
    pub returned: RefCell<Vec<Card>>,
}

impl Stack {
    pub fn new(text: &str) -> Self {
        Self {
            cards: RefCell::new(cards(text)),
            returned: RefCell::new(Vec::new()),
        }
    }
}

impl CardSupply for Stack {
    fn deal_next(&self) -> Option<Card> {
        let mut cards = self.cards.borrow_mut();
        if cards.is_empty() {
            None
        } else {
            Some(cards.remove(0))
        }
    }

    fn return_card(&self, card: Card) {
        self.returned.borrow_mut().push(card);
    }

    fn reset(&self) {}
}
