//! Deck integration tests.

use std::collections::HashSet;
use std::thread;

use drawpoker::{Card, CardSupply, DECK_SIZE, DealError, Deck, HAND_SIZE, Hand};

fn deal_all(deck: &Deck) -> Vec<Card> {
    core::iter::from_fn(|| deck.deal_next()).collect()
}

#[test]
fn deck_deals_every_card_once() {
    let deck = Deck::new(1);
    let cards = deal_all(&deck);

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards.iter().collect::<HashSet<_>>().len(), DECK_SIZE);
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.dealt(), DECK_SIZE);
    assert_eq!(deck.deal_next(), None);
}

#[test]
fn returned_cards_wait_for_reset_once_quota_is_dealt() {
    let deck = Deck::new(2);
    for card in deal_all(&deck) {
        deck.return_card(card);
    }

    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.deal_next(), None);
    assert_eq!(deck.deal_next(), None);

    deck.reset();
    assert_eq!(deck.dealt(), 0);
    assert!(deck.deal_next().is_some());
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
}

#[test]
fn returned_cards_go_to_the_bottom() {
    let deck = Deck::new(3);
    let first = deck.deal_next().unwrap();
    deck.return_card(first);

    // The quota allows 51 more cards, so the bottom card is never reached.
    let rest = deal_all(&deck);
    assert_eq!(rest.len(), DECK_SIZE - 1);
    assert!(!rest.contains(&first));
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn same_seed_same_order() {
    let a = deal_all(&Deck::new(42));
    let b = deal_all(&Deck::new(42));
    let c = deal_all(&Deck::new(43));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn ten_hands_share_one_deck() {
    let deck = Deck::new(9);
    let hands: Vec<Hand> = (0..10).map(|_| Hand::deal(&deck).unwrap()).collect();

    let seen: HashSet<Card> = hands.iter().flat_map(|h| h.cards().iter().copied()).collect();
    assert_eq!(seen.len(), 10 * HAND_SIZE);
    assert_eq!(deck.remaining(), DECK_SIZE - 10 * HAND_SIZE);

    assert_eq!(Hand::deal(&deck), Err(DealError::SupplyExhausted));
    assert_eq!(deck.remaining(), DECK_SIZE - 10 * HAND_SIZE);

    for hand in hands {
        hand.release(&deck);
    }
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn discard_keeps_the_card_count() {
    let deck = Deck::new(5);
    for _ in 0..20 {
        deck.reset();
        let mut hand = Hand::deal(&deck).unwrap();
        let thrown = hand.discard(&deck).unwrap();

        assert!(thrown <= 3);
        assert_eq!(deck.dealt(), HAND_SIZE + thrown);
        assert_eq!(deck.remaining(), DECK_SIZE - HAND_SIZE);
        assert!(hand.cards().windows(2).all(|w| w[0].rank >= w[1].rank));
    }
}

#[test]
fn hands_deal_concurrently_from_one_deck() {
    let deck = Deck::new(11);
    let hands: Vec<Hand> = thread::scope(|s| {
        let workers: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (0..2).map(|_| Hand::deal(&deck).unwrap()).collect::<Vec<_>>()))
            .collect();
        workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect()
    });

    let seen: HashSet<Card> = hands.iter().flat_map(|h| h.cards().iter().copied()).collect();
    assert_eq!(seen.len(), 8 * HAND_SIZE);
    assert_eq!(deck.remaining(), DECK_SIZE - 8 * HAND_SIZE);
}
