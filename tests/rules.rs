//! Shoe, scoring, outcome and timing rule tests.

#![allow(clippy::float_cmp)]

use bjtable::card::ACE;
use bjtable::sequencer::INITIAL_DEAL;
use bjtable::{
    Card, CardAnimation, DECK_SIZE, DealEvent, DealSequencer, Easing, Hand, Outcome, RoundResult,
    Seat, Shoe, TableOptions, compute_score,
};

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().copied().map(Card::new).collect()
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new(Seat::Player);
    for &rank in ranks {
        hand.add_card(Card::new(rank));
    }
    hand
}

#[test]
fn card_base_values() {
    assert_eq!(Card::new(ACE).base_value(), 11);
    assert_eq!(Card::new(2).base_value(), 2);
    assert_eq!(Card::new(10).base_value(), 10);
    assert_eq!(Card::new(11).base_value(), 10);
    assert_eq!(Card::new(12).base_value(), 10);
    assert_eq!(Card::new(13).base_value(), 10);
    assert_eq!(Card::new(13).label(), "K");
    assert!(Card::new(ACE).is_ace());
}

#[test]
fn two_aces_score_twelve() {
    let score = compute_score(&cards(&[1, 1]), None);
    assert_eq!(score.total, 12);
    assert_eq!(score.reduced_ace, Some(0));

    let hand = hand_of(&[1, 1]);
    assert_eq!(hand.score(), 12);
    assert!(!hand.is_bust());
    assert!(hand.is_soft());
    assert_eq!(hand.effective_value(0), Some(1));
    assert_eq!(hand.effective_value(1), Some(11));
}

#[test]
fn ace_and_ten_is_blackjack() {
    let hand = hand_of(&[1, 13]);
    assert_eq!(hand.score(), 21);
    assert!(hand.is_blackjack());
    assert_eq!(hand.reduced_ace(), None);
}

#[test]
fn no_reduction_at_or_below_twenty_one() {
    let score = compute_score(&cards(&[1, 5, 5]), None);
    assert_eq!(score.total, 21);
    assert_eq!(score.reduced_ace, None);
}

#[test]
fn only_one_ace_is_ever_reduced() {
    let score = compute_score(&cards(&[1, 1, 13]), None);
    assert_eq!(score.total, 22);
    assert_eq!(score.reduced_ace, Some(0));

    let mut hand = hand_of(&[1, 5]);
    assert_eq!(hand.score(), 16);

    hand.add_card(Card::new(13));
    assert_eq!(hand.score(), 16);
    assert_eq!(hand.reduced_ace(), Some(0));
    assert!(!hand.is_soft());

    // A second ace counts 11 and the hand stays bust.
    hand.add_card(Card::new(ACE));
    assert_eq!(hand.score(), 27);
    assert!(hand.is_bust());
    assert_eq!(hand.reduced_ace(), Some(0));
}

#[test]
fn reduction_targets_first_ace_in_hand_order() {
    let mut hand = hand_of(&[13, 1]);
    assert_eq!(hand.score(), 21);

    hand.add_card(Card::new(5));
    assert_eq!(hand.score(), 16);
    assert_eq!(hand.reduced_ace(), Some(1));
}

#[test]
fn bust_without_ace_stays_bust() {
    let hand = hand_of(&[10, 9, 5]);
    assert_eq!(hand.score(), 24);
    assert!(hand.is_bust());
    assert_eq!(hand.reduced_ace(), None);
}

#[test]
fn hand_clear_restores_empty_active_hand() {
    let mut hand = hand_of(&[1, 13, 5]);
    hand.deactivate();
    hand.clear();

    assert!(hand.is_empty());
    assert!(hand.is_active());
    assert_eq!(hand.score(), 0);
    assert_eq!(hand.reduced_ace(), None);
}

#[test]
fn shoe_draws_count_down_then_reshuffle() {
    let mut shoe = Shoe::new(6, 3);
    assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
    assert_eq!(shoe.remaining(), 312);

    for drawn in 1..=312 {
        shoe.draw();
        assert_eq!(shoe.remaining(), 312 - drawn);
    }
    assert_eq!(shoe.reshuffles(), 0);

    // Exhausted: the next draw reshuffles instead of failing.
    shoe.draw();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.remaining(), 311);

    shoe.reshuffle();
    assert_eq!(shoe.remaining(), 312);
}

#[test]
fn zero_deck_shoe_holds_one_deck() {
    let mut shoe = Shoe::new(0, 3);
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.remaining(), DECK_SIZE);

    for _ in 0..=DECK_SIZE {
        shoe.draw();
    }
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);

    let mut stacked = Shoe::from_ranks(0, 3, &[5]);
    assert_eq!(stacked.draw(), Card::new(5));
    stacked.draw();
    assert_eq!(stacked.reshuffles(), 1);
    assert_eq!(stacked.remaining(), DECK_SIZE - 1);
}

#[test]
fn shoe_holds_twenty_four_of_each_rank() {
    let mut shoe = Shoe::new(6, 11);
    let mut counts = [0usize; 14];
    for _ in 0..shoe.len() {
        counts[shoe.draw().rank as usize] += 1;
    }

    assert_eq!(counts[0], 0);
    for count in &counts[1..] {
        assert_eq!(*count, 24);
    }
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(6, 99);
    let mut b = Shoe::new(6, 99);
    for _ in 0..50 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn stacked_shoe_deals_in_order_then_regenerates() {
    let mut shoe = Shoe::from_ranks(1, 5, &[1, 13, 7]);
    assert_eq!(shoe.remaining(), 3);

    assert_eq!(shoe.draw(), Card::new(1));
    assert_eq!(shoe.draw(), Card::new(13));
    assert_eq!(shoe.draw(), Card::new(7));
    assert_eq!(shoe.remaining(), 0);

    shoe.draw();
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);
}

#[test]
fn reshuffle_threshold() {
    let mut shoe = Shoe::from_ranks(6, 1, &[2; 19]);
    assert!(shoe.needs_reshuffle(20));
    assert!(shoe.check_and_reshuffle(20));
    assert_eq!(shoe.remaining(), 312);
    assert!(!shoe.check_and_reshuffle(20));
}

#[test]
fn outcome_ordering() {
    assert_eq!(Outcome::evaluate(22, 25), Outcome::Lose);
    assert_eq!(Outcome::evaluate(22, 18), Outcome::Lose);
    assert_eq!(Outcome::evaluate(20, 22), Outcome::Win);
    assert_eq!(Outcome::evaluate(18, 20), Outcome::Lose);
    assert_eq!(Outcome::evaluate(20, 18), Outcome::Win);
    assert_eq!(Outcome::evaluate(19, 19), Outcome::Push);
}

#[test]
fn outcome_messages() {
    assert_eq!(
        RoundResult::new(20, 22).message(),
        "You won! Your score: 20 | Dealer: 22"
    );
    assert_eq!(
        RoundResult::new(23, 17).message(),
        "You lost! Your score: 23 | Dealer: 17"
    );
    assert_eq!(RoundResult::new(18, 18).message(), "Push! It's a tie at 18");
}

#[test]
fn animation_progress_and_easing() {
    let animation = CardAnimation::new(1_000, 500, Easing::EaseOutCubic);

    assert_eq!(animation.progress(900), 0.0);
    assert_eq!(animation.progress(1_000), 0.0);
    assert_eq!(animation.progress(1_250), 0.5);
    assert_eq!(animation.eased_progress(1_250), 0.875);
    assert_eq!(animation.interpolate(0.0, 100.0, 1_250), 87.5);
    assert_eq!(animation.progress_with(1_250, |t| t * t), 0.25);
    assert!(!animation.is_complete(1_499));
    assert!(animation.is_complete(1_500));
    assert_eq!(animation.progress(2_000), 1.0);

    let linear = CardAnimation::new(0, 400, Easing::Linear);
    assert_eq!(linear.eased_progress(100), 0.25);

    let instant = CardAnimation::new(0, 0, Easing::Linear);
    assert_eq!(instant.progress(0), 1.0);
}

#[test]
fn sequencer_dispatches_in_order_when_due() {
    let options = TableOptions::default();
    let mut sequencer = DealSequencer::new();
    sequencer.schedule_initial_deal(0, &options);
    assert_eq!(sequencer.pending(), 5);
    assert!(sequencer.has_pending_deal_for(Seat::Player));

    assert_eq!(sequencer.pop_due(399), None);

    let mut dispatched = Vec::new();
    while let Some(next) = sequencer.pop_due(10_000) {
        dispatched.push((next.due, next.event));
    }

    let mut expected: Vec<_> = INITIAL_DEAL
        .iter()
        .zip([400, 800, 1_200, 1_600])
        .map(|(&seat, due)| (due, DealEvent::Deal(seat)))
        .collect();
    expected.push((2_200, DealEvent::InitialSettle));
    assert_eq!(dispatched, expected);
    assert!(!sequencer.in_flight());
}

#[test]
fn sequencer_chains_after_last_pending_event() {
    let mut sequencer = DealSequencer::new();
    assert_eq!(sequencer.after(100, 50, DealEvent::HitSettle), 150);
    assert_eq!(sequencer.after(100, 50, DealEvent::DealerDraw), 200);
    assert_eq!(sequencer.next_due(), Some(150));

    assert_eq!(sequencer.cancel_all(), 2);
    assert_eq!(sequencer.next_due(), None);
    assert_eq!(sequencer.after(300, 50, DealEvent::HitSettle), 350);
}

#[test]
fn deal_one_reports_slot_and_animation() {
    let options = TableOptions::default();
    let sequencer = DealSequencer::new();
    let mut shoe = Shoe::from_ranks(6, 1, &[9, 4]);
    let mut hand = Hand::new(Seat::Dealer);

    let first = sequencer.deal_one(&mut shoe, &mut hand, 400, &options);
    let second = sequencer.deal_one(&mut shoe, &mut hand, 800, &options);

    assert_eq!(first.seat, Seat::Dealer);
    assert_eq!((first.card_index, first.total_cards), (0, 1));
    assert_eq!((second.card_index, second.total_cards), (1, 2));
    assert_eq!(second.card, Card::new(4));
    assert_eq!(second.score, 13);
    assert_eq!(second.animation.started_at, 800);
    assert_eq!(second.animation.ends_at(), 1_300);
    assert_eq!(hand.score(), 13);
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_decks(4)
        .with_reshuffle_threshold(30)
        .with_deal_delay(200)
        .with_animation_duration(300)
        .with_settle_buffer(20)
        .with_hit_settle_buffer(10)
        .with_dealer_stands_on(17)
        .with_easing(Easing::Linear);

    assert_eq!(options.decks, 4);
    assert_eq!(options.reshuffle_threshold, 30);
    assert_eq!(options.deal_delay, 200);
    assert_eq!(options.animation_duration, 300);
    assert_eq!(options.settle_delay(), 320);
    assert_eq!(options.hit_settle_delay(), 310);
    assert_eq!(options.dealer_draw_delay(), 500);
    assert_eq!(options.dealer_stands_on, 17);
    assert_eq!(options.easing, Easing::Linear);
}
