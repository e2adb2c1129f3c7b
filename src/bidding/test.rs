use super::*;
use crate::card::Rank;
use crate::deal::SmallSet as _;
use core::str::FromStr as _;

const UP_CARD: Card = Card::new(Suit::Hearts, Rank::Nine);

fn pass_round(bidder: &mut Bidder) -> Vec<Transition> {
    (0..4)
        .map(|_| bidder.submit(BidChoice::Pass).expect("Passing is legal"))
        .collect()
}

#[test]
fn test_round_one_order_of_offers() {
    let mut bidder = Bidder::new(Seat::West, UP_CARD, false);
    let mut seats = Vec::new();

    while let Some(Turn { seat, offer }) = bidder.turn() {
        assert_eq!(offer, Offer::OrderUp { up_card: UP_CARD });
        assert_eq!(offer.suits().collect::<Vec<_>>(), [Suit::Hearts]);
        assert!(offer.may_pass());
        seats.push(seat);

        if bidder.submit(BidChoice::Pass) == Ok(Transition::TurnedDown(UP_CARD)) {
            break;
        }
    }

    assert_eq!(seats, [Seat::North, Seat::East, Seat::South, Seat::West]);
}

#[test]
fn test_order_up_requires_a_discard() {
    let mut bidder = Bidder::new(Seat::North, UP_CARD, false);
    assert_eq!(bidder.submit(BidChoice::Pass), Ok(Transition::Pending));

    let expected = Bid::new(Suit::Hearts, Seat::South, true);
    assert_eq!(
        bidder.submit(BidChoice::OrderUp { alone: true }),
        Ok(Transition::PickUp(expected))
    );
    assert_eq!(bidder.turn(), None);
    assert_eq!(bidder.pending_discard(), Some(expected));
    assert_eq!(
        bidder.submit(BidChoice::Pass),
        Err(IllegalBid::OutOfTurn)
    );

    let mut hand = Hand::from_str("AJ.T..KQ").expect("Valid hand");
    hand.insert(UP_CARD);
    let ace = Card::new(Suit::Diamonds, Rank::Ace);
    assert_eq!(
        bidder.discard(&mut hand, ace),
        Err(IllegalBid::DiscardNotHeld(ace))
    );
    assert_eq!(hand.len(), 6);

    let king = Card::new(Suit::Clubs, Rank::King);
    assert_eq!(bidder.discard(&mut hand, king), Ok(expected));
    assert_eq!(hand.len(), 5);
    assert!(hand.contains(UP_CARD));
    assert_eq!(bidder.pending_discard(), None);
    assert_eq!(bidder.discard(&mut hand, UP_CARD), Err(IllegalBid::OutOfTurn));
}

#[test]
fn test_round_one_rejects_naming() {
    let mut bidder = Bidder::new(Seat::North, UP_CARD, false);
    let choice = BidChoice::Name {
        suit: Suit::Spades,
        alone: false,
    };
    assert_eq!(bidder.submit(choice), Err(IllegalBid::NameInRoundOne));
    assert_eq!(bidder.turn().map(|turn| turn.seat), Some(Seat::East));
}

#[test]
fn test_round_two_never_offers_the_turned_down_suit() {
    let mut bidder = Bidder::new(Seat::East, UP_CARD, false);
    let transitions = pass_round(&mut bidder);
    assert_eq!(transitions.last(), Some(&Transition::TurnedDown(UP_CARD)));

    let Some(Turn { seat, offer }) = bidder.turn() else {
        panic!("Round two has begun");
    };
    assert_eq!(seat, Seat::South);
    assert!(!offer.suits().any(|suit| suit == Suit::Hearts));
    assert_eq!(offer.suits().count(), 3);

    assert_eq!(
        bidder.submit(BidChoice::OrderUp { alone: false }),
        Err(IllegalBid::OrderUpInRoundTwo)
    );
    assert_eq!(
        bidder.submit(BidChoice::Name {
            suit: Suit::Hearts,
            alone: false
        }),
        Err(IllegalBid::ForbiddenSuit(Suit::Hearts))
    );
    assert_eq!(
        bidder.submit(BidChoice::Name {
            suit: Suit::Diamonds,
            alone: false
        }),
        Ok(Transition::Resolved(Bid::new(Suit::Diamonds, Seat::South, false)))
    );
    assert_eq!(bidder.turn(), None);
}

#[test]
fn test_everyone_passes_without_stick_the_dealer() {
    let mut bidder = Bidder::new(Seat::South, UP_CARD, false);
    pass_round(&mut bidder);

    let transitions = pass_round(&mut bidder);
    assert_eq!(
        transitions,
        [
            Transition::Pending,
            Transition::Pending,
            Transition::Pending,
            Transition::NoBid
        ]
    );
    assert_eq!(bidder.turn(), None);
    assert_eq!(bidder.submit(BidChoice::Pass), Err(IllegalBid::OutOfTurn));
}

#[test]
fn test_stuck_dealer_must_name_a_suit() {
    let mut bidder = Bidder::new(Seat::West, UP_CARD, true);
    pass_round(&mut bidder);

    (0..3).for_each(|_| {
        let turn = bidder.turn().expect("Round two continues");
        assert_eq!(
            turn.offer,
            Offer::NameTrump {
                forbidden: Suit::Hearts,
                forced: false
            }
        );
        assert_eq!(bidder.submit(BidChoice::Pass), Ok(Transition::Pending));
    });

    let turn = bidder.turn().expect("The dealer is due");
    assert_eq!(turn.seat, Seat::West);
    assert!(!turn.offer.may_pass());

    // No hand is consulted: a dealer holding only hearts is stuck all the same
    assert_eq!(bidder.submit(BidChoice::Pass), Err(IllegalBid::DealerMustName));
    assert_eq!(
        bidder.submit(BidChoice::Name {
            suit: Suit::Hearts,
            alone: false
        }),
        Err(IllegalBid::ForbiddenSuit(Suit::Hearts))
    );
    assert_eq!(bidder.turn(), Some(turn));

    for suit in turn.offer.suits() {
        let mut stuck = bidder.clone();
        assert_eq!(
            stuck.submit(BidChoice::Name { suit, alone: true }),
            Ok(Transition::Resolved(Bid::new(suit, Seat::West, true)))
        );
    }
}

#[test]
fn test_sitting_out() {
    assert_eq!(Bid::new(Suit::Clubs, Seat::East, false).sitting_out(), None);
    assert_eq!(
        Bid::new(Suit::Clubs, Seat::East, true).sitting_out(),
        Some(Seat::West)
    );
}
