#[cfg(test)]
mod test;

use crate::card::{Card, Suit};
use crate::deal::{Hand, Seat, SmallSet as _};
use core::num::Wrapping;
use log::debug;
use thiserror::Error;

/// The outcome of a successful auction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bid {
    /// The trump suit
    pub trump: Suit,
    /// The seat that ordered up or named trump
    pub caller: Seat,
    /// Whether the caller plays without their partner
    pub alone: bool,
}

impl Bid {
    /// Create a bid from trump, caller, and whether the caller goes alone
    #[must_use]
    pub const fn new(trump: Suit, caller: Seat, alone: bool) -> Self {
        Self {
            trump,
            caller,
            alone,
        }
    }

    /// The caller's partner if the caller goes alone
    #[must_use]
    pub fn sitting_out(self) -> Option<Seat> {
        self.alone.then(|| self.caller.partner())
    }
}

/// The question put to a seat during the auction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Round one: order the dealer to pick up the up-card, making its suit
    /// trump
    OrderUp {
        /// The card turned up after the deal
        up_card: Card,
    },

    /// Round two: name any suit but the one turned down
    NameTrump {
        /// The suit of the turned-down up-card
        forbidden: Suit,
        /// Whether passing is disallowed (stick the dealer)
        forced: bool,
    },
}

impl Offer {
    /// Suits that may become trump in response to this offer
    pub fn suits(self) -> impl Iterator<Item = Suit> {
        Suit::ASC.into_iter().filter(move |&suit| match self {
            Self::OrderUp { up_card } => suit == up_card.suit(),
            Self::NameTrump { forbidden, .. } => suit != forbidden,
        })
    }

    /// Whether [`BidChoice::Pass`] is a legal answer
    #[must_use]
    pub const fn may_pass(self) -> bool {
        !matches!(self, Self::NameTrump { forced: true, .. })
    }
}

/// A seat's answer to an [`Offer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidChoice {
    /// Decline
    Pass,
    /// Accept the up-card's suit in round one
    OrderUp {
        /// Whether to play without partner
        alone: bool,
    },
    /// Name a suit in round two
    Name {
        /// The suit to make trump
        suit: Suit,
        /// Whether to play without partner
        alone: bool,
    },
}

/// A seat due to answer an offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The seat to answer
    pub seat: Seat,
    /// The question
    pub offer: Offer,
}

/// The effect of an accepted [`BidChoice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The next seat is due to answer
    Pending,
    /// Every seat passed the up-card; it goes back to the draw pile and
    /// round two begins
    TurnedDown(Card),
    /// The up-card was ordered up; the dealer picks it up and must discard
    PickUp(Bid),
    /// Trump was named in round two
    Resolved(Bid),
    /// Every seat passed in round two; the deal is thrown in
    NoBid,
}

/// A decision the auction rejects
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalBid {
    /// Naming the suit turned down in round one
    #[error("{0} was turned down and cannot be named")]
    ForbiddenSuit(Suit),

    /// Passing as the dealer under stick-the-dealer
    #[error("The dealer must name trump")]
    DealerMustName,

    /// Naming a suit in round one
    #[error("Only the up-card can be ordered up in round one")]
    NameInRoundOne,

    /// Ordering up after the up-card was turned down
    #[error("The up-card has been turned down")]
    OrderUpInRoundTwo,

    /// Discarding a card the dealer does not hold
    #[error("{0} is not in the dealer's hand")]
    DiscardNotHeld(Card),

    /// A decision the auction is not waiting for
    #[error("The auction is not waiting for this decision")]
    OutOfTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    RoundOne { passes: u8 },
    RoundTwo { passes: u8 },
    Discard(Bid),
    Done,
}

/// The two rounds of trump selection
///
/// Round one offers the up-card's suit to each seat from the dealer's left.
/// If all four pass, round two offers the other three suits in the same
/// order.  When the dealer is stuck, the dealer cannot pass in round two.
///
/// The bidder only tracks decisions.  The caller moves cards: returning a
/// turned-down up-card to the draw pile, and putting an ordered-up card into
/// the dealer's hand before [`Bidder::discard`].
#[derive(Debug, Clone)]
pub struct Bidder {
    dealer: Seat,
    up_card: Card,
    stick_the_dealer: bool,
    state: State,
}

impl Bidder {
    /// Start an auction
    #[must_use]
    pub const fn new(dealer: Seat, up_card: Card, stick_the_dealer: bool) -> Self {
        Self {
            dealer,
            up_card,
            stick_the_dealer,
            state: State::RoundOne { passes: 0 },
        }
    }

    /// The dealer
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// The card turned up after the deal
    #[must_use]
    pub const fn up_card(&self) -> Card {
        self.up_card
    }

    /// The seat due to answer and its offer, if any
    #[must_use]
    pub fn turn(&self) -> Option<Turn> {
        match self.state {
            State::RoundOne { passes } => Some(Turn {
                seat: self.dealer + Wrapping(passes + 1),
                offer: Offer::OrderUp {
                    up_card: self.up_card,
                },
            }),
            State::RoundTwo { passes } => Some(Turn {
                seat: self.dealer + Wrapping(passes + 1),
                offer: Offer::NameTrump {
                    forbidden: self.up_card.suit(),
                    forced: self.stick_the_dealer && passes == 3,
                },
            }),
            State::Discard(_) | State::Done => None,
        }
    }

    /// The bid waiting for the dealer's discard, if any
    #[must_use]
    pub const fn pending_discard(&self) -> Option<Bid> {
        match self.state {
            State::Discard(bid) => Some(bid),
            _ => None,
        }
    }

    /// Answer the current offer
    ///
    /// # Errors
    /// An [`IllegalBid`] if the choice does not answer the current offer.
    /// The state is left unchanged and the same seat is still due.
    pub fn submit(&mut self, choice: BidChoice) -> Result<Transition, IllegalBid> {
        let turn = self.turn().ok_or(IllegalBid::OutOfTurn)?;
        let forbidden = self.up_card.suit();

        let transition = match (self.state, choice) {
            (State::RoundOne { passes }, BidChoice::Pass) if passes < 3 => {
                self.state = State::RoundOne { passes: passes + 1 };
                Transition::Pending
            }
            (State::RoundOne { .. }, BidChoice::Pass) => {
                self.state = State::RoundTwo { passes: 0 };
                Transition::TurnedDown(self.up_card)
            }
            (State::RoundOne { .. }, BidChoice::OrderUp { alone }) => {
                let bid = Bid::new(forbidden, turn.seat, alone);
                self.state = State::Discard(bid);
                Transition::PickUp(bid)
            }
            (State::RoundOne { .. }, BidChoice::Name { .. }) => {
                return Err(IllegalBid::NameInRoundOne)
            }
            (State::RoundTwo { .. }, BidChoice::OrderUp { .. }) => {
                return Err(IllegalBid::OrderUpInRoundTwo)
            }
            (State::RoundTwo { .. }, BidChoice::Name { suit, .. }) if suit == forbidden => {
                return Err(IllegalBid::ForbiddenSuit(suit))
            }
            (State::RoundTwo { .. }, BidChoice::Name { suit, alone }) => {
                let bid = Bid::new(suit, turn.seat, alone);
                self.state = State::Done;
                Transition::Resolved(bid)
            }
            (State::RoundTwo { .. }, BidChoice::Pass) if !turn.offer.may_pass() => {
                return Err(IllegalBid::DealerMustName)
            }
            (State::RoundTwo { passes }, BidChoice::Pass) if passes < 3 => {
                self.state = State::RoundTwo { passes: passes + 1 };
                Transition::Pending
            }
            (State::RoundTwo { .. }, BidChoice::Pass) => {
                self.state = State::Done;
                Transition::NoBid
            }
            (State::Discard(_) | State::Done, _) => return Err(IllegalBid::OutOfTurn),
        };

        match transition {
            Transition::PickUp(bid) | Transition::Resolved(bid) => {
                debug!(
                    "{} makes {} trump{}",
                    bid.caller,
                    bid.trump,
                    if bid.alone { " alone" } else { "" }
                );
            }
            Transition::TurnedDown(card) => debug!("{card} is turned down"),
            Transition::Pending | Transition::NoBid => {}
        }

        Ok(transition)
    }

    /// Finish an order-up by discarding from the dealer's hand
    ///
    /// `hand` is the dealer's hand with the up-card already picked up.
    ///
    /// # Errors
    /// [`IllegalBid::OutOfTurn`] if no discard is pending, or
    /// [`IllegalBid::DiscardNotHeld`] if the card is not in `hand`.  Neither
    /// the state nor the hand changes on error.
    pub fn discard(&mut self, hand: &mut Hand, card: Card) -> Result<Bid, IllegalBid> {
        let State::Discard(bid) = self.state else {
            return Err(IllegalBid::OutOfTurn);
        };

        if !hand.remove(card) {
            return Err(IllegalBid::DiscardNotHeld(card));
        }

        self.state = State::Done;
        Ok(bid)
    }
}
