
use crate::bidding::{Bid, BidChoice, IllegalBid, Offer};
use crate::card::Card;
use crate::deal::{Hand, Seat, Team};
use crate::game::Scores;
use crate::round::RoundOutcome;
use crate::trick::{IllegalPlay, Trick};
use thiserror::Error;

/// A player's request to stop the match
///
/// The engine propagates it unchanged.  No points are recorded for the round
/// in progress.
#[derive(Debug, Error, Clone, Copy, Default, PartialEq, Eq)]
#[error("The match was cancelled")]
pub struct Cancelled;

/// A decision the engine rejected, to be made again
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalDecision {
    /// A rejected bid or discard
    #[error(transparent)]
    Bid(#[from] IllegalBid),

    /// A rejected card play
    #[error(transparent)]
    Play(#[from] IllegalPlay),
}

/// Public happenings at the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Hands are dealt and a card is turned up
    Dealt {
        /// The seat dealing this round
        dealer: Seat,
        /// The card offered in round one
        up_card: Card,
    },

    /// Everyone passed twice; the same dealer deals again
    ThrownIn {
        /// The seat dealing again
        dealer: Seat,
    },

    /// Trump is fixed
    BidResolved(Bid),

    /// The last card of a trick is played
    TrickCompleted {
        /// The seat leading the next trick
        winner: Seat,
        /// Cards in the order played
        plays: Vec<(Seat, Card)>,
    },

    /// All five tricks are played and scored
    RoundCompleted(RoundOutcome),

    /// A team reached the target score
    MatchWon {
        /// The winning team
        team: Team,
        /// Final scores
        scores: Scores,
    },
}

/// The source of every decision at the table
///
/// One implementor may answer for all four seats, or a table of four may
/// answer one seat each.  The engine calls methods one at a time and waits
/// for each answer.  An illegal answer is reported through
/// [`Player::reject`] and the same question is asked again.
pub trait Player {
    /// Answer an offer during the auction
    ///
    /// # Errors
    /// [`Cancelled`] to stop the match.
    fn bid(&mut self, seat: Seat, hand: Hand, offer: Offer) -> Result<BidChoice, Cancelled>;

    /// Choose a card to discard after the dealer picks up the up-card
    ///
    /// `hand` holds six cards, the up-card included.
    ///
    /// # Errors
    /// [`Cancelled`] to stop the match.
    fn discard(&mut self, seat: Seat, hand: Hand) -> Result<Card, Cancelled>;

    /// Choose a card to play to the trick
    ///
    /// `legal` is the subset of `hand` that may be played.
    ///
    /// # Errors
    /// [`Cancelled`] to stop the match.
    fn play(
        &mut self,
        seat: Seat,
        hand: Hand,
        legal: Hand,
        trick: &Trick,
    ) -> Result<Card, Cancelled>;

    /// Learn that the last decision for `seat` was illegal
    #[allow(unused_variables)]
    fn reject(&mut self, seat: Seat, error: IllegalDecision) {}

    /// Observe a public event
    #[allow(unused_variables)]
    fn notify(&mut self, event: &Event) {}
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn bid(&mut self, seat: Seat, hand: Hand, offer: Offer) -> Result<BidChoice, Cancelled> {
        (**self).bid(seat, hand, offer)
    }

    fn discard(&mut self, seat: Seat, hand: Hand) -> Result<Card, Cancelled> {
        (**self).discard(seat, hand)
    }

    fn play(
        &mut self,
        seat: Seat,
        hand: Hand,
        legal: Hand,
        trick: &Trick,
    ) -> Result<Card, Cancelled> {
        (**self).play(seat, hand, legal, trick)
    }

    fn reject(&mut self, seat: Seat, error: IllegalDecision) {
        (**self).reject(seat, error);
    }

    fn notify(&mut self, event: &Event) {
        (**self).notify(event);
    }
}

/// One player per seat, indexed by [`Seat`]
///
/// Events are broadcast to all four.
impl<P: Player> Player for [P; 4] {
    fn bid(&mut self, seat: Seat, hand: Hand, offer: Offer) -> Result<BidChoice, Cancelled> {
        self[seat as usize].bid(seat, hand, offer)
    }

    fn discard(&mut self, seat: Seat, hand: Hand) -> Result<Card, Cancelled> {
        self[seat as usize].discard(seat, hand)
    }

    fn play(
        &mut self,
        seat: Seat,
        hand: Hand,
        legal: Hand,
        trick: &Trick,
    ) -> Result<Card, Cancelled> {
        self[seat as usize].play(seat, hand, legal, trick)
    }

    fn reject(&mut self, seat: Seat, error: IllegalDecision) {
        self[seat as usize].reject(seat, error);
    }

    fn notify(&mut self, event: &Event) {
        self.iter_mut().for_each(|player| player.notify(event));
    }
}
