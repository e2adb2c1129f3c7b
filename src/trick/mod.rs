
use crate::card::{Card, Suit};
use crate::deal::{Hand, Seat, SeatFlags, SmallSet as _};
use crate::deck::Ranking;
use core::num::Wrapping;
use log::trace;
use thiserror::Error;

/// A card play the trick rejects
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlay {
    /// Another seat is due to play
    #[error("{0} is due to play")]
    OutOfTurn(Seat),

    /// The card is not in the seat's hand
    #[error("{0} is not in hand")]
    NotHeld(Card),

    /// The seat holds a card of the lead suit but played another suit
    #[error("Must follow {0}")]
    MustFollow(Suit),

    /// Every active seat has already played
    #[error("The trick is complete")]
    Complete,
}

/// One trick of three or four cards
#[derive(Debug, Clone)]
pub struct Trick {
    leader: Seat,
    trump: Suit,
    seats: SeatFlags,
    ranking: Option<Ranking>,
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    /// Start a trick
    ///
    /// - `leader`: The seat to play first
    /// - `trump`: The trump suit of the deal
    /// - `sitting_out`: The partner of a lone caller, who does not play
    ///
    /// # Panics
    /// Panics if the leader is sitting out.
    #[must_use]
    pub fn new(leader: Seat, trump: Suit, sitting_out: Option<Seat>) -> Self {
        let seats = sitting_out.map_or(SeatFlags::ALL, |seat| {
            SeatFlags::ALL.difference(seat.flag())
        });
        assert!(
            seats.contains(leader.flag()),
            "{leader} is sitting out and cannot lead"
        );

        Self {
            leader,
            trump,
            seats,
            ranking: None,
            plays: Vec::with_capacity(4),
        }
    }

    /// The seat that played first
    #[must_use]
    pub const fn leader(&self) -> Seat {
        self.leader
    }

    /// The trump suit
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.trump
    }

    /// The effective suit of the first card, once played
    #[must_use]
    pub fn lead(&self) -> Option<Suit> {
        self.ranking.map(|ranking| ranking.lead())
    }

    /// Cards played so far, in order
    #[must_use]
    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// Number of cards in the complete trick, 3 if someone sits out
    #[must_use]
    pub fn size(&self) -> usize {
        self.seats.bits().count_ones() as usize
    }

    /// Whether every active seat has played
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.size()
    }

    /// The seat due to play, if any
    #[must_use]
    pub fn to_play(&self) -> Option<Seat> {
        (0..4)
            .map(|offset| self.leader + Wrapping(offset))
            .filter(|seat| self.seats.contains(seat.flag()))
            .nth(self.plays.len())
    }

    /// Cards in `hand` that may legally be played to this trick
    ///
    /// A seat holding the lead suit must follow it.  Otherwise, or on the
    /// lead, any card is legal.
    #[must_use]
    pub fn legal_plays(&self, hand: Hand) -> Hand {
        match self.lead() {
            Some(lead) => {
                let followers = hand.of_suit(lead, Some(self.trump));
                if followers.is_empty() {
                    hand
                } else {
                    followers
                }
            }
            None => hand,
        }
    }

    /// Play a card from a seat's hand
    ///
    /// The first card fixes the lead suit and ranks the deck for this trick.
    ///
    /// Returns the winner if this card completes the trick.
    ///
    /// # Errors
    /// An [`IllegalPlay`] if the seat is not due, does not hold the card, or
    /// fails to follow suit.  Neither the trick nor the hand changes on error.
    pub fn play(
        &mut self,
        seat: Seat,
        card: Card,
        hand: &mut Hand,
    ) -> Result<Option<Seat>, IllegalPlay> {
        let due = self.to_play().ok_or(IllegalPlay::Complete)?;

        if seat != due {
            return Err(IllegalPlay::OutOfTurn(due));
        }

        if !hand.contains(card) {
            return Err(IllegalPlay::NotHeld(card));
        }

        if let Some(lead) = self.lead() {
            if !self.legal_plays(*hand).contains(card) {
                return Err(IllegalPlay::MustFollow(lead));
            }
        }

        hand.remove(card);
        trace!("{seat} plays {card}");

        if self.ranking.is_none() {
            let lead = card.effective_suit(Some(self.trump));
            self.ranking = Some(Ranking::new(lead, self.trump));
        }

        self.plays.push((seat, card));
        Ok(self.winner())
    }

    /// The seat whose card ranks highest, once the trick is complete
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        let ranking = self.ranking.filter(|_| self.is_complete())?;
        self.plays
            .iter()
            .max_by_key(|(_, card)| ranking.strength(*card))
            .map(|&(seat, _)| seat)
    }
}
