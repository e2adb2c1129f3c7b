
use crate::bidding::{Bid, Bidder, Transition, Turn};
use crate::deal::{Deal, Seat, SmallSet as _, Team};
use crate::deck::Deck;
use crate::player::{Cancelled, Event, IllegalDecision, Player};
use crate::trick::Trick;
use core::num::Wrapping;
use log::{debug, warn};

/// Number of tricks in a round
pub const TRICKS: usize = 5;

/// House rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Whether the dealer must name trump when everyone else passes twice
    pub stick_the_dealer: bool,

    /// Points a team needs to win the match
    pub target_score: u8,
}

impl Rules {
    /// No stick-the-dealer, play to 10 points
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stick_the_dealer: false,
            target_score: 10,
        }
    }

    /// Set whether the dealer is stuck
    #[must_use]
    pub const fn with_stick_the_dealer(self, stick_the_dealer: bool) -> Self {
        Self {
            stick_the_dealer,
            ..self
        }
    }

    /// Set the points needed to win the match
    #[must_use]
    pub const fn with_target_score(self, target_score: u8) -> Self {
        Self {
            target_score,
            ..self
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

/// Points scored in a round, by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// The calling team took at least three tricks
    Makers(u8),
    /// The calling team was euchred
    Defenders(u8),
}

/// Score a round from the tricks taken by the calling team
///
/// | Tricks | Partnered     | Alone         |
/// |--------|---------------|---------------|
/// | 5      | 2 to makers   | 4 to makers   |
/// | 3 or 4 | 1 to makers   | 1 to makers   |
/// | 0 to 2 | 2 to defenders| 2 to defenders|
///
/// # Panics
/// Panics if `tricks` exceeds [`TRICKS`].
#[must_use]
pub const fn score(tricks: u8, alone: bool) -> Score {
    assert!(tricks as usize <= TRICKS, "A round has only five tricks");

    match (tricks, alone) {
        (5, true) => Score::Makers(4),
        (5, false) => Score::Makers(2),
        (3 | 4, _) => Score::Makers(1),
        _ => Score::Defenders(2),
    }
}

/// The result of a completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOutcome {
    /// The winning bid
    pub bid: Bid,
    /// Tricks taken by the calling team
    pub tricks: u8,
    /// The team scoring the round
    pub team: Team,
    /// Points scored
    pub points: u8,
}

impl RoundOutcome {
    /// Score a round
    ///
    /// # Panics
    /// Panics if `tricks` exceeds [`TRICKS`].
    #[must_use]
    pub const fn new(bid: Bid, tricks: u8) -> Self {
        let makers = bid.caller.team();
        let (team, points) = match score(tricks, bid.alone) {
            Score::Makers(points) => (makers, points),
            Score::Defenders(points) => (makers.opponent(), points),
        };

        Self {
            bid,
            tricks,
            team,
            points,
        }
    }

    /// Whether the calling team failed to take three tricks
    #[must_use]
    pub fn is_euchre(self) -> bool {
        self.team != self.bid.caller.team()
    }

    /// Whether the calling team took every trick
    #[must_use]
    pub fn is_march(self) -> bool {
        usize::from(self.tricks) == TRICKS
    }
}

/// Play a round from the deal to the score
///
/// If everyone passes twice without stick-the-dealer, the deck is reshuffled
/// and the same dealer deals again until a bid is made.
///
/// # Errors
/// [`Cancelled`] as soon as the player cancels.
pub fn play_round<P: Player + ?Sized>(
    deck: &mut Deck,
    dealer: Seat,
    rules: Rules,
    player: &mut P,
    rng: &mut (impl rand::Rng + ?Sized),
) -> Result<RoundOutcome, Cancelled> {
    let (bid, mut deal) = loop {
        if let Some(auction) = auction(deck, dealer, rules, player, rng)? {
            break auction;
        }
    };

    let left = deck.assign_left_bower(bid.trump);
    debug!("{left} is the left bower");
    player.notify(&Event::BidResolved(bid));

    let sitting_out = bid.sitting_out();
    let mut leader = dealer.next();

    if Some(leader) == sitting_out {
        leader = leader.next();
    }

    let mut tricks = 0;

    for _ in 0..TRICKS {
        leader = play_trick(&mut deal, leader, bid, player)?;

        if leader.team() == bid.caller.team() {
            tricks += 1;
        }
    }

    let outcome = RoundOutcome::new(bid, tricks);
    debug!(
        "{} takes {tricks} tricks; {} scores {}",
        bid.caller, outcome.team, outcome.points
    );
    player.notify(&Event::RoundCompleted(outcome));
    Ok(outcome)
}

fn reject<P: Player + ?Sized>(player: &mut P, seat: Seat, error: IllegalDecision) {
    warn!("Rejected decision from {seat}: {error}");
    player.reject(seat, error);
}

/// Deal and run the auction once, returning `None` on a throw-in
fn auction<P: Player + ?Sized>(
    deck: &mut Deck,
    dealer: Seat,
    rules: Rules,
    player: &mut P,
    rng: &mut (impl rand::Rng + ?Sized),
) -> Result<Option<(Bid, Deal)>, Cancelled> {
    deck.reset(rng);
    let mut deal = Deal::default();

    for offset in 1..=4 {
        deal[dealer + Wrapping(offset)] = deck.deal();
    }

    let up_card = deck.take_top();
    debug!("{dealer} deals and turns up {up_card}");
    player.notify(&Event::Dealt { dealer, up_card });

    let mut bidder = Bidder::new(dealer, up_card, rules.stick_the_dealer);

    while let Some(Turn { seat, offer }) = bidder.turn() {
        let choice = player.bid(seat, deal[seat], offer)?;

        match bidder.submit(choice) {
            Ok(Transition::Pending | Transition::NoBid) => {}
            Ok(Transition::TurnedDown(card)) => deck.return_card(card),
            Ok(Transition::Resolved(bid)) => return Ok(Some((bid, deal))),
            Ok(Transition::PickUp(_)) => {
                deal[dealer].insert(up_card);

                loop {
                    let card = player.discard(dealer, deal[dealer])?;

                    match bidder.discard(&mut deal[dealer], card) {
                        Ok(bid) => return Ok(Some((bid, deal))),
                        Err(error) => reject(player, dealer, error.into()),
                    }
                }
            }
            Err(error) => reject(player, seat, error.into()),
        }
    }

    warn!("Everyone passed; {dealer} deals again");
    player.notify(&Event::ThrownIn { dealer });
    Ok(None)
}

/// Play one trick and return the winner
fn play_trick<P: Player + ?Sized>(
    deal: &mut Deal,
    leader: Seat,
    bid: Bid,
    player: &mut P,
) -> Result<Seat, Cancelled> {
    let mut trick = Trick::new(leader, bid.trump, bid.sitting_out());

    while let Some(seat) = trick.to_play() {
        let hand = deal[seat];
        let card = player.play(seat, hand, trick.legal_plays(hand), &trick)?;

        match trick.play(seat, card, &mut deal[seat]) {
            Ok(None) => {}
            Ok(Some(winner)) => {
                debug!("{winner} wins the trick");
                player.notify(&Event::TrickCompleted {
                    winner,
                    plays: trick.plays().to_vec(),
                });
                return Ok(winner);
            }
            Err(error) => reject(player, seat, error.into()),
        }
    }

    unreachable!("A trick is won when its last card is played")
}
