
use crate::deal::{Seat, Team};
use crate::deck::Deck;
use crate::player::{Cancelled, Event, Player};
use crate::round::{self, RoundOutcome, Rules};
use core::fmt;
use core::ops::{Index, IndexMut};
use log::info;

/// Match points indexed by team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scores(pub [u8; 2]);

impl Index<Team> for Scores {
    type Output = u8;

    fn index(&self, team: Team) -> &u8 {
        &self.0[team as usize]
    }
}

impl IndexMut<Team> for Scores {
    fn index_mut(&mut self, team: Team) -> &mut u8 {
        &mut self.0[team as usize]
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            Team::NorthSouth,
            self[Team::NorthSouth],
            Team::EastWest,
            self[Team::EastWest],
        )
    }
}

/// A match played round after round until a team reaches the target score
///
/// The deal passes clockwise after every scored round.  A thrown-in deal is
/// not a round, so the dealer stays.
#[derive(Debug, Clone)]
pub struct Match {
    rules: Rules,
    deck: Deck,
    dealer: Seat,
    scores: Scores,
}

impl Match {
    /// Start a match with a random first dealer
    pub fn new(rules: Rules, rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        Self::with_dealer(rules, Seat::ALL[rng.gen_range(0..4)])
    }

    /// Start a match with a given first dealer
    #[must_use]
    pub fn with_dealer(rules: Rules, dealer: Seat) -> Self {
        Self {
            rules,
            deck: Deck::default(),
            dealer,
            scores: Scores::default(),
        }
    }

    /// The house rules
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// The seat dealing the next round
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Points of both teams
    #[must_use]
    pub const fn scores(&self) -> Scores {
        self.scores
    }

    /// Points of one team
    #[must_use]
    pub fn score(&self, team: Team) -> u8 {
        self.scores[team]
    }

    /// The team that reached the target score, if any
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|&team| self.scores[team] >= self.rules.target_score)
    }

    /// Add the points of a round and pass the deal
    ///
    /// Returns the winner if the match is over.
    ///
    /// # Panics
    /// Panics if the match is already over.
    pub fn record(&mut self, outcome: RoundOutcome) -> Option<Team> {
        assert!(self.winner().is_none(), "The match is already over");
        let score = &mut self.scores[outcome.team];
        *score = score.saturating_add(outcome.points);
        self.dealer = self.dealer.next();
        self.winner()
    }

    /// Play the next round and record it
    ///
    /// # Errors
    /// [`Cancelled`] if the player cancels.  The scores and the dealer are
    /// left as they were.
    ///
    /// # Panics
    /// Panics if the match is already over.
    pub fn play_round<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
        rng: &mut (impl rand::Rng + ?Sized),
    ) -> Result<RoundOutcome, Cancelled> {
        assert!(self.winner().is_none(), "The match is already over");
        let outcome = round::play_round(&mut self.deck, self.dealer, self.rules, player, rng)?;
        self.record(outcome);
        Ok(outcome)
    }

    /// Play rounds until a team wins
    ///
    /// # Errors
    /// [`Cancelled`] if the player cancels.
    pub fn play<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
        rng: &mut (impl rand::Rng + ?Sized),
    ) -> Result<Team, Cancelled> {
        let team = loop {
            if let Some(team) = self.winner() {
                break team;
            }
            self.play_round(player, rng)?;
        };

        info!("{team} wins the match: {}", self.scores);
        player.notify(&Event::MatchWon {
            team,
            scores: self.scores,
        });
        Ok(team)
    }
}
