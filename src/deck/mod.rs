
use crate::card::{Card, Rank, Suit};
use crate::deal::Hand;
use rand::prelude::SliceRandom as _;

/// Number of cards in a euchre deck
pub const DECK_SIZE: usize = Card::ALL.len();

/// Number of cards dealt to each seat
pub const HAND_SIZE: usize = 5;

/// The euchre deck: the draw pile and the trump fixed for the current deal
///
/// Every card of [`Card::ALL`] is always in exactly one place: the draw pile,
/// a hand, or the dealer's discard.  The deck only tracks the draw pile.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    /// The draw pile, whose top is the last element
    pile: Vec<Card>,

    /// The trump suit whose left bower has been reassigned
    trump: Option<Suit>,
}

impl Deck {
    /// Create a shuffled deck
    pub fn new(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        let mut deck = Self::default();
        deck.reset(rng);
        deck
    }

    /// Collect all 24 cards into the draw pile and shuffle
    ///
    /// Every card goes back to its face suit.
    pub fn reset(&mut self, rng: &mut (impl rand::Rng + ?Sized)) {
        self.trump = None;
        self.pile.clear();
        self.pile.extend(Card::ALL);
        self.pile.shuffle(rng);
    }

    /// The draw pile from bottom to top
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Deal the top five cards of the draw pile
    ///
    /// # Panics
    /// Panics if fewer than five cards remain.
    pub fn deal(&mut self) -> Hand {
        let len = self.pile.len();
        assert!(
            len >= HAND_SIZE,
            "Cannot deal a hand from a draw pile of {len} cards"
        );
        self.pile.drain(len - HAND_SIZE..).collect()
    }

    /// Take the top card of the draw pile
    ///
    /// # Panics
    /// Panics if the draw pile is empty.
    pub fn take_top(&mut self) -> Card {
        match self.pile.pop() {
            Some(card) => card,
            None => panic!("Cannot take a card from an empty draw pile"),
        }
    }

    /// Put a card back on top of the draw pile
    ///
    /// # Panics
    /// Panics if the card is already in the draw pile.
    pub fn return_card(&mut self, card: Card) {
        assert!(
            !self.pile.contains(&card),
            "{card} is already in the draw pile"
        );
        self.pile.push(card);
    }

    /// The trump suit fixed for this deal
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Fix trump for this deal, making the jack of its complement a trump
    ///
    /// Returns the left bower.
    ///
    /// # Panics
    /// Panics if trump has already been fixed since the last reset.
    pub fn assign_left_bower(&mut self, trump: Suit) -> Card {
        if let Some(fixed) = self.trump {
            panic!("Trump is already {fixed} for this deal");
        }
        self.trump = Some(trump);
        Card::new(trump.complement(), Rank::Jack)
    }

    /// The suit a card follows in this deal
    #[must_use]
    pub fn effective_suit(&self, card: Card) -> Suit {
        card.effective_suit(self.trump)
    }
}

/// Trick-taking strength of a card
///
/// From the strongest:
///
/// 1. The right bower
/// 2. The left bower
/// 3. Other trumps by rank
/// 4. Cards of the lead suit by rank, if the lead suit is not trump
/// 5. Everything else, all 0 because they cannot win the trick
#[must_use]
pub fn strength(card: Card, lead: Suit, trump: Suit) -> u8 {
    let rank = card.rank() as u8;

    if card.is_right_bower(trump) {
        32
    } else if card.is_left_bower(trump) {
        31
    } else if card.suit() == trump {
        16 + rank
    } else if card.suit() == lead {
        rank
    } else {
        0
    }
}

/// Strength of every card for one trick
///
/// A trick computes its ranking once the lead suit is known and drops it when
/// the trick is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking {
    lead: Suit,
    trump: Suit,
    strengths: [u8; DECK_SIZE],
}

impl Ranking {
    /// Rank all cards for a lead suit and a trump suit
    #[must_use]
    pub fn new(lead: Suit, trump: Suit) -> Self {
        let mut strengths = [0; DECK_SIZE];
        for card in Card::ALL {
            strengths[card.index()] = strength(card, lead, trump);
        }
        Self {
            lead,
            trump,
            strengths,
        }
    }

    /// The effective suit of the first card of the trick
    #[must_use]
    pub const fn lead(&self) -> Suit {
        self.lead
    }

    /// The trump suit
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.trump
    }

    /// The strength of a card, see [`strength`]
    #[must_use]
    pub const fn strength(&self, card: Card) -> u8 {
        self.strengths[card.index()]
    }
}
