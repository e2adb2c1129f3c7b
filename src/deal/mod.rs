#[cfg(test)]
mod test;

use crate::card::{Card, Rank, Suit};
use core::fmt;
use core::num::Wrapping;
use core::ops::{Add, BitAnd, BitOr, BitXor, Index, IndexMut, Not, Sub};
use core::str::FromStr;
use thiserror::Error;

/// Position at the table
///
/// Seats are listed in clockwise order, so the seat after the dealer is
/// to the dealer's left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    /// Partner of [`Seat::South`]
    North,
    /// Partner of [`Seat::West`]
    East,
    /// Partner of [`Seat::North`]
    South,
    /// Partner of [`Seat::East`]
    West,
}

impl Seat {
    /// Seats in clockwise order starting from [`Seat::North`]
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The seat to the left, next in turn
    #[must_use]
    pub fn next(self) -> Self {
        self + Wrapping(1)
    }

    /// The seat across the table
    #[must_use]
    pub fn partner(self) -> Self {
        self + Wrapping(2)
    }

    /// The partnership this seat plays for
    #[must_use]
    pub const fn team(self) -> Team {
        Team::ALL[self as usize & 1]
    }

    /// The singleton set of this seat
    #[must_use]
    pub const fn flag(self) -> SeatFlags {
        SeatFlags::from_bits_retain(1 << self as u8)
    }
}

impl Add<Wrapping<u8>> for Seat {
    type Output = Self;

    fn add(self, rhs: Wrapping<u8>) -> Self {
        Self::ALL[((Wrapping(self as u8) + rhs).0 & 3) as usize]
    }
}

impl Sub<Wrapping<u8>> for Seat {
    type Output = Self;

    fn sub(self, rhs: Wrapping<u8>) -> Self {
        Self::ALL[((Wrapping(self as u8) - rhs).0 & 3) as usize]
    }
}

impl From<Seat> for char {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        })
    }
}

bitflags::bitflags! {
    /// A set of seats
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeatFlags: u8 {
        /// The empty set
        const EMPTY = 0;
        /// The set containing all seats
        const ALL = 0b1111;
        /// The set containing [`Seat::North`]
        const NORTH = 0b0001;
        /// The set containing [`Seat::East`]
        const EAST = 0b0010;
        /// The set containing [`Seat::South`]
        const SOUTH = 0b0100;
        /// The set containing [`Seat::West`]
        const WEST = 0b1000;
        /// The set containing the north-south pair
        const NS = Self::NORTH.bits() | Self::SOUTH.bits();
        /// The set containing the east-west pair
        const EW = Self::EAST.bits() | Self::WEST.bits();
    }
}

const _: () = assert!(matches!(SeatFlags::all(), SeatFlags::ALL));
const _: () = assert!(matches!(SeatFlags::NS.union(SeatFlags::EW), SeatFlags::ALL));
const _: () = assert!(matches!(SeatFlags::NS.intersection(SeatFlags::EW), SeatFlags::EMPTY));

/// A partnership of two seats sitting across from each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    /// [`Seat::North`] and [`Seat::South`]
    NorthSouth,
    /// [`Seat::East`] and [`Seat::West`]
    EastWest,
}

impl Team {
    /// Both teams, indexed by seat parity
    pub const ALL: [Self; 2] = [Self::NorthSouth, Self::EastWest];

    /// The other team
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::NorthSouth => Self::EastWest,
            Self::EastWest => Self::NorthSouth,
        }
    }

    /// The seats of this team
    #[must_use]
    pub const fn seats(self) -> SeatFlags {
        match self {
            Self::NorthSouth => SeatFlags::NS,
            Self::EastWest => SeatFlags::EW,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::NorthSouth => "North-South",
            Self::EastWest => "East-West",
        })
    }
}

/// A bitset whose size is known at compile time
pub trait SmallSet<T>: Copy + Eq + BitAnd + BitOr + BitXor + Not + Sub {
    /// The empty set
    const EMPTY: Self;

    /// The set containing all possible values
    const ALL: Self;

    /// The number of elements in the set
    #[must_use]
    fn len(self) -> usize;

    /// Whether the set is empty
    #[must_use]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Whether the set contains a value
    fn contains(self, value: T) -> bool;

    /// Insert a value into the set
    fn insert(&mut self, value: T) -> bool;

    /// Remove a value from the set
    fn remove(&mut self, value: T) -> bool;

    /// Toggle a value in the set
    fn toggle(&mut self, value: T) -> bool;
}

/// A set of ranks held in one face suit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Holding(u8);

impl Holding {
    const fn bit(rank: Rank) -> u8 {
        1 << (rank as u8 - Rank::Nine as u8)
    }

    /// As a bitset of ranks, nine in the lowest bit
    #[must_use]
    pub const fn to_bits(self) -> u8 {
        self.0
    }

    /// Create a holding from a bitset of ranks
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Ranks in the ascending order
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Rank> {
        Rank::ASC.into_iter().filter(move |&rank| self.contains(rank))
    }
}

impl SmallSet<Rank> for Holding {
    const EMPTY: Self = Self(0);
    const ALL: Self = Self(0x3F);

    fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    fn contains(self, rank: Rank) -> bool {
        self.0 & Self::bit(rank) != 0
    }

    fn insert(&mut self, rank: Rank) -> bool {
        let inserted = !self.contains(rank);
        self.0 |= Self::bit(rank);
        inserted
    }

    fn remove(&mut self, rank: Rank) -> bool {
        let removed = self.contains(rank);
        self.0 &= !Self::bit(rank);
        removed
    }

    fn toggle(&mut self, rank: Rank) -> bool {
        self.0 ^= Self::bit(rank);
        self.contains(rank)
    }
}

impl BitAnd for Holding {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Holding {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Holding {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Holding {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL ^ self
    }
}

impl Sub for Holding {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        self.iter().rev().try_for_each(|rank| f.write_char(rank.letter()))
    }
}

/// Error raised when parsing hands from text
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseHandError {
    /// A character that is not a euchre rank
    #[error("Invalid rank {0:?}")]
    InvalidRank(char),

    /// Ranks not in the descending order
    #[error("Ranks in a holding must be in the descending order")]
    InvalidHolding,

    /// The same rank appears twice in a holding
    #[error("The same rank appears twice in a holding")]
    RepeatedRank,

    /// A hand is not four holdings separated by dots
    #[error("A hand must contain exactly four suits")]
    NotFourSuits,
}

impl FromStr for Holding {
    type Err = ParseHandError;

    /// Parse ranks in the descending order, e.g. `AKJ9`, `Q10`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut holding = Self::EMPTY;
        let mut last: Option<Rank> = None;
        let mut chars = s.chars();

        while let Some(c) = chars.next() {
            let rank = match c.to_ascii_uppercase() {
                'A' => Rank::Ace,
                'K' => Rank::King,
                'Q' => Rank::Queen,
                'J' => Rank::Jack,
                'T' => Rank::Ten,
                '9' => Rank::Nine,
                '1' if chars.next() == Some('0') => Rank::Ten,
                _ => return Err(ParseHandError::InvalidRank(c)),
            };

            match last {
                Some(previous) if previous == rank => return Err(ParseHandError::RepeatedRank),
                Some(previous) if previous < rank => return Err(ParseHandError::InvalidHolding),
                _ => {}
            }

            holding.insert(rank);
            last = Some(rank);
        }

        Ok(holding)
    }
}

/// A hand of playing cards
///
/// Membership is by face identity.  Queries that depend on the trump suit,
/// such as [`Hand::of_suit`], take it as an argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand(pub [Holding; 4]);

impl Index<Suit> for Hand {
    type Output = Holding;

    fn index(&self, suit: Suit) -> &Holding {
        &self.0[suit as usize]
    }
}

impl IndexMut<Suit> for Hand {
    fn index_mut(&mut self, suit: Suit) -> &mut Holding {
        &mut self.0[suit as usize]
    }
}

impl Hand {
    /// As a bitset of cards, one byte per suit in the ascending order
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        u32::from_le_bytes([
            self.0[0].to_bits(),
            self.0[1].to_bits(),
            self.0[2].to_bits(),
            self.0[3].to_bits(),
        ])
    }

    /// Create a hand from a bitset of cards
    ///
    /// This function removes invalid cards.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        let [c, d, h, s] = bits.to_le_bytes();
        Self([
            Holding::from_bits(c),
            Holding::from_bits(d),
            Holding::from_bits(h),
            Holding::from_bits(s),
        ])
    }

    /// Cards in the order of [`Card::ALL`]
    pub fn iter(self) -> impl Iterator<Item = Card> {
        Card::ALL.into_iter().filter(move |&card| self.contains(card))
    }

    /// Cards whose effective suit is `suit`
    ///
    /// With a trump suit, the left bower counts as a trump rather than a card
    /// of its face suit.
    #[must_use]
    pub fn of_suit(self, suit: Suit, trump: Option<Suit>) -> Self {
        self.iter()
            .filter(|card| card.effective_suit(trump) == suit)
            .collect()
    }

    /// Whether the hand holds any card of the effective suit
    #[must_use]
    pub fn has_suit(self, suit: Suit, trump: Option<Suit>) -> bool {
        self.iter().any(|card| card.effective_suit(trump) == suit)
    }

    /// Effective suits held, in the ascending order
    #[must_use]
    pub fn suits(self, trump: Option<Suit>) -> Vec<Suit> {
        Suit::ASC
            .into_iter()
            .filter(|&suit| self.has_suit(suit, trump))
            .collect()
    }
}

impl SmallSet<Card> for Hand {
    const EMPTY: Self = Self([Holding::EMPTY; 4]);
    const ALL: Self = Self([Holding::ALL; 4]);

    fn len(self) -> usize {
        self.to_bits().count_ones() as usize
    }

    fn contains(self, card: Card) -> bool {
        self[card.suit()].contains(card.rank())
    }

    fn insert(&mut self, card: Card) -> bool {
        self[card.suit()].insert(card.rank())
    }

    fn remove(&mut self, card: Card) -> bool {
        self[card.suit()].remove(card.rank())
    }

    fn toggle(&mut self, card: Card) -> bool {
        self[card.suit()].toggle(card.rank())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut hand, card| {
            hand.insert(card);
            hand
        })
    }
}

impl fmt::Display for Hand {
    /// Holdings from spades down to clubs separated by dots, e.g. `J.A9.KQ.T`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self[Suit::Spades],
            self[Suit::Hearts],
            self[Suit::Diamonds],
            self[Suit::Clubs]
        )
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    /// Parse four holdings from spades down to clubs separated by dots, or
    /// `-` for the empty hand
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s == "-" {
            return Ok(Self::EMPTY);
        }

        let holdings: Vec<&str> = s.split('.').collect();
        let [spades, hearts, diamonds, clubs] = holdings[..] else {
            return Err(ParseHandError::NotFourSuits);
        };

        Ok(Self([
            clubs.parse()?,
            diamonds.parse()?,
            hearts.parse()?,
            spades.parse()?,
        ]))
    }
}

impl BitAnd for Hand {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() & rhs.to_bits())
    }
}

impl BitOr for Hand {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() | rhs.to_bits())
    }
}

impl BitXor for Hand {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() ^ rhs.to_bits())
    }
}

impl Not for Hand {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL ^ self
    }
}

impl Sub for Hand {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }
}

/// Four hands indexed by seat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deal(pub [Hand; 4]);

impl Index<Seat> for Deal {
    type Output = Hand;

    fn index(&self, seat: Seat) -> &Hand {
        &self.0[seat as usize]
    }
}

impl IndexMut<Seat> for Deal {
    fn index_mut(&mut self, seat: Seat) -> &mut Hand {
        &mut self.0[seat as usize]
    }
}

struct DealDisplay {
    deal: Deal,
    seat: Seat,
}

impl fmt::Display for DealDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} {}",
            char::from(self.seat),
            self.deal[self.seat],
            self.deal[self.seat + Wrapping(1)],
            self.deal[self.seat + Wrapping(2)],
            self.deal[self.seat + Wrapping(3)],
        )
    }
}

impl Deal {
    /// All cards held by the four seats
    #[must_use]
    pub fn cards(self) -> Hand {
        self.0.into_iter().fold(Hand::EMPTY, |all, hand| all | hand)
    }

    /// Display the deal clockwise from a seat
    #[must_use]
    pub fn display(self, seat: Seat) -> impl fmt::Display {
        DealDisplay { deal: self, seat }
    }
}
