
use core::fmt;
use core::num::NonZeroU8;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A suit of playing cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// ♣, complement of [`Suit::Spades`]
    Clubs,
    /// ♦, complement of [`Suit::Hearts`]
    Diamonds,
    /// ♥, complement of [`Suit::Diamonds`]
    Hearts,
    /// ♠, complement of [`Suit::Clubs`]
    Spades,
}

/// Color of a suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Clubs and spades
    Black,
    /// Diamonds and hearts
    Red,
}

impl Suit {
    /// Suits in the ascending order, the order in this crate
    pub const ASC: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// The color of the suit
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// The other suit of the same color
    ///
    /// The jack of the complement of trump is the left bower.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::Clubs => Self::Spades,
            Self::Diamonds => Self::Hearts,
            Self::Hearts => Self::Diamonds,
            Self::Spades => Self::Clubs,
        }
    }

    /// The suit symbol, e.g. `♠`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl From<Suit> for char {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(char::from(*self))
    }
}

/// Error raised when parsing cards and suits from text
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseCardError {
    /// Not one of `C`, `D`, `H`, `S` or their symbols
    #[error("Invalid suit")]
    InvalidSuit,

    /// Not one of `9`, `10`, `T`, `J`, `Q`, `K`, `A`
    #[error("Invalid rank")]
    InvalidRank,

    /// Not a rank followed by a suit
    #[error("Not a card")]
    NotACard,
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" | "c" | "♣" => Ok(Self::Clubs),
            "D" | "d" | "♦" => Ok(Self::Diamonds),
            "H" | "h" | "♥" => Ok(Self::Hearts),
            "S" | "s" | "♠" => Ok(Self::Spades),
            _ => Err(ParseCardError::InvalidSuit),
        }
    }
}

/// Rank of a card, from nine to ace
///
/// The discriminants are the conventional card values, so ranks order
/// naturally by deriving [`PartialOrd`] and [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 9
    Nine = 9,
    /// 10
    Ten,
    /// J, the bowers when trump is fixed
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A
    Ace,
}

impl Rank {
    /// Ranks in the ascending order
    pub const ASC: [Self; 6] = [
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Single-character notation, `T` for ten
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ten => f.write_str("10"),
            rank => {
                use fmt::Write;
                f.write_char(rank.letter())
            }
        }
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "9" => Ok(Self::Nine),
            "10" | "T" | "t" => Ok(Self::Ten),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            "A" | "a" => Ok(Self::Ace),
            _ => Err(ParseCardError::InvalidRank),
        }
    }
}

/// A playing card
///
/// Cards are identified by their face suit and rank.  The suit a card
/// follows during play may differ from its face suit; see
/// [`Card::effective_suit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(NonZeroU8);

impl Card {
    /// The 24 cards of a euchre deck, grouped by suit in the ascending order
    pub const ALL: [Self; 24] = {
        let mut cards = [Self::new(Suit::Clubs, Rank::Nine); 24];
        let mut i = 0;
        while i < 24 {
            cards[i] = Self::new(Suit::ASC[i / 6], Rank::ASC[i % 6]);
            i += 1;
        }
        cards
    };

    /// Create a card from suit and rank
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        match NonZeroU8::new((rank as u8) << 2 | suit as u8) {
            Some(bits) => Self(bits),
            None => unreachable!(),
        }
    }

    /// The face suit of the card
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ASC[(self.0.get() & 3) as usize]
    }

    /// The rank of the card
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ASC[(self.0.get() >> 2) as usize - Rank::Nine as usize]
    }

    /// Position of the card in [`Card::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit() as usize * 6 + self.rank() as usize - Rank::Nine as usize
    }

    /// Whether this is the jack of trump
    #[must_use]
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self == Self::new(trump, Rank::Jack)
    }

    /// Whether this is the jack of the complement of trump
    #[must_use]
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self == Self::new(trump.complement(), Rank::Jack)
    }

    /// The suit this card belongs to for following and winning tricks
    ///
    /// This is the face suit except for the left bower, which becomes a trump
    /// once trump is fixed.
    #[must_use]
    pub fn effective_suit(self, trump: Option<Suit>) -> Suit {
        match trump {
            Some(trump) if self.is_left_bower(trump) => trump,
            _ => self.suit(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

static CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(9|10|T|J|Q|K|A)\s*([CDHS♣♦♥♠])$").expect("Invalid card pattern")
});

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse a rank followed by a suit, e.g. `JS`, `10h`, `T♥`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = CARD.captures(s.trim()).ok_or(ParseCardError::NotACard)?;
        let rank = captures[1].parse()?;
        let suit = captures[2].parse()?;
        Ok(Self::new(suit, rank))
    }
}
