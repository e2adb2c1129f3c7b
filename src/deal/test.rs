use super::*;

const _: () = {
    let mut bits = 0;
    while bits < 0xFF {
        assert!(Holding::from_bits(bits).to_bits() == bits & Holding::ALL.to_bits());
        bits += 1;
    }
    assert!(Holding::from_bits(bits).to_bits() == bits & Holding::ALL.to_bits());
};

fn all_holdings() -> impl Iterator<Item = Holding> + Clone {
    (0..1 << 6).map(Holding::from_bits)
}

fn pairs() -> impl Iterator<Item = (Holding, Holding)> {
    all_holdings().flat_map(|u| all_holdings().map(move |v| (u, v)))
}

#[test]
fn test_bitand() {
    pairs().for_each(|(u, v)| {
        assert_eq!((u & v).to_bits(), u.to_bits() & v.to_bits());
    });
}

#[test]
fn test_bitor() {
    pairs().for_each(|(u, v)| {
        assert_eq!((u | v).to_bits(), u.to_bits() | v.to_bits());
    });
}

#[test]
fn test_sub() {
    pairs().for_each(|(u, v)| {
        assert_eq!((u - v).to_bits(), u.to_bits() & !v.to_bits());
    });
}

#[test]
fn test_not() {
    all_holdings().for_each(|v| {
        assert_eq!(!v, Holding::ALL - v);
        assert_eq!(!v, Holding::ALL ^ v);
    });
}

#[test]
fn test_hand_bits() {
    let hand: Hand = Card::ALL.into_iter().collect();
    assert_eq!(hand, Hand::ALL);
    assert_eq!(hand.len(), 24);
    assert_eq!(Hand::from_bits(u32::MAX), Hand::ALL);
    assert_eq!(Hand::from_bits(hand.to_bits()), hand);
}

#[test]
fn test_hand_insert_remove() {
    let jack = Card::new(Suit::Spades, Rank::Jack);
    let mut hand = Hand::EMPTY;
    assert!(hand.insert(jack));
    assert!(!hand.insert(jack));
    assert!(hand.contains(jack));
    assert_eq!(hand.len(), 1);
    assert!(hand.remove(jack));
    assert!(!hand.remove(jack));
    assert!(hand.is_empty());
}

#[test]
fn test_seat_arithmetics() {
    // Any rotation should work
    const SEATS: [Seat; 4] = [Seat::East, Seat::South, Seat::West, Seat::North];

    (0..4).for_each(|x| {
        (0..4).for_each(|y| {
            assert_eq!(
                SEATS[usize::from(x)] + Wrapping(y),
                SEATS[usize::from(y)] + Wrapping(x)
            );
            assert_eq!(
                SEATS[usize::from(x)] + Wrapping(y),
                SEATS[usize::from((x + y) & 3)]
            );
            assert_eq!(
                SEATS[usize::from(x)] - Wrapping(y),
                SEATS[usize::from((x + 4 - y) & 3)]
            );
        });
    });
}

#[test]
fn test_partnerships() {
    for seat in Seat::ALL {
        assert_eq!(seat.partner().team(), seat.team());
        assert_ne!(seat.next().team(), seat.team());
        assert_eq!(seat.partner().partner(), seat);
        assert!(seat.team().seats().contains(seat.flag()));
        assert!(!seat.team().opponent().seats().contains(seat.flag()));
    }
    assert_eq!(Seat::North.next(), Seat::East);
    assert_eq!(Seat::West.next(), Seat::North);
    assert_eq!(Seat::South.team(), Team::NorthSouth);
    assert_eq!(Seat::West.team(), Team::EastWest);
}

#[test]
fn test_effective_suit_membership() -> Result<(), ParseHandError> {
    // J♦ is a heart once hearts are trump
    let hand = Hand::from_str("A.9.QJ.T")?;
    let left = Card::new(Suit::Diamonds, Rank::Jack);

    assert!(hand.of_suit(Suit::Diamonds, None).contains(left));
    assert!(!hand.of_suit(Suit::Diamonds, Some(Suit::Hearts)).contains(left));
    assert!(hand.of_suit(Suit::Hearts, Some(Suit::Hearts)).contains(left));
    assert_eq!(hand.of_suit(Suit::Hearts, Some(Suit::Hearts)).len(), 2);
    assert_eq!(hand.of_suit(Suit::Diamonds, Some(Suit::Hearts)).len(), 1);

    let singleton = Hand::from_str("..J.")?;
    assert!(singleton.has_suit(Suit::Diamonds, None));
    assert!(!singleton.has_suit(Suit::Diamonds, Some(Suit::Hearts)));
    assert_eq!(singleton.suits(Some(Suit::Hearts)), [Suit::Hearts]);
    assert_eq!(singleton.suits(Some(Suit::Clubs)), [Suit::Diamonds]);
    Ok(())
}

#[test]
fn test_holding_parser() {
    type Err = ParseHandError;
    const AQT: Holding = Holding::from_bits(0b101010);
    const KJ9: Holding = Holding::from_bits(0b010101);

    assert!(matches!(Holding::from_str("AKQJT9"), Ok(Holding::ALL)));
    assert!(matches!(Holding::from_str("AQT"), Ok(AQT)));
    assert!(matches!(Holding::from_str("AQ10"), Ok(AQT)));
    assert!(matches!(Holding::from_str("aqt"), Ok(AQT)));
    assert!(matches!(Holding::from_str("KJ9"), Ok(KJ9)));
    assert!(matches!(Holding::from_str(""), Ok(Holding::EMPTY)));
    assert!(matches!(Holding::from_str("ATQ"), Err(Err::InvalidHolding)));
    assert!(matches!(Holding::from_str("KK"), Err(Err::RepeatedRank)));
    assert!(matches!(Holding::from_str("A8"), Err(Err::InvalidRank('8'))));
    assert!(matches!(Holding::from_str("1"), Err(Err::InvalidRank('1'))));
}

#[test]
fn test_holding_io() -> Result<(), ParseHandError> {
    all_holdings().try_for_each(|binary| {
        let text = binary.to_string();
        let parsed = Holding::from_str(&text)?;
        assert_eq!(binary, parsed);
        Ok(())
    })
}

#[test]
fn test_hand_parser() -> Result<(), ParseHandError> {
    assert!(matches!(Hand::from_str("-"), Ok(Hand::EMPTY)));
    assert!(matches!(Hand::from_str("..."), Ok(Hand::EMPTY)));

    assert!(matches!(Hand::from_str(""), Err(ParseHandError::NotFourSuits)));
    assert!(matches!(Hand::from_str(".."), Err(ParseHandError::NotFourSuits)));
    assert!(matches!(Hand::from_str("...."), Err(ParseHandError::NotFourSuits)));

    assert_eq!(
        Hand::from_str("AJ.Q9..K")?,
        Hand([
            Holding::from_str("K")?,
            Holding::EMPTY,
            Holding::from_str("Q9")?,
            Holding::from_str("AJ")?,
        ])
    );

    let hand = Hand::from_str("AJ.Q9..K")?;
    assert_eq!(hand.to_string(), "AJ.Q9..K");
    assert_eq!(Hand::from_str(&hand.to_string())?, hand);
    Ok(())
}

#[test]
fn test_deal_display() -> Result<(), ParseHandError> {
    let deal = Deal([
        Hand::from_str("AKQJT...")?,
        Hand::from_str(".AKQJT..")?,
        Hand::from_str("..AKQJT.")?,
        Hand::from_str("...AKQJT")?,
    ]);
    assert_eq!(
        deal.display(Seat::East).to_string(),
        "E:.AKQJT.. ..AKQJT. ...AKQJT AKQJT..."
    );
    assert_eq!(deal.cards().len(), 20);
    Ok(())
}
