// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is not a rank followed by a suit.
    #[error("invalid card '{0}', expected a rank followed by a suit (e.g. AS, TD, 10h)")]
    Card(String),
    /// Unknown rank.
    #[error("invalid rank '{0}'")]
    Rank(String),
    /// Unknown suit.
    #[error("invalid suit '{0}'")]
    Suit(String),
}

/// A Poker card.
///
/// A card is an immutable rank and suit pair, cards compare equal only if
/// both rank and suit are equal. To order cards by rank use the rank as a
/// sort key:
///
/// ```
/// # use pokerhands_cards::{Card, Rank, Suit};
/// let mut cards = vec![
///     Card::new(Rank::Four, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ten, Suit::Spades),
/// ];
/// cards.sort_by_key(|c| std::cmp::Reverse(c.rank()));
/// assert_eq!(cards[0].rank(), Rank::Ace);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back();
        let rank = chars.as_str();

        match suit {
            Some(suit) if !rank.is_empty() => {
                let rank = rank.parse::<Rank>()?;
                let suit = suit.to_string().parse::<Suit>()?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseCardError::Card(s.to_string())),
        }
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use pokerhands_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("AS, KS QS js 10s").unwrap();
/// assert_eq!(cards.len(), 5);
/// assert_eq!(cards[4], Card::new(Rank::Ten, Suit::Spades));
/// ```
///
/// Duplicate cards are not detected.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank, Ace is always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank position, Deuce is 0 and Ace is 12.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank name used in hands descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The plural rank name, "Sixes" for sixes.
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuces",
            Rank::Trey => "Treys",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits have no strength, they are only compared for equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "C" | "c" | "♣" => Suit::Clubs,
            "D" | "d" | "♦" => Suit::Diamonds,
            "H" | "h" | "♥" => Suit::Hearts,
            "S" | "s" | "♠" => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };

        Ok(suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("kd".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("Th".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("2♣".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!(" A♠ ".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));

        // Display output parses back.
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse(), Ok(card));
            }
        }
    }

    #[test]
    fn card_from_str_errors() {
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::Card(String::new()))
        );
        assert_eq!("S".parse::<Card>(), Err(ParseCardError::Card("S".into())));
        assert_eq!("1S".parse::<Card>(), Err(ParseCardError::Rank("1".into())));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::Suit("X".into())));
        assert_eq!(
            "11H".parse::<Card>(),
            Err(ParseCardError::Rank("11".into()))
        );
    }

    #[test]
    fn parse_cards_list() {
        let cards = parse_cards("2C 4C,6C , 8C\tKC").unwrap();
        let ranks = cards.iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            [Rank::Deuce, Rank::Four, Rank::Six, Rank::Eight, Rank::King]
        );
        assert!(cards.iter().all(|c| c.suit() == Suit::Clubs));

        assert_eq!(parse_cards("").unwrap(), Vec::new());
        assert_eq!(
            parse_cards("AS KZ"),
            Err(ParseCardError::Suit("Z".into()))
        );
    }

    #[test]
    fn rank_order() {
        let ranks = Rank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 13);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert!(ranks.windows(2).all(|w| w[1].value() - w[0].value() == 1));
        assert_eq!(Rank::Ace.value(), 12);
        assert_eq!(Rank::Six.plural(), "Sixes");
    }
}
