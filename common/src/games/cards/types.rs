use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayingCard {
    pub suit: Suit,
    pub rank: Rank,
}

impl PlayingCard {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }
}

impl fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// All 52 cards, suit by suit.
pub fn standard_deck() -> Vec<PlayingCard> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| PlayingCard::new(suit, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_standard_deck_has_52_distinct_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 52);
    }

    #[test]
    fn test_standard_deck_is_suit_major() {
        let deck = standard_deck();
        assert_eq!(deck[0], PlayingCard::new(Suit::Spades, Rank::Ace));
        assert_eq!(deck[13], PlayingCard::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck[51], PlayingCard::new(Suit::Clubs, Rank::King));
    }

    #[test]
    fn test_red_suits() {
        assert!(PlayingCard::new(Suit::Hearts, Rank::Two).is_red());
        assert!(PlayingCard::new(Suit::Diamonds, Rank::Two).is_red());
        assert!(!PlayingCard::new(Suit::Spades, Rank::Two).is_red());
        assert!(!PlayingCard::new(Suit::Clubs, Rank::Two).is_red());
    }

    #[test]
    fn test_display_uses_rank_label_and_suit_symbol() {
        assert_eq!(PlayingCard::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(PlayingCard::new(Suit::Spades, Rank::Queen).to_string(), "Q♠");
    }
}
