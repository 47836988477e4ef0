use crate::games::SessionRng;
use crate::games::cards::{FaceCard, standard_deck};

pub const HAND_SIZE: usize = 4;

/// Random hand shown face up; nothing is dealt until the first `deal`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PokerTable {
    hand: Vec<FaceCard>,
}

impl PokerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &[FaceCard] {
        &self.hand
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn deal_label(&self) -> &'static str {
        if self.is_empty() { "Deal" } else { "Deal again" }
    }

    /// Shuffles a fresh deck and replaces the hand with its top cards.
    pub fn deal(&self, rng: &mut SessionRng) -> Self {
        let mut deck = standard_deck();
        rng.shuffle(&mut deck);

        let hand: Vec<FaceCard> = deck
            .into_iter()
            .take(HAND_SIZE)
            .map(|card| FaceCard::new(card, true))
            .collect();

        Self { hand }
    }

    pub fn flip(&self, index: usize) -> Self {
        let mut table = self.clone();
        if let Some(face_card) = table.hand.get_mut(index) {
            *face_card = face_card.flipped();
        }
        table
    }
}
