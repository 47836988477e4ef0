use crate::games::SessionRng;
use crate::log;

pub const PAIR_COUNT: usize = 8;
pub const GRID_WIDTH: usize = 4;

const SYMBOLS: [&str; PAIR_COUNT] = ["🍎", "🍌", "🍇", "🍒", "🍉", "🍋", "🍓", "🥝"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCard {
    pub symbol: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

impl MemoryCard {
    fn new(symbol: &'static str) -> Self {
        Self {
            symbol,
            face_up: false,
            matched: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    Nothing,
    One(usize),
    Mismatch(usize, usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryStatus {
    InProgress,
    Won,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryGameState {
    cards: Vec<MemoryCard>,
    selection: Selection,
    moves_made: u32,
    status: MemoryStatus,
}

impl MemoryGameState {
    pub fn new(rng: &mut SessionRng) -> Self {
        let mut symbols: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        rng.shuffle(&mut symbols);
        Self::from_symbols(symbols)
    }

    fn from_symbols(symbols: Vec<&'static str>) -> Self {
        Self {
            cards: symbols.into_iter().map(MemoryCard::new).collect(),
            selection: Selection::Nothing,
            moves_made: 0,
            status: MemoryStatus::InProgress,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn status(&self) -> MemoryStatus {
        self.status
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    /// True while two unequal cards are showing and waiting for `hide_mismatch`.
    pub fn has_pending_mismatch(&self) -> bool {
        matches!(self.selection, Selection::Mismatch(..))
    }

    /// Turns the card at `index` face up. Ignored when the game is won, a
    /// mismatched pair is still showing, or the card is already visible.
    pub fn flip(&self, index: usize) -> Self {
        if self.status == MemoryStatus::Won || self.has_pending_mismatch() {
            return self.clone();
        }
        let Some(card) = self.cards.get(index) else {
            return self.clone();
        };
        if card.face_up || card.matched {
            return self.clone();
        }

        let mut next = self.clone();
        next.cards[index].face_up = true;

        next.selection = match self.selection {
            Selection::One(first) => {
                next.moves_made += 1;
                if next.cards[first].symbol == next.cards[index].symbol {
                    next.cards[first].matched = true;
                    next.cards[index].matched = true;
                    if next.cards.iter().all(|card| card.matched) {
                        log!("Memory game won in {} moves", next.moves_made);
                        next.status = MemoryStatus::Won;
                    }
                    Selection::Nothing
                } else {
                    Selection::Mismatch(first, index)
                }
            }
            Selection::Nothing | Selection::Mismatch(..) => Selection::One(index),
        };

        next
    }

    pub fn hide_mismatch(&self) -> Self {
        let Selection::Mismatch(first, second) = self.selection else {
            return self.clone();
        };
        let mut next = self.clone();
        next.cards[first].face_up = false;
        next.cards[second].face_up = false;
        next.selection = Selection::Nothing;
        next
    }

    pub fn reset(&self, rng: &mut SessionRng) -> Self {
        Self::new(rng)
    }
}
