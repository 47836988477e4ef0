use super::types::PlayingCard;

/// A displayed card that can be turned over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceCard {
    pub card: PlayingCard,
    pub face_up: bool,
}

impl FaceCard {
    pub fn new(card: PlayingCard, face_up: bool) -> Self {
        Self { card, face_up }
    }

    pub fn flipped(&self) -> Self {
        Self {
            card: self.card,
            face_up: !self.face_up,
        }
    }
}
