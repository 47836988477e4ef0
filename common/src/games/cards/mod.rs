mod face_card;
mod types;

pub use face_card::FaceCard;
pub use types::{PlayingCard, Rank, Suit, standard_deck};
