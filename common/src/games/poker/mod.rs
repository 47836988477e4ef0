mod table;

pub use table::{HAND_SIZE, PokerTable};
