mod game_state;

pub use game_state::{GRID_WIDTH, MemoryCard, MemoryGameState, MemoryStatus, PAIR_COUNT};
