mod deferred;
mod session_rng;

pub mod cards;
pub mod memory;
pub mod poker;
pub mod tictactoe;

pub use deferred::{DeferredEvents, Fired};
pub use session_rng::SessionRng;
