mod config;
mod game_type;
mod timing_config;

pub use config::{Config, get_config_manager};
pub use game_type::GameType;
pub use timing_config::TimingConfig;
