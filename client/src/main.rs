mod app;
mod command;
mod config;
mod render;
mod state;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};

use app::App;
use config::{GameType, get_config_manager};

#[derive(Parser)]
#[command(name = "mini_games_client")]
struct Args {
    /// Game to open; defaults to the one in the config file
    #[arg(long, value_enum)]
    game: Option<GameType>,
    /// Seed for shuffles and deals
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print log lines between frames
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config = get_config_manager(args.config).get_config()?;
    let game_type = args.game.unwrap_or(config.default_game);
    let rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);

    log!("Starting {} with seed {}", game_type, rng.seed());

    let (app, timer_rx) = App::new(config, game_type, rng);
    app.run(timer_rx).await?;

    log!("Client shut down");
    Ok(())
}
