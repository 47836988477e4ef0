use common::games::memory::MemoryStatus;
use common::games::{DeferredEvents, Fired, SessionRng};
use common::log;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::command::{HELP, UserCommand, parse_command};
use crate::config::{Config, GameType};
use crate::render::render_game;
use crate::state::{ActiveGame, GameTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns every piece of game state; commands and timer events are applied one
/// at a time from `run`.
pub struct App {
    config: Config,
    rng: SessionRng,
    game: ActiveGame,
    timers: DeferredEvents<GameTimer>,
    event_log: AllocRingBuffer<String>,
}

impl App {
    pub fn new(
        config: Config,
        game_type: GameType,
        mut rng: SessionRng,
    ) -> (Self, mpsc::UnboundedReceiver<Fired<GameTimer>>) {
        let (timers, timer_rx) = DeferredEvents::new();
        let game = ActiveGame::new(game_type, &mut rng);
        let event_log = AllocRingBuffer::new(config.event_log_size);
        let app = Self {
            config,
            rng,
            game,
            timers,
            event_log,
        };
        (app, timer_rx)
    }

    #[cfg(test)]
    pub fn game(&self) -> &ActiveGame {
        &self.game
    }

    #[cfg(test)]
    pub fn events(&self) -> impl Iterator<Item = &String> {
        self.event_log.iter()
    }

    pub async fn run(
        mut self,
        mut timer_rx: mpsc::UnboundedReceiver<Fired<GameTimer>>,
    ) -> Result<(), String> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("{}\n{}", self.game.game_type(), HELP);
        self.redraw();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                    let Some(line) = line else {
                        break;
                    };
                    if self.handle_command(parse_command(&line)) == Flow::Quit {
                        break;
                    }
                    self.redraw();
                }
                Some(fired) = timer_rx.recv() => {
                    if self.handle_timer(fired) {
                        self.redraw();
                    }
                }
            }
        }

        self.timers.cancel();
        Ok(())
    }

    fn redraw(&self) {
        println!("\n{}", render_game(&self.game));
        for event in self.event_log.iter() {
            println!("  {}", event);
        }
    }

    fn record(&mut self, event: String) {
        log!("{}", event);
        let _ = self.event_log.enqueue(event);
    }

    pub fn handle_command(&mut self, command: UserCommand) -> Flow {
        match command {
            UserCommand::Quit => return Flow::Quit,
            UserCommand::Empty => {}
            UserCommand::Help => println!("{}", HELP),
            UserCommand::Unknown(text) => println!("Unknown command: {} (type help)", text),
            UserCommand::Reset => self.reset(),
            UserCommand::CloseModal => self.game.set_modal_visible(false),
            UserCommand::Switch(game_type) => {
                self.timers.cancel();
                self.game = ActiveGame::new(game_type, &mut self.rng);
                self.record(format!("Switched to {}", game_type));
            }
            UserCommand::Select(index) => self.select(index),
            UserCommand::Flip(index) => match &mut self.game {
                ActiveGame::Poker(table) => *table = table.flip(index),
                _ => println!("Flip only applies to the poker table; type the number to play"),
            },
            UserCommand::Deal => match &mut self.game {
                ActiveGame::Poker(table) => {
                    *table = table.deal(&mut self.rng);
                    let hand: Vec<String> = table.hand().iter().map(|c| c.card.to_string()).collect();
                    self.record(format!("Dealt {}", hand.join(" ")));
                }
                _ => println!("Deal only applies to the poker table"),
            },
        }
        Flow::Continue
    }

    fn reset(&mut self) {
        self.timers.cancel();
        self.game = match &self.game {
            ActiveGame::TicTacToe { state, .. } => ActiveGame::TicTacToe {
                state: state.reset(),
                modal_visible: false,
            },
            ActiveGame::Memory { state, .. } => ActiveGame::Memory {
                state: state.reset(&mut self.rng),
                modal_visible: false,
            },
            ActiveGame::Poker(_) => ActiveGame::new(GameType::Poker, &mut self.rng),
        };
        self.record(format!("{} reset", self.game.game_type()));
    }

    fn select(&mut self, index: usize) {
        let timing = self.config.timing.clone();
        let mut event = None;
        let mut timer = None;

        match &mut self.game {
            ActiveGame::TicTacToe { state, .. } => {
                let next = state.apply_move(index);
                if next == *state {
                    event = Some(format!("Cell {} is not available", index));
                } else {
                    if let Some(mark) = next.board().get(index).and_then(|cell| cell.mark()) {
                        event = Some(format!("{} played {}", mark, index));
                    }
                    if next.status().is_terminal() {
                        timer = Some((GameTimer::ShowModal, timing.modal_delay()));
                    }
                    *state = next;
                }
            }
            ActiveGame::Memory { state, .. } => {
                let next = state.flip(index);
                if next == *state {
                    event = Some(format!("Card {} can't be turned now", index));
                } else {
                    if next.has_pending_mismatch() {
                        timer = Some((GameTimer::HideMismatch, timing.mismatch_hide_delay()));
                    } else if next.status() == MemoryStatus::Won {
                        timer = Some((GameTimer::ShowModal, timing.modal_delay()));
                    }
                    *state = next;
                }
            }
            ActiveGame::Poker(table) => *table = table.flip(index),
        }

        if let Some(event) = event {
            self.record(event);
        }
        if let Some((timer, delay)) = timer {
            self.timers.schedule(delay, timer);
        }
    }

    /// Applies a fired timer. Returns whether anything changed.
    pub fn handle_timer(&mut self, fired: Fired<GameTimer>) -> bool {
        let Some(timer) = self.timers.accept(fired) else {
            return false;
        };

        match (timer, &mut self.game) {
            (GameTimer::ShowModal, game) if game.is_finished() => {
                game.set_modal_visible(true);
                true
            }
            (GameTimer::HideMismatch, ActiveGame::Memory { state, .. }) => {
                *state = state.hide_mismatch();
                true
            }
            _ => false,
        }
    }
}
