use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::log;

/// An event delivered by a timer, tagged with the generation it was
/// scheduled under.
#[derive(Debug)]
pub struct Fired<E> {
    generation: u64,
    event: E,
}

/// At most one pending timer at a time. Every `schedule` or `cancel` starts a
/// new generation; `accept` drops anything fired under an older one, which
/// covers events that were already sitting in the channel when the timer was
/// aborted.
///
/// `schedule` spawns onto the current tokio runtime.
pub struct DeferredEvents<E> {
    generation: u64,
    pending: Option<JoinHandle<()>>,
    sender: mpsc::UnboundedSender<Fired<E>>,
}

impl<E: Send + 'static> DeferredEvents<E> {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Fired<E>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let events = Self {
            generation: 0,
            pending: None,
            sender,
        };
        (events, receiver)
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Replaces any pending timer. Returns the generation the event belongs to.
    pub fn schedule(&mut self, delay: Duration, event: E) -> u64 {
        self.cancel();
        let generation = self.generation;
        let sender = self.sender.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Fired { generation, event });
        }));
        generation
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn accept(&mut self, fired: Fired<E>) -> Option<E> {
        if fired.generation != self.generation {
            log!(
                "Discarding stale timer event (generation {}, current {})",
                fired.generation,
                self.generation
            );
            return None;
        }
        self.pending = None;
        Some(fired.event)
    }
}

impl<E> Drop for DeferredEvents<E> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
