//! Drives a [`GameController`] against a real dictionary
//!
//! Lookups queued by the controller are spawned onto a tokio runtime; their
//! answers come back over a channel and are applied on the caller's thread,
//! so the controller itself is never shared across threads.

use super::command::{Command, Cue, Effect, LookupResult};
use super::state::GameController;
use crate::game::dictionary::DictionaryClient;
use log::warn;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Couples the controller with a dictionary client and an async runtime.
pub struct Runner<D> {
    controller: GameController,
    client: Arc<D>,
    runtime: Handle,
    results_tx: UnboundedSender<LookupResult>,
    results_rx: UnboundedReceiver<LookupResult>,
    /// Cues not yet collected by the UI
    cues: Vec<Cue>,
}

impl<D: DictionaryClient> Runner<D> {
    pub fn new(controller: GameController, client: D, runtime: Handle) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            client: Arc::new(client),
            runtime,
            results_tx,
            results_rx,
            cues: Vec::new(),
        }
    }

    /// Apply a UI command and start any lookups it triggers
    pub fn dispatch(&mut self, command: Command) {
        self.controller.dispatch(command);
        self.flush_effects();
    }

    /// Advance timers and apply any lookup answers that have arrived
    pub fn tick(&mut self, elapsed: Duration) {
        self.controller.advance(elapsed);
        self.flush_effects();
        self.poll_lookups();
    }

    /// Apply lookup answers received so far
    pub fn poll_lookups(&mut self) {
        loop {
            match self.results_rx.try_recv() {
                Ok(result) => {
                    self.controller.resolve_lookup(result);
                    self.flush_effects();
                }
                Err(TryRecvError::Empty) => break,
                // Cannot happen while we hold a sender
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn flush_effects(&mut self) {
        for effect in self.controller.take_effects() {
            match effect {
                Effect::Cue(cue) => self.cues.push(cue),
                Effect::Lookup(request) => {
                    let client = Arc::clone(&self.client);
                    let tx = self.results_tx.clone();
                    self.runtime.spawn(async move {
                        let exists = client.exists(&request.word).await;
                        if tx.send(request.resolve(exists)).is_err() {
                            warn!("game closed before lookup finished");
                        }
                    });
                }
            }
        }
    }

    /// Take cues for the UI to play
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }
}
