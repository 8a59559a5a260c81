use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::*;

/// Handle for one input subscription held with the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

/// Input event system owned by the host: keyboard, pointer, scripted replay.
pub trait InputHost {
    fn subscribe(&mut self) -> ListenerId;

    fn unsubscribe(&mut self, id: ListenerId);
}

/// A game bound to a host's input for as long as it is running.
///
/// Starting subscribes (replacing any earlier subscription), resetting and
/// dropping unsubscribe. Input only reaches the game while subscribed.
#[derive(Debug)]
pub struct Session<G: Game, H: InputHost> {
    game: G,
    host: H,
    listener: Option<ListenerId>,
}

impl<G: Game, H: InputHost> Session<G, H> {
    pub fn new(game: G, host: H) -> Self {
        Self {
            game,
            host,
            listener: None,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_subscribed(&self) -> bool {
        self.listener.is_some()
    }

    /// Subscribes afresh and starts the game. A finished game refuses to
    /// start and is left unsubscribed until it is reset.
    pub fn start(&mut self) -> bool {
        self.release();
        self.listener = Some(self.host.subscribe());
        let started = self.game.start();
        if !started && !self.game.running() {
            self.release();
        }
        started
    }

    pub fn reset(&mut self) {
        self.release();
        self.game.reset();
    }

    pub fn deliver(&mut self, input: Input, now: Duration) -> bool {
        self.listener.is_some() && self.game.handle_input(input, now)
    }

    pub fn advance(&mut self, now: Duration) -> TickOutcome {
        self.game.advance(now)
    }

    pub fn result(&self) -> GameResult {
        self.game.result()
    }

    fn release(&mut self) {
        if let Some(id) = self.listener.take() {
            self.host.unsubscribe(id);
        }
    }
}

impl<G: Game, H: InputHost> Drop for Session<G, H> {
    fn drop(&mut self) {
        self.release();
    }
}
