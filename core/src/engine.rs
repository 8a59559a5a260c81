use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn running(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn lost(self) -> bool {
        matches!(self, Self::Lost)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// `Idle -> Active`, any other state is left alone.
    pub(crate) fn begin(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Active;
            true
        } else {
            false
        }
    }

    /// Leaves `Active` for a terminal state. Terminal states are absorbing.
    pub(crate) fn finish(&mut self, won: bool) -> bool {
        if !self.running() {
            return false;
        }
        *self = if won { Self::Won } else { Self::Lost };
        true
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// End-of-round summary for the host to display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub score: u32,
    pub won: bool,
    pub lost: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<u32>,
}

impl GameResult {
    pub(crate) const fn new(status: GameStatus, score: u32, moves: Option<u32>) -> Self {
        Self {
            score,
            won: status.won(),
            lost: status.lost(),
            moves,
        }
    }
}

/// Logical input, already decoupled from the device that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Input {
    Direction(Direction),
    Point { x: f32, y: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Gated, idle or terminal, nothing changed.
    NoChange,
    /// Entities moved without scoring.
    Stepped,
    /// Something was eaten or collected.
    Collected,
    /// A pending card pair was compared.
    Resolved,
    Won,
    Lost,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Lifecycle shared by every engine, driven by the host once per frame.
pub trait Game {
    /// `Idle -> Active`. Returns whether the state changed.
    fn start(&mut self) -> bool;

    /// Rebuilds the initial state, dropping any buffered input or pending work.
    fn reset(&mut self);

    fn kind(&self) -> GameKind;

    fn status(&self) -> GameStatus;

    fn result(&self) -> GameResult;

    /// Feeds one input event. Returns whether it was accepted.
    fn handle_input(&mut self, input: Input, now: Duration) -> bool;

    /// Called every frame with the host clock.
    fn advance(&mut self, now: Duration) -> TickOutcome;

    fn running(&self) -> bool {
        self.status().running()
    }

    fn won(&self) -> bool {
        self.status().won()
    }

    fn lost(&self) -> bool {
        self.status().lost()
    }
}
