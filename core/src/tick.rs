use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Gates state mutation to a fixed minimum interval of host-provided time.
///
/// The host calls into the engine every animation frame; only calls spaced
/// strictly more than `interval` after the previous tick actually step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickGate {
    interval: Duration,
    last: Duration,
}

impl TickGate {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Duration::ZERO,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn last_tick(&self) -> Duration {
        self.last
    }

    pub fn ready(&self, now: Duration) -> bool {
        now.saturating_sub(self.last) > self.interval
    }

    /// Runs `step` if a tick is due, recording `now` as the tick time.
    pub fn fire<T>(&mut self, now: Duration, step: impl FnOnce() -> T) -> Option<T> {
        if !self.ready(now) {
            return None;
        }
        self.last = now;
        Some(step())
    }

    pub fn rewind(&mut self) {
        self.last = Duration::ZERO;
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

/// Current direction of travel plus the one buffered request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    direction: Direction,
    pending: Option<Direction>,
}

impl Heading {
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            pending: None,
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn request(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Applies the buffered direction if `allowed` accepts it, clearing the
    /// buffer only on success.
    pub fn turn_if(&mut self, allowed: impl FnOnce(Direction) -> bool) -> bool {
        match self.pending {
            Some(next) if allowed(next) => {
                self.direction = next;
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Applies the buffered direction unconditionally.
    pub fn commit(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            self.direction = next;
        }
        self.direction
    }

    /// Next cell along the current direction, if `passable` lets it in.
    pub fn advance_from(&self, cell: Coord2, passable: impl FnOnce(Coord2) -> bool) -> Option<Coord2> {
        let next = step(cell, self.direction);
        passable(next).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn gate_requires_strictly_more_than_interval() {
        let mut gate = TickGate::default();

        assert_eq!(gate.fire(ms(200), || ()), None);
        assert_eq!(gate.fire(ms(201), || 1), Some(1));
        assert_eq!(gate.last_tick(), ms(201));
        assert_eq!(gate.fire(ms(350), || 2), None);
        assert_eq!(gate.fire(ms(402), || 3), Some(3));
    }

    #[test]
    fn rewind_restarts_from_zero() {
        let mut gate = TickGate::new(ms(50));
        gate.fire(ms(1_000), || ());
        gate.rewind();
        assert!(gate.ready(ms(51)));
    }

    #[test]
    fn turn_if_keeps_blocked_request_buffered() {
        let mut heading = Heading::new(Direction::Up);
        heading.request(Direction::Left);

        assert!(!heading.turn_if(|_| false));
        assert_eq!(heading.direction(), Direction::Up);
        assert_eq!(heading.pending(), Some(Direction::Left));

        assert!(heading.turn_if(|d| d == Direction::Left));
        assert_eq!(heading.direction(), Direction::Left);
        assert_eq!(heading.pending(), None);
    }

    #[test]
    fn commit_applies_and_clears() {
        let mut heading = Heading::new(Direction::Right);
        assert_eq!(heading.commit(), Direction::Right);
        heading.request(Direction::Down);
        assert_eq!(heading.commit(), Direction::Down);
        assert_eq!(heading.pending(), None);
    }

    #[test]
    fn advance_from_respects_passability() {
        let heading = Heading::new(Direction::Right);
        assert_eq!(heading.advance_from((1, 1), |_| true), Some((2, 1)));
        assert_eq!(heading.advance_from((1, 1), |cell| cell.0 < 2), None);
    }
}
