use alloc::collections::VecDeque;
use core::time::Duration;

use hashbrown::HashSet;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

pub const FOOD_POINTS: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// `(cols, rows)`
    pub size: Coord2,
    pub start: Coord2,
    pub start_direction: Direction,
    pub tick_ms: u64,
    /// Share of the board the snake must cover to win.
    pub win_percent: u8,
}

impl SnakeConfig {
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Integer form of `len >= cells * win_percent / 100`.
    pub const fn is_winning_length(&self, len: usize) -> bool {
        len * 100 >= self.total_cells() as usize * self.win_percent as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(GameError::ZeroTickInterval);
        }
        let (cols, rows) = self.size;
        let cells = i32::from(cols) * i32::from(rows);
        if cols <= 0 || rows <= 0 || cells < 2 || cells > i32::from(CellCount::MAX) {
            return Err(GameError::InvalidBoardSize(self.size));
        }
        if self.win_percent == 0 || self.win_percent > 100 {
            return Err(GameError::InvalidWinPercent);
        }
        if !in_bounds(self.start, self.size) {
            return Err(GameError::InvalidSpawn(self.start));
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            size: (20, 20),
            start: (10, 10),
            start_direction: Direction::Right,
            tick_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            win_percent: 30,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct SnakeRound {
    /// Head first.
    body: VecDeque<Coord2>,
    occupied: HashSet<Coord2>,
    heading: Heading,
    food: Coord2,
    score: u32,
    status: GameStatus,
}

impl SnakeRound {
    fn new<R: RandomSource>(config: &SnakeConfig, rng: &mut R) -> Self {
        let mut round = Self {
            body: VecDeque::from([config.start]),
            occupied: [config.start].into_iter().collect(),
            heading: Heading::new(config.start_direction),
            food: config.start,
            score: 0,
            status: GameStatus::Idle,
        };
        if let Some(food) = place_food(rng, config.size, &round.occupied) {
            round.food = food;
        }
        round
    }

    fn head(&self) -> Coord2 {
        self.body.front().copied().unwrap_or_default()
    }

    /// Turn commit, move, bounds and self check, food check, win check.
    fn tick<R: RandomSource>(&mut self, rng: &mut R, config: &SnakeConfig) -> TickOutcome {
        let direction = self.heading.commit();
        let head = step(self.head(), direction);

        if !in_bounds(head, config.size) {
            self.status.finish(false);
            log::debug!("hit the wall at {:?}, length {}", head, self.body.len());
            return TickOutcome::Lost;
        }
        if self.occupied.contains(&head) {
            self.status.finish(false);
            log::debug!("bit itself at {:?}, length {}", head, self.body.len());
            return TickOutcome::Lost;
        }

        self.body.push_front(head);
        self.occupied.insert(head);

        if head != self.food {
            if let Some(tail) = self.body.pop_back() {
                self.occupied.remove(&tail);
            }
            return TickOutcome::Stepped;
        }

        self.score += FOOD_POINTS;
        match place_food(rng, config.size, &self.occupied) {
            Some(food) => self.food = food,
            None => log::warn!("No free cell left for food, keeping {:?}", self.food),
        }
        log::trace!("ate at {:?}, length {}, food now {:?}", head, self.body.len(), self.food);

        if config.is_winning_length(self.body.len()) {
            self.status.finish(true);
            log::debug!("grew to {} cells, score {}", self.body.len(), self.score);
            TickOutcome::Won
        } else {
            TickOutcome::Collected
        }
    }
}

/// Rejection samples a cell outside `occupied`. `None` when the board is full.
pub fn place_food<R: RandomSource + ?Sized>(
    rng: &mut R,
    (cols, rows): Coord2,
    occupied: &HashSet<Coord2>,
) -> Option<Coord2> {
    if occupied.len() >= usize::from(mult(cols, rows)) {
        return None;
    }
    loop {
        let col = rng.below(cols as usize) as Coord;
        let row = rng.below(rows as usize) as Coord;
        if !occupied.contains(&(col, row)) {
            return Some((col, row));
        }
    }
}

/// Snake: a growing chain of cells chasing one food cell.
#[derive(Clone, Debug)]
pub struct SnakeGame<R = SmallRng> {
    config: SnakeConfig,
    round: SnakeRound,
    gate: TickGate,
    rng: R,
    avatar: Avatar,
}

impl SnakeGame<SmallRng> {
    pub fn new(config: SnakeConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: RandomSource> SnakeGame<R> {
    pub fn with_rng(config: SnakeConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            round: SnakeRound::new(&config, &mut rng),
            gate: TickGate::new(config.tick_interval()),
            config,
            rng,
            avatar: Avatar::builtin(),
        })
    }

    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Head first.
    pub fn body(&self) -> impl ExactSizeIterator<Item = Coord2> + '_ {
        self.round.body.iter().copied()
    }

    pub fn head(&self) -> Coord2 {
        self.round.head()
    }

    pub fn length(&self) -> usize {
        self.round.body.len()
    }

    pub fn contains(&self, cell: Coord2) -> bool {
        self.round.occupied.contains(&cell)
    }

    pub fn food(&self) -> Coord2 {
        self.round.food
    }

    pub fn direction(&self) -> Direction {
        self.round.heading.direction()
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    /// Buffers a turn. Reversing onto the current direction is rejected.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.round.status.running() {
            return false;
        }
        if direction == self.round.heading.direction().opposite() {
            log::trace!("rejected reversal to {:?}", direction);
            return false;
        }
        self.round.heading.request(direction);
        true
    }
}

impl<R: RandomSource> Game for SnakeGame<R> {
    fn start(&mut self) -> bool {
        let started = self.round.status.begin();
        if started {
            self.gate.rewind();
            log::debug!("snake started at {:?}, food at {:?}", self.head(), self.food());
        }
        started
    }

    fn reset(&mut self) {
        self.round = SnakeRound::new(&self.config, &mut self.rng);
        self.gate.rewind();
    }

    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn status(&self) -> GameStatus {
        self.round.status
    }

    fn result(&self) -> GameResult {
        GameResult::new(self.round.status, self.round.score, None)
    }

    fn handle_input(&mut self, input: Input, _now: Duration) -> bool {
        match input {
            Input::Direction(direction) => self.request_direction(direction),
            Input::Point { .. } => false,
        }
    }

    fn advance(&mut self, now: Duration) -> TickOutcome {
        if !self.round.status.running() {
            return TickOutcome::NoChange;
        }
        let config = &self.config;
        self.gate
            .fire(now, || self.round.tick(&mut self.rng, config))
            .unwrap_or(TickOutcome::NoChange)
    }
}
