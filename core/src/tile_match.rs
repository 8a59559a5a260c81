use alloc::vec::Vec;
use core::time::Duration;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

pub const MATCH_POINTS: u32 = 100;
pub const COMPLETION_BONUS: u32 = 500;
pub const MOVE_PENALTY: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Paw,
    Apple,
    Sleep,
    Pill,
    Target,
    Heart,
    Star,
    Sparkle,
}

impl Symbol {
    pub const ALL: [Symbol; 8] = [
        Self::Paw,
        Self::Apple,
        Self::Sleep,
        Self::Pill,
        Self::Target,
        Self::Heart,
        Self::Star,
        Self::Sparkle,
    ];

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Paw => "🐾",
            Self::Apple => "🍎",
            Self::Sleep => "💤",
            Self::Pill => "💊",
            Self::Target => "🎯",
            Self::Heart => "❤️",
            Self::Star => "⭐",
            Self::Sparkle => "🌟",
        }
    }

    /// The face a custom avatar replaces when one is loaded.
    pub const fn shows_avatar(self) -> bool {
        matches!(self, Self::Paw)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileMatchConfig {
    /// `(cols, rows)`
    pub size: Coord2,
    pub card_size: f32,
    pub card_gap: f32,
    pub offset: (f32, f32),
    /// How long a completed pair stays face up before it resolves.
    pub resolve_delay_ms: u64,
}

impl TileMatchConfig {
    pub const fn total_cards(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn total_pairs(&self) -> CellCount {
        self.total_cards() / 2
    }

    pub const fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        let cards = self.total_cards();
        if cards == 0 || cards % 2 != 0 {
            return Err(GameError::InvalidBoardShape);
        }
        let requested = usize::from(self.total_pairs());
        if requested > Symbol::ALL.len() {
            return Err(GameError::TooManyPairs {
                requested,
                available: Symbol::ALL.len(),
            });
        }
        Ok(())
    }
}

impl Default for TileMatchConfig {
    fn default() -> Self {
        Self {
            size: (4, 4),
            card_size: 80.0,
            card_gap: 10.0,
            offset: (50.0, 50.0),
            resolve_delay_ms: 1000,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub row: Coord,
    pub col: Coord,
    pub symbol: Symbol,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    const fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Rect {
    /// Inclusive on every edge.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.size && y >= self.y && y <= self.y + self.size
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct PendingPair {
    first: usize,
    second: usize,
    due: Duration,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card turned, the pair resolves at `due`.
    PairPending { due: Duration },
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Memory game: a shuffled deck of symbol pairs, two cards turned per move.
#[derive(Clone, Debug)]
pub struct TileMatch<R = SmallRng> {
    config: TileMatchConfig,
    rng: R,
    cards: Vec<Card>,
    first: Option<usize>,
    pending: Option<PendingPair>,
    matched_pairs: CellCount,
    score: u32,
    moves: u32,
    status: GameStatus,
    avatar: Avatar,
}

impl TileMatch<SmallRng> {
    pub fn new(config: TileMatchConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: RandomSource> TileMatch<R> {
    pub fn with_rng(config: TileMatchConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut game = Self::blank(config, rng);
        game.deal();
        Ok(game)
    }

    /// Lays `deck` out row-major without shuffling. Later resets shuffle as usual.
    pub fn with_deck(config: TileMatchConfig, deck: &[Symbol], rng: R) -> Result<Self> {
        config.validate()?;
        if deck.len() != usize::from(config.total_cards()) || !is_paired(deck) {
            return Err(GameError::InvalidDeck);
        }
        let mut game = Self::blank(config, rng);
        game.lay_out(deck);
        Ok(game)
    }

    fn blank(config: TileMatchConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            cards: Vec::new(),
            first: None,
            pending: None,
            matched_pairs: 0,
            score: 0,
            moves: 0,
            status: GameStatus::Idle,
            avatar: Avatar::builtin(),
        }
    }

    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn config(&self) -> &TileMatchConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, row: Coord, col: Coord) -> Option<&Card> {
        self.cards.iter().find(|card| card.row == row && card.col == col)
    }

    pub fn card_bounds(&self, card: &Card) -> Rect {
        let pitch = self.config.card_size + self.config.card_gap;
        Rect {
            x: self.config.offset.0 + f32::from(card.col) * pitch,
            y: self.config.offset.1 + f32::from(card.row) * pitch,
            size: self.config.card_size,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> CellCount {
        self.config.total_pairs()
    }

    /// False while a completed pair waits for resolution.
    pub fn can_select(&self) -> bool {
        self.pending.is_none()
    }

    /// When the pending pair resolves, for hosts arming a one-shot timer.
    pub fn pending_due(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.due)
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    /// Turns the card under `(x, y)` face up. Misses, face-up cards, idle or
    /// finished games and pending resolutions are ignored.
    pub fn select_at(&mut self, x: f32, y: f32, now: Duration) -> SelectOutcome {
        if !self.status.running() || self.pending.is_some() {
            return SelectOutcome::NoChange;
        }

        let Some(index) = self
            .cards
            .iter()
            .position(|card| card.is_selectable() && self.card_bounds(card).contains(x, y))
        else {
            return SelectOutcome::NoChange;
        };

        self.cards[index].revealed = true;
        match self.first.take() {
            None => {
                self.first = Some(index);
                SelectOutcome::Revealed
            }
            Some(first) => {
                self.moves += 1;
                let due = now + self.config.resolve_delay();
                self.pending = Some(PendingPair {
                    first,
                    second: index,
                    due,
                });
                log::trace!("pair pending until {:?}, move {}", due, self.moves);
                SelectOutcome::PairPending { due }
            }
        }
    }

    /// Compares the pending pair, keeping matches face up and turning
    /// mismatches back down.
    pub fn resolve_pending_pair(&mut self) -> TickOutcome {
        let Some(PendingPair { first, second, .. }) = self.pending.take() else {
            return TickOutcome::NoChange;
        };

        if self.cards[first].symbol != self.cards[second].symbol {
            self.cards[first].revealed = false;
            self.cards[second].revealed = false;
            return TickOutcome::Resolved;
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.matched_pairs += 1;
        self.score += MATCH_POINTS;

        if self.matched_pairs == self.total_pairs() && self.status.finish(true) {
            self.score += completion_bonus(self.moves);
            log::debug!("all pairs matched in {} moves, score {}", self.moves, self.score);
            TickOutcome::Won
        } else {
            TickOutcome::Resolved
        }
    }

    fn deal(&mut self) {
        let mut deck: Vec<Symbol> = Symbol::ALL[..usize::from(self.total_pairs())]
            .iter()
            .flat_map(|&symbol| [symbol, symbol])
            .collect();
        shuffle(&mut deck, &mut self.rng);
        self.lay_out(&deck);
    }

    fn lay_out(&mut self, deck: &[Symbol]) {
        let (cols, _) = self.config.size;
        self.cards = deck
            .iter()
            .enumerate()
            .map(|(index, &symbol)| {
                let index = index as Coord;
                Card {
                    row: index / cols,
                    col: index % cols,
                    symbol,
                    revealed: false,
                    matched: false,
                }
            })
            .collect();
    }
}

impl<R: RandomSource> Game for TileMatch<R> {
    fn start(&mut self) -> bool {
        self.status.begin()
    }

    fn reset(&mut self) {
        self.first = None;
        self.pending = None;
        self.matched_pairs = 0;
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Idle;
        self.deal();
    }

    fn kind(&self) -> GameKind {
        GameKind::TileMatch
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn result(&self) -> GameResult {
        GameResult::new(self.status, self.score, Some(self.moves))
    }

    fn handle_input(&mut self, input: Input, now: Duration) -> bool {
        match input {
            Input::Point { x, y } => self.select_at(x, y, now).has_update(),
            Input::Direction(_) => false,
        }
    }

    /// Resolves the pending pair once its delay has passed.
    fn advance(&mut self, now: Duration) -> TickOutcome {
        match self.pending {
            Some(pending) if now >= pending.due => self.resolve_pending_pair(),
            _ => TickOutcome::NoChange,
        }
    }
}

pub const fn completion_bonus(moves: u32) -> u32 {
    COMPLETION_BONUS.saturating_sub(moves.saturating_mul(MOVE_PENALTY))
}

fn is_paired(deck: &[Symbol]) -> bool {
    Symbol::ALL.iter().all(|symbol| {
        let count = deck.iter().filter(|&card| card == symbol).count();
        count == 0 || count == 2
    })
}
