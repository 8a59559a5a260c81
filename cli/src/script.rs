use std::collections::BTreeMap;

use arcade_core::{Direction, Input};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Event {0:?} has no @FRAME suffix")]
    MissingFrame(String),
    #[error("Event {0:?} has an invalid frame number")]
    BadFrame(String),
    #[error("Event {0:?} is neither a key name nor an X,Y point")]
    UnknownEvent(String),
}

/// Maps the original key names onto logical directions.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Scripted input, keyed by the frame it is delivered on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    events: BTreeMap<u32, Vec<Input>>,
}

impl Timeline {
    /// Parses whitespace separated `EVENT@FRAME` tokens, e.g.
    /// `ArrowUp@12 d@40 90,90@0`.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut events: BTreeMap<u32, Vec<Input>> = BTreeMap::new();
        for token in script.split_whitespace() {
            let (event, frame) = token
                .rsplit_once('@')
                .ok_or_else(|| ScriptError::MissingFrame(token.to_owned()))?;
            let frame: u32 = frame
                .parse()
                .map_err(|_| ScriptError::BadFrame(token.to_owned()))?;
            let input = parse_event(event).ok_or_else(|| ScriptError::UnknownEvent(token.to_owned()))?;
            events.entry(frame).or_default().push(input);
        }
        Ok(Self { events })
    }

    pub fn at(&self, frame: u32) -> &[Input] {
        self.events.get(&frame).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn parse_event(event: &str) -> Option<Input> {
    if let Some(direction) = direction_for_key(event) {
        return Some(Input::Direction(direction));
    }
    let (x, y) = event.split_once(',')?;
    Some(Input::Point {
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
    })
}
