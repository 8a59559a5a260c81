use std::thread;
use std::time::Duration;

use arcade_core::*;
use log::{debug, info, trace};
use serde::Serialize;
use web_time::Instant;

use crate::render::TextBoard;
use crate::script::Timeline;

/// Scripted replay stands in for the keyboard and pointer listeners.
#[derive(Debug, Default)]
pub struct ScriptHost {
    next: u32,
    active: Option<ListenerId>,
}

impl ScriptHost {
    pub fn active(&self) -> Option<ListenerId> {
        self.active
    }
}

impl InputHost for ScriptHost {
    fn subscribe(&mut self) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        debug!("input listener {} attached", id.0);
        self.active = Some(id);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        debug!("input listener {} detached", id.0);
        if self.active == Some(id) {
            self.active = None;
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct RunOptions {
    pub frames: u32,
    pub frame: Duration,
    /// Sleep between frames and read the wall clock instead of simulating it.
    pub realtime: bool,
    /// Happiness a won round hands to the pet.
    pub happiness_bonus: u8,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 3000,
            frame: Duration::from_millis(16),
            realtime: false,
            happiness_bonus: 0,
        }
    }
}

enum Clock {
    Simulated(Duration),
    Wall(Instant),
}

impl Clock {
    fn new(options: &RunOptions) -> Self {
        if options.realtime {
            Self::Wall(Instant::now())
        } else {
            Self::Simulated(options.frame)
        }
    }

    fn now(&self, frame: u32) -> Duration {
        match self {
            Self::Simulated(step) => step.saturating_mul(frame + 1),
            Self::Wall(start) => start.elapsed(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub result: GameResult,
    pub frames: u32,
    pub inputs_accepted: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<Reward>,
    #[serde(skip)]
    pub board: String,
}

/// Drives `game` frame by frame until it finishes or runs out of frames.
pub fn run<G: Game + TextBoard>(game: G, timeline: &Timeline, options: &RunOptions) -> RunReport {
    let mut session = Session::new(game, ScriptHost::default());
    session.start();

    let clock = Clock::new(options);
    let mut frames = 0;
    let mut inputs_accepted = 0;
    for frame in 0..options.frames {
        frames = frame + 1;
        let now = clock.now(frame);
        for &input in timeline.at(frame) {
            if session.deliver(input, now) {
                inputs_accepted += 1;
            } else {
                trace!("frame {frame}: {input:?} ignored");
            }
        }
        let outcome = session.advance(now);
        if outcome.has_update() {
            trace!("frame {frame}: {outcome:?}");
        }
        if outcome.is_terminal() {
            break;
        }
        if options.realtime {
            thread::sleep(options.frame);
        }
    }

    let result = session.result();
    info!(
        "finished after {} frames: score {}, won {}, lost {}",
        frames, result.score, result.won, result.lost
    );
    RunReport {
        reward: Reward::for_result(session.game().kind(), &result, options.happiness_bonus),
        result,
        frames,
        inputs_accepted,
        board: session.game().render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_without_input_runs_into_the_wall() {
        let game = SnakeGame::new(SnakeConfig::default(), 5).unwrap();
        let report = run(game, &Timeline::default(), &RunOptions::default());

        assert!(report.result.lost);
        assert!(!report.result.won);
        assert!(report.frames < RunOptions::default().frames);
        assert_eq!(report.reward, None);
    }

    #[test]
    fn scripted_clicks_clear_a_single_pair() {
        let config = TileMatchConfig {
            size: (2, 1),
            ..TileMatchConfig::default()
        };
        let game = TileMatch::new(config, 11).unwrap();
        let timeline = Timeline::parse("90,90@0 180,90@1 90,90@2").unwrap();
        let options = RunOptions {
            happiness_bonus: 15,
            ..RunOptions::default()
        };
        let report = run(game, &timeline, &options);

        assert!(report.result.won);
        assert_eq!(report.result.score, 590);
        assert_eq!(report.result.moves, Some(1));
        assert_eq!(report.inputs_accepted, 2);
        // Second click at 32 ms, due at 1032 ms, first reached on frame 65.
        assert_eq!(report.frames, 65);
        assert_eq!(
            report.reward,
            Some(Reward {
                kind: GameKind::TileMatch,
                happiness: 15,
                energy_cost: 2,
            })
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reward"]["energy_cost"], 2);
        assert_eq!(json["score"], 590);
    }

    #[test]
    fn frame_budget_caps_the_run() {
        let game = MazeChase::new(MazeConfig::default(), 2).unwrap();
        let options = RunOptions {
            frames: 5,
            ..RunOptions::default()
        };
        let report = run(game, &Timeline::default(), &options);

        assert_eq!(report.frames, 5);
        assert!(!report.result.won && !report.result.lost);
        assert!(report.board.contains('P'));
    }

    #[test]
    fn session_host_tracks_one_listener() {
        let mut host = ScriptHost::default();
        let first = host.subscribe();
        host.unsubscribe(first);
        let second = host.subscribe();

        assert_eq!(host.active(), Some(second));
        assert_ne!(first, second);
    }
}
