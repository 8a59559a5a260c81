use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use arcade_core::{Avatar, MazeChase, SnakeGame, TileMatch};
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, warn};

use crate::config::HostConfig;
use crate::runner::{RunOptions, RunReport, run};
use crate::script::Timeline;

mod config;
mod render;
mod runner;
mod script;

#[derive(Parser, Debug)]
#[command(name = "arcade", version, about = "Headless runner for the arcade mini-games")]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity,

    /// TOML file with [tile_match], [maze_chase] and [snake] tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    game: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flip cards and clear matching pairs.
    Tiles(RunArgs),
    /// Eat every dot while avoiding the ghosts.
    Maze(RunArgs),
    /// Grow the snake without hitting a wall or yourself.
    Snake(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum number of frames to simulate.
    #[arg(long, default_value_t = 3000)]
    frames: u32,

    /// Host clock step between frames.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Follow the wall clock and sleep between frames.
    #[arg(long)]
    realtime: bool,

    /// Scripted input as `EVENT@FRAME` tokens, e.g. `ArrowUp@12 90,90@0`.
    #[arg(long)]
    script: Option<String>,

    /// Image to use for the player token.
    #[arg(long)]
    avatar: Option<PathBuf>,

    /// Happiness a win awards the pet, reported with the result.
    #[arg(long, default_value_t = 0)]
    happiness_bonus: u8,

    /// Print the final board before the result.
    #[arg(long)]
    board: bool,
}

impl RunArgs {
    fn options(&self) -> RunOptions {
        RunOptions {
            frames: self.frames,
            frame: Duration::from_millis(self.frame_ms),
            realtime: self.realtime,
            happiness_bonus: self.happiness_bonus,
        }
    }

    fn timeline(&self) -> Result<Timeline> {
        let script = self.script.as_deref().unwrap_or_default();
        let timeline = Timeline::parse(script).context("parsing --script")?;
        debug!("loaded {} scripted events", timeline.len());
        Ok(timeline)
    }

    /// Resolves the avatar the way a renderer would: a missing file falls
    /// back to the built-in visual.
    fn avatar(&self) -> Avatar {
        let Some(path) = &self.avatar else {
            return Avatar::builtin();
        };
        let mut avatar = Avatar::custom(path.display().to_string());
        if is_readable(path) {
            avatar.mark_loaded();
        } else {
            avatar.mark_failed();
        }
        avatar
    }
}

fn is_readable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };

    let report = match &cli.game {
        Command::Tiles(args) => {
            let game = TileMatch::new(config.tile_match, args.seed)
                .context("invalid tile_match config")?
                .with_avatar(args.avatar());
            run(game, &args.timeline()?, &args.options())
        }
        Command::Maze(args) => {
            let game = MazeChase::new(config.maze_chase, args.seed)
                .context("invalid maze_chase config")?
                .with_avatar(args.avatar());
            run(game, &args.timeline()?, &args.options())
        }
        Command::Snake(args) => {
            let game = SnakeGame::new(config.snake, args.seed)
                .context("invalid snake config")?
                .with_avatar(args.avatar());
            run(game, &args.timeline()?, &args.options())
        }
    };

    print_report(&cli.game, &report)
}

fn print_report(command: &Command, report: &RunReport) -> Result<()> {
    let (Command::Tiles(args) | Command::Maze(args) | Command::Snake(args)) = command;
    if args.board {
        print!("{}", report.board);
    }
    if !report.result.won && !report.result.lost {
        warn!("frame budget ran out before the round finished");
    }
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}
