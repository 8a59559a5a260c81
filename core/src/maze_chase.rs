use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use ndarray::Array2;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

pub const DOT_POINTS: u32 = 10;
pub const PELLET_POINTS: u32 = 50;

/// Built-in maze. `#` wall, `.` dot, `o` power pellet, `P` player spawn, `G`
/// adversary spawn, space empty. Rows 7, 8, 10, 12 and 13 are open at both
/// edges and connect through the side tunnel.
pub const CLASSIC_LAYOUT: [&str; 23] = [
    "############################",
    "#............##............#",
    "#o####.#####.##.#####.####o#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##          ##.#     ",
    "     #.## ##    ## ##.#     ",
    "######.## #      # ##.######",
    "      .   #  GG  #   .      ",
    "######.## #  GG  # ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "######.##### ## #####.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o..##................##..o#",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#............P.............#",
    "############################",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazeCell {
    Wall,
    Empty,
    Dot,
    PowerPellet,
}

impl MazeCell {
    pub const fn is_collectible(self) -> bool {
        matches!(self, Self::Dot | Self::PowerPellet)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Empty => ' ',
            Self::Dot => '.',
            Self::PowerPellet => 'o',
        }
    }
}

impl Default for MazeCell {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostTint {
    Red,
    Pink,
    Cyan,
    Orange,
}

impl GhostTint {
    pub const ALL: [GhostTint; 4] = [Self::Red, Self::Pink, Self::Cyan, Self::Orange];

    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#FF0000",
            Self::Pink => "#FFB8FF",
            Self::Cyan => "#00FFFF",
            Self::Orange => "#FFB852",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost {
    pub cell: Coord2,
    pub direction: Direction,
    pub tint: GhostTint,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub cell: Coord2,
    pub heading: Heading,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub tick_ms: u64,
    /// Probability an adversary heads for the player instead of wandering.
    pub pursuit_chance: f64,
    /// Custom layout rows, the classic maze when absent.
    pub layout: Option<Vec<String>>,
}

impl MazeConfig {
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(GameError::ZeroTickInterval);
        }
        if !(0.0..=1.0).contains(&self.pursuit_chance) {
            return Err(GameError::InvalidChance);
        }
        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            pursuit_chance: 0.3,
            layout: None,
        }
    }
}

/// Static maze data every round is copied from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeTemplate {
    cells: Array2<MazeCell>,
    player_spawn: Coord2,
    ghosts: Vec<Ghost>,
    total_dots: CellCount,
}

impl MazeTemplate {
    pub fn from_config(config: &MazeConfig) -> Result<Self> {
        match &config.layout {
            Some(rows) => Self::parse(rows),
            None => Self::parse(&CLASSIC_LAYOUT[..]),
        }
    }

    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(GameError::EmptyMaze);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(GameError::EmptyMaze);
        }

        let mut cells = Array2::from_elem([width, rows.len()], MazeCell::Wall);
        let mut player_spawn = None;
        let mut ghosts = Vec::new();

        for (y, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(GameError::RaggedMaze {
                    row: y,
                    found,
                    expected: width,
                });
            }

            for (x, glyph) in line.chars().enumerate() {
                let at = (x as Coord, y as Coord);
                cells[at.to_nd_index()] = match glyph {
                    '#' => MazeCell::Wall,
                    '.' => MazeCell::Dot,
                    'o' => MazeCell::PowerPellet,
                    ' ' => MazeCell::Empty,
                    'P' => {
                        if player_spawn.replace(at).is_some() {
                            log::warn!("Extra player spawn at {:?}, using the last one", at);
                        }
                        MazeCell::Empty
                    }
                    'G' => {
                        let index = ghosts.len();
                        ghosts.push(Ghost {
                            cell: at,
                            direction: Direction::ALL[index % Direction::ALL.len()],
                            tint: GhostTint::ALL[index % GhostTint::ALL.len()],
                        });
                        MazeCell::Empty
                    }
                    _ => return Err(GameError::UnknownMazeGlyph { glyph, at }),
                };
            }
        }

        // the tunnel joins the two edge columns, so they must agree on walls
        let last = width - 1;
        for row in 0..rows.len() {
            if (cells[[0, row]] == MazeCell::Wall) != (cells[[last, row]] == MazeCell::Wall) {
                return Err(GameError::UnpairedTunnel { row });
            }
        }

        let player_spawn = player_spawn.ok_or(GameError::MissingPlayerSpawn)?;
        let total_dots = cells
            .iter()
            .filter(|cell| cell.is_collectible())
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;

        Ok(Self {
            cells,
            player_spawn,
            ghosts,
            total_dots,
        })
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn total_dots(&self) -> CellCount {
        self.total_dots
    }

    pub fn player_spawn(&self) -> Coord2 {
        self.player_spawn
    }
}

/// Everything one round mutates. Rebuilt from the template on reset.
#[derive(Clone, Debug, PartialEq)]
struct MazeRound {
    maze: Array2<MazeCell>,
    player: Player,
    ghosts: Vec<Ghost>,
    score: u32,
    dots_eaten: CellCount,
    total_dots: CellCount,
    status: GameStatus,
}

impl MazeRound {
    fn new(template: &MazeTemplate) -> Self {
        Self {
            maze: template.cells.clone(),
            player: Player {
                cell: template.player_spawn,
                heading: Heading::new(Direction::Up),
            },
            ghosts: template.ghosts.clone(),
            score: 0,
            dots_eaten: 0,
            total_dots: template.total_dots,
            status: GameStatus::Idle,
        }
    }

    /// One simulation step. The order is observable: player turn, player move,
    /// tunnel, collect, win check, adversaries, collision check.
    fn tick<R: RandomSource>(&mut self, rng: &mut R, pursuit_chance: f64) -> TickOutcome {
        let here = self.player.cell;
        self.player
            .heading
            .turn_if(|direction| is_passable(&self.maze, step(here, direction)));

        if let Some(next) = self
            .player
            .heading
            .advance_from(here, |cell| is_passable(&self.maze, cell))
        {
            self.player.cell = wrap_tunnel(&self.maze, next);
        }

        let collected = self.collect();

        if self.dots_eaten >= self.total_dots {
            self.status.finish(true);
            log::debug!("maze cleared, score {}", self.score);
            return TickOutcome::Won;
        }

        let target = self.player.cell;
        for ghost in &mut self.ghosts {
            let open = open_directions(&self.maze, ghost.cell);
            if let Some(direction) =
                choose_direction(ghost.cell, target, &open, rng, pursuit_chance)
            {
                ghost.direction = direction;
                ghost.cell = wrap_tunnel(&self.maze, step(ghost.cell, direction));
            }
        }

        if self.ghosts.iter().any(|ghost| ghost.cell == self.player.cell) {
            self.status.finish(false);
            log::debug!("caught at {:?}, score {}", self.player.cell, self.score);
            return TickOutcome::Lost;
        }

        if collected {
            TickOutcome::Collected
        } else {
            TickOutcome::Stepped
        }
    }

    fn collect(&mut self) -> bool {
        let index = self.player.cell.to_nd_index();
        let points = match self.maze[index] {
            MazeCell::Dot => DOT_POINTS,
            // no frightened mode, pellets only score
            MazeCell::PowerPellet => PELLET_POINTS,
            MazeCell::Wall | MazeCell::Empty => return false,
        };
        self.maze[index] = MazeCell::Empty;
        self.score += points;
        self.dots_eaten += 1;
        log::trace!("collected {:?}, {}/{}", self.player.cell, self.dots_eaten, self.total_dots);
        true
    }
}

/// Maze chase: one player collecting dots while adversaries roam.
#[derive(Clone, Debug)]
pub struct MazeChase<R = SmallRng> {
    config: MazeConfig,
    template: MazeTemplate,
    round: MazeRound,
    gate: TickGate,
    rng: R,
    avatar: Avatar,
}

impl MazeChase<SmallRng> {
    pub fn new(config: MazeConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: RandomSource> MazeChase<R> {
    pub fn with_rng(config: MazeConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let template = MazeTemplate::from_config(&config)?;
        Ok(Self {
            round: MazeRound::new(&template),
            gate: TickGate::new(config.tick_interval()),
            config,
            template,
            rng,
            avatar: Avatar::builtin(),
        })
    }

    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.round.maze)
    }

    pub fn maze(&self) -> &Array2<MazeCell> {
        &self.round.maze
    }

    pub fn cell_at(&self, cell: Coord2) -> Option<MazeCell> {
        in_bounds(cell, self.size()).then(|| self.round.maze[cell.to_nd_index()])
    }

    pub fn player(&self) -> &Player {
        &self.round.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.round.ghosts
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn dots_eaten(&self) -> CellCount {
        self.round.dots_eaten
    }

    pub fn total_dots(&self) -> CellCount {
        self.round.total_dots
    }

    pub fn is_passable(&self, cell: Coord2) -> bool {
        is_passable(&self.round.maze, cell)
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    /// Buffers a turn, applied on the first tick where it is legal.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.round.status.running() {
            return false;
        }
        self.round.player.heading.request(direction);
        true
    }
}

impl<R: RandomSource> Game for MazeChase<R> {
    fn start(&mut self) -> bool {
        let started = self.round.status.begin();
        if started {
            self.gate.rewind();
            log::debug!("maze chase started, {} dots", self.round.total_dots);
        }
        started
    }

    fn reset(&mut self) {
        self.round = MazeRound::new(&self.template);
        self.gate.rewind();
    }

    fn kind(&self) -> GameKind {
        GameKind::MazeChase
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
        let pursuit_chance = self.config.pursuit_chance;
        self.gate
            .fire(now, || self.round.tick(&mut self.rng, pursuit_chance))
            .unwrap_or(TickOutcome::NoChange)
    }
}

fn grid_size(maze: &Array2<MazeCell>) -> Coord2 {
    let (cols, rows) = maze.dim();
    (cols as Coord, rows as Coord)
}

/// Inside the rows and not a wall. The columns just past either edge are open
/// so movement can enter the tunnel.
pub fn is_passable(maze: &Array2<MazeCell>, cell: Coord2) -> bool {
    let (cols, rows) = grid_size(maze);
    let (col, row) = cell;
    if row < 0 || row >= rows {
        return false;
    }
    if col == -1 || col == cols {
        return true;
    }
    in_bounds(cell, (cols, rows)) && maze[cell.to_nd_index()] != MazeCell::Wall
}

/// Columns form a ring.
pub fn wrap_tunnel(maze: &Array2<MazeCell>, (col, row): Coord2) -> Coord2 {
    let (cols, _) = grid_size(maze);
    if col < 0 {
        (cols - 1, row)
    } else if col >= cols {
        (0, row)
    } else {
        (col, row)
    }
}

pub fn open_directions(maze: &Array2<MazeCell>, cell: Coord2) -> SmallVec<[Direction; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| is_passable(maze, step(cell, direction)))
        .collect()
}

/// Axis with the larger distance to `target`, horizontal on ties.
pub fn pursuit_direction(from: Coord2, target: Coord2) -> Direction {
    let dx = target.0 - from.0;
    let dy = target.1 - from.1;
    if dx.abs() >= dy.abs() {
        if dx > 0 { Direction::Right } else { Direction::Left }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Pursues with probability `pursuit_chance` when that way is open, otherwise
/// picks uniformly among `open`. `None` when boxed in.
pub fn choose_direction<R: RandomSource + ?Sized>(
    from: Coord2,
    target: Coord2,
    open: &[Direction],
    rng: &mut R,
    pursuit_chance: f64,
) -> Option<Direction> {
    if open.is_empty() {
        return None;
    }
    if rng.chance(pursuit_chance) {
        let toward = pursuit_direction(from, target);
        if open.contains(&toward) {
            return Some(toward);
        }
    }
    Some(open[rng.below(open.len())])
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::random::testing::Scripted;
    use Direction::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn config(rows: &[&str]) -> MazeConfig {
        MazeConfig {
            layout: Some(rows.iter().map(|row| String::from(*row)).collect()),
            ..Default::default()
        }
    }

    fn started(rows: &[&str], rng: Scripted) -> MazeChase<Scripted> {
        let mut game = MazeChase::with_rng(config(rows), rng).unwrap();
        assert!(game.start());
        game
    }

    #[test]
    fn classic_layout_matches_expected_shape() {
        let game = MazeChase::new(MazeConfig::default(), 1).unwrap();

        assert_eq!(game.size(), (28, 23));
        assert_eq!(game.total_dots(), 207);
        assert_eq!(game.player().cell, (13, 21));
        assert_eq!(game.player().heading.direction(), Up);
        let tints: Vec<_> = game.ghosts().iter().map(|ghost| ghost.tint).collect();
        assert_eq!(tints, GhostTint::ALL.to_vec());
        let directions: Vec<_> = game.ghosts().iter().map(|ghost| ghost.direction).collect();
        assert_eq!(directions, Direction::ALL.to_vec());
        assert_eq!(game.cell_at((1, 2)), Some(MazeCell::PowerPellet));
        assert_eq!(game.cell_at((28, 0)), None);
    }

    #[test]
    fn tunnel_wraps_both_ways() {
        let mut game = started(&["#####", "P....", "#####"], Scripted::default());

        assert!(game.request_direction(Left));
        assert_eq!(game.advance(ms(201)), TickOutcome::Collected);
        assert_eq!(game.player().cell, (4, 1));
        assert_eq!(game.player().heading.direction(), Left);

        game.request_direction(Right);
        assert_eq!(game.advance(ms(402)), TickOutcome::Stepped);
        assert_eq!(game.player().cell, (0, 1));
    }

    #[test]
    fn tunnel_columns_are_passable_only_within_rows() {
        let game = started(&["#####", "P....", "#####"], Scripted::default());

        assert!(game.is_passable((-1, 1)));
        assert!(game.is_passable((5, 1)));
        assert!(game.is_passable((-1, 0)));
        assert!(!game.is_passable((-1, 3)));
        assert!(!game.is_passable((-2, 1)));
        assert!(!game.is_passable((0, 0)));
    }

    #[test]
    fn blocked_request_stays_buffered_until_legal() {
        let mut game = started(&["#####", "#P..#", "#.###", "#####"], Scripted::default());

        game.request_direction(Right);
        game.advance(ms(201));
        assert_eq!(game.player().cell, (2, 1));

        // down is a wall here but opens up once back at column 1
        game.request_direction(Down);
        game.advance(ms(402));
        assert_eq!(game.player().cell, (3, 1));
        assert_eq!(game.player().heading.pending(), Some(Down));

        game.request_direction(Left);
        game.advance(ms(603));
        game.request_direction(Down);
        game.advance(ms(804));
        assert_eq!(game.player().cell, (1, 1));
        game.advance(ms(1005));
        assert_eq!(game.player().cell, (1, 2));
        assert_eq!(game.player().heading.direction(), Down);
        assert_eq!(game.player().heading.pending(), None);
    }

    #[test]
    fn collecting_everything_wins_exactly_at_total() {
        let mut game = started(&["#####", "#P.o#", "#####"], Scripted::default());
        game.request_direction(Right);

        let mut now = 0;
        let mut eaten = 0;
        while game.running() {
            now += 201;
            game.advance(ms(now));
            assert!(game.dots_eaten() >= eaten);
            assert!(game.dots_eaten() <= game.total_dots());
            assert_eq!(game.won(), game.dots_eaten() == game.total_dots());
            eaten = game.dots_eaten();
        }

        assert_eq!(game.score(), DOT_POINTS + PELLET_POINTS);
        assert!(game.won() && !game.lost());
        assert_eq!(game.advance(ms(now + 1_000)), TickOutcome::NoChange);
        assert!(!game.request_direction(Left));
    }

    #[test]
    fn adversary_reaching_player_loses() {
        // ghost can go left or right, the scripted pick 0 sends it left
        let mut game = started(&["######", "#P G.#", "######"], Scripted::new(&[0], &[false]));
        game.request_direction(Right);

        assert_eq!(game.advance(ms(201)), TickOutcome::Lost);
        assert_eq!(game.player().cell, (2, 1));
        assert_eq!(game.ghosts()[0].cell, (2, 1));
        assert_eq!(game.ghosts()[0].direction, Left);
        assert_eq!(
            game.result(),
            GameResult {
                score: 0,
                won: false,
                lost: true,
                moves: None
            }
        );

        let frozen = game.ghosts()[0];
        assert_eq!(game.advance(ms(1_000)), TickOutcome::NoChange);
        assert_eq!(game.ghosts()[0], frozen);
    }

    #[test]
    fn boxed_in_adversary_stays_put() {
        let mut game = started(&["#####", "#P.##", "###G#", "#####"], Scripted::default());
        game.advance(ms(201));
        assert_eq!(game.ghosts()[0].cell, (3, 2));
        assert_eq!(game.ghosts()[0].direction, Up);
    }

    #[test]
    fn ticks_are_gated_by_interval() {
        let mut game = started(&["#########", "#P.....G#", "#########"], Scripted::default());
        game.request_direction(Right);

        assert_eq!(game.advance(ms(150)), TickOutcome::NoChange);
        assert_eq!(game.ghosts()[0].cell, (7, 1));
        game.advance(ms(201));
        let player = game.player().cell;
        let ghosts = game.ghosts().to_vec();
        assert_eq!((player, ghosts[0].cell), ((2, 1), (6, 1)));

        assert_eq!(game.advance(ms(350)), TickOutcome::NoChange);
        assert_eq!(game.player().cell, player);
        assert_eq!(game.ghosts(), ghosts.as_slice());

        game.advance(ms(402));
        assert_eq!(game.player().cell, (3, 1));
        assert_eq!(game.ghosts()[0].cell, (5, 1));
    }

    #[test]
    fn idle_game_ignores_ticks_and_input() {
        let mut game = MazeChase::with_rng(config(&["####", "#P.#", "####"]), Scripted::default())
            .unwrap();

        assert!(!game.request_direction(Right));
        assert_eq!(game.advance(ms(10_000)), TickOutcome::NoChange);
        assert_eq!(game.player().cell, (1, 1));
    }

    #[test]
    fn reset_restores_template() {
        let mut game = MazeChase::new(MazeConfig::default(), 9).unwrap();
        let fresh_maze = game.maze().clone();
        let fresh_ghosts = game.ghosts().to_vec();
        game.start();
        game.request_direction(Left);
        for tick in 1..20 {
            game.advance(ms(tick * 201));
        }

        game.reset();
        let once = (game.maze().clone(), game.ghosts().to_vec(), *game.player());
        game.reset();

        assert_eq!(once, (game.maze().clone(), game.ghosts().to_vec(), *game.player()));
        assert_eq!(game.maze(), &fresh_maze);
        assert_eq!(game.ghosts(), fresh_ghosts.as_slice());
        assert_eq!(game.player().cell, (13, 21));
        assert_eq!(game.player().heading.pending(), None);
        assert_eq!((game.score(), game.dots_eaten()), (0, 0));
        assert_eq!(game.status(), GameStatus::Idle);
    }

    #[test]
    fn pursuit_prefers_dominant_axis_and_horizontal_ties() {
        assert_eq!(pursuit_direction((5, 5), (9, 6)), Right);
        assert_eq!(pursuit_direction((5, 5), (4, 9)), Down);
        assert_eq!(pursuit_direction((5, 5), (5, 1)), Up);
        assert_eq!(pursuit_direction((5, 5), (2, 8)), Left);
        assert_eq!(pursuit_direction((5, 5), (8, 2)), Right);
    }

    #[test]
    fn choose_direction_falls_back_to_random_open_way() {
        let all = Direction::ALL;

        let mut pursue = Scripted::new(&[], &[true]);
        assert_eq!(choose_direction((0, 0), (3, 0), &all, &mut pursue, 0.3), Some(Right));

        let mut blocked = Scripted::new(&[1], &[true]);
        assert_eq!(choose_direction((0, 0), (3, 0), &[Up, Down], &mut blocked, 0.3), Some(Down));

        let mut wander = Scripted::new(&[2], &[false]);
        assert_eq!(choose_direction((0, 0), (3, 0), &all, &mut wander, 0.3), Some(Left));

        let mut unused = Scripted::new(&[3], &[true]);
        assert_eq!(choose_direction((0, 0), (3, 0), &[], &mut unused, 0.3), None);
        assert_eq!(unused.remaining_picks(), vec![3]);
    }

    #[test]
    fn open_directions_follow_canonical_order() {
        let template = MazeTemplate::parse(&["#.#", ".P.", "#.#"]).unwrap();
        let open = open_directions(&template.cells, (1, 1));
        assert_eq!(open.as_slice(), &Direction::ALL);
    }

    #[test]
    fn template_parse_rejects_bad_layouts() {
        assert_eq!(
            MazeTemplate::parse::<&str>(&[]).err(),
            Some(GameError::EmptyMaze)
        );
        assert_eq!(
            MazeTemplate::parse(&["###", "#P"]).err(),
            Some(GameError::RaggedMaze {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert_eq!(
            MazeTemplate::parse(&["#x#", "#P#"]).err(),
            Some(GameError::UnknownMazeGlyph {
                glyph: 'x',
                at: (1, 0)
            })
        );
        assert_eq!(
            MazeTemplate::parse(&["#.#"]).err(),
            Some(GameError::MissingPlayerSpawn)
        );
    }

    #[test]
    fn tunnel_edges_must_both_be_open_or_walled() {
        assert_eq!(
            MazeTemplate::parse(&["#####", "P...#", "#####"]).err(),
            Some(GameError::UnpairedTunnel { row: 1 })
        );
        assert_eq!(
            MazeTemplate::parse(&["####.", "#P..#", "#####"]).err(),
            Some(GameError::UnpairedTunnel { row: 0 })
        );
        assert!(MazeTemplate::parse(&["#####", "P....", "#####"]).is_ok());
        assert!(MazeTemplate::parse(&CLASSIC_LAYOUT[..]).is_ok());
    }

    #[test]
    fn config_validation() {
        let bad_chance = MazeConfig {
            pursuit_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(bad_chance.validate(), Err(GameError::InvalidChance));

        let no_tick = MazeConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(no_tick.validate(), Err(GameError::ZeroTickInterval));
    }
}
