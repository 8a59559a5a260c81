use serde::{Deserialize, Serialize};

use crate::*;

/// Upper bound of every pet vital.
pub const VITAL_MAX: u8 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    TileMatch,
    MazeChase,
    Snake,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [Self::TileMatch, Self::MazeChase, Self::Snake];

    /// Energy the pet spends on a won round.
    pub const fn energy_cost(self) -> u8 {
        match self {
            Self::TileMatch => 2,
            Self::MazeChase => 5,
            Self::Snake => 3,
        }
    }

    /// Name the pet backend reports the game under.
    pub const fn backend_name(self) -> &'static str {
        match self {
            Self::TileMatch => "memory",
            Self::MazeChase => "pacman",
            Self::Snake => "snake",
        }
    }
}

/// What a finished round is worth to the pet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: GameKind,
    pub happiness: u8,
    pub energy_cost: u8,
}

impl Reward {
    /// Only won rounds pay out, losses and unfinished rounds leave the pet alone.
    pub const fn for_result(kind: GameKind, result: &GameResult, happiness_bonus: u8) -> Option<Self> {
        if !result.won {
            return None;
        }
        Some(Self {
            kind,
            happiness: happiness_bonus,
            energy_cost: kind.energy_cost(),
        })
    }
}

/// The pet vitals a round touches, each within `0..=VITAL_MAX`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub happiness: u8,
    pub energy: u8,
}

impl Vitals {
    pub fn apply(&mut self, reward: &Reward) {
        self.happiness = self.happiness.saturating_add(reward.happiness).min(VITAL_MAX);
        self.energy = self.energy.saturating_sub(reward.energy_cost);
        log::debug!(
            "{} reward applied, happiness {} energy {}",
            reward.kind.backend_name(),
            self.happiness,
            self.energy
        );
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            happiness: 50,
            energy: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn result(won: bool, lost: bool) -> GameResult {
        GameResult {
            score: 300,
            won,
            lost,
            moves: None,
        }
    }

    #[test]
    fn only_wins_pay_out() {
        for kind in GameKind::ALL {
            assert_eq!(Reward::for_result(kind, &result(false, true), 15), None);
            assert_eq!(Reward::for_result(kind, &result(false, false), 15), None);
            let reward = Reward::for_result(kind, &result(true, false), 15).unwrap();
            assert_eq!(reward.happiness, 15);
            assert_eq!(reward.energy_cost, kind.energy_cost());
        }
    }

    #[test]
    fn energy_cost_depends_on_game() {
        let costs: Vec<_> = GameKind::ALL.iter().map(|kind| (kind.backend_name(), kind.energy_cost())).collect();
        assert_eq!(costs, [("memory", 2), ("pacman", 5), ("snake", 3)]);
    }

    #[test]
    fn vitals_clamp_to_range() {
        let mut vitals = Vitals {
            happiness: 95,
            energy: 4,
        };
        let reward = Reward::for_result(GameKind::MazeChase, &result(true, false), 20).unwrap();

        vitals.apply(&reward);
        assert_eq!(vitals, Vitals { happiness: 100, energy: 0 });

        let mut fresh = Vitals::default();
        let reward = Reward::for_result(GameKind::TileMatch, &result(true, false), 10).unwrap();
        fresh.apply(&reward);
        assert_eq!(fresh, Vitals { happiness: 60, energy: 48 });
    }

    #[test]
    fn engines_report_their_kind() {
        assert_eq!(TileMatch::new(TileMatchConfig::default(), 1).unwrap().kind(), GameKind::TileMatch);
        assert_eq!(MazeChase::new(MazeConfig::default(), 1).unwrap().kind(), GameKind::MazeChase);
        assert_eq!(SnakeGame::new(SnakeConfig::default(), 1).unwrap().kind(), GameKind::Snake);
    }
}
