use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
///
/// Signed so that a step off the grid (snake hitting a wall, maze tunnel) is
/// representable before it is rejected or wrapped.
pub type Coord = i16;

/// Count type used for cell counts, dots and pairs.
pub type CellCount = u16;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Callers must check [`in_bounds`] first, negative axes clamp to zero.
    fn to_nd_index(self) -> Self::Output {
        [self.0.max(0) as usize, self.1.max(0) as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

pub const fn in_bounds((col, row): Coord2, (cols, rows): Coord2) -> bool {
    col >= 0 && col < cols && row >= 0 && row < rows
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical order, random direction draws index into this.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub const fn delta(self) -> Coord2 {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Moves `cell` one step towards `direction` with no wrapping or clamping.
pub const fn step((col, row): Coord2, direction: Direction) -> Coord2 {
    let (dx, dy) = direction.delta();
    (col.saturating_add(dx), row.saturating_add(dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn step_leaves_the_grid_without_wrapping() {
        assert_eq!(step((0, 0), Direction::Left), (-1, 0));
        assert_eq!(step((0, 0), Direction::Up), (0, -1));
        assert_eq!(step((3, 4), Direction::Right), (4, 4));
        assert!(!in_bounds((-1, 0), (4, 4)));
        assert!(!in_bounds((4, 0), (4, 4)));
        assert!(in_bounds((3, 3), (4, 4)));
    }

    #[test]
    fn mult_ignores_negative_axes() {
        assert_eq!(mult(20, 20), 400);
        assert_eq!(mult(-1, 20), 0);
    }
}
