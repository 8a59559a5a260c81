use std::fmt::Write;

use arcade_core::*;

/// Plain text snapshot of a board, one line per row.
pub trait TextBoard {
    fn render(&self) -> String;
}

fn player_glyph(avatar: &Avatar, builtin: char) -> char {
    if avatar.uses_custom() { '@' } else { builtin }
}

impl<R: RandomSource> TextBoard for TileMatch<R> {
    fn render(&self) -> String {
        let (cols, rows) = self.config().size;
        let avatar = self.avatar().uses_custom();
        let mut out = String::new();
        for row in 0..rows {
            for col in 0..cols {
                let face = match self.card_at(row, col) {
                    Some(card) if card.matched => "[]".to_owned(),
                    Some(card) if card.revealed && avatar && card.symbol.shows_avatar() => "@".to_owned(),
                    Some(card) if card.revealed => card.symbol.glyph().to_owned(),
                    Some(_) => "??".to_owned(),
                    None => "  ".to_owned(),
                };
                let _ = write!(out, "{face} ");
            }
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "score {} moves {} pairs {}/{}",
            self.score(),
            self.moves(),
            self.matched_pairs(),
            self.total_pairs()
        );
        out
    }
}

impl<R: RandomSource> TextBoard for MazeChase<R> {
    fn render(&self) -> String {
        let (cols, rows) = self.size();
        let player = player_glyph(self.avatar(), 'P');
        let mut out = String::new();
        for row in 0..rows {
            for col in 0..cols {
                let cell = (col, row);
                let glyph = if self.ghosts().iter().any(|ghost| ghost.cell == cell) {
                    'G'
                } else if self.player().cell == cell {
                    player
                } else {
                    self.cell_at(cell).map_or(' ', MazeCell::glyph)
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "score {} dots {}/{}",
            self.score(),
            self.dots_eaten(),
            self.total_dots()
        );
        out
    }
}

impl<R: RandomSource> TextBoard for SnakeGame<R> {
    fn render(&self) -> String {
        let (cols, rows) = self.config().size;
        let head = self.head();
        let face = player_glyph(self.avatar(), 'H');
        let mut out = String::new();
        for row in 0..rows {
            for col in 0..cols {
                let cell = (col, row);
                let glyph = if cell == head {
                    face
                } else if self.contains(cell) {
                    'o'
                } else if cell == self.food() {
                    '*'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        let _ = writeln!(out, "score {} length {}", self.score(), self.length());
        out
    }
}
