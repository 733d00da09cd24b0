use std::{fmt, io};

use crate::{Board, Cell, Config, SIDE};

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => Config::ALIVE_GLYPH,
            Cell::Dead => Config::DEAD_GLYPH,
        }
    }
}

/// `SIDE` lines of `SIDE` glyphs, each line terminated by `'\n'`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Parse the text produced by [`Board`]'s `Display` impl.
    ///
    /// Surrounding whitespace is ignored. Returns `None` if the text has the wrong
    /// shape or contains anything other than the two glyphs.
    pub fn from_text(text: &str) -> Option<Self> {
        let lines = text.trim().lines().map(str::trim).collect::<Vec<_>>();
        if lines.len() != SIDE {
            return None;
        }
        let mut board = Board::blank();
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != SIDE {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    Config::ALIVE_GLYPH => Cell::Alive,
                    Config::DEAD_GLYPH => Cell::Dead,
                    _ => return None,
                };
                board.set(row, col, cell);
            }
        }
        Some(board)
    }
}

/// Writes one board per generation, separated by blank lines.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: io::Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, board: &Board) -> io::Result<()> {
        write!(self.out, "{}", board)?;
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
