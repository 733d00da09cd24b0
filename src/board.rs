/// Side length of the board. The board is always `SIDE x SIDE`.
pub const SIDE: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Square grid of cells whose edges are stitched together.
///
/// Coordinates passed to [`Board::get`] and [`Board::set`] must already be in
/// `0..SIDE`; wrapping of neighbor coordinates is done by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// Create a board with every cell dead.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: Cell) {
        self.cells[row][col] = state;
    }

    /// Mark every cell dead.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Dead; SIDE]; SIDE];
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIDE]> {
        self.cells.iter()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut result = vec![];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_alive() {
                    result.push((row, col));
                }
            }
        }
        result
    }
}
