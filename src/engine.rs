use crate::{Board, Cell, SIDE};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Shift `coord` by `offset` around the torus.
///
/// `rem_euclid` keeps the result in `0..SIDE` for negative sums as well.
pub fn wrap(coord: usize, offset: isize) -> usize {
    (coord as isize + offset).rem_euclid(SIDE as isize) as usize
}

/// Number of live cells among the 8 toroidal neighbors of `(row, col)`.
pub fn count_live_neighbors(board: &Board, row: usize, col: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| board.get(wrap(row, dr), wrap(col, dc)).is_alive())
        .count()
}

/// Next state of a single cell given its live neighbor count.
pub fn transition(cell: Cell, neighbors: usize) -> Cell {
    match neighbors {
        0 | 1 => Cell::Dead,
        2 => cell,
        3 => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Write the generation following `src` into `dst`.
///
/// Every cell of `dst` is overwritten, so its previous contents don't matter.
pub fn step(src: &Board, dst: &mut Board) {
    for row in 0..SIDE {
        for col in 0..SIDE {
            let neibs = count_live_neighbors(src, row, col);
            dst.set(row, col, transition(src.get(row, col), neibs));
        }
    }
}

/// Allocating variant of [`step`].
pub fn next_generation(src: &Board) -> Board {
    let mut dst = Board::blank();
    step(src, &mut dst);
    dst
}
