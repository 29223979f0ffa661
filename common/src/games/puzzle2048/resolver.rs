use super::board::Board;
use super::types::{Cell, Direction, MoveOutcome};

/// Cell visiting order for one direction. Tiles nearest the target edge come
/// first so a moving tile never passes one that has not been processed yet.
struct ScanOrder {
    rows_descending: bool,
    cols_descending: bool,
    offset: (isize, isize),
}

impl ScanOrder {
    fn for_direction(direction: Direction) -> Self {
        Self {
            rows_descending: direction == Direction::Down,
            cols_descending: direction == Direction::Right,
            offset: direction.offset(),
        }
    }

    fn cells(&self, size: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows_descending = self.rows_descending;
        let cols_descending = self.cols_descending;
        (0..size).flat_map(move |r| {
            let row = if rows_descending { size - 1 - r } else { r };
            (0..size).map(move |c| {
                let col = if cols_descending { size - 1 - c } else { c };
                (row, col)
            })
        })
    }
}

/// Slides, merges and slides again in `direction`.
///
/// Returns [`MoveOutcome::Unchanged`] when nothing moved, in which case the
/// board is left exactly as it was. Spawning a new tile is up to the caller.
pub fn apply_move(board: &mut Board, direction: Direction) -> MoveOutcome {
    let before = board.clone();
    let scan = ScanOrder::for_direction(direction);

    slide(board, &scan);
    merge(board, &scan);
    slide(board, &scan);

    if *board == before {
        MoveOutcome::Unchanged
    } else {
        MoveOutcome::Changed
    }
}

/// True if `apply_move` would slide or merge at least one tile.
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let scan = ScanOrder::for_direction(direction);
    scan.cells(board.size()).any(|(row, col)| {
        let Cell::Value(value) = board.cell_at(row, col) else {
            return false;
        };
        let Some((next_row, next_col)) = board.neighbor(row, col, scan.offset) else {
            return false;
        };
        match board.cell_at(next_row, next_col) {
            Cell::Empty => true,
            Cell::Value(other) => other == value,
        }
    })
}

fn slide(board: &mut Board, scan: &ScanOrder) {
    loop {
        let mut moved = false;
        for (row, col) in scan.cells(board.size()) {
            let cell = board.cell_at(row, col);
            if cell.is_empty() {
                continue;
            }
            let Some((next_row, next_col)) = board.neighbor(row, col, scan.offset) else {
                continue;
            };
            if board.is_empty(next_row, next_col) {
                board.set_cell(next_row, next_col, cell);
                board.set_cell(row, col, Cell::Empty);
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }
}

// A doubled tile sits closer to the edge than the current source, so the
// sweep has already visited it and it cannot merge twice.
fn merge(board: &mut Board, scan: &ScanOrder) {
    for (row, col) in scan.cells(board.size()) {
        let Cell::Value(value) = board.cell_at(row, col) else {
            continue;
        };
        let Some((next_row, next_col)) = board.neighbor(row, col, scan.offset) else {
            continue;
        };
        if board.cell_at(next_row, next_col) == Cell::Value(value) {
            board.set_cell(row, col, Cell::Empty);
            board.set_cell(next_row, next_col, Cell::Value(value * 2));
        }
    }
}
