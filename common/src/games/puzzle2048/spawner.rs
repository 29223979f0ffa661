use super::board::Board;
use super::types::Cell;
use crate::games::session_rng::SessionRng;

const TWO_PROBABILITY: f64 = 0.8;

/// Puts a 2 (80%) or a 4 (20%) on a uniformly chosen empty cell.
///
/// Panics when the board has no empty cell; callers only spawn after a move
/// that changed the board.
pub fn insert_tile(board: &mut Board, rng: &mut SessionRng) {
    let empty_count = board.empty_cell_count();
    if empty_count == 0 {
        panic!("Cannot spawn a tile on a full board");
    }

    let value = if rng.random_unit() < TWO_PROBABILITY { 2 } else { 4 };
    let target = rng.random_range(1..=empty_count);

    let mut seen = 0;
    for row in 0..board.size() {
        for col in 0..board.size() {
            if !board.is_empty(row, col) {
                continue;
            }
            seen += 1;
            if seen == target {
                board.set_cell(row, col, Cell::Value(value));
                return;
            }
        }
    }
}
