use super::spawner::insert_tile;
use super::types::Cell;
use crate::games::session_rng::SessionRng;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        if size < 2 {
            panic!("Board size must be at least 2, got {}", size);
        }

        Self {
            cells: vec![Cell::Empty; size * size],
            size,
        }
    }

    /// Fresh board for a new game: two tiles are spawned before the first move.
    pub fn new_game(size: usize, rng: &mut SessionRng) -> Self {
        let mut board = Self::empty(size);
        insert_tile(&mut board, rng);
        insert_tile(&mut board, rng);
        board
    }

    /// Builds a board from rows of values where 0 marks an empty cell.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let mut board = Self::empty(rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != board.size {
                panic!(
                    "Row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    board.size
                );
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = match value {
                    0 => Cell::Empty,
                    v if v >= 2 && v.is_power_of_two() => Cell::Value(v),
                    v => panic!("Tile value must be a power of 2 of at least 2, got {}", v),
                };
                board.set_cell(row, col, cell);
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if let Cell::Value(v) = cell
            && (v < 2 || !v.is_power_of_two())
        {
            panic!("Tile value must be a power of 2 of at least 2, got {}", v);
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col).is_empty()
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_cell_count()
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|cell| cell.value() as u64).sum()
    }

    pub fn any_cell_equals(&self, value: u32) -> bool {
        self.cells.contains(&Cell::Value(value))
    }

    pub fn any_cell_at_least(&self, threshold: u32) -> bool {
        self.cells.iter().any(|cell| match cell {
            Cell::Value(v) => *v >= threshold,
            Cell::Empty => false,
        })
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().map(|cell| cell.value()).max().unwrap_or(0)
    }

    /// Read-only row-major view for renderers, 0 for empty cells.
    pub fn snapshot(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Coordinates of `(row, col)` shifted by `(drow, dcol)` if they stay on the board.
    pub(super) fn neighbor(
        &self,
        row: usize,
        col: usize,
        (drow, dcol): (isize, isize),
    ) -> Option<(usize, usize)> {
        let next_row = row.checked_add_signed(drow)?;
        let next_col = col.checked_add_signed(dcol)?;
        if next_row < self.size && next_col < self.size {
            Some((next_row, next_col))
        } else {
            None
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        if row >= self.size || col >= self.size {
            panic!(
                "Cell ({}, {}) is out of bounds for a {}x{} board",
                row, col, self.size, self.size
            );
        }
        row * self.size + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_tiles() {
        let board = Board::empty(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_cell_count(), 16);
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.highest_tile(), 0);
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let mut rng = SessionRng::new(42);
        let board = Board::new_game(4, &mut rng);
        assert_eq!(board.tile_count(), 2);
        for value in board.snapshot().into_iter().flatten() {
            assert!(value == 0 || value == 2 || value == 4);
        }
    }

    #[test]
    fn test_set_and_read_cell() {
        let mut board = Board::empty(3);
        board.set_cell(1, 2, Cell::Value(8));
        assert_eq!(board.cell_at(1, 2), Cell::Value(8));
        assert!(!board.is_empty(1, 2));
        assert!(board.is_empty(2, 1));
        assert_eq!(board.empty_cell_count(), 8);
    }

    #[test]
    fn test_any_cell_equals() {
        let board = Board::from_rows(&[vec![2, 0], vec![0, 16]]);
        assert!(board.any_cell_equals(16));
        assert!(!board.any_cell_equals(4));
        assert!(!board.any_cell_equals(0));
    }

    #[test]
    fn test_any_cell_at_least() {
        let board = Board::from_rows(&[vec![2, 0], vec![0, 4096]]);
        assert!(board.any_cell_at_least(2048));
        assert!(!board.any_cell_at_least(8192));
    }

    #[test]
    fn test_snapshot_uses_zero_for_empty() {
        let board = Board::from_rows(&[vec![2, 0, 4], vec![0, 0, 0], vec![8, 0, 0]]);
        assert_eq!(
            board.snapshot(),
            vec![vec![2, 0, 4], vec![0, 0, 0], vec![8, 0, 0]]
        );
        assert_eq!(board.tile_sum(), 14);
        assert_eq!(board.highest_tile(), 8);
    }

    #[test]
    fn test_neighbor_respects_borders() {
        let board = Board::empty(4);
        assert_eq!(board.neighbor(0, 0, (-1, 0)), None);
        assert_eq!(board.neighbor(0, 0, (0, -1)), None);
        assert_eq!(board.neighbor(3, 3, (1, 0)), None);
        assert_eq!(board.neighbor(3, 3, (0, 1)), None);
        assert_eq!(board.neighbor(1, 1, (0, 1)), Some((1, 2)));
        assert_eq!(board.neighbor(1, 1, (-1, 0)), Some((0, 1)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_read_panics() {
        let board = Board::empty(4);
        board.cell_at(4, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_write_panics() {
        let mut board = Board::empty(4);
        board.set_cell(0, 7, Cell::Value(2));
    }

    #[test]
    #[should_panic(expected = "power of 2")]
    fn test_non_power_of_two_value_panics() {
        let mut board = Board::empty(4);
        board.set_cell(0, 0, Cell::Value(6));
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_size_below_two_panics() {
        Board::empty(1);
    }

    #[test]
    #[should_panic(expected = "expected 3")]
    fn test_from_rows_rejects_ragged_input() {
        Board::from_rows(&[vec![2, 0, 0], vec![0, 0], vec![0, 0, 0]]);
    }
}
