//! Fixed-size occupancy grid with paired place/undo

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::PlaceError;

/// Game board.
///
/// Cells are stored row-major in a fixed array sized for the full 15x15 grid.
/// Smaller grids (`with_size`) use the top-left corner of the same storage,
/// so a board is cheap to clone and never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    rows: u8,
    cols: u8,
    stones: u16,
}

impl Board {
    /// Standard empty 15x15 board
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE, BOARD_SIZE)
    }

    /// Empty board with reduced dimensions (clamped to 1..=15).
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            rows: rows.clamp(1, BOARD_SIZE) as u8,
            cols: cols.clamp(1, BOARD_SIZE) as u8,
            stones: 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Center cell (rows/2, cols/2)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.rows / 2, self.cols / 2)
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Convert signed coordinates into a position on this board.
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if row >= 0 && row < i32::from(self.rows) && col >= 0 && col < i32::from(self.cols) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    fn index(pos: Pos) -> usize {
        pos.row as usize * BOARD_SIZE + pos.col as usize
    }

    /// Get stone at position (Empty when out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.in_bounds(pos) {
            self.cells[Self::index(pos)]
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board.
    #[inline]
    pub fn get_signed(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos_at(row, col).map(|pos| self.cells[Self::index(pos)])
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[Self::index(pos)] == Stone::Empty
    }

    /// Place a stone. Rejects out-of-range and occupied cells without mutating.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        if !self.in_bounds(pos) {
            return Err(PlaceError::OutOfRange { row: pos.row, col: pos.col });
        }
        if stone == Stone::Empty {
            return Err(PlaceError::EmptyStone);
        }
        let cell = &mut self.cells[Self::index(pos)];
        if *cell != Stone::Empty {
            return Err(PlaceError::Occupied(pos));
        }
        *cell = stone;
        self.stones += 1;
        Ok(())
    }

    /// Reset a cell to empty. Only the search uses this, to take back the
    /// trial stone it placed last.
    #[inline]
    pub fn undo(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let cell = &mut self.cells[Self::index(pos)];
        if *cell != Stone::Empty {
            *cell = Stone::Empty;
            self.stones -= 1;
        }
    }

    /// Place `stone` at the empty cell `pos`, run `f`, then take the stone back.
    ///
    /// The undo happens on every return path of `f`, so callers cannot leave
    /// a trial stone behind by breaking out early.
    pub fn with_trial<R>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> R) -> R {
        let placed = self.place(pos, stone).is_ok();
        debug_assert!(placed, "trial placement on a non-empty cell {pos}");
        let result = f(self);
        if placed {
            self.undo(pos);
        }
        result
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones as usize
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.rows() * self.cols()
    }

    /// Lazily iterate empty cells in row-major order
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells { board: self, next: 0 }
    }

    /// Iterate occupied cells with their stones in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.positions().filter_map(move |pos| match self.get(pos) {
            Stone::Empty => None,
            stone => Some((pos, stone)),
        })
    }

    /// All positions of this board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the empty cells of a board
pub struct EmptyCells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for EmptyCells<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        let cols = self.board.cols();
        let total = self.board.rows() * cols;
        while self.next < total {
            let pos = Pos::new((self.next / cols) as u8, (self.next % cols) as u8);
            self.next += 1;
            if self.board.get(pos) == Stone::Empty {
                return Some(pos);
            }
        }
        None
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.cols() {
            write!(f, "{c:3}")?;
        }
        writeln!(f)?;
        for r in 0..self.rows {
            write!(f, "{r:3}")?;
            for c in 0..self.cols {
                let ch = match self.get(Pos::new(r, c)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
