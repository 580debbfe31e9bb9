use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::{COLS, ROWS};

const CELLS: usize = ROWS * COLS;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

/// Fixed 6x7 grid stored row-major, row 0 at the top.
///
/// The only way to place a disc is [`Board::drop_disc`], so empty cells in a
/// column always sit above the occupied ones.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Cell at `(row, col)`, or `None` when outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < ROWS && col < COLS {
            Some(self.cells[row * COLS + col])
        } else {
            None
        }
    }

    pub(crate) fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        // gravity: the top cell is the last one to fill
        !self.cells[col].is_empty()
    }

    /// Drops a disc into `col` and returns the row it landed on.
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange { column: col });
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row * COLS + col].is_empty())
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row * COLS + col] = player.to_cell();
        Ok(row)
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    pub fn discs(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// One string per row, top row first.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(COLS)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.discs(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn discs_stack_from_the_bottom() {
        let mut board = Board::new();
        assert_eq!(board.drop_disc(3, Player::PlayerOne), Ok(5));
        assert_eq!(board.drop_disc(3, Player::PlayerTwo), Ok(4));
        assert_eq!(board.get(5, 3), Some(Cell::PlayerOne));
        assert_eq!(board.get(4, 3), Some(Cell::PlayerTwo));
        assert_eq!(board.get(3, 3), Some(Cell::Empty));
    }

    #[test]
    fn seventh_disc_in_a_column_is_rejected() {
        let mut board = Board::new();
        for expected_row in (0..ROWS).rev() {
            assert_eq!(board.drop_disc(0, Player::PlayerOne), Ok(expected_row));
        }
        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(
            board.drop_disc(0, Player::PlayerTwo),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_disc(COLS, Player::PlayerOne),
            Err(MoveError::ColumnOutOfRange { column: COLS })
        );
        assert_eq!(board.get(ROWS, 0), None);
        assert_eq!(board.get(0, COLS), None);
    }

    #[test]
    fn legal_moves_skip_full_columns_in_order() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        for _ in 0..ROWS {
            board.drop_disc(2, Player::PlayerOne).unwrap();
            board.drop_disc(5, Player::PlayerTwo).unwrap();
        }
        assert_eq!(board.legal_moves(), vec![0, 1, 3, 4, 6]);
    }

    #[test]
    fn full_board_has_no_legal_moves() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_disc(col, Player::PlayerTwo).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.discs(), ROWS * COLS);
    }

    #[test]
    fn clone_is_independent() {
        let mut board = Board::new();
        board.drop_disc(1, Player::PlayerOne).unwrap();
        let mut copy = board.clone();
        copy.drop_disc(1, Player::PlayerTwo).unwrap();
        assert_eq!(board.get(4, 1), Some(Cell::Empty));
        assert_eq!(copy.get(4, 1), Some(Cell::PlayerTwo));
    }

    #[test]
    fn rows_render_top_first() {
        let mut board = Board::new();
        board.drop_disc(0, Player::PlayerOne).unwrap();
        board.drop_disc(6, Player::PlayerTwo).unwrap();
        let rows = board.rows();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[0], ".......");
        assert_eq!(rows[5], "X.....O");
    }
}
