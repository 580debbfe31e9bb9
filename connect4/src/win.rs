use crate::board::{Board, Player};
use crate::{COLS, CONNECT, ROWS};

/// Direction vectors as (column step, row step): horizontal, vertical and
/// both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Returns the owner of the first four-in-a-row found, scanning rows top to
/// bottom and columns left to right. Says nothing about draws.
pub fn check_winner(board: &Board) -> Option<Player> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(player) = board.get(row, col).and_then(|cell| cell.player()) else {
                continue;
            };
            if DIRECTIONS
                .iter()
                .any(|&dir| line_from(board, row, col, dir, player))
            {
                return Some(player);
            }
        }
    }
    None
}

fn line_from(
    board: &Board,
    row: usize,
    col: usize,
    (dx, dy): (isize, isize),
    player: Player,
) -> bool {
    (1..CONNECT as isize).all(|step| {
        let r = row as isize + step * dy;
        let c = col as isize + step * dx;
        if r < 0 || c < 0 {
            return false;
        }
        board.get(r as usize, c as usize) == Some(player.to_cell())
    })
}
