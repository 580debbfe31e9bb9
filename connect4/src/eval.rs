use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::{COLS, CONNECT, ROWS};

/// Static score for positions where the search runs out of depth.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Evaluation {
    /// Every cut-off position counts as a draw.
    Zero,
    /// Open lines of four plus centre-column control.
    #[default]
    OpenLines,
}

impl Evaluation {
    pub fn score(self, board: &Board, player: Player) -> i32 {
        match self {
            Evaluation::Zero => 0,
            Evaluation::OpenLines => open_lines(board, player),
        }
    }
}

/// Every line of four cells on the board, as flat cell indices.
static WINDOWS: Lazy<Vec<[usize; CONNECT]>> = Lazy::new(generate_windows);

fn open_lines(board: &Board, player: Player) -> i32 {
    let mine = player.to_cell();
    let theirs = player.opponent().to_cell();

    let center = COLS / 2;
    let mut score = 0;
    for row in 0..ROWS {
        match board.get(row, center) {
            Some(cell) if cell == mine => score += 3,
            Some(cell) if cell == theirs => score -= 3,
            _ => {}
        }
    }

    for window in WINDOWS.iter() {
        let mine_count = window.iter().filter(|&&i| board.at(i) == mine).count();
        let theirs_count = window.iter().filter(|&&i| board.at(i) == theirs).count();
        score += match (mine_count, theirs_count) {
            (3, 0) => 50,
            (2, 0) => 10,
            (1, 0) => 2,
            (0, 3) => -50,
            (0, 2) => -10,
            (0, 1) => -2,
            _ => 0, // blocked or empty
        };
    }
    score
}

fn generate_windows() -> Vec<[usize; CONNECT]> {
    let mut windows = Vec::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            for (dx, dy) in [(1isize, 0isize), (0, 1), (1, 1), (1, -1)] {
                let end_row = row as isize + dy * (CONNECT as isize - 1);
                let end_col = col as isize + dx * (CONNECT as isize - 1);
                if end_row < 0 || end_row >= ROWS as isize || end_col >= COLS as isize {
                    continue;
                }
                let mut window = [0; CONNECT];
                for (step, slot) in window.iter_mut().enumerate() {
                    let r = row as isize + dy * step as isize;
                    let c = col as isize + dx * step as isize;
                    *slot = r as usize * COLS + c as usize;
                }
                windows.push(window);
            }
        }
    }
    windows
}
