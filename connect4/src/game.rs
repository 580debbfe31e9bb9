use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Cell, Player};
use crate::error::{GameError, MoveError};
use crate::win::check_winner;
use crate::COLS;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "state", content = "winner")]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub status: GameStatus,
}

/// Board, side to move and outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::PlayerOne,
            status: GameStatus::InProgress,
        }
    }

    /// Replays a sequence of columns from a fresh game.
    pub fn from_history(moves: &[usize]) -> Result<Self, GameError> {
        let mut state = Self::new();
        for &column in moves {
            state.play(column)?;
        }
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Drawn
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Playable columns, empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Drops the active player's disc into `column`. A rejected move leaves
    /// the state untouched, including the turn.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        let player = self.active_player;
        let row = self.board.drop_disc(column, player)?;

        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            debug!(?winner, column, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            debug!(column, "game drawn");
        } else {
            self.active_player = player.opponent();
        }
        debug!(?player, column, row, "move accepted");

        Ok(MoveOutcome {
            player,
            column,
            row,
            status: self.status,
        })
    }

    /// Back to an empty board with PlayerOne to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            active_player: self.active_player,
            status: self.status,
            winner: self.winner(),
            is_draw: self.is_draw(),
            legal_moves: self.legal_moves(),
            discs: self.board.discs(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a game for drivers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: Vec<String>,
    pub active_player: Player,
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub is_draw: bool,
    pub legal_moves: Vec<usize>,
    pub discs: usize,
}

/// Parses a history of column digits such as `"3342"`. Whitespace is ignored.
pub fn parse_history(history: &str) -> Result<Vec<usize>, GameError> {
    history
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| match ch.to_digit(10) {
            Some(column) if (column as usize) < COLS => Ok(column as usize),
            Some(_) => Err(GameError::ParseMove {
                position,
                reason: format!("column must be 0-{}", COLS - 1),
            }),
            None => Err(GameError::ParseMove {
                position,
                reason: format!("expected column digit, found {ch}"),
            }),
        })
        .collect()
}
