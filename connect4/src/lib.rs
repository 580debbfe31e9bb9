//! Connect 4 engine with minimax search.
//! A [`GameState`] owns the board, the side to move and the outcome; drivers
//! feed it column choices (or ask the search engine for one) and read the
//! result back. The search never touches the live state: it explores cloned
//! boards to a fixed depth and reports the best column for the engine side.
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod win;

pub use board::{Board, Cell, Player};
pub use error::{GameError, MoveError, SearchError};
pub use eval::Evaluation;
pub use game::{parse_history, GameSnapshot, GameState, GameStatus, MoveOutcome};
pub use search::{select_move, SearchConfig, SearchReport, Searcher, WIN_SCORE};
pub use win::check_winner;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Discs in a line needed to win.
pub const CONNECT: usize = 4;

pub fn new_game() -> GameState {
    GameState::new()
}

/// Functional form of [`GameState::play`]: the input state is left as is.
pub fn apply_move(state: &GameState, column: usize) -> Result<GameState, MoveError> {
    let mut next = state.clone();
    next.play(column)?;
    Ok(next)
}

pub fn reset(mut state: GameState) -> GameState {
    state.reset();
    state
}

pub fn select_ai_move(
    state: &GameState,
    engine_player: Player,
    depth: u8,
) -> Result<usize, SearchError> {
    select_move(state, engine_player, depth)
}

pub fn active_player(state: &GameState) -> Player {
    state.active_player()
}

pub fn winner(state: &GameState) -> Option<Player> {
    state.winner()
}

pub fn is_draw(state: &GameState) -> bool {
    state.is_draw()
}

pub fn cell_at(state: &GameState, row: usize, col: usize) -> Option<Cell> {
    state.cell_at(row, col)
}

pub fn legal_moves(state: &GameState) -> Vec<usize> {
    state.legal_moves()
}
