use thiserror::Error;

use crate::board::Player;

/// Why a move request was rejected. The game state is unchanged in every case.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("column {column} is out of range (0-{max})", max = crate::COLS - 1)]
    ColumnOutOfRange { column: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("game is already over, reset to play again")]
    GameAlreadyOver,
}

/// Misuse of the search engine by the driver.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SearchError {
    #[error("search precondition violated: game is already over")]
    GameOver,
    #[error("search precondition violated: engine plays {engine:?} but {active:?} is to move")]
    NotEngineTurn { engine: Player, active: Player },
    #[error("search precondition violated: depth {0} must be at least 1")]
    InvalidDepth(u8),
    #[error("search precondition violated: no legal moves remain")]
    NoLegalMoves,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move history at position {position}: {reason}")]
    ParseMove { position: usize, reason: String },
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_messages() {
        assert_eq!(
            MoveError::ColumnOutOfRange { column: 9 }.to_string(),
            "column 9 is out of range (0-6)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
    }

    #[test]
    fn search_errors_share_a_prefix() {
        let errors = [
            SearchError::GameOver,
            SearchError::NotEngineTurn {
                engine: Player::PlayerTwo,
                active: Player::PlayerOne,
            },
            SearchError::InvalidDepth(0),
            SearchError::NoLegalMoves,
        ];
        for err in errors {
            assert!(err.to_string().starts_with("search precondition violated"));
        }
    }

    #[test]
    fn game_error_is_transparent_over_move_errors() {
        let err: GameError = MoveError::GameAlreadyOver.into();
        assert_eq!(err.to_string(), "game is already over, reset to play again");
        assert!(matches!(err, GameError::Move(MoveError::GameAlreadyOver)));
    }
}
