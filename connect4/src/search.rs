//! Depth-bounded minimax over cloned boards.
//!
//! Scores are always from the engine player's point of view: the engine
//! maximizes, its opponent minimizes. Every child node owns its own copy of
//! the board, so sibling branches never observe each other's moves.
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, Player};
use crate::error::SearchError;
use crate::eval::Evaluation;
use crate::game::GameState;
use crate::win::check_winner;
use crate::COLS;

pub const WIN_SCORE: i32 = 1_000_000;
const INFINITY: i32 = i32::MAX / 2;

/// Centre-first ordering lets alpha-beta cut earlier below the root.
const MOVE_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];
const ASCENDING: [usize; COLS] = [0, 1, 2, 3, 4, 5, 6];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead, at least 1.
    pub max_depth: u8,
    /// Alpha-beta pruning. Never changes the chosen column.
    pub pruning: bool,
    pub evaluation: Evaluation,
    /// When set, deepen one ply at a time and keep the last depth that
    /// finished within this many nodes.
    pub node_budget: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            pruning: true,
            evaluation: Evaluation::default(),
            node_budget: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_depth == 0 {
            return Err(SearchError::InvalidDepth(self.max_depth));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    pub score: i32,
    /// Nodes visited below the root, summed over every iteration.
    pub nodes: u64,
    /// Deepest fully searched depth.
    pub depth: u8,
}

#[derive(Clone, Debug, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks the best column for `engine`, which must be the side to move in
    /// an unfinished game. Ties go to the lowest column.
    pub fn search(&self, state: &GameState, engine: Player) -> Result<SearchReport, SearchError> {
        self.config.validate()?;
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }
        if state.active_player() != engine {
            return Err(SearchError::NotEngineTurn {
                engine,
                active: state.active_player(),
            });
        }
        let root = state.board().clone();
        let legal = root.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut walk = Walk {
            engine,
            evaluation: self.config.evaluation,
            pruning: self.config.pruning,
            nodes: 0,
            budget: None,
            aborted: false,
        };

        let report = match self.config.node_budget {
            None => walk
                .root(&root, &legal, self.config.max_depth)
                .map(|(column, score)| (column, score, self.config.max_depth)),
            Some(budget) => {
                // depth 1 always completes so there is a move to fall back on
                let mut best = walk.root(&root, &legal, 1).map(|(c, s)| (c, s, 1));
                walk.budget = Some(budget);
                for depth in 2..=self.config.max_depth {
                    match walk.root(&root, &legal, depth) {
                        Some((column, score)) => best = Some((column, score, depth)),
                        None => {
                            debug!(depth, budget, "node budget exhausted");
                            break;
                        }
                    }
                }
                best
            }
        };

        let (column, score, depth) = report.ok_or(SearchError::NoLegalMoves)?;
        debug!(?engine, column, score, nodes = walk.nodes, depth, "search finished");
        Ok(SearchReport {
            column,
            score,
            nodes: walk.nodes,
            depth,
        })
    }
}

/// Best column for `engine` with default settings and the given depth.
pub fn select_move(state: &GameState, engine: Player, max_depth: u8) -> Result<usize, SearchError> {
    Searcher::new(SearchConfig::with_depth(max_depth))
        .search(state, engine)
        .map(|report| report.column)
}

struct Walk {
    engine: Player,
    evaluation: Evaluation,
    pruning: bool,
    nodes: u64,
    budget: Option<u64>,
    aborted: bool,
}

impl Walk {
    /// Returns `None` when the node budget ran out mid-iteration.
    fn root(&mut self, board: &Board, legal: &[usize], depth: u8) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;
        let mut alpha = -INFINITY;

        // ascending order plus a strict comparison keeps the lowest column on ties
        for &col in legal {
            let mut child = board.clone();
            if child.drop_disc(col, self.engine).is_err() {
                continue;
            }
            let score = self.minimax(&child, self.engine.opponent(), depth - 1, alpha, INFINITY);
            if self.aborted {
                return None;
            }
            trace!(column = col, score, depth, "root move scored");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }
        best
    }

    fn minimax(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if self.budget.is_some_and(|budget| self.nodes > budget) {
            self.aborted = true;
            return 0;
        }

        if let Some(winner) = check_winner(board) {
            // remaining depth rewards quick wins and delays losses
            let score = WIN_SCORE + depth as i32;
            return if winner == self.engine { score } else { -score };
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return self.evaluation.score(board, self.engine);
        }

        let maximizing = to_move == self.engine;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let order = if self.pruning { &MOVE_ORDER } else { &ASCENDING };

        for &col in order {
            let mut child = board.clone();
            if child.drop_disc(col, to_move).is_err() {
                continue;
            }
            let score = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta);
            if self.aborted {
                return 0;
            }
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }
        best
    }
}
