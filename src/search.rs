use log::trace;
use shakmaty::{Color, Move};

use crate::error::BotError;
use crate::evaluation::{evaluate_terminal, material};
use crate::guard::MoveGuard;
use crate::movegen::order_moves;
use crate::position::Rules;
use crate::types::{
    Score, SearchResult, SearchStats, SearchWindow, MAX_DEPTH, SCORE_INFINITY,
};

/// Search state for one root invocation.
#[derive(Debug, Default)]
pub struct Searcher {
    pub stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root search. White maximizes, Black minimizes; the side to move picks.
    ///
    /// Ties go to the earlier move in the ordered list.
    pub fn search_root<R: Rules + ?Sized>(
        &mut self,
        pos: &mut R,
        depth: u8,
    ) -> Result<SearchResult, BotError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(BotError::InvalidDepth { depth, max: MAX_DEPTH });
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(BotError::NoLegalMoves);
        }

        self.stats.nodes += 1;
        let maximize = pos.turn() == Color::White;
        let ordered = order_moves(pos, moves);
        let mut window = SearchWindow::full();
        let mut best_score = if maximize { -SCORE_INFINITY } else { SCORE_INFINITY };
        let mut best_move: Option<Move> = None;

        for mv in &ordered {
            let score = {
                let mut child = MoveGuard::apply(&mut *pos, mv);
                self.minimax(&mut *child, depth - 1, window, !maximize)
            };
            trace!("root {:?} -> {}", mv, score);

            let improved = if maximize {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_move = Some(mv.clone());
            }

            if maximize {
                window.alpha = window.alpha.max(best_score);
            } else {
                window.beta = window.beta.min(best_score);
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats,
        })
    }

    /// Minimax with alpha-beta pruning. Returns the score from White's
    /// perspective.
    ///
    /// At `depth == 0` the position is scored on material alone and no moves
    /// are generated.
    pub fn minimax<R: Rules + ?Sized>(
        &mut self,
        pos: &mut R,
        depth: u8,
        mut window: SearchWindow,
        maximize: bool,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.evals += 1;
            return material(pos);
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            self.stats.evals += 1;
            return evaluate_terminal(pos);
        }

        let ordered = order_moves(pos, moves);
        let mut best = if maximize { -SCORE_INFINITY } else { SCORE_INFINITY };

        for mv in &ordered {
            let score = {
                let mut child = MoveGuard::apply(&mut *pos, mv);
                self.minimax(&mut *child, depth - 1, window, !maximize)
            };

            if maximize {
                best = best.max(score);
                window.alpha = window.alpha.max(best);
            } else {
                best = best.min(score);
                window.beta = window.beta.min(best);
            }

            // Cutoff: the opponent already has a better line elsewhere
            if window.is_cut() {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Searches `pos` to `depth` plies with a fresh `Searcher`.
pub fn search<R: Rules + ?Sized>(pos: &mut R, depth: u8) -> Result<SearchResult, BotError> {
    Searcher::new().search_root(pos, depth)
}
