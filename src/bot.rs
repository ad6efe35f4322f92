use std::time::Duration;

use log::{debug, trace};
use shakmaty::Move;

use crate::error::BotError;
use crate::position::Rules;
use crate::search::Searcher;
use crate::types::{BotConfig, SearchResult};

/// Fixed-depth bot: picks one move for the side to move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bot {
    config: BotConfig,
}

impl Bot {
    pub fn new(config: BotConfig) -> Result<Self, BotError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_depth(depth: u8) -> Result<Self, BotError> {
        Self::new(BotConfig { depth })
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Picks a move for the side to move.
    ///
    /// `time_budget` is accepted for harness compatibility; search depth is
    /// fixed and the clock is never consulted. The position is handed back in
    /// the state it came in.
    pub fn choose_move<R: Rules + ?Sized>(
        &self,
        pos: &mut R,
        time_budget: Duration,
    ) -> Result<Move, BotError> {
        trace!("time budget {:?} ignored, fixed depth {}", time_budget, self.config.depth);
        let result = self.think(pos)?;
        result.best_move.ok_or(BotError::NoLegalMoves)
    }

    /// Full search result (move, score, counters) for the side to move.
    pub fn think<R: Rules + ?Sized>(&self, pos: &mut R) -> Result<SearchResult, BotError> {
        let mut searcher = Searcher::new();
        let result = searcher.search_root(pos, self.config.depth)?;
        debug!(
            "depth {} best {:?} score {} nodes {} evals {} cutoffs {}",
            result.depth,
            result.best_move,
            result.score,
            result.stats.nodes,
            result.stats.evals,
            result.stats.cutoffs
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::ChessPosition;
    use crate::types::{DEFAULT_DEPTH, MAX_DEPTH};

    #[test]
    fn test_default_depth() {
        assert_eq!(Bot::default().config().depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_rejects_bad_depth() {
        assert!(matches!(
            Bot::with_depth(0),
            Err(BotError::InvalidDepth { depth: 0, max: MAX_DEPTH })
        ));
        assert!(Bot::with_depth(MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn test_choose_move_is_legal() {
        let bot = Bot::with_depth(2).unwrap();
        let mut pos = ChessPosition::new();
        let mv = bot.choose_move(&mut pos, Duration::from_secs(1)).unwrap();
        assert!(pos.legal_moves().contains(&mv));
    }

    #[test]
    fn test_zero_budget_still_moves() {
        let bot = Bot::with_depth(1).unwrap();
        let mut pos = ChessPosition::new();
        assert!(bot.choose_move(&mut pos, Duration::ZERO).is_ok());
    }

    #[test]
    fn test_choose_move_in_finished_game() {
        let bot = Bot::default();
        let mut pos = ChessPosition::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        assert_eq!(
            bot.choose_move(&mut pos, Duration::from_secs(1)),
            Err(BotError::NoLegalMoves)
        );
    }
}
