use shakmaty::Move;

use crate::error::BotError;

pub type Score = i32;

/// Window bound and initial best value. Sits outside the mate sentinels so the
/// first searched move always replaces it.
pub const SCORE_INFINITY: Score = 30_000;
/// Forced win for White (`+`) or for Black (`-`). Negation is always in range.
pub const SCORE_MATE: Score = 29_000;
pub const SCORE_DRAW: Score = 0;

pub const DEFAULT_DEPTH: u8 = 5;
pub const MAX_DEPTH: u8 = 7;

/// Material value per role, indexed by `evaluation::role_index`.
/// Pawn, Knight, Bishop, Rook, Queen, King.
pub const MATERIAL: [Score; 6] = [1, 3, 3, 5, 9, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotConfig {
    pub depth: u8,
}

impl BotConfig {
    pub fn validate(&self) -> Result<(), BotError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(BotError::InvalidDepth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// (alpha, beta). Alpha is what White can already guarantee, beta what Black can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    pub alpha: Score,
    pub beta: Score,
}

impl SearchWindow {
    pub fn full() -> Self {
        Self {
            alpha: -SCORE_INFINITY,
            beta: SCORE_INFINITY,
        }
    }

    /// Remaining siblings can be skipped once the window closes.
    #[inline]
    pub fn is_cut(&self) -> bool {
        self.beta <= self.alpha
    }
}

/// Per-invocation diagnostics. Owned by a `Searcher`, never global.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evals: u64,
    pub cutoffs: u64,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u8,
    pub stats: SearchStats,
}
