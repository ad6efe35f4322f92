use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Asked to move in a finished game. The harness should have noticed first.
    #[error("no legal moves in the current position")]
    NoLegalMoves,

    #[error("search depth {depth} out of range (1..={max})")]
    InvalidDepth { depth: u8, max: u8 },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
