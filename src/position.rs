use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Move, MoveList, Piece, Position};

use crate::error::BotError;

/// Everything the bot needs from a rules engine.
///
/// `apply_move` / `undo_move` mutate in place and must be strictly LIFO-nested:
/// every undo retracts the most recent apply that has not been undone yet.
/// Search code goes through `guard::MoveGuard` instead of pairing these by hand.
pub trait Rules {
    fn legal_moves(&self) -> MoveList;

    fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    fn apply_move(&mut self, mv: &Move);

    fn undo_move(&mut self, mv: &Move);

    fn is_in_check(&self) -> bool;

    fn turn(&self) -> Color;

    /// Number of `piece` (color + role) on the board.
    fn piece_count(&self, piece: Piece) -> u32;
}

/// `shakmaty::Chess` with make/unmake.
///
/// shakmaty positions are copy-make, so unmake restores the snapshot taken by
/// the matching apply.
#[derive(Clone, Debug, Default)]
pub struct ChessPosition {
    current: Chess,
    history: Vec<Chess>,
}

impl ChessPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, BotError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| BotError::InvalidFen(format!("{fen}: {e}")))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| BotError::InvalidFen(e.to_string()))?;
        Ok(Self::from(pos))
    }

    pub fn chess(&self) -> &Chess {
        &self.current
    }

    /// Moves applied and not yet undone.
    pub fn ply_depth(&self) -> usize {
        self.history.len()
    }
}

impl From<Chess> for ChessPosition {
    fn from(current: Chess) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }
}

impl Rules for ChessPosition {
    fn legal_moves(&self) -> MoveList {
        self.current.legal_moves()
    }

    fn apply_move(&mut self, mv: &Move) {
        let previous = self.current.clone();
        self.current.play_unchecked(*mv);
        self.history.push(previous);
    }

    fn undo_move(&mut self, _mv: &Move) {
        debug_assert!(!self.history.is_empty(), "undo_move without a matching apply_move");
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    fn is_in_check(&self) -> bool {
        self.current.is_check()
    }

    fn turn(&self) -> Color {
        self.current.turn()
    }

    fn piece_count(&self, piece: Piece) -> u32 {
        let board = self.current.board();
        (board.by_color(piece.color) & board.by_role(piece.role)).count() as u32
    }
}
