use shakmaty::{Color, Piece, Role};

use crate::position::Rules;
use crate::types::{Score, MATERIAL, SCORE_DRAW, SCORE_MATE};

const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Maps a Role to its `MATERIAL` index (0-5)
#[inline]
pub fn role_index(role: Role) -> usize {
    match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    }
}

#[inline]
pub fn piece_value(role: Role) -> Score {
    MATERIAL[role_index(role)]
}

/// Material balance, White positive. Never generates moves.
pub fn material<R: Rules + ?Sized>(pos: &R) -> Score {
    let mut score: Score = 0;
    for role in ROLES {
        let value = piece_value(role);
        if value == 0 {
            continue;
        }
        let white = pos.piece_count(Piece { color: Color::White, role }) as Score;
        let black = pos.piece_count(Piece { color: Color::Black, role }) as Score;
        score += value * (white - black);
    }
    score
}

/// Score for a position already known to have no legal moves.
/// Checkmate is a forced loss for the side to move; stalemate is a draw.
pub fn evaluate_terminal<R: Rules + ?Sized>(pos: &R) -> Score {
    if !pos.is_in_check() {
        return SCORE_DRAW;
    }
    match pos.turn() {
        Color::White => -SCORE_MATE,
        Color::Black => SCORE_MATE,
    }
}

/// Evaluates a position of unknown status: terminal scores for mate and
/// stalemate, material otherwise.
pub fn evaluate<R: Rules + ?Sized>(pos: &R) -> Score {
    if pos.has_legal_moves() {
        material(pos)
    } else {
        evaluate_terminal(pos)
    }
}
