use std::cmp::Reverse;

use arrayvec::ArrayVec;
use shakmaty::{Move, MoveList};

use crate::evaluation::{piece_value, role_index};
use crate::position::Rules;
use crate::types::Score;

/// Sort key, compared field by field. Smaller sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderKey {
    /// 0 for captures, 1 for quiet moves
    pub quiet: u8,
    /// captured value - mover value, best gain first
    pub gain: Reverse<Score>,
    /// origin, destination, promotion
    pub tiebreak: (u8, u8, u8),
}

pub struct ScoredMove {
    pub mv: Move,
    pub key: OrderKey,
}

/// Computes the ordering key for one move. Reads only the move itself.
pub fn order_key(mv: &Move) -> OrderKey {
    let (quiet, gain) = match mv.capture() {
        Some(victim) => (0, piece_value(victim) - piece_value(mv.role())),
        None => (1, 0),
    };
    let from = mv.from().map_or(0, |sq| sq as u8);
    let to = mv.to() as u8;
    // promotions after the plain move, knight < ... < queen
    let promo = mv.promotion().map_or(0, |role| role_index(role) as u8 + 1);
    OrderKey {
        quiet,
        gain: Reverse(gain),
        tiebreak: (from, to, promo),
    }
}

/// Orders legal moves for alpha-beta: captures first, then by material won
/// (victim - attacker), then a fixed square-based tiebreak so the same input
/// always yields the same order.
///
/// Keys are computed once up front; the position is never mutated.
pub fn order_moves<R: Rules + ?Sized>(_pos: &R, moves: MoveList) -> MoveList {
    let mut scored: ArrayVec<ScoredMove, 256> = moves
        .into_iter()
        .map(|mv| {
            let key = order_key(&mv);
            ScoredMove { mv, key }
        })
        .collect();

    scored.sort_by(|a, b| a.key.cmp(&b.key));
    scored.into_iter().map(|s| s.mv).collect()
}
