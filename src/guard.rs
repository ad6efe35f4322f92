use std::ops::{Deref, DerefMut};

use shakmaty::Move;

use crate::position::Rules;

/// A move applied to a position for the lifetime of the guard.
///
/// Dropping the guard undoes the move, so the undo also runs on early
/// `break`, `?` and unwinding.
pub struct MoveGuard<'a, R: Rules + ?Sized> {
    pos: &'a mut R,
    mv: &'a Move,
}

impl<'a, R: Rules + ?Sized> MoveGuard<'a, R> {
    pub fn apply(pos: &'a mut R, mv: &'a Move) -> Self {
        pos.apply_move(mv);
        Self { pos, mv }
    }
}

impl<R: Rules + ?Sized> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules + ?Sized> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules + ?Sized> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        self.pos.undo_move(self.mv);
    }
}
