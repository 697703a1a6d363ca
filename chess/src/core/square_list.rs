use std::mem::MaybeUninit;
use std::slice;

use super::{Bitboard, Square};

/// An ascending list of squares backed by a fixed 64-slot buffer.
///
/// A bitboard holds at most 64 squares, so extracting one never allocates
/// and never runs out of room.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [MaybeUninit<Square>; Square::NUM],
    len: usize,
}

impl SquareList {
    #[inline]
    pub const fn new() -> SquareList {
        SquareList {
            squares: [MaybeUninit::uninit(); Square::NUM],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, square: Square) {
        debug_assert!(self.len < Square::NUM, "SquareList overflow");

        self.squares[self.len].write(square);
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        // Safety: the first `len` slots were written by `push`
        unsafe { slice::from_raw_parts(self.squares.as_ptr() as *const Square, self.len) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        SquareList::new()
    }
}

impl From<Bitboard> for SquareList {
    fn from(bb: Bitboard) -> Self {
        let mut list = SquareList::new();
        for square in bb {
            list.push(square);
        }
        list
    }
}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
