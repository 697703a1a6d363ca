use super::{Bitboard, Rank, TargetError};

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.
/// The raw tags are `0` for White and `1` for Black, matching the table index.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Represents the 8 king steps plus the 8 knight jumps. The discriminant is the
/// index offset of one step, so shifting a bitboard left by a positive value
/// (or right by a negative one) moves every bit one step in that direction.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the forward direction for a colour
    #[inline]
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }

    /// Returns the two diagonal capture directions for a colour
    #[inline]
    pub const fn captures(&self) -> [Direction; 2] {
        match self {
            Colour::White => [Direction::NW, Direction::NE],
            Colour::Black => [Direction::SE, Direction::SW],
        }
    }

    /// Returns the rank pawns of this colour start on (and may double push from)
    #[inline]
    pub const fn start_rank(&self) -> Rank {
        Rank::Rank2.relative(*self)
    }

    /// Returns the opposite colour
    #[inline]
    pub const fn opponent(&self) -> Colour {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<u8> for Colour {
    type Error = TargetError;

    /// Checked conversion from a raw colour tag
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Colour::White),
            1 => Ok(Colour::Black),
            _ => Err(TargetError::InvalidColour(tag)),
        }
    }
}

impl Direction {
    /// King steps, in the order the tables are built
    pub const KING: [Direction; 8] = {
        use Direction::*;
        [N, NE, E, SE, S, SW, W, NW]
    };

    /// Knight jumps, in the order the tables are built
    pub const KNIGHT: [Direction; 8] = {
        use Direction::*;
        [NNE, NEE, SEE, SSE, SSW, SWW, NWW, NNW]
    };

    /// Rook rays
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Bishop rays
    pub const DIAGONAL: [Direction; 4] = [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// Signed index offset of one step
    #[inline]
    pub const fn offset(self) -> i8 {
        self as i8
    }

    /// Files moved by one step (east is positive)
    pub const fn file_delta(self) -> i8 {
        use Direction::*;
        match self {
            N | S => 0,
            E | NE | SE | NNE | SSE => 1,
            W | NW | SW | NNW | SSW => -1,
            NEE | SEE => 2,
            NWW | SWW => -2,
        }
    }

    /// Ranks moved by one step (north is positive)
    pub const fn rank_delta(self) -> i8 {
        use Direction::*;
        match self {
            E | W => 0,
            N | NE | NW | NEE | NWW => 1,
            S | SE | SW | SEE | SWW => -1,
            NNE | NNW => 2,
            SSE | SSW => -2,
        }
    }

    /// Mask a shifted bit must survive for the step to stay on the board.
    ///
    /// Moving east by one file can only wrap onto the A file, by two files onto
    /// the A or B file, and symmetrically for west. Vertical moves need no file
    /// guard; bits pushed past rank 1 or rank 8 fall off the `u64` on their own.
    pub const fn landing_mask(self) -> Bitboard {
        match self.file_delta() {
            1 => Bitboard::NOT_A_FILE,
            2 => Bitboard::NOT_AB_FILE,
            -1 => Bitboard::NOT_H_FILE,
            -2 => Bitboard::NOT_GH_FILE,
            _ => Bitboard::FULL,
        }
    }
}
