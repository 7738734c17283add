//! Board squares and bitboards

use std::fmt;

/// Number of files (columns), `A` to `G`
pub const FILES: usize = 7;

/// Number of ranks (rows), `1` to `6`
pub const RANKS: usize = 6;

/// Bits reserved per file in a bitboard (six ranks plus one sentinel)
pub const FILE_STRIDE: usize = RANKS + 1;

/// Set of squares, bit `7 * file + rank`
pub type Bitboard = u64;

/// Every playable square, sentinel bits excluded
pub const ALL_SQUARES: Bitboard = {
    let file_a: Bitboard = (1 << RANKS) - 1;
    let mut all = 0;
    let mut file = 0;
    while file < FILES {
        all |= file_a << (file * FILE_STRIDE);
        file += 1;
    }
    all
};

/// A playable square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Square at zero-based `file` (A = 0) and `rank` (1 = 0)
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < FILES && rank < RANKS {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Zero-based file index
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Zero-based rank index
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// File letter, `A` to `G`
    pub const fn file_letter(self) -> char {
        (b'A' + self.file) as char
    }

    /// Bit index in a bitboard
    pub const fn bit(self) -> u32 {
        (self.file() * FILE_STRIDE + self.rank()) as u32
    }

    /// Single-square bitboard
    pub const fn bitboard(self) -> Bitboard {
        1 << self.bit()
    }

    /// Square for a bit index, `None` for sentinel or out-of-range bits
    pub const fn from_bit(bit: u32) -> Option<Self> {
        let bit = bit as usize;
        Self::new(bit / FILE_STRIDE, bit % FILE_STRIDE)
    }

    /// All squares in file-major order (A1, A2, ..., G6)
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FILES).flat_map(|file| (0..RANKS).filter_map(move |rank| Self::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SQ_{}{}", self.file_letter(), self.rank + 1)
    }
}

/// Squares of a bitboard in ascending bit order
pub fn squares(mut bb: Bitboard) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        while bb != 0 {
            let bit = bb.trailing_zeros();
            bb &= bb - 1;
            if let Some(square) = Square::from_bit(bit) {
                return Some(square);
            }
        }
        None
    })
}
