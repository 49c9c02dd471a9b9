use std::fmt::{Display, Formatter};

use super::codec::Mode;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub enum ECLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ECLevel {
    /// Number of data codewords the symbol holds at this level.
    pub fn data_capacity(self) -> usize {
        DATA_CODEWORDS[self as usize]
    }

    pub fn data_bit_capacity(self) -> usize {
        self.data_capacity() << 3
    }

    /// Number of error correction codewords appended to the data.
    pub fn ec_codewords(self) -> usize {
        TOTAL_CODEWORDS - self.data_capacity()
    }

    pub fn total_codewords(self) -> usize {
        TOTAL_CODEWORDS
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let lvl = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(lvl)
    }
}

// Indicator widths
//------------------------------------------------------------------------------

pub fn mode_bits() -> usize {
    MODE_INDICATOR_BITS
}

// Character count indicator widths hold for versions 1 through 9
pub fn char_cnt_bits(mode: Mode) -> usize {
    match mode {
        Mode::Numeric => 10,
        Mode::Alphanumeric => 9,
        Mode::Byte => 8,
        Mode::Kanji => 8,
    }
}


// Global constants
//------------------------------------------------------------------------------

static MODE_INDICATOR_BITS: usize = 4;

// Single block profile of a version 4 symbol
static TOTAL_CODEWORDS: usize = 100;

// Indexed by ECLevel discriminant: L, M, Q, H
static DATA_CODEWORDS: [usize; 4] = [80, 64, 48, 36];
