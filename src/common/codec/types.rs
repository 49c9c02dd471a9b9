use crate::bit_utils::BitStream;
use crate::metadata::{char_cnt_bits, mode_bits};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl Mode {
    /// 4-bit mode indicator.
    pub fn indicator(&self) -> u8 {
        *self as u8
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(char.is_ascii_digit(), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conver: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conver: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte conver: {len}");
                data[0] as u16
            }
            Self::Kanji => unreachable!("Kanji data has no encoder"),
        }
    }

    pub fn contains(&self, char: char) -> bool {
        match self {
            Self::Numeric => char.is_ascii_digit(),
            Self::Alphanumeric => {
                matches!(char, '0'..='9' | 'A'..='Z' | ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
            }
            Self::Byte => true,
            Self::Kanji => is_kanji_script(char),
        }
    }

    /// Bit length of `len` characters packed in this mode.
    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
            Self::Kanji => unreachable!("Kanji data has no encoder"),
        }
    }
}

// Han, Hiragana and Katakana script blocks, halfwidth forms included
fn is_kanji_script(char: char) -> bool {
    matches!(char,
        // Han
        '\u{2E80}'..='\u{2E99}'
        | '\u{2E9B}'..='\u{2EF3}'
        | '\u{2F00}'..='\u{2FD5}'
        | '\u{3005}'
        | '\u{3007}'
        | '\u{3021}'..='\u{3029}'
        | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FA6D}'
        | '\u{FA70}'..='\u{FAD9}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{2F800}'..='\u{2FA1F}'
        | '\u{30000}'..='\u{323AF}'
        // Hiragana
        | '\u{3041}'..='\u{3096}'
        | '\u{309D}'..='\u{309F}'
        | '\u{1B001}'..='\u{1B11F}'
        | '\u{1F200}'
        // Katakana
        | '\u{30A1}'..='\u{30FA}'
        | '\u{30FD}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{32D0}'..='\u{32FE}'
        | '\u{3300}'..='\u{3357}'
        | '\u{FF66}'..='\u{FF6F}'
        | '\u{FF71}'..='\u{FF9D}'
        | '\u{1B000}'
    )
}

// Mode classifier
//------------------------------------------------------------------------------

/// Picks the most compact mode able to represent every character of `text`.
pub fn classify(text: &str) -> Mode {
    if !text.is_empty() && text.chars().all(|c| Mode::Numeric.contains(c)) {
        Mode::Numeric
    } else if text.chars().all(|c| Mode::Alphanumeric.contains(c)) {
        Mode::Alphanumeric
    } else if text.chars().any(|c| Mode::Kanji.contains(c)) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}


// Segment
//------------------------------------------------------------------------------

/// A mode-tagged run of encoded data: mode indicator, character count
/// indicator and packed data bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSegment {
    pub(crate) mode: Mode,
    pub(crate) char_cnt: usize,
    pub(crate) mode_bits: usize, // Bit len of mode
    pub(crate) len_bits: usize,  // Bit len of char count
    pub(crate) data: BitStream,
}

impl EncodedSegment {
    pub(crate) fn new(mode: Mode, char_cnt: usize, data: BitStream) -> Self {
        Self { mode, char_cnt, mode_bits: mode_bits(), len_bits: char_cnt_bits(mode), data }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn char_count(&self) -> usize {
        self.char_cnt
    }

    pub fn data_bits(&self) -> &BitStream {
        &self.data
    }

    pub fn bit_len(&self) -> usize {
        self.mode_bits + self.len_bits + self.data.len()
    }

    /// Mode indicator, character count indicator and data bits in order.
    pub fn bits(&self) -> BitStream {
        let mut bs = BitStream::with_capacity(self.bit_len());
        bs.push_bits(self.mode.indicator(), self.mode_bits);
        bs.push_bits(self.char_cnt as u16, self.len_bits);
        bs.append(&self.data);
        bs
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
