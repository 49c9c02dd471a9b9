use std::fmt::{Display, Formatter};
use std::mem;

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Append-only sequence of bits, packed MSB first into bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0 }
    }

    pub fn from(inp: &[u8]) -> Self {
        Self { data: inp.to_vec(), len: inp.len() << 3 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_aligned(&self) -> bool {
        self.len & 7 == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }

    pub fn get(&self, pos: usize) -> bool {
        debug_assert!(pos < self.len, "Out of bitstream bounds: Len {}, Pos {}", self.len, pos);

        (self.data[pos >> 3] << (pos & 7)) >> 7 != 0
    }

    /// Consumes a byte aligned stream and returns its codewords.
    pub fn into_codewords(mut self) -> Vec<u8> {
        debug_assert!(self.is_aligned(), "Stream must be byte aligned: Bit len {}", self.len);

        self.data.truncate((self.len + 7) >> 3);
        self.data
    }

    fn reserve_bits(&mut self, size: usize) {
        let bytes = (self.len + size + 7) >> 3;
        if bytes > self.data.len() {
            self.data.resize(bytes, 0);
        }
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the low `size` bits of `bits`, most significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds 16 or `bits` does not fit in a `u16`.
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        let bits = match bits.to_u16() {
            Some(b) if size <= 16 => b,
            _ => panic!("Bits from only u8 and u16 can be pushed"),
        };

        match size {
            0 => (),
            1..=8 => {
                self.reserve_bits(size);
                let bits = bits as u8;
                let offset = self.len & 7;
                let pos = self.len >> 3;

                if offset + size <= 8 {
                    self.data[pos] |= bits << (8 - size - offset);
                } else {
                    self.data[pos] |= bits >> (size + offset - 8);
                    self.data[pos + 1] = bits << (16 - size - offset);
                }

                self.len += size;
            }
            _ => {
                self.push_bits((bits >> 8) as u8, size - 8);
                self.push_bits((bits & 0xFF) as u8, 8);
            }
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.reserve_bits(1);

        if bit {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            self.is_aligned(),
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );

        self.data.truncate(self.len >> 3);
        self.data.extend_from_slice(arr);
        self.len += arr.len() << 3;
    }

    /// Appends every bit of `other` without requiring alignment.
    pub fn append(&mut self, other: &BitStream) {
        if self.is_aligned() && other.is_aligned() {
            self.extend(other.data());
            return;
        }

        let full = other.len >> 3;
        for &b in &other.data[..full] {
            self.push_bits(b, 8);
        }
        for pos in full << 3..other.len {
            self.push(other.get(pos));
        }
    }
}


impl Display for BitStream {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for pos in 0..self.len {
            f.write_str(if self.get(pos) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
