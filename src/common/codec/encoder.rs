pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use log::debug;

    use crate::bit_utils::BitStream;
    use crate::codec::{EncodedSegment, Mode};
    use crate::metadata::{char_cnt_bits, ECLevel};
    use crate::utils::{QRError, QRResult};

    use super::writer::{pad_remaining_capacity, push_data, push_segment, push_terminator};

    /// Packs `text` in `mode` behind its mode and character count indicators.
    pub fn encode_segment(text: &str, mode: Mode, ecl: ECLevel) -> QRResult<EncodedSegment> {
        if mode == Mode::Kanji {
            return Err(QRError::UnsupportedMode);
        }
        if !text.chars().all(|c| mode.contains(c)) {
            return Err(QRError::InvalidChar);
        }

        // Numeric and alphanumeric text is ASCII, so bytes and characters coincide
        let data = text.as_bytes();
        let char_cnt = data.len();
        if char_cnt >> char_cnt_bits(mode) != 0 {
            return Err(QRError::CharCountOverflow);
        }

        let mut bits = BitStream::with_capacity(mode.encoded_len(char_cnt));
        push_data(mode, data, &mut bits);
        let seg = EncodedSegment::new(mode, char_cnt, bits);

        let bcap = ecl.data_bit_capacity();
        if seg.bit_len() > bcap {
            return Err(QRError::DataTooLong);
        }

        debug!("Encoded {char_cnt} chars in {mode:?} mode into {} bits", seg.bit_len());
        Ok(seg)
    }

    /// Lays out the segment, terminator and padding to fill the data capacity
    /// of `ecl` exactly, returning the data codewords.
    pub fn assemble(seg: &EncodedSegment, ecl: ECLevel) -> QRResult<Vec<u8>> {
        let bcap = ecl.data_bit_capacity();
        if seg.bit_len() > bcap {
            return Err(QRError::DataTooLong);
        }

        let mut bs = BitStream::with_capacity(bcap);
        push_segment(seg, &mut bs);
        push_terminator(&mut bs, bcap);
        pad_remaining_capacity(&mut bs, bcap);

        debug_assert!(bs.len() == bcap, "Stream must fill capacity: Len {}, Cap {bcap}", bs.len());
        Ok(bs.into_codewords())
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::bit_utils::BitStream;
    use crate::codec::{EncodedSegment, Mode, PADDING_CODEWORDS};

    pub fn push_segment(seg: &EncodedSegment, out: &mut BitStream) {
        push_header(seg, out);
        out.append(&seg.data);
    }

    fn push_header(seg: &EncodedSegment, out: &mut BitStream) {
        out.push_bits(seg.mode.indicator(), seg.mode_bits);
        let char_cnt = seg.char_cnt;
        debug_assert!(
            char_cnt < (1 << seg.len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {}",
            seg.len_bits
        );
        out.push_bits(char_cnt as u16, seg.len_bits);
    }

    pub fn push_data(mode: Mode, data: &[u8], out: &mut BitStream) {
        match mode {
            Mode::Numeric => push_numeric_data(data, out),
            Mode::Alphanumeric => push_alphanumeric_data(data, out),
            Mode::Byte => push_byte_data(data, out),
            Mode::Kanji => unreachable!("Kanji data has no encoder"),
        }
    }

    fn push_numeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(3) {
            let len = (chunk.len() * 10 + 2) / 3;
            let data = Mode::Numeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    fn push_alphanumeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(2) {
            let len = (chunk.len() * 11 + 1) / 2;
            let data = Mode::Alphanumeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(1) {
            let data = Mode::Byte.encode_chunk(chunk);
            out.push_bits(data, 8);
        }
    }

    pub fn push_terminator(out: &mut BitStream, bit_capacity: usize) {
        let bit_len = out.len();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream, bit_capacity: usize) {
        push_padding_bits(out);
        push_padding_codewords(out, bit_capacity);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream, bit_capacity: usize) {
        debug_assert!(out.is_aligned(), "Bit offset should be zero before padding codewords");

        let remain_byte_capacity = (bit_capacity - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
