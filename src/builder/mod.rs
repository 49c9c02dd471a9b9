use log::debug;

use crate::common::{
    codec::{assemble, classify, encode_segment, Mode},
    ec::Block,
    metadata::ECLevel,
    utils::QRResult,
};

// Builder
//------------------------------------------------------------------------------

pub struct SymbolDataBuilder<'a> {
    text: &'a str,
    ec_level: ECLevel,
}

impl<'a> SymbolDataBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, ec_level: ECLevel::M }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Ec level: {:?}, Mode: {:?} }}", self.ec_level, classify(self.text))
    }

    pub fn build(&self) -> QRResult<SymbolData> {
        let ecl = self.ec_level;

        let mode = match classify(self.text) {
            // Kanji is detected but not packed, UTF-8 bytes keep the symbol readable
            Mode::Kanji => {
                debug!("Kanji text detected, packing as bytes");
                Mode::Byte
            }
            m => m,
        };

        let seg = encode_segment(self.text, mode, ecl)?;
        let data = assemble(&seg, ecl)?;
        let block = Block::new(&data, ecl.ec_codewords())?;

        debug!(
            "Built symbol data: Level {ecl}, Mode {mode:?}, Data {} codewords, Ecc {} codewords",
            block.data_len(),
            block.ec_len()
        );
        Ok(SymbolData { ec_level: ecl, mode, block })
    }
}

// Symbol data
//------------------------------------------------------------------------------

/// Final codeword sequence of a symbol along with how it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolData {
    ec_level: ECLevel,
    mode: Mode,
    block: Block,
}

impl SymbolData {
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mode the text was packed in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Data codewords followed by error correction codewords.
    pub fn codewords(&self) -> &[u8] {
        self.block.full()
    }

    pub fn data(&self) -> &[u8] {
        self.block.data()
    }

    pub fn ecc(&self) -> &[u8] {
        self.block.ecc()
    }
}

/// Encodes `text` at `ec_level` into the codeword sequence handed to module placement.
pub fn encode_symbol_data(text: &str, ec_level: ECLevel) -> QRResult<Vec<u8>> {
    let symbol = SymbolDataBuilder::new(text).ec_level(ec_level).build()?;
    Ok(symbol.codewords().to_vec())
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::{encode_symbol_data, SymbolDataBuilder};
    use crate::common::{assemble, encode_segment, ECLevel, Mode, QRError};

    #[test]
    fn test_metadata() {
        let mut builder = SymbolDataBuilder::new("Hello, world!");
        assert_eq!(builder.metadata(), "{ Ec level: M, Mode: Byte }");
        builder.text("12345").ec_level(ECLevel::Q);
        assert_eq!(builder.metadata(), "{ Ec level: Q, Mode: Numeric }");
    }

    #[test]
    fn test_numeric_symbol() {
        let symbol = SymbolDataBuilder::new("01234567").build().unwrap();
        assert_eq!(symbol.ec_level(), ECLevel::M);
        assert_eq!(symbol.mode(), Mode::Numeric);
        assert_eq!(symbol.data()[..8], [0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11]);
        assert_eq!(
            symbol.ecc(),
            [
                110, 47, 130, 95, 53, 87, 53, 141, 78, 148, 104, 8, 199, 208, 180, 107, 116, 105,
                111, 119, 166, 81, 67, 193, 41, 182, 77, 77, 13, 231, 151, 179, 206, 80, 61, 192
            ]
        );
    }

    #[test]
    fn test_byte_symbol() {
        let symbol = SymbolDataBuilder::new("Hello, World!").ec_level(ECLevel::H).build().unwrap();
        assert_eq!(symbol.mode(), Mode::Byte);
        assert_eq!(symbol.data()[..3], [0x40, 0xD4, 0x86]);
        assert_eq!(symbol.ecc()[..8], [15, 119, 13, 38, 17, 154, 195, 184]);
    }

    #[test]
    fn test_kanji_packed_as_bytes() {
        let symbol = SymbolDataBuilder::new("こんにちは").ec_level(ECLevel::Q).build().unwrap();
        assert_eq!(symbol.mode(), Mode::Byte);
        assert_eq!(symbol.data()[..3], [0x40, 0xFE, 0x38]);
        assert_eq!(symbol.data().len(), 48);
    }

    #[test_case(ECLevel::L, 80)]
    #[test_case(ECLevel::M, 64)]
    #[test_case(ECLevel::Q, 48)]
    #[test_case(ECLevel::H, 36)]
    fn test_layout(ecl: ECLevel, data_len: usize) {
        let text = "HELLO WORLD";
        let codewords = encode_symbol_data(text, ecl).unwrap();
        assert_eq!(codewords.len(), 100);

        let seg = encode_segment(text, Mode::Alphanumeric, ecl).unwrap();
        let data = assemble(&seg, ecl).unwrap();
        assert_eq!(codewords[..data_len], data[..]);
    }

    #[test]
    fn test_idempotent() {
        for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            let first = encode_symbol_data("Idempotent 42", ecl).unwrap();
            let second = encode_symbol_data("Idempotent 42", ecl).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_data_too_long() {
        let text = "a".repeat(40);
        assert!(encode_symbol_data(&text, ECLevel::L).is_ok());
        assert_eq!(encode_symbol_data(&text, ECLevel::H), Err(QRError::DataTooLong));
    }
}
