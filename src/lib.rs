//! # qrdata
//!
//! The data encoding and error correction stages of a QR code symbol encoder.
//! Text goes in, the final codeword sequence (data codewords followed by
//! Reed-Solomon error correction codewords) comes out, ready for module placement.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrdata::{encode_symbol_data, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codewords = encode_symbol_data("HELLO WORLD", ECLevel::Q)?;
//! assert_eq!(codewords.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use qrdata::{ECLevel, Mode, SymbolDataBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = SymbolDataBuilder::new("01234567").ec_level(ECLevel::H).build()?;
//! assert_eq!(symbol.mode(), Mode::Numeric);
//! assert_eq!(symbol.data().len(), 36);
//! assert_eq!(symbol.ecc().len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Capacity
//!
//! A single symbol profile is supported: 100 codewords arranged as one block.
//!
//! - **L (Low)**: 80 data codewords, 20 error correction codewords
//! - **M (Medium)**: 64 data codewords, 36 error correction codewords
//! - **Q (Quartile)**: 48 data codewords, 52 error correction codewords
//! - **H (High)**: 36 data codewords, 64 error correction codewords

#![allow(clippy::items_after_test_module, clippy::suspicious_arithmetic_impl)]

pub mod builder;
pub(crate) mod common;

pub(crate) use common::*;

pub use builder::{encode_symbol_data, SymbolData, SymbolDataBuilder};
pub use common::bit_utils::BitStream;
pub use common::codec::{assemble, classify, encode_segment, EncodedSegment, Mode};
pub use common::ec::{build_generator, ecc, generator, rs_encode, Block};
pub use common::ec::galois::{add, multiply, G};
pub use common::metadata::ECLevel;
pub use common::utils::{ErrorKind, QRError, QRResult};
