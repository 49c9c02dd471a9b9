use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Invalid input
    EmptyData,
    InvalidECCount,
    BlockTooLong,
    InvalidChar,
    UnsupportedMode,

    // Capacity exceeded
    CharCountOverflow,
    DataTooLong,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ErrorKind {
    InvalidInput,
    CapacityExceeded,
}

impl QRError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyData
            | Self::InvalidECCount
            | Self::BlockTooLong
            | Self::InvalidChar
            | Self::UnsupportedMode => ErrorKind::InvalidInput,
            Self::CharCountOverflow | Self::DataTooLong => ErrorKind::CapacityExceeded,
        }
    }
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Invalid input
            Self::EmptyData => "Empty data",
            Self::InvalidECCount => "Error correction codeword count must be positive",
            Self::BlockTooLong => "Block length exceeds the field size",
            Self::InvalidChar => "Invalid character for mode",
            Self::UnsupportedMode => "Mode has no data encoder",

            // Capacity exceeded
            Self::CharCountOverflow => "Character count exceeds count indicator width",
            Self::DataTooLong => "Data too long",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
