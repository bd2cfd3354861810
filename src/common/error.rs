use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BlueprintError {
    // Input
    EmptyData,
    DataTooLong,
    InvalidData,
    NonSquareMatrix,
    InvalidScale,
    InvalidItemKind,
    InvalidECLevel,

    // Output
    Serialization,
    Compression,
}

impl Display for BlueprintError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Input
            Self::EmptyData => "Empty data",
            Self::DataTooLong => "Data too long to fit in a QR code",
            Self::InvalidData => "Data cannot be encoded as a QR code",
            Self::NonSquareMatrix => "Module matrix is not square",
            Self::InvalidScale => "Scale must be a finite number greater than zero",
            Self::InvalidItemKind => "Invalid item kind",
            Self::InvalidECLevel => "Invalid error correction level",

            // Output
            Self::Serialization => "Failed to serialize blueprint",
            Self::Compression => "Failed to compress blueprint",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for BlueprintError {}

impl From<qrcode::types::QrError> for BlueprintError {
    fn from(e: qrcode::types::QrError) -> Self {
        match e {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            _ => Self::InvalidData,
        }
    }
}

pub type BlueprintResult<T> = Result<T, BlueprintError>;
