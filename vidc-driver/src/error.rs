use thiserror::Error;

use vidc_core::error::HalValueError;

/// Coarse classification of [`VidcDriverError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument is missing or malformed.
    InvalidArgument,
    /// The value is valid at the HAL level but has no wire encoding.
    Unsupported,
    /// A numeric value does not fit its wire field.
    OutOfRange,
    /// The requested packetization revision does not exist.
    Unknown,
    /// The destination buffer is too small.
    Capacity,
}

/// A interface for error handling in vidc-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum VidcDriverError {
    /// A required argument is missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The value has no wire encoding in this packetization revision.
    #[error("{what} ({value:#x}) is not supported")]
    Unsupported {
        /// What was being encoded.
        what: &'static str,
        /// The offending raw value.
        value: u32,
    },
    /// A numeric value does not fit its wire field.
    #[error("{what} ({value}) is out of range ([0, {max}])")]
    OutOfRange {
        /// What was being encoded.
        what: &'static str,
        /// The offending value.
        value: u32,
        /// Largest representable value.
        max: u32,
    },
    /// The requested packetization revision does not exist.
    #[error("Unknown packetization type ({0:#x})")]
    UnknownPacketization(u32),
    /// The destination buffer cannot hold the packet.
    #[error("Packet needs {required} bytes but only {available} are available")]
    InsufficientBuffer {
        /// Size of the packet.
        required: usize,
        /// Size of the destination.
        available: usize,
    },
    /// A raw HAL value is not a member of its domain.
    #[error(transparent)]
    HalValue(#[from] HalValueError),
}

impl VidcDriverError {
    /// Returns the class of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::HalValue(_) => ErrorKind::InvalidArgument,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::UnknownPacketization(_) => ErrorKind::Unknown,
            Self::InsufficientBuffer { .. } => ErrorKind::Capacity,
        }
    }

    pub(crate) const fn unsupported(what: &'static str, value: u32) -> Self {
        Self::Unsupported { what, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[test]
    #[case(ErrorKind::InvalidArgument, VidcDriverError::InvalidArgument("session"))]
    #[case(
        ErrorKind::InvalidArgument,
        VidcDriverError::HalValue(HalValueError::new("Rotation", 9))
    )]
    #[case(ErrorKind::Unsupported, VidcDriverError::unsupported("codec", 0x400))]
    #[case(
        ErrorKind::OutOfRange,
        VidcDriverError::OutOfRange { what: "min_qp", value: 256, max: 0xff }
    )]
    #[case(ErrorKind::Unknown, VidcDriverError::UnknownPacketization(7))]
    #[case(
        ErrorKind::Capacity,
        VidcDriverError::InsufficientBuffer { required: 12, available: 8 }
    )]
    fn kind(#[case] expect: ErrorKind, #[case] err: VidcDriverError) {
        assert_eq!(expect, err.kind());
    }

    #[test]
    fn display() {
        assert_eq!(
            "min_qp (256) is out of range ([0, 255])",
            VidcDriverError::OutOfRange {
                what: "min_qp",
                value: 256,
                max: 0xff
            }
            .to_string()
        );
        assert_eq!(
            "Invalid Rotation value: 0x9",
            VidcDriverError::from(HalValueError::new("Rotation", 9)).to_string()
        );
    }
}
