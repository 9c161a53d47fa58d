use crate::error::VidcDriverError;

/// Packetization revision of the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Version {
    /// Packet layouts of pre-3xx cores.
    #[display("legacy packetization")]
    Legacy,
    /// Venus 3xx cores.
    #[display("3xx packetization")]
    V3xx,
}

impl TryFrom<u32> for Version {
    type Error = VidcDriverError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Legacy),
            1 => Ok(Self::V3xx),
            _ => Err(VidcDriverError::UnknownPacketization(value)),
        }
    }
}

impl From<Version> for u32 {
    fn from(value: Version) -> Self {
        match value {
            Version::Legacy => 0,
            Version::V3xx => 1,
        }
    }
}
