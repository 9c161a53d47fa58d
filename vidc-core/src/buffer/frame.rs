use super::BufferType;

use derive_new::new;

/// One frame queued to the coprocessor, either an input buffer to empty or an
/// output buffer to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameData {
    /// Role of the buffer.
    pub buffer_type: BufferType,
    /// Device address of the buffer. Zero means no buffer.
    pub device_addr: u32,
    /// Device address of the extradata region, or 0.
    pub extradata_addr: u32,
    /// Size of the extradata region in bytes.
    pub extradata_size: u32,
    /// Presentation timestamp.
    pub timestamp: i64,
    /// Buffer flags, passed through unchanged.
    pub flags: u32,
    /// Mark target, passed through unchanged.
    pub mark_target: u32,
    /// Mark data, passed through unchanged.
    pub mark_data: u32,
    /// Offset of valid data in the buffer.
    pub offset: u32,
    /// Allocated length of the buffer.
    pub alloc_len: u32,
    /// Number of valid bytes.
    pub filled_len: u32,
    /// Opaque client tag round-tripped by the firmware.
    pub client_data: u32,
}

impl FrameData {
    /// Creates a frame descriptor with every optional field zeroed.
    #[must_use]
    pub const fn new(buffer_type: BufferType, device_addr: u32, alloc_len: u32) -> Self {
        Self {
            buffer_type,
            device_addr,
            extradata_addr: 0,
            extradata_size: 0,
            timestamp: 0,
            flags: 0,
            mark_target: 0,
            mark_data: 0,
            offset: 0,
            alloc_len,
            filled_len: 0,
            client_data: 0,
        }
    }

    /// Upper 32 bits of the timestamp.
    #[must_use]
    pub const fn timestamp_hi(&self) -> u32 {
        (self.timestamp as u64 >> 32) as u32
    }

    /// Lower 32 bits of the timestamp.
    #[must_use]
    pub const fn timestamp_lo(&self) -> u32 {
        self.timestamp as u64 as u32
    }
}

/// A sequence header buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeqHdr {
    /// Device address of the header buffer. Zero means no buffer.
    pub seq_hdr: u32,
    /// Length of the header (parse) or of the buffer (retrieve).
    pub seq_hdr_len: u32,
}
