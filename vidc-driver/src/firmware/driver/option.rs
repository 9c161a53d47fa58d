use crate::firmware::hfi;

/// Host-side settings read by the encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacketizationOption {
    /// Firmware debug mode written by the debug-config packet. Values above
    /// the QDSS mode select the queue.
    pub fw_debug_mode: u32,
}

impl Default for PacketizationOption {
    fn default() -> Self {
        Self {
            fw_debug_mode: hfi::HFI_DEBUG_MODE_QUEUE,
        }
    }
}
