mod frame;

pub use frame::{FrameData, SeqHdr};

use derive_new::new;

hal_enum! {
    /// Role of a buffer exchanged with the coprocessor.
    pub enum BufferType {
        /// Bitstream (decoder) or raw frame (encoder) input.
        Input = 0x0000_0001,
        /// Primary output.
        Output = 0x0000_0002,
        /// Secondary output, e.g. a downscaled copy.
        Output2 = 0x0000_0004,
        /// Extradata attached to input buffers.
        ExtradataInput = 0x0000_0008,
        /// Extradata attached to primary output buffers.
        ExtradataOutput = 0x0000_0010,
        /// Extradata attached to secondary output buffers.
        ExtradataOutput2 = 0x0000_0020,
        /// Firmware scratch memory.
        InternalScratch = 0x0000_0040,
        /// Second firmware scratch region.
        InternalScratch1 = 0x0000_0080,
        /// Third firmware scratch region.
        InternalScratch2 = 0x0000_0100,
        /// Memory the firmware keeps for the lifetime of the session.
        InternalPersist = 0x0000_0200,
        /// Second persistent region.
        InternalPersist1 = 0x0000_0400,
        /// Host-side command queue memory. Never granted to a session.
        InternalCmdQueue = 0x0000_0800,
    }
}

impl BufferType {
    /// Returns `true` for the roles whose grant/release records carry an
    /// extra-data address next to the buffer address.
    #[must_use]
    pub const fn is_output(self) -> bool {
        matches!(self, BufferType::Output | BufferType::Output2)
    }
}

hal_enum! {
    /// How the client allocates buffers of a role.
    pub enum BufferMode {
        /// Fixed set of buffers registered up front.
        Static = 0x1,
        /// One ring buffer.
        Ring = 0x2,
        /// Buffers mapped per frame.
        Dynamic = 0x4,
    }
}

hal_enum! {
    /// Arrangement of the two views of a multiview (MVC) frame.
    pub enum BufferLayout {
        /// Base view on top of the second view in one buffer.
        TopBottom = 0x1,
        /// Views in consecutive buffers.
        Seq = 0x2,
    }
}

hal_enum! {
    /// Which queues a flush command empties.
    pub enum FlushType {
        /// Input queue.
        Input = 0x1,
        /// Primary output queue.
        Output = 0x2,
        /// Secondary output queue.
        Output2 = 0x4,
        /// All queues.
        All = 0x8,
    }
}

/// Device addresses of one granted buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferAddr {
    /// Device address of the buffer.
    pub device_addr: u32,
    /// Device address of the associated extradata region, or 0.
    pub extradata_addr: u32,
}

/// A batch of same-role buffers being granted to or revoked from a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferAddrInfo {
    /// Role of every buffer in the batch.
    pub buffer_type: BufferType,
    /// Size of each buffer in bytes.
    pub buffer_size: u32,
    /// Size of each extradata region in bytes.
    pub extradata_size: u32,
    /// Whether the firmware must acknowledge a release.
    pub response_required: bool,
    /// The buffers.
    pub buffers: Vec<BufferAddr>,
}
