use derive_new::new;

hal_enum! {
    /// Shared memory resource that can be lent to the coprocessor.
    pub enum ResourceId {
        /// On-chip memory.
        Ocmem = 0x1,
        /// Video memory.
        Vmem = 0x2,
        /// Core clock and bus votes. Managed outside the wire protocol.
        Core = 0x3,
    }
}

/// Describes a resource grant or revocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceHeader {
    /// Caller-stable token of the resource owner. Hashed like a session handle.
    pub resource_handle: u64,
    /// Which resource.
    pub resource_id: ResourceId,
    /// Size of the region in bytes.
    pub size: u32,
}
