use super::{OpsBuilder, PacketizationOps, legacy};

/// No packet layout of the 3xx cores differs from the legacy one yet.
pub(super) const OPS: PacketizationOps = OpsBuilder::new(&legacy::OPS).build();
