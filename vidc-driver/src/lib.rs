#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! HFI command packetization for the video coprocessor.
//!
//! Every command is encoded into a caller-owned byte buffer as one
//! self-describing packet: a `{packet_type, size}` header, the session id for
//! session commands, then the command fields. Pick the encoders of a firmware
//! revision with [`get_pkt_ops`](firmware::driver::get_pkt_ops).

#[cfg(target_endian = "big")]
compile_error!("HFI packets are little-endian and are written in native byte order");

/// Error types.
pub mod error;
/// Firmware interface.
pub mod firmware;

pub use vidc_core as core;

/// Commonly used types.
pub mod prelude {
    pub use vidc_core::prelude::*;

    pub use crate::{
        error::{ErrorKind, VidcDriverError},
        firmware::{
            driver::{
                get_pkt_ops, packetization_ops, OpsBuilder, PacketizationOps,
                PacketizationOption, Version,
            },
            session_id::session_id,
        },
    };
}
