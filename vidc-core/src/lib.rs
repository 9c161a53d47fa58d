#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Abstract (HAL-level) types for the video coprocessor driver.
//!
//! Nothing in this crate knows about the coprocessor's wire protocol. The
//! packetization layer in `vidc-driver` translates these types into HFI
//! packets.

#[macro_use]
mod macros;

/// Buffer roles and descriptors.
pub mod buffer;
/// Codec families and session domains.
pub mod codec;
/// Error types.
pub mod error;
/// Bit-flag valued format domains.
pub mod format;
/// Closed mode enumerations carried inside properties.
pub mod mode;
/// Session and system properties.
pub mod property;
/// Shared coprocessor resources.
pub mod resource;
/// Session handles and session-level commands.
pub mod session;
/// System-level commands.
pub mod system;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        buffer::{BufferAddr, BufferAddrInfo, BufferType, FlushType, FrameData, SeqHdr},
        codec::{SessionDomain, VideoCodec},
        error::HalValueError,
        format::{CabacModel, ColorFormat, EntropyMode, NalFormat, Profile},
        mode::*,
        property::{Property, PropertyId},
        resource::{ResourceHeader, ResourceId},
        session::{SessionCommand, SessionHandle},
        system::SsrTrigger,
    };
}
