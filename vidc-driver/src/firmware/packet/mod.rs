mod buffers;
mod flush;
mod frame;
mod get_property;
mod resource;
mod seq_hdr;
mod session;
mod sys;

pub(crate) use buffers::{session_release_buffers, session_set_buffers};
pub(crate) use flush::session_flush;
pub(crate) use frame::{session_etb_decoder, session_etb_encoder, session_ftb};
pub(crate) use get_property::session_get_property;
pub(crate) use resource::{sys_release_resource, sys_set_resource};
pub(crate) use seq_hdr::{session_get_seq_hdr, session_parse_seq_header};
pub(crate) use session::{session_cmd, session_init};
pub(crate) use sys::{
    ssr_cmd, sys_coverage_config, sys_debug_config, sys_idle_indicator, sys_image_version,
    sys_init, sys_pc_prep, sys_ping, sys_power_control,
};

use std::mem::size_of;

use smallvec::SmallVec;
use vidc_core::session::SessionHandle;
use zerocopy::{Immutable, IntoBytes};

use crate::{
    error::VidcDriverError,
    firmware::{
        hfi::{PacketType, PropertyTag},
        session_id::session_id,
    },
};

const INLINE_BODY_SIZE: usize = 128;

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(crate) struct HfiHeader {
    pub(crate) packet_type: PacketType,
    pub(crate) size: u32,
}

/// A property list holding exactly one property.
#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(crate) struct SinglePropertyHead {
    pub(crate) num_properties: u32,
    pub(crate) tag: PropertyTag,
}

impl SinglePropertyHead {
    pub(crate) const fn new(tag: PropertyTag) -> Self {
        Self {
            num_properties: 1,
            tag,
        }
    }
}

pub(crate) fn write_to_tx<T: IntoBytes + Immutable>(tx: &mut [u8], data: T) {
    tx[..size_of::<T>()].copy_from_slice(data.as_bytes());
}

/// Stages one packet and copies it to the destination in a single step.
///
/// The size field is derived from what was actually staged, so it always
/// matches the number of bytes written by [`PacketBuilder::commit`].
pub(crate) struct PacketBuilder {
    packet_type: PacketType,
    body: SmallVec<[u8; INLINE_BODY_SIZE]>,
}

impl PacketBuilder {
    pub(crate) fn new(packet_type: PacketType) -> Self {
        Self {
            packet_type,
            body: SmallVec::new(),
        }
    }

    /// Starts a session-scoped packet. A missing session is rejected before
    /// anything is staged.
    pub(crate) fn session(
        packet_type: PacketType,
        session: Option<&SessionHandle>,
    ) -> Result<Self, VidcDriverError> {
        let session = session.ok_or(VidcDriverError::InvalidArgument("session is null"))?;
        let id = session_id(session);
        tracing::trace!("{} is {:#010x} on the wire", session, id);
        let mut builder = Self::new(packet_type);
        builder.push(id);
        Ok(builder)
    }

    pub(crate) fn push<T: IntoBytes + Immutable>(&mut self, data: T) -> &mut Self {
        self.body.extend_from_slice(data.as_bytes());
        self
    }

    pub(crate) fn extend<T: IntoBytes + Immutable>(
        &mut self,
        data: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        data.into_iter().for_each(|d| {
            self.push(d);
        });
        self
    }

    pub(crate) fn size(&self) -> usize {
        size_of::<HfiHeader>() + self.body.len()
    }

    pub(crate) fn commit(&self, tx: &mut [u8]) -> Result<usize, VidcDriverError> {
        let size = self.size();
        if tx.len() < size {
            return Err(VidcDriverError::InsufficientBuffer {
                required: size,
                available: tx.len(),
            });
        }

        write_to_tx(
            tx,
            HfiHeader {
                packet_type: self.packet_type,
                size: size as u32,
            },
        );
        tx[size_of::<HfiHeader>()..size].copy_from_slice(&self.body);

        tracing::trace!("{:?} packet ({} bytes)", self.packet_type, size);

        Ok(size)
    }
}
