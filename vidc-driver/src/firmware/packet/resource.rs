use vidc_core::resource::ResourceHeader;

use zerocopy::{Immutable, IntoBytes};

use super::PacketBuilder;
use crate::{
    error::VidcDriverError,
    firmware::{hfi::PacketType, session_id::hash32, translate::to_hfi_resource},
};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct SetResource {
    resource_handle: u32,
    resource_type: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct OcmemRegion {
    size: u32,
    mem: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct ReleaseResource {
    resource_type: u32,
    resource_handle: u32,
}

fn resource_type(header: &ResourceHeader) -> Result<u32, VidcDriverError> {
    to_hfi_resource(header.resource_id).ok_or(VidcDriverError::unsupported(
        "resource",
        header.resource_id.raw(),
    ))
}

/// Lends `mem_addr` to the firmware. Only on-chip memory can be lent.
pub(crate) fn sys_set_resource(
    tx: &mut [u8],
    header: &ResourceHeader,
    mem_addr: u32,
) -> Result<usize, VidcDriverError> {
    if mem_addr == 0 {
        return Err(VidcDriverError::InvalidArgument("resource address is null"));
    }
    let resource_type = resource_type(header)?;
    PacketBuilder::new(PacketType::SysSetResource)
        .push(SetResource {
            resource_handle: hash32(header.resource_handle),
            resource_type,
        })
        .push(OcmemRegion {
            size: header.size,
            mem: mem_addr,
        })
        .commit(tx)
}

pub(crate) fn sys_release_resource(
    tx: &mut [u8],
    header: &ResourceHeader,
) -> Result<usize, VidcDriverError> {
    let resource_type = resource_type(header)?;
    PacketBuilder::new(PacketType::SysReleaseResource)
        .push(ReleaseResource {
            resource_type,
            resource_handle: hash32(header.resource_handle),
        })
        .commit(tx)
}
