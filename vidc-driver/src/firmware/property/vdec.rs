use vidc_core::property::{DisplayPictureBufferCount, MultiStream};

use super::{hfi_buffer, payload as wire, single};
use crate::{
    error::VidcDriverError,
    firmware::{hfi::PropertyTag, packet::PacketBuilder},
};

pub(super) fn multi_stream(b: &mut PacketBuilder, p: MultiStream) -> Result<(), VidcDriverError> {
    let buffer_type = hfi_buffer(p.buffer_type)?;
    single(
        b,
        PropertyTag::VdecMultiStream,
        wire::MultiStream {
            buffer_type,
            enable: u32::from(p.enable),
            width: p.width,
            height: p.height,
        },
    )
}

pub(super) fn display_picture_buffer_count(
    b: &mut PacketBuilder,
    p: DisplayPictureBufferCount,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VdecDisplayPictureBufferCount,
        wire::DisplayPictureBufferCount {
            enable: u32::from(p.enable),
            count: p.count,
        },
    )
}
