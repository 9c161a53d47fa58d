use vidc_core::{buffer::FlushType, session::SessionHandle};

use super::PacketBuilder;
use crate::{
    error::VidcDriverError,
    firmware::{hfi::PacketType, translate::to_hfi_flush},
};

pub(crate) fn session_flush(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    flush_type: FlushType,
) -> Result<usize, VidcDriverError> {
    PacketBuilder::session(PacketType::SessionFlush, session)?
        .push(to_hfi_flush(flush_type))
        .commit(tx)
}
