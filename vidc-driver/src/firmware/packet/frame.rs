use vidc_core::{
    buffer::{BufferType, FrameData},
    session::SessionHandle,
};

use zerocopy::{Immutable, IntoBytes};

use super::PacketBuilder;
use crate::{error::VidcDriverError, firmware::hfi::PacketType};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct EmptyBufferCompressed {
    time_stamp_hi: u32,
    time_stamp_lo: u32,
    flags: u32,
    mark_target: u32,
    mark_data: u32,
    offset: u32,
    alloc_len: u32,
    filled_len: u32,
    input_tag: u32,
    packet_buffer: u32,
    extra_data_buffer: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct EmptyBufferUncompressedPlane0 {
    view_id: u32,
    time_stamp_hi: u32,
    time_stamp_lo: u32,
    flags: u32,
    mark_target: u32,
    mark_data: u32,
    alloc_len: u32,
    filled_len: u32,
    offset: u32,
    input_tag: u32,
    packet_buffer: u32,
    extra_data_buffer: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct FillBuffer {
    stream_id: u32,
    offset: u32,
    alloc_len: u32,
    filled_len: u32,
    output_tag: u32,
    packet_buffer: u32,
    extra_data_buffer: u32,
    extra_data_size: u32,
}

fn frame_builder(
    packet_type: PacketType,
    session: Option<&SessionHandle>,
    frame: &FrameData,
) -> Result<PacketBuilder, VidcDriverError> {
    let builder = PacketBuilder::session(packet_type, session)?;
    if frame.device_addr == 0 {
        return Err(VidcDriverError::InvalidArgument("frame device address is null"));
    }
    Ok(builder)
}

/// Queues a bitstream buffer to a decoder.
pub(crate) fn session_etb_decoder(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    frame: &FrameData,
) -> Result<usize, VidcDriverError> {
    frame_builder(PacketType::SessionEmptyBuffer, session, frame)?
        .push(EmptyBufferCompressed {
            time_stamp_hi: frame.timestamp_hi(),
            time_stamp_lo: frame.timestamp_lo(),
            flags: frame.flags,
            mark_target: frame.mark_target,
            mark_data: frame.mark_data,
            offset: frame.offset,
            alloc_len: frame.alloc_len,
            filled_len: frame.filled_len,
            input_tag: frame.client_data,
            packet_buffer: frame.device_addr,
            extra_data_buffer: frame.extradata_addr,
        })
        .commit(tx)
}

/// Queues a raw frame to an encoder. Only the base view is supported.
pub(crate) fn session_etb_encoder(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    frame: &FrameData,
) -> Result<usize, VidcDriverError> {
    frame_builder(PacketType::SessionEmptyBuffer, session, frame)?
        .push(EmptyBufferUncompressedPlane0 {
            view_id: 0,
            time_stamp_hi: frame.timestamp_hi(),
            time_stamp_lo: frame.timestamp_lo(),
            flags: frame.flags,
            mark_target: frame.mark_target,
            mark_data: frame.mark_data,
            alloc_len: frame.alloc_len,
            filled_len: frame.filled_len,
            offset: frame.offset,
            input_tag: frame.client_data,
            packet_buffer: frame.device_addr,
            extra_data_buffer: frame.extradata_addr,
        })
        .commit(tx)
}

/// Queues an output buffer. The stream is selected by the buffer role.
pub(crate) fn session_ftb(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    frame: &FrameData,
) -> Result<usize, VidcDriverError> {
    let mut builder = frame_builder(PacketType::SessionFillBuffer, session, frame)?;
    let stream_id = match frame.buffer_type {
        BufferType::Output => 0,
        BufferType::Output2 => 1,
        _ => {
            return Err(VidcDriverError::InvalidArgument(
                "fill buffer needs an output role",
            ))
        }
    };
    builder
        .push(FillBuffer {
            stream_id,
            offset: frame.offset,
            alloc_len: frame.alloc_len,
            filled_len: frame.filled_len,
            output_tag: frame.client_data,
            packet_buffer: frame.device_addr,
            extra_data_buffer: frame.extradata_addr,
            extra_data_size: frame.extradata_size,
        })
        .commit(tx)
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;
    use crate::firmware::{packet::tests::*, session_id::session_id};

    fn frame(buffer_type: BufferType) -> FrameData {
        FrameData {
            timestamp: 0x0000_0012_3456_789a,
            flags: 0x1,
            mark_target: 0x2,
            mark_data: 0x3,
            offset: 0x40,
            filled_len: 0x800,
            extradata_addr: 0x2000_0000,
            extradata_size: 0x100,
            client_data: 0xc0ffee,
            ..FrameData::new(buffer_type, 0x1000_0000, 0x1000)
        }
    }

    #[test]
    fn layout() {
        assert_eq!(44, size_of::<EmptyBufferCompressed>());
        assert_eq!(48, size_of::<EmptyBufferUncompressedPlane0>());
        assert_eq!(32, size_of::<FillBuffer>());
        assert_eq!(32, offset_of!(EmptyBufferCompressed, input_tag));
        assert_eq!(36, offset_of!(EmptyBufferUncompressedPlane0, input_tag));
        assert_eq!(28, offset_of!(FillBuffer, extra_data_size));
    }

    #[test]
    fn etb_decoder() -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let mut tx = tx_buf();

        let written = session_etb_decoder(&mut tx, Some(&session), &frame(BufferType::Input))?;

        assert_eq!(12 + size_of::<EmptyBufferCompressed>(), written);
        assert_packet(&tx, written, PacketType::SessionEmptyBuffer);
        assert_eq!(session_id(&session), read_u32(&tx, 8));
        assert_eq!(0x12, read_u32(&tx, 12));
        assert_eq!(0x3456_789a, read_u32(&tx, 16));
        assert_eq!(0x40, read_u32(&tx, 32));
        assert_eq!(0x800, read_u32(&tx, 40));
        assert_eq!(0xc0ffee, read_u32(&tx, 44));
        assert_eq!(0x1000_0000, read_u32(&tx, 48));
        Ok(())
    }

    #[test]
    fn etb_encoder() -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let mut tx = tx_buf();

        let written = session_etb_encoder(&mut tx, Some(&session), &frame(BufferType::Input))?;

        assert_eq!(12 + size_of::<EmptyBufferUncompressedPlane0>(), written);
        assert_packet(&tx, written, PacketType::SessionEmptyBuffer);
        assert_eq!(0, read_u32(&tx, 12));
        assert_eq!(0x12, read_u32(&tx, 16));
        assert_eq!(0x1000, read_u32(&tx, 36));
        assert_eq!(0xc0ffee, read_u32(&tx, 48));
        assert_eq!(0x1000_0000, read_u32(&tx, 52));
        assert_eq!(0x2000_0000, read_u32(&tx, 56));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(0, BufferType::Output)]
    #[case(1, BufferType::Output2)]
    fn ftb(#[case] stream_id: u32, #[case] buffer_type: BufferType) -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let mut tx = tx_buf();

        let written = session_ftb(&mut tx, Some(&session), &frame(buffer_type))?;

        assert_eq!(12 + size_of::<FillBuffer>(), written);
        assert_packet(&tx, written, PacketType::SessionFillBuffer);
        assert_eq!(stream_id, read_u32(&tx, 12));
        assert_eq!(0x1000_0000, read_u32(&tx, 32));
        assert_eq!(0x2000_0000, read_u32(&tx, 36));
        assert_eq!(0x100, read_u32(&tx, 40));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(VidcDriverError::InvalidArgument("session is null"), false, 0x1000_0000)]
    #[case(
        VidcDriverError::InvalidArgument("frame device address is null"),
        true,
        0
    )]
    fn err(#[case] expect: VidcDriverError, #[case] with_session: bool, #[case] device_addr: u32) {
        let session = SessionHandle::new();
        let session = with_session.then_some(&session);
        let frame = FrameData::new(BufferType::Output, device_addr, 0x1000);

        [session_etb_decoder, session_etb_encoder, session_ftb]
            .iter()
            .for_each(|f| {
                let mut tx = tx_buf();
                assert_eq!(Err(expect.clone()), f(&mut tx, session, &frame));
                assert_untouched(&tx);
            });
    }

    #[rstest::rstest]
    #[test]
    #[case(BufferType::Input)]
    #[case(BufferType::ExtradataOutput)]
    #[case(BufferType::InternalScratch)]
    fn ftb_non_output(#[case] buffer_type: BufferType) {
        let session = SessionHandle::new();
        let mut tx = tx_buf();
        assert_eq!(
            Err(VidcDriverError::InvalidArgument(
                "fill buffer needs an output role"
            )),
            session_ftb(&mut tx, Some(&session), &frame(buffer_type))
        );
        assert_untouched(&tx);
    }
}
