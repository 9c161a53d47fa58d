use vidc_core::{buffer::BufferAddrInfo, session::SessionHandle};

use zerocopy::{Immutable, IntoBytes};

use super::PacketBuilder;
use crate::{
    error::VidcDriverError,
    firmware::{hfi::PacketType, translate::to_hfi_buffer},
};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct SetBuffers {
    buffer_type: u32,
    buffer_size: u32,
    extra_data_size: u32,
    min_buffer_size: u32,
    num_buffers: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct ReleaseBuffers {
    buffer_type: u32,
    buffer_size: u32,
    extra_data_size: u32,
    response_req: u32,
    num_buffers: u32,
}

/// Per-buffer record of the output roles.
#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct BufferInfo {
    buffer_addr: u32,
    extra_data_addr: u32,
}

struct Batch {
    buffer_type: u32,
    extra_data_size: u32,
    num_buffers: u32,
}

fn validate(bai: &BufferAddrInfo) -> Result<Batch, VidcDriverError> {
    if bai.buffers.is_empty() {
        return Err(VidcDriverError::InvalidArgument("buffer batch is empty"));
    }
    let buffer_type = to_hfi_buffer(bai.buffer_type).ok_or(VidcDriverError::unsupported(
        "buffer type",
        bai.buffer_type.raw(),
    ))?;
    Ok(Batch {
        buffer_type,
        extra_data_size: if bai.buffer_type.is_output() {
            bai.extradata_size
        } else {
            0
        },
        num_buffers: bai.buffers.len() as u32,
    })
}

fn push_buffers(builder: &mut PacketBuilder, bai: &BufferAddrInfo) {
    if bai.buffer_type.is_output() {
        builder.extend(bai.buffers.iter().map(|b| BufferInfo {
            buffer_addr: b.device_addr,
            extra_data_addr: b.extradata_addr,
        }));
    } else {
        builder.extend(bai.buffers.iter().map(|b| b.device_addr));
    }
}

/// Grants a batch of same-role buffers to the session.
///
/// Output roles carry one [`BufferInfo`] record per buffer and the negotiated
/// extradata size. Every other role carries a flat address array and an
/// extradata size of zero.
pub(crate) fn session_set_buffers(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    bai: &BufferAddrInfo,
) -> Result<usize, VidcDriverError> {
    let mut builder = PacketBuilder::session(PacketType::SessionSetBuffers, session)?;
    let batch = validate(bai)?;
    builder.push(SetBuffers {
        buffer_type: batch.buffer_type,
        buffer_size: bai.buffer_size,
        extra_data_size: batch.extra_data_size,
        min_buffer_size: bai.buffer_size,
        num_buffers: batch.num_buffers,
    });
    push_buffers(&mut builder, bai);
    builder.commit(tx)
}

pub(crate) fn session_release_buffers(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    bai: &BufferAddrInfo,
) -> Result<usize, VidcDriverError> {
    let mut builder = PacketBuilder::session(PacketType::SessionReleaseBuffers, session)?;
    let batch = validate(bai)?;
    builder.push(ReleaseBuffers {
        buffer_type: batch.buffer_type,
        buffer_size: bai.buffer_size,
        extra_data_size: batch.extra_data_size,
        response_req: u32::from(bai.response_required),
        num_buffers: batch.num_buffers,
    });
    push_buffers(&mut builder, bai);
    builder.commit(tx)
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use vidc_core::buffer::{BufferAddr, BufferType};

    use super::*;
    use crate::firmware::{hfi, packet::tests::*, session_id::session_id};

    const HEAD: usize = 12;
    const FIXED: usize = HEAD + size_of::<SetBuffers>();

    fn batch(buffer_type: BufferType, n: u32) -> BufferAddrInfo {
        BufferAddrInfo {
            buffer_type,
            buffer_size: 0x10_0000,
            extradata_size: 0x2000,
            response_required: true,
            buffers: (0..n)
                .map(|i| BufferAddr::new(0x1000_0000 + i * 0x10_0000, 0x2000_0000 + i * 0x2000))
                .collect(),
        }
    }

    #[test]
    fn layout() {
        assert_eq!(20, size_of::<SetBuffers>());
        assert_eq!(20, size_of::<ReleaseBuffers>());
        assert_eq!(8, size_of::<BufferInfo>());
        assert_eq!(8, offset_of!(SetBuffers, extra_data_size));
        assert_eq!(12, offset_of!(SetBuffers, min_buffer_size));
        assert_eq!(12, offset_of!(ReleaseBuffers, response_req));
        assert_eq!(16, offset_of!(ReleaseBuffers, num_buffers));
    }

    #[test]
    fn set_output2_records() -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let bai = batch(BufferType::Output2, 3);
        let mut tx = tx_buf();

        let written = session_set_buffers(&mut tx, Some(&session), &bai)?;

        assert_eq!(FIXED + 3 * size_of::<BufferInfo>(), written);
        assert_packet(&tx, written, PacketType::SessionSetBuffers);
        assert_eq!(session_id(&session), read_u32(&tx, 8));
        assert_eq!(hfi::HFI_BUFFER_OUTPUT2, read_u32(&tx, HEAD));
        assert_eq!(0x10_0000, read_u32(&tx, HEAD + 4));
        assert_eq!(0x2000, read_u32(&tx, HEAD + 8));
        assert_eq!(0x10_0000, read_u32(&tx, HEAD + 12));
        assert_eq!(3, read_u32(&tx, HEAD + 16));
        bai.buffers.iter().enumerate().for_each(|(i, b)| {
            assert_eq!(b.device_addr, read_u32(&tx, FIXED + i * 8));
            assert_eq!(b.extradata_addr, read_u32(&tx, FIXED + i * 8 + 4));
        });
        Ok(())
    }

    #[test]
    fn set_scratch_flat() -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let bai = batch(BufferType::InternalScratch, 3);
        let mut tx = tx_buf();

        let written = session_set_buffers(&mut tx, Some(&session), &bai)?;

        assert_eq!(FIXED + 3 * size_of::<u32>(), written);
        assert_packet(&tx, written, PacketType::SessionSetBuffers);
        assert_eq!(hfi::HFI_BUFFER_INTERNAL_SCRATCH, read_u32(&tx, HEAD));
        assert_eq!(0, read_u32(&tx, HEAD + 8));
        assert_eq!(3, read_u32(&tx, HEAD + 16));
        bai.buffers.iter().enumerate().for_each(|(i, b)| {
            assert_eq!(b.device_addr, read_u32(&tx, FIXED + i * 4));
        });
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(BufferType::Output, 8)]
    #[case(BufferType::Output2, 8)]
    #[case(BufferType::Input, 4)]
    #[case(BufferType::ExtradataOutput, 4)]
    #[case(BufferType::InternalPersist1, 4)]
    fn release(#[case] buffer_type: BufferType, #[case] record: usize) -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let bai = batch(buffer_type, 2);
        let mut tx = tx_buf();

        let written = session_release_buffers(&mut tx, Some(&session), &bai)?;

        assert_eq!(FIXED + 2 * record, written);
        assert_packet(&tx, written, PacketType::SessionReleaseBuffers);
        assert_eq!(
            if buffer_type.is_output() { 0x2000 } else { 0 },
            read_u32(&tx, HEAD + 8)
        );
        assert_eq!(1, read_u32(&tx, HEAD + 12));
        assert_eq!(2, read_u32(&tx, HEAD + 16));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(
        VidcDriverError::InvalidArgument("session is null"),
        false,
        batch(BufferType::Output, 1)
    )]
    #[case(
        VidcDriverError::InvalidArgument("buffer batch is empty"),
        true,
        batch(BufferType::Output, 0)
    )]
    #[case(
        VidcDriverError::unsupported("buffer type", BufferType::InternalCmdQueue.raw()),
        true,
        batch(BufferType::InternalCmdQueue, 1)
    )]
    fn err(
        #[case] expect: VidcDriverError,
        #[case] with_session: bool,
        #[case] bai: BufferAddrInfo,
    ) {
        let session = SessionHandle::new();
        let session = with_session.then_some(&session);

        let mut tx = tx_buf();
        assert_eq!(Err(expect.clone()), session_set_buffers(&mut tx, session, &bai));
        assert_untouched(&tx);

        assert_eq!(Err(expect), session_release_buffers(&mut tx, session, &bai));
        assert_untouched(&tx);
    }
}
