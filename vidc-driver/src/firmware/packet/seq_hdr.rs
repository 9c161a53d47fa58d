use vidc_core::{buffer::SeqHdr, session::SessionHandle};

use zerocopy::{Immutable, IntoBytes};

use super::PacketBuilder;
use crate::{error::VidcDriverError, firmware::hfi::PacketType};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct ParseSequenceHeader {
    header_len: u32,
    packet_buffer: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct GetSequenceHeader {
    buffer_len: u32,
    packet_buffer: u32,
}

fn seq_hdr_builder(
    packet_type: PacketType,
    session: Option<&SessionHandle>,
    seq_hdr: &SeqHdr,
) -> Result<PacketBuilder, VidcDriverError> {
    let builder = PacketBuilder::session(packet_type, session)?;
    if seq_hdr.seq_hdr == 0 {
        return Err(VidcDriverError::InvalidArgument(
            "sequence header address is null",
        ));
    }
    Ok(builder)
}

/// Asks the firmware to parse a sequence header held in `seq_hdr`.
pub(crate) fn session_parse_seq_header(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    seq_hdr: &SeqHdr,
) -> Result<usize, VidcDriverError> {
    seq_hdr_builder(PacketType::SessionParseSequenceHeader, session, seq_hdr)?
        .push(ParseSequenceHeader {
            header_len: seq_hdr.seq_hdr_len,
            packet_buffer: seq_hdr.seq_hdr,
        })
        .commit(tx)
}

/// Asks the encoder to write its sequence header into `seq_hdr`.
pub(crate) fn session_get_seq_hdr(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    seq_hdr: &SeqHdr,
) -> Result<usize, VidcDriverError> {
    seq_hdr_builder(PacketType::SessionGetSequenceHeader, session, seq_hdr)?
        .push(GetSequenceHeader {
            buffer_len: seq_hdr.seq_hdr_len,
            packet_buffer: seq_hdr.seq_hdr,
        })
        .commit(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::{packet::tests::*, session_id::session_id};

    #[rstest::rstest]
    #[test]
    #[case(PacketType::SessionParseSequenceHeader, session_parse_seq_header)]
    #[case(PacketType::SessionGetSequenceHeader, session_get_seq_hdr)]
    fn seq_hdr(
        #[case] expect: PacketType,
        #[case] f: fn(&mut [u8], Option<&SessionHandle>, &SeqHdr) -> Result<usize, VidcDriverError>,
    ) -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let mut tx = tx_buf();

        let written = f(&mut tx, Some(&session), &SeqHdr::new(0x3000_0000, 0x200))?;

        assert_eq!(20, written);
        assert_packet(&tx, written, expect);
        assert_eq!(session_id(&session), read_u32(&tx, 8));
        assert_eq!(0x200, read_u32(&tx, 12));
        assert_eq!(0x3000_0000, read_u32(&tx, 16));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(session_parse_seq_header)]
    #[case(session_get_seq_hdr)]
    fn null_address(
        #[case] f: fn(&mut [u8], Option<&SessionHandle>, &SeqHdr) -> Result<usize, VidcDriverError>,
    ) {
        let session = SessionHandle::new();
        let mut tx = tx_buf();
        assert_eq!(
            Err(VidcDriverError::InvalidArgument(
                "sequence header address is null"
            )),
            f(&mut tx, Some(&session), &SeqHdr::new(0, 0x200))
        );
        assert_untouched(&tx);
    }
}
