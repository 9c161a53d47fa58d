use vidc_core::{
    codec::{SessionDomain, VideoCodec},
    session::{SessionCommand, SessionHandle},
};

use zerocopy::{Immutable, IntoBytes};

use super::PacketBuilder;
use crate::{
    error::VidcDriverError,
    firmware::{hfi::PacketType, translate::to_hfi_codec},
};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct SessionInit {
    session_domain: u32,
    session_codec: u32,
}

const fn command_packet_type(cmd: SessionCommand) -> PacketType {
    match cmd {
        SessionCommand::End => PacketType::SysSessionEnd,
        SessionCommand::Abort => PacketType::SysSessionAbort,
        SessionCommand::LoadResources => PacketType::SessionLoadResources,
        SessionCommand::ReleaseResources => PacketType::SessionReleaseResources,
        SessionCommand::Start => PacketType::SessionStart,
        SessionCommand::Stop => PacketType::SessionStop,
        SessionCommand::Suspend => PacketType::SessionSuspend,
        SessionCommand::Resume => PacketType::SessionResume,
        SessionCommand::Continue => PacketType::SessionContinue,
        SessionCommand::Sync => PacketType::SessionSync,
    }
}

pub(crate) fn session_init(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    domain: SessionDomain,
    codec: VideoCodec,
) -> Result<usize, VidcDriverError> {
    let mut builder = PacketBuilder::session(PacketType::SysSessionInit, session)?;
    let session_codec =
        to_hfi_codec(codec).ok_or(VidcDriverError::InvalidArgument("codec has no wire code"))?;
    builder
        .push(SessionInit {
            session_domain: domain.raw(),
            session_codec,
        })
        .commit(tx)
}

pub(crate) fn session_cmd(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    cmd: SessionCommand,
) -> Result<usize, VidcDriverError> {
    PacketBuilder::session(command_packet_type(cmd), session)?.commit(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::{hfi, packet::tests::*, session_id::session_id};

    #[rstest::rstest]
    #[test]
    #[case(hfi::HFI_VIDEO_CODEC_H264, SessionDomain::Decoder, VideoCodec::Mvc)]
    #[case(hfi::HFI_VIDEO_CODEC_VP8, SessionDomain::Encoder, VideoCodec::Vp8)]
    #[case(hfi::HFI_VIDEO_CODEC_HEVC, SessionDomain::Decoder, VideoCodec::Hevc)]
    fn init(
        #[case] expect: u32,
        #[case] domain: SessionDomain,
        #[case] codec: VideoCodec,
    ) -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let mut tx = tx_buf();
        let written = session_init(&mut tx, Some(&session), domain, codec)?;
        assert_eq!(20, written);
        assert_packet(&tx, written, PacketType::SysSessionInit);
        assert_eq!(session_id(&session), read_u32(&tx, 8));
        assert_eq!(domain.raw(), read_u32(&tx, 12));
        assert_eq!(expect, read_u32(&tx, 16));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(VidcDriverError::InvalidArgument("codec has no wire code"), true, VideoCodec::Vp6)]
    #[case(VidcDriverError::InvalidArgument("codec has no wire code"), true, VideoCodec::Vp7)]
    #[case(VidcDriverError::InvalidArgument("session is null"), false, VideoCodec::H264)]
    fn init_err(
        #[case] expect: VidcDriverError,
        #[case] with_session: bool,
        #[case] codec: VideoCodec,
    ) {
        let session = SessionHandle::new();
        let mut tx = tx_buf();
        assert_eq!(
            Err(expect),
            session_init(
                &mut tx,
                with_session.then_some(&session),
                SessionDomain::Decoder,
                codec
            )
        );
        assert_untouched(&tx);
    }

    #[test]
    fn cmd() -> anyhow::Result<()> {
        let session = SessionHandle::new();
        for &cmd in SessionCommand::ALL {
            let mut tx = tx_buf();
            let written = session_cmd(&mut tx, Some(&session), cmd)?;
            assert_eq!(12, written);
            assert_packet(&tx, written, command_packet_type(cmd));
            assert_eq!(session_id(&session), read_u32(&tx, 8));
        }
        Ok(())
    }

    #[test]
    fn cmd_null_session() {
        let mut tx = tx_buf();
        assert_eq!(
            Err(VidcDriverError::InvalidArgument("session is null")),
            session_cmd(&mut tx, None, SessionCommand::Start)
        );
        assert_untouched(&tx);
    }
}
