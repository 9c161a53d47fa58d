mod legacy;
mod option;
mod v3xx;
mod version;

pub use option::PacketizationOption;
pub use version::Version;

use vidc_core::{
    buffer::{BufferAddrInfo, FlushType, FrameData, SeqHdr},
    codec::{SessionDomain, VideoCodec},
    property::{Property, PropertyId},
    resource::ResourceHeader,
    session::{SessionCommand, SessionHandle},
    system::SsrTrigger,
};

use crate::error::VidcDriverError;

/// Declares the operation table together with its builder. Each entry is
/// written `name / override_method(args)`.
macro_rules! packetization_ops {
    ($($(#[$meta:meta])* $name:ident / $with:ident ($($arg:ident: $ty:ty),* $(,)?);)+) => {
        /// The encoders of one packetization revision, one per command.
        ///
        /// Every entry writes a complete packet to the start of `tx` and
        /// returns its size, or fails without writing anything.
        #[derive(Debug, Clone, Copy)]
        pub struct PacketizationOps {
            $($name: fn($($ty),*) -> Result<usize, VidcDriverError>,)+
        }

        impl PacketizationOps {
            $(
                $(#[$meta])*
                pub fn $name(&self, $($arg: $ty),*) -> Result<usize, VidcDriverError> {
                    (self.$name)($($arg),*)
                }
            )+
        }

        /// Derives a revision from another by replacing individual entries.
        #[derive(Debug, Clone, Copy)]
        pub struct OpsBuilder {
            ops: PacketizationOps,
        }

        impl OpsBuilder {
            /// Starts from a copy of `base`.
            #[must_use]
            pub const fn new(base: &PacketizationOps) -> Self {
                Self { ops: *base }
            }

            $(
                #[doc = concat!("Replaces the `", stringify!($name), "` entry.")]
                #[must_use]
                pub const fn $with(
                    mut self,
                    f: fn($($ty),*) -> Result<usize, VidcDriverError>,
                ) -> Self {
                    self.ops.$name = f;
                    self
                }
            )+

            /// Finishes the table.
            #[must_use]
            pub const fn build(self) -> PacketizationOps {
                self.ops
            }
        }
    };
}

packetization_ops! {
    /// `SYS_INIT` for the given architecture.
    sys_init / with_sys_init(tx: &mut [u8], arch_type: u32);
    /// Power-collapse preparation.
    sys_pc_prep / with_sys_pc_prep(tx: &mut [u8]);
    /// Enables or disables the idle indicator.
    sys_idle_indicator / with_sys_idle_indicator(tx: &mut [u8], enable: bool);
    /// Enables or disables codec power-plane control.
    sys_power_control / with_sys_power_control(tx: &mut [u8], enable: bool);
    /// Lends on-chip memory at `mem_addr` to the firmware.
    sys_set_resource / with_sys_set_resource(tx: &mut [u8], header: &ResourceHeader, mem_addr: u32);
    /// Takes lent memory back.
    sys_release_resource / with_sys_release_resource(tx: &mut [u8], header: &ResourceHeader);
    /// Firmware debug configuration. The mode comes from `option`.
    sys_debug_config / with_sys_debug_config(
        tx: &mut [u8],
        config: u32,
        option: &PacketizationOption,
    );
    /// Firmware coverage mode.
    sys_coverage_config / with_sys_coverage_config(tx: &mut [u8], mode: u32);
    /// Liveness ping.
    sys_ping / with_sys_ping(tx: &mut [u8]);
    /// Queries the firmware image version.
    sys_image_version / with_sys_image_version(tx: &mut [u8]);
    /// Triggers a subsystem restart for testing.
    ssr_cmd / with_ssr_cmd(tx: &mut [u8], trigger: SsrTrigger);
    /// Opens a session.
    session_init / with_session_init(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        domain: SessionDomain,
        codec: VideoCodec,
    );
    /// A session command without payload.
    session_cmd / with_session_cmd(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        cmd: SessionCommand,
    );
    /// Grants buffers to a session.
    session_set_buffers / with_session_set_buffers(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        info: &BufferAddrInfo,
    );
    /// Revokes buffers from a session.
    session_release_buffers / with_session_release_buffers(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        info: &BufferAddrInfo,
    );
    /// Queues a bitstream buffer to a decoder.
    session_etb_decoder / with_session_etb_decoder(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        frame: &FrameData,
    );
    /// Queues a raw frame to an encoder.
    session_etb_encoder / with_session_etb_encoder(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        frame: &FrameData,
    );
    /// Queues an output buffer.
    session_ftb / with_session_ftb(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        frame: &FrameData,
    );
    /// Asks the decoder to parse a sequence header.
    session_parse_seq_header / with_session_parse_seq_header(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        seq_hdr: &SeqHdr,
    );
    /// Asks the encoder for its sequence header.
    session_get_seq_hdr / with_session_get_seq_hdr(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        seq_hdr: &SeqHdr,
    );
    /// Flushes one or all queues.
    session_flush / with_session_flush(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        flush_type: FlushType,
    );
    /// Queries a property.
    session_get_property / with_session_get_property(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        id: PropertyId,
    );
    /// Sets a property.
    session_set_property / with_session_set_property(
        tx: &mut [u8],
        session: Option<&SessionHandle>,
        property: &Property,
    );
}

static LEGACY_OPS: PacketizationOps = legacy::OPS;
static V3XX_OPS: PacketizationOps = v3xx::OPS;

/// Returns the operation table of `version`.
#[must_use]
pub fn packetization_ops(version: Version) -> &'static PacketizationOps {
    tracing::debug!("{} selected", version);
    match version {
        Version::Legacy => &LEGACY_OPS,
        Version::V3xx => &V3XX_OPS,
    }
}

/// Returns the operation table of the raw packetization type.
pub fn get_pkt_ops(packetization_type: u32) -> Result<&'static PacketizationOps, VidcDriverError> {
    Version::try_from(packetization_type)
        .inspect_err(|_| tracing::debug!("Unknown hfi {:#x}", packetization_type))
        .map(packetization_ops)
}

#[cfg(test)]
mod tests {
    use vidc_core::{buffer::BufferType, property::FrameRate};

    use super::*;
    use crate::firmware::{hfi::PacketType, packet::tests::*};

    #[rstest::rstest]
    #[test]
    #[case(0)]
    #[case(1)]
    fn get_pkt_ops_known(#[case] raw: u32) -> anyhow::Result<()> {
        let ops = get_pkt_ops(raw)?;
        let mut tx = tx_buf();
        let written = ops.sys_ping(&mut tx)?;
        assert_packet(&tx, written, PacketType::SysPing);
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(2)]
    #[case(0xffff_ffff)]
    fn get_pkt_ops_unknown(#[case] raw: u32) {
        assert_eq!(
            Some(VidcDriverError::UnknownPacketization(raw)),
            get_pkt_ops(raw).err()
        );
    }

    #[test]
    fn tables_are_shared() {
        assert!(std::ptr::eq(
            packetization_ops(Version::Legacy),
            packetization_ops(Version::Legacy)
        ));
        assert!(!std::ptr::eq(
            packetization_ops(Version::Legacy),
            packetization_ops(Version::V3xx)
        ));
    }

    fn check(packet_type: PacketType, written: usize, tx: &mut [u8]) {
        assert_eq!(packet_type as u32, read_u32(tx, 0));
        assert_eq!(written as u32, read_u32(tx, 4));
        tx.fill(SENTINEL);
    }

    #[test]
    fn every_entry_dispatches() -> anyhow::Result<()> {
        let ops = packetization_ops(Version::V3xx);
        let session = SessionHandle::new();
        let session = Some(&session);
        let frame = FrameData::new(BufferType::Output, 0x1000_0000, 0x1000);
        let seq_hdr = SeqHdr::new(0x3000_0000, 0x100);
        let info = BufferAddrInfo {
            buffer_type: BufferType::InternalScratch,
            buffer_size: 0x1000,
            extradata_size: 0,
            response_required: false,
            buffers: vec![vidc_core::buffer::BufferAddr::new(0x2000_0000, 0)],
        };
        let header = ResourceHeader::new(0x1234, vidc_core::resource::ResourceId::Ocmem, 0x8000);
        let mut tx = tx_buf();

        check(PacketType::SysInit, ops.sys_init(&mut tx, 0)?, &mut tx);
        check(PacketType::SysPcPrep, ops.sys_pc_prep(&mut tx)?, &mut tx);
        check(
            PacketType::SysSetProperty,
            ops.sys_idle_indicator(&mut tx, true)?,
            &mut tx,
        );
        check(
            PacketType::SysSetProperty,
            ops.sys_power_control(&mut tx, true)?,
            &mut tx,
        );
        check(
            PacketType::SysSetResource,
            ops.sys_set_resource(&mut tx, &header, 0x4000_0000)?,
            &mut tx,
        );
        check(
            PacketType::SysReleaseResource,
            ops.sys_release_resource(&mut tx, &header)?,
            &mut tx,
        );
        check(
            PacketType::SysSetProperty,
            ops.sys_debug_config(&mut tx, 0x1, &PacketizationOption::default())?,
            &mut tx,
        );
        check(
            PacketType::SysSetProperty,
            ops.sys_coverage_config(&mut tx, 1)?,
            &mut tx,
        );
        check(PacketType::SysPing, ops.sys_ping(&mut tx)?, &mut tx);
        check(
            PacketType::SysGetProperty,
            ops.sys_image_version(&mut tx)?,
            &mut tx,
        );
        check(
            PacketType::SysTestSsr,
            ops.ssr_cmd(&mut tx, SsrTrigger::HwWdogIrq)?,
            &mut tx,
        );
        check(
            PacketType::SysSessionInit,
            ops.session_init(&mut tx, session, SessionDomain::Decoder, VideoCodec::H264)?,
            &mut tx,
        );
        check(
            PacketType::SessionStart,
            ops.session_cmd(&mut tx, session, SessionCommand::Start)?,
            &mut tx,
        );
        check(
            PacketType::SessionSetBuffers,
            ops.session_set_buffers(&mut tx, session, &info)?,
            &mut tx,
        );
        check(
            PacketType::SessionReleaseBuffers,
            ops.session_release_buffers(&mut tx, session, &info)?,
            &mut tx,
        );
        check(
            PacketType::SessionEmptyBuffer,
            ops.session_etb_decoder(&mut tx, session, &frame)?,
            &mut tx,
        );
        check(
            PacketType::SessionEmptyBuffer,
            ops.session_etb_encoder(&mut tx, session, &frame)?,
            &mut tx,
        );
        check(
            PacketType::SessionFillBuffer,
            ops.session_ftb(&mut tx, session, &frame)?,
            &mut tx,
        );
        check(
            PacketType::SessionParseSequenceHeader,
            ops.session_parse_seq_header(&mut tx, session, &seq_hdr)?,
            &mut tx,
        );
        check(
            PacketType::SessionGetSequenceHeader,
            ops.session_get_seq_hdr(&mut tx, session, &seq_hdr)?,
            &mut tx,
        );
        check(
            PacketType::SessionFlush,
            ops.session_flush(&mut tx, session, FlushType::All)?,
            &mut tx,
        );
        check(
            PacketType::SessionGetProperty,
            ops.session_get_property(&mut tx, session, PropertyId::ProfileLevelCurrent)?,
            &mut tx,
        );
        check(
            PacketType::SessionSetProperty,
            ops.session_set_property(
                &mut tx,
                session,
                &Property::FrameRate(FrameRate::new(BufferType::Output, 30 << 16)),
            )?,
            &mut tx,
        );
        Ok(())
    }
}
