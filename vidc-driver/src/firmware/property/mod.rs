//! Session property encoding.
//!
//! A set-property packet carries exactly one property: a count of 1, the wire
//! tag, then the tag's payload.

mod common;
mod payload;
mod vdec;
mod venc;
mod vpe;

use vidc_core::{
    buffer::BufferType,
    property::{Property, PropertyId},
    session::SessionHandle,
};

use zerocopy::{Immutable, IntoBytes};

use crate::{
    error::VidcDriverError,
    firmware::{
        hfi::{PacketType, PropertyTag},
        packet::{PacketBuilder, SinglePropertyHead},
        translate::{to_hfi_buffer, to_hfi_divx_format, to_hfi_output_order, to_hfi_rate_control},
    },
};

/// Properties the firmware does not implement yet. Setting one is rejected as
/// unsupported.
pub(crate) const NOT_IMPLEMENTED: &[PropertyId] = &[
    PropertyId::UncompressedPlaneActualConstraintsInfo,
    PropertyId::UncompressedPlaneActualInfo,
    PropertyId::ExtraDataHeaderConfig,
    PropertyId::Mpeg4ShortHeader,
    PropertyId::Mpeg4AcPrediction,
    PropertyId::BufferRequirements,
    PropertyId::Priority,
    PropertyId::BatchInfo,
    PropertyId::MetadataPassThrough,
    PropertyId::SysIdleIndicator,
    PropertyId::UncompressedFormatSupported,
    PropertyId::InterlaceFormatSupported,
    PropertyId::ChromaSite,
    PropertyId::PropertiesSupported,
    PropertyId::ProfileLevelSupported,
    PropertyId::CapabilitySupported,
    PropertyId::NalStreamFormatSupported,
    PropertyId::MultiViewFormat,
    PropertyId::MaxSequenceHeaderSize,
    PropertyId::CodecSupported,
    PropertyId::VdecMultiViewSelect,
    PropertyId::VdecMbQuantization,
    PropertyId::VdecNumConcealedMb,
    PropertyId::VdecH264EntropySwitching,
    PropertyId::Mpeg4DataPartitioning,
    PropertyId::ConfigBufferCountActual,
    PropertyId::ConfigVdecMultiStream,
    PropertyId::MultiSliceInfo,
    PropertyId::TimestampScale,
    PropertyId::LowLatency,
];

pub(crate) fn session_set_property(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    property: &Property,
) -> Result<usize, VidcDriverError> {
    let mut builder = PacketBuilder::session(PacketType::SessionSetProperty, session)?;
    encode(&mut builder, property)?;
    builder.commit(tx)
}

fn single<T: IntoBytes + Immutable>(
    builder: &mut PacketBuilder,
    tag: PropertyTag,
    payload: T,
) -> Result<(), VidcDriverError> {
    builder.push(SinglePropertyHead::new(tag)).push(payload);
    Ok(())
}

fn enable(builder: &mut PacketBuilder, tag: PropertyTag, enable: bool) -> Result<(), VidcDriverError> {
    single(builder, tag, u32::from(enable))
}

/// Buffer roles inside a property must have a wire code.
fn hfi_buffer(buffer_type: BufferType) -> Result<u32, VidcDriverError> {
    to_hfi_buffer(buffer_type).ok_or(VidcDriverError::InvalidArgument(
        "buffer type has no wire code",
    ))
}

fn unimplemented(id: PropertyId) -> VidcDriverError {
    if NOT_IMPLEMENTED.contains(&id) || id == PropertyId::GetBufferRequirements {
        tracing::debug!("Property {:?} is not implemented by the firmware", id);
        VidcDriverError::unsupported("property", id.raw())
    } else {
        VidcDriverError::InvalidArgument("property needs a value")
    }
}

fn encode(b: &mut PacketBuilder, property: &Property) -> Result<(), VidcDriverError> {
    use PropertyTag as Tag;

    match *property {
        Property::FrameRate(p) => common::frame_rate(b, p),
        Property::UncompressedFormatSelect(p) => common::uncompressed_format(b, p),
        Property::FrameSize(p) => common::frame_size(b, p),
        Property::Realtime(v) => enable(b, Tag::Realtime, v),
        Property::BufferCountActual(p) => {
            common::buffer_value(b, Tag::BufferCountActual, p.buffer_type, p.count_actual)
        }
        Property::BufferSizeActual(p) => {
            common::buffer_value(b, Tag::BufferSizeActual, p.buffer_type, p.size)
        }
        Property::BufferDisplayHoldCountActual(p) => common::buffer_value(
            b,
            Tag::BufferDisplayHoldCountActual,
            p.buffer_type,
            p.hold_count,
        ),
        Property::NalStreamFormatSelect(f) => common::nal_format(b, f),
        Property::ProfileLevelCurrent(p) => common::profile_level(b, p),
        Property::DivxFormat(f) => single(b, Tag::DivxFormat, to_hfi_divx_format(f)),
        Property::IndexExtradata(p) => common::index_extradata(b, p),
        Property::BufferAllocMode(p) => common::buffer_alloc_mode(b, p),
        Property::MvcBufferLayout(p) => common::mvc_buffer_layout(b, p),

        Property::VdecOutputOrder(o) => single(b, Tag::VdecOutputOrder, to_hfi_output_order(o)),
        Property::VdecPictureTypeDecode(v) => single(b, Tag::VdecPictureTypeDecode, v),
        Property::Output2KeepAspectRatio(v) => enable(b, Tag::VdecOutput2KeepAspectRatio, v),
        Property::PostLoopDeblocker(v) => enable(b, Tag::VdecPostLoopDeblocker, v),
        Property::VdecMultiStream(p) => vdec::multi_stream(b, p),
        Property::DisplayPictureBufferCount(p) => vdec::display_picture_buffer_count(b, p),
        Property::MbErrorMapReporting(v) => enable(b, Tag::VdecMbErrorMapReporting, v),
        Property::ContinueDataTransfer(v) => enable(b, Tag::VdecContinueDataTransfer, v),
        Property::SyncFrameDecode(v) => enable(b, Tag::VdecThumbnailMode, v),
        Property::ConcealColor(v) => single(b, Tag::VdecConcealColor, v),
        Property::FrameAssembly(v) => enable(b, Tag::VdecFrameAssembly, v),
        Property::ScsThreshold(v) => single(b, Tag::VdecScsThreshold, v),
        Property::NonSecureOutput2(v) => enable(b, Tag::VdecNonCpOutput2, v),

        Property::SyncFrameSequenceHeader(v) => enable(b, Tag::VencSyncFrameSequenceHeader, v),
        Property::RequestIFrame => {
            b.push(SinglePropertyHead::new(Tag::VencRequestSyncFrame));
            Ok(())
        }
        Property::TargetBitrate(p) => venc::bitrate(b, Tag::VencTargetBitrate, p),
        Property::MaxBitrate(p) => venc::bitrate(b, Tag::VencMaxBitrate, p),
        Property::H264EntropyControl(p) => venc::entropy_control(b, p),
        Property::RateControl(rc) => single(b, Tag::VencRateControl, to_hfi_rate_control(rc)),
        Property::Mpeg4TimeResolution(v) => single(b, Tag::VencMpeg4TimeResolution, v),
        Property::Mpeg4HeaderExtension(v) => single(b, Tag::VencMpeg4HeaderExtension, v),
        Property::H264DeblockControl(p) => venc::deblock_control(b, p),
        Property::SessionQp(p) => venc::session_qp(b, p),
        Property::SessionQpRange(p) => venc::session_qp_range(b, p),
        Property::SearchRange(p) => venc::search_range(b, p),
        Property::MaxNumBFrames(v) => single(b, Tag::VencMaxNumBFrames, v),
        Property::IntraPeriod(p) => venc::intra_period(b, p),
        Property::IdrPeriod(v) => single(b, Tag::VencIdrPeriod, v),
        Property::IntraRefresh(p) => venc::intra_refresh(b, p),
        Property::MultiSliceControl(p) => venc::multi_slice_control(b, p),
        Property::SliceDeliveryMode(v) => enable(b, Tag::VencSliceDeliveryMode, v),
        Property::VuiTimingInfo(p) => venc::vui_timing_info(b, p),
        Property::GenerateAudNal(v) => enable(b, Tag::VencH264GenerateAudNal, v),
        Property::VuiBitstreamRestriction(v) => enable(b, Tag::VencH264VuiBitstreamRestriction, v),
        Property::PreserveTextQuality(v) => enable(b, Tag::VencPreserveTextQuality, v),
        Property::LtrMode(p) => venc::ltr_mode(b, p),
        Property::UseLtrFrame(p) => venc::use_ltr_frame(b, p),
        Property::MarkLtrFrame(p) => single(b, Tag::VencMarkLtrFrame, p.mark_frame),
        Property::HierPMaxEnhLayers(v) => single(b, Tag::VencHierPMaxNumEnhLayer, v),
        Property::HierPNumFrames(v) => single(b, Tag::VencHierPEnhLayer, v),
        Property::DisableRcTimestamp(v) => enable(b, Tag::VencDisableRcTimestamp, v),
        Property::InitialQp(p) => venc::initial_qp(b, p),
        Property::VpxErrorResilience(v) => enable(b, Tag::VencVpxErrorResilienceMode, v),
        Property::H264NalSvcExt(v) => enable(b, Tag::VencH264NalSvcExt, v),
        Property::PerfMode(v) => single(b, Tag::VencPerfMode, v),
        Property::HierBMaxEnhLayers(v) => single(b, Tag::VencHierBMaxNumEnhLayer, v),
        Property::HierPHybridMode(layers) => single(b, Tag::VencHierPHybridMode, layers),

        Property::VpeOperations(p) => vpe::operations(b, p),
        Property::VpeDeinterlace(v) => enable(b, Tag::VpeDeinterlace, v),
        Property::ColorSpaceConversion(p) => vpe::color_space_conversion(b, p),

        Property::Unimplemented(id) => Err(unimplemented(id)),
    }
}
