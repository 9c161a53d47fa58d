//! Translation between HAL enumerations and wire codes.

mod flag_table;

use flag_table::FlagTable;

use vidc_core::{
    buffer::{BufferLayout, BufferMode, BufferType, FlushType},
    codec::VideoCodec,
    format::{CabacModel, ColorFormat, EntropyMode, NalFormat, Profile},
    mode::{
        DeblockMode, DivxFormat, ExtradataId, Flip, IntraRefreshMode, LtrMode, MultiSliceMode,
        OutputOrder, RateControl, Rotation,
    },
    resource::ResourceId,
    system::SsrTrigger,
};

use crate::{
    error::VidcDriverError,
    firmware::hfi::{self, PropertyTag},
};

/// HAL domains whose values are single bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlagDomain {
    Profile,
    EntropyMode,
    CabacModel,
    ColorFormat,
    NalFormat,
}

const PROFILE_TABLE: FlagTable<11> = FlagTable::new(
    "profile",
    [
        Some(hfi::HFI_H264_PROFILE_BASELINE),
        Some(hfi::HFI_H264_PROFILE_MAIN),
        Some(hfi::HFI_H264_PROFILE_HIGH),
        None,
        None,
        None,
        None,
        Some(hfi::HFI_H264_PROFILE_CONSTRAINED_BASE),
        Some(hfi::HFI_H264_PROFILE_CONSTRAINED_HIGH),
        Some(hfi::HFI_VPX_PROFILE_VERSION_1),
        Some(hfi::HFI_H264_PROFILE_STEREO_HIGH),
    ],
);

const ENTROPY_TABLE: FlagTable<2> = FlagTable::new(
    "entropy mode",
    [
        Some(hfi::HFI_H264_ENTROPY_CAVLC),
        Some(hfi::HFI_H264_ENTROPY_CABAC),
    ],
);

const CABAC_TABLE: FlagTable<3> = FlagTable::new(
    "cabac model",
    [
        Some(hfi::HFI_H264_CABAC_MODEL_0),
        Some(hfi::HFI_H264_CABAC_MODEL_1),
        Some(hfi::HFI_H264_CABAC_MODEL_2),
    ],
);

const COLOR_TABLE: FlagTable<15> = FlagTable::new(
    "color format",
    [
        Some(hfi::HFI_COLOR_FORMAT_MONOCHROME),
        Some(hfi::HFI_COLOR_FORMAT_NV12),
        Some(hfi::HFI_COLOR_FORMAT_NV21),
        Some(hfi::HFI_COLOR_FORMAT_NV12_4X4TILE),
        Some(hfi::HFI_COLOR_FORMAT_NV21_4X4TILE),
        Some(hfi::HFI_COLOR_FORMAT_YUYV),
        Some(hfi::HFI_COLOR_FORMAT_YVYU),
        Some(hfi::HFI_COLOR_FORMAT_UYVY),
        Some(hfi::HFI_COLOR_FORMAT_VYUY),
        Some(hfi::HFI_COLOR_FORMAT_RGB565),
        Some(hfi::HFI_COLOR_FORMAT_BGR565),
        Some(hfi::HFI_COLOR_FORMAT_RGB888),
        Some(hfi::HFI_COLOR_FORMAT_BGR888),
        Some(hfi::HFI_COLOR_FORMAT_NV12_UBWC),
        Some(hfi::HFI_COLOR_FORMAT_YUV420_TP10_UBWC),
    ],
);

const NAL_TABLE: FlagTable<5> = FlagTable::new(
    "nal format",
    [
        Some(hfi::HFI_NAL_FORMAT_STARTCODES),
        Some(hfi::HFI_NAL_FORMAT_ONE_NAL_PER_BUFFER),
        Some(hfi::HFI_NAL_FORMAT_ONE_BYTE_LENGTH),
        Some(hfi::HFI_NAL_FORMAT_TWO_BYTE_LENGTH),
        Some(hfi::HFI_NAL_FORMAT_FOUR_BYTE_LENGTH),
    ],
);

/// Translates a single-bit HAL value of `domain`.
///
/// Zero translates to zero. Any other value must be a power of two with an
/// entry in the domain's table, otherwise the result is `Unsupported`.
pub(crate) fn to_hfi_type(domain: FlagDomain, bits: u32) -> Result<u32, VidcDriverError> {
    match domain {
        FlagDomain::Profile => PROFILE_TABLE.lookup(bits),
        FlagDomain::EntropyMode => ENTROPY_TABLE.lookup(bits),
        FlagDomain::CabacModel => CABAC_TABLE.lookup(bits),
        FlagDomain::ColorFormat => COLOR_TABLE.lookup(bits),
        FlagDomain::NalFormat => NAL_TABLE.lookup(bits),
    }
}

pub(crate) fn to_hfi_profile(profile: Profile) -> Result<u32, VidcDriverError> {
    to_hfi_type(FlagDomain::Profile, profile.bits())
}

pub(crate) fn to_hfi_entropy(mode: EntropyMode) -> Result<u32, VidcDriverError> {
    to_hfi_type(FlagDomain::EntropyMode, mode.bits())
}

pub(crate) fn to_hfi_cabac(model: CabacModel) -> Result<u32, VidcDriverError> {
    to_hfi_type(FlagDomain::CabacModel, model.bits())
}

pub(crate) fn to_hfi_color(format: ColorFormat) -> Result<u32, VidcDriverError> {
    to_hfi_type(FlagDomain::ColorFormat, format.bits())
}

pub(crate) fn to_hfi_nal(format: NalFormat) -> Result<u32, VidcDriverError> {
    to_hfi_type(FlagDomain::NalFormat, format.bits())
}

#[cfg(test)]
pub(crate) fn from_hfi_entropy(wire: u32) -> Option<EntropyMode> {
    ENTROPY_TABLE.reverse(wire).map(EntropyMode::from_bits_retain)
}

#[cfg(test)]
pub(crate) fn from_hfi_cabac(wire: u32) -> Option<CabacModel> {
    CABAC_TABLE.reverse(wire).map(CabacModel::from_bits_retain)
}

#[cfg(test)]
pub(crate) fn from_hfi_color(wire: u32) -> Option<ColorFormat> {
    COLOR_TABLE.reverse(wire).map(ColorFormat::from_bits_retain)
}

#[cfg(test)]
pub(crate) fn from_hfi_nal(wire: u32) -> Option<NalFormat> {
    NAL_TABLE.reverse(wire).map(NalFormat::from_bits_retain)
}

/// Declares a one-to-one mapping between a closed HAL enum and wire codes,
/// generating the forward and the reverse translation.
macro_rules! wire_map {
    ($to:ident, $from:ident: $hal:ident { $($variant:ident => $wire:expr),+ $(,)? }) => {
        pub(crate) const fn $to(value: $hal) -> u32 {
            match value {
                $($hal::$variant => $wire,)+
            }
        }

        #[cfg(test)]
        pub(crate) fn $from(wire: u32) -> Option<$hal> {
            match wire {
                $(w if w == $wire => Some($hal::$variant),)+
                _ => None,
            }
        }
    };
}

wire_map!(to_hfi_buf_mode, from_hfi_buf_mode: BufferMode {
    Static => hfi::HFI_BUFFER_MODE_STATIC,
    Ring => hfi::HFI_BUFFER_MODE_RING,
    Dynamic => hfi::HFI_BUFFER_MODE_DYNAMIC,
});

wire_map!(to_hfi_layout, from_hfi_layout: BufferLayout {
    TopBottom => hfi::HFI_MVC_BUFFER_LAYOUT_TOP_BOTTOM,
    Seq => hfi::HFI_MVC_BUFFER_LAYOUT_SEQ,
});

wire_map!(to_hfi_flush, from_hfi_flush: FlushType {
    Input => hfi::HFI_FLUSH_INPUT,
    Output => hfi::HFI_FLUSH_OUTPUT,
    Output2 => hfi::HFI_FLUSH_OUTPUT2,
    All => hfi::HFI_FLUSH_ALL,
});

wire_map!(to_hfi_ltr_mode, from_hfi_ltr_mode: LtrMode {
    Disable => hfi::HFI_LTR_MODE_DISABLE,
    Manual => hfi::HFI_LTR_MODE_MANUAL,
    Periodic => hfi::HFI_LTR_MODE_PERIODIC,
});

wire_map!(to_hfi_output_order, from_hfi_output_order: OutputOrder {
    Display => hfi::HFI_OUTPUT_ORDER_DISPLAY,
    Decode => hfi::HFI_OUTPUT_ORDER_DECODE,
});

wire_map!(to_hfi_divx_format, from_hfi_divx_format: DivxFormat {
    Divx4 => hfi::HFI_DIVX_FORMAT_4,
    Divx5 => hfi::HFI_DIVX_FORMAT_5,
    Divx6 => hfi::HFI_DIVX_FORMAT_6,
});

wire_map!(to_hfi_rate_control, from_hfi_rate_control: RateControl {
    Off => hfi::HFI_RATE_CONTROL_OFF,
    VbrVfr => hfi::HFI_RATE_CONTROL_VBR_VFR,
    VbrCfr => hfi::HFI_RATE_CONTROL_VBR_CFR,
    CbrVfr => hfi::HFI_RATE_CONTROL_CBR_VFR,
    CbrCfr => hfi::HFI_RATE_CONTROL_CBR_CFR,
});

wire_map!(to_hfi_deblock, from_hfi_deblock: DeblockMode {
    Disable => hfi::HFI_H264_DB_MODE_DISABLE,
    SkipSliceBoundary => hfi::HFI_H264_DB_MODE_SKIP_SLICE_BOUNDARY,
    AllBoundary => hfi::HFI_H264_DB_MODE_ALL_BOUNDARY,
});

wire_map!(to_hfi_rotation, from_hfi_rotation: Rotation {
    None => hfi::HFI_ROTATE_NONE,
    Rotate90 => hfi::HFI_ROTATE_90,
    Rotate180 => hfi::HFI_ROTATE_180,
    Rotate270 => hfi::HFI_ROTATE_270,
});

wire_map!(to_hfi_flip, from_hfi_flip: Flip {
    None => hfi::HFI_FLIP_NONE,
    Horizontal => hfi::HFI_FLIP_HORIZONTAL,
    Vertical => hfi::HFI_FLIP_VERTICAL,
});

wire_map!(to_hfi_intra_refresh, from_hfi_intra_refresh: IntraRefreshMode {
    None => hfi::HFI_INTRA_REFRESH_NONE,
    Cyclic => hfi::HFI_INTRA_REFRESH_CYCLIC,
    Adaptive => hfi::HFI_INTRA_REFRESH_ADAPTIVE,
    CyclicAdaptive => hfi::HFI_INTRA_REFRESH_CYCLIC_ADAPTIVE,
    Random => hfi::HFI_INTRA_REFRESH_RANDOM,
});

wire_map!(to_hfi_multi_slice, from_hfi_multi_slice: MultiSliceMode {
    Off => hfi::HFI_MULTI_SLICE_OFF,
    ByMbCount => hfi::HFI_MULTI_SLICE_BY_MB_COUNT,
    ByByteCount => hfi::HFI_MULTI_SLICE_BY_BYTE_COUNT,
    Gob => hfi::HFI_MULTI_SLICE_GOB,
});

wire_map!(to_hfi_ssr_type, from_hfi_ssr_type: SsrTrigger {
    ErrFatal => hfi::HFI_TEST_SSR_SW_ERR_FATAL,
    SwDivByZero => hfi::HFI_TEST_SSR_SW_DIV_BY_ZERO,
    HwWdogIrq => hfi::HFI_TEST_SSR_HW_WDOG_IRQ,
});

/// Returns `None` for roles the firmware never sees.
pub(crate) fn to_hfi_buffer(buffer_type: BufferType) -> Option<u32> {
    let wire = match buffer_type {
        BufferType::Input => hfi::HFI_BUFFER_INPUT,
        BufferType::Output => hfi::HFI_BUFFER_OUTPUT,
        BufferType::Output2 => hfi::HFI_BUFFER_OUTPUT2,
        BufferType::ExtradataInput => hfi::HFI_BUFFER_EXTRADATA_INPUT,
        BufferType::ExtradataOutput => hfi::HFI_BUFFER_EXTRADATA_OUTPUT,
        BufferType::ExtradataOutput2 => hfi::HFI_BUFFER_EXTRADATA_OUTPUT2,
        BufferType::InternalScratch => hfi::HFI_BUFFER_INTERNAL_SCRATCH,
        BufferType::InternalScratch1 => hfi::HFI_BUFFER_INTERNAL_SCRATCH_1,
        BufferType::InternalScratch2 => hfi::HFI_BUFFER_INTERNAL_SCRATCH_2,
        BufferType::InternalPersist => hfi::HFI_BUFFER_INTERNAL_PERSIST,
        BufferType::InternalPersist1 => hfi::HFI_BUFFER_INTERNAL_PERSIST_1,
        BufferType::InternalCmdQueue => {
            tracing::warn!("Buffer type {:?} has no wire code", buffer_type);
            return None;
        }
    };
    Some(wire)
}

#[cfg(test)]
pub(crate) fn from_hfi_buffer(wire: u32) -> Option<BufferType> {
    BufferType::ALL
        .iter()
        .copied()
        .find(|&ty| to_hfi_buffer(ty) == Some(wire))
}

/// MVC shares the H.264 code. VP6 and VP7 have none.
pub(crate) fn to_hfi_codec(codec: VideoCodec) -> Option<u32> {
    let wire = match codec {
        VideoCodec::Mvc | VideoCodec::H264 => hfi::HFI_VIDEO_CODEC_H264,
        VideoCodec::H263 => hfi::HFI_VIDEO_CODEC_H263,
        VideoCodec::Mpeg1 => hfi::HFI_VIDEO_CODEC_MPEG1,
        VideoCodec::Mpeg2 => hfi::HFI_VIDEO_CODEC_MPEG2,
        VideoCodec::Mpeg4 => hfi::HFI_VIDEO_CODEC_MPEG4,
        VideoCodec::Divx311 => hfi::HFI_VIDEO_CODEC_DIVX_311,
        VideoCodec::Divx => hfi::HFI_VIDEO_CODEC_DIVX,
        VideoCodec::Vc1 => hfi::HFI_VIDEO_CODEC_VC1,
        VideoCodec::Spark => hfi::HFI_VIDEO_CODEC_SPARK,
        VideoCodec::Vp8 => hfi::HFI_VIDEO_CODEC_VP8,
        VideoCodec::Hevc => hfi::HFI_VIDEO_CODEC_HEVC,
        VideoCodec::HevcHybrid => hfi::HFI_VIDEO_CODEC_HEVC_HYBRID,
        VideoCodec::Vp6 | VideoCodec::Vp7 => {
            tracing::warn!("Invalid codec {:?}", codec);
            return None;
        }
    };
    Some(wire)
}

/// The wire H.264 code reads back as plain H.264, never MVC.
#[cfg(test)]
pub(crate) fn from_hfi_codec(wire: u32) -> Option<VideoCodec> {
    VideoCodec::ALL
        .iter()
        .copied()
        .filter(|&c| c != VideoCodec::Mvc)
        .find(|&c| to_hfi_codec(c) == Some(wire))
}

/// OCMEM and VMEM are both lent as on-chip memory.
pub(crate) const fn to_hfi_resource(id: ResourceId) -> Option<u32> {
    match id {
        ResourceId::Ocmem | ResourceId::Vmem => Some(hfi::HFI_RESOURCE_OCMEM),
        ResourceId::Core => None,
    }
}

/// Property tag that enables the given kind of extradata.
pub(crate) fn to_hfi_extradata_index(index: ExtradataId) -> Option<PropertyTag> {
    let tag = match index {
        ExtradataId::MbQuantization => PropertyTag::VdecMbQuantization,
        ExtradataId::InterlaceVideo => PropertyTag::VdecInterlaceVideoExtradata,
        ExtradataId::Vc1FrameDisp => PropertyTag::VdecVc1FrameDispExtradata,
        ExtradataId::Vc1SeqDisp => PropertyTag::VdecVc1SeqDispExtradata,
        ExtradataId::Timestamp => PropertyTag::VdecTimestampExtradata,
        ExtradataId::S3dFramePacking => PropertyTag::S3dFramePackingExtradata,
        ExtradataId::FrameRate => PropertyTag::VdecFrameRateExtradata,
        ExtradataId::PanscanWindow => PropertyTag::VdecPanscanWindowExtradata,
        ExtradataId::RecoveryPointSei => PropertyTag::VdecRecoveryPointSeiExtradata,
        ExtradataId::MultisliceInfo => PropertyTag::VencMultiSliceInfo,
        ExtradataId::NumConcealedMb => PropertyTag::VdecNumConcealedMb,
        ExtradataId::AspectRatio | ExtradataId::InputCrop | ExtradataId::DigitalZoom => {
            PropertyTag::IndexExtradata
        }
        ExtradataId::Mpeg2SeqDisp => PropertyTag::VdecMpeg2SeqDispExtradata,
        ExtradataId::StreamUserdata => PropertyTag::VdecStreamUserdataExtradata,
        ExtradataId::FrameQp => PropertyTag::VdecFrameQpExtradata,
        ExtradataId::FrameBitsInfo => PropertyTag::VdecFrameBitsInfoExtradata,
        ExtradataId::LtrInfo => PropertyTag::VencLtrInfo,
        ExtradataId::MetadataMbi => PropertyTag::VencMbiDumping,
        ExtradataId::None | ExtradataId::MetadataFiller => {
            tracing::warn!("Extradata index not found: {:?}", index);
            return None;
        }
    };
    Some(tag)
}

/// Identifier the firmware stamps on extradata of the given kind.
pub(crate) fn to_hfi_extradata_id(index: ExtradataId) -> Option<u32> {
    match index {
        ExtradataId::AspectRatio => Some(hfi::VIDC_EXTRADATA_ASPECT_RATIO),
        ExtradataId::InputCrop => Some(hfi::VIDC_EXTRADATA_INPUT_CROP),
        ExtradataId::DigitalZoom => Some(hfi::VIDC_EXTRADATA_DIGITAL_ZOOM),
        _ => to_hfi_extradata_index(index).map(|tag| tag as u32),
    }
}
