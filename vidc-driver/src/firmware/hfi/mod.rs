//! Wire-level vocabulary of the host firmware interface (HFI).

mod property_tag;
mod tag;

pub(crate) use property_tag::PropertyTag;
pub(crate) use tag::PacketType;

pub(crate) const HFI_DEBUG_MODE_QUEUE: u32 = 0x1;
pub(crate) const HFI_DEBUG_MODE_QDSS: u32 = 0x2;

pub(crate) const HFI_RESOURCE_OCMEM: u32 = 0x1;

pub(crate) const HFI_TEST_SSR_SW_ERR_FATAL: u32 = 0x1;
pub(crate) const HFI_TEST_SSR_SW_DIV_BY_ZERO: u32 = 0x2;
pub(crate) const HFI_TEST_SSR_HW_WDOG_IRQ: u32 = 0x3;

pub(crate) const HFI_VIDEO_CODEC_H264: u32 = 0x0000_0002;
pub(crate) const HFI_VIDEO_CODEC_H263: u32 = 0x0000_0004;
pub(crate) const HFI_VIDEO_CODEC_MPEG1: u32 = 0x0000_0008;
pub(crate) const HFI_VIDEO_CODEC_MPEG2: u32 = 0x0000_0010;
pub(crate) const HFI_VIDEO_CODEC_MPEG4: u32 = 0x0000_0020;
pub(crate) const HFI_VIDEO_CODEC_DIVX_311: u32 = 0x0000_0040;
pub(crate) const HFI_VIDEO_CODEC_DIVX: u32 = 0x0000_0080;
pub(crate) const HFI_VIDEO_CODEC_VC1: u32 = 0x0000_0100;
pub(crate) const HFI_VIDEO_CODEC_SPARK: u32 = 0x0000_0200;
pub(crate) const HFI_VIDEO_CODEC_VP8: u32 = 0x0000_1000;
pub(crate) const HFI_VIDEO_CODEC_HEVC: u32 = 0x0000_2000;
pub(crate) const HFI_VIDEO_CODEC_HEVC_HYBRID: u32 = 0x8000_0000;

pub(crate) const HFI_BUFFER_INPUT: u32 = 0x1;
pub(crate) const HFI_BUFFER_OUTPUT: u32 = 0x2;
pub(crate) const HFI_BUFFER_OUTPUT2: u32 = 0x3;
pub(crate) const HFI_BUFFER_INTERNAL_PERSIST: u32 = 0x4;
pub(crate) const HFI_BUFFER_INTERNAL_PERSIST_1: u32 = 0x5;
pub(crate) const HFI_BUFFER_INTERNAL_SCRATCH: u32 = 0x0100_0001;
pub(crate) const HFI_BUFFER_EXTRADATA_INPUT: u32 = 0x0100_0002;
pub(crate) const HFI_BUFFER_EXTRADATA_OUTPUT: u32 = 0x0100_0003;
pub(crate) const HFI_BUFFER_EXTRADATA_OUTPUT2: u32 = 0x0100_0004;
pub(crate) const HFI_BUFFER_INTERNAL_SCRATCH_1: u32 = 0x0100_0005;
pub(crate) const HFI_BUFFER_INTERNAL_SCRATCH_2: u32 = 0x0100_0006;

pub(crate) const HFI_BUFFER_MODE_STATIC: u32 = 0x0100_0001;
pub(crate) const HFI_BUFFER_MODE_RING: u32 = 0x0100_0002;
pub(crate) const HFI_BUFFER_MODE_DYNAMIC: u32 = 0x0100_0003;

pub(crate) const HFI_FLUSH_INPUT: u32 = 0x0100_0001;
pub(crate) const HFI_FLUSH_OUTPUT: u32 = 0x0100_0002;
pub(crate) const HFI_FLUSH_OUTPUT2: u32 = 0x0100_0003;
pub(crate) const HFI_FLUSH_ALL: u32 = 0x0100_0004;

pub(crate) const HFI_H264_PROFILE_BASELINE: u32 = 0x0000_0001;
pub(crate) const HFI_H264_PROFILE_MAIN: u32 = 0x0000_0002;
pub(crate) const HFI_H264_PROFILE_HIGH: u32 = 0x0000_0004;
pub(crate) const HFI_H264_PROFILE_STEREO_HIGH: u32 = 0x0000_0008;
pub(crate) const HFI_H264_PROFILE_CONSTRAINED_BASE: u32 = 0x0000_0020;
pub(crate) const HFI_H264_PROFILE_CONSTRAINED_HIGH: u32 = 0x0000_0040;
pub(crate) const HFI_VPX_PROFILE_VERSION_1: u32 = 0x0000_0008;

pub(crate) const HFI_H264_ENTROPY_CAVLC: u32 = 0x1;
pub(crate) const HFI_H264_ENTROPY_CABAC: u32 = 0x2;

pub(crate) const HFI_H264_CABAC_MODEL_0: u32 = 0x1;
pub(crate) const HFI_H264_CABAC_MODEL_1: u32 = 0x2;
pub(crate) const HFI_H264_CABAC_MODEL_2: u32 = 0x4;

pub(crate) const HFI_COLOR_FORMAT_MONOCHROME: u32 = 0x01;
pub(crate) const HFI_COLOR_FORMAT_NV12: u32 = 0x02;
pub(crate) const HFI_COLOR_FORMAT_NV21: u32 = 0x03;
pub(crate) const HFI_COLOR_FORMAT_NV12_4X4TILE: u32 = 0x04;
pub(crate) const HFI_COLOR_FORMAT_NV21_4X4TILE: u32 = 0x05;
pub(crate) const HFI_COLOR_FORMAT_YUYV: u32 = 0x06;
pub(crate) const HFI_COLOR_FORMAT_YVYU: u32 = 0x07;
pub(crate) const HFI_COLOR_FORMAT_UYVY: u32 = 0x08;
pub(crate) const HFI_COLOR_FORMAT_VYUY: u32 = 0x09;
pub(crate) const HFI_COLOR_FORMAT_RGB565: u32 = 0x0A;
pub(crate) const HFI_COLOR_FORMAT_BGR565: u32 = 0x0B;
pub(crate) const HFI_COLOR_FORMAT_RGB888: u32 = 0x0C;
pub(crate) const HFI_COLOR_FORMAT_BGR888: u32 = 0x0D;
pub(crate) const HFI_COLOR_FORMAT_NV12_UBWC: u32 = 0x8002;
pub(crate) const HFI_COLOR_FORMAT_YUV420_TP10_UBWC: u32 = 0x8004;

pub(crate) const HFI_NAL_FORMAT_STARTCODES: u32 = 0x01;
pub(crate) const HFI_NAL_FORMAT_ONE_NAL_PER_BUFFER: u32 = 0x02;
pub(crate) const HFI_NAL_FORMAT_ONE_BYTE_LENGTH: u32 = 0x04;
pub(crate) const HFI_NAL_FORMAT_TWO_BYTE_LENGTH: u32 = 0x08;
pub(crate) const HFI_NAL_FORMAT_FOUR_BYTE_LENGTH: u32 = 0x10;

pub(crate) const HFI_OUTPUT_ORDER_DISPLAY: u32 = 0x0100_0001;
pub(crate) const HFI_OUTPUT_ORDER_DECODE: u32 = 0x0100_0002;

pub(crate) const HFI_DIVX_FORMAT_4: u32 = 0x1;
pub(crate) const HFI_DIVX_FORMAT_5: u32 = 0x2;
pub(crate) const HFI_DIVX_FORMAT_6: u32 = 0x3;

pub(crate) const HFI_RATE_CONTROL_OFF: u32 = 0x0100_0001;
pub(crate) const HFI_RATE_CONTROL_VBR_VFR: u32 = 0x0100_0002;
pub(crate) const HFI_RATE_CONTROL_VBR_CFR: u32 = 0x0100_0003;
pub(crate) const HFI_RATE_CONTROL_CBR_VFR: u32 = 0x0100_0004;
pub(crate) const HFI_RATE_CONTROL_CBR_CFR: u32 = 0x0100_0005;

pub(crate) const HFI_H264_DB_MODE_DISABLE: u32 = 0x1;
pub(crate) const HFI_H264_DB_MODE_SKIP_SLICE_BOUNDARY: u32 = 0x2;
pub(crate) const HFI_H264_DB_MODE_ALL_BOUNDARY: u32 = 0x3;

pub(crate) const HFI_ROTATE_NONE: u32 = 0x1;
pub(crate) const HFI_ROTATE_90: u32 = 0x2;
pub(crate) const HFI_ROTATE_180: u32 = 0x3;
pub(crate) const HFI_ROTATE_270: u32 = 0x4;

pub(crate) const HFI_FLIP_NONE: u32 = 0x1;
pub(crate) const HFI_FLIP_HORIZONTAL: u32 = 0x2;
pub(crate) const HFI_FLIP_VERTICAL: u32 = 0x3;

pub(crate) const HFI_INTRA_REFRESH_NONE: u32 = 0x1;
pub(crate) const HFI_INTRA_REFRESH_CYCLIC: u32 = 0x2;
pub(crate) const HFI_INTRA_REFRESH_ADAPTIVE: u32 = 0x3;
pub(crate) const HFI_INTRA_REFRESH_CYCLIC_ADAPTIVE: u32 = 0x4;
pub(crate) const HFI_INTRA_REFRESH_RANDOM: u32 = 0x5;

pub(crate) const HFI_MULTI_SLICE_OFF: u32 = 0x1;
pub(crate) const HFI_MULTI_SLICE_BY_MB_COUNT: u32 = 0x2;
pub(crate) const HFI_MULTI_SLICE_BY_BYTE_COUNT: u32 = 0x3;
pub(crate) const HFI_MULTI_SLICE_GOB: u32 = 0x4;

pub(crate) const HFI_LTR_MODE_DISABLE: u32 = 0x0;
pub(crate) const HFI_LTR_MODE_MANUAL: u32 = 0x1;
pub(crate) const HFI_LTR_MODE_PERIODIC: u32 = 0x2;

pub(crate) const HFI_MVC_BUFFER_LAYOUT_TOP_BOTTOM: u32 = 0x0;
pub(crate) const HFI_MVC_BUFFER_LAYOUT_SEQ: u32 = 0x1;

pub(crate) const VIDC_EXTRADATA_ASPECT_RATIO: u32 = 0x7F10_0003;
pub(crate) const VIDC_EXTRADATA_INPUT_CROP: u32 = 0x0700_000E;
pub(crate) const VIDC_EXTRADATA_DIGITAL_ZOOM: u32 = 0x0700_0010;
