//! Wire layouts of property payloads. Every field is a little-endian `u32`
//! unless noted.

use zerocopy::{Immutable, IntoBytes};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct FrameRate {
    pub(super) buffer_type: u32,
    pub(super) frame_rate: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct UncompressedFormatSelect {
    pub(super) buffer_type: u32,
    pub(super) format: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct FrameSize {
    pub(super) buffer_type: u32,
    pub(super) width: u32,
    pub(super) height: u32,
}

/// Shared by the actual count, actual size and display hold count properties.
#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct BufferValue {
    pub(super) buffer_type: u32,
    pub(super) value: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct MultiStream {
    pub(super) buffer_type: u32,
    pub(super) enable: u32,
    pub(super) width: u32,
    pub(super) height: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct DisplayPictureBufferCount {
    pub(super) enable: u32,
    pub(super) count: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct Bitrate {
    pub(super) bit_rate: u32,
    pub(super) layer_id: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct ProfileLevel {
    pub(super) profile: u32,
    pub(super) level: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct H264EntropyControl {
    pub(super) entropy_mode: u32,
    pub(super) cabac_model: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct H264DeblockControl {
    pub(super) mode: u32,
    pub(super) slice_alpha_offset: i32,
    pub(super) slice_beta_offset: i32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct Quantization {
    pub(super) qp_i: u32,
    pub(super) qp_p: u32,
    pub(super) qp_b: u32,
    pub(super) layer_id: u32,
}

/// `min_qp` and `max_qp` hold the same 8-bit QP in the I, P and B byte lanes.
#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct QuantizationRange {
    pub(super) min_qp: u32,
    pub(super) max_qp: u32,
    pub(super) layer_id: u32,
}

/// Indexed I, P, B.
#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct Vc1PerfCfg {
    pub(super) search_range_x_subsampled: [u32; 3],
    pub(super) search_range_y_subsampled: [u32; 3],
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct IntraPeriod {
    pub(super) pframes: u32,
    pub(super) bframes: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct Operations {
    pub(super) rotation: u32,
    pub(super) flip: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct IntraRefresh {
    pub(super) mode: u32,
    pub(super) air_mbs: u32,
    pub(super) air_ref: u32,
    pub(super) cir_mbs: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct MultiSliceControl {
    pub(super) multi_slice: u32,
    pub(super) slice_size: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct IndexExtradataConfig {
    pub(super) enable: u32,
    pub(super) index_extra_data_id: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct VuiTimingInfo {
    pub(super) enable: u32,
    pub(super) fixed_frame_rate: u32,
    pub(super) time_scale: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct BufferAllocMode {
    pub(super) buffer_type: u32,
    pub(super) mode: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct MvcBufferLayout {
    pub(super) layout_type: u32,
    pub(super) bright_view_first: u32,
    pub(super) ngap: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct LtrMode {
    pub(super) ltr_mode: u32,
    pub(super) ltr_count: u32,
    pub(super) trust_mode: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct LtrUse {
    pub(super) ref_ltr: u32,
    pub(super) use_constraint: u32,
    pub(super) frames: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct InitialQuantization {
    pub(super) qp_i: u32,
    pub(super) qp_p: u32,
    pub(super) qp_b: u32,
    pub(super) init_qp_enable: u32,
}

#[repr(C)]
#[derive(IntoBytes, Immutable)]
pub(super) struct ColorSpaceConversion {
    pub(super) csc_matrix: [u32; 9],
    pub(super) csc_bias: [u32; 3],
    pub(super) csc_limit: [u32; 6],
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(12, size_of::<FrameSize>());
        assert_eq!(16, size_of::<MultiStream>());
        assert_eq!(12, size_of::<H264DeblockControl>());
        assert_eq!(4, offset_of!(H264DeblockControl, slice_alpha_offset));
        assert_eq!(16, size_of::<Quantization>());
        assert_eq!(12, size_of::<QuantizationRange>());
        assert_eq!(24, size_of::<Vc1PerfCfg>());
        assert_eq!(12, offset_of!(Vc1PerfCfg, search_range_y_subsampled));
        assert_eq!(16, size_of::<IntraRefresh>());
        assert_eq!(12, offset_of!(InitialQuantization, init_qp_enable));
        assert_eq!(72, size_of::<ColorSpaceConversion>());
        assert_eq!(36, offset_of!(ColorSpaceConversion, csc_bias));
        assert_eq!(48, offset_of!(ColorSpaceConversion, csc_limit));
    }
}
