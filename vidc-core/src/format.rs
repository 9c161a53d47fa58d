//! Format domains whose members are single bits.
//!
//! Capability queries report these as masks, which is why they are flags rather
//! than plain enums. A value handed to an encoder is expected to have exactly one
//! bit set.

bitflags::bitflags! {
    /// Codec profile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Profile: u32 {
        /// H.264 baseline.
        const H264_BASELINE = 1 << 0;
        /// H.264 main.
        const H264_MAIN = 1 << 1;
        /// H.264 high.
        const H264_HIGH = 1 << 2;
        /// H.264 extended.
        const H264_EXTENDED = 1 << 3;
        /// H.264 high 10.
        const H264_HIGH10 = 1 << 4;
        /// H.264 high 4:2:2.
        const H264_HIGH422 = 1 << 5;
        /// H.264 high 4:4:4.
        const H264_HIGH444 = 1 << 6;
        /// H.264 constrained baseline.
        const H264_CONSTRAINED_BASE = 1 << 7;
        /// H.264 constrained high.
        const H264_CONSTRAINED_HIGH = 1 << 8;
        /// VP8 version 1.
        const VPX_VERSION_1 = 1 << 9;
        /// MVC stereo high.
        const MVC_STEREO_HIGH = 1 << 10;
    }
}

bitflags::bitflags! {
    /// H.264 entropy coder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntropyMode: u32 {
        /// CAVLC.
        const CAVLC = 1 << 0;
        /// CABAC.
        const CABAC = 1 << 1;
    }
}

bitflags::bitflags! {
    /// CABAC context initialisation model.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CabacModel: u32 {
        /// Model 0.
        const MODEL_0 = 1 << 0;
        /// Model 1.
        const MODEL_1 = 1 << 1;
        /// Model 2.
        const MODEL_2 = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Uncompressed pixel format.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ColorFormat: u32 {
        /// Luma only.
        const MONOCHROME = 1 << 0;
        /// NV12.
        const NV12 = 1 << 1;
        /// NV21.
        const NV21 = 1 << 2;
        /// NV12 in 4x4 tiles.
        const NV12_4X4TILE = 1 << 3;
        /// NV21 in 4x4 tiles.
        const NV21_4X4TILE = 1 << 4;
        /// Packed YUYV.
        const YUYV = 1 << 5;
        /// Packed YVYU.
        const YVYU = 1 << 6;
        /// Packed UYVY.
        const UYVY = 1 << 7;
        /// Packed VYUY.
        const VYUY = 1 << 8;
        /// RGB 5:6:5.
        const RGB565 = 1 << 9;
        /// BGR 5:6:5.
        const BGR565 = 1 << 10;
        /// RGB 8:8:8.
        const RGB888 = 1 << 11;
        /// BGR 8:8:8.
        const BGR888 = 1 << 12;
        /// NV12 with bandwidth compression.
        const NV12_UBWC = 1 << 13;
        /// 10-bit tightly packed NV12 with bandwidth compression.
        const NV12_TP10_UBWC = 1 << 14;
        /// RGBA 8:8:8:8. Not supported by the coprocessor.
        const RGBA8888 = 1 << 15;
    }
}

bitflags::bitflags! {
    /// How NAL units are delimited in a bitstream buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NalFormat: u32 {
        /// Annex B start codes.
        const STARTCODES = 1 << 0;
        /// One NAL unit per buffer.
        const ONE_NAL_PER_BUFFER = 1 << 1;
        /// One-byte length prefix.
        const ONE_BYTE_LENGTH = 1 << 2;
        /// Two-byte length prefix.
        const TWO_BYTE_LENGTH = 1 << 3;
        /// Four-byte length prefix.
        const FOUR_BYTE_LENGTH = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bits() {
        assert!(Profile::all().iter().all(|p| p.bits().is_power_of_two()));
        assert!(ColorFormat::all()
            .iter()
            .all(|p| p.bits().is_power_of_two()));
        assert!(NalFormat::all().iter().all(|p| p.bits().is_power_of_two()));
    }
}
