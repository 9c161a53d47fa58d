use derive_new::new;

use crate::{
    buffer::{BufferLayout, BufferMode, BufferType},
    format::{CabacModel, ColorFormat, EntropyMode, Profile},
    mode::{DeblockMode, ExtradataId, Flip, IntraRefreshMode, LtrMode, MultiSliceMode, Rotation},
};

/// Frame rate of the buffers of one role, in Q16 frames per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRate {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Frames per second in Q16.
    pub frame_rate: u32,
}

/// Pixel format of the buffers of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncompressedFormatSelect {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Exactly one bit must be set.
    pub format: ColorFormat,
}

/// Picture dimensions of the buffers of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSize {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Number of buffers the client will actually allocate for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferCountActual {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Buffer count.
    pub count_actual: u32,
}

/// Size of the buffers the client will actually allocate for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferSizeActual {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Size in bytes.
    pub size: u32,
}

/// Number of output buffers the client holds for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferDisplayHoldCountActual {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Buffers held.
    pub hold_count: u32,
}

/// Enables a decoder output stream and sets its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStream {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Whether the feature is on.
    pub enable: bool,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Display picture buffer count override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPictureBufferCount {
    /// Whether the feature is on.
    pub enable: bool,
    /// Picture buffer count.
    pub count: u32,
}

/// Bitrate of one temporal layer in bits per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitrate {
    /// Bits per second.
    pub bit_rate: u32,
    /// Temporal layer the value applies to.
    pub layer_id: u32,
}

/// Codec profile and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileLevel {
    /// Exactly one bit must be set.
    pub profile: Profile,
    /// Codec-specific level value. Zero means unspecified.
    pub level: u32,
}

/// H.264 entropy coder selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct H264EntropyControl {
    /// Exactly one bit must be set.
    pub entropy_mode: EntropyMode,
    /// Only meaningful with [`EntropyMode::CABAC`].
    pub cabac_model: CabacModel,
}

/// H.264 deblocking filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct H264DeblockControl {
    /// Mode.
    pub mode: DeblockMode,
    /// Alpha offset.
    pub slice_alpha_offset: i32,
    /// Beta offset.
    pub slice_beta_offset: i32,
}

/// Fixed QP per frame type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantization {
    /// I-frame QP.
    pub qpi: u32,
    /// P-frame QP.
    pub qpp: u32,
    /// B-frame QP.
    pub qpb: u32,
    /// Temporal layer the value applies to.
    pub layer_id: u32,
}

/// QP bounds shared by all frame types. Both bounds must fit in 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantizationRange {
    /// Lower bound.
    pub min_qp: u32,
    /// Upper bound.
    pub max_qp: u32,
    /// Temporal layer the value applies to.
    pub layer_id: u32,
}

/// Motion search window of one frame type, in subsampled units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MvSearchRange {
    /// Horizontal range.
    pub x_subsampled: u32,
    /// Vertical range.
    pub y_subsampled: u32,
}

/// Motion search windows for I, P and B frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRange {
    /// I frames.
    pub i_frame: MvSearchRange,
    /// P frames.
    pub p_frame: MvSearchRange,
    /// B frames.
    pub b_frame: MvSearchRange,
}

/// Number of P and B frames between I frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntraPeriod {
    /// P frames per period.
    pub pframes: u32,
    /// B frames per period.
    pub bframes: u32,
}

/// Post-processor geometry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VpeOperations {
    /// Rotation.
    pub rotate: Rotation,
    /// Mirroring.
    pub flip: Flip,
}

/// Intra refresh configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntraRefresh {
    /// Mode.
    pub mode: IntraRefreshMode,
    /// Adaptive intra refresh macroblocks per frame.
    pub air_mbs: u32,
    /// Adaptive intra refresh reference count.
    pub air_ref: u32,
    /// Cyclic intra refresh macroblocks per frame.
    pub cir_mbs: u32,
}

/// Slice partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSliceControl {
    /// Partitioning scheme.
    pub multi_slice: MultiSliceMode,
    /// Macroblocks or bytes per slice, depending on the mode.
    pub slice_size: u32,
}

/// Enables or disables one kind of per-frame metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtradataEnable {
    /// Metadata kind.
    pub index: ExtradataId,
    /// Whether the feature is on.
    pub enable: bool,
}

/// H.264 VUI timing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VuiTimingInfo {
    /// Whether the feature is on.
    pub enable: bool,
    /// Whether the frame rate is fixed.
    pub fixed_frame_rate: bool,
    /// Ticks per second.
    pub time_scale: u32,
}

/// Allocation mode of the buffers of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferAllocMode {
    /// Role of the buffers the value applies to.
    pub buffer_type: BufferType,
    /// Mode.
    pub mode: BufferMode,
}

/// Arrangement of MVC views in output buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MvcBufferLayout {
    /// Layout.
    pub layout_type: BufferLayout,
    /// Whether the right view comes first.
    pub bright_view_first: bool,
    /// Gap in lines between the two views.
    pub ngap: u32,
}

/// Long-term reference configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LtrModeConfig {
    /// Mode.
    pub mode: LtrMode,
    /// Picture buffer count.
    pub count: u32,
    /// Trust mode.
    pub trust_mode: u32,
}

/// Instructs the encoder to reference a long-term frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LtrUse {
    /// Mask of usable long-term frames.
    pub ref_ltr: u32,
    /// Whether only the listed frames may be referenced.
    pub use_constraint: bool,
    /// Number of frames the constraint applies to.
    pub frames: u32,
}

/// Marks the next frame as a long-term reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LtrMark {
    /// Long-term slot to store the frame in.
    pub mark_frame: u32,
}

/// Initial QP per frame type. `init_qp_enable` is a mask of the frame types
/// whose value applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialQuantization {
    /// Mask of frame types.
    pub init_qp_enable: u32,
    /// I-frame QP.
    pub qpi: u32,
    /// P-frame QP.
    pub qpp: u32,
    /// B-frame QP.
    pub qpb: u32,
}

/// Color space conversion coefficients, copied to the firmware as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSpaceConversion {
    /// Row-major 3x3 matrix.
    pub csc_matrix: [u32; 9],
    /// Per-component bias.
    pub csc_bias: [u32; 3],
    /// Lower and upper clamp per component.
    pub csc_limit: [u32; 6],
}
