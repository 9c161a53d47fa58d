use vidc_core::property::{
    Bitrate, H264DeblockControl, H264EntropyControl, InitialQuantization, IntraPeriod,
    IntraRefresh, LtrModeConfig, LtrUse, MultiSliceControl, Quantization, QuantizationRange,
    SearchRange, VuiTimingInfo,
};

use super::{payload as wire, single};
use crate::{
    error::VidcDriverError,
    firmware::{
        hfi::{self, PropertyTag},
        packet::PacketBuilder,
        translate::{
            to_hfi_cabac, to_hfi_deblock, to_hfi_entropy, to_hfi_intra_refresh, to_hfi_ltr_mode,
            to_hfi_multi_slice,
        },
    },
};

const QP_MAX: u32 = 0xff;

pub(super) fn bitrate(
    b: &mut PacketBuilder,
    tag: PropertyTag,
    p: Bitrate,
) -> Result<(), VidcDriverError> {
    single(
        b,
        tag,
        wire::Bitrate {
            bit_rate: p.bit_rate,
            layer_id: p.layer_id,
        },
    )
}

/// The CABAC model is only sent along with CABAC entropy coding.
pub(super) fn entropy_control(
    b: &mut PacketBuilder,
    p: H264EntropyControl,
) -> Result<(), VidcDriverError> {
    let entropy_mode = to_hfi_entropy(p.entropy_mode)?;
    let cabac_model = if entropy_mode == hfi::HFI_H264_ENTROPY_CABAC {
        to_hfi_cabac(p.cabac_model)?
    } else {
        0
    };
    single(
        b,
        PropertyTag::VencH264EntropyControl,
        wire::H264EntropyControl {
            entropy_mode,
            cabac_model,
        },
    )
}

pub(super) fn deblock_control(
    b: &mut PacketBuilder,
    p: H264DeblockControl,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencH264DeblockControl,
        wire::H264DeblockControl {
            mode: to_hfi_deblock(p.mode),
            slice_alpha_offset: p.slice_alpha_offset,
            slice_beta_offset: p.slice_beta_offset,
        },
    )
}

pub(super) fn session_qp(b: &mut PacketBuilder, p: Quantization) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencSessionQp,
        wire::Quantization {
            qp_i: p.qpi,
            qp_p: p.qpp,
            qp_b: p.qpb,
            layer_id: p.layer_id,
        },
    )
}

/// Replicates an 8-bit QP into the I, P and B byte lanes.
fn pack_qp(qp: u32) -> Result<u32, VidcDriverError> {
    if qp > QP_MAX {
        return Err(VidcDriverError::OutOfRange {
            what: "qp",
            value: qp,
            max: QP_MAX,
        });
    }
    Ok(qp | qp << 8 | qp << 16)
}

pub(super) fn session_qp_range(
    b: &mut PacketBuilder,
    p: QuantizationRange,
) -> Result<(), VidcDriverError> {
    let min_qp = pack_qp(p.min_qp)?;
    let max_qp = pack_qp(p.max_qp)?;
    single(
        b,
        PropertyTag::VencSessionQpRange,
        wire::QuantizationRange {
            min_qp,
            max_qp,
            layer_id: p.layer_id,
        },
    )
}

pub(super) fn search_range(b: &mut PacketBuilder, p: SearchRange) -> Result<(), VidcDriverError> {
    let frames = [p.i_frame, p.p_frame, p.b_frame];
    single(
        b,
        PropertyTag::VencVc1PerfCfg,
        wire::Vc1PerfCfg {
            search_range_x_subsampled: frames.map(|r| r.x_subsampled),
            search_range_y_subsampled: frames.map(|r| r.y_subsampled),
        },
    )
}

pub(super) fn intra_period(b: &mut PacketBuilder, p: IntraPeriod) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencIntraPeriod,
        wire::IntraPeriod {
            pframes: p.pframes,
            bframes: p.bframes,
        },
    )
}

pub(super) fn intra_refresh(b: &mut PacketBuilder, p: IntraRefresh) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencIntraRefresh,
        wire::IntraRefresh {
            mode: to_hfi_intra_refresh(p.mode),
            air_mbs: p.air_mbs,
            air_ref: p.air_ref,
            cir_mbs: p.cir_mbs,
        },
    )
}

pub(super) fn multi_slice_control(
    b: &mut PacketBuilder,
    p: MultiSliceControl,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencMultiSliceControl,
        wire::MultiSliceControl {
            multi_slice: to_hfi_multi_slice(p.multi_slice),
            slice_size: p.slice_size,
        },
    )
}

pub(super) fn vui_timing_info(
    b: &mut PacketBuilder,
    p: VuiTimingInfo,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencH264VuiTimingInfo,
        wire::VuiTimingInfo {
            enable: u32::from(p.enable),
            fixed_frame_rate: u32::from(p.fixed_frame_rate),
            time_scale: p.time_scale,
        },
    )
}

pub(super) fn ltr_mode(b: &mut PacketBuilder, p: LtrModeConfig) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencLtrMode,
        wire::LtrMode {
            ltr_mode: to_hfi_ltr_mode(p.mode),
            ltr_count: p.count,
            trust_mode: p.trust_mode,
        },
    )
}

pub(super) fn use_ltr_frame(b: &mut PacketBuilder, p: LtrUse) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencUseLtrFrame,
        wire::LtrUse {
            ref_ltr: p.ref_ltr,
            use_constraint: u32::from(p.use_constraint),
            frames: p.frames,
        },
    )
}

pub(super) fn initial_qp(
    b: &mut PacketBuilder,
    p: InitialQuantization,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VencInitialQp,
        wire::InitialQuantization {
            qp_i: p.qpi,
            qp_p: p.qpp,
            qp_b: p.qpb,
            init_qp_enable: p.init_qp_enable,
        },
    )
}
