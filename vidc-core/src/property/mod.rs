mod payload;

pub use payload::*;

use crate::{format::NalFormat, mode::{DivxFormat, OutputOrder, RateControl}};

hal_enum! {
    /// Identifier of a session or system property.
    pub enum PropertyId {
        /// Frame rate of a buffer role.
        FrameRate = 0x01,
        /// Pixel format of a buffer role.
        UncompressedFormatSelect = 0x02,
        /// Plane constraints of a raw buffer.
        UncompressedPlaneActualConstraintsInfo = 0x03,
        /// Plane layout of a raw buffer.
        UncompressedPlaneActualInfo = 0x04,
        /// Extradata header configuration.
        ExtraDataHeaderConfig = 0x05,
        /// Picture dimensions.
        FrameSize = 0x06,
        /// Realtime priority.
        Realtime = 0x07,
        /// Buffer count.
        BufferCountActual = 0x08,
        /// Buffer size.
        BufferSizeActual = 0x09,
        /// Display hold count.
        BufferDisplayHoldCountActual = 0x0a,
        /// NAL delimiting.
        NalStreamFormatSelect = 0x0b,
        /// Decoder output order.
        VdecOutputOrder = 0x0c,
        /// Picture types to decode.
        VdecPictureTypeDecode = 0x0d,
        /// Keep aspect ratio on the secondary output.
        Output2KeepAspectRatio = 0x0e,
        /// Post-loop deblocking.
        PostLoopDeblocker = 0x0f,
        /// Secondary decoder output stream.
        VdecMultiStream = 0x10,
        /// Display picture buffer count.
        DisplayPictureBufferCount = 0x11,
        /// DivX format.
        DivxFormat = 0x12,
        /// Macroblock error map reporting.
        MbErrorMapReporting = 0x13,
        /// Continue data transfer.
        ContinueDataTransfer = 0x14,
        /// Decode sync frames only.
        SyncFrameDecode = 0x15,
        /// Emit a sequence header with every sync frame.
        SyncFrameSequenceHeader = 0x16,
        /// Force the next frame to be an I frame.
        RequestIFrame = 0x17,
        /// MPEG-4 short header.
        Mpeg4ShortHeader = 0x18,
        /// MPEG-4 AC prediction.
        Mpeg4AcPrediction = 0x19,
        /// Target bitrate.
        TargetBitrate = 0x1a,
        /// Maximum bitrate.
        MaxBitrate = 0x1b,
        /// Current profile and level.
        ProfileLevelCurrent = 0x1c,
        /// H.264 entropy coder.
        H264EntropyControl = 0x1d,
        /// Rate control.
        RateControl = 0x1e,
        /// MPEG-4 time increment resolution.
        Mpeg4TimeResolution = 0x1f,
        /// MPEG-4 header extension.
        Mpeg4HeaderExtension = 0x20,
        /// H.264 deblocking.
        H264DeblockControl = 0x21,
        /// Fixed QP.
        SessionQp = 0x22,
        /// QP bounds.
        SessionQpRange = 0x23,
        /// Motion search range.
        SearchRange = 0x24,
        /// Maximum consecutive B frames.
        MaxNumBFrames = 0x25,
        /// Intra period.
        IntraPeriod = 0x26,
        /// IDR period.
        IdrPeriod = 0x27,
        /// Concealment color.
        ConcealColor = 0x28,
        /// Post-processor geometry.
        VpeOperations = 0x29,
        /// Intra refresh.
        IntraRefresh = 0x2a,
        /// Slice partitioning.
        MultiSliceControl = 0x2b,
        /// Per-frame metadata enable.
        IndexExtradata = 0x2c,
        /// Slice delivery.
        SliceDeliveryMode = 0x2d,
        /// VUI timing information.
        VuiTimingInfo = 0x2e,
        /// Deinterlacing.
        VpeDeinterlace = 0x2f,
        /// Access unit delimiters.
        GenerateAudNal = 0x30,
        /// Buffer allocation mode.
        BufferAllocMode = 0x31,
        /// Frame assembly.
        FrameAssembly = 0x32,
        /// VUI bitstream restriction.
        VuiBitstreamRestriction = 0x33,
        /// Text quality preservation.
        PreserveTextQuality = 0x34,
        /// Smooth streaming threshold.
        ScsThreshold = 0x35,
        /// MVC buffer layout.
        MvcBufferLayout = 0x36,
        /// Long-term reference mode.
        LtrMode = 0x37,
        /// Use long-term references.
        UseLtrFrame = 0x38,
        /// Mark a long-term reference.
        MarkLtrFrame = 0x39,
        /// Hierarchical-P enhancement layers.
        HierPMaxEnhLayers = 0x3a,
        /// Hierarchical-P frames.
        HierPNumFrames = 0x3b,
        /// Ignore timestamps in rate control.
        DisableRcTimestamp = 0x3c,
        /// Initial QP.
        InitialQp = 0x3d,
        /// Color space conversion.
        ColorSpaceConversion = 0x3e,
        /// VPx error resilience.
        VpxErrorResilience = 0x3f,
        /// H.264 SVC NAL extension.
        H264NalSvcExt = 0x40,
        /// Performance mode.
        PerfMode = 0x41,
        /// Hierarchical-B enhancement layers.
        HierBMaxEnhLayers = 0x42,
        /// Non-secure secondary output.
        NonSecureOutput2 = 0x43,
        /// Hybrid hierarchical-P.
        HierPHybridMode = 0x44,
        /// Buffer requirements of a session. Query only.
        GetBufferRequirements = 0x45,
        /// Buffer requirements, as a configuration.
        BufferRequirements = 0x46,
        /// Scheduling priority.
        Priority = 0x47,
        /// Batching.
        BatchInfo = 0x48,
        /// Metadata pass-through.
        MetadataPassThrough = 0x49,
        /// System idle indicator.
        SysIdleIndicator = 0x4a,
        /// Supported pixel formats.
        UncompressedFormatSupported = 0x4b,
        /// Supported interlace formats.
        InterlaceFormatSupported = 0x4c,
        /// Chroma siting.
        ChromaSite = 0x4d,
        /// Supported properties.
        PropertiesSupported = 0x4e,
        /// Supported profiles and levels.
        ProfileLevelSupported = 0x4f,
        /// Capabilities.
        CapabilitySupported = 0x50,
        /// Supported NAL delimiting styles.
        NalStreamFormatSupported = 0x51,
        /// Multiview format.
        MultiViewFormat = 0x52,
        /// Maximum sequence header size.
        MaxSequenceHeaderSize = 0x53,
        /// Supported codecs.
        CodecSupported = 0x54,
        /// Multiview selection.
        VdecMultiViewSelect = 0x55,
        /// Macroblock quantisation reporting.
        VdecMbQuantization = 0x56,
        /// Concealed macroblock reporting.
        VdecNumConcealedMb = 0x57,
        /// H.264 entropy switching.
        VdecH264EntropySwitching = 0x58,
        /// MPEG-4 data partitioning.
        Mpeg4DataPartitioning = 0x59,
        /// Buffer count, as a configuration.
        ConfigBufferCountActual = 0x5a,
        /// Secondary decoder output, as a configuration.
        ConfigVdecMultiStream = 0x5b,
        /// Slice information.
        MultiSliceInfo = 0x5c,
        /// Timestamp scale.
        TimestampScale = 0x5d,
        /// Low latency.
        LowLatency = 0x5e,
    }
}

/// A property value, one variant per settable property.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Property {
    FrameRate(FrameRate),
    UncompressedFormatSelect(UncompressedFormatSelect),
    FrameSize(FrameSize),
    Realtime(bool),
    BufferCountActual(BufferCountActual),
    BufferSizeActual(BufferSizeActual),
    BufferDisplayHoldCountActual(BufferDisplayHoldCountActual),
    NalStreamFormatSelect(NalFormat),
    VdecOutputOrder(OutputOrder),
    /// Mask of picture types to decode.
    VdecPictureTypeDecode(u32),
    Output2KeepAspectRatio(bool),
    PostLoopDeblocker(bool),
    VdecMultiStream(MultiStream),
    DisplayPictureBufferCount(DisplayPictureBufferCount),
    DivxFormat(DivxFormat),
    MbErrorMapReporting(bool),
    ContinueDataTransfer(bool),
    SyncFrameDecode(bool),
    SyncFrameSequenceHeader(bool),
    RequestIFrame,
    TargetBitrate(Bitrate),
    MaxBitrate(Bitrate),
    ProfileLevelCurrent(ProfileLevel),
    H264EntropyControl(H264EntropyControl),
    RateControl(RateControl),
    Mpeg4TimeResolution(u32),
    Mpeg4HeaderExtension(u32),
    H264DeblockControl(H264DeblockControl),
    SessionQp(Quantization),
    SessionQpRange(QuantizationRange),
    SearchRange(SearchRange),
    MaxNumBFrames(u32),
    IntraPeriod(IntraPeriod),
    IdrPeriod(u32),
    ConcealColor(u32),
    VpeOperations(VpeOperations),
    IntraRefresh(IntraRefresh),
    MultiSliceControl(MultiSliceControl),
    IndexExtradata(ExtradataEnable),
    SliceDeliveryMode(bool),
    VuiTimingInfo(VuiTimingInfo),
    VpeDeinterlace(bool),
    GenerateAudNal(bool),
    BufferAllocMode(BufferAllocMode),
    FrameAssembly(bool),
    VuiBitstreamRestriction(bool),
    PreserveTextQuality(bool),
    ScsThreshold(u32),
    MvcBufferLayout(MvcBufferLayout),
    LtrMode(LtrModeConfig),
    UseLtrFrame(LtrUse),
    MarkLtrFrame(LtrMark),
    HierPMaxEnhLayers(u32),
    HierPNumFrames(u32),
    DisableRcTimestamp(bool),
    InitialQp(InitialQuantization),
    ColorSpaceConversion(ColorSpaceConversion),
    VpxErrorResilience(bool),
    H264NalSvcExt(bool),
    PerfMode(u32),
    HierBMaxEnhLayers(u32),
    NonSecureOutput2(bool),
    /// Number of hybrid hierarchical-P layers.
    HierPHybridMode(u32),
    /// A property the caller can name but that carries no value here.
    Unimplemented(PropertyId),
}

impl Property {
    /// Returns the identifier of the property.
    #[must_use]
    pub const fn id(&self) -> PropertyId {
        match self {
            Self::FrameRate(_) => PropertyId::FrameRate,
            Self::UncompressedFormatSelect(_) => PropertyId::UncompressedFormatSelect,
            Self::FrameSize(_) => PropertyId::FrameSize,
            Self::Realtime(_) => PropertyId::Realtime,
            Self::BufferCountActual(_) => PropertyId::BufferCountActual,
            Self::BufferSizeActual(_) => PropertyId::BufferSizeActual,
            Self::BufferDisplayHoldCountActual(_) => PropertyId::BufferDisplayHoldCountActual,
            Self::NalStreamFormatSelect(_) => PropertyId::NalStreamFormatSelect,
            Self::VdecOutputOrder(_) => PropertyId::VdecOutputOrder,
            Self::VdecPictureTypeDecode(_) => PropertyId::VdecPictureTypeDecode,
            Self::Output2KeepAspectRatio(_) => PropertyId::Output2KeepAspectRatio,
            Self::PostLoopDeblocker(_) => PropertyId::PostLoopDeblocker,
            Self::VdecMultiStream(_) => PropertyId::VdecMultiStream,
            Self::DisplayPictureBufferCount(_) => PropertyId::DisplayPictureBufferCount,
            Self::DivxFormat(_) => PropertyId::DivxFormat,
            Self::MbErrorMapReporting(_) => PropertyId::MbErrorMapReporting,
            Self::ContinueDataTransfer(_) => PropertyId::ContinueDataTransfer,
            Self::SyncFrameDecode(_) => PropertyId::SyncFrameDecode,
            Self::SyncFrameSequenceHeader(_) => PropertyId::SyncFrameSequenceHeader,
            Self::RequestIFrame => PropertyId::RequestIFrame,
            Self::TargetBitrate(_) => PropertyId::TargetBitrate,
            Self::MaxBitrate(_) => PropertyId::MaxBitrate,
            Self::ProfileLevelCurrent(_) => PropertyId::ProfileLevelCurrent,
            Self::H264EntropyControl(_) => PropertyId::H264EntropyControl,
            Self::RateControl(_) => PropertyId::RateControl,
            Self::Mpeg4TimeResolution(_) => PropertyId::Mpeg4TimeResolution,
            Self::Mpeg4HeaderExtension(_) => PropertyId::Mpeg4HeaderExtension,
            Self::H264DeblockControl(_) => PropertyId::H264DeblockControl,
            Self::SessionQp(_) => PropertyId::SessionQp,
            Self::SessionQpRange(_) => PropertyId::SessionQpRange,
            Self::SearchRange(_) => PropertyId::SearchRange,
            Self::MaxNumBFrames(_) => PropertyId::MaxNumBFrames,
            Self::IntraPeriod(_) => PropertyId::IntraPeriod,
            Self::IdrPeriod(_) => PropertyId::IdrPeriod,
            Self::ConcealColor(_) => PropertyId::ConcealColor,
            Self::VpeOperations(_) => PropertyId::VpeOperations,
            Self::IntraRefresh(_) => PropertyId::IntraRefresh,
            Self::MultiSliceControl(_) => PropertyId::MultiSliceControl,
            Self::IndexExtradata(_) => PropertyId::IndexExtradata,
            Self::SliceDeliveryMode(_) => PropertyId::SliceDeliveryMode,
            Self::VuiTimingInfo(_) => PropertyId::VuiTimingInfo,
            Self::VpeDeinterlace(_) => PropertyId::VpeDeinterlace,
            Self::GenerateAudNal(_) => PropertyId::GenerateAudNal,
            Self::BufferAllocMode(_) => PropertyId::BufferAllocMode,
            Self::FrameAssembly(_) => PropertyId::FrameAssembly,
            Self::VuiBitstreamRestriction(_) => PropertyId::VuiBitstreamRestriction,
            Self::PreserveTextQuality(_) => PropertyId::PreserveTextQuality,
            Self::ScsThreshold(_) => PropertyId::ScsThreshold,
            Self::MvcBufferLayout(_) => PropertyId::MvcBufferLayout,
            Self::LtrMode(_) => PropertyId::LtrMode,
            Self::UseLtrFrame(_) => PropertyId::UseLtrFrame,
            Self::MarkLtrFrame(_) => PropertyId::MarkLtrFrame,
            Self::HierPMaxEnhLayers(_) => PropertyId::HierPMaxEnhLayers,
            Self::HierPNumFrames(_) => PropertyId::HierPNumFrames,
            Self::DisableRcTimestamp(_) => PropertyId::DisableRcTimestamp,
            Self::InitialQp(_) => PropertyId::InitialQp,
            Self::ColorSpaceConversion(_) => PropertyId::ColorSpaceConversion,
            Self::VpxErrorResilience(_) => PropertyId::VpxErrorResilience,
            Self::H264NalSvcExt(_) => PropertyId::H264NalSvcExt,
            Self::PerfMode(_) => PropertyId::PerfMode,
            Self::HierBMaxEnhLayers(_) => PropertyId::HierBMaxEnhLayers,
            Self::NonSecureOutput2(_) => PropertyId::NonSecureOutput2,
            Self::HierPHybridMode(_) => PropertyId::HierPHybridMode,
            Self::Unimplemented(id) => *id,
        }
    }
}
