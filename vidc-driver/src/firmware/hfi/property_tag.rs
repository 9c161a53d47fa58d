use zerocopy::{Immutable, IntoBytes};

#[derive(Clone, Copy, PartialEq, Eq, Debug, IntoBytes, Immutable)]
#[repr(u32)]
pub(crate) enum PropertyTag {
    SysDebugConfig = 0x0000_0001,
    SysIdleIndicator = 0x0000_0004,
    SysCodecPowerPlaneCtrl = 0x0000_0005,
    SysImageVersion = 0x0000_0006,
    SysConfigCoverage = 0x0000_0007,

    FrameSize = 0x0000_1001,
    UncompressedFormatSelect = 0x0000_1003,
    ProfileLevelCurrent = 0x0000_1005,
    NalStreamFormatSelect = 0x0000_1007,
    BufferCountActual = 0x0000_1009,
    BufferSizeActual = 0x0000_100A,
    BufferDisplayHoldCountActual = 0x0000_100B,
    BufferAllocMode = 0x0000_100C,
    IndexExtradata = 0x0000_100D,
    MvcBufferLayout = 0x0000_100E,
    S3dFramePackingExtradata = 0x0000_100F,
    DivxFormat = 0x0000_1010,

    FrameRate = 0x0000_2001,
    BufferRequirements = 0x0000_2002,
    Realtime = 0x0000_2003,

    VdecContinueDataTransfer = 0x0100_1001,
    VdecDisplayPictureBufferCount = 0x0100_1002,
    VdecMultiStream = 0x0100_1003,
    VdecPictureTypeDecode = 0x0100_1004,
    VdecOutputOrder = 0x0100_1005,
    VdecMbQuantization = 0x0100_1006,
    VdecNumConcealedMb = 0x0100_1007,
    VdecThumbnailMode = 0x0100_1008,
    VdecFrameAssembly = 0x0100_1009,
    VdecOutput2KeepAspectRatio = 0x0100_100A,
    VdecConcealColor = 0x0100_100B,
    VdecInterlaceVideoExtradata = 0x0100_100C,
    VdecVc1FrameDispExtradata = 0x0100_100D,
    VdecVc1SeqDispExtradata = 0x0100_100E,
    VdecTimestampExtradata = 0x0100_100F,
    VdecFrameRateExtradata = 0x0100_1010,
    VdecPanscanWindowExtradata = 0x0100_1011,
    VdecRecoveryPointSeiExtradata = 0x0100_1012,
    VdecMpeg2SeqDispExtradata = 0x0100_1013,
    VdecStreamUserdataExtradata = 0x0100_1014,
    VdecFrameQpExtradata = 0x0100_1015,
    VdecFrameBitsInfoExtradata = 0x0100_1016,
    VdecScsThreshold = 0x0100_1017,
    VdecNonCpOutput2 = 0x0100_1018,

    VdecPostLoopDeblocker = 0x0100_2001,
    VdecMbErrorMapReporting = 0x0100_2002,

    VencSliceDeliveryMode = 0x0200_1001,
    VencH264EntropyControl = 0x0200_1002,
    VencH264DeblockControl = 0x0200_1003,
    VencRateControl = 0x0200_1004,
    VencMpeg4TimeResolution = 0x0200_1005,
    VencSessionQp = 0x0200_1006,
    VencMpeg4HeaderExtension = 0x0200_1007,
    VencIntraRefresh = 0x0200_1008,
    VencMultiSliceControl = 0x0200_1009,
    VencVc1PerfCfg = 0x0200_100A,
    VencMaxNumBFrames = 0x0200_100B,
    VencH264VuiTimingInfo = 0x0200_100C,
    VencH264GenerateAudNal = 0x0200_100D,
    VencH264VuiBitstreamRestriction = 0x0200_100E,
    VencPreserveTextQuality = 0x0200_100F,
    VencMultiSliceInfo = 0x0200_1010,
    VencSessionQpRange = 0x0200_1011,
    VencLtrMode = 0x0200_1012,
    VencLtrInfo = 0x0200_1013,
    VencMbiDumping = 0x0200_1014,
    VencHierPMaxNumEnhLayer = 0x0200_1015,
    VencDisableRcTimestamp = 0x0200_1016,
    VencInitialQp = 0x0200_1017,
    VencVpxErrorResilienceMode = 0x0200_1018,
    VencH264NalSvcExt = 0x0200_1019,
    VencHierBMaxNumEnhLayer = 0x0200_101A,
    VencHierPHybridMode = 0x0200_101B,

    VencTargetBitrate = 0x0200_2001,
    VencIdrPeriod = 0x0200_2002,
    VencIntraPeriod = 0x0200_2003,
    VencRequestSyncFrame = 0x0200_2004,
    VencMaxBitrate = 0x0200_2005,
    VencSyncFrameSequenceHeader = 0x0200_2006,
    VencUseLtrFrame = 0x0200_2007,
    VencMarkLtrFrame = 0x0200_2008,
    VencHierPEnhLayer = 0x0200_2009,
    VencPerfMode = 0x0200_200A,

    VpeColorSpaceConversion = 0x0300_1001,

    VpeDeinterlace = 0x0300_2001,
    VpeOperations = 0x0300_2002,
}
