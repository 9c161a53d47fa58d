//! Closed enumerations carried inside session properties.

hal_enum! {
    /// Order in which a decoder returns pictures.
    pub enum OutputOrder {
        /// Presentation order.
        Display = 0x1,
        /// Decode order.
        Decode = 0x2,
    }
}

hal_enum! {
    /// DivX bitstream generation.
    pub enum DivxFormat {
        /// DivX 4.
        Divx4 = 0x1,
        /// DivX 5.
        Divx5 = 0x2,
        /// DivX 6.
        Divx6 = 0x3,
    }
}

hal_enum! {
    /// Encoder rate control.
    pub enum RateControl {
        /// Constant QP.
        Off = 0x1,
        /// Variable bitrate, variable frame rate.
        VbrVfr = 0x2,
        /// Variable bitrate, constant frame rate.
        VbrCfr = 0x3,
        /// Constant bitrate, variable frame rate.
        CbrVfr = 0x4,
        /// Constant bitrate, constant frame rate.
        CbrCfr = 0x5,
    }
}

hal_enum! {
    /// H.264 in-loop deblocking filter.
    pub enum DeblockMode {
        /// Filter off.
        Disable = 0x1,
        /// Filter on, except across slice boundaries.
        SkipSliceBoundary = 0x2,
        /// Filter on everywhere.
        AllBoundary = 0x4,
    }
}

hal_enum! {
    /// Post-processor rotation, clockwise.
    pub enum Rotation {
        /// No rotation.
        None = 0x1,
        /// 90 degrees.
        Rotate90 = 0x2,
        /// 180 degrees.
        Rotate180 = 0x3,
        /// 270 degrees.
        Rotate270 = 0x4,
    }
}

hal_enum! {
    /// Post-processor mirroring.
    pub enum Flip {
        /// No mirroring.
        None = 0x1,
        /// Mirror left to right.
        Horizontal = 0x2,
        /// Mirror top to bottom.
        Vertical = 0x3,
    }
}

hal_enum! {
    /// Encoder intra refresh scheme.
    pub enum IntraRefreshMode {
        /// No intra refresh.
        None = 0x1,
        /// Cyclic intra refresh.
        Cyclic = 0x2,
        /// Adaptive intra refresh.
        Adaptive = 0x3,
        /// Cyclic and adaptive combined.
        CyclicAdaptive = 0x4,
        /// Randomly placed intra macroblocks.
        Random = 0x5,
    }
}

hal_enum! {
    /// How the encoder splits a picture into slices.
    pub enum MultiSliceMode {
        /// Single slice.
        Off = 0x1,
        /// Fixed number of macroblocks per slice.
        ByMbCount = 0x2,
        /// Fixed number of bytes per slice.
        ByByteCount = 0x3,
        /// One slice per group of blocks.
        Gob = 0x4,
    }
}

hal_enum! {
    /// Long-term reference frame handling.
    pub enum LtrMode {
        /// No long-term references.
        Disable = 0x0,
        /// Client marks long-term frames.
        Manual = 0x1,
        /// Encoder marks long-term frames periodically.
        Periodic = 0x2,
    }
}

hal_enum! {
    /// Kind of per-frame metadata a session can be asked to produce.
    pub enum ExtradataId {
        /// No metadata.
        None = 0x0,
        /// Macroblock quantisation map.
        MbQuantization = 0x1,
        /// Interlace information.
        InterlaceVideo = 0x2,
        /// VC-1 frame display information.
        Vc1FrameDisp = 0x3,
        /// VC-1 sequence display information.
        Vc1SeqDisp = 0x4,
        /// Timestamp.
        Timestamp = 0x5,
        /// Stereo 3D frame packing arrangement.
        S3dFramePacking = 0x6,
        /// Frame rate.
        FrameRate = 0x7,
        /// Pan-scan window.
        PanscanWindow = 0x8,
        /// Recovery point SEI.
        RecoveryPointSei = 0x9,
        /// Slice layout of an encoded frame.
        MultisliceInfo = 0xa,
        /// Number of concealed macroblocks.
        NumConcealedMb = 0xb,
        /// Filler metadata.
        MetadataFiller = 0xc,
        /// Aspect ratio.
        AspectRatio = 0xd,
        /// MPEG-2 sequence display information.
        Mpeg2SeqDisp = 0xe,
        /// User data carried in the stream.
        StreamUserdata = 0xf,
        /// Frame QP.
        FrameQp = 0x10,
        /// Frame bit counts.
        FrameBitsInfo = 0x11,
        /// Input crop rectangle.
        InputCrop = 0x12,
        /// Digital zoom window.
        DigitalZoom = 0x13,
        /// Long-term reference information.
        LtrInfo = 0x14,
        /// Macroblock information dump.
        MetadataMbi = 0x15,
    }
}
