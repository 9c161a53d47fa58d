hal_enum! {
    /// Codec family of a session.
    ///
    /// The raw values are single bits so that capability masks reported by the
    /// firmware can be tested against them.
    pub enum VideoCodec {
        /// Multiview H.264.
        Mvc = 0x0000_0001,
        /// H.264 / AVC.
        H264 = 0x0000_0002,
        /// H.263.
        H263 = 0x0000_0004,
        /// MPEG-1.
        Mpeg1 = 0x0000_0008,
        /// MPEG-2.
        Mpeg2 = 0x0000_0010,
        /// MPEG-4 part 2.
        Mpeg4 = 0x0000_0020,
        /// DivX 3.11.
        Divx311 = 0x0000_0040,
        /// DivX 4/5/6.
        Divx = 0x0000_0080,
        /// VC-1.
        Vc1 = 0x0000_0100,
        /// Sorenson Spark.
        Spark = 0x0000_0200,
        /// VP6. Not supported by the coprocessor.
        Vp6 = 0x0000_0400,
        /// VP7. Not supported by the coprocessor.
        Vp7 = 0x0000_0800,
        /// VP8.
        Vp8 = 0x0000_1000,
        /// H.265 / HEVC.
        Hevc = 0x0000_2000,
        /// HEVC with hybrid hierarchical-P coding.
        HevcHybrid = 0x0000_4000,
    }
}

hal_enum! {
    /// Kind of work a session performs.
    pub enum SessionDomain {
        /// Encoder session.
        Encoder = 0x1,
        /// Decoder session.
        Decoder = 0x2,
        /// Video pre-processing engine session.
        Vpe = 0x4,
        /// Macroblock information session.
        Mbi = 0x8,
    }
}
