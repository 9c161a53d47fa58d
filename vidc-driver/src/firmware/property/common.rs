use vidc_core::{
    buffer::BufferType,
    format::NalFormat,
    property::{
        BufferAllocMode, ExtradataEnable, FrameRate, FrameSize, MvcBufferLayout, ProfileLevel,
        UncompressedFormatSelect,
    },
};

use super::{hfi_buffer, payload as wire, single};
use crate::{
    error::VidcDriverError,
    firmware::{
        hfi::{self, PropertyTag},
        packet::PacketBuilder,
        translate::{
            to_hfi_buf_mode, to_hfi_color, to_hfi_extradata_id, to_hfi_extradata_index,
            to_hfi_layout, to_hfi_nal, to_hfi_profile,
        },
    },
};

pub(super) fn frame_rate(b: &mut PacketBuilder, p: FrameRate) -> Result<(), VidcDriverError> {
    let buffer_type = hfi_buffer(p.buffer_type)?;
    single(
        b,
        PropertyTag::FrameRate,
        wire::FrameRate {
            buffer_type,
            frame_rate: p.frame_rate,
        },
    )
}

pub(super) fn uncompressed_format(
    b: &mut PacketBuilder,
    p: UncompressedFormatSelect,
) -> Result<(), VidcDriverError> {
    let buffer_type = hfi_buffer(p.buffer_type)?;
    let format = to_hfi_color(p.format)?;
    if format == 0 {
        return Err(VidcDriverError::InvalidArgument("color format is empty"));
    }
    single(
        b,
        PropertyTag::UncompressedFormatSelect,
        wire::UncompressedFormatSelect {
            buffer_type,
            format,
        },
    )
}

pub(super) fn frame_size(b: &mut PacketBuilder, p: FrameSize) -> Result<(), VidcDriverError> {
    let buffer_type = hfi_buffer(p.buffer_type)?;
    single(
        b,
        PropertyTag::FrameSize,
        wire::FrameSize {
            buffer_type,
            width: p.width,
            height: p.height,
        },
    )
}

/// Actual count, actual size and display hold count share one layout.
pub(super) fn buffer_value(
    b: &mut PacketBuilder,
    tag: PropertyTag,
    buffer_type: BufferType,
    value: u32,
) -> Result<(), VidcDriverError> {
    let buffer_type = hfi_buffer(buffer_type)?;
    single(b, tag, wire::BufferValue { buffer_type, value })
}

pub(super) fn nal_format(b: &mut PacketBuilder, format: NalFormat) -> Result<(), VidcDriverError> {
    let format = to_hfi_nal(format)?;
    if format == 0 {
        return Err(VidcDriverError::InvalidArgument("nal format is empty"));
    }
    single(b, PropertyTag::NalStreamFormatSelect, format)
}

/// Profiles without a wire code fall back to H.264 high, level 0 to level 1.
pub(super) fn profile_level(b: &mut PacketBuilder, p: ProfileLevel) -> Result<(), VidcDriverError> {
    let profile = match to_hfi_profile(p.profile) {
        Ok(profile) if profile != 0 => profile,
        _ => {
            tracing::warn!("Profile {:?} not supported, falling back to high", p.profile);
            hfi::HFI_H264_PROFILE_HIGH
        }
    };
    let level = if p.level == 0 {
        tracing::warn!("Level 0 not supported, falling back to 1");
        1
    } else {
        p.level
    };
    single(
        b,
        PropertyTag::ProfileLevelCurrent,
        wire::ProfileLevel { profile, level },
    )
}

/// The tag itself depends on the extradata kind.
pub(super) fn index_extradata(
    b: &mut PacketBuilder,
    p: ExtradataEnable,
) -> Result<(), VidcDriverError> {
    let tag = to_hfi_extradata_index(p.index).ok_or(VidcDriverError::InvalidArgument(
        "extradata index has no property tag",
    ))?;
    let index_extra_data_id = to_hfi_extradata_id(p.index)
        .ok_or(VidcDriverError::InvalidArgument("extradata index has no id"))?;
    single(
        b,
        tag,
        wire::IndexExtradataConfig {
            enable: u32::from(p.enable),
            index_extra_data_id,
        },
    )
}

pub(super) fn buffer_alloc_mode(
    b: &mut PacketBuilder,
    p: BufferAllocMode,
) -> Result<(), VidcDriverError> {
    let buffer_type = hfi_buffer(p.buffer_type)?;
    single(
        b,
        PropertyTag::BufferAllocMode,
        wire::BufferAllocMode {
            buffer_type,
            mode: to_hfi_buf_mode(p.mode),
        },
    )
}

pub(super) fn mvc_buffer_layout(
    b: &mut PacketBuilder,
    p: MvcBufferLayout,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::MvcBufferLayout,
        wire::MvcBufferLayout {
            layout_type: to_hfi_layout(p.layout_type),
            bright_view_first: u32::from(p.bright_view_first),
            ngap: p.ngap,
        },
    )
}

#[cfg(test)]
mod tests {
    use vidc_core::{
        buffer::{BufferLayout, BufferMode},
        format::{ColorFormat, Profile},
        mode::ExtradataId,
        property::{BufferCountActual, BufferDisplayHoldCountActual, BufferSizeActual, Property},
    };

    use super::*;
    use crate::firmware::property::tests::set;

    #[rstest::rstest]
    #[test]
    #[case(
        PropertyTag::FrameSize,
        vec![hfi::HFI_BUFFER_INPUT, 1920, 1080],
        Property::FrameSize(FrameSize::new(BufferType::Input, 1920, 1080))
    )]
    #[case(
        PropertyTag::BufferCountActual,
        vec![hfi::HFI_BUFFER_OUTPUT2, 8],
        Property::BufferCountActual(BufferCountActual::new(BufferType::Output2, 8))
    )]
    #[case(
        PropertyTag::BufferSizeActual,
        vec![hfi::HFI_BUFFER_EXTRADATA_INPUT, 0x4000],
        Property::BufferSizeActual(BufferSizeActual::new(BufferType::ExtradataInput, 0x4000))
    )]
    #[case(
        PropertyTag::BufferDisplayHoldCountActual,
        vec![hfi::HFI_BUFFER_OUTPUT, 2],
        Property::BufferDisplayHoldCountActual(BufferDisplayHoldCountActual::new(
            BufferType::Output,
            2
        ))
    )]
    #[case(
        PropertyTag::UncompressedFormatSelect,
        vec![hfi::HFI_BUFFER_OUTPUT, hfi::HFI_COLOR_FORMAT_NV12],
        Property::UncompressedFormatSelect(UncompressedFormatSelect::new(
            BufferType::Output,
            ColorFormat::NV12
        ))
    )]
    #[case(
        PropertyTag::NalStreamFormatSelect,
        vec![hfi::HFI_NAL_FORMAT_FOUR_BYTE_LENGTH],
        Property::NalStreamFormatSelect(NalFormat::FOUR_BYTE_LENGTH)
    )]
    #[case(
        PropertyTag::BufferAllocMode,
        vec![hfi::HFI_BUFFER_OUTPUT, hfi::HFI_BUFFER_MODE_DYNAMIC],
        Property::BufferAllocMode(BufferAllocMode::new(BufferType::Output, BufferMode::Dynamic))
    )]
    #[case(
        PropertyTag::MvcBufferLayout,
        vec![hfi::HFI_MVC_BUFFER_LAYOUT_TOP_BOTTOM, 1, 16],
        Property::MvcBufferLayout(MvcBufferLayout::new(BufferLayout::TopBottom, true, 16))
    )]
    fn encode(
        #[case] expect_tag: PropertyTag,
        #[case] expect_payload: Vec<u32>,
        #[case] property: Property,
    ) -> anyhow::Result<()> {
        assert_eq!((expect_tag as u32, expect_payload), set(property)?);
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(hfi::HFI_H264_PROFILE_MAIN, 0x20, Profile::H264_MAIN, 0x20)]
    #[case(hfi::HFI_H264_PROFILE_HIGH, 0x20, Profile::empty(), 0x20)]
    #[case(hfi::HFI_H264_PROFILE_HIGH, 0x20, Profile::H264_HIGH10, 0x20)]
    #[case(hfi::HFI_H264_PROFILE_HIGH, 0x20, Profile::H264_MAIN | Profile::H264_HIGH, 0x20)]
    #[case(hfi::HFI_H264_PROFILE_BASELINE, 1, Profile::H264_BASELINE, 0)]
    fn profile_level_fallback(
        #[case] expect_profile: u32,
        #[case] expect_level: u32,
        #[case] profile: Profile,
        #[case] level: u32,
    ) -> anyhow::Result<()> {
        let (tag, payload) = set(Property::ProfileLevelCurrent(ProfileLevel::new(profile, level)))?;
        assert_eq!(PropertyTag::ProfileLevelCurrent as u32, tag);
        assert_eq!(vec![expect_profile, expect_level], payload);
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(
        PropertyTag::VdecTimestampExtradata as u32,
        PropertyTag::VdecTimestampExtradata as u32,
        ExtradataId::Timestamp
    )]
    #[case(
        PropertyTag::VencLtrInfo as u32,
        PropertyTag::VencLtrInfo as u32,
        ExtradataId::LtrInfo
    )]
    #[case(
        PropertyTag::IndexExtradata as u32,
        hfi::VIDC_EXTRADATA_ASPECT_RATIO,
        ExtradataId::AspectRatio
    )]
    #[case(
        PropertyTag::IndexExtradata as u32,
        hfi::VIDC_EXTRADATA_INPUT_CROP,
        ExtradataId::InputCrop
    )]
    fn index_extradata(
        #[case] expect_tag: u32,
        #[case] expect_id: u32,
        #[case] index: ExtradataId,
    ) -> anyhow::Result<()> {
        assert_eq!(
            (expect_tag, vec![1, expect_id]),
            set(Property::IndexExtradata(ExtradataEnable::new(index, true)))?
        );
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(ExtradataId::None)]
    #[case(ExtradataId::MetadataFiller)]
    fn index_extradata_unmapped(#[case] index: ExtradataId) {
        assert_eq!(
            Err(VidcDriverError::InvalidArgument(
                "extradata index has no property tag"
            )),
            set(Property::IndexExtradata(ExtradataEnable::new(index, true)))
        );
    }

    #[rstest::rstest]
    #[test]
    #[case(
        VidcDriverError::InvalidArgument("buffer type has no wire code"),
        Property::FrameSize(FrameSize::new(BufferType::InternalCmdQueue, 1920, 1080))
    )]
    #[case(
        VidcDriverError::InvalidArgument("buffer type has no wire code"),
        Property::FrameRate(FrameRate::new(BufferType::InternalCmdQueue, 30 << 16))
    )]
    #[case(
        VidcDriverError::InvalidArgument("color format is empty"),
        Property::UncompressedFormatSelect(UncompressedFormatSelect::new(
            BufferType::Output,
            ColorFormat::empty()
        ))
    )]
    #[case(
        VidcDriverError::unsupported("color format", 0b11),
        Property::UncompressedFormatSelect(UncompressedFormatSelect::new(
            BufferType::Output,
            ColorFormat::MONOCHROME | ColorFormat::NV12
        ))
    )]
    #[case(
        VidcDriverError::InvalidArgument("nal format is empty"),
        Property::NalStreamFormatSelect(NalFormat::empty())
    )]
    fn err(#[case] expect: VidcDriverError, #[case] property: Property) {
        assert_eq!(Err(expect), set(property));
    }
}
