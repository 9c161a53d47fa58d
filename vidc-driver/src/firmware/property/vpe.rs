use vidc_core::property::{ColorSpaceConversion, VpeOperations};

use super::{payload as wire, single};
use crate::{
    error::VidcDriverError,
    firmware::{
        hfi::PropertyTag,
        packet::PacketBuilder,
        translate::{to_hfi_flip, to_hfi_rotation},
    },
};

pub(super) fn operations(b: &mut PacketBuilder, p: VpeOperations) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VpeOperations,
        wire::Operations {
            rotation: to_hfi_rotation(p.rotate),
            flip: to_hfi_flip(p.flip),
        },
    )
}

pub(super) fn color_space_conversion(
    b: &mut PacketBuilder,
    p: ColorSpaceConversion,
) -> Result<(), VidcDriverError> {
    single(
        b,
        PropertyTag::VpeColorSpaceConversion,
        wire::ColorSpaceConversion {
            csc_matrix: p.csc_matrix,
            csc_bias: p.csc_bias,
            csc_limit: p.csc_limit,
        },
    )
}

#[cfg(test)]
mod tests {
    use vidc_core::{
        mode::{Flip, Rotation},
        property::Property,
    };

    use super::*;
    use crate::firmware::{hfi, property::tests::set};

    #[rstest::rstest]
    #[test]
    #[case(hfi::HFI_ROTATE_NONE, hfi::HFI_FLIP_NONE, Rotation::None, Flip::None)]
    #[case(hfi::HFI_ROTATE_90, hfi::HFI_FLIP_HORIZONTAL, Rotation::Rotate90, Flip::Horizontal)]
    #[case(hfi::HFI_ROTATE_270, hfi::HFI_FLIP_VERTICAL, Rotation::Rotate270, Flip::Vertical)]
    fn operations(
        #[case] expect_rotation: u32,
        #[case] expect_flip: u32,
        #[case] rotate: Rotation,
        #[case] flip: Flip,
    ) -> anyhow::Result<()> {
        assert_eq!(
            (
                PropertyTag::VpeOperations as u32,
                vec![expect_rotation, expect_flip]
            ),
            set(Property::VpeOperations(VpeOperations::new(rotate, flip)))?
        );
        Ok(())
    }

    #[test]
    fn color_space_conversion() -> anyhow::Result<()> {
        let csc = ColorSpaceConversion::new(
            std::array::from_fn(|i| 0x100 + i as u32),
            [16, 128, 128],
            [16, 235, 16, 240, 16, 240],
        );

        let (tag, payload) = set(Property::ColorSpaceConversion(csc))?;

        assert_eq!(PropertyTag::VpeColorSpaceConversion as u32, tag);
        assert_eq!(18, payload.len());
        assert_eq!(&csc.csc_matrix, &payload[0..9]);
        assert_eq!(&csc.csc_bias, &payload[9..12]);
        assert_eq!(&csc.csc_limit, &payload[12..18]);
        Ok(())
    }
}
