use vidc_core::system::SsrTrigger;

use zerocopy::{Immutable, IntoBytes};

use super::{PacketBuilder, SinglePropertyHead};
use crate::{
    error::VidcDriverError,
    firmware::{
        driver::PacketizationOption,
        hfi::{self, PacketType, PropertyTag},
        translate::to_hfi_ssr_type,
    },
};

#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct DebugConfig {
    debug_config: u32,
    debug_mode: u32,
}

pub(crate) fn sys_init(tx: &mut [u8], arch_type: u32) -> Result<usize, VidcDriverError> {
    PacketBuilder::new(PacketType::SysInit)
        .push(arch_type)
        .commit(tx)
}

pub(crate) fn sys_pc_prep(tx: &mut [u8]) -> Result<usize, VidcDriverError> {
    PacketBuilder::new(PacketType::SysPcPrep).commit(tx)
}

pub(crate) fn sys_ping(tx: &mut [u8]) -> Result<usize, VidcDriverError> {
    PacketBuilder::new(PacketType::SysPing).commit(tx)
}

fn sys_enable(tx: &mut [u8], tag: PropertyTag, enable: bool) -> Result<usize, VidcDriverError> {
    PacketBuilder::new(PacketType::SysSetProperty)
        .push(SinglePropertyHead::new(tag))
        .push(u32::from(enable))
        .commit(tx)
}

pub(crate) fn sys_idle_indicator(tx: &mut [u8], enable: bool) -> Result<usize, VidcDriverError> {
    sys_enable(tx, PropertyTag::SysIdleIndicator, enable)
}

pub(crate) fn sys_power_control(tx: &mut [u8], enable: bool) -> Result<usize, VidcDriverError> {
    sys_enable(tx, PropertyTag::SysCodecPowerPlaneCtrl, enable)
}

/// The firmware debug mode comes from `option`. Modes beyond QDSS fall back to
/// the queue.
pub(crate) fn sys_debug_config(
    tx: &mut [u8],
    config: u32,
    option: &PacketizationOption,
) -> Result<usize, VidcDriverError> {
    let debug_mode = if option.fw_debug_mode <= hfi::HFI_DEBUG_MODE_QDSS {
        option.fw_debug_mode
    } else {
        hfi::HFI_DEBUG_MODE_QUEUE
    };
    PacketBuilder::new(PacketType::SysSetProperty)
        .push(SinglePropertyHead::new(PropertyTag::SysDebugConfig))
        .push(DebugConfig {
            debug_config: config,
            debug_mode,
        })
        .commit(tx)
}

pub(crate) fn sys_coverage_config(tx: &mut [u8], mode: u32) -> Result<usize, VidcDriverError> {
    tracing::debug!("Firmware coverage mode {}", mode);
    PacketBuilder::new(PacketType::SysSetProperty)
        .push(SinglePropertyHead::new(PropertyTag::SysConfigCoverage))
        .push(mode)
        .commit(tx)
}

pub(crate) fn sys_image_version(tx: &mut [u8]) -> Result<usize, VidcDriverError> {
    PacketBuilder::new(PacketType::SysGetProperty)
        .push(SinglePropertyHead::new(PropertyTag::SysImageVersion))
        .commit(tx)
}

pub(crate) fn ssr_cmd(tx: &mut [u8], trigger: SsrTrigger) -> Result<usize, VidcDriverError> {
    PacketBuilder::new(PacketType::SysTestSsr)
        .push(to_hfi_ssr_type(trigger))
        .commit(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::packet::tests::*;

    #[test]
    fn init() -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = sys_init(&mut tx, 0x1)?;
        assert_eq!(12, written);
        assert_packet(&tx, written, PacketType::SysInit);
        assert_eq!(0x1, read_u32(&tx, 8));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(PacketType::SysPcPrep, sys_pc_prep)]
    #[case(PacketType::SysPing, sys_ping)]
    fn bare(
        #[case] expect: PacketType,
        #[case] f: fn(&mut [u8]) -> Result<usize, VidcDriverError>,
    ) -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = f(&mut tx)?;
        assert_eq!(8, written);
        assert_packet(&tx, written, expect);
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(PropertyTag::SysIdleIndicator, true, sys_idle_indicator)]
    #[case(PropertyTag::SysIdleIndicator, false, sys_idle_indicator)]
    #[case(PropertyTag::SysCodecPowerPlaneCtrl, true, sys_power_control)]
    fn enable_flag(
        #[case] tag: PropertyTag,
        #[case] enable: bool,
        #[case] f: fn(&mut [u8], bool) -> Result<usize, VidcDriverError>,
    ) -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = f(&mut tx, enable)?;
        assert_eq!(20, written);
        assert_packet(&tx, written, PacketType::SysSetProperty);
        assert_eq!(1, read_u32(&tx, 8));
        assert_eq!(tag as u32, read_u32(&tx, 12));
        assert_eq!(u32::from(enable), read_u32(&tx, 16));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(0, 0)]
    #[case(hfi::HFI_DEBUG_MODE_QUEUE, hfi::HFI_DEBUG_MODE_QUEUE)]
    #[case(hfi::HFI_DEBUG_MODE_QDSS, hfi::HFI_DEBUG_MODE_QDSS)]
    #[case(hfi::HFI_DEBUG_MODE_QUEUE, 3)]
    #[case(hfi::HFI_DEBUG_MODE_QUEUE, u32::MAX)]
    fn debug_config(#[case] expect: u32, #[case] fw_debug_mode: u32) -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = sys_debug_config(
            &mut tx,
            0x3f,
            &PacketizationOption { fw_debug_mode },
        )?;
        assert_eq!(24, written);
        assert_packet(&tx, written, PacketType::SysSetProperty);
        assert_eq!(PropertyTag::SysDebugConfig as u32, read_u32(&tx, 12));
        assert_eq!(0x3f, read_u32(&tx, 16));
        assert_eq!(expect, read_u32(&tx, 20));
        Ok(())
    }

    #[test]
    fn coverage_config() -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = sys_coverage_config(&mut tx, 2)?;
        assert_eq!(20, written);
        assert_eq!(PropertyTag::SysConfigCoverage as u32, read_u32(&tx, 12));
        assert_eq!(2, read_u32(&tx, 16));
        Ok(())
    }

    #[test]
    fn image_version() -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = sys_image_version(&mut tx)?;
        assert_eq!(16, written);
        assert_packet(&tx, written, PacketType::SysGetProperty);
        assert_eq!(1, read_u32(&tx, 8));
        assert_eq!(PropertyTag::SysImageVersion as u32, read_u32(&tx, 12));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(hfi::HFI_TEST_SSR_SW_ERR_FATAL, SsrTrigger::ErrFatal)]
    #[case(hfi::HFI_TEST_SSR_SW_DIV_BY_ZERO, SsrTrigger::SwDivByZero)]
    #[case(hfi::HFI_TEST_SSR_HW_WDOG_IRQ, SsrTrigger::HwWdogIrq)]
    fn ssr(#[case] expect: u32, #[case] trigger: SsrTrigger) -> anyhow::Result<()> {
        let mut tx = tx_buf();
        let written = ssr_cmd(&mut tx, trigger)?;
        assert_eq!(12, written);
        assert_packet(&tx, written, PacketType::SysTestSsr);
        assert_eq!(expect, read_u32(&tx, 8));
        Ok(())
    }
}
