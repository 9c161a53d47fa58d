use vidc_core::{property::PropertyId, session::SessionHandle};

use super::{PacketBuilder, SinglePropertyHead};
use crate::{
    error::VidcDriverError,
    firmware::hfi::{PacketType, PropertyTag},
};

/// Only the current profile/level and the buffer requirements can be queried.
pub(crate) fn session_get_property(
    tx: &mut [u8],
    session: Option<&SessionHandle>,
    id: PropertyId,
) -> Result<usize, VidcDriverError> {
    let mut builder = PacketBuilder::session(PacketType::SessionGetProperty, session)?;
    let tag = match id {
        PropertyId::ProfileLevelCurrent => PropertyTag::ProfileLevelCurrent,
        PropertyId::GetBufferRequirements => PropertyTag::BufferRequirements,
        _ => return Err(VidcDriverError::unsupported("get property", id.raw())),
    };
    builder.push(SinglePropertyHead::new(tag)).commit(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::packet::tests::*;

    #[rstest::rstest]
    #[test]
    #[case(PropertyTag::ProfileLevelCurrent, PropertyId::ProfileLevelCurrent)]
    #[case(PropertyTag::BufferRequirements, PropertyId::GetBufferRequirements)]
    fn get_property(#[case] expect: PropertyTag, #[case] id: PropertyId) -> anyhow::Result<()> {
        let session = SessionHandle::new();
        let mut tx = tx_buf();

        let written = session_get_property(&mut tx, Some(&session), id)?;

        assert_eq!(20, written);
        assert_packet(&tx, written, PacketType::SessionGetProperty);
        assert_eq!(1, read_u32(&tx, 12));
        assert_eq!(expect as u32, read_u32(&tx, 16));
        Ok(())
    }

    #[rstest::rstest]
    #[test]
    #[case(PropertyId::FrameSize)]
    #[case(PropertyId::BufferRequirements)]
    #[case(PropertyId::LowLatency)]
    fn unsupported(#[case] id: PropertyId) {
        let session = SessionHandle::new();
        let mut tx = tx_buf();
        assert_eq!(
            Err(VidcDriverError::unsupported("get property", id.raw())),
            session_get_property(&mut tx, Some(&session), id)
        );
        assert_untouched(&tx);
    }

    #[test]
    fn null_session() {
        let mut tx = tx_buf();
        assert_eq!(
            Err(VidcDriverError::InvalidArgument("session is null")),
            session_get_property(&mut tx, None, PropertyId::ProfileLevelCurrent)
        );
        assert_untouched(&tx);
    }
}
