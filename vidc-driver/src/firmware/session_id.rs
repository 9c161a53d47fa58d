use vidc_core::session::SessionHandle;

const GOLDEN_RATIO_32: u32 = 0x61C8_8647;

/// Folds a 64-bit token into a 32-bit multiplicative hash.
#[must_use]
pub(crate) const fn hash32(token: u64) -> u32 {
    ((token ^ (token >> 32)) as u32).wrapping_mul(GOLDEN_RATIO_32)
}

/// Wire identifier of a session.
///
/// Stable for the lifetime of the handle. Not guaranteed to be unique, the
/// firmware only uses it to correlate responses.
#[must_use]
pub fn session_id(session: &SessionHandle) -> u32 {
    hash32(session.token())
}
