use crate::error::VidcDriverError;

/// Dense table indexed by the bit position of a single-bit HAL value.
///
/// `None` entries are gaps: HAL members the firmware has no code for.
pub(crate) struct FlagTable<const N: usize> {
    domain: &'static str,
    entries: [Option<u32>; N],
}

impl<const N: usize> FlagTable<N> {
    pub(crate) const fn new(domain: &'static str, entries: [Option<u32>; N]) -> Self {
        Self { domain, entries }
    }

    /// Zero means "unset" and maps to zero.
    pub(crate) fn lookup(&self, bits: u32) -> Result<u32, VidcDriverError> {
        if bits == 0 {
            return Ok(0);
        }
        if !bits.is_power_of_two() {
            return Err(VidcDriverError::unsupported(self.domain, bits));
        }
        self.entries
            .get(bits.trailing_zeros() as usize)
            .copied()
            .flatten()
            .ok_or(VidcDriverError::unsupported(self.domain, bits))
    }

    #[cfg(test)]
    pub(crate) fn reverse(&self, wire: u32) -> Option<u32> {
        self.entries
            .iter()
            .position(|&e| e == Some(wire))
            .map(|idx| 1 << idx)
    }
}
