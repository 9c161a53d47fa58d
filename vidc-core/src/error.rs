use thiserror::Error;

/// A raw value is not a member of the HAL domain it was converted into.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid {domain} value: {value:#x}")]
pub struct HalValueError {
    domain: &'static str,
    value: u32,
}

impl HalValueError {
    #[doc(hidden)]
    #[must_use]
    pub const fn new(domain: &'static str, value: u32) -> Self {
        Self { domain, value }
    }

    /// Name of the domain the value was checked against.
    #[must_use]
    pub const fn domain(&self) -> &'static str {
        self.domain
    }

    /// The rejected raw value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            "Invalid FlushType value: 0x10",
            HalValueError::new("FlushType", 0x10).to_string()
        );
    }
}
