hal_enum! {
    /// Fault the firmware is asked to inject for subsystem-restart testing.
    pub enum SsrTrigger {
        /// Software fatal error.
        ErrFatal = 0x1,
        /// Software division by zero.
        SwDivByZero = 0x2,
        /// Hardware watchdog interrupt.
        HwWdogIrq = 0x3,
    }
}
