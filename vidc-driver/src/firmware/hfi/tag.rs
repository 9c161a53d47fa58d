use zerocopy::{Immutable, IntoBytes};

#[derive(Clone, Copy, PartialEq, Eq, Debug, IntoBytes, Immutable)]
#[repr(u32)]
pub(crate) enum PacketType {
    SysInit = 0x0001_0001,
    SysPcPrep = 0x0001_0002,
    SysSetResource = 0x0001_0003,
    SysReleaseResource = 0x0001_0004,
    SysSetProperty = 0x0001_0005,
    SysGetProperty = 0x0001_0006,
    SysSessionInit = 0x0001_0007,
    SysSessionEnd = 0x0001_0008,
    SysTestSsr = 0x0001_0101,
    SysSessionAbort = 0x0021_0001,
    SysPing = 0x0021_0002,
    SessionSetProperty = 0x0001_1001,
    SessionSetBuffers = 0x0001_1002,
    SessionGetSequenceHeader = 0x0001_1003,
    SessionLoadResources = 0x0021_1001,
    SessionStart = 0x0021_1002,
    SessionStop = 0x0021_1003,
    SessionEmptyBuffer = 0x0021_1004,
    SessionFillBuffer = 0x0021_1005,
    SessionSuspend = 0x0021_1006,
    SessionResume = 0x0021_1007,
    SessionFlush = 0x0021_1008,
    SessionGetProperty = 0x0021_1009,
    SessionParseSequenceHeader = 0x0021_100A,
    SessionReleaseBuffers = 0x0021_100B,
    SessionReleaseResources = 0x0021_100C,
    SessionContinue = 0x0021_100D,
    SessionSync = 0x0021_100E,
}
