use std::sync::atomic::{AtomicU64, Ordering};

use getset::CopyGetters;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one coprocessor-side session.
///
/// The handle is deliberately not `Clone`: two handles with the same token would
/// be indistinguishable on the wire.
#[derive(Debug, PartialEq, Eq, Hash, CopyGetters, derive_more::Display)]
#[display("session {token:#x}")]
pub struct SessionHandle {
    #[getset(get_copy = "pub")]
    /// Caller-stable token the wire identifier is derived from.
    token: u64,
}

impl SessionHandle {
    /// Creates a handle with a fresh process-unique token.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            token: NEXT_TOKEN.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Creates a handle around a token chosen by the caller, e.g. the address of
    /// the session object that owns it.
    #[must_use]
    pub const fn with_token(token: u64) -> Self {
        Self { token }
    }
}

hal_enum! {
    /// Session command that carries nothing but the session identifier.
    pub enum SessionCommand {
        /// Tear the session down.
        End = 0x1,
        /// Abort the session without draining.
        Abort = 0x2,
        /// Allocate hardware resources for the session.
        LoadResources = 0x3,
        /// Free the hardware resources of the session.
        ReleaseResources = 0x4,
        /// Start processing.
        Start = 0x5,
        /// Stop processing.
        Stop = 0x6,
        /// Suspend processing.
        Suspend = 0x7,
        /// Resume a suspended session.
        Resume = 0x8,
        /// Continue after a reconfiguration event.
        Continue = 0x9,
        /// Wait until all queued commands have been processed.
        Sync = 0xa,
    }
}
