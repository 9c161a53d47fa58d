/// Packetization revisions and their operation tables.
pub mod driver;

pub(crate) mod hfi;
pub(crate) mod packet;
pub(crate) mod property;
/// Wire identifiers of sessions.
pub mod session_id;
pub(crate) mod translate;
