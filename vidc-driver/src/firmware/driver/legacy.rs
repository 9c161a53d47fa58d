use super::PacketizationOps;
use crate::firmware::{
    packet::{
        session_cmd, session_etb_decoder, session_etb_encoder, session_flush, session_ftb,
        session_get_property, session_get_seq_hdr, session_init, session_parse_seq_header,
        session_release_buffers, session_set_buffers, ssr_cmd, sys_coverage_config,
        sys_debug_config, sys_idle_indicator, sys_image_version, sys_init, sys_pc_prep, sys_ping,
        sys_power_control, sys_release_resource, sys_set_resource,
    },
    property::session_set_property,
};

/// The complete table every later revision starts from.
pub(super) const OPS: PacketizationOps = PacketizationOps {
    sys_init,
    sys_pc_prep,
    sys_idle_indicator,
    sys_power_control,
    sys_set_resource,
    sys_release_resource,
    sys_debug_config,
    sys_coverage_config,
    sys_ping,
    sys_image_version,
    ssr_cmd,
    session_init,
    session_cmd,
    session_set_buffers,
    session_release_buffers,
    session_etb_decoder,
    session_etb_encoder,
    session_ftb,
    session_parse_seq_header,
    session_get_seq_hdr,
    session_flush,
    session_get_property,
    session_set_property,
};
