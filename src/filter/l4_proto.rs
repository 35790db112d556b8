//! Transport protocol filter provider.

use super::normalizer::Vocabulary;
use super::vocabulary_provider::{Dimension, VocabularyFilterProvider};

const L4_PROTO_TCP_FILTER: &str = "tcp";
const L4_PROTO_UDP_FILTER: &str = "udp";

/// Transport protocols by name, IANA decimal number, and hex number.
static L4_PROTO: Vocabulary = Vocabulary {
    dimension: "L4Proto",
    default_expression: "tcp or udp",
    synonyms: &["ALL", "ANY"],
    // tcp(6) + udp(17), written both ways
    combined_codes: &["23", "0x17"],
    aliases: &[
        ("tcp", L4_PROTO_TCP_FILTER),
        ("6", L4_PROTO_TCP_FILTER),
        ("0x06", L4_PROTO_TCP_FILTER),
        ("udp", L4_PROTO_UDP_FILTER),
        ("17", L4_PROTO_UDP_FILTER),
        ("0x11", L4_PROTO_UDP_FILTER),
    ],
    join: " or ",
};

/// Marker for the transport protocol dimension.
#[derive(Debug, Clone, Copy)]
pub struct L4Proto;

impl Dimension for L4Proto {
    fn vocabulary() -> &'static Vocabulary {
        &L4_PROTO
    }
}

/// Selects TCP and/or UDP traffic.
///
/// Accepts a comma-separated list such as `tcp`, `17`, or `0x06,udp`.
pub type L4ProtoFilterProvider = VocabularyFilterProvider<L4Proto>;
