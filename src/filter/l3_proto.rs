//! Network protocol filter provider.

use super::normalizer::Vocabulary;
use super::vocabulary_provider::{Dimension, VocabularyFilterProvider};

const L3_PROTO_IPV4_FILTER: &str = "ip";
const L3_PROTO_IPV6_FILTER: &str = "ip6";

/// IP versions by name, version number, and EtherType.
static L3_PROTO: Vocabulary = Vocabulary {
    dimension: "L3Proto",
    default_expression: "ip or ip6",
    synonyms: &["ALL", "ANY"],
    // 4 + 6
    combined_codes: &["10"],
    aliases: &[
        ("ip", L3_PROTO_IPV4_FILTER),
        ("ipv4", L3_PROTO_IPV4_FILTER),
        ("4", L3_PROTO_IPV4_FILTER),
        ("0x0800", L3_PROTO_IPV4_FILTER),
        ("ip6", L3_PROTO_IPV6_FILTER),
        ("ipv6", L3_PROTO_IPV6_FILTER),
        ("6", L3_PROTO_IPV6_FILTER),
        ("0x86dd", L3_PROTO_IPV6_FILTER),
        ("0x86DD", L3_PROTO_IPV6_FILTER),
    ],
    join: " or ",
};

/// Marker for the network protocol dimension.
#[derive(Debug, Clone, Copy)]
pub struct L3Proto;

impl Dimension for L3Proto {
    fn vocabulary() -> &'static Vocabulary {
        &L3_PROTO
    }
}

/// Selects IPv4 and/or IPv6 traffic.
pub type L3ProtoFilterProvider = VocabularyFilterProvider<L3Proto>;
