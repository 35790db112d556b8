//! Canonical capture filter construction.
//!
//! Turns loosely formatted per-dimension selectors such as `tcp`, `17`,
//! `0x06,udp` or `ALL` into BPF filter fragments and merges them into an
//! accumulated filter expression.
//!
//! ```
//! use std::sync::Arc;
//! use tcpdumpw::filter::{FilterContext, FilterProvider, L4ProtoFilterProvider, PcapFilter};
//! use tcpdumpw::FilterMode;
//!
//! let provider = L4ProtoFilterProvider::new(Arc::new(PcapFilter::new("0x06,icmp")));
//! assert_eq!(provider.describe(), "L4Proto[0x06,icmp] => (tcp)");
//!
//! let filter = provider.apply(&FilterContext::default(), Some("port 443"), FilterMode::And);
//! assert_eq!(filter.unwrap().as_str(), "(port 443) and (tcp)");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;

pub use config::Config;
pub use domain::{FilterExpression, FilterMode, RawSelector};
pub use error::FilterError;
pub use filter::{FilterContext, FilterProvider};
