//! Country lookup for caller IP addresses.
//!
//! Talks to the ip-api.com JSON endpoint, short-circuits private and loopback
//! addresses without a network call, and caches successful lookups per IP.

pub mod client;
pub mod error;
pub mod privacy;
pub mod service;
pub mod types;

pub use client::GeoIpClient;
pub use error::GeoIpError;
pub use privacy::{client_ip, is_private_ip};
pub use service::IpLocationService;
pub use types::IpLocation;
