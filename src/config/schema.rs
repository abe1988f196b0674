//! Configuration schema definitions.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::http::throttle::Throttle;

/// Root configuration for the mock server.
///
/// Only `port` and `throttle` must be present in the file; unknown keys are
/// ignored so existing config files with extra entries keep working.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MockConfig {
    /// TCP port to listen on (1-65535).
    pub port: u16,

    /// Delay applied before every response, in milliseconds.
    pub throttle: u64,

    /// Interface to bind (e.g., "0.0.0.0" or "127.0.0.1"). Must be an IP literal.
    #[serde(default = "default_host")]
    pub host: IpAddr,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

impl MockConfig {
    /// Config with the default host.
    pub fn new(port: u16, throttle: u64) -> Self {
        Self {
            port,
            throttle,
            host: default_host(),
        }
    }

    /// Resolve the address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Response delay derived from `throttle`.
    pub fn throttle(&self) -> Throttle {
        Throttle::from_millis(self.throttle)
    }
}
