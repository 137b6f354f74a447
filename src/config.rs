use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

// DEFAULT_SERVER_ADDR is Google's public resolver.
pub const DEFAULT_SERVER_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53);

// Config is used to configure a DNS client connection.
#[derive(Debug, Clone)]
pub struct Config {
    // server is the resolving server queries are sent to.
    pub server: SocketAddr,

    // local_addr is where the client socket binds; port 0 picks an
    // ephemeral port.
    pub local_addr: SocketAddr,

    // timeout bounds the wait for a response. Zero selects the default.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: DEFAULT_SERVER_ADDR,
            local_addr: SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), 0),
            timeout: Duration::from_secs(0),
        }
    }
}
