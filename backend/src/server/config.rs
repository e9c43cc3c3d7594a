//! HTTP server configuration object and helpers.

use std::net::{Ipv4Addr, SocketAddr};

use backend::domain::{SeedContent, StoreConfigPresence, StoreConnection};

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8000;

/// Resolve the listening port from a raw `PORT` value.
#[must_use]
pub fn port_from(raw: Option<&str>) -> u16 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Everything the server needs to build its per-worker application.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) connection: StoreConnection,
    pub(crate) seed_content: SeedContent,
    pub(crate) presence: StoreConfigPresence,
}

impl ServerConfig {
    /// Listen on all interfaces at `port` with the store disabled.
    #[must_use]
    pub fn new(port: u16, seed_content: SeedContent) -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            connection: StoreConnection::Disabled,
            seed_content,
            presence: StoreConfigPresence::default(),
        }
    }

    /// Attach the document store connection and the settings presence the
    /// diagnostics endpoint reports.
    #[must_use]
    pub fn with_store(mut self, connection: StoreConnection, presence: StoreConfigPresence) -> Self {
        self.connection = connection;
        self.presence = presence;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
