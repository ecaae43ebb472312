// Copyright (C) 2026 Michael Herstine <sp1ff@pobox.com>
//
// This file is part of gelf-client.
//
// gelf-client is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// gelf-client is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with gelf-client.  If
// not, see <http://www.gnu.org/licenses/>.

//! The GELF [`Client`]: normalize, encode & send.

use crate::{
    config::ClientConfig,
    error::Result,
    formatter::GelfFormatter,
    gelf::Gelf,
    message::{Hostname, LogEvent},
    transport::{Transport, UdpTransport},
    LOG_TARGET,
};

use tracing::debug;

/// Sends [`LogEvent`]s to a GELF collector.
///
/// A [`Client`] is parameterized by the means of encoding events (`F`) & of transporting the
/// results (`T`); by default, GELF JSON over UDP. Everything a client holds is fixed at
/// construction, so one client may be shared freely between threads (so long as `F` & `T`
/// allow it); each send is independent of every other.
pub struct Client<F: GelfFormatter = Gelf, T: Transport = UdpTransport> {
    config: ClientConfig,
    hostname: Hostname,
    formatter: F,
    transport: T,
}

impl Client<Gelf, UdpTransport> {
    /// Construct a [`Client`] that will send GELF JSON via UDP to `config.endpoint()`.
    ///
    /// The hostname is discovered here, once; see [`Hostname::default`].
    pub fn new(config: ClientConfig) -> Self {
        let transport = UdpTransport::new(config.endpoint());
        Client {
            config,
            hostname: Hostname::default(),
            formatter: Gelf,
            transport,
        }
    }
}

impl std::default::Default for Client<Gelf, UdpTransport> {
    /// A [`Client`] sending to 127.0.0.1:12201
    fn default() -> Self {
        Client::new(ClientConfig::default())
    }
}

impl<F: GelfFormatter, T: Transport> Client<F, T> {
    /// Construct a [`Client`] with custom inners
    ///
    /// `hostname` is used as given; no discovery is attempted. Pass [`Hostname::default()`] to
    /// get the same behavior as [`Client::new`].
    pub fn with_transport(
        config: ClientConfig,
        hostname: Hostname,
        formatter: F,
        transport: T,
    ) -> Self {
        Client {
            config,
            hostname,
            formatter,
            transport,
        }
    }
    /// Use `hostname` in place of the current one
    pub fn with_hostname(mut self, hostname: Hostname) -> Self {
        self.hostname = hostname;
        self
    }
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }
    /// Normalize `event` & encode it into a payload ready for the wire.
    pub fn prepare(&self, event: LogEvent) -> Result<F::Output> {
        self.formatter
            .format(&event.normalize(&self.hostname))
            .map_err(|err| {
                debug!(target: LOG_TARGET, "Error preparing GELF message: {}", err);
                err
            })
    }
    /// Send `event` to the collector; return the number of bytes written.
    ///
    /// This is a single, best-effort attempt; if `event` can't be encoded, nothing is sent at
    /// all.
    pub fn send_message(&self, event: LogEvent) -> Result<usize> {
        let payload = self.prepare(event)?;
        if payload.len() > self.config.max_chunk_size() {
            // TODO(sp1ff): implement GELF chunking for payloads this size
            debug!(
                target: LOG_TARGET,
                "GELF payload of {} bytes exceeds the chunk size of {}; sending it whole",
                payload.len(),
                self.config.max_chunk_size()
            );
        }
        self.transport.send(&payload)
    }
}
