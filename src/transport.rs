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

//! The GELF transport layer.
//!
//! This module defines the [`Transport`] trait that all implementations must support, as well
//! as the UDP implementation.
//!
//! # Examples
//!
//! To send GELF messages over UDP to a collector listening on port 12201 (the default) on
//! localhost:
//!
//! ```rust
//! use gelf_client::transport::UdpTransport;
//! let transpo = UdpTransport::local();
//! ```
//!
//! Resolution is deferred until the first send, so a bad address only shows up then:
//!
//! ```rust
//! use gelf_client::transport::{Transport, UdpTransport};
//! let transpo = UdpTransport::new("some-host.domain.invalid:12201");
//! assert!(transpo.send(b"{}\n\0").is_err()); // no such host, after all
//! ```

use crate::config::DEFAULT_ENDPOINT;
use crate::error::{Error, Result};

use backtrace::Backtrace;

use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                      transport mechanisms                                      //
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Operations all transport layers must support.
pub trait Transport {
    /// Send a slice of bytes on this transport mechanism, in one attempt; return the number of
    /// bytes written.
    fn send(&self, buf: &[u8]) -> Result<usize>;
}

/// Sending GELF messages via UDP datagrams.
///
/// Nothing is held open between sends: each call to [`Transport::send`] resolves the endpoint,
/// binds an ephemeral socket, writes one datagram & closes the socket again. A short write is not
/// detected.
#[derive(Clone, Debug)]
pub struct UdpTransport {
    endpoint: String,
}

impl UdpTransport {
    /// Construct a [`Transport`] implementation via UDP at `endpoint` ("host:port").
    pub fn new<S: Into<String>>(endpoint: S) -> UdpTransport {
        UdpTransport {
            endpoint: endpoint.into(),
        }
    }
    /// Construct a [`Transport`] implementation via UDP at 127.0.0.1:12201
    pub fn local() -> UdpTransport {
        UdpTransport::new(DEFAULT_ENDPOINT)
    }
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
    fn resolve(&self) -> Result<SocketAddr> {
        self.endpoint
            .to_socket_addrs()
            .map_err(|err| Error::AddressResolution {
                addr: self.endpoint.clone(),
                source: err,
                back: Backtrace::new(),
            })?
            .next()
            .ok_or_else(|| Error::AddressResolution {
                addr: self.endpoint.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AddrNotAvailable,
                    "no addresses found",
                ),
                back: Backtrace::new(),
            })
    }
}

impl Transport for UdpTransport {
    fn send(&self, buf: &[u8]) -> Result<usize> {
        let addr = self.resolve()?;
        // Bind to any available port, in the same address family as the collector...
        let local = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(local).map_err(|err| Error::Transport {
            source: err,
            back: Backtrace::new(),
        })?;
        // and connect to the collector at `addr`:
        socket.connect(addr).map_err(|err| Error::Transport {
            source: err,
            back: Backtrace::new(),
        })?;
        socket.send(buf).map_err(|err| Error::Transport {
            source: err,
            back: Backtrace::new(),
        })
    }
}

/// [`Transport`] test doubles
#[cfg(test)]
pub(crate) mod testing {

    use super::*;

    use std::sync::{Arc, Mutex};

    /// Keeps every payload it is asked to send; clones share the same record.
    #[derive(Clone, Default)]
    pub struct RecordingTransport {
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl RecordingTransport {
        pub fn sent(&self) -> Vec<Vec<u8>> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, buf: &[u8]) -> Result<usize> {
            self.sent.lock().unwrap().push(buf.to_vec());
            Ok(buf.len())
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    use std::time::Duration;

    #[test]
    fn sends_one_datagram() {
        let collector = UdpSocket::bind("127.0.0.1:0").unwrap();
        collector
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let transpo = UdpTransport::new(collector.local_addr().unwrap().to_string());

        assert_eq!(transpo.send(b"Hello, world!").unwrap(), 13);
        assert_eq!(transpo.send(b"Hello, \xe4\xb8\x96\xe7\x95\x8c!").unwrap(), 14);

        let mut buf = [0u8; 64];
        let (n, _) = collector.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"Hello, world!");
        let (n, _) = collector.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], "Hello, 世界!".as_bytes());
    }

    #[test]
    fn unresolvable_endpoints() {
        let err = UdpTransport::new("no port here").send(b"x").unwrap_err();
        assert!(matches!(err, Error::AddressResolution { .. }));

        let err = UdpTransport::new("127.0.0.1:not-a-port").send(b"x").unwrap_err();
        assert!(matches!(err, Error::AddressResolution { .. }));
    }

    #[test]
    fn oversized_datagram() {
        // Larger than any UDP payload can be
        let buf = vec![b'x'; 70_000];
        let err = UdpTransport::new("127.0.0.1:12201").send(&buf).unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
