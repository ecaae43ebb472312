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
//! [gelf-client](crate) errors

use backtrace::Backtrace;

/// [gelf-client](crate) error type
///
/// [gelf-client](crate) eschews libraries like [thiserror], [anyhow] & [Snafu] in favor of a
/// straightforward enumeration with a few match arms chosen on the basis of what the caller will
/// need to respond. Every failure leaves the [`Client`](crate::client::Client) usable for the next
/// event; nothing is retried.
///
/// [thiserror]: https://docs.rs/thiserror
/// [anyhow]: https://docs.rs/anyhow
/// [Snafu]: https://docs.rs/snafu/latest/snafu
#[non_exhaustive]
pub enum Error {
    /// The configured endpoint could not be resolved to a socket address; nothing was sent
    AddressResolution {
        addr: String,
        source: std::io::Error,
        back: Backtrace,
    },
    /// The event could not be encoded as a GELF JSON object; nothing was sent
    Encoding {
        source: serde_json::Error,
        back: Backtrace,
    },
    /// Failed to discover a name for this host
    NoHostname {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        back: Backtrace,
    },
    /// A tracing Event had no message field
    NoMessageField {
        name: &'static str,
        back: Backtrace,
    },
    /// Failed to acquire a socket, or to write the datagram
    Transport {
        source: std::io::Error,
        back: Backtrace,
    },
}

impl std::fmt::Display for Error {
    // `Error` is non-exhaustive so that adding variants won't be a breaking change to our
    // callers. That means the compiler won't catch us if we miss a variant here, so we
    // always include a `_` arm.
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::AddressResolution { addr, source, .. } => {
                write!(f, "Couldn't resolve GELF endpoint '{}': {}", addr, source)
            }
            Error::Encoding { source, .. } => {
                write!(f, "Couldn't encode the event as GELF: {}", source)
            }
            Error::NoHostname { source, .. } => {
                write!(f, "Couldn't discover a hostname for this host: {}", source)
            }
            Error::NoMessageField { name, .. } => write!(
                f,
                "Event '{}' had no message field, and so was not forwarded to a GELF collector",
                name
            ),
            Error::Transport { source, .. } => write!(f, "Transport error: {}", source),
            _ => write!(f, "Other gelf-client error"),
        }
    }
}

impl std::fmt::Debug for Error {
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::AddressResolution { back, .. } => write!(f, "{}\n{:?}", self, back),
            Error::Encoding { back, .. } => write!(f, "{}\n{:?}", self, back),
            Error::NoHostname { back, .. } => write!(f, "{}\n{:?}", self, back),
            Error::NoMessageField { back, .. } => write!(f, "{}\n{:?}", self, back),
            Error::Transport { back, .. } => write!(f, "{}\n{:?}", self, back),
            err => write!(f, "gelf-client error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::AddressResolution { source, .. } => Some(source),
            Error::Encoding { source, .. } => Some(source),
            Error::NoHostname { source, .. } => Some(source.as_ref()),
            Error::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
