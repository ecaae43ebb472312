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

//! Client configuration

/// Graylog's conventional GELF UDP input
pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:12201";

/// A payload size that fits in a single datagram on most networks
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1420;

/// Where & how a [`Client`](crate::client::Client) sends its events.
///
/// Once handed to a client, the configuration is never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    max_chunk_size: usize,
}

impl std::default::Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder {
            imp: ClientConfig::default(),
        }
    }
    /// The collector's address, as "host:port"; resolved anew on every send
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
    /// The payload size beyond which GELF calls for chunking.
    ///
    /// Chunking is not implemented: payloads larger than this are still sent whole, in a single
    /// datagram. The value is only used to flag such payloads in the client's own diagnostics.
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }
}

pub struct ClientConfigBuilder {
    imp: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.imp.endpoint = endpoint.into();
        self
    }
    pub fn max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.imp.max_chunk_size = max_chunk_size;
        self
    }
    pub fn build(self) -> ClientConfig {
        self.imp
    }
}
