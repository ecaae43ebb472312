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
//! Send structured log events to a [Graylog] collector in the [GELF] wire format over UDP.
//!
//! [Graylog]: https://graylog.org
//! [GELF]: https://go2docs.graylog.org/current/getting_in_log_data/gelf.html
//!
//! # Introduction
//!
//! GELF (the Graylog Extended Log Format) is a JSON schema for log events: a handful of fixed
//! fields (`version`, `host`, `message`, `timestamp`, `level` & `facility`) plus any number of
//! "additional" fields, each named with a leading underscore. Collectors commonly accept one
//! event per UDP datagram, terminated by a newline & a null byte.
//!
//! Getting an event onto the wire happens in three steps:
//!
//! 1. normalizing the [`LogEvent`]: filling-in `version`, `host` & `timestamp` if the caller
//!    left them unset
//! 2. encoding it: the [`Gelf`] [`GelfFormatter`] writes the fixed fields, merges-in the
//!    additional fields & appends the framing bytes
//! 3. sending it: the [`UdpTransport`] [`Transport`] writes a single datagram to the collector
//!
//! A [`Client`] strings these together. Each send is a single, best-effort attempt; there is no
//! chunking, compression, retry or acknowledgement.
//!
//! [`LogEvent`]: crate::message::LogEvent
//! [`Gelf`]: crate::gelf::Gelf
//! [`GelfFormatter`]: crate::formatter::GelfFormatter
//! [`UdpTransport`]: crate::transport::UdpTransport
//! [`Transport`]: crate::transport::Transport
//! [`Client`]: crate::client::Client
//!
//! # Usage
//!
//! ```no_run
//! use gelf_client::client::Client;
//! use gelf_client::config::ClientConfig;
//! use gelf_client::facility::{Facility, Level};
//! use gelf_client::message::LogEvent;
//!
//! // The default configuration sends to port 12201 on the localhost.
//! let client = Client::new(
//!     ClientConfig::builder()
//!         .endpoint("graylog.example.com:12201")
//!         .build(),
//! );
//!
//! client
//!     .send_message(
//!         LogEvent::new("disk full")
//!             .level(Level::ERROR)
//!             .facility(Facility::LOCAL0)
//!             .extra("disk", "/dev/sda1"),
//!     )
//!     .unwrap();
//! ```
//!
//! will send a datagram like:
//!
//! ```text
//! {"version":"1.1","host":"bree","message":"disk full","timestamp":1660000000,"level":3,"facility":"local0","_disk":"/dev/sda1"}
//! ```
//!
//! followed by `\n\0`.
//!
//! [`tracing`] users can instead install the [`Layer`] in their subscriber:
//!
//! [`tracing`]: https://docs.rs/tracing/latest/tracing/index.html
//! [`Layer`]: crate::layer::Layer
//!
//! ```no_run
//! use tracing::info;
//! use gelf_client::config::ClientConfig;
//! use gelf_client::layer::Layer;
//! use tracing_subscriber::registry::Registry;
//! use tracing_subscriber::layer::SubscriberExt; // Needed to get `with()`
//!
//! let subscriber = Registry::default()
//!     .with(Layer::with_config(ClientConfig::default()).with_facility("local0"));
//! let _guard = tracing::subscriber::set_default(subscriber);
//!
//! info!(user = "alice", "Hello, world!");
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod facility;
pub mod formatter;
pub mod gelf;
pub mod layer;
pub mod message;
pub mod transport;

/// The [`tracing`] target of this crate's own diagnostics; [`layer::Layer`] won't forward these.
///
/// [`tracing`]: https://docs.rs/tracing/latest/tracing/index.html
pub const LOG_TARGET: &str = "gelf_client";
