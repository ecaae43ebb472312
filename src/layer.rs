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

//! A [`tracing-subscriber`] [`Layer`] that forwards [`tracing`] [`Event`]s to a GELF collector.
//!
//! [`tracing-subscriber`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/index.html
//! [`Layer`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/trait.Layer.html
//! [`tracing`]: https://docs.rs/tracing/latest/tracing/index.html
//! [`Event`]: https://docs.rs/tracing/0.1.35/tracing/struct.Event.html
//!
//! Each [`Event`] becomes one [`LogEvent`]: its "message" field becomes the GELF `message`, every
//! other field becomes an additional (underscore-prefixed) field, and its level is mapped onto a
//! GELF [`Level`].

use crate::{
    client::Client,
    config::ClientConfig,
    error::{Error, Result},
    facility::Level,
    formatter::GelfFormatter,
    gelf::Gelf,
    message::LogEvent,
    transport::{Transport, UdpTransport},
    LOG_TARGET,
};

use backtrace::Backtrace;
use tracing::Event;
use tracing_subscriber::layer::Context;

use std::collections::BTreeMap;

fn default_level_mapping(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::TRACE | tracing::Level::DEBUG => Level::DEBUG,
        tracing::Level::INFO => Level::INFO,
        tracing::Level::WARN => Level::WARNING,
        tracing::Level::ERROR => Level::ERROR,
    }
}

/// A [`tracing-subscriber`]-compliant [`Layer`] implementation that will send [`Event`]s to a GELF
/// collector via a [`Client`].
///
/// [`tracing-subscriber`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/index.html
/// [`Layer`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/trait.Layer.html
/// [`Event`]: https://docs.rs/tracing/0.1.35/tracing/struct.Event.html
pub struct Layer<F: GelfFormatter = Gelf, T: Transport = UdpTransport> {
    client: Client<F, T>,
    facility: String,
    map_level: Box<dyn Fn(&tracing::Level) -> Level + Send + Sync>,
    include_target: bool,
    include_module: bool,
    include_source_location: bool,
}

impl Layer<Gelf, UdpTransport> {
    /// Construct a [`Layer`] that will send GELF JSON via UDP to `config.endpoint()`
    pub fn with_config(config: ClientConfig) -> Self {
        Layer::new(Client::new(config))
    }
}

impl std::default::Default for Layer<Gelf, UdpTransport> {
    /// A [`Layer`] sending GELF JSON via UDP to port 12201 on localhost
    fn default() -> Self {
        Layer::with_config(ClientConfig::default())
    }
}

impl<F: GelfFormatter, T: Transport> Layer<F, T> {
    pub fn new(client: Client<F, T>) -> Self {
        Layer {
            client,
            facility: String::new(),
            map_level: Box::new(default_level_mapping),
            include_target: false,
            include_module: false,
            include_source_location: false,
        }
    }
    /// Stamp every event with `facility`
    pub fn with_facility<S: Into<String>>(mut self, facility: S) -> Self {
        self.facility = facility.into();
        self
    }
    pub fn with_level_mapping<M>(mut self, map_level: M) -> Self
    where
        M: Fn(&tracing::Level) -> Level + Send + Sync + 'static,
    {
        self.map_level = Box::new(map_level);
        self
    }
    /// Send the event's target as `_target`, unless the event carries a field named `target`
    pub fn with_tracing_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }
    /// Send the event's module path as `_module`, unless the event carries a field named `module`
    pub fn with_tracing_module(mut self, include: bool) -> Self {
        self.include_module = include;
        self
    }
    /// Send the event's source file & line as `_file` & `_line`
    ///
    /// As with the other metadata options, an event field of the same name takes precedence.
    pub fn with_tracing_source_location(mut self, include: bool) -> Self {
        self.include_source_location = include;
        self
    }
    fn to_log_event(&self, event: &Event<'_>) -> Result<LogEvent> {
        let meta = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        // Fields recorded on the event win over metadata of the same name
        let mut extra = visitor.fields;
        if self.include_target {
            extra
                .entry("target".to_string())
                .or_insert_with(|| meta.target().to_string());
        }
        if self.include_module {
            if let Some(module) = meta.module_path() {
                extra
                    .entry("module".to_string())
                    .or_insert_with(|| module.to_string());
            }
        }
        if self.include_source_location {
            if let Some(file) = meta.file() {
                extra
                    .entry("file".to_string())
                    .or_insert_with(|| file.to_string());
            }
            if let Some(line) = meta.line() {
                extra
                    .entry("line".to_string())
                    .or_insert_with(|| line.to_string());
            }
        }

        let message = visitor.message.ok_or_else(|| Error::NoMessageField {
            name: meta.name(),
            back: Backtrace::new(),
        })?;
        Ok(LogEvent {
            message,
            level: (self.map_level)(meta.level()).into(),
            facility: self.facility.clone(),
            extra,
            ..Default::default()
        })
    }
}

/// Collects the "message" field apart from all the others.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: BTreeMap<String, String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(field.name().to_string(), value.to_string());
        }
    }
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        // The tracing macros "pre-format" the `message` field into a `std::fmt::Arguments`,
        // whose debug format has no enclosing double-quotes.
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(field.name().to_string(), format!("{:?}", value));
        }
    }
}

impl<S, F, T> tracing_subscriber::layer::Layer<S> for Layer<F, T>
where
    S: tracing::Subscriber,
    F: GelfFormatter + 'static,
    T: Transport + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Our own diagnostics would just come right back around
        if event.metadata().target() == LOG_TARGET {
            return;
        }
        self.to_log_event(event)
            .and_then(|ev| self.client.send_message(ev))
            .map(|_| ())
            .unwrap_or_else(|err| {
                ::tracing::error!(target: LOG_TARGET, "GELF layer failed: {}", err);
            });
    }
}
