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

//! GELF log events & their normalization.
//!
//! A [`LogEvent`] is built fresh by the caller for each message. Before it is encoded, it is
//! [normalized]: the three GELF fields that must never be empty (`version`, `host` &
//! `timestamp`) are filled-in if the caller left them unset. Nothing else is checked; in
//! particular a `level` outside of 0-7 is passed through as-is.
//!
//! [normalized]: LogEvent::normalize

use crate::error::{Error, Result};
use crate::LOG_TARGET;

use backtrace::Backtrace;
use chrono::Utc;
use serde::{Serialize, Serializer};

use std::collections::BTreeMap;

/// The GELF spec version stamped on events that don't name one
pub const GELF_VERSION: &str = "1.1";

/// What we call ourselves when we can't discover a hostname or IP address
pub const FALLBACK_HOSTNAME: &str = "localhost";

/// The name of the host emitting events, as written to the GELF `host` field.
///
/// This is discovered once, when a [`Client`] is built, and handed to each normalization
/// thereafter.
///
/// [`Client`]: crate::client::Client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    pub fn new<S: Into<String>>(name: S) -> Hostname {
        Hostname(name.into())
    }
    /// Attempt to figure-out a name for this host.
    ///
    /// We first try [gethostname()], and failing that, the IP address of the primary network
    /// interface.
    ///
    /// [gethostname()]: https://man7.org/linux/man-pages/man2/gethostname.2.html
    pub fn discover() -> Result<Hostname> {
        hostname::get()
            .map_err(|err| Error::NoHostname {
                source: Box::new(err),
                back: Backtrace::new(),
            })
            // 👇 :=> Result<Hostname>; an empty hostname is no better than none at all
            .and_then(|hn| {
                let hn = hn.to_string_lossy().into_owned();
                if hn.is_empty() {
                    Err(Error::NoHostname {
                        source: "gethostname() returned an empty name".into(),
                        back: Backtrace::new(),
                    })
                } else {
                    Ok(Hostname(hn))
                }
            })
            .or_else(|_err| {
                local_ip_address::local_ip()
                    .map(|ip| Hostname(ip.to_string()))
                    .map_err(|err| Error::NoHostname {
                        source: Box::new(err),
                        back: Backtrace::new(),
                    })
            })
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::default::Default for Hostname {
    /// Discover the hostname; if that fails, warn & fall back to [`FALLBACK_HOSTNAME`]. This
    /// cannot fail.
    fn default() -> Self {
        Hostname::discover().unwrap_or_else(|err| {
            tracing::warn!(
                target: LOG_TARGET,
                "{}; using '{}' as the GELF host",
                err,
                FALLBACK_HOSTNAME
            );
            Hostname(FALLBACK_HOSTNAME.to_string())
        })
    }
}

impl std::fmt::Display for Hostname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single GELF log event.
///
/// The six "fixed" fields serialize under their GELF names. `extra` is never serialized
/// directly; each entry is instead written as its own top-level field, named with a leading
/// underscore, by the [`Gelf`](crate::gelf::Gelf) formatter.
///
/// ```rust
/// use gelf_client::facility::{Facility, Level};
/// use gelf_client::message::LogEvent;
///
/// let event = LogEvent::new("disk full")
///     .level(Level::ERROR)
///     .facility(Facility::LOCAL0)
///     .extra("disk", "/dev/sda1");
/// assert_eq!(event.level, 3);
/// assert!(event.version.is_empty()); // until normalized
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LogEvent {
    /// GELF spec version; defaults to [`GELF_VERSION`]
    pub version: String,
    /// Emitting host; defaults to the client's [`Hostname`]
    pub host: String,
    pub message: String,
    /// Seconds since the Unix epoch; defaults to "now"
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: f64,
    /// Syslog severity; see [`Level`](crate::facility::Level)
    pub level: i32,
    pub facility: String,
    #[serde(skip)]
    pub extra: BTreeMap<String, String>,
}

/// Write whole-second timestamps as JSON integers, anything else as a float.
///
/// NaN & the infinities have no JSON representation; they are an error rather than `null`.
fn serialize_timestamp<S: Serializer>(
    ts: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if !ts.is_finite() {
        use serde::ser::Error as _;
        return Err(S::Error::custom(format!(
            "timestamp {} is not a finite number",
            ts
        )));
    }
    // 2^53: past this, not every integer is representable as an f64 anyway
    if ts.fract() == 0.0 && ts.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*ts as i64)
    } else {
        serializer.serialize_f64(*ts)
    }
}

impl LogEvent {
    pub fn new<S: Into<String>>(message: S) -> LogEvent {
        LogEvent {
            message: message.into(),
            ..Default::default()
        }
    }
    pub fn version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }
    pub fn timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }
    pub fn level<L: Into<i32>>(mut self, level: L) -> Self {
        self.level = level.into();
        self
    }
    pub fn facility<S: Into<String>>(mut self, facility: S) -> Self {
        self.facility = facility.into();
        self
    }
    /// Add (or replace) an additional field; `key` is written to the wire as `_key`.
    pub fn extra<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
    /// Fill-in any unset GELF fields.
    ///
    /// - an empty `version` becomes [`GELF_VERSION`]
    /// - an empty `host` becomes `hostname`
    /// - a zero `timestamp` becomes the current time, to the second
    ///
    /// Fields the caller has already set are returned unchanged.
    pub fn normalize(mut self, hostname: &Hostname) -> LogEvent {
        if self.version.is_empty() {
            self.version = GELF_VERSION.to_string();
        }
        if self.host.is_empty() {
            self.host = hostname.as_str().to_string();
        }
        if self.timestamp == 0.0 {
            self.timestamp = Utc::now().timestamp() as f64;
        }
        self
    }
}

#[cfg(test)]
mod test {

    use super::*;

    use crate::facility::{Facility, Level};

    #[test]
    fn hostname() {
        // At least _exercise_ discovery; we can't say much about what it finds.
        let x = Hostname::default();
        assert!(!x.as_str().is_empty());

        assert_eq!(Hostname::new("bree.local").to_string(), "bree.local".to_string());
    }

    #[test]
    fn normalize_fills_defaults() {
        let hn = Hostname::new("bree.local");
        let before = Utc::now().timestamp() as f64;
        let event = LogEvent::new("Hello, world!").normalize(&hn);
        let after = Utc::now().timestamp() as f64;

        assert_eq!(event.version, "1.1");
        assert_eq!(event.host, "bree.local");
        assert!(event.timestamp >= before - 2.0 && event.timestamp <= after + 2.0);
        assert_eq!(event.timestamp.fract(), 0.0);
        assert_eq!(event.message, "Hello, world!");
    }

    #[test]
    fn normalize_keeps_caller_fields() {
        let event = LogEvent::new("Hello, 世界!")
            .version("1.0")
            .host("frodo")
            .timestamp(1_234_567_890.5)
            .level(42)
            .facility("not-a-facility")
            .extra("user", "alice");
        let normalized = event.clone().normalize(&Hostname::new("bree.local"));
        assert_eq!(event, normalized);
        // Out-of-range levels pass through untouched
        assert_eq!(normalized.level, 42);
    }

    #[test]
    fn builder_helpers() {
        let event = LogEvent::new("disk full")
            .level(Level::ERROR)
            .facility(Facility::LOCAL0)
            .extra("disk", "/dev/sda1")
            .extra("disk", "/dev/sdb1");
        assert_eq!(event.level, 3);
        assert_eq!(event.facility, "local0");
        assert_eq!(event.extra.len(), 1);
        assert_eq!(event.extra["disk"], "/dev/sdb1");
    }

    #[test]
    fn fixed_fields_only() {
        let value = serde_json::to_value(
            LogEvent::new("x")
                .timestamp(1_660_000_000.0)
                .extra("user", "alice"),
        )
        .unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert!(obj.get("extra").is_none());
        assert!(obj["timestamp"].is_i64());

        let value = serde_json::to_value(LogEvent::new("x").timestamp(1_660_000_000.25)).unwrap();
        assert!(value["timestamp"].is_f64());
        assert_eq!(value["timestamp"].as_f64(), Some(1_660_000_000.25));
    }
}
