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

//! [GELF] 1.1 payload encoding
//!
//! [GELF]: https://go2docs.graylog.org/current/getting_in_log_data/gelf.html
//!
//! [`Gelf`] is a [`GelfFormatter`] that produces a single JSON object per event, followed by the
//! two framing bytes `\n` & `\0`:
//!
//! ```text
//! {"version":"1.1","host":"bree","message":"disk full","timestamp":1660000000,"level":3,"facility":"local0","_disk":"/dev/sda1"}\n\0
//! ```

use crate::{
    error::{Error, Result},
    formatter::GelfFormatter,
    message::LogEvent,
};

use backtrace::Backtrace;
use serde_json::{Map, Value};

use std::collections::BTreeMap;

/// Written after the JSON object to mark the end of the message
pub const TERMINATOR: &[u8] = b"\n\0";

/// A formatter that produces GELF JSON payloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gelf;

/// Merge `extra` into the encoded fixed fields, each under its key with a leading underscore.
///
/// `fixed` must be a JSON object; anything else is reported as [`Error::Encoding`]. Since every
/// fixed field name lacks the leading underscore, extra fields can never clobber one.
fn envelope(fixed: Value, extra: &BTreeMap<String, String>) -> Result<Map<String, Value>> {
    let mut map = match fixed {
        Value::Object(map) => map,
        other => {
            use serde::ser::Error as _;
            return Err(Error::Encoding {
                source: serde_json::Error::custom(format!(
                    "expected the event to encode to a JSON object, got {}",
                    other
                )),
                back: Backtrace::new(),
            });
        }
    };
    for (key, value) in extra {
        map.insert(format!("_{}", key), Value::String(value.clone()));
    }
    Ok(map)
}

impl GelfFormatter for Gelf {
    type Output = Vec<u8>;
    fn format(&self, event: &LogEvent) -> Result<Vec<u8>> {
        let fixed = serde_json::to_value(event).map_err(|err| Error::Encoding {
            source: err,
            back: Backtrace::new(),
        })?;
        let mut buf = serde_json::to_vec(&envelope(fixed, &event.extra)?).map_err(|err| {
            Error::Encoding {
                source: err,
                back: Backtrace::new(),
            }
        })?;

        // JSON escapes every control character inside strings, so neither of these can appear
        // in `buf` before this point.
        use bytes::BufMut;
        buf.put_slice(TERMINATOR);
        Ok(buf)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    use crate::facility::{Facility, Level};
    use crate::message::Hostname;

    fn parse(payload: &[u8]) -> Map<String, Value> {
        assert!(payload.ends_with(TERMINATOR));
        let body = &payload[..payload.len() - TERMINATOR.len()];
        match serde_json::from_slice(body).unwrap() {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn golden() {
        let event = LogEvent::new("disk full")
            .host("bree")
            .timestamp(1_660_000_000.0)
            .level(Level::ERROR)
            .facility(Facility::LOCAL0)
            .extra("disk", "/dev/sda1")
            .normalize(&Hostname::new("unused"));
        let payload = Gelf.format(&event).unwrap();

        let mut golden = Vec::from(
            "{\"version\":\"1.1\",\"host\":\"bree\",\"message\":\"disk full\",\"timestamp\":1660000000,\"level\":3,\"facility\":\"local0\",\"_disk\":\"/dev/sda1\"}",
        );
        golden.push(b'\n');
        golden.push(0u8);
        assert_eq!(payload, golden);
    }

    #[test]
    fn extra_fields_are_prefixed() {
        let event = LogEvent::new("login")
            .extra("user", "alice")
            .extra("requestId", "42")
            .normalize(&Hostname::new("bree"));
        let map = parse(&Gelf.format(&event).unwrap());

        assert_eq!(map["_user"], "alice");
        assert_eq!(map["_requestId"], "42");
        for name in ["extra", "extraFields", "user", "requestId"] {
            assert!(map.get(name).is_none(), "unexpected field {}", name);
        }
        assert_eq!(map.len(), 8);
    }

    #[test]
    fn no_extra_fields() {
        let event = LogEvent::new("quiet").normalize(&Hostname::new("bree"));
        let map = parse(&Gelf.format(&event).unwrap());
        assert_eq!(map.len(), 6);
        assert!(map.keys().all(|k| !k.starts_with('_')));
    }

    #[test]
    fn fixed_fields_round_trip() {
        let event = LogEvent::new("Hello, 世界!")
            .facility("payments")
            .level(Level::NOTICE)
            .timestamp(1_660_000_000.125)
            .normalize(&Hostname::new("bree"));
        let map = parse(&Gelf.format(&event).unwrap());

        assert_eq!(map["version"], Value::from(event.version.clone()));
        assert_eq!(map["host"], Value::from(event.host.clone()));
        assert_eq!(map["message"], Value::from(event.message.clone()));
        assert_eq!(map["timestamp"].as_f64(), Some(event.timestamp));
        assert_eq!(map["level"].as_i64(), Some(event.level as i64));
        assert_eq!(map["facility"], Value::from(event.facility.clone()));
    }

    #[test]
    fn framing_bytes_only_at_the_end() {
        let event = LogEvent::new("line one\nline two\0and more")
            .extra("payload", "\n\0")
            .normalize(&Hostname::new("bree"));
        let payload = Gelf.format(&event).unwrap();

        assert!(payload.ends_with(b"\n\0"));
        let body = &payload[..payload.len() - 2];
        assert!(!body.contains(&b'\n'));
        assert!(!body.contains(&0u8));

        let map = parse(&payload);
        assert_eq!(map["message"], "line one\nline two\0and more");
        assert_eq!(map["_payload"], "\n\0");
    }

    #[test]
    fn malformed_encoding_is_rejected() {
        let err = envelope(Value::from("not an object"), &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));

        let err = envelope(Value::Null, &BTreeMap::new()).unwrap_err();
        assert!(format!("{}", err).contains("JSON object"));
    }

    #[test]
    fn non_finite_timestamps_are_rejected() {
        for ts in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let event = LogEvent::new("when?")
                .timestamp(ts)
                .normalize(&Hostname::new("bree"));
            let err = Gelf.format(&event).unwrap_err();
            assert!(matches!(err, Error::Encoding { .. }), "{} encoded", ts);
            assert!(format!("{}", err).contains("not a finite number"));
        }
    }
}
