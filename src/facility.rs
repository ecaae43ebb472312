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
//! GELF severity level & facility definitions.
//!
//! GELF borrows its `level` field from syslog, so [`Level`] replicates the eight severities of
//! `<syslog.h>`. The `facility` field, on the other hand, is free text on the wire; [`Facility`]
//! just names the eight "local use" labels that most deployments settle on.
//!
//! Neither table is consulted when an event is normalized: a [`LogEvent`] carries its level as a
//! plain integer and its facility as a plain string, and out-of-range values go out as given.
//!
//! [`LogEvent`]: crate::message::LogEvent

type StdResult<T, E> = std::result::Result<T, E>;

/// The eight syslog severities, most severe first. The discriminants are the values written to
/// the GELF `level` field.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// system is unusable
    EMERGENCY = 0,
    /// action must be taken immediately
    ALERT = 1,
    /// critical conditions
    CRITICAL = 2,
    /// error conditions
    ERROR = 3,
    /// warning conditions
    WARNING = 4,
    /// normal, but significant condition
    NOTICE = 5,
    /// informational message
    INFO = 6,
    /// debug-level message
    DEBUG = 7,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Level::EMERGENCY => "EMERGENCY",
                Level::ALERT => "ALERT",
                Level::CRITICAL => "CRITICAL",
                Level::ERROR => "ERROR",
                Level::WARNING => "WARNING",
                Level::NOTICE => "NOTICE",
                Level::INFO => "INFO",
                Level::DEBUG => "DEBUG",
            }
        )
    }
}

impl std::convert::From<Level> for i32 {
    fn from(level: Level) -> i32 {
        level as i32
    }
}

/// Facility labels reserved for local use.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facility {
    LOCAL0,
    LOCAL1,
    LOCAL2,
    LOCAL3,
    LOCAL4,
    LOCAL5,
    LOCAL6,
    LOCAL7,
}

impl Facility {
    /// The label as it appears in the GELF `facility` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Facility::LOCAL0 => "local0",
            Facility::LOCAL1 => "local1",
            Facility::LOCAL2 => "local2",
            Facility::LOCAL3 => "local3",
            Facility::LOCAL4 => "local4",
            Facility::LOCAL5 => "local5",
            Facility::LOCAL6 => "local6",
            Facility::LOCAL7 => "local7",
        }
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl std::convert::From<Facility> for String {
    fn from(facility: Facility) -> String {
        facility.as_str().to_string()
    }
}

#[cfg(test)]
mod facility_level_tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(0, Level::EMERGENCY as i32);
        assert_eq!(3, i32::from(Level::ERROR));
        assert_eq!(7, i32::from(Level::DEBUG));
        assert_eq!(format!("{}", Level::WARNING), "WARNING".to_string());

        assert_eq!(Facility::LOCAL0.as_str(), "local0");
        assert_eq!(String::from(Facility::LOCAL7), "local7".to_string());
        assert_eq!(format!("{}", Facility::LOCAL3), "local3".to_string());
        assert_eq!(format!("{:?}", Facility::LOCAL3), "LOCAL3".to_string());
    }
}
