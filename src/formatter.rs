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

//! GELF formatting primitives.
//!
//! This module defines the [`GelfFormatter`] trait.

use crate::error::Result;
use crate::message::LogEvent;

use std::ops::Deref;

/// Operations all formatters must support
/// ======================================
///
/// # Introduction
///
/// Sending an event to a GELF collector occurs in three parts:
///
/// 1. normalizing the [`LogEvent`] (filling-in the fields the caller left unset)
///
/// 2. encoding it into a datagram payload the collector will accept
///
/// 3. transporting that payload to the collector
///
/// [`GelfFormatter`] implements step 2: given a normalized [`LogEvent`], produce a complete,
/// framed payload.
///
/// # Design
///
/// The associated type `Output` is constrained only to be dereferenceable to a slice of `u8`, so
/// that the [`Transport`] implementation can deal with it; implementations are free to hand back
/// whatever buffer type is convenient.
///
/// [`Transport`]: crate::transport::Transport
pub trait GelfFormatter {
    type Output: Deref<Target = [u8]>;
    fn format(&self, event: &LogEvent) -> Result<Self::Output>;
}
