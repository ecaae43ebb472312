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

//! Send a single event straight through a `Client`; takes an optional "host:port".

use gelf_client::{
    client::Client,
    config::ClientConfig,
    facility::{Facility, Level},
    message::LogEvent,
};

pub fn main() {
    let mut builder = ClientConfig::builder();
    if let Some(endpoint) = std::env::args().nth(1) {
        builder = builder.endpoint(endpoint);
    }
    let client = Client::new(builder.build());

    match client.send_message(
        LogEvent::new("disk full")
            .level(Level::ERROR)
            .facility(Facility::LOCAL0)
            .extra("disk", "/dev/sda1"),
    ) {
        Ok(n) => println!(
            "Sent {} bytes to {} as {}.",
            n,
            client.config().endpoint(),
            client.hostname()
        ),
        Err(err) => {
            eprintln!("{:?}", err);
            std::process::exit(1);
        }
    }
}
