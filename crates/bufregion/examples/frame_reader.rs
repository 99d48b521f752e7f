//! Splits standard input into newline-terminated records using a
//! [`BufferedRegion`], growing the buffer whenever a record outgrows it.
//!
//! The region starts deliberately small so that growth is easy to observe.
//! Turn on logging to watch fills, clears and growth:
//!
//! ```bash
//! printf 'alpha\nbeta\na much longer record than sixteen bytes\n' \
//!     | RUST_LOG=bufregion=trace cargo run -p bufregion --example frame_reader
//! ```
#![allow(missing_docs)]

use std::io::{self, Write};

use bufregion::{BufferedRegion, Error};
use tracing_subscriber::EnvFilter;

/// Upper bound on a single record; a peer sending more is rejected.
const MAX_RECORD: usize = 64 * 1024;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut region = BufferedRegion::with_capacity(stdin, 16);
    let mut scanned = 0;

    loop {
        if let Some(newline) = region.data()[scanned..].iter().position(|&b| b == b'\n') {
            let end = scanned + newline + 1;
            if let Some(record) = region.peek(0, end - 1) {
                writeln!(
                    stdout,
                    "record ({} bytes): {}",
                    record.len(),
                    String::from_utf8_lossy(record)
                )?;
            }
            region.clear(end)?;
            scanned = 0;
            continue;
        }
        scanned = region.buffered();

        if region.is_full() {
            if region.capacity() >= MAX_RECORD {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "record too long").into());
            }
            region.grow(region.capacity());
        }

        match region.fill() {
            Ok(_) => {}
            Err(Error::EndOfStream) => break,
            Err(err) => return Err(err),
        }
    }

    if !region.is_empty() {
        writeln!(
            stdout,
            "trailing ({} bytes): {}",
            region.buffered(),
            String::from_utf8_lossy(region.data())
        )?;
    }
    Ok(())
}
