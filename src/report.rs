use std::fmt::Display;
use std::io::{self, Write};

use crate::walk::WalkRecord;

pub const HEADER: &str = "-----  print out  -----";

/// Writes the header followed by one `addr: <location>, value: <value>` line per record.
/// Returns the number of record lines written.
pub fn write_report<'a, T, W, I>(mut out: W, records: I) -> io::Result<usize>
where
    T: Display + 'a,
    W: Write,
    I: IntoIterator<Item = WalkRecord<'a, T>>,
{
    writeln!(out, "{}", HEADER)?;
    let mut n = 0;
    for rec in records {
        writeln!(out, "addr: {}, value: {}", rec.location, rec.value)?;
        n += 1;
    }
    out.flush()?;
    Ok(n)
}
