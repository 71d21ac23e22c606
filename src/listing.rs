// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Operations over trip collections.
//!
//! - [`sort_natural`] / [`sort_by`]: stable in-place sorts.
//! - [`filter`]: order-preserving selection into a new collection.
//! - [`tabular_print`]: one formatted line per trip between `---` rules.
//! - [`export`] / [`export_to`]: one verbose line per trip. Write failures
//!   are logged and swallowed; the return value counts the lines written.

use crate::format::TripFormat;
use crate::policy::{Comparator, Matcher};
use crate::trip::Trip;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Sorts trips by [`Trip::natural_cmp`]: unstarted trips move to the end,
/// everything else keeps its relative order.
pub fn sort_natural(trips: &mut [Trip]) {
    trips.sort_by(Trip::natural_cmp);
}

/// Stable sort by `comparator`.
pub fn sort_by<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    items.sort_by(|a, b| comparator.compare(a, b));
}

/// Returns copies of the items accepted by `matcher`, in their original
/// order. The input is left untouched.
pub fn filter<T, M>(items: &[T], matcher: &M) -> Vec<T>
where
    T: Clone,
    M: Matcher<T> + ?Sized,
{
    items
        .iter()
        .filter(|item| matcher.matches(*item))
        .cloned()
        .collect()
}

/// Writes a `---` rule, one line per trip rendered by `format`, and a
/// closing `---` rule.
pub fn tabular_print<F, W>(trips: &[Trip], format: &F, mut writer: W) -> io::Result<()>
where
    F: TripFormat + ?Sized,
    W: Write,
{
    writeln!(writer, "---")?;
    for trip in trips {
        writeln!(writer, "{}", format.format(trip))?;
    }
    writeln!(writer, "---")?;
    Ok(())
}

/// Exports trips to the file at `path`, replacing any existing content.
///
/// Returns the number of trips written. If the file cannot be created the
/// result is zero; see [`export_to`] for write failures.
pub fn export(trips: &[Trip], path: impl AsRef<Path>) -> usize {
    let path = path.as_ref();
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "cannot open export destination");
            return 0;
        }
    };

    let count = export_to(trips, BufWriter::new(file));
    tracing::info!(path = %path.display(), count, "exported trips");
    count
}

/// Writes one verbose line per trip to `writer`, then flushes it.
///
/// Stops at the first write error, which is logged rather than returned.
/// The count covers the lines handed to `writer` before the failure.
pub fn export_to<W: Write>(trips: &[Trip], mut writer: W) -> usize {
    let mut count = 0;
    for trip in trips {
        let line = format!("{trip}\n");
        if let Err(e) = writer.write_all(line.as_bytes()) {
            tracing::error!(error = %e, written = count, "trip export interrupted");
            return count;
        }
        count += 1;
    }

    if let Err(e) = writer.flush() {
        tracing::error!(error = %e, written = count, "failed to flush trip export");
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Car, Customer, DateTime, Location, PerMinuteRate, QuickFormat, Rate};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    /// Accepts a fixed number of writes, then fails.
    struct FailingWriter {
        writes_left: usize,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::other("disk full"));
            }
            self.writes_left -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_trips(count: u32) -> Vec<Trip> {
        let rate = Arc::new(Rate::from(PerMinuteRate::new(40).unwrap()));
        let here = Location::new(48.2, 16.4).unwrap();
        (1..=count)
            .map(|minutes| {
                Trip::completed(
                    Car::new("Volvo", "960", format!("W-{minutes}")),
                    Customer::new("John Doe"),
                    Arc::clone(&rate),
                    here,
                    DateTime::new(2021, 1, 1, 0, 0).unwrap(),
                    here,
                    DateTime::new(2021, 1, 1, 0, minutes).unwrap(),
                    dec!(1.5),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn export_to_writes_one_line_per_trip() {
        let trips = sample_trips(3);
        let mut output = Vec::new();

        assert_eq!(export_to(&trips, &mut output), 3);

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, trip) in lines.iter().zip(&trips) {
            assert_eq!(*line, trip.to_string());
        }
    }

    #[test]
    fn export_to_counts_lines_before_failure() {
        let trips = sample_trips(5);
        let mut writer = FailingWriter {
            writes_left: 2,
            written: Vec::new(),
        };

        assert_eq!(export_to(&trips, &mut writer), 2);
        assert_eq!(String::from_utf8(writer.written).unwrap().lines().count(), 2);
    }

    #[test]
    fn export_to_empty_list_writes_nothing() {
        let mut output = Vec::new();
        assert_eq!(export_to(&[], &mut output), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn tabular_print_wraps_lines_in_rules() {
        let trips = sample_trips(2);
        let mut output = Vec::new();
        tabular_print(&trips, &QuickFormat, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "---\n       1 min   1.5 km        0.40 EUR\n       2 min   1.5 km        0.80 EUR\n---\n"
        );
    }

    #[test]
    fn tabular_print_propagates_write_errors() {
        let writer = FailingWriter {
            writes_left: 0,
            written: Vec::new(),
        };
        assert!(tabular_print(&sample_trips(1), &QuickFormat, writer).is_err());
    }
}
