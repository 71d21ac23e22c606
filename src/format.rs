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

//! Single-line trip renderings for tabular output.

use crate::trip::Trip;
use rust_decimal::RoundingStrategy;

/// Renders a trip as one line of text.
pub trait TripFormat {
    fn format(&self, trip: &Trip) -> String;
}

/// Verbose, field-labelled rendering (the trip's `Display`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LongFormat;

impl TripFormat for LongFormat {
    fn format(&self, trip: &Trip) -> String {
        trip.to_string()
    }
}

/// Fixed-width rendering of minutes, kilometres and amount.
///
/// ```text
///       23 min  10.2 km        9.20 EUR
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickFormat;

impl TripFormat for QuickFormat {
    fn format(&self, trip: &Trip) -> String {
        let distance = trip
            .distance()
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        let total = trip.total();
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        format!(
            "{:8} min {:>5} km {:>8}.{:02} EUR",
            trip.duration() / 60,
            format!("{distance:.1}"),
            format!("{sign}{}", magnitude / 100),
            magnitude % 100
        )
    }
}
