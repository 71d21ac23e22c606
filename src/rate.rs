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

//! Charge calculation policies.
//!
//! A [`Rate`] turns a [`Trip`] into a charge in minor currency units. Every
//! rate charges nothing until the trip is [`TripStatus::Completed`].
//!
//! # Example
//!
//! ```
//! use car_sharing_rs::{PerMinuteRate, Rate};
//!
//! let rate = Rate::from(PerMinuteRate::new(40).unwrap());
//! assert_eq!(rate.to_string(), "40/min");
//! ```

use crate::trip::{Trip, TripStatus};
use crate::TripError;
use serde::Serialize;
use std::fmt;

/// Charges a fixed amount for every started minute of a completed trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerMinuteRate {
    per_minute: i64,
}

impl PerMinuteRate {
    /// # Errors
    ///
    /// [`TripError::InvalidPerMinuteRate`] if `per_minute` is below 1.
    pub fn new(per_minute: i64) -> Result<Self, TripError> {
        if per_minute < 1 {
            return Err(TripError::InvalidPerMinuteRate(per_minute));
        }
        Ok(Self { per_minute })
    }

    pub fn per_minute(&self) -> i64 {
        self.per_minute
    }

    /// Whole minutes (floored) times the per-minute amount. Wraps on
    /// overflow.
    pub fn total(&self, trip: &Trip) -> i64 {
        if trip.status() != TripStatus::Completed {
            return 0;
        }
        (trip.duration() / 60).wrapping_mul(self.per_minute)
    }
}

/// Base amount plus a per-day component.
///
/// The charge is `base + (base - BASE_DURATION) * per_day` and does not
/// depend on the trip's duration or distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LongTermRate {
    base_amount: i64,
    per_day: i64,
}

impl LongTermRate {
    pub const BASE_DURATION: i64 = 5;

    /// Keeps the given amounts if at least one of them is 1 or more;
    /// otherwise the rate is a zero rate. Never fails.
    pub fn new(base_amount: i64, per_day: i64) -> Self {
        if base_amount >= 1 || per_day >= 1 {
            Self {
                base_amount,
                per_day,
            }
        } else {
            tracing::debug!(base_amount, per_day, "long-term rate falls back to zero rate");
            Self {
                base_amount: 0,
                per_day: 0,
            }
        }
    }

    pub fn base_amount(&self) -> i64 {
        self.base_amount
    }

    pub fn per_day(&self) -> i64 {
        self.per_day
    }

    /// Wraps on overflow.
    pub fn total(&self, trip: &Trip) -> i64 {
        if trip.status() != TripStatus::Completed {
            return 0;
        }
        self.base_amount.wrapping_add(
            self.base_amount
                .wrapping_sub(Self::BASE_DURATION)
                .wrapping_mul(self.per_day),
        )
    }
}

/// Rate plan attached to a trip.
///
/// Rates are immutable once built and are shared between trips (and their
/// copies) behind an `Arc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rate {
    PerMinute(PerMinuteRate),
    LongTerm(LongTermRate),
}

impl Rate {
    /// Charge for `trip` in minor currency units; zero unless completed.
    pub fn total(&self, trip: &Trip) -> i64 {
        match self {
            Self::PerMinute(rate) => rate.total(trip),
            Self::LongTerm(rate) => rate.total(trip),
        }
    }
}

impl From<PerMinuteRate> for Rate {
    fn from(rate: PerMinuteRate) -> Self {
        Self::PerMinute(rate)
    }
}

impl From<LongTermRate> for Rate {
    fn from(rate: LongTermRate) -> Self {
        Self::LongTerm(rate)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerMinute(rate) => write!(f, "{}/min", rate.per_minute),
            Self::LongTerm(rate) => write!(f, "{} + {}/day", rate.base_amount, rate.per_day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Car, Customer, DateTime, Location};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn completed_trip(rate: Rate, minutes: u32) -> Trip {
        let location = Location::new(48.2, 16.4).unwrap();
        let start = DateTime::new(2021, 1, 1, 0, 0).unwrap();
        let end = DateTime::new(2021, 1, 1, minutes / 60, minutes % 60).unwrap();
        Trip::completed(
            Car::new("Volvo", "850", "W-ACAB"),
            Customer::new("John Doe"),
            Arc::new(rate),
            location,
            start,
            location,
            end,
            dec!(10.2),
        )
        .unwrap()
    }

    #[test]
    fn per_minute_rate_rejects_values_below_one() {
        assert_eq!(PerMinuteRate::new(0), Err(TripError::InvalidPerMinuteRate(0)));
        assert_eq!(PerMinuteRate::new(-1), Err(TripError::InvalidPerMinuteRate(-1)));
        assert_eq!(PerMinuteRate::new(1).unwrap().per_minute(), 1);
    }

    #[test]
    fn per_minute_rate_charges_whole_minutes() {
        let rate = Rate::from(PerMinuteRate::new(40).unwrap());
        let trip = completed_trip(rate, 23);
        assert_eq!(rate.total(&trip), 920);
    }

    #[test]
    fn long_term_rate_ignores_trip_length() {
        let rate = Rate::from(LongTermRate::new(12000, 3000));
        assert_eq!(rate.total(&completed_trip(rate, 23)), 36_021_000);
        assert_eq!(rate.total(&completed_trip(rate, 600)), 36_021_000);
    }

    #[test]
    fn long_term_rate_keeps_amounts_if_either_is_positive() {
        let rate = LongTermRate::new(0, 100);
        assert_eq!((rate.base_amount(), rate.per_day()), (0, 100));
        let rate = LongTermRate::new(9000, -1);
        assert_eq!((rate.base_amount(), rate.per_day()), (9000, -1));
    }

    #[test]
    fn long_term_rate_falls_back_to_zero_rate() {
        let rate = LongTermRate::new(0, -7);
        assert_eq!((rate.base_amount(), rate.per_day()), (0, 0));
        let rate = Rate::from(rate);
        assert_eq!(rate.total(&completed_trip(rate, 30)), 0);
    }

    #[test]
    fn per_minute_rate_wraps_on_overflow() {
        let per_minute = i64::MAX / 2;
        let rate = Rate::from(PerMinuteRate::new(per_minute).unwrap());
        let trip = completed_trip(rate, 23);
        assert_eq!(rate.total(&trip), 23i64.wrapping_mul(per_minute));
        assert_eq!(trip.total(), rate.total(&trip));
    }

    #[test]
    fn long_term_rate_wraps_on_overflow() {
        let rate = Rate::from(LongTermRate::new(4_000_000_000, 4_000_000_000));
        let trip = completed_trip(rate, 23);
        let expected = 4_000_000_000i64.wrapping_add(3_999_999_995i64.wrapping_mul(4_000_000_000));
        assert_eq!(rate.total(&trip), expected);

        let rate = Rate::from(LongTermRate::new(i64::MIN, i64::MAX));
        assert_eq!(
            rate.total(&completed_trip(rate, 23)),
            i64::MIN.wrapping_add(i64::MIN.wrapping_sub(5).wrapping_mul(i64::MAX))
        );
    }

    #[test]
    fn rate_display() {
        assert_eq!(Rate::from(PerMinuteRate::new(27).unwrap()).to_string(), "27/min");
        assert_eq!(Rate::from(LongTermRate::new(9000, 100)).to_string(), "9000 + 100/day");
    }

    #[test]
    fn rate_serializes_with_type_tag() {
        let json = serde_json::to_value(Rate::from(LongTermRate::new(15000, 3000))).unwrap();
        assert_eq!(json["type"], "long_term");
        assert_eq!(json["base_amount"], 15000);
        assert_eq!(json["per_day"], 3000);
    }
}
