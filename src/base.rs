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

//! Value types identifying vehicles, renters, places and points in time.

use crate::TripError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle in the fleet, identified by its licence plate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Car {
    make: String,
    model: String,
    plate: String,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, plate: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            plate: plate.into(),
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.make, self.model, self.plate)
    }
}

/// A renter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Customer {
    name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A geographic point in decimal degrees.
///
/// Deserialization goes through [`Location::new`], so out-of-range
/// coordinates are rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location.
    ///
    /// # Errors
    ///
    /// [`TripError::InvalidLocation`] if latitude is outside `[-90, 90]`,
    /// longitude is outside `[-180, 180]`, or either is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, TripError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(TripError::InvalidLocation {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = TripError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A point in time with minute resolution.
///
/// Wraps a [`NaiveDateTime`] whose seconds are always zero. There is no
/// time zone or daylight-saving handling. Deserialized values carrying
/// seconds are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "NaiveDateTime")]
pub struct DateTime(NaiveDateTime);

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = TripError;

    fn try_from(time: NaiveDateTime) -> Result<Self, Self::Error> {
        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(TripError::InvalidDateTime {
                year: time.year(),
                month: time.month(),
                day: time.day(),
                hour: time.hour(),
                minute: time.minute(),
            });
        }
        Ok(Self(time))
    }
}

impl DateTime {
    /// Creates a point in time from calendar fields.
    ///
    /// # Errors
    ///
    /// [`TripError::InvalidDateTime`] if the fields do not name an existing
    /// minute (e.g. February 30th or hour 24).
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TripError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .map(Self)
            .ok_or(TripError::InvalidDateTime {
                year,
                month,
                day,
                hour,
                minute,
            })
    }

    /// Seconds elapsed from `self` to `other`.
    ///
    /// Positive when `other` is later than `self`.
    pub fn diff(&self, other: &DateTime) -> i64 {
        (other.0 - self.0).num_seconds()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}
