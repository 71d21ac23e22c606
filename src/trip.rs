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

//! Trip lifecycle.
//!
//! Implemented State Machine
//!
//! ```text
//! Created ──start──► Started ──end──► Completed
//! ```
//!
//! Each transition happens at most once and status never regresses. A
//! failed transition leaves the trip untouched.
//!
//! # Example
//!
//! ```
//! use car_sharing_rs::{Car, Customer, DateTime, Location, PerMinuteRate, Rate, Trip, TripStatus};
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let rate = Arc::new(Rate::from(PerMinuteRate::new(40).unwrap()));
//! let here = Location::new(48.238938, 16.378749).unwrap();
//!
//! let mut trip = Trip::new(Car::new("Volvo", "760", "W-LOL"), Customer::new("Jane Doe"), rate);
//! trip.start(here, DateTime::new(2021, 1, 1, 0, 0).unwrap())
//!     .unwrap()
//!     .end(here, DateTime::new(2021, 1, 1, 0, 23).unwrap(), dec!(10.2))
//!     .unwrap();
//!
//! assert_eq!(trip.status(), TripStatus::Completed);
//! assert_eq!(trip.total(), 920);
//! ```

use crate::base::{Car, Customer, DateTime, Location};
use crate::rate::Rate;
use crate::TripError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Lifecycle status of a trip, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TripStatus {
    Created,
    Started,
    Completed,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "CREATED",
            Self::Started => "STARTED",
            Self::Completed => "COMPLETED",
        })
    }
}

/// Where and when a trip started or ended.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Waypoint {
    location: Location,
    time: DateTime,
}

/// A single rental of a car by a customer under a rate plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    car: Car,
    renter: Customer,
    rate: Arc<Rate>,
    start: Option<Waypoint>,
    end: Option<Waypoint>,
    /// Kilometres driven; zero until completed.
    distance: Decimal,
    status: TripStatus,
}

impl Trip {
    /// Smallest distance accepted when ending a trip, in kilometres.
    pub const MIN_DISTANCE: Decimal = dec!(0.1);

    /// Creates a trip that has not started yet.
    pub fn new(car: Car, renter: Customer, rate: Arc<Rate>) -> Self {
        Self {
            car,
            renter,
            rate,
            start: None,
            end: None,
            distance: Decimal::ZERO,
            status: TripStatus::Created,
        }
    }

    /// Creates a trip that is already under way.
    pub fn started(
        car: Car,
        renter: Customer,
        rate: Arc<Rate>,
        start_location: Location,
        start_time: DateTime,
    ) -> Self {
        let mut trip = Self::new(car, renter, rate);
        trip.start = Some(Waypoint {
            location: start_location,
            time: start_time,
        });
        trip.status = TripStatus::Started;
        trip.assert_invariants();
        trip
    }

    /// Creates a trip that has already been completed.
    ///
    /// # Errors
    ///
    /// Same argument checks as [`Trip::end`].
    #[allow(clippy::too_many_arguments)]
    pub fn completed(
        car: Car,
        renter: Customer,
        rate: Arc<Rate>,
        start_location: Location,
        start_time: DateTime,
        end_location: Location,
        end_time: DateTime,
        distance: Decimal,
    ) -> Result<Self, TripError> {
        let mut trip = Self::started(car, renter, rate, start_location, start_time);
        trip.end(end_location, end_time, distance)?;
        Ok(trip)
    }

    fn assert_invariants(&self) {
        debug_assert_eq!(
            self.start.is_some(),
            self.status != TripStatus::Created,
            "Invariant violated: start data does not match status {}",
            self.status
        );
        debug_assert_eq!(
            self.end.is_some(),
            self.status == TripStatus::Completed,
            "Invariant violated: end data does not match status {}",
            self.status
        );
        debug_assert!(
            self.status != TripStatus::Completed || self.distance >= Self::MIN_DISTANCE,
            "Invariant violated: completed trip with distance {}",
            self.distance
        );
    }

    /// Starts the trip.
    ///
    /// # Errors
    ///
    /// - [`TripError::AlreadyStarted`] - Trip is under way.
    /// - [`TripError::AlreadyCompleted`] - Trip has ended.
    pub fn start(&mut self, location: Location, time: DateTime) -> Result<&mut Self, TripError> {
        match self.status {
            TripStatus::Started => return Err(TripError::AlreadyStarted),
            TripStatus::Completed => return Err(TripError::AlreadyCompleted),
            TripStatus::Created => {}
        }

        self.start = Some(Waypoint { location, time });
        self.status = TripStatus::Started;
        self.assert_invariants();
        tracing::debug!(plate = self.car.plate(), %time, "trip started");
        Ok(self)
    }

    /// Ends the trip after `distance` kilometres.
    ///
    /// # Errors
    ///
    /// - [`TripError::InvalidDistance`] - Distance below [`Trip::MIN_DISTANCE`].
    /// - [`TripError::AlreadyCompleted`] - Trip has already ended.
    /// - [`TripError::NotStarted`] - Trip was never started.
    /// - [`TripError::EndBeforeStart`] - `time` is earlier than the start time.
    pub fn end(
        &mut self,
        location: Location,
        time: DateTime,
        distance: Decimal,
    ) -> Result<&mut Self, TripError> {
        if distance < Self::MIN_DISTANCE {
            return Err(TripError::InvalidDistance(distance));
        }
        let start = match (self.status, self.start) {
            (TripStatus::Completed, _) => return Err(TripError::AlreadyCompleted),
            (TripStatus::Started, Some(start)) => start,
            _ => return Err(TripError::NotStarted),
        };
        if time < start.time {
            return Err(TripError::EndBeforeStart);
        }

        self.end = Some(Waypoint { location, time });
        self.distance = distance;
        self.status = TripStatus::Completed;
        self.assert_invariants();
        tracing::debug!(plate = self.car.plate(), %time, %distance, "trip completed");
        Ok(self)
    }

    /// Duration in seconds if completed, zero otherwise.
    pub fn duration(&self) -> i64 {
        match (self.status, self.start, self.end) {
            (TripStatus::Completed, Some(start), Some(end)) => start.time.diff(&end.time),
            _ => 0,
        }
    }

    /// Charge in minor currency units, as computed by the trip's rate.
    pub fn total(&self) -> i64 {
        self.rate.total(self)
    }

    /// Natural ordering of trips.
    ///
    /// Trips that have not started sort after all others. Any two trips
    /// that have both started (or both not) compare equal: start times
    /// are not taken into account.
    pub fn natural_cmp(&self, other: &Trip) -> Ordering {
        let created = |trip: &Trip| trip.status == TripStatus::Created;
        created(self).cmp(&created(other))
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn renter(&self) -> &Customer {
        &self.renter
    }

    pub fn rate(&self) -> &Arc<Rate> {
        &self.rate
    }

    pub fn start_location(&self) -> Option<Location> {
        self.start.map(|start| start.location)
    }

    pub fn start_time(&self) -> Option<DateTime> {
        self.start.map(|start| start.time)
    }

    pub fn end_location(&self) -> Option<Location> {
        self.end.map(|end| end.location)
    }

    pub fn end_time(&self) -> Option<DateTime> {
        self.end.map(|end| end.time)
    }

    pub fn distance(&self) -> Decimal {
        self.distance
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }
}

/// Renders `Some` values with their `Display` and `None` as `-`.
struct OrDash<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrDash<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trip {{ car: {}, distance: {} km, rate: {}, renter: {}, \
             end_location: {}, end_time: {}, start_location: {}, start_time: {}, status: {} }}",
            self.car,
            self.distance,
            self.rate,
            self.renter,
            OrDash(self.end_location()),
            OrDash(self.end_time()),
            OrDash(self.start_location()),
            OrDash(self.start_time()),
            self.status,
        )
    }
}

impl Serialize for Trip {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Trip", 11)?;
        state.serialize_field("car", &self.car)?;
        state.serialize_field("renter", &self.renter)?;
        state.serialize_field("rate", self.rate.as_ref())?;
        state.serialize_field("start_location", &self.start_location())?;
        state.serialize_field("start_time", &self.start_time())?;
        state.serialize_field("end_location", &self.end_location())?;
        state.serialize_field("end_time", &self.end_time())?;
        state.serialize_field("distance", &self.distance)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("duration", &self.duration())?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}
