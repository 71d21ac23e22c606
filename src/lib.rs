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

//! # Car Sharing
//!
//! This library models a car-sharing business: vehicles, customers, rental
//! trips and the rate plans that price them, plus utilities to sort, filter,
//! print and export collections of trips.
//!
//! ## Core Components
//!
//! - [`Trip`]: A rental progressing through `Created -> Started -> Completed`
//! - [`Rate`]: Charge policy ([`PerMinuteRate`] or [`LongTermRate`])
//! - [`Car`], [`Customer`], [`Location`], [`DateTime`]: Value types
//! - [`AmountComparator`], [`StatusComparator`], [`StatusMatcher`]: Sort and filter policies
//! - [`QuickFormat`], [`LongFormat`]: Line renderings of a trip
//! - [`TripError`]: Invalid-argument and invalid-state failures
//!
//! ## Example
//!
//! ```
//! use car_sharing_rs::{
//!     listing, AmountComparator, Car, Customer, DateTime, LongTermRate, Location,
//!     PerMinuteRate, Rate, StatusMatcher, Trip, TripStatus,
//! };
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let per_minute = Arc::new(Rate::from(PerMinuteRate::new(40).unwrap()));
//! let long_term = Arc::new(Rate::from(LongTermRate::new(9000, 100)));
//! let here = Location::new(48.238938, 16.378749).unwrap();
//! let start = DateTime::new(2021, 1, 1, 0, 0).unwrap();
//! let end = DateTime::new(2021, 1, 1, 0, 23).unwrap();
//!
//! let mut trips = vec![
//!     Trip::new(Car::new("Volvo", "850", "W-ACAB"), Customer::new("John Doe"), long_term),
//!     Trip::completed(
//!         Car::new("Volvo", "960", "W-I8LA"),
//!         Customer::new("Jane Doe"),
//!         per_minute,
//!         here,
//!         start,
//!         here,
//!         end,
//!         dec!(10.2),
//!     )
//!     .unwrap(),
//! ];
//!
//! listing::sort_by(&mut trips, &AmountComparator);
//! let completed = listing::filter(&trips, &StatusMatcher::new(TripStatus::Completed));
//!
//! assert_eq!(completed.len(), 1);
//! assert_eq!(completed[0].total(), 920);
//! ```

mod base;
pub mod error;
pub mod format;
pub mod listing;
pub mod policy;
mod rate;
mod trip;

pub use base::{Car, Customer, DateTime, Location};
pub use error::{ErrorKind, TripError};
pub use format::{LongFormat, QuickFormat, TripFormat};
pub use policy::{
    AmountComparator, Comparator, DurationComparator, Matcher, StatusComparator, StatusMatcher,
};
pub use rate::{LongTermRate, PerMinuteRate, Rate};
pub use trip::{Trip, TripStatus};
