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

//! Sorting and filtering policies over trips.

use crate::trip::{Trip, TripStatus};
use std::cmp::Ordering;

/// Orders two values.
///
/// Implemented by the named comparators below and by any
/// `Fn(&T, &T) -> Ordering` closure.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Decides whether a value belongs in a filtered collection.
pub trait Matcher<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Ascending by charged amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountComparator;

impl Comparator<Trip> for AmountComparator {
    fn compare(&self, a: &Trip, b: &Trip) -> Ordering {
        a.total().cmp(&b.total())
    }
}

/// Ascending by lifecycle status: created, started, completed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusComparator;

impl Comparator<Trip> for StatusComparator {
    fn compare(&self, a: &Trip, b: &Trip) -> Ordering {
        a.status().cmp(&b.status())
    }
}

/// Ascending by duration. Unfinished trips have zero duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationComparator;

impl Comparator<Trip> for DurationComparator {
    fn compare(&self, a: &Trip, b: &Trip) -> Ordering {
        a.duration().cmp(&b.duration())
    }
}

/// Matches trips in one particular status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMatcher {
    status: TripStatus,
}

impl StatusMatcher {
    pub fn new(status: TripStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }
}

impl Matcher<Trip> for StatusMatcher {
    fn matches(&self, trip: &Trip) -> bool {
        trip.status() == self.status
    }
}
