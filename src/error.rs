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

//! Error types for trip and rate operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Broad classification of a [`TripError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on an argument was violated.
    InvalidArgument,
    /// A lifecycle transition was attempted from a state that forbids it.
    InvalidState,
}

/// Trip and rate errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TripError {
    /// Per-minute rate below one minor unit
    #[error("invalid per-minute rate {0} (must be at least 1)")]
    InvalidPerMinuteRate(i64),

    /// Distance below the 0.1 km minimum
    #[error("invalid distance {0} km (must be at least 0.1)")]
    InvalidDistance(Decimal),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("invalid location ({latitude}, {longitude})")]
    InvalidLocation { latitude: f64, longitude: f64 },

    /// Calendar fields that do not name an existing minute
    #[error("invalid date/time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDateTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    /// End time is earlier than start time
    #[error("trip cannot end before it starts")]
    EndBeforeStart,

    /// Trip has already been started
    #[error("trip already started")]
    AlreadyStarted,

    /// Trip has already been completed
    #[error("trip already completed")]
    AlreadyCompleted,

    /// Trip has not been started yet
    #[error("trip not started")]
    NotStarted,
}

impl TripError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPerMinuteRate(_)
            | Self::InvalidDistance(_)
            | Self::InvalidLocation { .. }
            | Self::InvalidDateTime { .. }
            | Self::EndBeforeStart => ErrorKind::InvalidArgument,
            Self::AlreadyStarted | Self::AlreadyCompleted | Self::NotStarted => {
                ErrorKind::InvalidState
            }
        }
    }
}
