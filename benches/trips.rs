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

//! Benchmarks for trip listing operations.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Sorting by amount and by natural order
//! - Filtering by status
//! - Quick formatting and export to memory

use car_sharing_rs::{
    AmountComparator, Car, Customer, DateTime, Location, LongTermRate, PerMinuteRate, QuickFormat,
    Rate, StatusMatcher, Trip, TripFormat, TripStatus, listing,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

/// Builds `count` trips cycling through all statuses and both rate kinds.
fn make_trips(count: usize) -> Vec<Trip> {
    let per_minute = Arc::new(Rate::from(PerMinuteRate::new(40).unwrap()));
    let long_term = Arc::new(Rate::from(LongTermRate::new(9000, 100)));
    let here = Location::new(48.238938, 16.378749).unwrap();
    let start = DateTime::new(2021, 1, 1, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            let rate = if i % 2 == 0 { &per_minute } else { &long_term };
            let mut trip = Trip::new(
                Car::new("Volvo", "960", format!("W-{i}")),
                Customer::new("John Doe"),
                Arc::clone(rate),
            );
            if i % 3 >= 1 {
                trip.start(here, start).unwrap();
            }
            if i % 3 == 2 {
                let minutes = (i % 1440) as u32;
                let end = DateTime::new(2021, 1, 2, minutes / 60, minutes % 60).unwrap();
                trip.end(here, end, Decimal::new(i as i64 % 500 + 1, 1)).unwrap();
            }
            trip
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1_000, 10_000] {
        let trips = make_trips(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("by_amount", size), &trips, |b, trips| {
            b.iter(|| {
                let mut trips = trips.clone();
                listing::sort_by(&mut trips, &AmountComparator);
                black_box(trips)
            })
        });

        group.bench_with_input(BenchmarkId::new("natural", size), &trips, |b, trips| {
            b.iter(|| {
                let mut trips = trips.clone();
                listing::sort_natural(&mut trips);
                black_box(trips)
            })
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let trips = make_trips(10_000);
    let matcher = StatusMatcher::new(TripStatus::Completed);

    c.bench_function("filter_completed_10000", |b| {
        b.iter(|| black_box(listing::filter(black_box(&trips), &matcher)))
    });
}

fn bench_output(c: &mut Criterion) {
    let trips = make_trips(1_000);
    let mut group = c.benchmark_group("output");
    group.throughput(Throughput::Elements(trips.len() as u64));

    group.bench_function("quick_format", |b| {
        b.iter(|| {
            for trip in &trips {
                black_box(QuickFormat.format(trip));
            }
        })
    });

    group.bench_function("export_to_memory", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(256 * trips.len());
            black_box(listing::export_to(&trips, &mut buffer))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sorting, bench_filter, bench_output);
criterion_main!(benches);
