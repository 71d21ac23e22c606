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

use car_sharing_rs::{
    AmountComparator, Car, Customer, DateTime, DurationComparator, Location, LongFormat,
    LongTermRate, PerMinuteRate, QuickFormat, Rate, StatusMatcher, Trip, TripError, TripStatus,
    listing,
};
use clap::{Parser, ValueEnum};
use rust_decimal_macros::dec;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Car Sharing - Trip listing demo
///
/// Builds a sample fleet and a list of trips, then prints, sorts, filters
/// and exports them. Completed trips are exported one per line.
#[derive(Parser, Debug)]
#[command(name = "car-sharing-rs")]
#[command(about = "Sorts, filters and exports a sample list of car-sharing trips", long_about = None)]
struct Args {
    /// Destination file for the exported completed trips
    #[arg(short, long, value_name = "FILE", default_value = "completed_trips.txt")]
    output: PathBuf,

    /// Rendering used for the full listings
    #[arg(short, long, value_enum, default_value_t = Listing::Long)]
    format: Listing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Listing {
    /// Field-labelled line per trip
    Long,
    /// Minutes, kilometres and amount in fixed-width columns
    Quick,
    /// One JSON object per line
    Json,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Diagnostics go to stderr so stdout only carries the listings
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let trips = match sample_trips() {
        Ok(trips) => trips,
        Err(e) => {
            eprintln!("Error building sample trips: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(trips, &args, io::stdout().lock()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Sample fleet: 5 cars, 2 customers, 8 rates and 8 trips in every status.
fn sample_trips() -> Result<Vec<Trip>, TripError> {
    let cars = [
        Car::new("Mercedes", "450 SEL 6.9", "W-I8NY"),
        Car::new("Volvo", "960", "W-I8LA"),
        Car::new("Volvo", "850", "W-ACAB"),
        Car::new("Volvo", "760", "W-LOL"),
        Car::new("Chevrolet", "G30", "W-G30VAN"),
    ];
    let customers = [Customer::new("John Doe"), Customer::new("Jane Doe")];
    let rates: Vec<Arc<Rate>> = vec![
        Arc::new(LongTermRate::new(12000, 3000).into()),
        Arc::new(LongTermRate::new(15000, 3000).into()),
        Arc::new(LongTermRate::new(25000, 5000).into()),
        Arc::new(LongTermRate::new(9000, 100).into()),
        Arc::new(PerMinuteRate::new(40)?.into()),
        Arc::new(PerMinuteRate::new(27)?.into()),
        Arc::new(PerMinuteRate::new(75)?.into()),
        Arc::new(PerMinuteRate::new(23)?.into()),
    ];

    let station = Location::new(48.238938, 16.378749)?;
    let danube = Location::new(48.20613882633994, 16.422068310841116)?;
    let danube_east = Location::new(48.20613882637994, 16.422068310841416)?;

    let mut trips = Vec::with_capacity(8);

    trips.push(Trip::new(
        cars[2].clone(),
        customers[0].clone(),
        Arc::clone(&rates[0]),
    ));

    let mut trip = Trip::new(cars[3].clone(), customers[0].clone(), Arc::clone(&rates[1]));
    trip.start(station, DateTime::new(2021, 6, 23, 15, 17)?)?;
    trips.push(trip);

    trips.push(Trip::started(
        cars[0].clone(),
        customers[0].clone(),
        Arc::clone(&rates[2]),
        station,
        DateTime::new(2021, 1, 1, 0, 0)?,
    ));

    let mut trip = Trip::new(cars[4].clone(), customers[0].clone(), Arc::clone(&rates[3]));
    trip.start(station, DateTime::new(2021, 1, 1, 0, 0)?)?
        .end(danube, DateTime::new(2021, 1, 1, 0, 23)?, dec!(10.2))?;
    trips.push(trip);

    trips.push(Trip::completed(
        cars[1].clone(),
        customers[0].clone(),
        Arc::clone(&rates[4]),
        danube,
        DateTime::new(2021, 1, 1, 15, 23)?,
        station,
        DateTime::new(2021, 1, 3, 15, 17)?,
        dec!(5.2),
    )?);

    trips.push(Trip::started(
        cars[0].clone(),
        customers[1].clone(),
        Arc::clone(&rates[5]),
        station,
        DateTime::new(2021, 5, 23, 11, 15)?,
    ));

    trips.push(Trip::new(
        cars[3].clone(),
        customers[0].clone(),
        Arc::clone(&rates[6]),
    ));

    let mut trip = Trip::new(cars[4].clone(), customers[0].clone(), Arc::clone(&rates[3]));
    trip.start(station, DateTime::new(2021, 1, 2, 3, 12)?)?
        .end(danube_east, DateTime::new(2021, 1, 2, 3, 23)?, dec!(10.2))?;
    trips.push(trip);

    Ok(trips)
}

/// Prints trips in the listing format chosen on the command line.
fn print_listing<W: Write>(trips: &[Trip], mode: Listing, mut out: W) -> io::Result<()> {
    match mode {
        Listing::Long => listing::tabular_print(trips, &LongFormat, out),
        Listing::Quick => listing::tabular_print(trips, &QuickFormat, out),
        Listing::Json => {
            writeln!(out, "---")?;
            for trip in trips {
                serde_json::to_writer(&mut out, trip)?;
                writeln!(out)?;
            }
            writeln!(out, "---")
        }
    }
}

/// Runs the demo sequence and returns the number of exported trips.
///
/// 1. Print, natural sort, print again
/// 2. Sort by amount and print in quick format
/// 3. Keep completed trips, print, sort by duration and export
/// 4. Try to restart a completed trip and report the error
fn run<W: Write>(mut trips: Vec<Trip>, args: &Args, mut out: W) -> io::Result<usize> {
    print_listing(&trips, args.format, &mut out)?;

    writeln!(out, "--------- sorted trips")?;
    listing::sort_natural(&mut trips);
    print_listing(&trips, args.format, &mut out)?;

    writeln!(out, "--------- sorted by amount")?;
    listing::sort_by(&mut trips, &AmountComparator);
    listing::tabular_print(&trips, &QuickFormat, &mut out)?;

    writeln!(out, "--------- filtered")?;
    let mut completed = listing::filter(&trips, &StatusMatcher::new(TripStatus::Completed));
    print_listing(&completed, args.format, &mut out)?;

    writeln!(out, "--------- filtered and sorted by duration")?;
    listing::sort_by(&mut completed, &DurationComparator);
    let exported = listing::export(&completed, &args.output);
    writeln!(out, "Exported: {}", exported)?;

    if let Some(trip) = trips.iter_mut().find(|trip| trip.status() == TripStatus::Completed) {
        if let (Some(location), Some(time)) = (trip.end_location(), trip.end_time()) {
            if let Err(e) = trip.start(location, time) {
                writeln!(out, "Cannot restart trip of {}: {} ({:?})", trip.car(), e, e.kind())?;
            }
        }
    }

    Ok(exported)
}
