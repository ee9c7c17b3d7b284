// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::fields::{strip_leading_zeros, Compartment, FlightDate, PassengerStatus};
use crate::scanner::{Scanner, Section};
use crate::sections::{hex_size, LegExtension};
use crate::Error;

/// The fixed length of a mandatory leg block in characters, including the
/// trailing conditional-data size field.
pub const LEG_LENGTH: usize = 37;

/// One flight segment of the boarding pass.
///
/// The mandatory fields are decoded from the 37-character leg block; the
/// optional [`extension`](Self::extension) comes from the leg's conditional
/// section.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Leg<'a> {
    /// Item 7: Operating Carrier PNR Code, trimmed.
    pub pnr: &'a str,
    /// Item 26: From City Airport Code.
    pub departure_airport: &'a str,
    /// Item 38: To City Airport Code.
    pub arrival_airport: &'a str,
    /// Item 42: Operating Carrier Designator, trimmed.
    pub operating_carrier: &'a str,
    /// Item 43: Flight Number with leading zeros stripped.
    pub flight_number: &'a str,
    /// Item 46: Date of Flight, absent if non-numeric.
    pub flight_date: Option<FlightDate>,
    /// Item 71: Compartment Code.
    pub compartment: Option<Compartment>,
    /// Item 104: Seat Number with leading zeros stripped.
    pub seat_number: &'a str,
    /// Item 107: Check-in Sequence Number with leading zeros stripped.
    pub check_in_sequence: &'a str,
    /// Item 113: Passenger Status.
    pub passenger_status: Option<PassengerStatus>,
    /// Extended fields from the per-leg conditional section.
    pub extension: Option<LegExtension<'a>>,
}

impl<'a> Leg<'a> {
    /// Parses a mandatory leg block off the scanner.
    ///
    /// Returns the leg and the size of the conditional block that follows
    /// it. With `gate` set, the structural validation that decides whether
    /// the whole input is accepted as a boarding pass is applied; this is
    /// done for the first leg only.
    ///
    /// # Errors
    ///
    /// Returns an error if `gate` is set and an airport code, the carrier or
    /// the flight number is malformed.
    pub(crate) fn parse(scanner: &mut Scanner<'a>, gate: bool) -> Result<(Self, usize), Error> {
        let pnr = scanner
            .read(7, "PNR Code", Section::LegMandatory)
            .map(str::trim)
            .unwrap_or("");
        let departure_airport = scanner
            .read(3, "Departure Airport", Section::LegMandatory)
            .map(str::trim)
            .unwrap_or("");
        let arrival_airport = scanner
            .read(3, "Arrival Airport", Section::LegMandatory)
            .map(str::trim)
            .unwrap_or("");
        let operating_carrier = scanner
            .read(3, "Operating Carrier", Section::LegMandatory)
            .map(str::trim)
            .unwrap_or("");
        let flight_number = scanner
            .read(5, "Flight Number", Section::LegMandatory)
            .map(str::trim)
            .unwrap_or("");
        let flight_date = scanner
            .read(3, "Date of Flight", Section::LegMandatory)
            .and_then(FlightDate::parse);
        let compartment = scanner
            .read(1, "Compartment Code", Section::LegMandatory)
            .and_then(|s| s.trim().chars().next())
            .map(Compartment::from_code);
        let seat_number = scanner
            .read(4, "Seat Number", Section::LegMandatory)
            .map(strip_leading_zeros)
            .unwrap_or("");
        let check_in_sequence = scanner
            .read(5, "Check-in Sequence Number", Section::LegMandatory)
            .map(strip_leading_zeros)
            .unwrap_or("");
        let passenger_status = scanner
            .read(1, "Passenger Status", Section::LegMandatory)
            .and_then(|s| s.trim().chars().next())
            .map(PassengerStatus::from_code);
        let conditional_size = scanner
            .read(2, "Conditional Data Size", Section::LegMandatory)
            .map_or(0, hex_size);

        if gate {
            validate(departure_airport, arrival_airport, operating_carrier, flight_number)?;
        }

        let leg = Self {
            pnr,
            departure_airport,
            arrival_airport,
            operating_carrier,
            flight_number: strip_leading_zeros(flight_number),
            flight_date,
            compartment,
            seat_number,
            check_in_sequence,
            passenger_status,
            extension: None,
        };

        Ok((leg, conditional_size))
    }
}

fn validate(
    departure: &str,
    arrival: &str,
    carrier: &str,
    flight_number: &str,
) -> Result<(), Error> {
    if !is_airport_code(departure) {
        return Err(Error::InvalidLeg {
            field: "Departure Airport",
            value: departure.to_owned(),
            expected: "three uppercase letters",
        });
    }
    if !is_airport_code(arrival) {
        return Err(Error::InvalidLeg {
            field: "Arrival Airport",
            value: arrival.to_owned(),
            expected: "three uppercase letters",
        });
    }
    if !is_carrier_code(carrier) {
        return Err(Error::InvalidLeg {
            field: "Operating Carrier",
            value: carrier.to_owned(),
            expected: "two or three uppercase letters or digits",
        });
    }
    if !is_flight_number(flight_number) {
        return Err(Error::InvalidLeg {
            field: "Flight Number",
            value: flight_number.to_owned(),
            expected: "one to five digits",
        });
    }

    Ok(())
}

fn is_airport_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_carrier_code(s: &str) -> bool {
    (2..=3).contains(&s.len())
        && s.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn is_flight_number(s: &str) -> bool {
    (1..=5).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
