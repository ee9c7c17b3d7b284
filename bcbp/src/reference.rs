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

//! Reference display data.
//!
//! The decoder itself never consults these tables; they are an immutable
//! collaborator for a presentation layer that wants display names next to
//! the decoded codes. The built-in content is illustrative and partial, a
//! consumer with a full dataset builds its own [`ReferenceData`].

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Display data of an airport.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AirportInfo {
    pub name: String,
    pub city: String,
    pub country: String,
}

/// Read-only lookup tables keyed by IATA code.
///
/// All lookups degrade gracefully: a missing airline resolves to the code
/// itself, a missing airport to `None`.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ReferenceData {
    airlines: HashMap<String, String>,
    airports: HashMap<String, AirportInfo>,
}

impl ReferenceData {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates tables with a small built-in set of major carriers and
    /// airports.
    pub fn builtin() -> Self {
        let mut data = Self::new();

        for (code, name) in [
            ("AA", "American Airlines"),
            ("AC", "Air Canada"),
            ("AF", "Air France"),
            ("BA", "British Airways"),
            ("DL", "Delta Air Lines"),
            ("EK", "Emirates"),
            ("KL", "KLM Royal Dutch Airlines"),
            ("LH", "Lufthansa"),
            ("QF", "Qantas"),
            ("UA", "United Airlines"),
        ] {
            data.insert_airline(code, name);
        }

        for (code, name, city, country) in [
            ("AMS", "Amsterdam Schiphol", "Amsterdam", "Netherlands"),
            ("CDG", "Paris Charles de Gaulle", "Paris", "France"),
            ("DXB", "Dubai International", "Dubai", "United Arab Emirates"),
            ("FRA", "Frankfurt Airport", "Frankfurt", "Germany"),
            ("JFK", "John F. Kennedy International", "New York", "United States"),
            ("LAX", "Los Angeles International", "Los Angeles", "United States"),
            ("LHR", "London Heathrow", "London", "United Kingdom"),
            ("SFO", "San Francisco International", "San Francisco", "United States"),
            ("SYD", "Sydney Kingsford Smith", "Sydney", "Australia"),
            ("YUL", "Montréal-Trudeau International", "Montréal", "Canada"),
        ] {
            data.insert_airport(code, name, city, country);
        }

        data
    }

    pub fn insert_airline(&mut self, code: &str, name: &str) {
        self.airlines.insert(code.to_owned(), name.to_owned());
    }

    pub fn insert_airport(&mut self, code: &str, name: &str, city: &str, country: &str) {
        self.airports.insert(
            code.to_owned(),
            AirportInfo {
                name: name.to_owned(),
                city: city.to_owned(),
                country: country.to_owned(),
            },
        );
    }

    /// The airline's display name, or the code itself when unknown.
    pub fn airline_name<'s>(&'s self, code: &'s str) -> &'s str {
        self.airlines
            .get(code.trim())
            .map(String::as_str)
            .unwrap_or(code)
    }

    /// The airport's display data, or `None` when unknown.
    pub fn airport(&self, code: &str) -> Option<&AirportInfo> {
        self.airports.get(code.trim())
    }

    /// The airport's display name, or the code itself when unknown.
    pub fn airport_name<'s>(&'s self, code: &'s str) -> &'s str {
        self.airport(code).map(|info| info.name.as_str()).unwrap_or(code)
    }
}
