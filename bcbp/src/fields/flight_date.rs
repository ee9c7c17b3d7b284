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

/// Item 46: Date of Flight, encoded as a day of the year.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlightDate(u16);

impl FlightDate {
    /// Parses a 3-digit day-of-year field.
    ///
    /// Returns `None` for non-numeric input or a day outside 1..=366.
    pub fn parse(raw: &str) -> Option<Self> {
        let day = raw.trim().parse::<u16>().ok()?;
        (1..=366).contains(&day).then_some(Self(day))
    }

    /// The day of the year, 1 through 366.
    pub fn day_of_year(&self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_of_year() {
        assert_eq!(FlightDate::parse("100").map(|d| d.day_of_year()), Some(100));
        assert_eq!(FlightDate::parse("001").map(|d| d.day_of_year()), Some(1));
        assert_eq!(FlightDate::parse("366").map(|d| d.day_of_year()), Some(366));
    }

    #[test]
    fn rejects_non_numeric_and_out_of_range() {
        assert_eq!(FlightDate::parse("X26"), None);
        assert_eq!(FlightDate::parse("000"), None);
        assert_eq!(FlightDate::parse("367"), None);
        assert_eq!(FlightDate::parse("   "), None);
    }
}
