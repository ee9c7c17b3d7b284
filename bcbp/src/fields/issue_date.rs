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

use time::OffsetDateTime;

/// Item 22: Date of Issue of Boarding Pass.
///
/// Four characters: a 3-digit day of the year followed by the last digit of
/// the issuance year. The field carries no century or decade, so the full
/// year can only be reconstructed relative to a reference year. This is a
/// known limitation of the format, not of the decoder: a pass issued in 2019
/// and read with a 2026 reference year resolves to 2029.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IssueDate<'a> {
    raw: &'a str,
}

impl<'a> IssueDate<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The original 4 characters.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The day of the year, 1 through 366.
    pub fn day_of_year(&self) -> Option<u16> {
        let day = self.raw.get(0..3)?.parse::<u16>().ok()?;
        (1..=366).contains(&day).then_some(day)
    }

    /// The last digit of the issuance year.
    pub fn year_digit(&self) -> Option<u8> {
        let digit = self.raw.get(3..4)?.parse::<u8>().ok()?;
        Some(digit)
    }

    /// The issuance year within the decade of `reference_year`.
    pub fn year(&self, reference_year: i32) -> Option<i32> {
        let digit = self.year_digit()?;
        Some(reference_year / 10 * 10 + i32::from(digit))
    }

    /// The issuance year within the current decade.
    ///
    /// Convenience around [`year`](Self::year) using the wall clock; decoding
    /// itself never touches the clock.
    pub fn year_in_current_decade(&self) -> Option<i32> {
        self.year(OffsetDateTime::now_utc().year())
    }
}
