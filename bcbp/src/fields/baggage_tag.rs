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

/// Item 23: Baggage Tag Licence Plate Number.
///
/// A 13-character tag: 1 leading digit, 3-character airline code, 6-digit
/// serial number and a 3-digit consecutive-tag counter.
///
/// The bag count derived from the counter changed meaning in version 7 of
/// the format: from version 7 on the counter is the count itself (`001` is
/// one bag), before that the counter starts at zero (`000` is one bag).
// TODO: verify the pre-7 counter offset against IATA Resolution 792.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BaggageTag<'a> {
    raw: &'a str,
    airline_code: &'a str,
    serial_number: &'a str,
    bag_count: Option<u16>,
}

impl<'a> BaggageTag<'a> {
    /// Derives a tag record from the 13-character field.
    ///
    /// Returns `None` for a blank or truncated field.
    pub fn parse(raw: &'a str, version: Option<u8>) -> Option<Self> {
        if raw.len() < 13 || raw.trim().is_empty() {
            return None;
        }

        let counter = raw.get(10..13)?.parse::<u16>().ok();
        let bag_count = counter.map(|count| match version {
            Some(version) if version >= 7 => count,
            _ => count + 1,
        });

        Some(Self {
            raw,
            airline_code: raw.get(1..4)?,
            serial_number: raw.get(4..10)?,
            bag_count,
        })
    }

    /// The original 13 characters.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The 3-character airline code.
    pub fn airline_code(&self) -> &'a str {
        self.airline_code
    }

    /// The 6-digit serial number.
    pub fn serial_number(&self) -> &'a str {
        self.serial_number
    }

    /// The number of bags, or `None` if the counter is not numeric.
    pub fn bag_count(&self) -> Option<u16> {
        self.bag_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_airline_serial_and_counter() {
        let tag = BaggageTag::parse("0014123456003", Some(6)).expect("tag should parse");

        assert_eq!(tag.airline_code(), "014");
        assert_eq!(tag.serial_number(), "123456");
    }

    #[test]
    fn counter_is_the_count_from_version_7() {
        let tag = BaggageTag::parse("0014123456001", Some(7)).expect("tag should parse");
        assert_eq!(tag.bag_count(), Some(1));
    }

    #[test]
    fn counter_is_zero_based_before_version_7() {
        let tag = BaggageTag::parse("0014123456000", Some(6)).expect("tag should parse");
        assert_eq!(tag.bag_count(), Some(1));

        let tag = BaggageTag::parse("0014123456002", Some(6)).expect("tag should parse");
        assert_eq!(tag.bag_count(), Some(3));
    }

    #[test]
    fn absent_version_counts_zero_based() {
        let tag = BaggageTag::parse("0014123456000", None).expect("tag should parse");
        assert_eq!(tag.bag_count(), Some(1));
    }

    #[test]
    fn blank_or_truncated_tags_are_absent() {
        assert_eq!(BaggageTag::parse("             ", Some(6)), None);
        assert_eq!(BaggageTag::parse("0014123", Some(6)), None);
    }
}
