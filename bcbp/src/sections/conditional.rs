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

use log::trace;

use crate::fields::{BaggageTag, DocumentType, Gender, IssueDate};
use crate::scanner::{Scanner, Section};
use crate::sections::hex_size;

/// The airline unique conditional data.
///
/// Introduced by the `>` sentinel and self-sized. Appears at most once per
/// pass, attached to the first leg that offers it. Unknown trailing bytes of
/// the section are consumed as reserved padding; a newer version of the
/// format may define them, this decoder discards them.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UniqueData<'a> {
    /// Item 9: Version Number.
    pub version: Option<u8>,
    /// Item 15: Passenger Description.
    pub passenger_description: Option<&'a str>,
    /// Item 12: Source of Check-in.
    pub check_in_source: Option<&'a str>,
    /// Item 14: Source of Boarding Pass Issuance.
    pub issuance_source: Option<&'a str>,
    /// Item 22: Date of Issue of Boarding Pass.
    pub issue_date: Option<IssueDate<'a>>,
    /// Item 16: Document Type.
    pub document_type: Option<DocumentType>,
    /// Item 21: Airline Designator of Boarding Pass Issuer.
    pub issuer: Option<&'a str>,
    /// Item 23: up to two Baggage Tag Licence Plate Numbers.
    pub baggage_tags: Vec<BaggageTag<'a>>,
}

impl<'a> UniqueData<'a> {
    /// Parses the unique section, consuming no more than up to `block_end`.
    pub(crate) fn parse(scanner: &mut Scanner<'a>, block_end: usize) -> Self {
        scanner.read_within(block_end, 1, "Unique Data Marker", Section::ConditionalUnique);
        let version = scanner
            .read_within(block_end, 1, "Version Number", Section::ConditionalUnique)
            .and_then(|s| s.trim().parse().ok());
        let size = scanner
            .read_within(block_end, 2, "Unique Data Size", Section::ConditionalUnique)
            .map_or(0, hex_size);
        let end = (scanner.position() + size).min(block_end);
        trace!("unique data: version {version:?}, {size} characters");

        if size == 0 {
            return Self {
                version,
                ..Self::default()
            };
        }

        let passenger_description = scanner
            .read_within(end, 1, "Passenger Description", Section::ConditionalUnique)
            .map(str::trim);
        let check_in_source = scanner
            .read_within(end, 1, "Source of Check-in", Section::ConditionalUnique)
            .map(str::trim);
        let issuance_source = scanner
            .read_within(end, 1, "Source of Issuance", Section::ConditionalUnique)
            .map(str::trim);
        let issue_date = scanner
            .read_within(end, 4, "Date of Issue", Section::ConditionalUnique)
            .map(IssueDate::parse);
        let document_type = scanner
            .read_within(end, 1, "Document Type", Section::ConditionalUnique)
            .and_then(|s| s.trim().chars().next())
            .map(DocumentType::from_code);
        let issuer = scanner
            .read_within(end, 3, "Boarding Pass Issuer", Section::ConditionalUnique)
            .map(str::trim);

        let mut baggage_tags = Vec::new();
        for _ in 0..2 {
            if end.saturating_sub(scanner.position()) < 13 {
                break;
            }
            let tag = scanner
                .read_within(end, 13, "Baggage Tag", Section::ConditionalUnique)
                .and_then(|raw| BaggageTag::parse(raw, version));
            if let Some(tag) = tag {
                baggage_tags.push(tag);
            }
        }

        if scanner.position() < end {
            let remaining = end - scanner.position();
            scanner.read_within(end, remaining, "Reserved", Section::ConditionalUnique);
        }

        Self {
            version,
            passenger_description,
            check_in_source,
            issuance_source,
            issue_date,
            document_type,
            issuer,
            baggage_tags,
        }
    }

    /// The passenger gender, a version 8 extension of the passenger
    /// description.
    ///
    /// Returns `None` below version 8. Codes other than `M`, `F`, `X` and
    /// `U` are coerced to [`Gender::Undisclosed`].
    pub fn gender(&self) -> Option<Gender> {
        match (self.version, self.passenger_description) {
            (Some(version), Some(description)) if version >= 8 => {
                Some(Gender::from_code(description.chars().next().unwrap_or(' ')))
            }
            _ => None,
        }
    }
}

/// The repeated per-leg conditional data.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LegExtension<'a> {
    /// Item 142: Airline Numeric Code.
    pub airline_numeric_code: Option<&'a str>,
    /// Item 143: Document Form/Serial Number.
    pub document_serial_number: Option<&'a str>,
    /// Item 18: Selectee Indicator.
    pub selectee: Option<&'a str>,
    /// Item 108: International Documentation Verification.
    pub international_document_verification: Option<&'a str>,
    /// Item 19: Marketing Carrier Designator.
    pub marketing_carrier: Option<&'a str>,
    /// Item 20: Frequent Flyer Airline Designator.
    pub frequent_flyer_airline: Option<&'a str>,
    /// Item 236: Frequent Flyer Number.
    pub frequent_flyer_number: Option<&'a str>,
    /// Item 89: ID/AD Indicator.
    pub id_ad_indicator: Option<&'a str>,
    /// Item 118: Free Baggage Allowance.
    pub free_baggage_allowance: Option<&'a str>,
    /// Item 254: Fast Track, `Y` means eligible.
    pub fast_track: Option<bool>,
}

impl<'a> LegExtension<'a> {
    /// Parses the per-leg section, consuming no more than up to `block_end`.
    ///
    /// Returns `None` if the section declares a size of zero.
    pub(crate) fn parse(scanner: &mut Scanner<'a>, block_end: usize) -> Option<Self> {
        let size = scanner
            .read_within(block_end, 2, "Leg Data Size", Section::ConditionalLeg)
            .map_or(0, hex_size);
        if size == 0 {
            return None;
        }
        let end = (scanner.position() + size).min(block_end);
        trace!("leg data: {size} characters");

        let airline_numeric_code = scanner
            .read_within(end, 3, "Airline Numeric Code", Section::ConditionalLeg)
            .map(str::trim);
        let document_serial_number = scanner
            .read_within(end, 10, "Document Serial Number", Section::ConditionalLeg)
            .map(str::trim);
        let selectee = scanner
            .read_within(end, 1, "Selectee Indicator", Section::ConditionalLeg)
            .map(str::trim);
        let international_document_verification = scanner
            .read_within(end, 1, "International Document Verification", Section::ConditionalLeg)
            .map(str::trim);
        let marketing_carrier = scanner
            .read_within(end, 3, "Marketing Carrier", Section::ConditionalLeg)
            .map(str::trim);
        let frequent_flyer_airline = scanner
            .read_within(end, 3, "Frequent Flyer Airline", Section::ConditionalLeg)
            .map(str::trim);
        let frequent_flyer_number = scanner
            .read_within(end, 16, "Frequent Flyer Number", Section::ConditionalLeg)
            .map(str::trim);
        let id_ad_indicator = scanner
            .read_within(end, 1, "ID/AD Indicator", Section::ConditionalLeg)
            .map(str::trim);
        let free_baggage_allowance = scanner
            .read_within(end, 3, "Free Baggage Allowance", Section::ConditionalLeg)
            .map(str::trim);
        let fast_track = scanner
            .read_within(end, 1, "Fast Track", Section::ConditionalLeg)
            .map(|s| s.trim() == "Y");

        if scanner.position() < end {
            let remaining = end - scanner.position();
            scanner.read_within(end, remaining, "Reserved", Section::ConditionalLeg);
        }

        Some(Self {
            airline_numeric_code,
            document_serial_number,
            selectee,
            international_document_verification,
            marketing_carrier,
            frequent_flyer_airline,
            frequent_flyer_number,
            id_ad_indicator,
            free_baggage_allowance,
            fast_track,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_section() {
        // version 1 with a 2-character payload
        let mut scanner = Scanner::new(">102PA");
        let unique = UniqueData::parse(&mut scanner, 6);

        assert_eq!(unique.version, Some(1));
        assert_eq!(unique.passenger_description, Some("P"));
        assert_eq!(unique.check_in_source, Some("A"));
        assert_eq!(unique.issuance_source, None);
        assert_eq!(unique.issue_date, None);
        assert_eq!(scanner.position(), 6);
    }

    #[test]
    fn unique_section_with_baggage_tag() {
        let input = ">6180WW2165BAC 0014123456003";
        let mut scanner = Scanner::new(input);
        let unique = UniqueData::parse(&mut scanner, input.len());

        assert_eq!(unique.version, Some(6));
        assert_eq!(unique.passenger_description, Some("0"));
        assert_eq!(unique.check_in_source, Some("W"));
        assert_eq!(unique.issuance_source, Some("W"));
        assert_eq!(unique.issue_date.and_then(|d| d.day_of_year()), Some(216));
        assert_eq!(unique.issue_date.and_then(|d| d.year(2026)), Some(2025));
        assert_eq!(unique.document_type.map(|d| d.code()), Some('B'));
        assert_eq!(unique.issuer, Some("AC"));
        assert_eq!(unique.baggage_tags.len(), 1);
        assert_eq!(unique.baggage_tags[0].airline_code(), "014");
        assert_eq!(unique.baggage_tags[0].bag_count(), Some(4));
    }

    #[test]
    fn unique_section_trailing_bytes_are_reserved() {
        // declared size 0D covers two unknown bytes after the issuer
        let input = ">60D0WW2165BAC XX";
        let mut scanner = Scanner::new(input);
        let unique = UniqueData::parse(&mut scanner, input.len());

        assert_eq!(unique.issuer, Some("AC"));
        assert!(unique.baggage_tags.is_empty());
        assert_eq!(scanner.position(), input.len());

        let segments = scanner.into_segments();
        let reserved = segments.last().expect("segments should not be empty");
        assert_eq!(reserved.label, "Reserved");
        assert_eq!(reserved.raw, "XX");
    }

    #[test]
    fn gender_is_a_version_8_extension() {
        let mut seven = Scanner::new(">702F");
        assert_eq!(UniqueData::parse(&mut seven, 5).gender(), None);

        let mut eight = Scanner::new(">802F");
        assert_eq!(UniqueData::parse(&mut eight, 5).gender(), Some(Gender::Female));

        let mut coerced = Scanner::new(">802Q");
        assert_eq!(
            UniqueData::parse(&mut coerced, 5).gender(),
            Some(Gender::Undisclosed)
        );
    }

    #[test]
    fn leg_extension() {
        let input = "2A014123456789001AC AC 1234567890123456020KY";
        let mut scanner = Scanner::new(input);
        let extension =
            LegExtension::parse(&mut scanner, input.len()).expect("extension should parse");

        assert_eq!(extension.airline_numeric_code, Some("014"));
        assert_eq!(extension.document_serial_number, Some("1234567890"));
        assert_eq!(extension.selectee, Some("0"));
        assert_eq!(extension.international_document_verification, Some("1"));
        assert_eq!(extension.marketing_carrier, Some("AC"));
        assert_eq!(extension.frequent_flyer_airline, Some("AC"));
        assert_eq!(extension.frequent_flyer_number, Some("1234567890123456"));
        assert_eq!(extension.id_ad_indicator, Some("0"));
        assert_eq!(extension.free_baggage_allowance, Some("20K"));
        assert_eq!(extension.fast_track, Some(true));
    }

    #[test]
    fn zero_sized_leg_extension_is_absent() {
        let mut scanner = Scanner::new("00REMAINDER");

        assert_eq!(LegExtension::parse(&mut scanner, 11), None);
        assert_eq!(scanner.position(), 2);
    }
}
