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

use crate::scanner::{Scanner, Section};
use crate::Error;

/// The fixed length of the mandatory header in characters.
pub const HEADER_LENGTH: usize = 23;

/// The 23-character mandatory header.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Header<'a> {
    /// Item 1: Format Code, always `M`.
    pub format_code: char,
    /// Item 5: Number of Legs Encoded.
    pub number_of_legs: u8,
    /// Item 11: Passenger Name, trimmed.
    pub passenger_name: &'a str,
    /// Item 253: Electronic Ticket Indicator, kept raw.
    pub electronic_ticket: &'a str,
}

impl<'a> Header<'a> {
    /// Parses the header off the scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if the format code is not `M`. An unparseable leg
    /// count defaults to 1 instead.
    pub(crate) fn parse(scanner: &mut Scanner<'a>) -> Result<Self, Error> {
        let format_code = scanner
            .read(1, "Format Code", Section::Header)
            .and_then(|s| s.chars().next())
            .unwrap_or(' ');
        if format_code != 'M' {
            return Err(Error::InvalidFormatCode { found: format_code });
        }

        let number_of_legs = scanner
            .read(1, "Number of Legs", Section::Header)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);

        let passenger_name = scanner
            .read(20, "Passenger Name", Section::Header)
            .map(str::trim)
            .unwrap_or("");

        let electronic_ticket = scanner
            .read(1, "Electronic Ticket Indicator", Section::Header)
            .unwrap_or("");

        Ok(Self {
            format_code,
            number_of_legs,
            passenger_name,
            electronic_ticket,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header() {
        let mut scanner = Scanner::new("M1DOE/JOHN            E");
        let header = Header::parse(&mut scanner).expect("header should parse");

        assert_eq!(header.format_code, 'M');
        assert_eq!(header.number_of_legs, 1);
        assert_eq!(header.passenger_name, "DOE/JOHN");
        assert_eq!(header.electronic_ticket, "E");
        assert_eq!(scanner.position(), HEADER_LENGTH);
    }

    #[test]
    fn format_code_must_be_m() {
        let mut scanner = Scanner::new("S1DOE/JOHN            E");

        assert_eq!(
            Header::parse(&mut scanner),
            Err(Error::InvalidFormatCode { found: 'S' })
        );
    }

    #[test]
    fn unparseable_leg_count_defaults_to_one() {
        let mut scanner = Scanner::new("MXDOE/JOHN            E");
        let header = Header::parse(&mut scanner).expect("header should parse");

        assert_eq!(header.number_of_legs, 1);
    }
}
