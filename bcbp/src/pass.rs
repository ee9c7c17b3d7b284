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

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "serde")]
use serde::Serialize;

use log::{debug, trace, warn};

use crate::scanner::{Scanner, Section, Segment};
use crate::sections::{Header, Leg, LegExtension, SecurityData, UniqueData, HEADER_LENGTH, LEG_LENGTH};
use crate::Error;

/// The minimum viable input: a mandatory header plus one mandatory leg.
pub const MIN_INPUT_LENGTH: usize = HEADER_LENGTH + LEG_LENGTH;

/// A decoded boarding pass.
///
/// The value borrows from the input string; all field values are subslices
/// of it. Next to the typed fields, [`segments`](Self::segments) records
/// every consumed span in input order for raw-data inspection.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BoardingPass<'a> {
    /// Item 1: Format Code, always `M`.
    pub format_code: char,
    /// Item 5: the number of legs the header declares. The decoded
    /// [`legs`](Self::legs) can be fewer on truncated input.
    pub number_of_legs: u8,
    /// Item 11: Passenger Name, trimmed.
    pub passenger_name: &'a str,
    /// Item 253: Electronic Ticket Indicator, kept raw.
    pub electronic_ticket: &'a str,
    /// The decoded legs, in input order.
    pub legs: Vec<Leg<'a>>,
    /// The airline unique conditional data, if any leg carried one.
    pub unique: Option<UniqueData<'a>>,
    /// The trailing security data, if present.
    pub security: Option<SecurityData<'a>>,
    segments: Vec<Segment<'a>>,
}

impl<'a> BoardingPass<'a> {
    /// Decodes a boarding pass from the flat-text barcode payload.
    ///
    /// Decoding is best-effort: damaged or truncated input still yields a
    /// pass with the affected fields absent. Only a structurally unsound
    /// input is rejected as a whole.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than [`MIN_INPUT_LENGTH`],
    /// the format code is not `M`, or the first leg fails structural
    /// validation. Any internal fault is caught here and returned as
    /// [`Error::Internal`] instead of propagating.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcbp::BoardingPass;
    ///
    /// # fn main() -> Result<(), bcbp::Error> {
    /// let pass =
    ///     BoardingPass::decode("M1DOE/JOHN            EABCDEF LHRJFKBA 00123100Y012A0000110 0")?;
    ///
    /// assert_eq!(pass.passenger_name, "DOE/JOHN");
    /// assert_eq!(pass.legs[0].flight_number, "123");
    /// #     Ok(())
    /// # }
    /// ```
    pub fn decode(input: &'a str) -> Result<Self, Error> {
        panic::catch_unwind(AssertUnwindSafe(|| Self::decode_inner(input))).unwrap_or_else(
            |cause| {
                Err(Error::Internal {
                    message: panic_message(&cause),
                })
            },
        )
    }

    fn decode_inner(input: &'a str) -> Result<Self, Error> {
        if input.len() < MIN_INPUT_LENGTH {
            return Err(Error::InputTooShort {
                actual: input.len(),
            });
        }

        let mut scanner = Scanner::new(input);
        let header = Header::parse(&mut scanner)?;
        debug!(
            "decoding {} leg(s) for \"{}\"",
            header.number_of_legs, header.passenger_name
        );

        let mut legs = Vec::with_capacity(header.number_of_legs as usize);
        let mut unique: Option<UniqueData<'a>> = None;

        for index in 0..header.number_of_legs {
            if scanner.position() >= scanner.input_len() {
                warn!(
                    "input ends after {} of {} legs",
                    legs.len(),
                    header.number_of_legs
                );
                break;
            }

            let (mut leg, conditional_size) = Leg::parse(&mut scanner, index == 0)?;

            if conditional_size > 0 {
                let block_end = (scanner.position() + conditional_size).min(scanner.input_len());
                trace!("leg {}: {conditional_size} characters of conditional data", index + 1);

                if unique.is_none() && scanner.peek(1) == ">" {
                    unique = Some(UniqueData::parse(&mut scanner, block_end));
                }
                if scanner.position() < block_end {
                    leg.extension = LegExtension::parse(&mut scanner, block_end);
                }
                if scanner.position() < block_end {
                    let remaining = block_end - scanner.position();
                    scanner.read_within(block_end, remaining, "Airline Use", Section::ConditionalLeg);
                }
            }

            legs.push(leg);
        }

        let security = if scanner.peek(1) == "^" {
            Some(SecurityData::parse(&mut scanner))
        } else {
            None
        };

        Ok(Self {
            format_code: header.format_code,
            number_of_legs: header.number_of_legs,
            passenger_name: header.passenger_name,
            electronic_ticket: header.electronic_ticket,
            legs,
            unique,
            security,
            segments: scanner.into_segments(),
        })
    }

    /// Returns `true` if the pass was issued against an electronic ticket.
    pub fn is_electronic(&self) -> bool {
        self.electronic_ticket == "E"
    }

    /// Every consumed span in strictly increasing offset order.
    ///
    /// The segments tile the consumed prefix of the input: consecutive
    /// segments share a boundary and the first one starts at offset 0.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// The number of input characters the decoder consumed.
    pub fn consumed_len(&self) -> usize {
        self.segments.last().map_or(0, |segment| segment.end)
    }

    /// The segment covering `offset`, or `None` past the consumed range.
    pub fn segment_at(&self, offset: usize) -> Option<&Segment<'a>> {
        let index = self
            .segments
            .partition_point(|segment| segment.end <= offset);
        self.segments
            .get(index)
            .filter(|segment| segment.contains(offset))
    }
}

impl<'a> TryFrom<&'a str> for BoardingPass<'a> {
    type Error = Error;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        Self::decode(input)
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown fault".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_LEG: &str = "M1DOE/JOHN            EABCDEF LHRJFKBA 00123100Y012A0000110 0";

    #[test]
    fn minimal_single_leg_pass() {
        let pass = BoardingPass::decode(SINGLE_LEG).expect("pass should decode");

        assert_eq!(pass.format_code, 'M');
        assert_eq!(pass.number_of_legs, 1);
        assert_eq!(pass.passenger_name, "DOE/JOHN");
        assert!(pass.is_electronic());
        assert_eq!(pass.legs.len(), 1);
        assert_eq!(pass.legs[0].departure_airport, "LHR");
        assert_eq!(pass.legs[0].arrival_airport, "JFK");
        assert_eq!(pass.legs[0].flight_number, "123");
        assert_eq!(pass.unique, None);
        assert_eq!(pass.security, None);
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(
            BoardingPass::decode("SHORT"),
            Err(Error::InputTooShort { actual: 5 })
        );
    }

    #[test]
    fn non_m_format_code_is_rejected() {
        let input = SINGLE_LEG.replacen('M', "S", 1);

        assert_eq!(
            BoardingPass::decode(&input),
            Err(Error::InvalidFormatCode { found: 'S' })
        );
    }

    #[test]
    fn decoding_is_idempotent() {
        let first = BoardingPass::decode(SINGLE_LEG).expect("pass should decode");
        let second = BoardingPass::decode(SINGLE_LEG).expect("pass should decode");

        assert_eq!(first, second);
    }

    #[test]
    fn segment_at_resolves_every_consumed_offset() {
        let pass = BoardingPass::decode(SINGLE_LEG).expect("pass should decode");

        for offset in 0..pass.consumed_len() {
            let segment = pass.segment_at(offset).expect("offset should be covered");
            assert!(segment.contains(offset));
        }
        assert_eq!(pass.segment_at(pass.consumed_len()), None);
        assert_eq!(pass.segment_at(0).map(|s| s.label), Some("Format Code"));
    }
}
