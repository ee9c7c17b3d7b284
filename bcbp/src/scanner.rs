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

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The part of the barcode payload a [`Segment`] belongs to.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Section {
    /// The 23 character mandatory header.
    Header,
    /// A 37 character mandatory leg block.
    LegMandatory,
    /// The airline unique conditional data, at most once per pass.
    ConditionalUnique,
    /// The repeated per-leg conditional data.
    ConditionalLeg,
    /// The trailing security data.
    Security,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::LegMandatory => "leg_mandatory",
            Self::ConditionalUnique => "conditional_unique",
            Self::ConditionalLeg => "conditional_leg",
            Self::Security => "security",
        };
        write!(f, "{name}")
    }
}

/// One decoded field occurrence.
///
/// Segments are created in strictly increasing offset order and tile the
/// consumed prefix of the input without gaps or overlaps, which lets a
/// raw-data inspector resolve any offset back to the field that covers it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Segment<'a> {
    /// Human readable field name.
    pub label: &'static str,
    /// The field's value with surrounding whitespace removed.
    pub value: &'a str,
    /// The original substring, untrimmed.
    pub raw: &'a str,
    /// Byte offset of the first consumed character.
    pub start: usize,
    /// Byte offset one past the last consumed character.
    pub end: usize,
    /// The section this field belongs to.
    pub section: Section,
}

impl Segment<'_> {
    /// Returns `true` if `offset` falls within this segment's span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// A position-tracking reader over the immutable input string.
///
/// Reads never fail: a field requested near the end of a short or corrupt
/// input yields whatever remains ("fail-soft"), and a read at the end of the
/// input yields nothing at all. Each consumed span is recorded as a
/// [`Segment`].
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    segments: Vec<Segment<'a>>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            segments: Vec::new(),
        }
    }

    /// Consumes up to `len` characters and records them as a [`Segment`].
    ///
    /// Returns `None` without consuming anything if the cursor is at the end
    /// of the input, otherwise the raw substring of `min(len, remaining)`
    /// characters.
    pub(crate) fn read(
        &mut self,
        len: usize,
        label: &'static str,
        section: Section,
    ) -> Option<&'a str> {
        self.read_within(self.input.len(), len, label, section)
    }

    /// Like [`read`](Self::read), but never consumes past the byte offset
    /// `end` of a self-sized section.
    pub(crate) fn read_within(
        &mut self,
        end: usize,
        len: usize,
        label: &'static str,
        section: Section,
    ) -> Option<&'a str> {
        let end = self.boundary(end);
        if self.pos >= end {
            return None;
        }

        let stop = self.boundary((self.pos + len).min(end));
        let raw = &self.input[self.pos..stop];
        self.segments.push(Segment {
            label,
            value: raw.trim(),
            raw,
            start: self.pos,
            end: stop,
            section,
        });
        self.pos = stop;
        Some(raw)
    }

    /// Returns the next `len` characters (or fewer near the end of input)
    /// without consuming them and without recording a segment.
    pub(crate) fn peek(&self, len: usize) -> &'a str {
        let stop = self.boundary(self.pos + len);
        &self.input[self.pos..stop]
    }

    /// The current cursor offset.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn input_len(&self) -> usize {
        self.input.len()
    }

    pub(crate) fn into_segments(self) -> Vec<Segment<'a>> {
        self.segments
    }

    // The payload is 7-bit per the IATA standard, but a stray multi-byte
    // character must not split a code point.
    fn boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.input.len());
        while !self.input.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_consumes_and_records() {
        let mut scanner = Scanner::new("M1DOE/JOHN");

        assert_eq!(scanner.read(1, "Format Code", Section::Header), Some("M"));
        assert_eq!(scanner.read(1, "Number of Legs", Section::Header), Some("1"));
        assert_eq!(scanner.position(), 2);

        let segments = scanner.into_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Format Code");
        assert_eq!(segments[0].start, 0);
        assert_eq!(segments[0].end, 1);
        assert_eq!(segments[1].start, 1);
    }

    #[test]
    fn read_truncates_at_end_of_input() {
        let mut scanner = Scanner::new("AB");

        assert_eq!(scanner.read(5, "Flight Number", Section::LegMandatory), Some("AB"));
        assert_eq!(scanner.read(5, "Date of Flight", Section::LegMandatory), None);
        assert_eq!(scanner.position(), 2);
        assert_eq!(scanner.into_segments().len(), 1);
    }

    #[test]
    fn read_within_respects_section_end() {
        let mut scanner = Scanner::new("ABCDEFGH");

        assert_eq!(scanner.read_within(3, 5, "Issuer", Section::ConditionalUnique), Some("ABC"));
        assert_eq!(scanner.read_within(3, 1, "Reserved", Section::ConditionalUnique), None);
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn peek_does_not_consume() {
        let scanner = Scanner::new(">102PA");

        assert_eq!(scanner.peek(1), ">");
        assert_eq!(scanner.peek(100), ">102PA");
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn value_is_trimmed_raw_is_not() {
        let mut scanner = Scanner::new("BA 00123");

        scanner.read(3, "Operating Carrier", Section::LegMandatory);
        let segments = scanner.into_segments();
        assert_eq!(segments[0].raw, "BA ");
        assert_eq!(segments[0].value, "BA");
    }

    #[test]
    fn segments_tile_the_consumed_range() {
        let mut scanner = Scanner::new("M1DOE/JOHN            E");
        scanner.read(1, "Format Code", Section::Header);
        scanner.read(1, "Number of Legs", Section::Header);
        scanner.read(20, "Passenger Name", Section::Header);
        scanner.read(1, "Electronic Ticket Indicator", Section::Header);

        let segments = scanner.into_segments();
        assert_eq!(segments[0].start, 0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments.last().map(|s| s.end), Some(23));
    }
}
