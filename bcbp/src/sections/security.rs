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
use crate::sections::hex_size;

/// The trailing security data, introduced by the `^` sentinel.
///
/// The payload is opaque to the decoder; airlines sign their passes with
/// schemes of their own.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SecurityData<'a> {
    /// Item 28: Type of Security Data.
    pub type_code: Option<&'a str>,
    /// Item 30: Security Data, kept raw.
    pub payload: Option<&'a str>,
}

impl<'a> SecurityData<'a> {
    pub(crate) fn parse(scanner: &mut Scanner<'a>) -> Self {
        scanner.read(1, "Security Data Marker", Section::Security);
        let type_code = scanner
            .read(1, "Security Data Type", Section::Security)
            .map(str::trim);
        let size = scanner
            .read(2, "Security Data Size", Section::Security)
            .map_or(0, hex_size);

        let payload = if size > 0 {
            let end = (scanner.position() + size).min(scanner.input_len());
            scanner.read_within(end, size, "Security Data", Section::Security)
        } else {
            None
        };

        Self { type_code, payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_section() {
        let mut scanner = Scanner::new("^10AABCDEFGHIJ");
        let security = SecurityData::parse(&mut scanner);

        assert_eq!(security.type_code, Some("1"));
        assert_eq!(security.payload, Some("ABCDEFGHIJ"));
        assert_eq!(scanner.position(), 14);
    }

    #[test]
    fn payload_is_bounded_by_the_size_field() {
        let mut scanner = Scanner::new("^104ABCDEFGHIJ");
        let security = SecurityData::parse(&mut scanner);

        assert_eq!(security.payload, Some("ABCD"));
        assert_eq!(scanner.position(), 8);
    }

    #[test]
    fn truncated_payload_yields_what_remains() {
        let mut scanner = Scanner::new("^110ABC");
        let security = SecurityData::parse(&mut scanner);

        assert_eq!(security.payload, Some("ABC"));
    }

    #[test]
    fn zero_size_has_no_payload() {
        let mut scanner = Scanner::new("^100");
        let security = SecurityData::parse(&mut scanner);

        assert_eq!(security.type_code, Some("1"));
        assert_eq!(security.payload, None);
    }
}
