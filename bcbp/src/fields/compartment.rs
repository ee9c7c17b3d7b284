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

/// Item 71: Compartment Code.
///
/// A single-character class-of-service designator. Codes outside the known
/// set are valid, just undocumented to this decoder, so the code itself is
/// always kept.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Compartment(char);

impl Compartment {
    pub fn from_code(code: char) -> Self {
        Self(code)
    }

    /// The raw compartment code.
    pub fn code(&self) -> char {
        self.0
    }

    /// The class-of-service description for this code.
    ///
    /// Unrecognized codes map to `"Unknown Class"`.
    pub fn description(&self) -> &'static str {
        match self.0 {
            'F' => "First Class",
            'A' => "First Class Discounted",
            'J' => "Business Class Premium",
            'C' => "Business Class",
            'D' => "Business Class Discounted",
            'W' => "Economy Class Premium",
            'Y' => "Economy Class",
            'B' | 'H' | 'K' | 'L' | 'M' | 'N' | 'Q' | 'S' | 'T' | 'V' | 'X' => {
                "Economy Class Discounted"
            }
            _ => "Unknown Class",
        }
    }
}
