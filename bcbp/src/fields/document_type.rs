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

/// Item 16: Document Type.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DocumentType(char);

impl DocumentType {
    pub fn from_code(code: char) -> Self {
        Self(code)
    }

    pub fn code(&self) -> char {
        self.0
    }

    /// Unrecognized codes map to `"Unknown Document"`.
    pub fn description(&self) -> &'static str {
        match self.0 {
            'B' => "Boarding pass",
            'I' => "Itinerary receipt",
            _ => "Unknown Document",
        }
    }
}
