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

/// Passenger gender code, a version 8 extension.
///
/// The codes are constrained to `M`, `F`, `X` and `U`; anything else is
/// coerced to [`Undisclosed`](Gender::Undisclosed) rather than rejected.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Gender {
    Male,
    Female,
    Unspecified,
    Undisclosed,
}

impl Gender {
    pub fn from_code(code: char) -> Self {
        match code {
            'M' => Self::Male,
            'F' => Self::Female,
            'X' => Self::Unspecified,
            _ => Self::Undisclosed,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Unspecified => 'X',
            Self::Undisclosed => 'U',
        }
    }
}
