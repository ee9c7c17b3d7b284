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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The input is shorter than a mandatory header plus one mandatory leg.
    InputTooShort {
        actual: usize,
    },
    /// The format code is not `M`. Other IATA format codes (e.g. `S`) are
    /// unsupported.
    InvalidFormatCode {
        found: char,
    },
    /// A mandatory field of the first leg failed structural validation.
    InvalidLeg {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    /// An internal fault was caught at the decode entry point.
    Internal {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooShort { actual } => {
                write!(
                    f,
                    "input should be at least 60 characters long but is {actual}"
                )
            }
            Self::InvalidFormatCode { found } => {
                write!(f, "format code is \"{found}\" but should be M")
            }
            Self::InvalidLeg {
                field,
                value,
                expected,
            } => {
                write!(f, "found \"{value}\" in {field} but should be {expected}")
            }
            Self::Internal { message } => {
                write!(f, "decoder fault: {message}")
            }
        }
    }
}

impl error::Error for Error {}
