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

/// Item 113: Passenger Status.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PassengerStatus(char);

impl PassengerStatus {
    pub fn from_code(code: char) -> Self {
        Self(code)
    }

    /// The raw status code.
    pub fn code(&self) -> char {
        self.0
    }

    /// The status description for this code.
    ///
    /// Unrecognized codes map to `"Unknown Status"`.
    pub fn description(&self) -> &'static str {
        match self.0 {
            '0' => "Ticket issuance, passenger not checked in",
            '1' => "Ticket issuance, passenger checked in",
            '2' => "Baggage checked, passenger not checked in",
            '3' => "Baggage checked, passenger checked in",
            '4' => "Passenger passed security check",
            '5' => "Passenger passed gate exit",
            '6' => "Transit",
            '7' => "Standby",
            '8' => "Boarding pass revalidation done",
            '9' => "Original boarding line used at time of ticket issuance",
            'A' => "Up- or downgrade",
            _ => "Unknown Status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_describe_the_status() {
        assert_eq!(
            PassengerStatus::from_code('1').description(),
            "Ticket issuance, passenger checked in"
        );
        assert_eq!(PassengerStatus::from_code('7').description(), "Standby");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(PassengerStatus::from_code('#').description(), "Unknown Status");
    }
}
