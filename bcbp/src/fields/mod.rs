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

//! Typed fields of the boarding pass sections.

mod baggage_tag;
mod compartment;
mod document_type;
mod flight_date;
mod gender;
mod issue_date;
mod passenger_status;

pub use baggage_tag::BaggageTag;
pub use compartment::Compartment;
pub use document_type::DocumentType;
pub use flight_date::FlightDate;
pub use gender::Gender;
pub use issue_date::IssueDate;
pub use passenger_status::PassengerStatus;

/// Trims a field and strips leading zeros.
///
/// An all-zero field normalizes to the empty string, not to `"0"`.
pub(crate) fn strip_leading_zeros(raw: &str) -> &str {
    raw.trim().trim_start_matches('0')
}
