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

//! IATA Bar-Coded Boarding Pass (BCBP) decoder.
//!
//! This crate decodes the flat-text payload embedded in PDF417 or Aztec
//! boarding-pass barcodes into a structured, field-level representation.
//! The parser is zero-copy: a [`BoardingPass`] borrows the input string and
//! every field value is a subslice of it.
//!
//! Decoding a pass is best-effort by design. A truncated or damaged payload
//! still yields a result with the affected fields absent; only an input that
//! is too short to hold the mandatory [sections] or fails the first leg's
//! structural validation is rejected outright.
//!
//! # Examples
//!
//! Lets decode a single-leg pass and print the flight:
//!
//! ```
//! use bcbp::BoardingPass;
//!
//! # fn main() -> Result<(), bcbp::Error> {
//! let pass =
//!     BoardingPass::decode("M1DOE/JOHN            EABCDEF LHRJFKBA 00123100Y012A0000110 0")?;
//!
//! let leg = &pass.legs[0];
//! println!(
//!     "{} {} from {} to {}, seat {}",
//!     leg.operating_carrier, leg.flight_number, leg.departure_airport,
//!     leg.arrival_airport, leg.seat_number,
//! ); // => "BA 123 from LHR to JFK, seat 12A"
//! #     Ok(())
//! # }
//! ```
//!
//! Every consumed span is also recorded as a [`Segment`], which lets a
//! raw-data inspector resolve any offset of the input back to the field
//! covering it:
//!
//! ```
//! # use bcbp::BoardingPass;
//! # fn main() -> Result<(), bcbp::Error> {
//! # let pass =
//! #     BoardingPass::decode("M1DOE/JOHN            EABCDEF LHRJFKBA 00123100Y012A0000110 0")?;
//! let segment = pass.segment_at(2).expect("offset 2 is consumed");
//! assert_eq!(segment.label, "Passenger Name");
//! #     Ok(())
//! # }
//! ```
//!
//! [sections]: crate::sections

mod error;
mod pass;
mod reference;
mod scanner;

pub mod fields;
pub mod sections;

pub use error::Error;
pub use pass::{BoardingPass, MIN_INPUT_LENGTH};
pub use reference::{AirportInfo, ReferenceData};
pub use scanner::{Section, Segment};
