//! HRM text format parsing
//!
//! An HRM file is CRLF separated text: `[Params]` and other header sections of
//! `Label=value` lines, then one `[HRData]` block of tab separated sample rows
//! ended by a blank line.
//!
//! The pipeline runs leaf first:
//! - [`params`] pulls `Label=value` strings from the header area
//! - [`FeatureFlags::decode`](crate::FeatureFlags::decode) turns the mode code into channel flags
//! - [`temporal`] reads the start instant and session length
//! - [`samples`] splits the `[HRData]` block into typed rows
//! - [`distance`] adds elapsed time and integrated distance
//! - [`parser`] runs all of the above and assembles the record

pub mod distance;
pub mod numeric;
pub mod params;
pub mod parser;
pub mod samples;
pub mod temporal;

pub use parser::HrmParser;
