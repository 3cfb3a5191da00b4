//! # Contracts
//!
//! Frozen interface contracts, defining inter-crate data structures.
//! All business crates can only depend on this crate, reverse dependencies
//! are prohibited.
//!
//! ## Time Model
//! - Elapsed time (`cts`) and durations are milliseconds, `f64`
//! - Wall-clock dates are `chrono::DateTime<Utc>`
//! - Missing data is `Option::None`, never a sentinel value

mod config;
mod error;
mod four_cc;
mod packet;
mod report;
mod timing;

pub use config::*;
pub use error::*;
pub use four_cc::FourCc;
pub use packet::*;
pub use report::FusionReport;
pub use timing::*;
