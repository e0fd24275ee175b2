//! timetable-support - shared helpers for the timetable application
//!
//! A collection of small, independent, pure functions used across the host:
//! - Color resolution: hex literals and well-known names to `#RRGGBB`,
//!   whiteness checks, contrast text color selection
//! - Text cleanup: blank detection, tokenization, markup stripping
//! - Fractional day/time conversions for the host's schedule encoding
//! - Typed access to tabular data records with default-or-error policy
//!
//! There is no I/O, no shared state and no concurrency here. The color,
//! text and datetime helpers are total functions; only the record
//! accessors return [`Result`], failing loudly when a required column is
//! missing, null or of the wrong type.

pub mod color;
pub mod datetime;
pub mod error;
pub mod markup;
pub mod num;
pub mod record;
pub mod text;

pub use error::{Result, SupportError};
pub use record::{Columns, Record, Value};

/// Get the library version
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
