//! Numeric helpers.

/// Whether two numbers have the same parity (both odd or both even).
///
/// Timetables assign directions by track-number parity, so this comes up
/// when pairing trains with platforms.
pub fn same_parity(a: i32, b: i32) -> bool {
    (a - b) % 2 == 0
}
