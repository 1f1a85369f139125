//! Parsing and formatting of `A1`-style coordinates.
//!
//! The leading letter picks the row (`A` is the top row) and the number
//! that follows picks the 1-based column.

use alloc::string::{String, ToString};

use crate::common::CoordError;
use crate::config::ROW_LABELS;

/// Parse a guess such as `"b2"` into zero-based `(row, col)` on a grid of
/// side `size`.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), CoordError> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(CoordError::Empty)?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return Err(CoordError::InvalidRow(row_ch));
    }
    let row = (row_ch as u8 - b'A') as usize;

    let col_str = chars.as_str().trim();
    let digits = !col_str.is_empty() && col_str.bytes().all(|b| b.is_ascii_digit());
    let col: usize = match col_str.parse() {
        Ok(c) if digits && c > 0 => c,
        _ => return Err(CoordError::InvalidColumn(col_str.to_string())),
    };

    if row >= size || col > size {
        return Err(CoordError::OutOfBounds {
            row: row_ch,
            col,
            size,
        });
    }
    Ok((row, col - 1))
}

/// Format zero-based `(row, col)` as a guess string, e.g. `(2, 1)` -> `"C2"`.
/// Rows past the last label are shown as `?`.
pub fn format_coord(row: usize, col: usize) -> String {
    let mut s = String::new();
    s.push(ROW_LABELS.get(row).copied().unwrap_or('?'));
    s.push_str(&(col + 1).to_string());
    s
}
