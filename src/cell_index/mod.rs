//! Bit-level packing and unpacking of the 64-bit cell index.
//!
//! All field accessors are pure functions over compile-time mask/shift
//! constants and treat the word as unsigned throughout. Extraction is total:
//! an index is assumed to already be well formed, and garbage in produces
//! garbage out rather than an error. Validation of externally supplied bit
//! patterns belongs at the text boundary (see [`inspection::is_valid_cell`]).

pub mod inspection;
pub mod string_conv;

use crate::constants::{
  BASE_CELL_MASK, BASE_CELL_MASK_NEGATIVE, BASE_CELL_OFFSET, CELL_INIT, CELL_MODE, DIGIT_MASK, HIGH_BIT_MASK,
  HIGH_BIT_MASK_NEGATIVE, MAX_GRID_RES, MODE_DEPENDENT_MASK, MODE_DEPENDENT_MASK_NEGATIVE, MODE_DEPENDENT_OFFSET,
  MODE_MASK, MODE_MASK_NEGATIVE, MODE_OFFSET, PER_DIGIT_OFFSET, RES_MASK, RES_MASK_NEGATIVE, RES_OFFSET,
};
use crate::types::{CellIndex, Digit, GridError};

pub use inspection::{is_pentagon, is_valid_cell, num_cells, pentagon_count, pentagons};
pub use string_conv::{cell_to_string, cell_to_string_alloc, string_to_cell};

/// Gets the mode of the cell index.
#[inline(always)]
#[must_use]
pub const fn get_mode(h: CellIndex) -> u8 {
  ((h.0 & MODE_MASK) >> MODE_OFFSET) as u8
}

/// Sets the mode of the cell index.
#[inline(always)]
pub fn set_mode(h: &mut CellIndex, mode: u8) {
  h.0 = (h.0 & MODE_MASK_NEGATIVE) | (((mode & 0b1111) as u64) << MODE_OFFSET);
}

/// Gets the mode-dependent bits of the cell index. Zero for cell indexes.
#[inline(always)]
#[must_use]
pub const fn get_mode_dependent(h: CellIndex) -> u8 {
  ((h.0 & MODE_DEPENDENT_MASK) >> MODE_DEPENDENT_OFFSET) as u8
}

/// Sets the mode-dependent bits of the cell index.
#[inline(always)]
pub fn set_mode_dependent(h: &mut CellIndex, v: u8) {
  h.0 = (h.0 & MODE_DEPENDENT_MASK_NEGATIVE) | (((v & 0b111) as u64) << MODE_DEPENDENT_OFFSET);
}

/// Gets the resolution of the cell index, 0 through 15.
#[inline(always)]
#[must_use]
pub const fn get_resolution(h: CellIndex) -> i32 {
  ((h.0 & RES_MASK) >> RES_OFFSET) as i32
}

/// Sets the resolution field of the cell index.
///
/// Replaces the 4 resolution bits only; digit slots are left untouched, so a
/// caller truncating an index to a coarser resolution must separately mark
/// the now-unused slots (see [`crate::hierarchy::cell_to_parent`]).
#[inline(always)]
pub fn set_resolution(h: &mut CellIndex, res: i32) {
  h.0 = (h.0 & RES_MASK_NEGATIVE) | (((res as u64) & 0b1111) << RES_OFFSET);
}

/// Gets the base cell number of the cell index.
///
/// Pure extraction of the 7 base cell bits; values 122-127 can come out of
/// malformed patterns and are passed through unvalidated.
#[inline(always)]
#[must_use]
pub const fn get_base_cell(h: CellIndex) -> i32 {
  ((h.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as i32
}

/// Sets the base cell number of the cell index.
#[inline(always)]
pub fn set_base_cell(h: &mut CellIndex, base_cell: i32) {
  h.0 = (h.0 & BASE_CELL_MASK_NEGATIVE) | (((base_cell as u64) & 0b111_1111) << BASE_CELL_OFFSET);
}

/// Gets the high bit of the cell index (0 for any valid index).
#[inline(always)]
#[must_use]
pub(crate) const fn get_high_bit(h: CellIndex) -> u8 {
  ((h.0 & HIGH_BIT_MASK) >> 63) as u8
}

/// Sets the high bit of the cell index.
#[inline(always)]
pub fn set_high_bit(h: &mut CellIndex, v: u8) {
  h.0 = (h.0 & HIGH_BIT_MASK_NEGATIVE) | (((v & 1) as u64) << 63);
}

#[inline(always)]
const fn digit_shift(res: i32) -> u32 {
  ((MAX_GRID_RES - res) * PER_DIGIT_OFFSET as i32) as u32
}

/// Gets the digit at resolution `res` without validating `res`.
/// Callers must guarantee `res` is in [1,15].
#[inline(always)]
pub(crate) const fn digit_unchecked(h: CellIndex, res: i32) -> Digit {
  Digit::from_bits(((h.0 >> digit_shift(res)) & DIGIT_MASK) as u8)
}

/// Sets the digit at resolution `res` without validating `res`.
/// Callers must guarantee `res` is in [1,15].
#[inline(always)]
pub(crate) fn set_digit_unchecked(h: &mut CellIndex, res: i32, digit: Digit) {
  let shift = digit_shift(res);
  h.0 = (h.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift);
}

/// Gets the digit at the given resolution `res` from the cell index.
///
/// `res` must be in [1,15]; resolution 0 addresses the base cell, not a
/// digit. Out-of-range `res` is a caller error.
#[inline]
pub fn get_index_digit(h: CellIndex, res: i32) -> Result<Digit, GridError> {
  if res < 1 || res > MAX_GRID_RES {
    return Err(GridError::ResDomain);
  }
  Ok(digit_unchecked(h, res))
}

/// Sets the digit at the given resolution `res` in the cell index.
///
/// `res` must be in [1,15]; out-of-range `res` is a caller error.
#[inline]
pub fn set_index_digit(h: &mut CellIndex, res: i32, digit: Digit) -> Result<(), GridError> {
  if res < 1 || res > MAX_GRID_RES {
    return Err(GridError::ResDomain);
  }
  set_digit_unchecked(h, res, digit);
  Ok(())
}

/// Initializes a cell index with a given resolution, base cell, and initial
/// digit for every resolution level up to `res`.
///
/// Starts from the all-invalid-digits pattern, so slots finer than `res`
/// keep the invalid sentinel. The mode is set to [`CELL_MODE`]. Fields are
/// masked into range rather than validated, matching the raw field setters.
pub fn set_cell_index(h: &mut CellIndex, res: i32, base_cell: i32, init_digit: Digit) {
  h.0 = CELL_INIT;
  set_mode(h, CELL_MODE);
  set_resolution(h, res);
  set_base_cell(h, base_cell);
  for r in 1..=res.min(MAX_GRID_RES) {
    set_digit_unchecked(h, r, init_digit);
  }
}

/// Returns the coarsest non-center digit of the index, scanning from
/// resolution 1 toward the index's own resolution. `Center` if every digit
/// along the way is the center digit.
#[inline]
#[must_use]
pub(crate) fn leading_non_zero_digit(h: CellIndex) -> Digit {
  let res = get_resolution(h);
  for r in 1..=res {
    let digit = digit_unchecked(h, r);
    if digit != Digit::Center {
      return digit;
    }
  }
  Digit::Center
}
