// src/cell_index/inspection.rs

use crate::base_cells::{base_cell_to_index, is_base_cell_pentagon};
use crate::cell_index::{
  digit_unchecked, get_base_cell, get_high_bit, get_mode, get_mode_dependent, get_resolution, leading_non_zero_digit,
};
use crate::constants::{CELL_MODE, MAX_GRID_RES, NUM_BASE_CELLS, NUM_PENTAGONS, PER_DIGIT_OFFSET};
use crate::math::ipow;
use crate::types::{CellIndex, Digit, GridError};

/// Determines if a cell index addresses a pentagon.
///
/// True iff the base cell is one of the 12 pentagons and every digit from
/// resolution 1 through the index's resolution is the center digit: only the
/// lineage running through a pentagon's apex keeps the 5-child anomaly, and
/// any non-center step away from the apex lands on topologically hexagonal
/// ground. Total over all bit patterns; never panics on garbage input.
#[must_use]
pub fn is_pentagon(h: CellIndex) -> bool {
  is_base_cell_pentagon(get_base_cell(h)) && leading_non_zero_digit(h) == Digit::Center
}

/// Check that no digit from 1 to `res` is the invalid sentinel.
#[inline]
fn has_any_invalid_digit_up_to_res(h: CellIndex, res: i32) -> bool {
  for r in 1..=res {
    if digit_unchecked(h, r) == Digit::Invalid {
      return true;
    }
  }
  false
}

/// Check that all digit slots finer than `res` hold the invalid sentinel.
#[inline]
fn has_all_invalid_digits_after_res(h: CellIndex, res: i32) -> bool {
  let num_later_digits = MAX_GRID_RES - res;
  if num_later_digits == 0 {
    return true;
  }
  // The unused slots are the lowest bits of the word; all of them must be 1.
  let later_bits_mask: u64 = (1u64 << (num_later_digits * PER_DIGIT_OFFSET as i32)) - 1;
  h.0 & later_bits_mask == later_bits_mask
}

/// Check whether a pentagon lineage carries the deleted k-axes subsequence:
/// its coarsest non-center digit must never be the skipped digit.
fn has_deleted_subsequence(h: CellIndex, base_cell: i32) -> bool {
  is_base_cell_pentagon(base_cell) && leading_non_zero_digit(h) == Digit::KAxes
}

/// Validates a cell index.
///
/// This is the boundary check for bit patterns arriving from outside (for
/// example via [`super::string_to_cell`]); the field accessors themselves
/// stay total and unvalidated.
#[must_use]
pub fn is_valid_cell(h: CellIndex) -> bool {
  if get_high_bit(h) != 0 {
    return false;
  }
  if get_mode(h) != CELL_MODE {
    return false;
  }
  if get_mode_dependent(h) != 0 {
    return false;
  }

  let base_cell = get_base_cell(h);
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }

  let res = get_resolution(h);
  if has_any_invalid_digit_up_to_res(h, res) {
    return false;
  }
  if !has_all_invalid_digits_after_res(h, res) {
    return false;
  }
  if has_deleted_subsequence(h, base_cell) {
    return false;
  }

  true
}

/// Number of unique cells at the given resolution: `2 + 120 * 7^res`.
pub fn num_cells(res: i32) -> Result<i64, GridError> {
  if res < 0 || res > MAX_GRID_RES {
    return Err(GridError::ResDomain);
  }
  Ok(2 + 120 * ipow(7, res as i64))
}

/// Number of pentagons per resolution. Fixed by the icosahedron.
#[must_use]
pub fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// The 12 pentagon cell indexes at the given resolution, in base cell order.
pub fn pentagons(res: i32) -> Result<[CellIndex; 12], GridError> {
  if res < 0 || res > MAX_GRID_RES {
    return Err(GridError::ResDomain);
  }
  let mut out = [CellIndex::default(); 12];
  let mut pent_idx = 0;
  for bc in 0..NUM_BASE_CELLS {
    if is_base_cell_pentagon(bc) {
      // The pentagon at `res` is the center-child lineage of the base cell.
      out[pent_idx] = crate::hierarchy::cell_to_center_child(base_cell_to_index(bc), res)?;
      pent_idx += 1;
    }
  }
  debug_assert_eq!(pent_idx, 12);
  Ok(out)
}
