//! Lazy enumeration of cell descendants.
//!
//! Walking every descendant of a cell at a target resolution is modeled as a
//! mixed-radix base-7 odometer with one digit position per resolution level
//! between the parent and the target, most-nested position first. Stepping
//! increments the finest digit and lets rollovers carry toward the parent;
//! carrying past the level just below the parent exhausts the sequence.
//! Pentagon lineages track a skip level that rides the carry boundary: the
//! digit there may never land on the skipped k-axes value, so it is bumped
//! straight past it within the same step.
//!
//! No recursion, no materialized tree: state is one cell index plus two
//! level counters.

use std::iter::FusedIterator;

use crate::base_cells::base_cell_to_index;
use crate::cell_index::{digit_unchecked, get_resolution, is_pentagon, set_digit_unchecked, set_resolution};
use crate::constants::{MAX_GRID_RES, NUM_BASE_CELLS};
use crate::hierarchy::parent_child::zero_index_digits;
use crate::types::{CellIndex, Digit, GridError, CELL_NULL, PENTAGON_SKIPPED_DIGIT};

/// Lazy iterator over every descendant of a parent cell at a fixed child
/// resolution, in canonical pre-order.
///
/// Finite, deterministic, and non-restartable: construct a fresh iterator
/// for each traversal. The odometer cursor is private and owned, so an
/// instance must not be shared between concurrent consumers, but abandoning
/// it early has no side effects.
#[derive(Debug, Clone)]
pub struct CellChildIter {
  /// The next cell to emit; `CELL_NULL` once exhausted.
  h: CellIndex,
  /// Resolution of the original parent; carries stop just below it.
  parent_res: i32,
  /// Level whose digit must skip the pentagon-deleted value; moves one level
  /// coarser each time it fires. -1 on hexagon lineages.
  skip_digit_res: i32,
}

/// Creates an iterator over the descendants of `parent` at `child_res`.
///
/// `child_res` must lie in `[resolution(parent), 15]`; anything else is a
/// caller error. The first value produced is always the parent re-based at
/// `child_res` with every new digit slot zeroed, which is the center
/// descendant for hexagon and pentagon lineages alike.
pub fn children(parent: CellIndex, child_res: i32) -> Result<CellChildIter, GridError> {
  let parent_res = get_resolution(parent);
  if child_res < parent_res || child_res > MAX_GRID_RES {
    return Err(GridError::ResDomain);
  }

  let mut h = parent;
  set_resolution(&mut h, child_res);
  let h = zero_index_digits(h, parent_res + 1, child_res);

  let skip_digit_res = if is_pentagon(parent) { child_res } else { -1 };

  Ok(CellChildIter {
    h,
    parent_res,
    skip_digit_res,
  })
}

/// Creates an iterator over every cell at `child_res` descending from the
/// given base cell number.
pub fn children_of_base_cell(base_cell_num: i32, child_res: i32) -> Result<CellChildIter, GridError> {
  if base_cell_num < 0 || base_cell_num >= NUM_BASE_CELLS {
    return Err(GridError::Domain);
  }
  children(base_cell_to_index(base_cell_num), child_res)
}

impl CellChildIter {
  /// Advances the odometer to the next descendant, or exhausts the iterator
  /// when the increment carries out past the parent.
  fn step(&mut self) {
    let child_res = get_resolution(self.h);
    if self.increment_from(child_res) {
      return;
    }

    // The digit at the skip level may have just landed on the deleted
    // k-axes value; push it past within the same logical step, then hand
    // skip responsibility one level coarser.
    if self.skip_digit_res > self.parent_res && digit_unchecked(self.h, self.skip_digit_res) == PENTAGON_SKIPPED_DIGIT
    {
      if self.increment_from(self.skip_digit_res) {
        return;
      }
      self.skip_digit_res -= 1;
    }
  }

  /// Increments the digit at level `r`, propagating rollovers toward the
  /// parent. Returns `true` when the carry escapes past the parent level and
  /// the iterator is exhausted.
  fn increment_from(&mut self, mut r: i32) -> bool {
    loop {
      if r <= self.parent_res {
        self.h = CELL_NULL;
        return true;
      }
      let bumped = digit_unchecked(self.h, r) as u8 + 1;
      if bumped >= Digit::Invalid as u8 {
        set_digit_unchecked(&mut self.h, r, Digit::Center);
        r -= 1;
      } else {
        set_digit_unchecked(&mut self.h, r, Digit::from_bits(bumped));
        return false;
      }
    }
  }
}

impl Iterator for CellChildIter {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    if self.h == CELL_NULL {
      return None;
    }
    let out = self.h;
    self.step();
    Some(out)
  }
}

impl FusedIterator for CellChildIter {}

/// Iterator over every cell of one resolution, sweeping the 122 base cells
/// in numeric order and each base cell's descendants in enumeration order.
#[derive(Debug, Clone)]
pub struct CellsAtResIter {
  res: i32,
  base_cell_num: i32,
  inner: CellChildIter,
}

/// Creates an iterator over all cells at the given resolution.
pub fn cells_at_res(res: i32) -> Result<CellsAtResIter, GridError> {
  let inner = children_of_base_cell(0, res)?;
  Ok(CellsAtResIter {
    res,
    base_cell_num: 0,
    inner,
  })
}

impl Iterator for CellsAtResIter {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    loop {
      if let Some(h) = self.inner.next() {
        return Some(h);
      }
      self.base_cell_num += 1;
      if self.base_cell_num >= NUM_BASE_CELLS {
        return None;
      }
      // Same resolution, next base cell: construction cannot fail here.
      match children_of_base_cell(self.base_cell_num, self.res) {
        Ok(inner) => self.inner = inner,
        Err(_) => return None,
      }
    }
  }
}

impl FusedIterator for CellsAtResIter {}
