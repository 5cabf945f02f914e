#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::cast_possible_truncation)] // Bit-field extraction narrows deliberately
#![allow(clippy::cast_sign_loss)] // Resolutions and base cells are i32 by convention
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! `dggs-cells` is a hierarchical cell index for an icosahedral aperture-7
//! discrete global grid.
//!
//! A cell is identified by a packed 64-bit value encoding a resolution level
//! (0-15), one of 122 base cells, and one 3-bit digit per resolution level
//! selecting a child among up to 7 siblings. Twelve base cells are pentagons
//! whose apex lineage has only 6 children; every operation in this crate
//! accounts for that anomaly, including the lazy, non-recursive enumeration
//! of descendants.
//!
//! The crate is purely computational: no I/O, no blocking, no global mutable
//! state. The base cell table is a compile-time constant and safe for
//! unsynchronized concurrent reads.

// Declare modules
pub mod base_cells;
pub mod cell_index;
pub mod constants;
pub mod hierarchy;
pub mod iterators;
pub(crate) mod math;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{CELL_MODE, MAX_GRID_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use types::{CellIndex, CoordIjk, Digit, GridError, CELL_NULL, PENTAGON_SKIPPED_DIGIT};

pub use base_cells::{base_cell_to_index, is_base_cell_cw_offset, is_base_cell_pentagon, BaseCellData, BASE_CELL_DATA};
pub use cell_index::{
  cell_to_string, cell_to_string_alloc, get_base_cell, get_index_digit, get_mode, get_mode_dependent, get_resolution,
  is_pentagon, is_valid_cell, num_cells, pentagon_count, pentagons, set_base_cell, set_cell_index, set_index_digit,
  set_mode, set_mode_dependent, set_resolution, string_to_cell,
};
pub use hierarchy::{cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent};
pub use iterators::{cells_at_res, children, children_of_base_cell, CellChildIter, CellsAtResIter};
