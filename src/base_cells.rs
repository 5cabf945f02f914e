//! The 122 resolution 0 base cells.
//!
//! Static data only: each base cell's home face and ijk coordinates on that
//! face, whether it is one of the 12 pentagons, and (for pentagons) its two
//! clockwise offset faces. The table is a compile-time constant, immutable
//! for the life of the process, and therefore safe for unsynchronized reads
//! from any number of threads.

use crate::cell_index::{set_base_cell, set_mode, set_resolution};
use crate::constants::{CELL_INIT, CELL_MODE, NUM_BASE_CELLS};
use crate::types::{CellIndex, CoordIjk, CELL_NULL};

/// Information on a single base cell.
#[derive(Debug, Clone, Copy)]
pub struct BaseCellData {
  /// Home face number on the icosahedron.
  pub home_face: i32,
  /// Normalized ijk coordinates on the home face.
  pub home_ijk: CoordIjk,
  /// Whether this base cell is a pentagon.
  pub pentagon: bool,
  /// For pentagons, the two clockwise offset faces; -1 indicates none.
  pub cw_offset_faces: [i32; 2],
}

/// Sentinel for "no such base cell" in raw bit patterns (7 bits, all set).
pub const INVALID_BASE_CELL: i32 = 127;

const fn hexagon(home_face: i32, i: i32, j: i32, k: i32) -> BaseCellData {
  BaseCellData {
    home_face,
    home_ijk: CoordIjk { i, j, k },
    pentagon: false,
    cw_offset_faces: [-1, -1],
  }
}

const fn pentagon(home_face: i32, i: i32, j: i32, k: i32, cw0: i32, cw1: i32) -> BaseCellData {
  BaseCellData {
    home_face,
    home_ijk: CoordIjk { i, j, k },
    pentagon: true,
    cw_offset_faces: [cw0, cw1],
  }
}

/// Resolution 0 base cell data lookup table, indexed by base cell number.
#[rustfmt::skip]
pub static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  hexagon(1, 1, 0, 0),                 // base cell 0
  hexagon(2, 1, 1, 0),                 // base cell 1
  hexagon(1, 0, 0, 0),                 // base cell 2
  hexagon(2, 1, 0, 0),                 // base cell 3
  pentagon(0, 2, 0, 0, -1, -1),        // base cell 4
  hexagon(1, 1, 1, 0),                 // base cell 5
  hexagon(1, 0, 0, 1),                 // base cell 6
  hexagon(2, 0, 0, 0),                 // base cell 7
  hexagon(0, 1, 0, 0),                 // base cell 8
  hexagon(2, 0, 1, 0),                 // base cell 9
  hexagon(1, 0, 1, 0),                 // base cell 10
  hexagon(1, 0, 1, 1),                 // base cell 11
  hexagon(3, 1, 0, 0),                 // base cell 12
  hexagon(3, 1, 1, 0),                 // base cell 13
  pentagon(11, 2, 0, 0, 2, 6),         // base cell 14
  hexagon(4, 1, 0, 0),                 // base cell 15
  hexagon(0, 0, 0, 0),                 // base cell 16
  hexagon(6, 0, 1, 0),                 // base cell 17
  hexagon(0, 0, 0, 1),                 // base cell 18
  hexagon(2, 0, 1, 1),                 // base cell 19
  hexagon(7, 0, 0, 1),                 // base cell 20
  hexagon(2, 0, 0, 1),                 // base cell 21
  hexagon(0, 1, 1, 0),                 // base cell 22
  hexagon(6, 0, 0, 1),                 // base cell 23
  pentagon(10, 2, 0, 0, 1, 5),         // base cell 24
  hexagon(6, 0, 0, 0),                 // base cell 25
  hexagon(3, 0, 0, 0),                 // base cell 26
  hexagon(11, 1, 0, 0),                // base cell 27
  hexagon(4, 1, 1, 0),                 // base cell 28
  hexagon(3, 0, 1, 0),                 // base cell 29
  hexagon(0, 0, 1, 1),                 // base cell 30
  hexagon(4, 0, 0, 0),                 // base cell 31
  hexagon(5, 0, 1, 0),                 // base cell 32
  hexagon(0, 0, 1, 0),                 // base cell 33
  hexagon(7, 0, 1, 0),                 // base cell 34
  hexagon(11, 1, 1, 0),                // base cell 35
  hexagon(7, 0, 0, 0),                 // base cell 36
  hexagon(10, 1, 0, 0),                // base cell 37
  pentagon(12, 2, 0, 0, 3, 7),         // base cell 38
  hexagon(6, 1, 0, 1),                 // base cell 39
  hexagon(7, 1, 0, 1),                 // base cell 40
  hexagon(4, 0, 0, 1),                 // base cell 41
  hexagon(3, 0, 0, 1),                 // base cell 42
  hexagon(3, 0, 1, 1),                 // base cell 43
  hexagon(4, 0, 1, 0),                 // base cell 44
  hexagon(6, 1, 0, 0),                 // base cell 45
  hexagon(11, 0, 0, 0),                // base cell 46
  hexagon(8, 0, 0, 1),                 // base cell 47
  hexagon(5, 0, 0, 1),                 // base cell 48
  pentagon(14, 2, 0, 0, 0, 9),         // base cell 49
  hexagon(5, 0, 0, 0),                 // base cell 50
  hexagon(12, 1, 0, 0),                // base cell 51
  hexagon(10, 1, 1, 0),                // base cell 52
  hexagon(4, 0, 1, 1),                 // base cell 53
  hexagon(12, 1, 1, 0),                // base cell 54
  hexagon(7, 1, 0, 0),                 // base cell 55
  hexagon(11, 0, 1, 0),                // base cell 56
  hexagon(10, 0, 0, 0),                // base cell 57
  pentagon(13, 2, 0, 0, 4, 8),         // base cell 58
  hexagon(10, 0, 0, 1),                // base cell 59
  hexagon(11, 0, 0, 1),                // base cell 60
  hexagon(9, 0, 1, 0),                 // base cell 61
  hexagon(8, 0, 1, 0),                 // base cell 62
  pentagon(6, 2, 0, 0, 11, 15),        // base cell 63
  hexagon(8, 0, 0, 0),                 // base cell 64
  hexagon(9, 0, 0, 1),                 // base cell 65
  hexagon(14, 1, 0, 0),                // base cell 66
  hexagon(5, 1, 0, 1),                 // base cell 67
  hexagon(16, 0, 1, 1),                // base cell 68
  hexagon(8, 1, 0, 1),                 // base cell 69
  hexagon(5, 1, 0, 0),                 // base cell 70
  hexagon(12, 0, 0, 0),                // base cell 71
  pentagon(7, 2, 0, 0, 12, 16),        // base cell 72
  hexagon(12, 0, 1, 0),                // base cell 73
  hexagon(10, 0, 1, 0),                // base cell 74
  hexagon(9, 0, 0, 0),                 // base cell 75
  hexagon(13, 1, 0, 0),                // base cell 76
  hexagon(16, 0, 0, 1),                // base cell 77
  hexagon(15, 0, 1, 1),                // base cell 78
  hexagon(15, 0, 1, 0),                // base cell 79
  hexagon(16, 0, 1, 0),                // base cell 80
  hexagon(14, 1, 1, 0),                // base cell 81
  hexagon(13, 1, 1, 0),                // base cell 82
  pentagon(5, 2, 0, 0, 10, 19),        // base cell 83
  hexagon(8, 1, 0, 0),                 // base cell 84
  hexagon(14, 0, 0, 0),                // base cell 85
  hexagon(9, 1, 0, 1),                 // base cell 86
  hexagon(14, 0, 0, 1),                // base cell 87
  hexagon(17, 0, 0, 1),                // base cell 88
  hexagon(12, 0, 0, 1),                // base cell 89
  hexagon(16, 0, 0, 0),                // base cell 90
  hexagon(17, 0, 1, 1),                // base cell 91
  hexagon(15, 0, 0, 1),                // base cell 92
  hexagon(16, 1, 0, 1),                // base cell 93
  hexagon(9, 1, 0, 0),                 // base cell 94
  hexagon(15, 0, 0, 0),                // base cell 95
  hexagon(13, 0, 0, 0),                // base cell 96
  pentagon(8, 2, 0, 0, 13, 17),        // base cell 97
  hexagon(13, 0, 1, 0),                // base cell 98
  hexagon(17, 1, 0, 1),                // base cell 99
  hexagon(19, 0, 1, 0),                // base cell 100
  hexagon(14, 0, 1, 0),                // base cell 101
  hexagon(19, 0, 1, 1),                // base cell 102
  hexagon(17, 0, 1, 0),                // base cell 103
  hexagon(13, 0, 0, 1),                // base cell 104
  hexagon(17, 0, 0, 0),                // base cell 105
  hexagon(16, 1, 0, 0),                // base cell 106
  pentagon(9, 2, 0, 0, 14, 18),        // base cell 107
  hexagon(15, 1, 0, 1),                // base cell 108
  hexagon(15, 1, 0, 0),                // base cell 109
  hexagon(18, 0, 1, 1),                // base cell 110
  hexagon(18, 0, 0, 1),                // base cell 111
  hexagon(19, 0, 0, 1),                // base cell 112
  hexagon(17, 1, 0, 0),                // base cell 113
  hexagon(19, 0, 0, 0),                // base cell 114
  hexagon(18, 0, 1, 0),                // base cell 115
  hexagon(18, 1, 0, 1),                // base cell 116
  pentagon(19, 2, 0, 0, -1, -1),       // base cell 117
  hexagon(19, 1, 0, 0),                // base cell 118
  hexagon(18, 0, 0, 0),                // base cell 119
  hexagon(19, 1, 0, 1),                // base cell 120
  hexagon(18, 1, 0, 0),                // base cell 121
];

/// Return whether or not the indicated base cell is a pentagon.
///
/// Total over all integers: any number outside [0,121] is simply not a
/// pentagon. Callers may be inspecting the raw bits of an index of unknown
/// validity, so garbage input must not panic.
#[inline]
#[must_use]
pub fn is_base_cell_pentagon(base_cell: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].pentagon
}

/// Return whether the tested face is one of the base cell's clockwise offset
/// faces. Always false for hexagon base cells and out-of-range numbers.
#[inline]
#[must_use]
pub fn is_base_cell_cw_offset(base_cell: i32, test_face: i32) -> bool {
  if base_cell < 0 || base_cell >= NUM_BASE_CELLS {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.pentagon && (data.cw_offset_faces[0] == test_face || data.cw_offset_faces[1] == test_face)
}

/// Get the resolution 0 cell index for a base cell number (0-121).
/// Returns [`CELL_NULL`] if the base cell number is out of range.
#[must_use]
pub fn base_cell_to_index(base_cell_num: i32) -> CellIndex {
  if base_cell_num < 0 || base_cell_num >= NUM_BASE_CELLS {
    return CELL_NULL;
  }
  let mut h = CellIndex(CELL_INIT);
  set_mode(&mut h, CELL_MODE);
  set_resolution(&mut h, 0);
  set_base_cell(&mut h, base_cell_num);
  h
}
