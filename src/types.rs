//! Core grid data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// A packed 64-bit identifier of one cell in the hierarchical grid.
///
/// Bit layout, high to low: 1 reserved high bit, 4 mode bits, 3 mode-dependent
/// bits, 4 resolution bits, 7 base cell bits, and fifteen 3-bit digit fields
/// (one per resolution level 1 through 15).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

/// The all-zero bit pattern, reserved as "no index". Signifies an error or
/// missing cell.
pub const CELL_NULL: CellIndex = CellIndex(0);

/// Errors raised by grid operations.
///
/// `repr(u32)` with stable discriminants so error codes survive FFI and
/// serialization boundaries unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range.
  #[error("argument outside of acceptable range")]
  Domain = 2,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution argument outside of acceptable range")]
  ResDomain = 3,
  /// Cell index argument was not valid.
  #[error("cell index argument was not valid")]
  CellInvalid = 4,
  /// Bounds of provided memory were not large enough.
  #[error("provided buffer was not large enough")]
  MemoryBounds = 5,
}

/// Digit selecting one child among up to 7 siblings at a resolution level.
///
/// Values 0-6 name the center child and the six ijk axis directions; 7 marks
/// a digit slot finer than the index's resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Digit {
  /// Center child.
  #[default]
  Center = 0,
  /// k-axes direction. Never present in a pentagon's child set.
  KAxes = 1,
  /// j-axes direction.
  JAxes = 2,
  /// j == k direction.
  JkAxes = 3,
  /// i-axes direction.
  IAxes = 4,
  /// i == k direction.
  IkAxes = 5,
  /// i == j direction.
  IjAxes = 6,
  /// Sentinel for digit slots beyond the index's resolution.
  Invalid = 7,
}

/// The digit a pentagon lineage skips: pentagons have no k-axes child.
pub const PENTAGON_SKIPPED_DIGIT: Digit = Digit::KAxes;

impl Digit {
  /// Decodes the low 3 bits of `value` into a digit. Total; cannot fail.
  #[inline]
  #[must_use]
  pub(crate) const fn from_bits(value: u8) -> Self {
    match value & 0b111 {
      0 => Digit::Center,
      1 => Digit::KAxes,
      2 => Digit::JAxes,
      3 => Digit::JkAxes,
      4 => Digit::IAxes,
      5 => Digit::IkAxes,
      6 => Digit::IjAxes,
      _ => Digit::Invalid,
    }
  }
}

impl TryFrom<u8> for Digit {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(GridError::Domain);
    }
    Ok(Digit::from_bits(value))
  }
}

/// ijk coordinates on an icosahedron face. Each axis is spaced 120 degrees
/// apart; `k = -i - j` for normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIjk {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}
