// src/cell_index/string_conv.rs

use crate::types::{CellIndex, GridError};

/// Parses the canonical text form of a cell index: unsigned lowercase
/// hexadecimal of the 64-bit value.
///
/// The raw bit pattern is returned without structural validation; callers
/// holding text of unknown provenance should follow up with
/// [`super::is_valid_cell`].
pub fn string_to_cell(s: &str) -> Result<CellIndex, GridError> {
  if s.is_empty() {
    return Err(GridError::Failed);
  }
  match u64::from_str_radix(s, 16) {
    Ok(val) => Ok(CellIndex(val)),
    Err(_) => Err(GridError::Failed),
  }
}

/// Writes the canonical text form of a cell index into a caller buffer,
/// NUL-terminated.
///
/// The buffer must hold at least 17 bytes (16 hex chars plus NUL), else
/// `GridError::MemoryBounds`.
pub fn cell_to_string(h: CellIndex, buffer: &mut [u8]) -> Result<(), GridError> {
  const MIN_BUF_SIZE_WITH_NUL: usize = 17;

  if buffer.len() < MIN_BUF_SIZE_WITH_NUL {
    return Err(GridError::MemoryBounds);
  }

  let s = format!("{:x}", h.0);
  let bytes = s.as_bytes();
  buffer[..bytes.len()].copy_from_slice(bytes);
  buffer[bytes.len()] = 0;

  Ok(())
}

/// The canonical text form of a cell index as an owned `String`.
#[must_use]
pub fn cell_to_string_alloc(h: CellIndex) -> String {
  format!("{:x}", h.0)
}
