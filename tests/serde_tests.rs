// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use dggs_cells::*;

#[test]
fn test_cell_index_serde() {
  // CellIndex is repr(transparent) over u64, so it serializes as the inner
  // integer value directly.
  let h = CellIndex(0x8928308280fffff);
  let serialized = serde_json::to_string(&h).unwrap();
  assert_eq!(serialized, "617700169958293503");
  let deserialized: CellIndex = serde_json::from_str(&serialized).unwrap();
  assert_eq!(h, deserialized);

  let null = CELL_NULL;
  let ser_null = serde_json::to_string(&null).unwrap();
  assert_eq!(ser_null, "0");
  let de_null: CellIndex = serde_json::from_str(&ser_null).unwrap();
  assert_eq!(null, de_null);
}

#[test]
fn test_digit_serde() {
  // Digit has repr(u8); serde_repr serializes the discriminant.
  let digit = PENTAGON_SKIPPED_DIGIT;
  let serialized = serde_json::to_string(&digit).unwrap();
  assert_eq!(serialized, "1");
  let deserialized: Digit = serde_json::from_str(&serialized).unwrap();
  assert_eq!(digit, deserialized);

  let invalid: Digit = serde_json::from_str("7").unwrap();
  assert_eq!(invalid, Digit::Invalid);
}

#[test]
fn test_grid_error_serde() {
  let err = GridError::CellInvalid;
  let serialized = serde_json::to_string(&err).unwrap();
  assert_eq!(serialized, "4");
  let deserialized: GridError = serde_json::from_str(&serialized).unwrap();
  assert_eq!(err, deserialized);
}

#[test]
fn test_coord_ijk_serde() {
  let coord = CoordIjk { i: 2, j: 0, k: 0 };
  let serialized = serde_json::to_string(&coord).unwrap();
  assert_eq!(serialized, r#"{"i":2,"j":0,"k":0}"#);
  let deserialized: CoordIjk = serde_json::from_str(&serialized).unwrap();
  assert_eq!(coord, deserialized);
}

#[test]
fn test_enumeration_results_serialize() {
  let parent = base_cell_to_index(4);
  let cells: Vec<CellIndex> = children(parent, 1).unwrap().collect();
  let serialized = serde_json::to_string(&cells).unwrap();
  let deserialized: Vec<CellIndex> = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cells, deserialized);
}
