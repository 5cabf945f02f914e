// tests/properties_tests.rs
//
// Algebraic properties of the cell index, checked over generated cells.

use dggs_cells::*;
use proptest::prelude::*;

/// A structurally valid cell: in-range base cell, digits 0-6 up to the
/// resolution, invalid sentinels above it, and no deleted k-axes subsequence
/// on pentagon lineages.
fn arb_cell() -> impl Strategy<Value = CellIndex> {
  (0i32..NUM_BASE_CELLS, 0i32..=MAX_GRID_RES, prop::collection::vec(0u8..7, 15)).prop_map(
    |(base_cell, res, digits)| {
      let mut h = CELL_NULL;
      set_cell_index(&mut h, res, base_cell, Digit::Center);
      for r in 1..=res {
        let digit = Digit::try_from(digits[(r - 1) as usize]).unwrap();
        set_index_digit(&mut h, r, digit).unwrap();
      }
      if is_base_cell_pentagon(base_cell) {
        // A pentagon lineage must not lead with the skipped digit; nudge the
        // leading digit off it when the generator lands there.
        for r in 1..=res {
          let digit = get_index_digit(h, r).unwrap();
          if digit != Digit::Center {
            if digit == PENTAGON_SKIPPED_DIGIT {
              set_index_digit(&mut h, r, Digit::JAxes).unwrap();
            }
            break;
          }
        }
      }
      h
    },
  )
}

proptest! {
  #[test]
  fn prop_generated_cells_are_valid(h in arb_cell()) {
    prop_assert!(is_valid_cell(h));
  }

  #[test]
  fn prop_hex_round_trip(h in arb_cell()) {
    let text = cell_to_string_alloc(h);
    prop_assert_eq!(string_to_cell(&text), Ok(h));
  }

  #[test]
  fn prop_parent_at_own_resolution_is_identity(h in arb_cell()) {
    let res = get_resolution(h);
    prop_assert_eq!(cell_to_parent(h, res), Ok(h));
  }

  #[test]
  fn prop_parent_chaining_commutes(h in arb_cell()) {
    let res = get_resolution(h);
    for r2 in 0..=res {
      for r1 in 0..=r2 {
        let chained = cell_to_parent(cell_to_parent(h, r2).unwrap(), r1).unwrap();
        let direct = cell_to_parent(h, r1).unwrap();
        prop_assert_eq!(chained, direct);
      }
    }
  }

  #[test]
  fn prop_parent_preserves_base_cell_and_mode(h in arb_cell()) {
    let parent = cell_to_parent(h, 0).unwrap();
    prop_assert_eq!(get_base_cell(parent), get_base_cell(h));
    prop_assert_eq!(get_mode(parent), get_mode(h));
    prop_assert_eq!(get_resolution(parent), 0);
  }

  #[test]
  fn prop_direct_children_count(h in arb_cell()) {
    let res = get_resolution(h);
    if res < MAX_GRID_RES {
      let count = children(h, res + 1).unwrap().count();
      let expected = if is_pentagon(h) { 6 } else { 7 };
      prop_assert_eq!(count, expected);
    }
  }

  #[test]
  fn prop_enumerated_count_matches_closed_form(h in arb_cell()) {
    let res = get_resolution(h);
    let child_res = (res + 2).min(MAX_GRID_RES);
    let n = i64::from(child_res - res);
    let expected = if is_pentagon(h) {
      1 + 5 * (7i64.pow(n as u32) - 1) / 6
    } else {
      7i64.pow(n as u32)
    };
    let count = children(h, child_res).unwrap().count() as i64;
    prop_assert_eq!(count, expected);
  }

  #[test]
  fn prop_children_are_valid_and_parented(h in arb_cell()) {
    let res = get_resolution(h);
    let child_res = (res + 1).min(MAX_GRID_RES);
    for child in children(h, child_res).unwrap() {
      prop_assert!(is_valid_cell(child));
      prop_assert_eq!(cell_to_parent(child, res).unwrap(), h);
    }
  }

  #[test]
  fn prop_enumeration_deterministic(h in arb_cell()) {
    let res = get_resolution(h);
    let child_res = (res + 2).min(MAX_GRID_RES);
    let a: Vec<CellIndex> = children(h, child_res).unwrap().collect();
    let b: Vec<CellIndex> = children(h, child_res).unwrap().collect();
    prop_assert_eq!(a, b);
  }

  #[test]
  fn prop_center_child_is_first_emitted(h in arb_cell()) {
    let res = get_resolution(h);
    let child_res = (res + 2).min(MAX_GRID_RES);
    let first = children(h, child_res).unwrap().next().unwrap();
    prop_assert_eq!(first, cell_to_center_child(h, child_res).unwrap());
  }

  #[test]
  fn prop_base_cell_pentagon_predicate_total(raw in any::<i32>()) {
    // Never panics, and only the 12 known base cells answer true.
    let expected = matches!(raw, 4 | 14 | 24 | 38 | 49 | 58 | 63 | 72 | 83 | 97 | 107 | 117);
    prop_assert_eq!(is_base_cell_pentagon(raw), expected);
  }

  #[test]
  fn prop_extraction_is_total(raw in any::<u64>()) {
    // Field extraction never panics on arbitrary bit patterns, and the
    // pentagon classification stays a plain predicate.
    let h = CellIndex(raw);
    let _ = get_mode(h);
    let _ = get_mode_dependent(h);
    let _ = get_resolution(h);
    let _ = get_base_cell(h);
    let _ = is_pentagon(h);
    let _ = is_valid_cell(h);
  }
}
