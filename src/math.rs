// src/math.rs

/// Integer exponentiation by squaring.
///
/// Wraps on overflow rather than panicking; descendant counts within the
/// grid's 15 resolution levels stay far below `i64::MAX` (`7^15` is about
/// `4.7e12`), so wrapping only matters for out-of-domain inputs.
#[inline]
pub(crate) fn ipow(mut base: i64, mut exp: i64) -> i64 {
  if exp < 0 {
    if base == 1 {
      return 1;
    }
    if base == -1 {
      return if exp % 2 == 0 { 1 } else { -1 };
    }
    return 0;
  }

  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.wrapping_mul(base);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ipow() {
    assert_eq!(ipow(7, 0), 1, "7^0");
    assert_eq!(ipow(7, 1), 7, "7^1");
    assert_eq!(ipow(7, 2), 49, "7^2");
    assert_eq!(ipow(7, 15), 4_747_561_509_943, "7^15");
    assert_eq!(ipow(1, 20), 1, "1^20");
    assert_eq!(ipow(2, 5), 32, "2^5");
    assert_eq!(ipow(-2, 3), -8, "(-2)^3");

    // Negative exponents truncate to zero except for unit bases.
    assert_eq!(ipow(2, -1), 0, "2^-1");
    assert_eq!(ipow(1, -5), 1, "1^-5");
    assert_eq!(ipow(-1, -2), 1, "(-1)^-2");
    assert_eq!(ipow(-1, -3), -1, "(-1)^-3");
  }
}
