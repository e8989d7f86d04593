use crate::error::{Result, Shape2dError};

/// Floor division of `a` by `b`: the largest whole number not greater than
/// `a / b`, with the result kept consistent with `a % b`.
///
/// Computed from the remainder rather than as `(a / b).floor()`, so that
/// rounding in the quotient cannot push the result past the true floor
/// (`floor_div(1.0, 0.1)` is `9.0`, not `10.0`).
///
/// Division by zero is not guarded: it returns `(a / b).floor()`, i.e.
/// an infinity or NaN.
#[must_use]
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return (a / b).floor();
    }

    let rem = a % b;
    let mut div = (a - rem) / b;
    // Remainder must carry the divisor's sign.
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}

/// Maps a possibly negative `index` into `0..len`.
///
/// Non-negative indices address from the front and negative ones from the
/// back (`-1` is the last component).
///
/// # Errors
///
/// Returns [`Shape2dError::IndexOutOfRange`] if `index` is outside
/// `-len..len`.
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let magnitude = index.unsigned_abs();
    if index >= 0 && magnitude < len {
        Ok(magnitude)
    } else if index < 0 && magnitude <= len {
        Ok(len - magnitude)
    } else {
        Err(Shape2dError::IndexOutOfRange { index, len })
    }
}
