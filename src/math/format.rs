//! Float rendering for the string forms of the value types.

/// Renders `value` in its shortest round-trip form.
///
/// Non-finite values print as `nan`, `inf` and `-inf`. Exponents carry an
/// explicit sign and at least two digits (`1e+16`, `1.5e-07`). Whole
/// numbers keep a trailing `.0`.
#[must_use]
pub fn format_float(value: f64) -> String {
    if let Some(s) = format_non_finite(value) {
        return s.to_owned();
    }

    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Renders `value` with `decimals` places after the point. Non-finite
/// values print as in [`format_float`].
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    match format_non_finite(value) {
        Some(s) => s.to_owned(),
        None => format!("{value:.decimals$}"),
    }
}

fn format_non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values() {
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(-1.5), "-1.5");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(2.0_f64.sqrt()), "1.4142135623730951");
    }

    #[test]
    fn exponent_has_sign_and_two_digits() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(1.25e100), "1.25e+100");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn fixed_places() {
        assert_eq!(format_fixed(2.0, 3), "2.000");
        assert_eq!(format_fixed(1.23456, 3), "1.235");
        assert_eq!(format_fixed(f64::NAN, 3), "nan");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 3), "-inf");
    }
}
