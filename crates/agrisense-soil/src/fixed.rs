//! Fixed-point decimal formatting shared by the hash key and the profile
//! rounding.
//!
//! Rust's `{:.N}` formatting rounds exact binary ties to even. The profile
//! contract rounds ties away from zero, so exact ties are detected and
//! handled separately. Negative zero is printed as `0`.

/// Extra digits inspected past the requested precision when looking for an
/// exact tie. Exact ties have at most `digits + 1` significant fractional
/// digits; anything non-zero beyond that is not a tie.
const TIE_PROBE_DIGITS: usize = 40;

/// Format `value` with exactly `digits` fractional digits.
pub fn fixed_decimal(value: f64, digits: u8) -> String {
    // Collapse -0.0 so it never prints a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    let width = usize::from(digits);

    if is_exact_tie(value, width) {
        let scale = 10_f64.powi(i32::from(digits));
        let rounded = (value * scale).round() / scale;
        return format!("{rounded:.width$}");
    }

    format!("{value:.width$}")
}

/// Round `value` to `digits` fractional digits through its fixed text form.
pub fn round_to(value: f64, digits: u8) -> f64 {
    fixed_decimal(value, digits).parse().unwrap_or(value)
}

/// Whether the exact decimal expansion of `value` is a 5 followed only by
/// zeros right after the `digits`-th fractional digit.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let precision = digits.saturating_add(TIE_PROBE_DIGITS);
    let expanded = format!("{:.precision$}", value.abs());
    let Some((_, fraction)) = expanded.split_once('.') else {
        return false;
    };
    let mut tail = fraction.get(digits..).unwrap_or_default().chars();
    tail.next() == Some('5') && tail.all(|c| c == '0')
}
