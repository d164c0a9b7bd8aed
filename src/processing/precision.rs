//! Decimal precision and threshold helpers.

/// Fractions of the value range at which threshold bands start.
pub const DEFAULT_THRESHOLD_BANDS: [f64; 4] = [0.15, 0.40, 0.55, 0.90];

/// Upper bound accepted by fixed-precision formatting downstream.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// Number of decimal places in the canonical string form of `value`.
///
/// The canonical form is the shortest round-trip representation, switching to exponent notation
/// below `1e-6` and at or above `1e21`. Trailing zeros never appear, so `1.230` counts as 2.
pub fn decimal_places(value: f64) -> u32 {
    decimal_places_in(&canonical_string(value))
}

/// Number of effective decimal places in a numeric literal such as `"1.25"` or `"1.5e-7"`.
///
/// Digits after the decimal point minus the exponent, floored at zero. Text that is not a
/// numeric literal counts as zero.
pub fn decimal_places_in(text: &str) -> u32 {
    let text = text.trim();
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => (&text[..idx], text[idx + 1..].parse::<i64>().unwrap_or(0)),
        None => (text, 0),
    };

    let fraction_digits = mantissa
        .split_once('.')
        .map(|(_, fraction)| fraction.chars().take_while(char::is_ascii_digit).count())
        .unwrap_or(0);

    (fraction_digits as i64)
        .saturating_sub(exponent)
        .clamp(0, i64::from(u32::MAX)) as u32
}

/// Shortest round-trip decimal form of `value`.
pub fn canonical_string(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && (magnitude < 1e-6 || magnitude >= 1e21) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Fraction digits in the exact decimal expansion of the smallest subnormal `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round `value` to `places` decimal digits, halves away from zero.
///
/// Rounds the exact decimal expansion of `value`, so `0.125` becomes `0.13` while `2.675`, stored
/// just below the half, becomes `2.67`.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = (places as usize).min(EXACT_FRACTION_DIGITS);
    let exact = format!("{:.prec$}", value.abs(), prec = EXACT_FRACTION_DIGITS);
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(places))
        .map(|b| b - b'0')
        .collect();
    if fraction.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        carry_one(&mut digits);
    }

    let split = digits.len() - places;
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    text.parse().unwrap_or(value)
}

/// Add one unit in the last place of a decimal digit string.
fn carry_one(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Breakpoints at each of `bands` across `[min, max]`, rounded to `places` digits.
///
/// Results stay inside `[min, max]` even when rounding would push them past an end.
pub fn thresholds(min: f64, max: f64, bands: &[f64; 4], places: u32) -> [f64; 4] {
    let distance = max - min;
    bands.map(|band| round_to(min + band * distance, places).max(min).min(max))
}

#[cfg(test)]
mod tests {
    use super::{
        canonical_string, decimal_places, decimal_places_in, round_to, thresholds,
        DEFAULT_THRESHOLD_BANDS,
    };

    #[test]
    fn trailing_zeros_do_not_count() {
        assert_eq!(decimal_places(1.230), 2);
        assert_eq!(decimal_places(5.0), 0);
        assert_eq!(decimal_places(-0.125), 3);
    }

    #[test]
    fn exponent_adjusts_fraction_digits() {
        assert_eq!(decimal_places_in("1.5e-2"), 3);
        assert_eq!(decimal_places_in("1.5E-7"), 8);
        assert_eq!(decimal_places_in("1.25e+1"), 1);
        assert_eq!(decimal_places_in("2e3"), 0);
        assert_eq!(decimal_places(1.5e-2), 3);
        assert_eq!(decimal_places(1.5e-7), 8);
    }

    #[test]
    fn non_literals_count_as_zero() {
        assert_eq!(decimal_places_in(""), 0);
        assert_eq!(decimal_places_in("abc"), 0);
    }

    #[test]
    fn canonical_string_switches_to_exponent_at_the_extremes() {
        assert_eq!(canonical_string(0.015), "0.015");
        assert_eq!(canonical_string(1.5e-7), "1.5e-7");
        assert_eq!(canonical_string(0.0), "0");
    }

    #[test]
    fn round_to_fixed_digits() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.0 / 3.0, 0), 0.0);
        assert_eq!(round_to(7.76, 1), 7.8);
        assert_eq!(round_to(9.96, 1), 10.0);
        assert_eq!(round_to(-1.234, 2), -1.23);
    }

    #[test]
    fn round_to_sends_exact_halves_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(4.5, 0), 5.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(99.5, 0), 100.0);
    }

    #[test]
    fn round_to_uses_the_stored_value_not_the_literal() {
        // Both literals are stored just below the half.
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn thresholds_round_tied_bands_up() {
        let t = thresholds(0.0, 5.0, &DEFAULT_THRESHOLD_BANDS, 0);
        assert_eq!(t[3], 5.0);
        assert_eq!(t, [1.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn thresholds_partition_the_range() {
        assert_eq!(
            thresholds(0.0, 100.0, &DEFAULT_THRESHOLD_BANDS, 0),
            [15.0, 40.0, 55.0, 90.0]
        );
        assert_eq!(
            thresholds(0.0, 10.0, &DEFAULT_THRESHOLD_BANDS, 1),
            [1.5, 4.0, 5.5, 9.0]
        );
        assert_eq!(
            thresholds(1.0, 4.0, &DEFAULT_THRESHOLD_BANDS, 0),
            [1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn thresholds_collapse_on_zero_range_and_stay_in_bounds() {
        assert_eq!(thresholds(3.0, 3.0, &DEFAULT_THRESHOLD_BANDS, 0), [3.0; 4]);
        let t = thresholds(0.4, 0.6, &DEFAULT_THRESHOLD_BANDS, 0);
        assert!(t.iter().all(|v| (0.4..=0.6).contains(v)));
        assert!(t.windows(2).all(|w| w[0] <= w[1]));
    }
}
