//! Result formatting with magnitude-tiered precision
//!
//! Small results keep their significant digits visible, large results stay
//! short. Tiers are picked from the absolute value:
//!
//! | magnitude      | output                          |
//! |----------------|---------------------------------|
//! | exactly 0      | `"0"`                           |
//! | < 1e-6         | scientific, 2 mantissa decimals |
//! | < 0.01         | fixed, 6 decimals               |
//! | < 1            | fixed, 4 decimals               |
//! | < 100          | fixed, 3 decimals               |
//! | < 10000        | fixed, 2 decimals               |
//! | otherwise      | fixed, 1 decimal                |

/// Precision bracket selected by the magnitude of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionTier {
    Zero,
    Scientific,
    Fixed(usize),
}

// Fractional digits that print every f64 with magnitude >= 1e-6 exactly
// (52 mantissa bits plus a binary exponent no lower than -20).
const EXACT_FRACTION_DIGITS: usize = 80;

/// Select the precision tier for `value`
pub fn tier_for(value: f64) -> PrecisionTier {
    let magnitude = value.abs();
    if value == 0.0 {
        PrecisionTier::Zero
    } else if magnitude < 1e-6 {
        PrecisionTier::Scientific
    } else if magnitude < 0.01 {
        PrecisionTier::Fixed(6)
    } else if magnitude < 1.0 {
        PrecisionTier::Fixed(4)
    } else if magnitude < 100.0 {
        PrecisionTier::Fixed(3)
    } else if magnitude < 10_000.0 {
        PrecisionTier::Fixed(2)
    } else {
        PrecisionTier::Fixed(1)
    }
}

/// Format a converted value for display. Total: never fails.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    match tier_for(value) {
        PrecisionTier::Zero => "0".to_string(),
        PrecisionTier::Scientific => format!("{:.2e}", value),
        PrecisionTier::Fixed(digits) => to_fixed(value, digits),
    }
}

/// Fixed notation rounded to nearest, ties away from zero
///
/// Rounding is decided on the exact decimal expansion of the double, so a
/// value like 1.0625 becomes "1.063" rather than the half-even "1.062".
fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_result(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS.max(digits + 1), value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|next| *next >= b'5') {
        increment_decimal(&mut kept);
    }

    let text: String = kept.iter().map(|&b| char::from(b)).collect();
    let (int_digits, frac_digits) = text.split_at(text.len() - digits);

    let sign = if value < 0.0 { "-" } else { "" };
    if digits == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

// Add one unit in the last place to a string of ASCII digits
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
