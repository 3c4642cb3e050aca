//! Fixed-point number formatting shared by every textual output.
//!
//! Path data, view windows and timing literals must print the same way in the live preview
//! and in exported component text, and must agree with how the animation runtime that consumes
//! the text formats numbers: ties round away from zero at the last printed digit, and negative
//! zero prints without a sign.

// Extra digits rendered before rounding; enough to resolve ties on any f64 of practical size.
const GUARD_DIGITS: usize = 40;

/// Format `value` with exactly `digits` fractional digits.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let wide = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = wide.split_once('.').unwrap_or((wide.as_str(), ""));
    let (kept, rest) = frac_part.split_at(digits.min(frac_part.len()));
    let round_up = rest.as_bytes().first().is_some_and(|&b| b >= b'5');

    let mut buf: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if round_up {
        let mut i = buf.len();
        loop {
            if i == 0 {
                buf.insert(0, b'1');
                break;
            }
            i -= 1;
            if buf[i] == b'9' {
                buf[i] = b'0';
            } else {
                buf[i] += 1;
                break;
            }
        }
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(buf[..split].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().map(|&b| char::from(b)));
    }
    out
}

/// Round `value` to the number that [`to_fixed`] would print.
///
/// Consumers that animate in memory use this so their numbers match the emitted literals.
pub fn fixed_value(value: f64, digits: usize) -> f64 {
    to_fixed(value, digits).parse().unwrap_or(value)
}

/// Compact number form used in font outline path data: integers print without decimals,
/// everything else with `digits` fractional digits.
pub fn compact(value: f64, digits: usize) -> String {
    if value.is_finite() && value.round() == value {
        // `+ 0.0` folds negative zero.
        format!("{}", value + 0.0)
    } else {
        to_fixed(value, digits)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fixed.rs"]
mod tests;
