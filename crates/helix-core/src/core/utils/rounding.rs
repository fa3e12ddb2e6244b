/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds `value` to `decimals` decimal places.
///
/// Rounding works on the exact decimal expansion of the stored binary value, so `55.55`
/// (stored as `55.5499999...`) becomes `55.5`. A value exactly halfway rounds away from zero.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = decimals.min(EXACT_FRACTION_DIGITS);
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<char> = integer
        .chars()
        .chain(fraction.chars().take(decimals))
        .collect();
    let round_up = fraction
        .chars()
        .nth(decimals)
        .is_some_and(|first_dropped| first_dropped >= '5');
    if round_up {
        increment(&mut digits);
    }

    let split = digits.len() - decimals;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let integer: String = digits[..split].iter().collect();
    let fraction: String = digits[split..].iter().collect();
    format!("{sign}{integer}.{fraction}")
        .parse()
        .unwrap_or(value)
}

/// Adds one unit in the last place of a decimal digit string.
fn increment(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(round_to(0.30233524, 2), 0.30);
        assert_eq!(round_to(0.07506714, 2), 0.08);
        assert_eq!(round_to(68.04, 1), 68.0);
        assert_eq!(round_to(68.06, 1), 68.1);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(round_to(0.0, 2), 0.0);
        assert_eq!(round_to(0.0, 0), 0.0);
    }

    #[test]
    fn negative_values_round_symmetrically() {
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(-0.04, 1), -0.0);
    }

    #[test]
    fn decimal_looking_ties_follow_the_stored_binary_value() {
        // 55.55 and 51.15 are stored slightly below the printed value.
        assert_eq!(round_to(55.55, 1), 55.5);
        assert_eq!(round_to(51.15, 1), 51.1);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(1.015, 2), 1.01);
    }

    #[test]
    fn exact_binary_ties_round_up() {
        assert_eq!(round_to(55.25, 1), 55.3);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn carries_propagate_into_the_integer_part() {
        assert_eq!(round_to(99.96, 1), 100.0);
        assert_eq!(round_to(9.999, 2), 10.0);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to(f64::NAN, 1).is_nan());
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
    }
}
