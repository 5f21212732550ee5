//! Human-readable report

use crate::domain::CostEstimate;

/// Header line plus one `  key: value` line per field, newline-terminated.
pub fn render_text(estimate: &CostEstimate) -> String {
    let mut out = format!("Cost Analysis for {} characters:\n", estimate.input_chars);
    for (key, value) in report_fields(estimate) {
        out.push_str(&format!("  {key}: {value}\n"));
    }
    out
}

/// Key/value pairs in report order, with values already formatted.
fn report_fields(estimate: &CostEstimate) -> [(&'static str, String); 4] {
    [
        ("input_chars", estimate.input_chars.to_string()),
        ("estimated_tokens", estimate.estimated_tokens.to_string()),
        (
            "total_estimated_tokens_with_overhead",
            estimate.total_estimated_tokens_with_overhead.to_string(),
        ),
        ("estimated_cost_usd", format_float(estimate.estimated_cost_usd)),
    ]
}

/// Shortest round-trip decimal, always with a fractional part (`2.0`, not `2`).
///
/// Magnitudes of at least 1e16 or below 1e-4 switch to exponent form with a
/// signed, two-digit-minimum exponent (`4.5e+18`, `1e-05`).
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn format_exponent(value: f64) -> String {
    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => sci,
        },
        None => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::{format_float, render_text};
    use crate::estimate::{estimate, estimate_default};

    #[test]
    fn renders_default_report() {
        insta::assert_snapshot!(render_text(&estimate_default(4000)).trim_end(), @r"
        Cost Analysis for 4000 characters:
          input_chars: 4000
          estimated_tokens: 1000
          total_estimated_tokens_with_overhead: 1500
          estimated_cost_usd: 0.045
        ");
    }

    #[test]
    fn renders_zero_report() {
        let expected = "Cost Analysis for 0 characters:\n  input_chars: 0\n  estimated_tokens: 0\n  total_estimated_tokens_with_overhead: 0\n  estimated_cost_usd: 0.0\n";
        similar_asserts::assert_eq!(render_text(&estimate_default(0)), expected);
    }

    #[test]
    fn renders_whole_dollar_cost_with_fraction() {
        let text = render_text(&estimate(4_000_000, 0.02));
        assert!(text.contains("  estimated_cost_usd: 30.0\n"), "{text}");
    }

    #[test]
    fn format_float_variants() {
        assert_eq!(format_float(0.045), "0.045");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(3.75), "3.75");
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(-0.045), "-0.045");
    }

    #[test]
    fn format_float_uses_exponent_for_extreme_magnitudes() {
        assert_eq!(format_float(4.5e18), "4.5e+18");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(9_999_999_999_999_998.0), "9999999999999998.0");
    }

    #[test]
    fn renders_huge_cost_in_exponent_form() {
        let text = render_text(&estimate(4000, 3e16));
        assert!(text.contains("  estimated_cost_usd: 4.5e+16\n"), "{text}");
    }
}
