//! Human-readable score strings for cross-track rows.

use super::super::numeric::percentage;

/// `"num/den (pct%)"`, percentage to one decimal.
pub fn format_fraction(numerator: u64, denominator: u64) -> String {
    let pct = percentage(numerator as f64, denominator as f64);
    format!("{numerator}/{denominator} ({pct:.1}%)")
}

/// `"PASS (matched/total)"` or `"FAIL (matched/total)"`.
pub fn format_pass_fail(passed: bool, matched: u64, total: u64) -> String {
    let verdict = if passed { "PASS" } else { "FAIL" };
    format!("{verdict} ({matched}/{total})")
}
