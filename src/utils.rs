//! Cell-level helpers shared by the tabulation pass.

/// Missing-value sentinel, compared case-insensitively.
const MISSING_SENTINEL: &str = "NA";

/// Whether a cell carries no value (empty or the `NA` sentinel).
pub fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case(MISSING_SENTINEL)
}

/// Converts a methylation level to its rounded percentage key.
///
/// Uses `f64::round`, i.e. round-half-away-from-zero. Values above 1.0 are
/// legal input and simply produce keys above 100.
pub fn round_percent(value: f64) -> i64 { (value * 100.0).round() as i64 }

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", true)]
    #[case("NA", true)]
    #[case("na", true)]
    #[case("Na", true)]
    #[case("nan", false)]
    #[case("0.5", false)]
    fn test_is_missing(
        #[case] cell: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_missing(cell), expected);
    }

    #[rstest]
    #[case(0.55, 55)]
    #[case(0.0, 0)]
    #[case(1.0, 100)]
    #[case(0.005, 1)] // half rounds away from zero
    #[case(-0.005, -1)]
    #[case(1.5, 150)] // values above 1.0 are not clamped
    fn test_round_percent(
        #[case] value: f64,
        #[case] expected: i64,
    ) {
        assert_eq!(round_percent(value), expected);
    }
}
