//! Output layout and number rendering shared by the result writers.

/// Column naming and number precision for written results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLayout {
    /// Header of the appended score column.
    pub score_column: String,
    /// Header of the appended rank column.
    pub rank_column: String,
    /// Fixed number of decimals for scores; shortest round-trip form when None.
    pub precision: Option<usize>,
}

impl Default for ResultLayout {
    fn default() -> Self {
        Self {
            score_column: "Performance Score".to_string(),
            rank_column: "Rank".to_string(),
            precision: None,
        }
    }
}

/// Renders a float the way tabular tools print them.
///
/// Integral values keep a trailing `.0` (`3.0`, `1.5`); other values use the
/// shortest representation that round-trips. A precision forces fixed decimals.
pub fn format_float(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 => {
            format!("{:.1}", value)
        }
        None => format!("{}", value),
    }
}
