/// Format a metric with exactly two decimal digits: 12.5 -> "12.50".
/// Both the rollup file and the terminal report use this rendering.
pub fn metric(val: f64) -> String {
    format!("{val:.2}")
}
