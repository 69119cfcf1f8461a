// Display formatting for large counts

/// Abbreviate a count with a K/M/B suffix, one decimal place.
///
/// Thresholds are checked largest first with `>=`, so exact boundaries
/// land in the upper tier (1000 -> "1.0K"). Values just under a boundary
/// are not renormalized: 999_999 -> "1000.0K". Below 1000 the count is
/// printed as-is with no suffix or separators.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000_000 {
        format!("{:.1}B", count as f64 / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
