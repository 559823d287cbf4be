//! Formatting utilities for file sizes and upload timestamps.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Format file size for display (e.g., "512 B", "1.5 KB", "3.2 MB").
pub fn format_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.1} GB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a byte limit in megabytes, dropping the decimal for whole values.
pub fn format_megabytes(bytes: u64) -> String {
    if bytes % MIB == 0 {
        format!("{}", bytes / MIB)
    } else {
        format!("{:.1}", bytes as f64 / MIB as f64)
    }
}

/// Format an upload time relative to `now_ms`.
///
/// Recent uploads read as "just now", "5 min ago" or "3 h ago"; anything a
/// day or older falls back to an ISO date. Timestamps in the future (clock
/// skew) are treated as "just now".
pub fn format_timestamp(timestamp_ms: u64, now_ms: u64) -> String {
    let elapsed = now_ms.saturating_sub(timestamp_ms);
    if elapsed < MS_PER_MINUTE {
        "just now".to_string()
    } else if elapsed < MS_PER_HOUR {
        format!("{} min ago", elapsed / MS_PER_MINUTE)
    } else if elapsed < MS_PER_DAY {
        format!("{} h ago", elapsed / MS_PER_HOUR)
    } else {
        let (year, month, day) = civil_date(timestamp_ms / MS_PER_DAY);
        format!("{:04}-{:02}-{:02}", year, month, day)
    }
}

/// Proleptic Gregorian (year, month, day) of a day count since 1970-01-01.
///
/// Works in 400-year eras starting on March 1st, so leap days fall at the
/// end of each shifted year and need no per-year loop.
fn civil_date(days_since_epoch: u64) -> (u64, u64, u64) {
    // 1970-01-01 is day 719_468 counted from 0000-03-01
    let days = days_since_epoch + 719_468;
    let era = days / 146_097;
    let day_of_era = days % 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
    let year = era * 400 + year_of_era + u64::from(month <= 2);
    (year, month, day)
}
