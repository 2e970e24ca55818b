// File: crates/progress-chart/src/axis.rs
// Summary: X-axis label selection under a fixed label budget, and date formatting.

use chrono::NaiveDate;

/// Most date labels drawn under the x-axis, whatever the series length.
pub const MAX_X_LABELS: usize = 6;

/// Short month + day, e.g. `Sep 20`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Indices that receive an x-axis label for a series of `count` points.
///
/// Every `ceil(count / 6)`-th index is labelled, plus the last one. That rule alone
/// can produce seven labels; when it does, the interior label nearest the end is
/// dropped so the first and last always survive.
pub fn label_indices(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let step = count.div_ceil(MAX_X_LABELS).max(1);
    let last = count - 1;
    let mut picked = (0..count).filter(|i| i % step == 0 || *i == last).collect::<Vec<_>>();
    if picked.len() > MAX_X_LABELS {
        let dropped = picked.remove(picked.len() - 2);
        log::debug!("x labels: dropped index {dropped} of {count} to stay within {MAX_X_LABELS}");
    }
    picked
}
