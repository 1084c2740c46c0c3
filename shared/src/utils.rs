//! # Shared Utility Functions
//!
//! Display helpers used by the dashboard when naming downloads and
//! describing uploaded files.
//!
//! - [`underscore_whitespace`] - Replace each run of whitespace with a single `_`
//! - [`format_file_size`] - Render a byte count as megabytes with two decimals
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::underscore_whitespace;
//!
//! assert_eq!(underscore_whitespace("Weekly  Deals Report"), "Weekly_Deals_Report");
//! ```

/// Replace every run of whitespace in `text` with a single underscore.
///
/// Leading and trailing runs are replaced too, so `" a "` becomes `"_a_"`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::underscore_whitespace;
///
/// assert_eq!(underscore_whitespace("Q1 Report"), "Q1_Report");
/// assert_eq!(underscore_whitespace("a\t\n b"), "a_b");
/// assert_eq!(underscore_whitespace("plain"), "plain");
/// ```
pub fn underscore_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }

    out
}

/// Format a byte count as megabytes, e.g. `"1.50 MB"`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_file_size;
///
/// assert_eq!(format_file_size(1_572_864), "1.50 MB");
/// assert_eq!(format_file_size(0), "0.00 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
