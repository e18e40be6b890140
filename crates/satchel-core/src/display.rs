//! Human-facing size formatting for rendering an existing attachment.

/// Format a byte count the way the composer displays it next to the file
/// name: whole bytes below 1 KiB, one decimal in KB below 1 MiB, two
/// decimals in MB above.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
