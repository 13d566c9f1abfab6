/// Renders a byte count with a binary unit suffix, two decimals above 1 KB.
///
/// # Examples
/// ```
/// use simd_r_checksum::utils::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 bytes");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// assert_eq!(format_bytes(128 * 1024 * 1024), "128.00 MB");
/// assert_eq!(format_bytes(3 << 40), "3.00 TB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    let mut scaled = bytes as f64 / 1024.0;
    let mut unit = 0;

    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", scaled, UNITS[unit])
}
