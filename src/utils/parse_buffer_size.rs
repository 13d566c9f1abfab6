/// Parses a human-readable size such as `64KB`, `128m` or `4096`.
///
/// Units are binary (`k`/`kb` = 1024, `m`/`mb` = 1024², `g`/`gb` = 1024³);
/// a bare number is taken as bytes.
pub fn parse_buffer_size(size_str: &str) -> Result<usize, String> {
    let size_str = size_str.trim().to_lowercase();

    // Find the position where the numeric part ends
    let num_end = size_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(size_str.len());

    let (num_part, unit_part) = size_str.split_at(num_end);

    let multiplier: usize = match unit_part.trim() {
        "" | "b" => 1, // No unit -> assume bytes
        "k" | "kb" | "kib" => 1024,
        "m" | "mb" | "mib" => 1024 * 1024,
        "g" | "gb" | "gib" => 1024 * 1024 * 1024,
        _ => return Err(format!("Invalid buffer size unit: {}", unit_part)),
    };

    num_part
        .parse::<usize>()
        .map_err(|_| format!("Failed to parse buffer size: {}", size_str))?
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Buffer size overflows: {}", size_str))
}
