/// Parses a 32-bit checksum written as hexadecimal, with an optional single
/// `0x`/`0X` prefix, e.g. `cbf43926` or `0xCBF43926`.
///
/// Signs, whitespace inside the digits and more than eight digits are
/// rejected.
pub fn parse_checksum(checksum_str: &str) -> Result<u32, String> {
    let trimmed = checksum_str.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let invalid = || format!("'{}' is not a hexadecimal checksum", checksum_str);

    let is_hex = digits.bytes().all(|b| b.is_ascii_hexdigit());
    if digits.is_empty() || digits.len() > 8 || !is_hex {
        return Err(invalid());
    }

    u32::from_str_radix(digits, 16).map_err(|_| invalid())
}
