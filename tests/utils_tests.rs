#[cfg(test)]
mod tests {
    use simd_r_checksum::utils::{
        format_bytes, parse_buffer_size, parse_checksum, simd_copy, verify_file_existence,
    };
    use tempfile::tempdir;

    #[test]
    fn test_parse_buffer_size_units() {
        assert_eq!(parse_buffer_size("4096"), Ok(4096));
        assert_eq!(parse_buffer_size("12b"), Ok(12));
        assert_eq!(parse_buffer_size("64KB"), Ok(64 * 1024));
        assert_eq!(parse_buffer_size("64k"), Ok(64 * 1024));
        assert_eq!(parse_buffer_size(" 128MiB "), Ok(128 * 1024 * 1024));
        assert_eq!(parse_buffer_size("2 GB"), Ok(2 * 1024 * 1024 * 1024));
    }

    #[test]
    fn test_parse_buffer_size_errors() {
        assert!(parse_buffer_size("").is_err());
        assert!(parse_buffer_size("MB").is_err());
        assert!(parse_buffer_size("10 parsecs").is_err());
        assert!(parse_buffer_size("-5").is_err());
        assert!(parse_buffer_size(&format!("{}g", usize::MAX)).is_err());
    }

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum("cbf43926"), Ok(0xCBF4_3926));
        assert_eq!(parse_checksum("0xCBF43926"), Ok(0xCBF4_3926));
        assert_eq!(parse_checksum("0X8a9136aa"), Ok(0x8A91_36AA));
        assert_eq!(parse_checksum(" 0 "), Ok(0));
        assert_eq!(parse_checksum("ffffffff"), Ok(u32::MAX));
    }

    #[test]
    fn test_parse_checksum_errors() {
        let rejected = [
            "",
            "0x",
            "0x0xcbf43926",
            "+8a9136aa",
            "-1",
            "xyz",
            "1ffffffff",
            "12 34",
        ];
        for input in rejected {
            assert!(parse_checksum(input).is_err(), "accepted {:?}", input);
        }

        let err = parse_checksum("0x0x1").unwrap_err();
        assert!(err.contains("not a hexadecimal checksum"));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(1023), "1023 bytes");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_bytes(2048 << 40), "2048.00 TB");
    }

    #[test]
    fn test_simd_copy_lengths() {
        let src: Vec<u8> = (0..=255).collect();

        for len in [0, 1, 15, 16, 17, 31, 32, 33, 100, 256] {
            let mut dst = vec![0u8; len];
            assert_eq!(simd_copy(&mut dst, &src), len);
            assert_eq!(dst, src[..len]);
        }
    }

    #[test]
    fn test_simd_copy_short_source() {
        let mut dst = [0xFFu8; 40];
        assert_eq!(simd_copy(&mut dst, &[7u8; 35]), 35);
        assert!(dst[..35].iter().all(|&b| b == 7));
        assert!(dst[35..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_verify_file_existence() {
        let dir = tempdir().expect("Failed to create temp dir");
        let file_path = dir.path().join("present.bin");
        std::fs::write(&file_path, b"x").unwrap();

        assert!(verify_file_existence(&file_path).is_ok());
        assert_eq!(
            verify_file_existence(&dir.path().join("absent.bin"))
                .unwrap_err()
                .kind(),
            std::io::ErrorKind::NotFound
        );
        assert_eq!(
            verify_file_existence(dir.path()).unwrap_err().kind(),
            std::io::ErrorKind::InvalidInput
        );
    }
}
