use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # CRC32C of a file (memory-mapped)
      %BINARY_NAME% sum data.bin

      # CRC32 of several files, streamed through a read buffer
      %BINARY_NAME% sum -a crc32 --no-mmap a.bin b.bin

      # Checksum stdin
      cat file.txt | %BINARY_NAME% sum -a crc32

      # Bound every backend call to 64MB
      %BINARY_NAME% sum --chunk-size 64MB large.img

      # Verify a file against a known checksum
      %BINARY_NAME% verify -a crc32 file.txt cbf43926

      # Display backend information
      %BINARY_NAME% info

    Environment:
      SIMD_R_CHECKSUM_CHUNK_SIZE   default chunk size (e.g. 128MB)
      SIMD_R_CHECKSUM_BACKEND      auto | accelerated
      RUST_LOG                     log filter (default: warn)
"#};
