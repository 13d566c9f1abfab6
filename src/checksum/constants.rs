/// Upper bound on the number of bytes handed to a backend in a single call.
///
/// Larger updates are split into consecutive chunks of at most this size,
/// each seeded with the checksum produced by the previous one.
pub const MAX_CHUNK_SIZE: usize = 128 * 1024 * 1024; // 128 MiB

/// Read buffer used when streaming from an `io::Read` source.
pub const STREAM_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Environment variable overriding the chunk size (`parse_buffer_size` syntax).
pub const CHUNK_SIZE_ENV: &str = "SIMD_R_CHECKSUM_CHUNK_SIZE";

/// Environment variable selecting the backend policy (`auto` or `accelerated`).
pub const BACKEND_POLICY_ENV: &str = "SIMD_R_CHECKSUM_BACKEND";
