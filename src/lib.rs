//! Incremental CRC32 and CRC32C checksums over arbitrarily large input.
//!
//! The engine keeps a running value across partial updates and splits each
//! update into bounded backend calls, so the result never depends on how the
//! input was partitioned. Heap slices, memory-mapped regions and views
//! without contiguous storage are all accepted at the update boundary.

pub mod checksum;
pub use checksum::{
    Algorithm, ByteSource, ByteView, ChecksumBackend, ChecksumError, IncrementalChecksum,
    MAX_CHUNK_SIZE, ScatterList, is_backend_available,
};

pub mod config;
pub use config::ChecksumConfig;

pub mod cli;

pub mod utils;
pub use utils::format_bytes;

pub use simd_r_checksum_direct::DirectBuffer;
