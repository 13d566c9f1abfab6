mod format_bytes;
pub use format_bytes::format_bytes;

mod parse_buffer_size;
pub use parse_buffer_size::parse_buffer_size;

mod parse_checksum;
pub use parse_checksum::parse_checksum;

mod simd_copy;
pub use simd_copy::simd_copy;

mod verify_file_existence;
pub use verify_file_existence::verify_file_existence;
