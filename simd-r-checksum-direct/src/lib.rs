pub mod direct_buffer;
pub use direct_buffer::*;
