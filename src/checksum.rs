pub mod constants;
pub use constants::*;

mod algorithm;
pub use algorithm::Algorithm;

mod backend;
pub use backend::ChecksumBackend;

mod backend_loader;
pub use backend_loader::{
    BackendKind, BackendLoader, BackendPolicy, BackendStatus, backend_status, is_backend_available,
    load_backend,
};

mod byte_view;
pub use byte_view::{ByteSource, ByteView, ScatterList};

mod error;
pub use error::ChecksumError;

mod incremental_checksum;
pub use incremental_checksum::IncrementalChecksum;
