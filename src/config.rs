use crate::checksum::{
    BACKEND_POLICY_ENV, BackendPolicy, CHUNK_SIZE_ENV, ChecksumError, MAX_CHUNK_SIZE,
};
use crate::utils::parse_buffer_size;

/// Engine configuration.
///
/// Defaults to 128 MiB chunks and the [`BackendPolicy::Auto`] policy.
/// Values can be overridden from the environment:
///
/// - `SIMD_R_CHECKSUM_CHUNK_SIZE`: chunk size, e.g. `64KB`, `128MB`.
/// - `SIMD_R_CHECKSUM_BACKEND`: `auto` or `accelerated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumConfig {
    chunk_size: usize,
    policy: BackendPolicy,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            chunk_size: MAX_CHUNK_SIZE,
            policy: BackendPolicy::Auto,
        }
    }
}

impl ChecksumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_policy(mut self, policy: BackendPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn policy(&self) -> BackendPolicy {
        self.policy
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ChecksumError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Unset variables keep their defaults.
    ///
    /// # Returns
    /// - `Err(ChecksumError::InvalidConfig)` if a value cannot be parsed.
    /// - `Err(ChecksumError::InvalidChunkSize)` if the chunk size is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChecksumError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(CHUNK_SIZE_ENV) {
            config.chunk_size = match parse_buffer_size(&value) {
                Ok(0) => return Err(ChecksumError::InvalidChunkSize(0)),
                Ok(chunk_size) => chunk_size,
                Err(_) => return Err(invalid_config(CHUNK_SIZE_ENV, value)),
            };
        }

        if let Some(value) = lookup(BACKEND_POLICY_ENV) {
            config.policy = match value.parse() {
                Ok(policy) => policy,
                Err(_) => return Err(invalid_config(BACKEND_POLICY_ENV, value)),
            };
        }

        Ok(config)
    }
}

fn invalid_config(key: &str, value: String) -> ChecksumError {
    ChecksumError::InvalidConfig {
        key: key.to_string(),
        value,
    }
}
