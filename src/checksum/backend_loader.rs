use crate::checksum::{Algorithm, ChecksumError};
use crate::config::ChecksumConfig;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Which backends are acceptable when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPolicy {
    /// Use the hardware path when present, the bundled software tables otherwise.
    #[default]
    Auto,

    /// Refuse to load unless every algorithm has a hardware path.
    RequireAccelerated,
}

impl FromStr for BackendPolicy {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(BackendPolicy::Auto),
            "accelerated" | "require-accelerated" => Ok(BackendPolicy::RequireAccelerated),
            _ => Err(ChecksumError::InvalidConfig {
                key: "backend policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Accelerated,
    Portable,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Accelerated => f.write_str("accelerated"),
            BackendKind::Portable => f.write_str("portable"),
        }
    }
}

/// Outcome of probing the CPU for each algorithm's hardware path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendStatus {
    crc32: BackendKind,
    crc32c: BackendKind,
}

impl BackendStatus {
    pub fn new(crc32: BackendKind, crc32c: BackendKind) -> Self {
        Self { crc32, crc32c }
    }

    /// Runs CPU feature detection for every algorithm.
    pub fn detect() -> Self {
        let kind_of = |algorithm: Algorithm| {
            if algorithm.is_accelerated() {
                BackendKind::Accelerated
            } else {
                BackendKind::Portable
            }
        };

        Self::new(kind_of(Algorithm::Crc32), kind_of(Algorithm::Crc32c))
    }

    pub fn kind(&self, algorithm: Algorithm) -> BackendKind {
        match algorithm {
            Algorithm::Crc32 => self.crc32,
            Algorithm::Crc32c => self.crc32c,
        }
    }

    /// Checks this status against `policy`.
    pub fn check(&self, policy: BackendPolicy) -> Result<(), ChecksumError> {
        if policy == BackendPolicy::Auto {
            return Ok(());
        }

        let portable = Algorithm::ALL
            .into_iter()
            .find(|&algorithm| self.kind(algorithm) == BackendKind::Portable);

        match portable {
            Some(algorithm) => Err(ChecksumError::BackendUnavailable {
                algorithm,
                reason: "no hardware support and software fallback is disabled by policy",
            }),
            None => Ok(()),
        }
    }
}

/// One-time, thread-safe backend initialization.
///
/// A successful load is cached for the lifetime of the loader and later
/// calls only re-check the policy against it. A failed load caches nothing,
/// so it can be retried.
#[derive(Debug, Default)]
pub struct BackendLoader {
    status: OnceLock<BackendStatus>,
}

impl BackendLoader {
    pub const fn new() -> Self {
        Self {
            status: OnceLock::new(),
        }
    }

    pub fn load(&self, policy: BackendPolicy) -> Result<&BackendStatus, ChecksumError> {
        self.load_with(policy, BackendStatus::detect)
    }

    /// Like [`load`](Self::load), with a caller-supplied detector. The detector only
    /// runs while nothing has been cached yet.
    pub fn load_with<P>(
        &self,
        policy: BackendPolicy,
        detect: P,
    ) -> Result<&BackendStatus, ChecksumError>
    where
        P: FnOnce() -> BackendStatus,
    {
        if let Some(status) = self.status.get() {
            status.check(policy)?;
            return Ok(status);
        }

        let candidate = detect();
        if let Err(err) = candidate.check(policy) {
            warn!("Refusing to load checksum backend: {}", err);
            return Err(err);
        }

        Ok(self.status.get_or_init(|| {
            info!(
                "Checksum backend loaded (crc32: {}, crc32c: {})",
                candidate.crc32, candidate.crc32c
            );
            candidate
        }))
    }

    pub fn status(&self) -> Option<&BackendStatus> {
        self.status.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.status.get().is_some()
    }
}

static BACKEND_LOADER: BackendLoader = BackendLoader::new();

/// Loads the process-wide backend under `policy`.
pub fn load_backend(policy: BackendPolicy) -> Result<&'static BackendStatus, ChecksumError> {
    BACKEND_LOADER.load(policy)
}

/// Returns the process-wide backend status, if a load has succeeded.
pub fn backend_status() -> Option<&'static BackendStatus> {
    BACKEND_LOADER.status()
}

/// Returns `true` if checksums can be computed under the policy configured in
/// the environment, loading the backend on first use.
pub fn is_backend_available() -> bool {
    ChecksumConfig::from_env()
        .and_then(|config| load_backend(config.policy()))
        .is_ok()
}
