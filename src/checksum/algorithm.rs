use crate::checksum::ChecksumError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// The closed set of supported checksum algorithms.
///
/// Each variant is bound to one backend function:
/// - `Crc32` (IEEE 802.3 / ISO-HDLC polynomial) is computed by `crc32fast`,
///   which uses PCLMULQDQ on x86_64 and the ARMv8 CRC extension on aarch64.
/// - `Crc32c` (Castagnoli polynomial) is computed by `crc32c`, which uses
///   SSE4.2 on x86_64 and the ARMv8 CRC extension on aarch64.
///
/// Both crates fall back to table-driven software when the instructions are
/// missing, producing bit-identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    Crc32,
    Crc32c,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Crc32, Algorithm::Crc32c];

    /// Continues a running checksum over `bytes`, starting from `previous`.
    ///
    /// `previous` is a finalized checksum value (0 for a fresh computation),
    /// so `compute(b, compute(a, 0))` equals `compute(a ++ b, 0)`.
    #[inline]
    pub fn compute(self, bytes: &[u8], previous: u32) -> u32 {
        match self {
            Algorithm::Crc32 => {
                let mut hasher = crc32fast::Hasher::new_with_initial(previous);
                hasher.update(bytes);
                hasher.finalize()
            }
            Algorithm::Crc32c => crc32c::crc32c_append(previous, bytes),
        }
    }

    /// One-shot checksum of `bytes`.
    ///
    /// Calls the backend with the whole slice; use
    /// [`IncrementalChecksum`](crate::IncrementalChecksum) to bound per-call work.
    #[inline]
    pub fn checksum(self, bytes: &[u8]) -> u32 {
        self.compute(bytes, 0)
    }

    /// Returns `true` if this CPU offers the instructions the backend crate
    /// uses for its accelerated path.
    pub fn is_accelerated(self) -> bool {
        match self {
            Algorithm::Crc32 => crc32_hardware_detected(),
            Algorithm::Crc32c => crc32c_hardware_detected(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Crc32 => "crc32",
            Algorithm::Crc32c => "crc32c",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crc32" => Ok(Algorithm::Crc32),
            "crc32c" => Ok(Algorithm::Crc32c),
            _ => Err(ChecksumError::InvalidConfig {
                key: "algorithm".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn crc32_hardware_detected() -> bool {
    std::is_x86_feature_detected!("pclmulqdq") && std::is_x86_feature_detected!("sse4.1")
}

#[cfg(target_arch = "x86_64")]
fn crc32c_hardware_detected() -> bool {
    std::is_x86_feature_detected!("sse4.2")
}

#[cfg(target_arch = "aarch64")]
fn crc32_hardware_detected() -> bool {
    std::arch::is_aarch64_feature_detected!("crc")
}

#[cfg(target_arch = "aarch64")]
fn crc32c_hardware_detected() -> bool {
    std::arch::is_aarch64_feature_detected!("crc")
}

// Fallback for unsupported architectures
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn crc32_hardware_detected() -> bool {
    false
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn crc32c_hardware_detected() -> bool {
    false
}
