use crate::checksum::Algorithm;

/// Contract for the byte-level checksum function driven by
/// [`IncrementalChecksum`](crate::IncrementalChecksum).
///
/// Implementations must be deterministic and side-effect free, and must be
/// continuable: feeding the result of one call as `previous` to the next
/// call yields the checksum of the concatenated input.
///
/// The engine never asks whether an implementation is hardware accelerated.
pub trait ChecksumBackend {
    /// Checksum of `bytes`, continuing from `previous`.
    fn compute(&self, bytes: &[u8], previous: u32) -> u32;

    /// Same contract as [`compute`](Self::compute), for bytes that live in
    /// externally-owned memory (memory mappings, foreign allocations).
    fn compute_direct(&self, bytes: &[u8], previous: u32) -> u32 {
        self.compute(bytes, previous)
    }
}

impl ChecksumBackend for Algorithm {
    #[inline]
    fn compute(&self, bytes: &[u8], previous: u32) -> u32 {
        Algorithm::compute(*self, bytes, previous)
    }
}

impl<B: ChecksumBackend + ?Sized> ChecksumBackend for &B {
    #[inline]
    fn compute(&self, bytes: &[u8], previous: u32) -> u32 {
        (**self).compute(bytes, previous)
    }

    #[inline]
    fn compute_direct(&self, bytes: &[u8], previous: u32) -> u32 {
        (**self).compute_direct(bytes, previous)
    }
}
