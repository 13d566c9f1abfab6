#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Copies `min(dst.len(), src.len())` bytes from `src` into `dst`, using
/// 32-byte AVX2 moves on x86_64 (when detected) and 16-byte NEON moves on
/// aarch64.
///
/// Used when a view without contiguous storage is materialized into an
/// owned buffer before hashing.
///
/// # Returns
/// - The number of bytes copied.
#[inline]
pub fn simd_copy(dst: &mut [u8], src: &[u8]) -> usize {
    let len = dst.len().min(src.len());
    let (dst, src) = (&mut dst[..len], &src[..len]);

    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            // SAFETY: AVX2 support was detected at runtime.
            unsafe { simd_copy_x86(dst, src) };
            return len;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe { simd_copy_arm(dst, src) };
    }

    // Fallback for unsupported architectures
    #[cfg(not(target_arch = "aarch64"))]
    dst.copy_from_slice(src);

    len
}

/// `dst` and `src` must have equal lengths.
#[inline]
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn simd_copy_x86(dst: &mut [u8], src: &[u8]) {
    let lanes = src.len() / 32 * 32;

    let mut i = 0;
    while i < lanes {
        // SAFETY: `i + 32 <= lanes <= len` for both slices; unaligned loads
        // and stores are used.
        unsafe {
            let data = _mm256_loadu_si256(src.as_ptr().add(i) as *const __m256i);
            _mm256_storeu_si256(dst.as_mut_ptr().add(i) as *mut __m256i, data);
        }
        i += 32;
    }

    dst[lanes..].copy_from_slice(&src[lanes..]);
}

/// `dst` and `src` must have equal lengths.
#[inline]
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn simd_copy_arm(dst: &mut [u8], src: &[u8]) {
    let lanes = src.len() / 16 * 16;

    let mut i = 0;
    while i < lanes {
        // SAFETY: `i + 16 <= lanes <= len` for both slices.
        unsafe {
            let data = vld1q_u8(src.as_ptr().add(i));
            vst1q_u8(dst.as_mut_ptr().add(i), data);
        }
        i += 16;
    }

    dst[lanes..].copy_from_slice(&src[lanes..]);
}
