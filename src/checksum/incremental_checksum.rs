use crate::checksum::constants::STREAM_BUFFER_SIZE;
use crate::checksum::{Algorithm, ByteSource, ByteView, ChecksumBackend, ChecksumError};
use crate::config::ChecksumConfig;
use std::io::{self, Read, Write};
use std::ops::Range;
use tracing::debug;

/// Running CRC state bound to one backend.
///
/// Every update is split into backend calls of at most
/// [`chunk_size`](Self::chunk_size) bytes, each seeded with the value
/// produced by the previous call. The final value therefore does not depend
/// on how the caller partitions its input:
///
/// ```rust
/// use simd_r_checksum::{Algorithm, IncrementalChecksum};
///
/// let mut crc = IncrementalChecksum::new(Algorithm::Crc32).unwrap();
/// crc.update_slice(b"12345");
/// crc.update_slice(b"6789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
/// ```
///
/// An instance is not meant to be shared between threads while updating;
/// every mutating method takes `&mut self`. Independent instances share no
/// state.
#[derive(Debug, Clone)]
pub struct IncrementalChecksum<B: ChecksumBackend = Algorithm> {
    backend: B,
    value: u32,
    chunk_size: usize,
}

impl IncrementalChecksum<Algorithm> {
    /// Creates an engine for `algorithm` with the default configuration.
    ///
    /// # Returns
    /// - `Err(ChecksumError::BackendUnavailable)` if the backend cannot be loaded.
    pub fn new(algorithm: Algorithm) -> Result<Self, ChecksumError> {
        Self::with_config(algorithm, &ChecksumConfig::default())
    }

    /// Creates an engine for `algorithm`, loading the process-wide backend
    /// under the configured policy first.
    pub fn with_config(
        algorithm: Algorithm,
        config: &ChecksumConfig,
    ) -> Result<Self, ChecksumError> {
        crate::checksum::load_backend(config.policy())?;
        Self::with_backend(algorithm, config.chunk_size())
    }

    /// Creates an engine configured from the environment.
    ///
    /// See [`ChecksumConfig::from_env`].
    pub fn from_env(algorithm: Algorithm) -> Result<Self, ChecksumError> {
        Self::with_config(algorithm, &ChecksumConfig::from_env()?)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.backend
    }
}

impl<B: ChecksumBackend> IncrementalChecksum<B> {
    /// Binds an arbitrary backend. No process-wide loading happens here.
    ///
    /// # Returns
    /// - `Err(ChecksumError::InvalidChunkSize)` if `chunk_size` is zero.
    pub fn with_backend(backend: B, chunk_size: usize) -> Result<Self, ChecksumError> {
        if chunk_size == 0 {
            return Err(ChecksumError::InvalidChunkSize(chunk_size));
        }

        Ok(Self {
            backend,
            value: 0,
            chunk_size,
        })
    }

    /// Feeds `bytes[offset..offset + length]` into the checksum.
    ///
    /// The range is validated before anything is read; on error the running
    /// value is left untouched.
    pub fn update(
        &mut self,
        bytes: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<(), ChecksumError> {
        let range = checked_range(offset, length, bytes.len())?;
        self.absorb(&bytes[range]);
        Ok(())
    }

    /// Feeds the whole of `bytes` into the checksum.
    pub fn update_slice(&mut self, bytes: &[u8]) {
        self.absorb(bytes);
    }

    pub fn update_byte(&mut self, byte: u8) {
        self.absorb(&[byte]);
    }

    /// Feeds `length` bytes of an externally-owned region, starting at
    /// `offset`, into the checksum.
    ///
    /// Addressable regions go through the backend's direct path in place.
    /// Regions without a contiguous address are copied into an owned buffer
    /// and routed through [`update`](Self::update). Both produce the same
    /// value as `update` on the same bytes.
    pub fn update_direct(
        &mut self,
        view: &dyn ByteView,
        offset: usize,
        length: usize,
    ) -> Result<(), ChecksumError> {
        let range = checked_range(offset, length, view.len())?;

        match view.as_contiguous() {
            Some(bytes) => {
                for chunk in bytes[range].chunks(self.chunk_size) {
                    self.value = self.backend.compute_direct(chunk, self.value);
                }
            }
            None => {
                let owned = materialize(view, offset, length);
                self.update(&owned, 0, owned.len())?;
            }
        }

        Ok(())
    }

    /// Dispatches one of the closed set of input sources.
    pub fn update_source(&mut self, source: ByteSource<'_>) -> Result<(), ChecksumError> {
        match source {
            ByteSource::Heap(bytes) => self.update(bytes, 0, bytes.len()),
            ByteSource::Direct(view) => self.update_direct(view, 0, view.len()),
            ByteSource::Detached(view) => {
                let owned = materialize(view, 0, view.len());
                self.update(&owned, 0, owned.len())
            }
        }
    }

    /// Streams `reader` to exhaustion through a fixed-size buffer.
    ///
    /// # Returns
    /// - `Ok(u64)`: the number of bytes consumed.
    /// - `Err(std::io::Error)`: the first read error. Bytes read before the
    ///   error have already been absorbed.
    pub fn update_reader<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut buffer = vec![0u8; STREAM_BUFFER_SIZE];
        let mut total = 0u64;

        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            self.absorb(&buffer[..bytes_read]);
            total += bytes_read as u64;
        }

        Ok(total)
    }

    /// Returns the current checksum value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Big-endian rendering of [`value`](Self::value), as checksums are
    /// usually transmitted.
    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.value.to_le_bytes()
    }

    /// Resets the running value to 0. The backend and chunk size are kept.
    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `chunks` never yields an empty slice, so zero-length input makes no
    /// backend call and exact multiples stop after the last full chunk.
    fn absorb(&mut self, bytes: &[u8]) {
        if bytes.len() > self.chunk_size {
            debug!(
                "Splitting {} byte update into {} byte chunks",
                bytes.len(),
                self.chunk_size
            );
        }

        for chunk in bytes.chunks(self.chunk_size) {
            self.value = self.backend.compute(chunk, self.value);
        }
    }
}

/// Every write is absorbed in full, so `io::copy` can drive the checksum.
impl<B: ChecksumBackend> Write for IncrementalChecksum<B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn checked_range(
    offset: usize,
    length: usize,
    available: usize,
) -> Result<Range<usize>, ChecksumError> {
    match offset.checked_add(length) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(ChecksumError::InvalidRange {
            offset,
            length,
            available,
        }),
    }
}

fn materialize(view: &dyn ByteView, offset: usize, length: usize) -> Vec<u8> {
    debug!(
        "Copying {} bytes from a view without contiguous storage",
        length
    );

    let mut owned = vec![0u8; length];
    view.copy_range_to(offset, &mut owned);
    owned
}
