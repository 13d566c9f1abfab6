use memmap2::{Mmap, MmapMut};
use std::fs::File;
use std::io;
use std::ops::Range;
use std::sync::Arc;

/// Zero-copy owner of a sub-slice of an externally-owned memory mapping.
///
/// The bytes live outside the Rust heap: either in a file mapping or in an
/// anonymous mapping created by [`DirectBuffer::copy_from_slice`]. Consumers
/// get a stable contiguous address for as long as this struct is alive.
///
/// Empty regions carry no mapping at all, since zero-length mappings are not
/// portable across platforms.
#[derive(Debug)]
pub struct DirectBuffer {
    /// The underlying memory map, `None` for an empty region.
    mmap_arc: Option<Arc<Mmap>>,

    /// The range of bytes within the mapping exposed by this buffer.
    range: Range<usize>,
}

impl DirectBuffer {
    /// Returns an empty buffer that is not backed by any mapping.
    pub fn empty() -> Self {
        Self {
            mmap_arc: None,
            range: 0..0,
        }
    }

    /// Wraps an existing mapping, exposing all of its bytes.
    pub fn from_mmap(mmap: Arc<Mmap>) -> Self {
        let len = mmap.len();
        if len == 0 {
            return Self::empty();
        }

        Self {
            mmap_arc: Some(mmap),
            range: 0..len,
        }
    }

    /// Maps `file` read-only into memory.
    ///
    /// # Returns
    /// - `Ok(DirectBuffer)` covering the whole file.
    /// - `Err(std::io::Error)` if the metadata lookup or the mapping fails.
    pub fn map_file(file: &File) -> io::Result<Self> {
        if file.metadata()?.len() == 0 {
            return Ok(Self::empty());
        }

        // SAFETY: the mapping is read-only. Callers must not truncate the file
        // while the buffer is alive, the same contract `memmap2` documents.
        let mmap = unsafe { Mmap::map(file)? };

        Ok(Self::from_mmap(Arc::new(mmap)))
    }

    /// Allocates an anonymous mapping and fills it with `bytes`.
    ///
    /// This is the direct-allocation path: the copy lives outside the Rust
    /// allocator, the way an off-heap buffer would.
    pub fn copy_from_slice(bytes: &[u8]) -> io::Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::empty());
        }

        let mut mmap = MmapMut::map_anon(bytes.len())?;
        mmap.copy_from_slice(bytes);

        Ok(Self::from_mmap(Arc::new(mmap.make_read_only()?)))
    }

    /// Returns a new buffer over `range` (relative to this buffer), sharing
    /// the same mapping. `None` if the range is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Option<Self> {
        if range.start > range.end || range.end > self.len() {
            return None;
        }

        if range.is_empty() {
            return Some(Self::empty());
        }

        Some(Self {
            mmap_arc: self.mmap_arc.clone(),
            range: self.range.start + range.start..self.range.start + range.end,
        })
    }

    /// Creates a new handle on the same mapping without copying any bytes.
    pub fn clone_arc(&self) -> Self {
        Self {
            mmap_arc: self.mmap_arc.clone(),
            range: self.range.clone(),
        }
    }

    /// Returns a zero-copy reference to the bytes of this buffer.
    pub fn as_slice(&self) -> &[u8] {
        match &self.mmap_arc {
            Some(mmap) => &mmap[self.range.clone()],
            None => &[],
        }
    }

    /// Returns the base address of the region.
    pub fn as_ptr(&self) -> *const u8 {
        self.as_slice().as_ptr()
    }

    /// Returns the size of the region in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the memory address range of the region.
    pub fn address_range(&self) -> Range<usize> {
        let start = self.as_ptr() as usize;
        start..start + self.len()
    }

    /// Returns `true` if both buffers are views on the same mapping.
    pub fn shares_mapping_with(&self, other: &DirectBuffer) -> bool {
        match (&self.mmap_arc, &other.mmap_arc) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Hints the kernel that the mapping will be read front to back.
    ///
    /// No-op on platforms without `madvise` and for empty buffers.
    pub fn advise_sequential(&self) -> io::Result<()> {
        #[cfg(unix)]
        {
            if let Some(mmap) = &self.mmap_arc {
                mmap.advise(memmap2::Advice::Sequential)?;
            }
        }

        Ok(())
    }
}

impl Default for DirectBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Enable `*direct_buffer` to act like a `&[u8]`
impl std::ops::Deref for DirectBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for DirectBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Let us do: `assert!(direct_buffer == &b"some bytes"[..])`
impl PartialEq<[u8]> for DirectBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for DirectBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl PartialEq<Vec<u8>> for DirectBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
