use crate::utils::simd_copy;
use simd_r_checksum_direct::DirectBuffer;
use std::collections::VecDeque;

/// A byte region that may or may not have a stable contiguous address.
///
/// Views that can hand out one slice covering all their bytes are fed to the
/// backend in place. Views that cannot (ring buffers that wrapped around,
/// scatter lists) are materialized into an owned copy first.
pub trait ByteView {
    /// Total number of bytes in the view.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every byte of the view as one slice, or `None` if the view
    /// has no contiguous backing storage.
    fn as_contiguous(&self) -> Option<&[u8]>;

    /// Copies `dst.len()` bytes starting at `offset` into `dst`.
    ///
    /// # Panics
    /// - If `offset + dst.len()` exceeds [`len`](Self::len).
    fn copy_range_to(&self, offset: usize, dst: &mut [u8]);
}

impl ByteView for DirectBuffer {
    fn len(&self) -> usize {
        DirectBuffer::len(self)
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }

    fn copy_range_to(&self, offset: usize, dst: &mut [u8]) {
        simd_copy(dst, &self.as_slice()[offset..offset + dst.len()]);
    }
}

/// A ring buffer is contiguous only while its contents have not wrapped.
impl ByteView for VecDeque<u8> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        match self.as_slices() {
            (front, []) => Some(front),
            ([], back) => Some(back),
            _ => None,
        }
    }

    fn copy_range_to(&self, offset: usize, dst: &mut [u8]) {
        let (front, back) = self.as_slices();
        copy_segments([front, back], offset, dst);
    }
}

/// Borrowed segments read in order as one logical byte range.
///
/// Only addressable in place when at most one segment is non-empty.
#[derive(Debug, Clone, Copy)]
pub struct ScatterList<'a> {
    segments: &'a [&'a [u8]],
}

impl<'a> ScatterList<'a> {
    pub fn new(segments: &'a [&'a [u8]]) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &'a [&'a [u8]] {
        self.segments
    }
}

impl ByteView for ScatterList<'_> {
    fn len(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        let mut non_empty = self.segments.iter().filter(|s| !s.is_empty());

        match (non_empty.next(), non_empty.next()) {
            (None, _) => Some(&[] as &[u8]),
            (Some(only), None) => Some(*only),
            _ => None,
        }
    }

    fn copy_range_to(&self, offset: usize, dst: &mut [u8]) {
        copy_segments(self.segments.iter().copied(), offset, dst);
    }
}

fn copy_segments<'a, I>(segments: I, mut offset: usize, dst: &mut [u8])
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut written = 0;

    for segment in segments {
        if written == dst.len() {
            break;
        }

        if offset >= segment.len() {
            offset -= segment.len();
            continue;
        }

        let take = (segment.len() - offset).min(dst.len() - written);
        simd_copy(
            &mut dst[written..written + take],
            &segment[offset..offset + take],
        );
        written += take;
        offset = 0;
    }

    assert_eq!(written, dst.len(), "copy range exceeds view length");
}

/// The input-source variants accepted at the update boundary.
pub enum ByteSource<'a> {
    /// Caller-owned heap memory.
    Heap(&'a [u8]),

    /// Externally-owned memory. Fed in place when addressable, copied otherwise.
    Direct(&'a dyn ByteView),

    /// A view without accessible backing storage. Always copied first.
    Detached(&'a dyn ByteView),
}

impl ByteSource<'_> {
    pub fn len(&self) -> usize {
        match self {
            ByteSource::Heap(bytes) => bytes.len(),
            ByteSource::Direct(view) | ByteSource::Detached(view) => view.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
