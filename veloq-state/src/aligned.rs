//! Aligned amplitude storage for the managed state variant

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use veloq_core::Amplitude;

use crate::error::{Result, StateError};

/// Alignment of managed amplitude buffers (64 bytes, cache-line and
/// AVX-512 friendly)
const BUFFER_ALIGNMENT: usize = 64;

/// Heap buffer of amplitudes with 64-byte alignment, zero-initialised.
pub(crate) struct AlignedBuffer {
    data: NonNull<Amplitude>,
    len: usize,
    layout: Layout,
}

impl AlignedBuffer {
    pub(crate) fn zeroed(len: usize) -> Result<Self> {
        let size = len * std::mem::size_of::<Amplitude>();
        let layout = Layout::from_size_align(size, BUFFER_ALIGNMENT)
            .map_err(|_| StateError::AllocationError { size })?;

        let data = unsafe {
            let ptr = alloc(layout) as *mut Amplitude;
            if ptr.is_null() {
                return Err(StateError::AllocationError { size });
            }
            std::ptr::write_bytes(ptr, 0, len);
            NonNull::new_unchecked(ptr)
        };

        Ok(Self { data, len, layout })
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Amplitude] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Amplitude] {
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        unsafe {
            dealloc(self.data.as_ptr() as *mut u8, self.layout);
        }
    }
}

// Safety: AlignedBuffer owns its allocation exclusively.
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_buffer_is_aligned_and_zero() {
        let buffer = AlignedBuffer::zeroed(16).unwrap();
        assert_eq!(buffer.as_slice().as_ptr() as usize % BUFFER_ALIGNMENT, 0);
        assert!(buffer.as_slice().iter().all(|a| a.re == 0.0 && a.im == 0.0));
    }
}
