// Pattern: Scoped word allocation
// `reserve_words` hands out an owned block of 32-bit words. The block is
// released exactly once, either by `free_words` or when it goes out of scope.

use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::error::{ExerciseError, Result};

/// Owned, zero-initialised block of `i32` words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBuffer {
    words: Vec<i32>,
}

impl WordBuffer {
    /// Number of words in the block.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the block in bytes.
    pub fn byte_len(&self) -> usize {
        self.words.len() * mem::size_of::<i32>()
    }

    pub fn as_words(&self) -> &[i32] {
        &self.words
    }

    pub fn as_words_mut(&mut self) -> &mut [i32] {
        &mut self.words
    }

    /// View the block as raw bytes (native byte order).
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: every bit pattern of an i32 is a valid sequence of u8, the
        // length covers exactly the initialised words and u8 has alignment 1.
        unsafe { slice::from_raw_parts(self.words.as_ptr() as *const u8, self.byte_len()) }
    }

    /// Mutable byte view used by the byte-level routines in `memory`.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.byte_len();
        // Safety: as for `as_bytes`; any byte pattern written back is a valid i32.
        unsafe { slice::from_raw_parts_mut(self.words.as_mut_ptr() as *mut u8, len) }
    }
}

impl Deref for WordBuffer {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl DerefMut for WordBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.words
    }
}

/// Reserve a zero-filled block of `count` words.
///
/// Allocation failure is reported as `ExerciseError::AllocationFailed`
/// instead of aborting. A zero-word request succeeds with an empty block.
pub fn reserve_words(count: usize) -> Result<WordBuffer> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(count)
        .map_err(|_| ExerciseError::AllocationFailed { words: count })?;
    words.resize(count, 0);

    tracing::debug!(words = count, "reserved word buffer");
    Ok(WordBuffer { words })
}

/// Release a block obtained from `reserve_words`.
///
/// Takes the buffer by value, so it cannot be used or released again.
pub fn free_words(buffer: WordBuffer) {
    tracing::debug!(words = buffer.len(), "released word buffer");
    drop(buffer);
}
