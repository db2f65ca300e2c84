// Byte buffer primitives and the copy family.
// Every routine works on a caller-owned slice; indices and ranges are checked
// against the slice length and reported as `ExerciseError` when they do not fit.

use crate::error::{check_range, ExerciseError, Result};

// ============================================================================
// Milestone 1: Single-byte access
// ============================================================================

/// Write `value` at `index`.
pub fn set_value(buf: &mut [u8], index: usize, value: u8) -> Result<()> {
    let len = buf.len();
    let slot = buf
        .get_mut(index)
        .ok_or(ExerciseError::IndexOutOfBounds { index, len })?;
    *slot = value;
    Ok(())
}

/// Set the byte at `index` to zero.
pub fn clear_value(buf: &mut [u8], index: usize) -> Result<()> {
    set_value(buf, index, 0)
}

/// Read the byte at `index`.
pub fn get_value(buf: &[u8], index: usize) -> Result<u8> {
    buf.get(index)
        .copied()
        .ok_or(ExerciseError::IndexOutOfBounds { index, len: buf.len() })
}

/// Write `value` to every position in `[0, size)`.
pub fn set_all(buf: &mut [u8], value: u8, size: usize) -> Result<()> {
    check_range(0, size, buf.len())?;
    for index in 0..size {
        set_value(buf, index, value)?;
    }
    Ok(())
}

/// Zero every position in `[0, size)`.
pub fn clear_all(buf: &mut [u8], size: usize) -> Result<()> {
    set_all(buf, 0, size)
}

// ============================================================================
// Milestone 2: Copy and move
// ============================================================================

/// Which way `move_within` walks the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDirection {
    /// Destination starts before the source: copy low to high.
    Forward,
    /// Destination starts after the source: copy high to low.
    Backward,
    /// Source and destination are the same range.
    InPlace,
}

impl CopyDirection {
    /// Pick the walk order that never reads a byte it has already overwritten.
    pub fn for_ranges(src: usize, dst: usize) -> Self {
        if dst < src {
            CopyDirection::Forward
        } else if dst > src {
            CopyDirection::Backward
        } else {
            CopyDirection::InPlace
        }
    }
}

/// Move `length` bytes from `src` to `dst` inside `buf`, correct even when the
/// two ranges overlap.
///
/// Returns the destination range so calls can be chained.
pub fn move_within(buf: &mut [u8], src: usize, dst: usize, length: usize) -> Result<&mut [u8]> {
    check_range(src, length, buf.len())?;
    check_range(dst, length, buf.len())?;

    let direction = CopyDirection::for_ranges(src, dst);
    tracing::trace!(src, dst, length, ?direction, "move_within");

    match direction {
        CopyDirection::Forward => {
            for i in 0..length {
                buf[dst + i] = buf[src + i];
            }
        }
        CopyDirection::Backward => {
            for i in (0..length).rev() {
                buf[dst + i] = buf[src + i];
            }
        }
        CopyDirection::InPlace => {}
    }

    Ok(&mut buf[dst..dst + length])
}

/// Copy `length` bytes from `src` to `dst` inside `buf` with a single forward pass.
///
/// Only correct when the ranges do not overlap. When they do and `dst > src`,
/// bytes written early are read again later and the source pattern repeats
/// through the destination.
pub fn copy_within(buf: &mut [u8], src: usize, dst: usize, length: usize) -> Result<&mut [u8]> {
    check_range(src, length, buf.len())?;
    check_range(dst, length, buf.len())?;

    for i in 0..length {
        buf[dst + i] = buf[src + i];
    }

    Ok(&mut buf[dst..dst + length])
}

/// Copy the first `length` bytes of `src` into `dst`.
pub fn copy<'a>(src: &[u8], dst: &'a mut [u8], length: usize) -> Result<&'a mut [u8]> {
    check_range(0, length, src.len())?;
    check_range(0, length, dst.len())?;

    for (to, from) in dst[..length].iter_mut().zip(&src[..length]) {
        *to = *from;
    }

    Ok(&mut dst[..length])
}

// ============================================================================
// Milestone 3: Fill, zero and reverse
// ============================================================================

/// Set the first `length` bytes of `buf` to `value`.
pub fn fill(buf: &mut [u8], length: usize, value: u8) -> Result<&mut [u8]> {
    check_range(0, length, buf.len())?;
    let range = &mut buf[..length];
    for byte in range.iter_mut() {
        *byte = value;
    }
    Ok(range)
}

/// Zero the first `length` bytes of `buf`.
pub fn zero(buf: &mut [u8], length: usize) -> Result<&mut [u8]> {
    fill(buf, length, 0)
}

/// Reverse the order of the first `length` bytes of `buf` in place.
pub fn reverse(buf: &mut [u8], length: usize) -> Result<&mut [u8]> {
    check_range(0, length, buf.len())?;
    let range = &mut buf[..length];

    if length == 0 {
        return Ok(range);
    }

    let mut start = 0;
    let mut end = length - 1;
    while start < end {
        range.swap(start, end);
        start += 1;
        end -= 1;
    }

    Ok(range)
}

// ============================================================================
// Tests
// ============================================================================
