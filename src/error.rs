// Error type shared by every exercise module.

use thiserror::Error;

/// Errors reported by the buffer, statistics and conversion routines.
///
/// Out-of-range indices and lengths are reported here instead of being left
/// to the caller, so no operation in this crate can touch memory outside the
/// slice it was given.
#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("index {index} is out of bounds for a buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range starting at {offset} with length {length} does not fit in a buffer of length {len}")]
    RangeOutOfBounds {
        offset: usize,
        length: usize,
        len: usize,
    },

    #[error("operation requires at least one element")]
    EmptyInput,

    #[error("base {0} is not supported (expected 2..=16)")]
    InvalidBase(u32),

    #[error("destination holds {available} bytes but {needed} are required")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("failed to reserve {words} words")]
    AllocationFailed { words: usize },

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExerciseError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;

/// Checks that `[offset, offset + length)` lies inside a buffer of `len` bytes.
pub(crate) fn check_range(offset: usize, length: usize, len: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        _ => Err(ExerciseError::RangeOutOfBounds {
            offset,
            length,
            len,
        }),
    }
}
