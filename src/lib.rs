//! # Embedded Exercises
//!
//! Byte-buffer exercises from an introductory embedded-systems course:
//!
//! 1. **Buffer primitives** - set, clear and read single bytes or prefixes (`memory`)
//! 2. **Copy family** - overlap-safe move, forward copy, fill, zero and reverse (`memory`)
//! 3. **Word allocation** - an owned block of 32-bit words released exactly once (`words`)
//! 4. **Statistics** - descending bubble sort, maximum, minimum, mean and median (`stats`)
//! 5. **Conversions** - signed integers to and from ASCII in bases 2 through 16 (`data`)
//!
//! Indices and lengths are checked against the slice they address; anything
//! that does not fit comes back as an [`ExerciseError`].
//!
//! ## Running the demos
//!
//! ```bash
//! # Statistics over the 40-sample data set
//! cargo run --bin complete_01_stats
//! cargo run --bin complete_01_stats -- exercises.toml
//!
//! # Course self-check suite
//! cargo run --bin complete_04_course1
//! ```
//!
//! ## Example
//!
//! ```
//! use embedded_exercises::data::{from_ascii, to_ascii};
//!
//! let mut text = [0u8; 8];
//! let len = to_ascii(-255, &mut text, 16).unwrap();
//! assert_eq!(&text[..len], b"-FF\0");
//! assert_eq!(from_ascii(&text, len, 16).unwrap(), -255);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod memory;
pub mod report;
pub mod selfcheck;
pub mod stats;
pub mod words;

pub use config::ExerciseConfig;
pub use error::{ExerciseError, Result};
pub use report::Reporter;
pub use stats::Statistics;
pub use words::{free_words, reserve_words, WordBuffer};
