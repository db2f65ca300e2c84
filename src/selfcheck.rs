// Course self-check suite.
// Each check carves a 32-byte working set out of an 8-word buffer, runs one
// routine from `memory` or `data` over it and compares against the expected
// bytes.

use std::fmt;

use crate::data::{from_ascii, to_ascii, MAX_ASCII_LEN};
use crate::error::Result;
use crate::memory::{copy_within, fill, move_within, reverse, zero};
use crate::words::{free_words, reserve_words, WordBuffer};

/// Bytes in the working set shared by the memory checks.
pub const MEM_SET_SIZE_B: usize = 32;
/// Words reserved to back the working set.
pub const MEM_SET_SIZE_W: usize = MEM_SET_SIZE_B / 4;

const REVERSE_INPUT: &[u8; MEM_SET_SIZE_B] = b"?esreveR eht ni stib eht lla teG";
const REVERSE_EXPECTED: &[u8; MEM_SET_SIZE_B] = b"Get all the bits in the Reverse?";

/// Result of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn new(name: &'static str, passed: bool, detail: impl Into<String>) -> Self {
        CheckOutcome {
            name,
            passed,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{:<10} {} ({})", self.name, status, self.detail)
    }
}

/// Pass count over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[CheckOutcome]) -> Self {
        Summary {
            passed: outcomes.iter().filter(|o| o.passed).count(),
            total: outcomes.len(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

type Check = fn() -> Result<CheckOutcome>;

const CHECKS: [Check; 8] = [
    check_data1,
    check_data2,
    check_memmove1,
    check_memmove2,
    check_memmove3,
    check_memcopy,
    check_memset,
    check_reverse,
];

// ============================================================================
// Conversion checks
// ============================================================================

fn round_trip(name: &'static str, value: i32, base: u32) -> Result<CheckOutcome> {
    let mut text = [0u8; MAX_ASCII_LEN];
    let digits = to_ascii(value, &mut text, base)?;
    let parsed = from_ascii(&text, digits, base)?;

    let rendered = String::from_utf8_lossy(&text[..digits - 1]).into_owned();
    Ok(CheckOutcome::new(
        name,
        parsed == value,
        format!("{} -> \"{}\" -> {}", value, rendered, parsed),
    ))
}

fn check_data1() -> Result<CheckOutcome> {
    round_trip("data1", -4096, 16)
}

fn check_data2() -> Result<CheckOutcome> {
    round_trip("data2", 123456, 10)
}

// ============================================================================
// Memory checks
// ============================================================================

/// Reserve the working set and fill it with 0, 1, 2, ...
fn ramp_set() -> Result<WordBuffer> {
    let mut set = reserve_words(MEM_SET_SIZE_W)?;
    for (i, byte) in set.as_bytes_mut().iter_mut().enumerate() {
        *byte = i as u8;
    }
    Ok(set)
}

/// Compare `actual` with `expected`, reporting the first mismatch.
fn compare(name: &'static str, actual: &[u8], expected: &[u8]) -> CheckOutcome {
    match actual.iter().zip(expected).position(|(a, e)| a != e) {
        None if actual.len() == expected.len() => {
            CheckOutcome::new(name, true, format!("{} bytes match", expected.len()))
        }
        None => CheckOutcome::new(
            name,
            false,
            format!("length {} != {}", actual.len(), expected.len()),
        ),
        Some(i) => CheckOutcome::new(
            name,
            false,
            format!("byte {}: got {}, expected {}", i, actual[i], expected[i]),
        ),
    }
}

fn moved_ramp(name: &'static str, src: usize, dst: usize) -> Result<CheckOutcome> {
    let mut set = ramp_set()?;
    move_within(set.as_bytes_mut(), src, dst, 16)?;

    let start = src as u8;
    let expected: Vec<u8> = (start..start + 16).collect();
    let outcome = compare(name, &set.as_bytes()[dst..dst + 16], &expected);
    free_words(set);
    Ok(outcome)
}

fn check_memmove1() -> Result<CheckOutcome> {
    moved_ramp("memmove1", 0, 16)
}

fn check_memmove2() -> Result<CheckOutcome> {
    moved_ramp("memmove2", 0, 8)
}

fn check_memmove3() -> Result<CheckOutcome> {
    moved_ramp("memmove3", 8, 0)
}

fn check_memcopy() -> Result<CheckOutcome> {
    let mut set = ramp_set()?;
    copy_within(set.as_bytes_mut(), 0, 16, 16)?;

    let expected: Vec<u8> = (0..16).collect();
    let outcome = compare("memcopy", &set.as_bytes()[16..], &expected);
    free_words(set);
    Ok(outcome)
}

fn check_memset() -> Result<CheckOutcome> {
    let mut set = ramp_set()?;
    {
        let bytes = set.as_bytes_mut();
        fill(bytes, 16, 0xFF)?;
        zero(&mut bytes[16..], 16)?;
    }

    let mut expected = [0u8; MEM_SET_SIZE_B];
    expected[..16].fill(0xFF);
    let outcome = compare("memset", set.as_bytes(), &expected);
    free_words(set);
    Ok(outcome)
}

fn check_reverse() -> Result<CheckOutcome> {
    let mut set = reserve_words(MEM_SET_SIZE_W)?;
    set.as_bytes_mut().copy_from_slice(REVERSE_INPUT);
    reverse(set.as_bytes_mut(), MEM_SET_SIZE_B)?;

    let outcome = compare("reverse", set.as_bytes(), REVERSE_EXPECTED);
    free_words(set);
    Ok(outcome)
}

// ============================================================================
// Runner
// ============================================================================

/// Run every check in course order.
pub fn run_all() -> Result<Vec<CheckOutcome>> {
    CHECKS
        .iter()
        .map(|check| {
            let outcome = check()?;
            tracing::debug!(name = outcome.name, passed = outcome.passed, "check finished");
            Ok(outcome)
        })
        .collect()
}
