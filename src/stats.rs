// Pattern: Array statistics over unsigned bytes
// All statistics are rounded down to the nearest integer.

use crate::error::{ExerciseError, Result};

/// The 40-sample data set used by the statistics exercise.
pub const SAMPLE_DATA: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, //
    114, 88, 45, 76, 123, 87, 25, 23, //
    200, 122, 150, 90, 92, 87, 177, 244, //
    201, 6, 12, 60, 8, 2, 5, 67, //
    7, 87, 250, 230, 99, 3, 100, 90,
];

// ============================================================================
// Milestone 1: Descending bubble sort
// ============================================================================

/// Sort `data` from largest to smallest with a bubble sort.
///
/// Each pass bubbles the smallest remaining value to the end, so the inner
/// loop shrinks by one per pass. Equal values keep their relative order.
pub fn sort_descending(data: &mut [u8]) {
    let size = data.len();
    if size < 2 {
        return;
    }

    for pass in 0..size - 1 {
        for j in 0..size - pass - 1 {
            if data[j] < data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

// ============================================================================
// Milestone 2: Single-pass statistics
// ============================================================================

/// Largest element.
pub fn maximum(data: &[u8]) -> Result<u8> {
    let (&first, rest) = data.split_first().ok_or(ExerciseError::EmptyInput)?;
    let mut max = first;
    for &value in rest {
        if value > max {
            max = value;
        }
    }
    Ok(max)
}

/// Smallest element.
pub fn minimum(data: &[u8]) -> Result<u8> {
    let (&first, rest) = data.split_first().ok_or(ExerciseError::EmptyInput)?;
    let mut min = first;
    for &value in rest {
        if value < min {
            min = value;
        }
    }
    Ok(min)
}

/// Arithmetic mean, truncated toward zero.
pub fn mean(data: &[u8]) -> Result<u8> {
    if data.is_empty() {
        return Err(ExerciseError::EmptyInput);
    }

    let sum: u64 = data.iter().map(|&v| u64::from(v)).sum();
    // The mean of u8 samples never exceeds u8::MAX, so the narrowing is exact.
    Ok((sum / data.len() as u64) as u8)
}

/// Median as the element at `len / 2` of the descending order.
///
/// Sorts `data` in place. For even lengths this is the lower of the two middle
/// values; the two are not averaged.
pub fn median(data: &mut [u8]) -> Result<u8> {
    if data.is_empty() {
        return Err(ExerciseError::EmptyInput);
    }

    sort_descending(data);
    tracing::trace!(len = data.len(), "sorted buffer for median");
    Ok(data[data.len() / 2])
}

// ============================================================================
// Milestone 3: Combined result
// ============================================================================

/// Maximum, minimum, mean and median of one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub maximum: u8,
    pub minimum: u8,
    pub mean: u8,
    pub median: u8,
}

impl Statistics {
    /// Compute all four values. Leaves `data` sorted in descending order.
    pub fn compute(data: &mut [u8]) -> Result<Self> {
        let maximum = maximum(data)?;
        let minimum = minimum(data)?;
        let mean = mean(data)?;
        let median = median(data)?;

        Ok(Statistics {
            maximum,
            minimum,
            mean,
            median,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_data_statistics() {
        let mut data = SAMPLE_DATA;
        sort_descending(&mut data);

        assert_eq!(maximum(&data).unwrap(), 250);
        assert_eq!(minimum(&data).unwrap(), 2);
        assert_eq!(mean(&data).unwrap(), 93);
        assert_eq!(median(&mut data).unwrap(), data[20]);
        assert_eq!(data[20], 87);
    }

    #[test]
    fn test_sample_data_sorted_order() {
        let mut data = SAMPLE_DATA;
        sort_descending(&mut data);
        assert_eq!(&data[..6], &[250, 244, 230, 201, 201, 200]);
        assert_eq!(&data[34..], &[6, 6, 5, 3, 2, 2]);
    }

    #[test]
    fn test_compute_sorts_buffer() {
        let mut data = [3u8, 9, 1, 7];
        let stats = Statistics::compute(&mut data).unwrap();

        assert_eq!(
            stats,
            Statistics {
                maximum: 9,
                minimum: 1,
                mean: 5,
                median: 3,
            }
        );
        assert_eq!(data, [9, 7, 3, 1]);
    }

    #[test]
    fn test_even_length_median_is_not_averaged() {
        let mut data = [10u8, 20];
        // Descending order [20, 10], index 1
        assert_eq!(median(&mut data).unwrap(), 10);
    }

    #[test]
    fn test_mean_truncates() {
        assert_eq!(mean(&[1, 2]).unwrap(), 1);
        assert_eq!(mean(&[255, 255, 254]).unwrap(), 254);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(maximum(&[]), Err(ExerciseError::EmptyInput)));
        assert!(matches!(minimum(&[]), Err(ExerciseError::EmptyInput)));
        assert!(matches!(mean(&[]), Err(ExerciseError::EmptyInput)));
        assert!(matches!(median(&mut [0u8; 0]), Err(ExerciseError::EmptyInput)));
        assert!(Statistics::compute(&mut [0u8; 0]).is_err());
    }

    #[test]
    fn test_sort_handles_tiny_buffers() {
        let mut empty: [u8; 0] = [];
        sort_descending(&mut empty);

        let mut one = [5u8];
        sort_descending(&mut one);
        assert_eq!(one, [5]);
    }

    proptest! {
        #[test]
        fn prop_extremes_bound_every_element(data in prop::collection::vec(any::<u8>(), 1..100)) {
            let max = maximum(&data).unwrap();
            let min = minimum(&data).unwrap();
            for &value in &data {
                prop_assert!(max >= value);
                prop_assert!(min <= value);
            }
        }

        #[test]
        fn prop_mean_is_floor_of_exact_mean(data in prop::collection::vec(any::<u8>(), 1..100)) {
            let sum: u64 = data.iter().map(|&v| v as u64).sum();
            prop_assert_eq!(mean(&data).unwrap() as u64, sum / data.len() as u64);
        }

        #[test]
        fn prop_sort_matches_std_and_is_idempotent(mut data in prop::collection::vec(any::<u8>(), 0..100)) {
            let mut expected = data.clone();
            expected.sort_by(|a, b| b.cmp(a));

            sort_descending(&mut data);
            prop_assert_eq!(&data, &expected);

            sort_descending(&mut data);
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn prop_median_is_middle_of_descending_order(mut data in prop::collection::vec(any::<u8>(), 1..100)) {
            let mut sorted = data.clone();
            sort_descending(&mut sorted);
            prop_assert_eq!(median(&mut data).unwrap(), sorted[sorted.len() / 2]);
        }
    }
}
