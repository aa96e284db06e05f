/// Mock step count for a zero entry at `index`
fn mock_step_count(index: usize) -> i64 {
    (index as i64 + 1) * 10
}

/// Replace every zero step count with `(index + 1) * 10`
pub fn backfill_step_counts_in_place(step_count: &mut [i64]) {
    for (i, count) in step_count.iter_mut().enumerate() {
        if *count == 0 {
            *count = mock_step_count(i);
        }
    }
}

/// Backfill zero step counts, see [`backfill_step_counts_in_place`]
pub fn backfill_step_counts(mut step_count: Vec<i64>) -> Vec<i64> {
    backfill_step_counts_in_place(&mut step_count);
    step_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(backfill_step_counts(Vec::new()).is_empty());
    }

    #[test]
    fn test_zero_and_nonzero() {
        assert_eq!(backfill_step_counts(vec![0, 5]), vec![10, 5]);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(backfill_step_counts(vec![0, 0, 0, 0]), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_negative_values_pass_through() {
        assert_eq!(backfill_step_counts(vec![-1, 0, -7]), vec![-1, 20, -7]);
    }

    #[test]
    fn test_every_index() {
        let input: Vec<i64> = (0..50).map(|i| if i % 3 == 0 { 0 } else { i * 7 }).collect();
        let output = backfill_step_counts(input.clone());

        assert_eq!(output.len(), input.len());
        for (i, (before, after)) in input.iter().zip(&output).enumerate() {
            if *before == 0 {
                assert_eq!(*after, (i as i64 + 1) * 10);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let once = backfill_step_counts(vec![0, 3, 0]);
        let twice = backfill_step_counts(once.clone());
        assert_eq!(once, twice);
    }
}
