/// Coordinate-wise median used for control center placement.
///
/// Sorts its own copy of `values`. Odd lengths return the middle element; even lengths
/// return the lower of the two middle elements, never an average, so the result is
/// always one of the inputs. Returns `None` for an empty slice.
pub fn find_median(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    if n % 2 == 0 {
        Some(sorted[n / 2 - 1]) // Lower median
    } else {
        Some(sorted[n / 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn odd_length_takes_middle() {
        assert_eq!(find_median(&[10, 0, 5]), Some(5));
        assert_eq!(find_median(&[42]), Some(42));
    }

    #[test]
    fn even_length_takes_lower_middle() {
        assert_eq!(find_median(&[0, 10]), Some(0));
        assert_eq!(find_median(&[4, 1, 3, 2]), Some(2));
        assert_eq!(find_median(&[-5, -5, 9, 9]), Some(-5));
    }

    #[test]
    fn empty_input_has_no_median() {
        assert_eq!(find_median(&[]), None);
    }

    #[test]
    fn input_order_is_irrelevant_and_untouched() {
        let values = vec![9, -3, 7, 7, 0, 12];
        let mut reversed = values.clone();
        reversed.reverse();

        assert_eq!(find_median(&values), find_median(&reversed));
        assert_eq!(values, vec![9, -3, 7, 7, 0, 12]);
    }

    #[test]
    fn median_minimises_sum_of_absolute_deviations() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..200 {
            let len = rng.gen_range(1..40);
            let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect();
            let median = find_median(&values).unwrap();

            assert!(values.contains(&median));

            let deviation = |c: i32| -> i64 {
                values.iter().map(|&v| (i64::from(v) - i64::from(c)).abs()).sum()
            };
            let best = values.iter().map(|&c| deviation(c)).min().unwrap();
            assert_eq!(deviation(median), best);
        }
    }
}
