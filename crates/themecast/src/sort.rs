//! Numeric ordering for scale keys.
//!
//! Spacing and radius scales are keyed by numbers with two sentinels:
//! `none` sorts below every finite value and `full` above. Non-numeric keys
//! share the top end with `full`; ties break lexicographically on the
//! original key, so the order is total and deterministic.

use std::cmp::Ordering;

/// Rank of one scale key on the numeric axis.
fn scale_rank(key: &str) -> f64 {
    match key {
        "none" => f64::NEG_INFINITY,
        "full" => f64::INFINITY,
        _ => key.parse::<f64>().unwrap_or(f64::INFINITY),
    }
}

/// Compares two scale keys: numeric first, lexicographic on ties.
pub fn compare_scale_keys(a: &str, b: &str) -> Ordering {
    scale_rank(a).total_cmp(&scale_rank(b)).then_with(|| a.cmp(b))
}

/// Returns the keys sorted into scale order.
pub fn sorted_scale<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<&str> = keys.into_iter().collect();
    keys.sort_by(|a, b| compare_scale_keys(a, b));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numeric_keys_sort_ascending() {
        let keys = sorted_scale(vec!["16", "2", "48", "8", "32"]);
        assert_eq!(keys, vec!["2", "8", "16", "32", "48"]);
    }

    #[test]
    fn test_none_sorts_first_full_sorts_last() {
        let keys = sorted_scale(vec!["full", "4", "none", "0.5"]);
        assert_eq!(keys, vec!["none", "0.5", "4", "full"]);
    }

    #[test]
    fn test_non_numeric_keys_sort_after_numbers() {
        let keys = sorted_scale(vec!["lg", "4", "sm", "2"]);
        assert_eq!(keys, vec!["2", "4", "lg", "sm"]);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let keys = sorted_scale(vec!["04", "4"]);
        assert_eq!(keys, vec!["04", "4"]);
    }

    proptest! {
        #[test]
        fn prop_none_is_below_any_positive_number(n in 0.001f64..1e6) {
            let value = n.to_string();
            prop_assert_eq!(compare_scale_keys("none", &value), Ordering::Less);
        }

        #[test]
        fn prop_full_is_above_any_finite_number(n in -1e6f64..1e6) {
            let value = n.to_string();
            prop_assert_eq!(compare_scale_keys("full", &value), Ordering::Greater);
        }

        #[test]
        fn prop_sort_is_total_and_stable(mut keys in proptest::collection::vec("[a-z0-9.]{1,6}", 0..12)) {
            let sorted: Vec<String> = sorted_scale(keys.iter().map(String::as_str))
                .into_iter()
                .map(str::to_string)
                .collect();
            keys.sort_by(|a, b| compare_scale_keys(a, b));
            prop_assert_eq!(sorted, keys);
        }
    }
}
