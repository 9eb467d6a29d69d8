//! Longest palindromic substrings of a number.
//!
//! The search runs in two phases: collect every palindromic substring,
//! then keep only the longest ones. Leading zeros are stripped from the
//! input and again from every collected palindrome, so a substring like
//! `"020"` is reported as `"20"`.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

/// True if `number` reads the same in both directions.
#[must_use]
pub fn is_palindrome(number: &str) -> bool {
    number.bytes().eq(number.bytes().rev())
}

/// Longest palindromic numbers contained in `number`.
///
/// Returns every palindrome of the maximum length. An input that is empty
/// or all zeros yields an empty set.
///
/// ```
/// use drill_kit::palindrome::longest_palindromic_numbers;
///
/// let found = longest_palindromic_numbers("123321456");
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["123321"]);
/// ```
#[must_use]
pub fn longest_palindromic_numbers(number: &str) -> BTreeSet<String> {
    let digits = number.trim_start_matches('0');
    let len = digits.len();

    let mut found: FxHashSet<&str> = FxHashSet::default();
    for start in 0..len {
        for end in start + 1..=len {
            let Some(candidate) = digits.get(start..end) else {
                continue;
            };
            if is_palindrome(candidate) {
                found.insert(candidate);
            }
        }
    }
    log::trace!("{} palindromic substrings in {:?}", found.len(), digits);

    let normalized: FxHashSet<&str> = found
        .into_iter()
        .map(|p| p.trim_start_matches('0'))
        .collect();

    let Some(max_len) = normalized.iter().map(|p| p.len()).max() else {
        return BTreeSet::new();
    };

    normalized
        .into_iter()
        .filter(|p| p.len() == max_len)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("1"));
        assert!(is_palindrome("1221"));
        assert!(is_palindrome("12321"));
        assert!(!is_palindrome("12"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(longest_palindromic_numbers("2332"), set(&["2332"]));
        assert_eq!(longest_palindromic_numbers("12321"), set(&["12321"]));
        assert_eq!(longest_palindromic_numbers("1221"), set(&["1221"]));
    }

    #[test]
    fn test_ties_are_all_returned() {
        assert_eq!(longest_palindromic_numbers("121343"), set(&["121", "343"]));
        assert_eq!(longest_palindromic_numbers("123"), set(&["1", "2", "3"]));
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(longest_palindromic_numbers("00121"), set(&["121"]));
    }

    #[test]
    fn test_inner_zeros_restripped() {
        // "020" is caught as a palindrome and then reported as "20"
        assert_eq!(longest_palindromic_numbers("1020"), set(&["20"]));
        // "1001" still wins outright
        assert_eq!(longest_palindromic_numbers("1001"), set(&["1001"]));
    }

    #[test]
    fn test_empty_and_zero_inputs() {
        assert!(longest_palindromic_numbers("").is_empty());
        assert!(longest_palindromic_numbers("000").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(longest_palindromic_numbers("1111"), set(&["1111"]));
        assert_eq!(longest_palindromic_numbers("1212"), set(&["121", "212"]));
    }
}
