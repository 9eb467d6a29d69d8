//! Binary morphology tests.
//!
//! Fixed examples for the tail-window rule plus property checks that hold
//! for any signal and element.

use drill_kit::morphology::{denoise, expand, shrink};
use proptest::prelude::*;

/// The final window is compared against the element's prefix.
#[test]
fn test_shrink_tail_window() {
    assert_eq!(shrink(&[1, 1, 0, 1], &[1, 1]), vec![1, 0, 0, 1]);
    assert_eq!(shrink(&[1, 1, 0, 0], &[1, 1]), vec![1, 0, 0, 0]);
}

/// Expand sets a bit wherever any aligned position agrees.
#[test]
fn test_expand_examples() {
    assert_eq!(expand(&[0, 0, 1, 0], &[1, 1]), vec![0, 1, 1, 0]);
    assert_eq!(expand(&[0, 0, 1, 1], &[1, 1]), vec![0, 1, 1, 1]);
}

/// Denoising a clean run keeps its start and drops a lone spike.
#[test]
fn test_denoise_example() {
    let signal = [1, 0, 0, 0, 1, 1, 1, 1, 0, 0];
    let element = [1, 1, 1];

    let shrunk = shrink(&signal, &element);
    assert_eq!(shrunk, vec![0, 0, 0, 0, 1, 1, 0, 0, 0, 0]);
    assert_eq!(denoise(&signal, &element), expand(&shrunk, &element));
}

fn bits(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=1, 0..max_len)
}

proptest! {
    #[test]
    fn prop_denoise_is_shrink_then_expand(signal in bits(32), element in bits(6)) {
        prop_assert_eq!(
            denoise(&signal, &element),
            expand(&shrink(&signal, &element), &element)
        );
    }

    #[test]
    fn prop_output_length_matches_input(signal in bits(32), element in bits(6)) {
        prop_assert_eq!(shrink(&signal, &element).len(), signal.len());
        prop_assert_eq!(expand(&signal, &element).len(), signal.len());
        prop_assert_eq!(denoise(&signal, &element).len(), signal.len());
    }

    #[test]
    fn prop_outputs_are_binary(signal in bits(32), element in bits(6)) {
        prop_assert!(shrink(&signal, &element).iter().all(|&b| b <= 1));
        prop_assert!(expand(&signal, &element).iter().all(|&b| b <= 1));
    }

    #[test]
    fn prop_shrink_implies_expand(
        signal in bits(32),
        element in bits(6).prop_filter("non-empty", |e| !e.is_empty()),
    ) {
        let shrunk = shrink(&signal, &element);
        let expanded = expand(&signal, &element);
        for (s, e) in shrunk.iter().zip(&expanded) {
            prop_assert!(*s <= *e);
        }
    }
}
