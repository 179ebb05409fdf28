//! Shannon entropy of a yes/no split of the candidate words.

/// Entropy in bits of learning whether the target is among `matching` of
/// `total` equally likely words.
///
/// A pattern that matches nothing carries no information and scores 0.
/// Degenerate counts (`total == 0`, `matching > total`) also score 0 instead
/// of producing NaN.
pub fn entropy(matching: usize, total: usize) -> f64 {
    if matching == 0 {
        return 0.0;
    }
    let p_match = matching as f64 / total as f64;
    let p_no_match = (total as f64 - matching as f64) / total as f64;
    let entropy = -(p_match * p_match.log2() + p_no_match * p_no_match.log2());
    if entropy.is_finite() {
        entropy
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 5, 0.0)]
    #[case(1, 10, 0.4690)]
    #[case(9, 10, 0.4690)]
    #[case(0, 10, 0.0)]
    #[case(0, 0, 0.0)]
    #[case(2, 4, 1.0)]
    fn known_values(#[case] matching: usize, #[case] total: usize, #[case] expected: f64) {
        assert!((entropy(matching, total) - expected).abs() < 0.00005);
    }

    #[test]
    fn more_matches_than_words_is_zero() {
        assert_eq!(entropy(10, 3), 0.0);
    }

    #[test]
    fn symmetric_and_zero_at_the_ends() {
        for total in 1..40 {
            assert_eq!(entropy(0, total), 0.0);
            assert_eq!(entropy(total, total), 0.0);
            for matching in 0..=total {
                let a = entropy(matching, total);
                let b = entropy(total - matching, total);
                assert!((a - b).abs() < 1e-12, "{matching}/{total}");
                assert!(a >= 0.0);
            }
        }
    }
}
