use rstest::rstest;
use wordle_solver::{Feedback, FeedbackPattern, ParseFeedbackError, Word};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn score(guess: &str, target: &str) -> FeedbackPattern {
    FeedbackPattern::score(&word(guess), &word(target)).unwrap()
}

#[test]
fn test_all_match() {
    let pattern = score("crane", "crane");
    assert!(pattern.is_solved());
    assert_eq!(pattern, FeedbackPattern::all_match(5));
}

#[test]
fn test_all_absent() {
    let pattern = score("quick", "dream");
    assert_eq!(pattern, FeedbackPattern::new(vec![Feedback::Absent; 5]));
    assert!(!pattern.is_solved());
}

#[rstest]
#[case::mixed("crane", "charm", "GYG--")]
#[case::duplicate_letters_in_guess("speed", "creep", "-YGG-")]
#[case::duplicate_letters_in_target("arose", "creep", "-G--Y")]
#[case::duplicate_guess_limited_target("geese", "creep", "-YG--")]
#[case::leftmost_copy_credited("sores", "those", "YY-Y-")]
#[case::only_one_copy_in_target("cca", "abc", "Y-Y")]
fn test_scoring(#[case] guess: &str, #[case] target: &str, #[case] expected: &str) {
    assert_eq!(score(guess, target).to_string(), expected);
}

#[test]
fn test_score_length_mismatch() {
    assert!(FeedbackPattern::score(&word("crane"), &word("cran")).is_err());
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("GY---", 5).unwrap();
    assert_eq!(
        &pattern[..],
        &[
            Feedback::Match,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );

    let lowercase = FeedbackPattern::parse("gy---", 5).unwrap();
    assert_eq!(pattern, lowercase);
}

#[test]
fn test_pattern_parse_invalid() {
    assert_eq!(
        FeedbackPattern::parse("GY---G", 5),
        Err(ParseFeedbackError::WrongLength {
            expected: 5,
            found: 6
        })
    );
    assert_eq!(
        FeedbackPattern::parse("GY--", 5),
        Err(ParseFeedbackError::WrongLength {
            expected: 5,
            found: 4
        })
    );
    assert_eq!(
        FeedbackPattern::parse("GYb--", 5),
        Err(ParseFeedbackError::InvalidSymbol('b'))
    );
}

#[test]
fn test_display_round_trips_through_parse() {
    let pattern = score("crane", "charm");
    assert_eq!(FeedbackPattern::parse(&pattern.to_string(), 5).unwrap(), pattern);
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new(vec![
        Feedback::Match,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Match,
    ]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
}
