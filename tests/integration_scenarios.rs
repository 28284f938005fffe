use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use rand::{rngs::StdRng, SeedableRng};
use typo::config::WordCount;
use typo::metrics::{self, CharCounts};
use typo::session::Phase;
use typo::typing_test::TypingTest;
use typo::vocabulary::Vocabulary;
use typo::word_generator::WordGenerator;

fn finish(target: &str, typed: &str, total: Duration) -> TypingTest {
    let mut test = TypingTest::new(target.to_string(), WordCount::Ten);
    let t0 = Instant::now();
    test.update_input_at(&typed[..1], t0);
    test.update_input_at(typed, t0 + total);
    test
}

#[test]
fn identical_input_is_perfect() {
    let test = finish("the quick brown", "the quick brown", Duration::from_secs(60));
    let results = test.results().unwrap();

    assert_eq!(results.wpm, 3);
    assert_eq!(results.accuracy, 100);
    assert_eq!(results.error_count, 0);
    assert_eq!(results.total_secs, 60);
}

#[test]
fn single_substitution() {
    let test = finish("cat dog", "cbt dog", Duration::from_secs(10));
    let results = test.results().unwrap();

    assert_eq!(
        results.chars,
        CharCounts {
            correct: 6,
            incorrect: 1,
            extra: 0,
            missed: 0
        }
    );
    assert_eq!(results.accuracy, 86);
    assert_eq!(results.error_count, 1);
}

#[test]
fn extra_characters_lower_accuracy() {
    // completion triggers on length, so extra characters arrive in one update
    let test = finish("cat", "cats!", Duration::from_secs(5));
    let results = test.results().unwrap();

    assert_eq!(results.chars.extra, 2);
    assert_eq!(results.chars.correct, 3);
    assert_eq!(results.accuracy, 60);
    assert_eq!(results.error_count, 2);
}

#[test]
fn short_input_counts_missed_positions() {
    for (target, input) in [("hello world", "hello"), ("abc", "xb"), ("typing test", "t")] {
        let counts = metrics::classify(target, input);
        let target_len = target.chars().count();
        let input_len = input.chars().count();

        assert_eq!(counts.missed, target_len - input_len);
        assert_eq!(counts.correct + counts.incorrect, input_len);
        assert_eq!(counts.extra, 0);
    }
}

#[test]
fn consistency_defaults_to_hundred() {
    assert_eq!(metrics::consistency(&[]), 100);
    assert_eq!(metrics::consistency(&[73]), 100);
}

#[test]
fn raw_wpm_counts_wrong_words() {
    let test = finish("aa bb cc dd", "ax bx cx dx", Duration::from_secs(60));
    let results = test.results().unwrap();

    assert_eq!(results.wpm, 4);
    assert_eq!(results.raw_wpm, 4);
    assert_eq!(results.accuracy, 64);
}

#[test]
fn restart_resets_state_with_new_prompt() {
    let vocabulary = Vocabulary::english().unwrap();
    let mut generator = WordGenerator::with_rng(vocabulary.clone(), StdRng::seed_from_u64(3));
    let mut test = TypingTest::new(generator.generate_prompt(WordCount::Ten), WordCount::Ten);

    let target = test.target.clone();
    let t0 = Instant::now();
    test.update_input_at(&target[..1], t0);
    test.on_tick_at(t0 + Duration::from_secs(2));
    test.update_input_at(&target, t0 + Duration::from_secs(3));
    assert_matches!(test.phase(), Phase::Finished);

    test.restart(generator.generate_prompt(WordCount::Fifty));

    assert_eq!(test.phase(), Phase::Idle);
    assert!(test.wpm_history().is_empty());
    assert!(test.session_state.word_times.is_empty());
    assert!(test.results().is_none());

    let words: Vec<&str> = test.target.split(' ').collect();
    assert_eq!(words.len(), 50);
    assert!(words.iter().all(|w| vocabulary.contains(w)));
}
