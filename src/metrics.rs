//! Statistics derived from a typing session.
//!
//! Everything here is a pure function of the target text, the typed buffer,
//! the session timing and the sampled wpm history.

use std::time::Duration;

/// Outcome of comparing one position of the typed buffer against the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Correct,
    Incorrect,
    Extra,
    Missed,
}

/// How a single target character should be drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderClass {
    Space,
    Correct,
    Incorrect,
    Current,
    Pending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub extra: usize,
    pub missed: usize,
}

impl CharCounts {
    pub fn record(&mut self, class: CharClass) {
        match class {
            CharClass::Correct => self.correct += 1,
            CharClass::Incorrect => self.incorrect += 1,
            CharClass::Extra => self.extra += 1,
            CharClass::Missed => self.missed += 1,
        }
    }

    pub fn errors(&self) -> usize {
        self.incorrect + self.extra + self.missed
    }

    /// Characters the user actually produced
    pub fn typed(&self) -> usize {
        self.correct + self.incorrect + self.extra
    }

    /// Rounded percentage of typed characters that were correct, 100 if nothing was typed
    pub fn accuracy(&self) -> u32 {
        match self.typed() {
            0 => 100,
            typed => ((self.correct as f64 / typed as f64) * 100.0).round() as u32,
        }
    }
}

/// Final statistics of a finished test
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestResults {
    pub wpm: u32,
    pub raw_wpm: u32,
    pub accuracy: u32,
    /// 100 minus the rounded deviation of the wpm samples, may go below zero
    pub consistency: i32,
    pub chars: CharCounts,
    pub error_count: usize,
    pub elapsed: Duration,
    pub total_secs: u64,
    /// Elapsed time at each word boundary, the last entry being the end of the test
    pub word_times: Vec<Duration>,
    pub word_wpm: Vec<u32>,
}

pub fn classify_position(target: &[char], input: &[char], idx: usize) -> CharClass {
    match (target.get(idx), input.get(idx)) {
        (_, None) => CharClass::Missed,
        (None, Some(_)) => CharClass::Extra,
        (Some(expected), Some(actual)) if expected == actual => CharClass::Correct,
        _ => CharClass::Incorrect,
    }
}

pub fn classify(target: &str, input: &str) -> CharCounts {
    let target: Vec<char> = target.chars().collect();
    let input: Vec<char> = input.chars().collect();

    (0..target.len().max(input.len())).fold(CharCounts::default(), |mut counts, idx| {
        counts.record(classify_position(&target, &input, idx));
        counts
    })
}

pub fn render_classes(target: &str, input: &str, finished: bool) -> Vec<RenderClass> {
    let input: Vec<char> = input.chars().collect();

    target
        .chars()
        .enumerate()
        .map(|(idx, expected)| match input.get(idx) {
            _ if expected == ' ' => RenderClass::Space,
            Some(&actual) if actual == expected => RenderClass::Correct,
            Some(_) => RenderClass::Incorrect,
            None if idx == input.len() && !finished => RenderClass::Current,
            None => RenderClass::Pending,
        })
        .collect()
}

/// Number of whitespace separated, non-empty tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Tokens counted for raw wpm. Splitting trimmed input always yields at least
/// one token, so blank input still counts as one.
pub fn typed_token_count(input: &str) -> usize {
    word_count(input).max(1)
}

/// Rounded words per minute. A zero elapsed time reports 0.
pub fn words_per_minute(words: usize, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes > 0.0 {
        (words as f64 / minutes).round() as u32
    } else {
        0
    }
}

/// The word boundaries plus the end of the test, unless it was already captured
pub fn boundaries_with_end(word_times: &[Duration], elapsed: Duration) -> Vec<Duration> {
    let mut times = word_times.to_vec();
    if times.last() != Some(&elapsed) {
        times.push(elapsed);
    }
    times
}

/// Cumulative speed at each word boundary: the i-th boundary counts i + 1 words
pub fn per_word_wpm(boundaries: &[Duration]) -> Vec<u32> {
    boundaries
        .iter()
        .enumerate()
        .map(|(idx, t)| words_per_minute(idx + 1, *t))
        .collect()
}

pub fn mean(samples: &[u32]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation
pub fn std_dev(samples: &[u32]) -> Option<f64> {
    let mean = mean(samples)?;
    let variance = samples
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / samples.len() as f64;

    Some(variance.sqrt())
}

pub fn consistency(samples: &[u32]) -> i32 {
    match std_dev(samples) {
        Some(deviation) if samples.len() > 1 => 100 - deviation.round() as i32,
        _ => 100,
    }
}

/// The wpm history with the final wpm appended, unless it already ends with it
pub fn history_with_endpoint(history: &[u32], wpm: u32) -> Vec<u32> {
    let mut samples = history.to_vec();
    if samples.last() != Some(&wpm) {
        samples.push(wpm);
    }
    samples
}

/// Computes the final statistics.
///
/// `elapsed` is `None` when the test never started; timing based figures
/// then stay at zero while the character figures are still computed.
pub fn compute_results(
    target: &str,
    input: &str,
    elapsed: Option<Duration>,
    word_times: &[Duration],
    wpm_history: &[u32],
) -> TestResults {
    let chars = classify(target, input);

    let mut results = TestResults {
        accuracy: chars.accuracy(),
        error_count: chars.errors(),
        chars,
        consistency: consistency(wpm_history),
        word_times: word_times.to_vec(),
        ..TestResults::default()
    };

    if let Some(elapsed) = elapsed {
        let wpm = words_per_minute(word_count(target), elapsed);
        let boundaries = boundaries_with_end(word_times, elapsed);

        results.wpm = wpm;
        results.raw_wpm = words_per_minute(typed_token_count(input), elapsed);
        results.elapsed = elapsed;
        results.total_secs = elapsed.as_secs_f64().round() as u64;
        results.word_wpm = per_word_wpm(&boundaries);
        results.word_times = boundaries;
        results.consistency = consistency(&history_with_endpoint(wpm_history, wpm));
    }

    results
}
