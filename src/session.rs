use std::time::{Duration, Instant};

use crate::config::WordCount;
use crate::metrics::TestResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_count: WordCount,
    pub sample_period: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_count: WordCount::default(),
            sample_period: Duration::from_millis(crate::SAMPLE_PERIOD_MS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub started_at: Option<Instant>,
    pub ended_at: Option<Instant>,
    pub finished: bool,
    pub input: String,
    // Elapsed time at every typed space
    pub word_times: Vec<Duration>,
    pub wpm_history: Vec<u32>,
    pub results: Option<TestResults>,
}

impl SessionState {
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end.saturating_duration_since(start)),
            _ => None,
        }
    }
}

/// Recurring wpm sample schedule owned by a session.
///
/// The schedule only yields instants while armed; cancelling it drops every
/// pending sample.
#[derive(Debug, Clone)]
pub struct SampleSchedule {
    period: Duration,
    next_due: Option<Instant>,
}

impl SampleSchedule {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn arm(&mut self, started_at: Instant) {
        self.next_due = Some(started_at + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Every sample instant that has come due by `now`, oldest first
    pub fn poll(&mut self, now: Instant) -> Vec<Instant> {
        let mut due = Vec::new();
        while let Some(at) = self.next_due {
            if at > now {
                break;
            }
            due.push(at);
            self.next_due = Some(at + self.period);
        }
        due
    }
}
