use crate::metrics::TestResults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub t: f64,
    pub wpm: f64,
}

impl TimeSeriesPoint {
    pub fn new(t: f64, wpm: f64) -> Self {
        Self { t, wpm }
    }
}

impl From<TimeSeriesPoint> for (f64, f64) {
    fn from(p: TimeSeriesPoint) -> Self {
        (p.t, p.wpm)
    }
}

/// Per-word speed against elapsed seconds.
///
/// Without word data the series is a straight line from the origin to the
/// final wpm at the total time.
pub fn word_speed_series(results: &TestResults) -> Vec<TimeSeriesPoint> {
    if results.word_wpm.is_empty() {
        return vec![
            TimeSeriesPoint::new(0.0, 0.0),
            TimeSeriesPoint::new(results.total_secs as f64, results.wpm as f64),
        ];
    }

    results
        .word_times
        .iter()
        .zip(&results.word_wpm)
        .map(|(t, &wpm)| TimeSeriesPoint::new(t.as_secs_f64(), wpm as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_series_from_word_boundaries() {
        let results = TestResults {
            word_times: vec![Duration::from_millis(1500), Duration::from_secs(3)],
            word_wpm: vec![40, 40],
            ..TestResults::default()
        };

        let series = word_speed_series(&results);
        assert_eq!(
            series,
            vec![
                TimeSeriesPoint::new(1.5, 40.0),
                TimeSeriesPoint::new(3.0, 40.0)
            ]
        );
    }

    #[test]
    fn test_series_fallback() {
        let results = TestResults {
            wpm: 55,
            total_secs: 12,
            ..TestResults::default()
        };

        let tuples: Vec<(f64, f64)> = word_speed_series(&results)
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(tuples, vec![(0.0, 0.0), (12.0, 55.0)]);
    }
}
