use typo::time_series::TimeSeriesPoint;

/// Compute X (seconds) and Y (wpm) upper bounds for the results chart
pub fn compute_chart_params(points: &[TimeSeriesPoint]) -> (f64, f64) {
    let overall_duration = points
        .iter()
        .map(|p| p.t)
        .fold(1.0_f64, f64::max);

    let highest_wpm = points.iter().map(|p| p.wpm).fold(1.0_f64, f64::max);

    (overall_duration, highest_wpm.round())
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_chart_params_empty() {
        assert_eq!(compute_chart_params(&[]), (1.0, 1.0));
    }

    #[test]
    fn test_compute_chart_params() {
        let points = [
            TimeSeriesPoint::new(0.4, 20.0),
            TimeSeriesPoint::new(2.5, 74.6),
            TimeSeriesPoint::new(4.0, 50.0),
        ];
        assert_eq!(compute_chart_params(&points), (4.0, 75.0));
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(12.0), "12");
        assert_eq!(format_label(1.75), "1.8");
        assert_eq!(format_label(3.5), "3.5");
    }
}
