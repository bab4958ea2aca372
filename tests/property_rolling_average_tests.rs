use approx::relative_eq;
use chart_prep::core::{Point, rolling_average};
use proptest::prelude::*;

fn sample_y() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        6 => (-1_000.0f64..1_000.0).prop_map(Some),
        3 => (-1e15f64..1e15).prop_map(Some),
        1 => (1e300f64..f64::MAX).prop_map(Some),
        1 => (-f64::MAX..-1e300f64).prop_map(Some),
        1 => (-1e-9f64..1e-9).prop_map(Some),
        2 => Just(None),
        1 => Just(Some(f64::NAN)),
    ]
}

fn build_series(values: &[Option<f64>]) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, y)| Point { x: i as f64, y: *y })
        .collect()
}

/// Mean of the valid values of a window plus the largest magnitude seen in it.
fn exact_window_stats(series: &[Point], index: usize, window: usize) -> Option<(f64, f64)> {
    let start = (index + 1).saturating_sub(window);
    let valid: Vec<f64> = series[start..=index]
        .iter()
        .filter_map(|point| point.valid_y())
        .collect();
    if valid.is_empty() {
        return None;
    }
    let magnitude = valid.iter().fold(0.0_f64, |acc, y| acc.max(y.abs()));
    let mut sum = 0.0;
    for y in &valid {
        sum += y;
    }
    Some((sum / valid.len() as f64, magnitude))
}

proptest! {
    #[test]
    fn rolling_average_matches_window_mean(
        values in proptest::collection::vec(sample_y(), 0..80),
        window in 1usize..12
    ) {
        let series = build_series(&values);
        let averaged = rolling_average(&series, window).expect("average");

        prop_assert_eq!(averaged.len(), series.len());
        for (index, point) in averaged.iter().enumerate() {
            prop_assert_eq!(point.x, series[index].x);
            if window == 1 {
                continue;
            }
            match (point.y, exact_window_stats(&series, index, window)) {
                (None, None) => {}
                (Some(actual), Some((expected, _))) if !expected.is_finite() => {
                    prop_assert!(
                        actual == expected || (actual.is_nan() && expected.is_nan()),
                        "index {}: {} != {}",
                        index,
                        actual,
                        expected
                    );
                }
                (Some(actual), Some((expected, magnitude))) => {
                    // error allowed relative to the window's own values
                    let tolerance = magnitude * f64::EPSILON * window as f64;
                    prop_assert!(
                        relative_eq!(actual, expected, epsilon = tolerance, max_relative = 1e-12),
                        "index {}: {} != {}",
                        index,
                        actual,
                        expected
                    );
                }
                (actual, expected) => {
                    prop_assert!(false, "index {}: {:?} != {:?}", index, actual, expected);
                }
            }
        }
    }

    #[test]
    fn window_of_one_is_identity_and_idempotent(
        values in proptest::collection::vec(sample_y(), 0..40)
    ) {
        let series = build_series(&values);
        let once = rolling_average(&series, 1).expect("average");
        let twice = rolling_average(&once, 1).expect("average");

        prop_assert_eq!(once.len(), series.len());
        for ((a, b), original) in once.iter().zip(twice.iter()).zip(&series) {
            prop_assert_eq!(a.x, original.x);
            prop_assert_eq!(b.x, original.x);
            prop_assert_eq!(a.y.map(f64::to_bits), original.y.map(f64::to_bits));
            prop_assert_eq!(b.y.map(f64::to_bits), original.y.map(f64::to_bits));
        }
    }

    #[test]
    fn small_values_recover_after_large_value_leaves(
        large in prop_oneof![1e12f64..1e16, -1e16f64..-1e12, 1e300f64..f64::MAX],
        small in proptest::collection::vec(-1_000.0f64..1_000.0, 3..20),
        window in 2usize..6
    ) {
        let mut values = vec![Some(large)];
        values.extend(small.iter().copied().map(Some));
        let series = build_series(&values);
        let averaged = rolling_average(&series, window).expect("average");

        for index in window..series.len() {
            let (expected, magnitude) =
                exact_window_stats(&series, index, window).expect("valid window");
            let actual = averaged[index].y.expect("value");
            let tolerance = magnitude * f64::EPSILON * window as f64;
            prop_assert!(
                relative_eq!(actual, expected, epsilon = tolerance, max_relative = 1e-12),
                "index {}: {} != {}",
                index,
                actual,
                expected
            );
        }
    }

    #[test]
    fn finite_averages_stay_within_valid_input_bounds(
        values in proptest::collection::vec(sample_y(), 1..60),
        window in 2usize..10
    ) {
        let series = build_series(&values);
        let averaged = rolling_average(&series, window).expect("average");

        for (index, point) in averaged.iter().enumerate() {
            let Some(y) = point.y else {
                continue;
            };
            if !y.is_finite() {
                continue;
            }
            let start = (index + 1).saturating_sub(window);
            let valid: Vec<f64> = series[start..=index]
                .iter()
                .filter_map(|p| p.valid_y())
                .collect();
            let low = valid.iter().copied().fold(f64::INFINITY, f64::min);
            let high = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let slack = high.abs().max(low.abs()) * f64::EPSILON * 2.0 * window as f64;
            prop_assert!(y >= low - slack && y <= high + slack);
        }
    }
}
