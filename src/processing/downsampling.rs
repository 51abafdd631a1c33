/// Largest-Triangle-Three-Buckets (LTTB) downsampling of an evenly sampled
/// curve, using the sample index as x.
/// Returns `[x, y]` pairs ready for plotting; curves at or below `target`
/// points (or targets below 3) are passed through whole.
pub fn lttb_curve(values: &[f64], target: usize) -> Vec<[f64; 2]> {
    let n = values.len();
    if n <= target || target < 3 {
        return values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();
    }

    let mut out = Vec::with_capacity(target);

    // Always keep the first point
    out.push([0.0, values[0]]);

    let bucket_size = (n - 2) as f64 / (target - 2) as f64;
    let mut prev_idx: usize = 0;

    for bucket in 0..(target - 2) {
        let bucket_start = ((bucket as f64 + 1.0) * bucket_size) as usize + 1;
        let bucket_end = (((bucket as f64 + 2.0) * bucket_size) as usize + 1).min(n - 1);

        // Average of the next bucket is the third triangle vertex
        let next_start = bucket_end;
        let next_end = (((bucket as f64 + 3.0) * bucket_size) as usize + 1).min(n);
        let next_count = next_end.saturating_sub(next_start).max(1);
        let avg_x = (next_start..next_end).map(|j| j as f64).sum::<f64>() / next_count as f64;
        let avg_y = values[next_start..next_end.max(next_start)].iter().sum::<f64>()
            / next_count as f64;

        let prev_x = prev_idx as f64;
        let prev_y = values[prev_idx];

        let mut max_area = -1.0f64;
        let mut best_idx = bucket_start;
        for j in bucket_start..bucket_end {
            // Doubled area, comparison only
            let area = ((prev_x - avg_x) * (values[j] - prev_y)
                - (prev_x - j as f64) * (avg_y - prev_y))
                .abs();
            if area > max_area {
                max_area = area;
                best_idx = j;
            }
        }

        out.push([best_idx as f64, values[best_idx]]);
        prev_idx = best_idx;
    }

    // Always keep the last point
    out.push([(n - 1) as f64, values[n - 1]]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_curves_pass_through() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0];
        let points = lttb_curve(&values, 10);
        assert_eq!(points.len(), 5);
        assert_eq!(points[2], [2.0, 4.0]);
    }

    #[test]
    fn reduces_to_target_keeping_endpoints() {
        let values: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.01).sin()).collect();
        let points = lttb_curve(&values, 500);
        assert_eq!(points.len(), 500);
        assert_eq!(points[0], [0.0, values[0]]);
        assert_eq!(points[499], [9999.0, values[9999]]);
        assert!(points.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn keeps_isolated_spike() {
        let mut values = vec![0.0; 1000];
        values[517] = 10.0;
        let points = lttb_curve(&values, 50);
        assert!(points.iter().any(|p| p[1] == 10.0));
    }
}
