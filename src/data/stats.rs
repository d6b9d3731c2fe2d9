// ---------------------------------------------------------------------------
// Boxplot statistics
// ---------------------------------------------------------------------------

/// Box-and-whisker summary of one attribute series.
///
/// The box spans `q1..q3` with the median inside; whiskers extend to the
/// most extreme data point within 1.5×IQR of the box edges, and everything
/// beyond the whiskers is an outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Data beyond the whiskers, in input order.
    pub outliers: Vec<f64>,
}

/// Compute boxplot statistics for a series. Returns `None` for an empty
/// series. Quartiles use linear interpolation between order statistics.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.50);
    let q3 = quantile(&sorted, 0.75);

    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    // Whiskers clamp to actual data, not to the fences themselves.
    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= high_fence)
        .unwrap_or(q3);

    let outliers = values
        .iter()
        .copied()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        outliers,
    })
}

/// Linearly interpolated quantile of a sorted slice, `q` in `[0, 1]`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
