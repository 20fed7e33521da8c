//! Classification of a tracker's readings over the observation window.

use crate::models::Classification;

/// Label one tracker's readings.
///
/// Missing and NaN readings count as zero. Comparisons are exact: a reading
/// of `1e-12` is non-zero, and `2.0` and `2.0000001` are distinct values.
/// An empty sequence is `Zeros`.
pub fn classify_tracker(values: &[Option<f64>]) -> Classification {
    let values: Vec<f64> = values
        .iter()
        .map(|v| match v {
            Some(x) if !x.is_nan() => *x,
            _ => 0.0,
        })
        .collect();

    let zero_count = values.iter().filter(|v| v.abs() == 0.0).count();
    if zero_count == values.len() {
        return Classification::Zeros;
    }
    if zero_count > 0 {
        return Classification::Intermittent;
    }

    // No zeros from here on, so every value is non-zero.
    let first = values[0];
    if values.iter().all(|v| *v == first) {
        Classification::Constant
    } else {
        Classification::Proper
    }
}
