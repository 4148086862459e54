use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Sample, ScaleMapping};

/// Finds the sample whose timestamp is nearest to the instant under
/// `pointer_x` (plot-area pixels).
///
/// Returns `None` only for an empty slice.
#[must_use]
pub fn locate<'a>(samples: &'a [Sample], pointer_x: f64, scales: &ScaleMapping) -> Option<&'a Sample> {
    locate_index(samples, pointer_x, scales).map(|index| &samples[index])
}

/// Index variant of [`locate`].
///
/// Binary-searches the first sample at or after the inverted instant and
/// compares it with its left neighbor. Equal distances go to the left
/// neighbor; duplicate timestamps resolve to the first sample carrying the
/// winning instant.
#[must_use]
pub fn locate_index(samples: &[Sample], pointer_x: f64, scales: &ScaleMapping) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }

    let target = scales.x_to_time(pointer_x);
    let insertion = samples.partition_point(|sample| (sample.time_ms as f64) < target);

    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
    if let Some(left) = insertion.checked_sub(1) {
        candidates.push((distance(samples[left], target), left));
    }
    if insertion < samples.len() {
        candidates.push((distance(samples[insertion], target), insertion));
    }

    // `min_by_key` keeps the first of equal minima, which is the left sample.
    let (_, winner) = candidates.into_iter().min_by_key(|candidate| candidate.0)?;
    let winner_time = samples[winner].time_ms;
    Some(samples[..=winner].partition_point(|sample| sample.time_ms < winner_time))
}

fn distance(sample: Sample, target: f64) -> OrderedFloat<f64> {
    OrderedFloat((sample.time_ms as f64 - target).abs())
}
