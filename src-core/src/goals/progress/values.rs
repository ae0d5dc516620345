use crate::goals::goals_model::{Goal, Sample};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExtractedValues {
    pub baseline_value: Option<f64>,
    pub current_value: Option<f64>,
}

/// Picks baseline and current values from samples already restricted to the
/// active period. A frozen goal baseline is authoritative.
pub fn extract_values(goal: &Goal, samples_in_period: &[Sample]) -> ExtractedValues {
    let mut values = well_formed_values(samples_in_period);
    let first = values.next();
    let current_value = values.next_back().or(first);

    ExtractedValues {
        baseline_value: goal.baseline_value.or(first),
        current_value,
    }
}

/// Finite sample values in their original order. Malformed samples are skipped.
pub fn well_formed_values(samples: &[Sample]) -> impl DoubleEndedIterator<Item = f64> + '_ {
    samples
        .iter()
        .filter(|sample| sample.is_well_formed())
        .map(|sample| sample.value)
}
