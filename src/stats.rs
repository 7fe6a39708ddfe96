//! Descriptive statistics over samples.
//!
//! All functions return `None` for an empty sample.

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by `n`).
pub fn variance(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - mu).powi(2)).sum();
    Some(ss / values.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}
