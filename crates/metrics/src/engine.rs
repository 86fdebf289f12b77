use crate::error::MetricsError;
use configuration::MetricsTuning;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// The stateless calculator set behind the intake flow.
///
/// Holds nothing but validated tuning; every calculator method is a pure
/// function of its input record and may be called concurrently without
/// coordination.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    pub(crate) tuning: MetricsTuning,
}

impl MetricsEngine {
    /// Creates an engine after validating the cross-field tuning invariants.
    ///
    /// The per-call calculators never fail, so every inconsistency a bad
    /// `config.toml` could introduce is rejected here instead.
    pub fn new(tuning: MetricsTuning) -> Result<Self, MetricsError> {
        validate_visibility(&tuning)?;
        validate_night_loss(&tuning)?;
        validate_ai_threat(&tuning)?;
        Ok(Self { tuning })
    }

    /// An engine running on the canonical built-in constants.
    pub fn with_defaults() -> Self {
        // The default tables satisfy every invariant `new` checks.
        Self {
            tuning: MetricsTuning::default(),
        }
    }

    pub fn tuning(&self) -> &MetricsTuning {
        &self.tuning
    }
}

/// The signal catalogue must cover exactly 100 points with no duplicate
/// signals, and the status bands must be descending and end at zero so any
/// percentage lands in a band.
fn validate_visibility(tuning: &MetricsTuning) -> Result<(), MetricsError> {
    let vis = &tuning.visibility;

    let total: i64 = vis.weights.iter().map(|w| w.points).sum();
    if total != 100 {
        return Err(MetricsError::InvalidTuning(format!(
            "visibility signal weights must sum to 100, got {total}"
        )));
    }

    let mut seen = BTreeSet::new();
    for weight in &vis.weights {
        if !seen.insert(weight.signal) {
            return Err(MetricsError::InvalidTuning(format!(
                "duplicate visibility signal '{}' in weight table",
                weight.signal.as_key()
            )));
        }
    }

    match vis.bands.last() {
        None => {
            return Err(MetricsError::InvalidTuning(
                "visibility status bands must not be empty".to_string(),
            ));
        }
        Some(last) if last.min_percent != 0 => {
            return Err(MetricsError::InvalidTuning(
                "the lowest visibility band must start at 0".to_string(),
            ));
        }
        Some(_) => {}
    }
    for pair in vis.bands.windows(2) {
        if pair[0].min_percent <= pair[1].min_percent {
            return Err(MetricsError::InvalidTuning(
                "visibility status bands must be in strictly descending order".to_string(),
            ));
        }
    }

    Ok(())
}

/// The instant-response conversion rate is the achievable ceiling: potential
/// revenue is computed with it, so no other tier may exceed it.
fn validate_night_loss(tuning: &MetricsTuning) -> Result<(), MetricsError> {
    let night = &tuning.night_loss;
    let tiers = [
        night.cvr_under_thirty_min,
        night.cvr_one_to_four_hours,
        night.cvr_next_day,
        night.cvr_no_follow_up,
        night.cvr_unknown,
    ];
    if tiers.iter().any(|cvr| *cvr > night.cvr_instant) {
        return Err(MetricsError::InvalidTuning(
            "no response-tier conversion rate may exceed the instant tier".to_string(),
        ));
    }
    if night.cvr_instant < Decimal::ZERO {
        return Err(MetricsError::InvalidTuning(
            "conversion rates must be non-negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_ai_threat(tuning: &MetricsTuning) -> Result<(), MetricsError> {
    let threat = &tuning.ai_threat;
    if threat.khatra_threshold <= threat.savdhan_threshold {
        return Err(MetricsError::InvalidTuning(
            "KHATRA threshold must be above the SAVDHAN threshold".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use configuration::{MetricsTuning, SignalWeight, StatusBand};
    use core_types::{VisibilitySignal, VisibilityStatus};
    use rust_decimal_macros::dec;

    #[test]
    fn default_tuning_validates() {
        assert!(MetricsEngine::new(MetricsTuning::default()).is_ok());
    }

    #[test]
    fn rejects_weights_not_summing_to_one_hundred() {
        let mut tuning = MetricsTuning::default();
        tuning.visibility.weights = vec![SignalWeight {
            signal: VisibilitySignal::Website,
            points: 90,
        }];
        assert!(matches!(
            MetricsEngine::new(tuning),
            Err(MetricsError::InvalidTuning(_))
        ));
    }

    #[test]
    fn rejects_bands_that_do_not_reach_zero() {
        let mut tuning = MetricsTuning::default();
        tuning.visibility.bands = vec![StatusBand {
            min_percent: 40,
            status: VisibilityStatus::Okay,
        }];
        assert!(MetricsEngine::new(tuning).is_err());
    }

    #[test]
    fn rejects_cvr_tier_above_the_instant_ceiling() {
        let mut tuning = MetricsTuning::default();
        tuning.night_loss.cvr_next_day = dec!(0.90);
        assert!(MetricsEngine::new(tuning).is_err());
    }

    #[test]
    fn rejects_inverted_threat_thresholds() {
        let mut tuning = MetricsTuning::default();
        tuning.ai_threat.khatra_threshold = 40;
        tuning.ai_threat.savdhan_threshold = 50;
        assert!(MetricsEngine::new(tuning).is_err());
    }
}
