//! AI threat: how exposed the business vertical is to AI-driven disruption.
//!
//! A fixed per-industry base risk is adjusted for omnichannel readiness and
//! clamped to 0..=100, then banded into SAFE / SAVDHAN / KHATRA.

use crate::engine::MetricsEngine;
use core_types::{normalize_label, ThreatLevel};
use serde::{Deserialize, Serialize};

/// Industry self-description from the intake form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiThreatInput {
    /// Free-form industry label; normalized before lookup, unknown labels
    /// take the default base risk.
    pub industry: String,
    /// Whether the business already sells across physical and digital
    /// channels.
    pub is_omnichannel: bool,
}

/// The banded threat score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiThreatResult {
    /// Disruption risk, 0..=100.
    pub score: i64,
    pub threat_level: ThreatLevel,
    /// Estimated years before the disruption bites, at least 1.
    pub years_left: i64,
    pub timeline_desc: String,
}

impl MetricsEngine {
    pub fn ai_threat(&self, input: &AiThreatInput) -> AiThreatResult {
        let tuning = &self.tuning.ai_threat;

        let key = normalize_label(&input.industry);
        let base_risk = tuning
            .risk_matrix
            .get(&key)
            .copied()
            .unwrap_or(tuning.default_risk);

        // Omnichannel presence earns a discount; its absence is a penalty.
        let final_risk = if input.is_omnichannel {
            base_risk - tuning.omnichannel_discount
        } else {
            base_risk + tuning.missing_omnichannel_penalty
        };
        let score = final_risk.clamp(0, 100);

        let threat_level = if score >= tuning.khatra_threshold {
            ThreatLevel::Khatra
        } else if score >= tuning.savdhan_threshold {
            ThreatLevel::Savdhan
        } else {
            ThreatLevel::Safe
        };

        // round((100 - score) / 10), half up; score <= 100 keeps this exact.
        let years_left = (((100 - score) + 5) / 10).max(1);

        let timeline_desc = if score >= tuning.khatra_threshold {
            "Accelerated disruption".to_string()
        } else {
            "Gradual transformation".to_string()
        };

        AiThreatResult {
            score,
            threat_level,
            years_left,
            timeline_desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MetricsEngine {
        MetricsEngine::with_defaults()
    }

    fn threat(industry: &str, is_omnichannel: bool) -> AiThreatResult {
        engine().ai_threat(&AiThreatInput {
            industry: industry.to_string(),
            is_omnichannel,
        })
    }

    #[test]
    fn single_channel_retail_is_khatra() {
        let result = threat("retail", false);
        assert_eq!(result.score, 87);
        assert_eq!(result.threat_level, ThreatLevel::Khatra);
        assert_eq!(result.years_left, 1);
        assert_eq!(result.timeline_desc, "Accelerated disruption");
    }

    #[test]
    fn omnichannel_presence_lowers_the_score() {
        let result = threat("retail", true);
        assert_eq!(result.score, 64);
        assert_eq!(result.threat_level, ThreatLevel::Savdhan);
        assert_eq!(result.timeline_desc, "Gradual transformation");
    }

    #[test]
    fn omnichannel_hospitality_is_safe() {
        let result = threat("hospitality", true);
        assert_eq!(result.score, 42);
        assert_eq!(result.threat_level, ThreatLevel::Safe);
        // round(58 / 10) = 6.
        assert_eq!(result.years_left, 6);
    }

    #[test]
    fn unknown_industry_takes_the_default_risk() {
        let result = threat("alpaca grooming", false);
        assert_eq!(result.score, 80);
        assert_eq!(result.threat_level, ThreatLevel::Khatra);
    }

    #[test]
    fn industry_labels_are_normalized_before_lookup() {
        assert_eq!(threat("  IT Services ", false).score, 100);
        assert_eq!(threat("Real Estate", false).score, 73);
    }

    #[test]
    fn score_is_clamped_and_years_floor_at_one() {
        let result = threat("it_services", false);
        // 95 + 5 clamps to 100.
        assert_eq!(result.score, 100);
        assert_eq!(result.years_left, 1);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        assert_eq!(threat("finance", true), threat("finance", true));
    }
}
