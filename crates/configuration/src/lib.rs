//! # Masterkey Configuration
//!
//! Strongly-typed settings for the server and, more importantly, the tuning
//! tables behind every calculator. Each tunable (waste fraction, threshold,
//! CVR table, signal weight, export multiplier) is a named configuration
//! value with a documented default, never an inline literal inside a formula.
//!
//! The canonical constants ship as serde defaults, so `config.toml` is
//! optional and may override any individual value. The historical variant
//! rates (15/20/35 waste tiers, alternate threat thresholds) are therefore
//! representable without a code change.

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    AiThreatTuning, Config, ExportTuning, LossAuditTuning, MetricsTuning, NightLossTuning,
    ServerSettings, SignalWeight, StatusBand, VisibilityTuning,
};

/// Loads the application configuration, layering `config.toml` (if present)
/// over the built-in defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // The file is optional: a missing config.toml means pure defaults.
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_carry_the_canonical_constants() {
        let config = Config::default();
        assert_eq!(config.metrics.loss_audit.staff_rate, dec!(0.12));
        assert_eq!(config.metrics.loss_audit.ops_rate, dec!(0.15));
        assert_eq!(config.metrics.loss_audit.marketing_rate, dec!(0.30));
        assert_eq!(config.metrics.night_loss.cvr_instant, dec!(0.28));
        assert_eq!(config.metrics.ai_threat.khatra_threshold, 80);
        assert_eq!(config.metrics.export.cost_fraction, dec!(0.20));
    }

    #[test]
    fn default_signal_weights_sum_to_one_hundred() {
        let tuning = settings::VisibilityTuning::default();
        let total: i64 = tuning.weights.iter().map(|w| w.points).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn default_risk_matrix_matches_the_catalogue() {
        let tuning = settings::AiThreatTuning::default();
        assert_eq!(tuning.risk_matrix.get("it_services"), Some(&95));
        assert_eq!(tuning.risk_matrix.get("hospitality"), Some(&60));
        assert_eq!(tuning.default_risk, 75);
    }
}
