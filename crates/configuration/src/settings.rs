use core_types::{VisibilitySignal, VisibilityStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub metrics: MetricsTuning,
}

/// Network settings for the API server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind on.
    pub host: String,
    /// TCP port for the HTTP API.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// The tuning tables for all five calculators.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsTuning {
    pub loss_audit: LossAuditTuning,
    pub night_loss: NightLossTuning,
    pub ai_threat: AiThreatTuning,
    pub visibility: VisibilityTuning,
    pub export: ExportTuning,
}

/// Tunables for the monthly-burn loss audit.
///
/// All rates are fractions of the corresponding monthly spend. Adjustments
/// are additive percentage points applied on top of the base rate; the
/// calculator floors every adjusted rate at zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LossAuditTuning {
    /// Fraction of staff salary lost to manual repetitive tasks.
    pub staff_rate: Decimal,
    /// Fraction of operational overheads lost to process friction.
    pub ops_rate: Decimal,
    /// Fraction of marketing spend wasted without automation.
    pub marketing_rate: Decimal,

    /// Staff surcharge for retail businesses.
    pub retail_staff_surcharge: Decimal,
    /// Ops surcharge for manufacturing businesses.
    pub manufacturing_ops_surcharge: Decimal,
    /// Marketing surcharge for e-commerce businesses.
    pub ecommerce_marketing_surcharge: Decimal,

    /// Weekly manual hours above which the heavy staff surcharge applies.
    pub heavy_manual_hours: u32,
    /// Staff surcharge for heavy manual workloads (> heavy_manual_hours).
    pub heavy_manual_surcharge: Decimal,
    /// Weekly manual hours at which the moderate staff surcharge starts.
    pub moderate_manual_hours: u32,
    /// Staff surcharge for moderate manual workloads.
    pub moderate_manual_surcharge: Decimal,

    /// Marketing discount when a CRM is in place.
    pub crm_marketing_discount: Decimal,
    /// Ops discount when an ERP is in place.
    pub erp_ops_discount: Decimal,

    /// Base loss above which the steeper compounding penalty kicks in.
    pub compounding_threshold: Decimal,
    /// Penalty rate above the threshold.
    pub high_penalty_rate: Decimal,
    /// Penalty rate at or below the threshold.
    pub base_penalty_rate: Decimal,

    /// Fraction of the monthly burn presented as a recoverable target.
    pub saving_target_rate: Decimal,
}

impl Default for LossAuditTuning {
    fn default() -> Self {
        Self {
            staff_rate: dec!(0.12),
            ops_rate: dec!(0.15),
            marketing_rate: dec!(0.30),
            retail_staff_surcharge: dec!(0.03),
            manufacturing_ops_surcharge: dec!(0.05),
            ecommerce_marketing_surcharge: dec!(0.10),
            heavy_manual_hours: 30,
            heavy_manual_surcharge: dec!(0.10),
            moderate_manual_hours: 15,
            moderate_manual_surcharge: dec!(0.05),
            crm_marketing_discount: dec!(0.15),
            erp_ops_discount: dec!(0.10),
            compounding_threshold: dec!(1000000),
            high_penalty_rate: dec!(0.08),
            base_penalty_rate: dec!(0.03),
            saving_target_rate: dec!(0.70),
        }
    }
}

/// Tunables for the after-hours revenue-loss calculator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NightLossTuning {
    /// Share of daily inquiries arriving after a 6pm close.
    pub early_close_share: Decimal,
    /// Share of daily inquiries arriving after an 8pm close.
    pub evening_close_share: Decimal,
    /// Share of daily inquiries arriving after a 10pm (or later) close.
    pub late_close_share: Decimal,

    /// Conversion rate with instant (automated) response.
    /// Also the achievable ceiling used for potential revenue.
    pub cvr_instant: Decimal,
    /// Conversion rate when replies land within 30 minutes.
    pub cvr_under_thirty_min: Decimal,
    /// Conversion rate when replies take one to four hours.
    pub cvr_one_to_four_hours: Decimal,
    /// Conversion rate when replies wait for the next day.
    pub cvr_next_day: Decimal,
    /// Conversion rate with no follow-up channel at all.
    pub cvr_no_follow_up: Decimal,
    /// Conversion rate assumed for unrecognized response tiers.
    pub cvr_unknown: Decimal,

    /// Operating days per month when the form leaves it unset.
    pub default_operating_days: i64,
    /// Opening hour on a 24h clock, used to derive closed hours per day.
    pub opening_hour: i64,
}

impl Default for NightLossTuning {
    fn default() -> Self {
        Self {
            early_close_share: dec!(0.38),
            evening_close_share: dec!(0.25),
            late_close_share: dec!(0.14),
            cvr_instant: dec!(0.28),
            cvr_under_thirty_min: dec!(0.18),
            cvr_one_to_four_hours: dec!(0.08),
            cvr_next_day: dec!(0.03),
            cvr_no_follow_up: dec!(0.00),
            cvr_unknown: dec!(0.05),
            default_operating_days: 26,
            opening_hour: 9,
        }
    }
}

/// Tunables for the AI-disruption threat score.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiThreatTuning {
    /// Base risk per normalized industry key.
    pub risk_matrix: BTreeMap<String, i64>,
    /// Base risk for industries missing from the matrix.
    pub default_risk: i64,
    /// Points subtracted when the business is omnichannel.
    pub omnichannel_discount: i64,
    /// Points added when the business is not omnichannel.
    pub missing_omnichannel_penalty: i64,
    /// Score at or above which the level is KHATRA.
    pub khatra_threshold: i64,
    /// Score at or above which the level is SAVDHAN.
    pub savdhan_threshold: i64,
}

impl Default for AiThreatTuning {
    fn default() -> Self {
        let risk_matrix = BTreeMap::from(
            [
                ("it_services", 95),
                ("finance", 94),
                ("e-commerce", 88),
                ("logistics", 85),
                ("retail", 82),
                ("manufacturing", 78),
                ("education", 72),
                ("real_estate", 68),
                ("healthcare", 65),
                ("hospitality", 60),
            ]
            .map(|(key, risk)| (key.to_string(), risk)),
        );
        Self {
            risk_matrix,
            default_risk: 75,
            omnichannel_discount: 18,
            missing_omnichannel_penalty: 5,
            khatra_threshold: 80,
            savdhan_threshold: 50,
        }
    }
}

/// One entry of the visibility signal catalogue: a signal and the points it
/// contributes when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalWeight {
    pub signal: VisibilitySignal,
    pub points: i64,
}

/// One band of the visibility status table: the status awarded at or above
/// `min_percent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBand {
    pub min_percent: i64,
    pub status: VisibilityStatus,
}

/// Tunables for the digital-visibility scan.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisibilityTuning {
    /// The signal catalogue in display order; points must sum to 100.
    pub weights: Vec<SignalWeight>,
    /// Status bands in descending `min_percent` order; the last band must
    /// start at 0 so every score lands somewhere.
    pub bands: Vec<StatusBand>,
    /// Monthly searcher baseline when a city is supplied.
    pub baseline_with_city: i64,
    /// Monthly searcher baseline without a city.
    pub baseline_default: i64,
}

impl Default for VisibilityTuning {
    fn default() -> Self {
        let weights = [
            (VisibilitySignal::Website, 20),
            (VisibilitySignal::GoogleListing, 20),
            (VisibilitySignal::Social, 15),
            (VisibilitySignal::Seo, 15),
            (VisibilitySignal::Ads, 10),
            (VisibilitySignal::Crm, 5),
            (VisibilitySignal::WhatsappAutomation, 15),
        ]
        .map(|(signal, points)| SignalWeight { signal, points })
        .to_vec();

        let bands = [
            (80, VisibilityStatus::Dominant),
            (60, VisibilityStatus::Visible),
            (40, VisibilityStatus::Okay),
            (20, VisibilityStatus::Ghost),
            (0, VisibilityStatus::Invisible),
        ]
        .map(|(min_percent, status)| StatusBand { min_percent, status })
        .to_vec();

        Self {
            weights,
            bands,
            baseline_with_city: 1200,
            baseline_default: 500,
        }
    }
}

/// Tunables for the export-opportunity calculator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportTuning {
    /// Multiplier for USA / UK / Australia.
    pub premium_multiplier: Decimal,
    /// Multiplier for Germany / Japan.
    pub top_multiplier: Decimal,
    /// Multiplier for UAE / Singapore.
    pub regional_multiplier: Decimal,
    /// Multiplier for any other destination.
    pub default_multiplier: Decimal,
    /// Fraction of export revenue consumed by freight, customs and packaging.
    pub cost_fraction: Decimal,
}

impl Default for ExportTuning {
    fn default() -> Self {
        Self {
            premium_multiplier: dec!(4.5),
            top_multiplier: dec!(5.0),
            regional_multiplier: dec!(3.0),
            default_multiplier: dec!(2.5),
            cost_fraction: dec!(0.20),
        }
    }
}
