//! Digital visibility: how findable the business is online.
//!
//! Each present signal from the fixed catalogue contributes its weight; the
//! absent ones become the ordered gap report the dashboard renders as
//! "what's missing".

use crate::coerce;
use crate::engine::MetricsEngine;
use core_types::{VisibilitySignal, VisibilityStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The signals the business already has, plus an optional city used to size
/// the searcher baseline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityInput {
    pub signals: BTreeSet<VisibilitySignal>,
    pub city: Option<String>,
}

/// One missing signal and the points it would add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalGap {
    pub signal: VisibilitySignal,
    pub label: String,
    pub points_lost: i64,
}

/// The computed visibility score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityResult {
    /// 0..=100.
    pub percent: i64,
    pub status: VisibilityStatus,
    /// Estimated monthly searchers who never find the business.
    pub missed_customers: i64,
    /// All absent signals, in catalogue order.
    pub gaps: Vec<SignalGap>,
}

impl MetricsEngine {
    pub fn visibility(&self, input: &VisibilityInput) -> VisibilityResult {
        let tuning = &self.tuning.visibility;

        let mut percent: i64 = 0;
        let mut gaps = Vec::new();
        for weight in &tuning.weights {
            if input.signals.contains(&weight.signal) {
                percent += weight.points;
            } else {
                gaps.push(SignalGap {
                    signal: weight.signal,
                    label: weight.signal.label().to_string(),
                    points_lost: weight.points,
                });
            }
        }
        let percent = percent.clamp(0, 100);

        // Bands are validated descending and ending at 0, so a match always
        // exists; Invisible is the unreachable fallback.
        let status = tuning
            .bands
            .iter()
            .find(|band| percent >= band.min_percent)
            .map(|band| band.status)
            .unwrap_or(VisibilityStatus::Invisible);

        let has_city = input
            .city
            .as_deref()
            .is_some_and(|city| !city.trim().is_empty());
        let baseline = if has_city {
            tuning.baseline_with_city
        } else {
            tuning.baseline_default
        };
        let missed_customers = coerce::round_money(
            Decimal::from(baseline) * Decimal::from(100 - percent) / Decimal::from(100),
        );

        VisibilityResult {
            percent,
            status,
            missed_customers,
            gaps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MetricsEngine {
        MetricsEngine::with_defaults()
    }

    fn scan(signals: &[VisibilitySignal], city: Option<&str>) -> VisibilityResult {
        engine().visibility(&VisibilityInput {
            signals: signals.iter().copied().collect(),
            city: city.map(str::to_string),
        })
    }

    #[test]
    fn website_and_google_listing_score_forty() {
        let result = scan(
            &[VisibilitySignal::Website, VisibilitySignal::GoogleListing],
            None,
        );
        assert_eq!(result.percent, 40);
        assert_eq!(result.status, VisibilityStatus::Okay);
        // The five absent signals, in catalogue order.
        let gap_signals: Vec<VisibilitySignal> =
            result.gaps.iter().map(|gap| gap.signal).collect();
        assert_eq!(
            gap_signals,
            vec![
                VisibilitySignal::Social,
                VisibilitySignal::Seo,
                VisibilitySignal::Ads,
                VisibilitySignal::Crm,
                VisibilitySignal::WhatsappAutomation,
            ]
        );
        // 500 baseline x 60% invisible share.
        assert_eq!(result.missed_customers, 300);
    }

    #[test]
    fn full_catalogue_is_dominant_with_no_gaps() {
        let result = scan(&VisibilitySignal::ALL, Some("Jaipur"));
        assert_eq!(result.percent, 100);
        assert_eq!(result.status, VisibilityStatus::Dominant);
        assert!(result.gaps.is_empty());
        assert_eq!(result.missed_customers, 0);
    }

    #[test]
    fn empty_signal_set_is_invisible() {
        let result = scan(&[], None);
        assert_eq!(result.percent, 0);
        assert_eq!(result.status, VisibilityStatus::Invisible);
        assert_eq!(result.gaps.len(), VisibilitySignal::ALL.len());
        assert_eq!(result.missed_customers, 500);
    }

    #[test]
    fn a_city_raises_the_searcher_baseline() {
        let without = scan(&[VisibilitySignal::Website], None);
        let with = scan(&[VisibilitySignal::Website], Some("Mumbai"));
        assert_eq!(without.missed_customers, 400);
        assert_eq!(with.missed_customers, 960);

        // Whitespace-only cities don't count.
        let blank = scan(&[VisibilitySignal::Website], Some("   "));
        assert_eq!(blank.missed_customers, 400);
    }

    #[test]
    fn status_bands_are_monotonic_over_the_full_range() {
        let mut signals: Vec<VisibilitySignal> = Vec::new();
        let mut previous = VisibilityStatus::Invisible;
        for signal in VisibilitySignal::ALL {
            signals.push(signal);
            let status = scan(&signals, None).status;
            assert!(status >= previous);
            previous = status;
        }
    }
}
