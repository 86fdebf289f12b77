//! Night loss: revenue missed on inquiries that arrive after closing.
//!
//! The closing tier sets how much of the daily inquiry volume lands after
//! hours; the response tier sets how much of it currently converts. The gap
//! to an instant-response conversion rate is the monthly loss.

use crate::coerce;
use crate::engine::MetricsEngine;
use configuration::NightLossTuning;
use core_types::{ClosingTime, ResponseSpeed};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inquiry volume and response posture from the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NightLossInput {
    /// Average inquiries per day across all channels.
    pub daily_inquiries: i64,
    pub closing_time: ClosingTime,
    /// Profit earned on one converted sale.
    pub profit_per_sale: Decimal,
    pub response_time: ResponseSpeed,
    /// Operating days per month; absent means the configured default (26).
    pub monthly_operating_days: Option<i64>,
}

impl Default for NightLossInput {
    fn default() -> Self {
        Self {
            daily_inquiries: 0,
            closing_time: ClosingTime::EightPm,
            profit_per_sale: Decimal::ZERO,
            response_time: ResponseSpeed::NoFollowUp,
            monthly_operating_days: None,
        }
    }
}

/// The computed after-hours gap, all monetary values whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightLossResult {
    /// Inquiries per month arriving after closing.
    pub night_inquiries: i64,
    /// What those inquiries earn at the current response tier.
    pub current_revenue: i64,
    /// What they would earn with instant response.
    pub potential_revenue: i64,
    pub monthly_loss: i64,
    pub annual_loss: i64,
    /// Loss per closed hour, zero when there are no closed hours.
    pub hourly_loss: i64,
}

impl MetricsEngine {
    pub fn night_loss(&self, input: &NightLossInput) -> NightLossResult {
        let tuning = &self.tuning.night_loss;

        let daily = coerce::count(input.daily_inquiries);
        let days = coerce::count(
            input
                .monthly_operating_days
                .unwrap_or(tuning.default_operating_days),
        );
        let profit = coerce::money(input.profit_per_sale);

        let night_share = closing_share(tuning, input.closing_time);
        let night_inquiries = coerce::round_money(
            Decimal::from(daily) * night_share * Decimal::from(days),
        );

        let current_cvr = conversion_rate(tuning, input.response_time);
        let current_revenue =
            coerce::round_money(Decimal::from(night_inquiries) * current_cvr * profit);
        let potential_revenue =
            coerce::round_money(Decimal::from(night_inquiries) * tuning.cvr_instant * profit);

        // Tuning validation caps every tier at the instant CVR, so the gap
        // is non-negative by construction; the max is belt for rounding.
        let monthly_loss = (potential_revenue - current_revenue).max(0);

        let closed_hours_per_day = (24 - (input.closing_time.hour() - tuning.opening_hour))
            .clamp(0, 24);
        let closed_hours = days * closed_hours_per_day;
        let hourly_loss = if closed_hours > 0 {
            coerce::round_money(Decimal::from(monthly_loss) / Decimal::from(closed_hours))
        } else {
            0
        };

        NightLossResult {
            night_inquiries,
            current_revenue,
            potential_revenue,
            monthly_loss,
            annual_loss: monthly_loss * 12,
            hourly_loss,
        }
    }
}

/// Share of daily inquiry volume arriving after the given closing tier.
fn closing_share(tuning: &NightLossTuning, closing: ClosingTime) -> Decimal {
    match closing {
        ClosingTime::SixPm => tuning.early_close_share,
        ClosingTime::EightPm => tuning.evening_close_share,
        ClosingTime::TenPm => tuning.late_close_share,
    }
}

/// Conversion rate for the given response tier.
fn conversion_rate(tuning: &NightLossTuning, speed: ResponseSpeed) -> Decimal {
    match speed {
        ResponseSpeed::Instant => tuning.cvr_instant,
        ResponseSpeed::UnderThirtyMin => tuning.cvr_under_thirty_min,
        ResponseSpeed::OneToFourHours => tuning.cvr_one_to_four_hours,
        ResponseSpeed::NextDay => tuning.cvr_next_day,
        ResponseSpeed::NoFollowUp => tuning.cvr_no_follow_up,
        ResponseSpeed::Unknown => tuning.cvr_unknown,
    }
}
