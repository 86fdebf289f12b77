//! Loss audit: how much capital the business silently burns every month.
//!
//! Each spend category leaks a tunable fraction, adjusted (in percentage
//! points, order-independent) for industry, manual workload and automation
//! already in place, then a compounding penalty is applied to the total.

use crate::coerce;
use crate::engine::MetricsEngine;
use core_types::Industry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly spend figures and operating context from the intake form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LossAuditInput {
    /// Total monthly staff salary.
    pub staff_salary: Decimal,
    /// Monthly operational overheads.
    pub ops_overheads: Decimal,
    /// Monthly marketing budget.
    pub marketing_budget: Decimal,
    /// Business vertical; absent or unrecognized means no surcharge.
    pub industry: Option<Industry>,
    /// Weekly hours spent on manual repetitive work, capped at 60.
    pub manual_hours_per_week: u32,
    /// A CRM in place discounts the marketing leak.
    pub has_crm: bool,
    /// An ERP in place discounts the ops leak.
    pub has_erp: bool,
}

/// The computed burn, all values whole non-negative rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossAuditResult {
    pub staff_waste: i64,
    pub marketing_waste: i64,
    pub ops_waste: i64,
    /// Monthly base loss plus the compounding penalty.
    pub total_burn: i64,
    pub annual_burn: i64,
    /// The recoverable share of the monthly burn.
    pub saving_target: i64,
    pub five_year_cost: i64,
}

impl MetricsEngine {
    /// Computes the monthly burn audit. All-zero spend yields an all-zero
    /// result; no input can make this fail.
    pub fn loss_audit(&self, input: &LossAuditInput) -> LossAuditResult {
        let tuning = &self.tuning.loss_audit;

        let staff = coerce::money(input.staff_salary);
        let ops = coerce::money(input.ops_overheads);
        let marketing = coerce::money(input.marketing_budget);

        let mut staff_rate = tuning.staff_rate;
        let mut ops_rate = tuning.ops_rate;
        let mut marketing_rate = tuning.marketing_rate;

        match input.industry {
            Some(Industry::Retail) => staff_rate += tuning.retail_staff_surcharge,
            Some(Industry::Manufacturing) => ops_rate += tuning.manufacturing_ops_surcharge,
            Some(Industry::ECommerce) => marketing_rate += tuning.ecommerce_marketing_surcharge,
            _ => {}
        }

        let manual_hours = input.manual_hours_per_week.min(60);
        if manual_hours > tuning.heavy_manual_hours {
            staff_rate += tuning.heavy_manual_surcharge;
        } else if manual_hours >= tuning.moderate_manual_hours {
            staff_rate += tuning.moderate_manual_surcharge;
        }

        if input.has_crm {
            marketing_rate -= tuning.crm_marketing_discount;
        }
        if input.has_erp {
            ops_rate -= tuning.erp_ops_discount;
        }

        // Adjusted rates are floored at zero: automation discounts can
        // cancel a leak but never turn it into a credit.
        let staff_loss = staff * staff_rate.max(Decimal::ZERO);
        let ops_loss = ops * ops_rate.max(Decimal::ZERO);
        let marketing_loss = marketing * marketing_rate.max(Decimal::ZERO);

        let total_base_loss = staff_loss + ops_loss + marketing_loss;
        let penalty_rate = if total_base_loss > tuning.compounding_threshold {
            tuning.high_penalty_rate
        } else {
            tuning.base_penalty_rate
        };

        let total_burn = coerce::round_money(total_base_loss + total_base_loss * penalty_rate);

        LossAuditResult {
            staff_waste: coerce::round_money(staff_loss),
            marketing_waste: coerce::round_money(marketing_loss),
            ops_waste: coerce::round_money(ops_loss),
            total_burn,
            annual_burn: total_burn * 12,
            saving_target: coerce::round_money(
                Decimal::from(total_burn) * tuning.saving_target_rate,
            ),
            five_year_cost: total_burn * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn engine() -> MetricsEngine {
        MetricsEngine::with_defaults()
    }

    #[test]
    fn baseline_audit_with_default_options() {
        let result = engine().loss_audit(&LossAuditInput {
            staff_salary: dec!(300000),
            ops_overheads: dec!(200000),
            marketing_budget: dec!(50000),
            ..Default::default()
        });

        assert_eq!(result.staff_waste, 36_000);
        assert_eq!(result.ops_waste, 30_000);
        assert_eq!(result.marketing_waste, 15_000);
        // 81,000 base + 3% compounding penalty.
        assert_eq!(result.total_burn, 83_430);
        assert_eq!(result.annual_burn, 1_001_160);
        assert_eq!(result.saving_target, 58_401);
        assert_eq!(result.five_year_cost, 5_005_800);
    }

    #[test]
    fn moderate_manual_hours_raise_the_staff_rate() {
        let result = engine().loss_audit(&LossAuditInput {
            staff_salary: dec!(300000),
            manual_hours_per_week: 20,
            ..Default::default()
        });
        // 12% base + 5pp moderate tier = 17%.
        assert_eq!(result.staff_waste, 51_000);
    }

    #[test]
    fn heavy_manual_hours_raise_the_staff_rate_further() {
        let result = engine().loss_audit(&LossAuditInput {
            staff_salary: dec!(100000),
            manual_hours_per_week: 45,
            ..Default::default()
        });
        // 12% base + 10pp heavy tier = 22%.
        assert_eq!(result.staff_waste, 22_000);
    }

    #[test]
    fn industry_surcharges_apply_to_their_category() {
        let retail = engine().loss_audit(&LossAuditInput {
            staff_salary: dec!(100000),
            industry: Some(Industry::Retail),
            ..Default::default()
        });
        assert_eq!(retail.staff_waste, 15_000);

        let ecommerce = engine().loss_audit(&LossAuditInput {
            marketing_budget: dec!(100000),
            industry: Some(Industry::ECommerce),
            ..Default::default()
        });
        assert_eq!(ecommerce.marketing_waste, 40_000);
    }

    #[test]
    fn automation_discounts_reduce_their_category() {
        let result = engine().loss_audit(&LossAuditInput {
            ops_overheads: dec!(100000),
            marketing_budget: dec!(100000),
            has_crm: true,
            has_erp: true,
            ..Default::default()
        });
        // marketing 30% - 15pp, ops 15% - 10pp.
        assert_eq!(result.marketing_waste, 15_000);
        assert_eq!(result.ops_waste, 5_000);
    }

    #[test]
    fn adjusted_rates_floor_at_zero() {
        let mut tuning = configuration::MetricsTuning::default();
        tuning.loss_audit.crm_marketing_discount = dec!(0.50);
        let engine = MetricsEngine::new(tuning).unwrap();

        let result = engine.loss_audit(&LossAuditInput {
            marketing_budget: dec!(100000),
            has_crm: true,
            ..Default::default()
        });
        assert_eq!(result.marketing_waste, 0);
    }

    #[test]
    fn large_base_loss_takes_the_high_penalty() {
        let result = engine().loss_audit(&LossAuditInput {
            staff_salary: dec!(10000000),
            ..Default::default()
        });
        // 1.2M base is over the 1M threshold: 8% penalty.
        assert_eq!(result.total_burn, 1_296_000);
    }

    #[test]
    fn zero_inputs_yield_zero_outputs() {
        let result = engine().loss_audit(&LossAuditInput::default());
        assert_eq!(result, LossAuditResult {
            staff_waste: 0,
            marketing_waste: 0,
            ops_waste: 0,
            total_burn: 0,
            annual_burn: 0,
            saving_target: 0,
            five_year_cost: 0,
        });
    }

    #[test]
    fn negative_spend_coerces_to_zero() {
        let result = engine().loss_audit(&LossAuditInput {
            staff_salary: dec!(-300000),
            ..Default::default()
        });
        assert_eq!(result.total_burn, 0);
    }

    #[test]
    fn raising_staff_salary_never_lowers_the_burn() {
        let mut previous = 0;
        for staff in [0i64, 50_000, 300_000, 1_000_000, 25_000_000] {
            let result = engine().loss_audit(&LossAuditInput {
                staff_salary: Decimal::from(staff),
                ops_overheads: dec!(200000),
                marketing_budget: dec!(50000),
                ..Default::default()
            });
            assert!(result.total_burn >= previous);
            previous = result.total_burn;
        }
    }
}
