//! Export opportunity: what current local sales would earn in an export
//! market.
//!
//! The destination tier sets a price multiplier over local revenue; a flat
//! cost fraction covers freight, customs and packaging. The product category
//! is recorded for display but does not move the multiplier.

use crate::coerce;
use crate::engine::MetricsEngine;
use core_types::{ExportCategory, ExportDestination};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current local sales figures and the target market.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOpportunityInput {
    /// Local selling price per unit.
    pub local_unit_price: Decimal,
    /// Units sold per month.
    pub monthly_quantity: i64,
    pub product_category: ExportCategory,
    pub destination: ExportDestination,
}

impl Default for ExportOpportunityInput {
    fn default() -> Self {
        Self {
            local_unit_price: Decimal::ZERO,
            monthly_quantity: 0,
            product_category: ExportCategory::Other,
            destination: ExportDestination::Other,
        }
    }
}

/// The computed export upside, monetary values whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOpportunityResult {
    /// Price multiplier for the destination tier.
    pub multiplier: Decimal,
    pub local_revenue: i64,
    pub export_revenue: i64,
    /// Freight, customs and packaging, as a share of export revenue.
    pub export_cost: i64,
    pub net_export_profit: i64,
    /// Net export profit over and above current local revenue.
    pub additional_income: i64,
    /// Additional income over local revenue, 0 when there is no local
    /// revenue to compare against.
    pub roi_percent: i64,
    pub annual_additional: i64,
}

impl MetricsEngine {
    pub fn export_opportunity(&self, input: &ExportOpportunityInput) -> ExportOpportunityResult {
        let tuning = &self.tuning.export;

        let price = coerce::money(input.local_unit_price);
        let quantity = coerce::count(input.monthly_quantity);
        let local_revenue = price * Decimal::from(quantity);

        let multiplier = match input.destination {
            ExportDestination::Usa | ExportDestination::Uk | ExportDestination::Australia => {
                tuning.premium_multiplier
            }
            ExportDestination::Germany | ExportDestination::Japan => tuning.top_multiplier,
            ExportDestination::Uae | ExportDestination::Singapore => tuning.regional_multiplier,
            ExportDestination::Other => tuning.default_multiplier,
        };

        let export_revenue = local_revenue * multiplier;
        let export_cost = export_revenue * tuning.cost_fraction;
        let net_export_profit = export_revenue - export_cost;
        let additional = net_export_profit - local_revenue;

        let roi_percent = if local_revenue.is_zero() {
            0
        } else {
            coerce::round_money(additional / local_revenue * Decimal::ONE_HUNDRED)
        };

        let additional_income = coerce::round_money(additional);

        ExportOpportunityResult {
            multiplier,
            local_revenue: coerce::round_money(local_revenue),
            export_revenue: coerce::round_money(export_revenue),
            export_cost: coerce::round_money(export_cost),
            net_export_profit: coerce::round_money(net_export_profit),
            additional_income,
            roi_percent,
            annual_additional: additional_income * 12,
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
    fn regional_destination_at_the_three_x_tier() {
        let result = engine().export_opportunity(&ExportOpportunityInput {
            local_unit_price: dec!(100),
            monthly_quantity: 100,
            product_category: ExportCategory::Spices,
            destination: ExportDestination::Uae,
        });

        assert_eq!(result.multiplier, dec!(3.0));
        assert_eq!(result.local_revenue, 10_000);
        assert_eq!(result.export_revenue, 30_000);
        assert_eq!(result.export_cost, 6_000);
        assert_eq!(result.net_export_profit, 24_000);
        assert_eq!(result.additional_income, 14_000);
        assert_eq!(result.roi_percent, 140);
        assert_eq!(result.annual_additional, 168_000);
    }

    #[test]
    fn destination_tiers_pick_their_multiplier() {
        let multiplier_for = |destination| {
            engine()
                .export_opportunity(&ExportOpportunityInput {
                    local_unit_price: dec!(10),
                    monthly_quantity: 1,
                    destination,
                    ..Default::default()
                })
                .multiplier
        };
        assert_eq!(multiplier_for(ExportDestination::Usa), dec!(4.5));
        assert_eq!(multiplier_for(ExportDestination::Germany), dec!(5.0));
        assert_eq!(multiplier_for(ExportDestination::Singapore), dec!(3.0));
        assert_eq!(multiplier_for(ExportDestination::Other), dec!(2.5));
    }

    #[test]
    fn category_does_not_move_the_numbers() {
        let base = ExportOpportunityInput {
            local_unit_price: dec!(250),
            monthly_quantity: 40,
            product_category: ExportCategory::Textiles,
            destination: ExportDestination::Uk,
        };
        let textiles = engine().export_opportunity(&base);
        let software = engine().export_opportunity(&ExportOpportunityInput {
            product_category: ExportCategory::Software,
            ..base
        });
        assert_eq!(textiles, software);
    }

    #[test]
    fn zero_local_revenue_means_zero_roi() {
        let no_quantity = engine().export_opportunity(&ExportOpportunityInput {
            local_unit_price: dec!(100),
            monthly_quantity: 0,
            ..Default::default()
        });
        assert_eq!(no_quantity.local_revenue, 0);
        assert_eq!(no_quantity.roi_percent, 0);
        assert_eq!(no_quantity.annual_additional, 0);

        let no_price = engine().export_opportunity(&ExportOpportunityInput {
            monthly_quantity: 500,
            ..Default::default()
        });
        assert_eq!(no_price.local_revenue, 0);
        assert_eq!(no_price.roi_percent, 0);
    }

    #[test]
    fn negative_inputs_coerce_to_zero() {
        let result = engine().export_opportunity(&ExportOpportunityInput {
            local_unit_price: dec!(-100),
            monthly_quantity: -5,
            ..Default::default()
        });
        assert_eq!(result.local_revenue, 0);
        assert_eq!(result.export_revenue, 0);
        assert_eq!(result.additional_income, 0);
    }
}
