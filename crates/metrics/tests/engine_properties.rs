//! Cross-cutting properties of the metrics engine: every monetary output is
//! a non-negative integer, scores stay in range under pathological input,
//! and repeated calls are bit-identical.

use core_types::{ClosingTime, ExportCategory, ExportDestination, ResponseSpeed, VisibilitySignal};
use metrics::{
    AiThreatInput, ExportOpportunityInput, LossAuditInput, MetricsEngine, NightLossInput,
    VisibilityInput,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn engine() -> MetricsEngine {
    MetricsEngine::with_defaults()
}

// ---------------------------------------------------------------------------
// Input fixtures
// ---------------------------------------------------------------------------

/// A spread of spend profiles, from empty to pathological.
fn loss_audit_inputs() -> Vec<LossAuditInput> {
    vec![
        LossAuditInput::default(),
        LossAuditInput {
            staff_salary: dec!(300000),
            ops_overheads: dec!(200000),
            marketing_budget: dec!(50000),
            ..Default::default()
        },
        LossAuditInput {
            staff_salary: dec!(-99999),
            ops_overheads: dec!(0.01),
            marketing_budget: dec!(123456.78),
            manual_hours_per_week: 200,
            has_crm: true,
            has_erp: true,
            ..Default::default()
        },
        LossAuditInput {
            staff_salary: dec!(50000000),
            ..Default::default()
        },
    ]
}

fn night_loss_inputs() -> Vec<NightLossInput> {
    vec![
        NightLossInput::default(),
        NightLossInput {
            daily_inquiries: 20,
            closing_time: ClosingTime::EightPm,
            profit_per_sale: dec!(1000),
            response_time: ResponseSpeed::NoFollowUp,
            monthly_operating_days: None,
        },
        NightLossInput {
            daily_inquiries: -50,
            closing_time: ClosingTime::SixPm,
            profit_per_sale: dec!(-2500),
            response_time: ResponseSpeed::Unknown,
            monthly_operating_days: Some(-3),
        },
    ]
}

fn export_inputs() -> Vec<ExportOpportunityInput> {
    vec![
        ExportOpportunityInput::default(),
        ExportOpportunityInput {
            local_unit_price: dec!(100),
            monthly_quantity: 100,
            product_category: ExportCategory::Jewelry,
            destination: ExportDestination::Japan,
        },
        ExportOpportunityInput {
            local_unit_price: dec!(-7),
            monthly_quantity: -12,
            product_category: ExportCategory::Other,
            destination: ExportDestination::Other,
        },
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn monetary_outputs_are_never_negative() {
    let engine = engine();

    for input in loss_audit_inputs() {
        let result = engine.loss_audit(&input);
        for amount in [
            result.staff_waste,
            result.marketing_waste,
            result.ops_waste,
            result.total_burn,
            result.annual_burn,
            result.saving_target,
            result.five_year_cost,
        ] {
            assert!(amount >= 0, "negative output for {input:?}");
        }
    }

    for input in night_loss_inputs() {
        let result = engine.night_loss(&input);
        for amount in [
            result.current_revenue,
            result.potential_revenue,
            result.monthly_loss,
            result.annual_loss,
            result.hourly_loss,
        ] {
            assert!(amount >= 0, "negative output for {input:?}");
        }
        assert!(result.night_inquiries >= 0);
    }

    for input in export_inputs() {
        let result = engine.export_opportunity(&input);
        for amount in [
            result.local_revenue,
            result.export_revenue,
            result.export_cost,
            result.net_export_profit,
            result.additional_income,
            result.annual_additional,
        ] {
            assert!(amount >= 0, "negative output for {input:?}");
        }
    }
}

#[test]
fn scores_stay_in_range_under_pathological_input() {
    let engine = engine();

    for (industry, omni) in [
        ("it_services", false),
        ("hospitality", true),
        ("", false),
        ("   \t  ", true),
        ("DEFINITELY NOT AN INDUSTRY!!!", false),
    ] {
        let result = engine.ai_threat(&AiThreatInput {
            industry: industry.to_string(),
            is_omnichannel: omni,
        });
        assert!((0..=100).contains(&result.score));
        assert!(result.years_left >= 1);
    }

    let empty = engine.visibility(&VisibilityInput::default());
    assert!((0..=100).contains(&empty.percent));
    assert!(empty.missed_customers >= 0);

    let full = engine.visibility(&VisibilityInput {
        signals: VisibilitySignal::ALL.into_iter().collect(),
        city: Some("Pune".to_string()),
    });
    assert_eq!(full.percent, 100);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let engine = engine();

    let loss_input = LossAuditInput {
        staff_salary: dec!(317000),
        ops_overheads: dec!(88123),
        marketing_budget: dec!(41999),
        manual_hours_per_week: 22,
        has_crm: true,
        ..Default::default()
    };
    assert_eq!(engine.loss_audit(&loss_input), engine.loss_audit(&loss_input));

    let night_input = NightLossInput {
        daily_inquiries: 33,
        closing_time: ClosingTime::TenPm,
        profit_per_sale: dec!(4750),
        response_time: ResponseSpeed::OneToFourHours,
        monthly_operating_days: Some(24),
    };
    assert_eq!(engine.night_loss(&night_input), engine.night_loss(&night_input));

    let visibility_input = VisibilityInput {
        signals: [VisibilitySignal::Website, VisibilitySignal::Ads]
            .into_iter()
            .collect(),
        city: None,
    };
    assert_eq!(
        engine.visibility(&visibility_input),
        engine.visibility(&visibility_input)
    );

    let export_input = ExportOpportunityInput {
        local_unit_price: dec!(999.99),
        monthly_quantity: 73,
        product_category: ExportCategory::Handicrafts,
        destination: ExportDestination::Australia,
    };
    assert_eq!(
        engine.export_opportunity(&export_input),
        engine.export_opportunity(&export_input)
    );
}

#[test]
fn burn_is_monotonic_in_staff_salary() {
    let engine = engine();
    let mut previous = 0;
    for staff in (0..=20).map(|step| Decimal::from(step * 250_000)) {
        let result = engine.loss_audit(&LossAuditInput {
            staff_salary: staff,
            ops_overheads: dec!(40000),
            marketing_budget: dec!(60000),
            manual_hours_per_week: 35,
            ..Default::default()
        });
        assert!(result.total_burn >= previous);
        previous = result.total_burn;
    }
}

#[test]
fn input_records_decode_from_form_payloads() {
    // Wire payloads use the catalogue labels; unknown labels coerce instead
    // of failing.
    let input: NightLossInput = serde_json::from_str(
        r#"{
            "daily_inquiries": 20,
            "closing_time": "6pm",
            "profit_per_sale": "1500",
            "response_time": "<30min"
        }"#,
    )
    .unwrap();
    assert_eq!(input.closing_time, ClosingTime::SixPm);
    assert_eq!(input.response_time, ResponseSpeed::UnderThirtyMin);
    assert_eq!(input.monthly_operating_days, None);

    let coerced: NightLossInput = serde_json::from_str(
        r#"{"closing_time": "3am", "response_time": "telegram"}"#,
    )
    .unwrap();
    assert_eq!(coerced.closing_time, ClosingTime::EightPm);
    assert_eq!(coerced.response_time, ResponseSpeed::Unknown);

    let visibility: VisibilityInput = serde_json::from_str(
        r#"{"signals": ["website", "gmb"], "city": "Indore"}"#,
    )
    .unwrap();
    assert_eq!(visibility.signals.len(), 2);
    assert!(visibility.signals.contains(&VisibilitySignal::GoogleListing));
}
