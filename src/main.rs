use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use configuration::Config;
use core_types::{
    format_inr_full, ClosingTime, ExportCategory, ExportDestination, Industry, ResponseSpeed,
    VisibilitySignal,
};
use metrics::{
    AiThreatInput, ExportOpportunityInput, LossAuditInput, MetricsEngine, NightLossInput,
    VisibilityInput,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Masterkey metrics platform.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = configuration::load_config()?;

    match cli.command {
        Commands::Serve(args) => handle_serve(args, config).await,
        Commands::Calc(args) => handle_calc(args, config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Lead-diagnostics platform: business-metric calculators, lead capture API
/// and admin aggregation.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Run a calculator offline and print the result.
    Calc(CalcArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args)]
struct CalcArgs {
    #[command(subcommand)]
    metric: MetricCommand,

    /// Print the raw result record as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum MetricCommand {
    /// Monthly operational waste across staff, ops and marketing spend.
    LossAudit {
        /// Monthly staff salary total.
        #[arg(long, default_value = "0")]
        staff: Decimal,
        /// Monthly operational overheads.
        #[arg(long, default_value = "0")]
        ops: Decimal,
        /// Monthly marketing budget.
        #[arg(long, default_value = "0")]
        marketing: Decimal,
        /// Business vertical (e.g. "retail", "e-commerce").
        #[arg(long)]
        industry: Option<String>,
        /// Weekly hours of manual repetitive work.
        #[arg(long, default_value_t = 0)]
        manual_hours: u32,
        #[arg(long)]
        has_crm: bool,
        #[arg(long)]
        has_erp: bool,
    },
    /// Revenue missed on after-hours inquiries.
    NightLoss {
        #[arg(long, default_value_t = 0)]
        daily_inquiries: i64,
        /// Closing tier: 6pm, 8pm or 10pm.
        #[arg(long, default_value = "8pm")]
        closing: String,
        #[arg(long, default_value = "0")]
        profit_per_sale: Decimal,
        /// Response tier: instant, <30min, 1-4hrs, nextday or none.
        #[arg(long, default_value = "none")]
        response: String,
        /// Operating days per month.
        #[arg(long)]
        days: Option<i64>,
    },
    /// AI-disruption threat score for an industry.
    AiThreat {
        #[arg(long)]
        industry: String,
        #[arg(long)]
        omnichannel: bool,
    },
    /// Digital-visibility score from present signals.
    Visibility {
        /// Comma-separated signal ids (website, google_listing, social,
        /// seo, ads, crm, whatsapp_automation).
        #[arg(long, value_delimiter = ',')]
        signals: Vec<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Export-market upside for current local sales.
    Export {
        #[arg(long, default_value = "0")]
        unit_price: Decimal,
        #[arg(long, default_value_t = 0)]
        quantity: i64,
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long, default_value = "Other")]
        destination: String,
    },
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    web_server::run_server(addr, config).await
}

fn handle_calc(args: CalcArgs, config: Config) -> anyhow::Result<()> {
    let engine = MetricsEngine::new(config.metrics)?;

    match args.metric {
        MetricCommand::LossAudit {
            staff,
            ops,
            marketing,
            industry,
            manual_hours,
            has_crm,
            has_erp,
        } => {
            let result = engine.loss_audit(&LossAuditInput {
                staff_salary: staff,
                ops_overheads: ops,
                marketing_budget: marketing,
                industry: industry.as_deref().map(Industry::from_label),
                manual_hours_per_week: manual_hours,
                has_crm,
                has_erp,
            });
            emit(args.json, &result, |result| {
                let mut table = result_table();
                table
                    .add_row(["Staff waste".to_string(), format_inr_full(result.staff_waste)])
                    .add_row(["Ops waste".to_string(), format_inr_full(result.ops_waste)])
                    .add_row(["Marketing waste".to_string(), format_inr_full(result.marketing_waste)])
                    .add_row(["Total monthly burn".to_string(), format_inr_full(result.total_burn)])
                    .add_row(["Annual burn".to_string(), format_inr_full(result.annual_burn)])
                    .add_row(["Saving target".to_string(), format_inr_full(result.saving_target)])
                    .add_row(["Five-year cost".to_string(), format_inr_full(result.five_year_cost)]);
                table
            })
        }
        MetricCommand::NightLoss {
            daily_inquiries,
            closing,
            profit_per_sale,
            response,
            days,
        } => {
            let result = engine.night_loss(&NightLossInput {
                daily_inquiries,
                closing_time: ClosingTime::from_label(&closing),
                profit_per_sale,
                response_time: ResponseSpeed::from_label(&response),
                monthly_operating_days: days,
            });
            emit(args.json, &result, |result| {
                let mut table = result_table();
                table
                    .add_row(["Night inquiries / month".to_string(), result.night_inquiries.to_string()])
                    .add_row(["Current revenue".to_string(), format_inr_full(result.current_revenue)])
                    .add_row(["Potential revenue".to_string(), format_inr_full(result.potential_revenue)])
                    .add_row(["Monthly loss".to_string(), format_inr_full(result.monthly_loss)])
                    .add_row(["Annual loss".to_string(), format_inr_full(result.annual_loss)])
                    .add_row(["Loss per closed hour".to_string(), format_inr_full(result.hourly_loss)]);
                table
            })
        }
        MetricCommand::AiThreat {
            industry,
            omnichannel,
        } => {
            let result = engine.ai_threat(&AiThreatInput {
                industry,
                is_omnichannel: omnichannel,
            });
            emit(args.json, &result, |result| {
                let mut table = result_table();
                table
                    .add_row(["Score".to_string(), format!("{}/100", result.score)])
                    .add_row(["Threat level".to_string(), result.threat_level.as_str().to_string()])
                    .add_row(["Years left".to_string(), result.years_left.to_string()])
                    .add_row(["Timeline".to_string(), result.timeline_desc.clone()]);
                table
            })
        }
        MetricCommand::Visibility { signals, city } => {
            let signals = signals
                .iter()
                .filter_map(|raw| VisibilitySignal::from_label(raw))
                .collect();
            let result = engine.visibility(&VisibilityInput { signals, city });
            emit(args.json, &result, |result| {
                let mut table = result_table();
                table
                    .add_row(["Visibility".to_string(), format!("{}%", result.percent)])
                    .add_row(["Status".to_string(), result.status.as_str().to_string()])
                    .add_row(["Missed customers / month".to_string(), result.missed_customers.to_string()]);
                for gap in &result.gaps {
                    table.add_row([
                        format!("Missing: {}", gap.label),
                        format!("+{} pts", gap.points_lost),
                    ]);
                }
                table
            })
        }
        MetricCommand::Export {
            unit_price,
            quantity,
            category,
            destination,
        } => {
            let result = engine.export_opportunity(&ExportOpportunityInput {
                local_unit_price: unit_price,
                monthly_quantity: quantity,
                product_category: ExportCategory::from_label(&category),
                destination: ExportDestination::from_label(&destination),
            });
            emit(args.json, &result, |result| {
                let mut table = result_table();
                table
                    .add_row(["Multiplier".to_string(), format!("{}x", result.multiplier)])
                    .add_row(["Local revenue".to_string(), format_inr_full(result.local_revenue)])
                    .add_row(["Export revenue".to_string(), format_inr_full(result.export_revenue)])
                    .add_row(["Export cost".to_string(), format_inr_full(result.export_cost)])
                    .add_row(["Net export profit".to_string(), format_inr_full(result.net_export_profit)])
                    .add_row(["Additional income".to_string(), format_inr_full(result.additional_income)])
                    .add_row(["ROI".to_string(), format!("{}%", result.roi_percent)])
                    .add_row(["Annual additional".to_string(), format_inr_full(result.annual_additional)]);
                table
            })
        }
    }
}

/// Prints a result either as JSON or as the given table rendering.
fn emit<T: Serialize>(
    json: bool,
    result: &T,
    render: impl FnOnce(&T) -> Table,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", render(result));
    }
    Ok(())
}

fn result_table() -> Table {
    let mut table = Table::new();
    table.set_header(["Metric", "Value"]);
    table
}
