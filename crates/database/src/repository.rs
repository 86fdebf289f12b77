use crate::DbError;
use chrono::{DateTime, Utc};
use metrics::{
    AiThreatInput, AiThreatResult, ExportOpportunityInput, ExportOpportunityResult,
    LossAuditInput, LossAuditResult, NightLossInput, NightLossResult, VisibilityInput,
    VisibilityResult,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPool;
use sqlx::FromRow;
use uuid::Uuid;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

/// A captured lead, as registered from the intake flow.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub entity_name: String,
    pub location: Option<String>,
    pub business_age: i32,
    pub classification: Option<String>,
    pub scalability: Option<String>,
    pub digital_footprint: Option<String>,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload for a new lead.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBusiness {
    pub entity_name: String,
    pub location: Option<String>,
    pub business_age: i32,
    pub classification: Option<String>,
    pub scalability: Option<String>,
    pub digital_footprint: Option<String>,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
}

/// A stored loss-audit row: the submitted spend beside the computed burn.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LossAuditRow {
    pub business_id: Uuid,
    pub staff_salary: Decimal,
    pub marketing_budget: Decimal,
    pub ops_overheads: Decimal,
    pub industry: Option<String>,
    pub manual_hours_per_week: i32,
    pub has_crm: bool,
    pub has_erp: bool,
    pub staff_waste: i64,
    pub marketing_waste: i64,
    pub ops_waste: i64,
    pub total_burn: i64,
    pub annual_burn: i64,
    pub saving_target: i64,
    pub five_year_cost: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct NightLossRow {
    pub business_id: Uuid,
    pub daily_inquiries: i64,
    pub closing_time: String,
    pub profit_per_sale: Decimal,
    pub response_time: String,
    pub monthly_days: i64,
    pub night_inquiries: i64,
    pub current_revenue: i64,
    pub potential_revenue: i64,
    pub monthly_loss: i64,
    pub annual_loss: i64,
    pub hourly_loss: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AiThreatRow {
    pub business_id: Uuid,
    pub industry: String,
    pub is_omnichannel: bool,
    pub score: i64,
    pub years_left: i64,
    pub threat_level: String,
    pub timeline_desc: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VisibilityRow {
    pub business_id: Uuid,
    pub city: Option<String>,
    /// The submitted signal set, as stored JSON.
    pub signals: JsonValue,
    pub percent: i64,
    pub status: String,
    pub missed_customers: i64,
    /// The ordered gap report, as stored JSON.
    pub gaps: JsonValue,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExportRow {
    pub business_id: Uuid,
    pub product_category: String,
    pub local_price: Decimal,
    pub monthly_qty: i64,
    pub destination: String,
    pub multiplier: Decimal,
    pub local_revenue: i64,
    pub export_revenue: i64,
    pub export_cost: i64,
    pub net_profit: i64,
    pub additional_income: i64,
    pub roi_percent: i64,
    pub annual_additional: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LeadSummary {
    pub total_leads: i64,
    pub loss_audits: i64,
    pub night_losses: i64,
    pub ai_threats: i64,
    pub visibility_scans: i64,
    pub export_plans: i64,
    /// Leads currently classified KHATRA.
    pub critical_threats: i64,
    /// Sum of every captured monthly burn.
    pub total_monthly_burn: i64,
}

impl DbRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // -----------------------------------------------------------------------
    // Leads
    // -----------------------------------------------------------------------

    /// Registers a new lead and returns the stored row.
    ///
    /// Callers are expected to check `find_business_by_contact` first; a
    /// unique-constraint violation still surfaces as a query error.
    pub async fn register_business(&self, lead: &NewBusiness) -> Result<Business, DbError> {
        let business = sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses
                (entity_name, location, business_age, classification,
                 scalability, digital_footprint, owner_name, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&lead.entity_name)
        .bind(&lead.location)
        .bind(lead.business_age)
        .bind(&lead.classification)
        .bind(&lead.scalability)
        .bind(&lead.digital_footprint)
        .bind(&lead.owner_name)
        .bind(&lead.email)
        .bind(&lead.phone)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(business_id = %business.id, "Registered new lead.");
        Ok(business)
    }

    /// Looks a lead up by email or phone, used to block duplicate signups.
    pub async fn find_business_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<Business>, DbError> {
        let business = sqlx::query_as::<_, Business>(
            "SELECT * FROM businesses WHERE email = $1 OR phone = $2 LIMIT 1",
        )
        .bind(email)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(business)
    }

    pub async fn get_business(&self, id: Uuid) -> Result<Option<Business>, DbError> {
        let business =
            sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(business)
    }

    /// All captured leads, newest first.
    pub async fn list_leads(&self) -> Result<Vec<Business>, DbError> {
        let leads = sqlx::query_as::<_, Business>(
            "SELECT * FROM businesses ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(leads)
    }

    /// Aggregate per-metric completion counts for the admin dashboard.
    pub async fn lead_summary(&self) -> Result<LeadSummary, DbError> {
        let summary = sqlx::query_as::<_, LeadSummary>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM businesses)                    AS total_leads,
                (SELECT COUNT(*) FROM loss_audit_results)            AS loss_audits,
                (SELECT COUNT(*) FROM night_loss_results)            AS night_losses,
                (SELECT COUNT(*) FROM ai_threat_results)             AS ai_threats,
                (SELECT COUNT(*) FROM visibility_results)            AS visibility_scans,
                (SELECT COUNT(*) FROM export_results)                AS export_plans,
                (SELECT COUNT(*) FROM ai_threat_results
                  WHERE threat_level = 'KHATRA')                     AS critical_threats,
                (SELECT COALESCE(SUM(total_burn), 0)::BIGINT
                   FROM loss_audit_results)                          AS total_monthly_burn
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(summary)
    }

    // -----------------------------------------------------------------------
    // Persistence Gateway: save / load-latest per metric
    // -----------------------------------------------------------------------

    /// Stores a loss-audit run. History rows accumulate per business.
    pub async fn save_loss_audit(
        &self,
        business_id: Uuid,
        input: &LossAuditInput,
        result: &LossAuditResult,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO loss_audit_results
                (business_id, staff_salary, marketing_budget, ops_overheads,
                 industry, manual_hours_per_week, has_crm, has_erp,
                 staff_waste, marketing_waste, ops_waste, total_burn,
                 annual_burn, saving_target, five_year_cost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(business_id)
        .bind(input.staff_salary)
        .bind(input.marketing_budget)
        .bind(input.ops_overheads)
        .bind(input.industry.map(|industry| industry.as_key()))
        .bind(input.manual_hours_per_week as i32)
        .bind(input.has_crm)
        .bind(input.has_erp)
        .bind(result.staff_waste)
        .bind(result.marketing_waste)
        .bind(result.ops_waste)
        .bind(result.total_burn)
        .bind(result.annual_burn)
        .bind(result.saving_target)
        .bind(result.five_year_cost)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn latest_loss_audit(
        &self,
        business_id: Uuid,
    ) -> Result<Option<LossAuditRow>, DbError> {
        let row = sqlx::query_as::<_, LossAuditRow>(
            "SELECT * FROM loss_audit_results WHERE business_id = $1
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Stores a night-loss run. One live row per business.
    pub async fn save_night_loss(
        &self,
        business_id: Uuid,
        input: &NightLossInput,
        days_used: i64,
        result: &NightLossResult,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO night_loss_results
                (business_id, daily_inquiries, closing_time, profit_per_sale,
                 response_time, monthly_days, night_inquiries, current_revenue,
                 potential_revenue, monthly_loss, annual_loss, hourly_loss,
                 created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW())
            ON CONFLICT (business_id) DO UPDATE SET
                daily_inquiries = EXCLUDED.daily_inquiries,
                closing_time = EXCLUDED.closing_time,
                profit_per_sale = EXCLUDED.profit_per_sale,
                response_time = EXCLUDED.response_time,
                monthly_days = EXCLUDED.monthly_days,
                night_inquiries = EXCLUDED.night_inquiries,
                current_revenue = EXCLUDED.current_revenue,
                potential_revenue = EXCLUDED.potential_revenue,
                monthly_loss = EXCLUDED.monthly_loss,
                annual_loss = EXCLUDED.annual_loss,
                hourly_loss = EXCLUDED.hourly_loss,
                created_at = NOW()
            "#,
        )
        .bind(business_id)
        .bind(input.daily_inquiries)
        .bind(input.closing_time.as_label())
        .bind(input.profit_per_sale)
        .bind(input.response_time.as_label())
        .bind(days_used)
        .bind(result.night_inquiries)
        .bind(result.current_revenue)
        .bind(result.potential_revenue)
        .bind(result.monthly_loss)
        .bind(result.annual_loss)
        .bind(result.hourly_loss)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn latest_night_loss(
        &self,
        business_id: Uuid,
    ) -> Result<Option<NightLossRow>, DbError> {
        let row = sqlx::query_as::<_, NightLossRow>(
            "SELECT * FROM night_loss_results WHERE business_id = $1
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Stores an AI-threat run. One live row per business.
    pub async fn save_ai_threat(
        &self,
        business_id: Uuid,
        input: &AiThreatInput,
        result: &AiThreatResult,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO ai_threat_results
                (business_id, industry, is_omnichannel, score, years_left,
                 threat_level, timeline_desc, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (business_id) DO UPDATE SET
                industry = EXCLUDED.industry,
                is_omnichannel = EXCLUDED.is_omnichannel,
                score = EXCLUDED.score,
                years_left = EXCLUDED.years_left,
                threat_level = EXCLUDED.threat_level,
                timeline_desc = EXCLUDED.timeline_desc,
                created_at = NOW()
            "#,
        )
        .bind(business_id)
        .bind(&input.industry)
        .bind(input.is_omnichannel)
        .bind(result.score)
        .bind(result.years_left)
        .bind(result.threat_level.as_str())
        .bind(&result.timeline_desc)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn latest_ai_threat(
        &self,
        business_id: Uuid,
    ) -> Result<Option<AiThreatRow>, DbError> {
        let row = sqlx::query_as::<_, AiThreatRow>(
            "SELECT * FROM ai_threat_results WHERE business_id = $1
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Stores a visibility scan. History rows accumulate per business.
    pub async fn save_visibility(
        &self,
        business_id: Uuid,
        input: &VisibilityInput,
        result: &VisibilityResult,
    ) -> Result<(), DbError> {
        let signals = serde_json::to_value(&input.signals)?;
        let gaps = serde_json::to_value(&result.gaps)?;

        sqlx::query(
            r#"
            INSERT INTO visibility_results
                (business_id, city, signals, percent, status,
                 missed_customers, gaps)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(business_id)
        .bind(&input.city)
        .bind(signals)
        .bind(result.percent)
        .bind(result.status.as_str())
        .bind(result.missed_customers)
        .bind(gaps)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn latest_visibility(
        &self,
        business_id: Uuid,
    ) -> Result<Option<VisibilityRow>, DbError> {
        let row = sqlx::query_as::<_, VisibilityRow>(
            "SELECT * FROM visibility_results WHERE business_id = $1
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Stores an export-opportunity run. History rows accumulate per business.
    pub async fn save_export(
        &self,
        business_id: Uuid,
        input: &ExportOpportunityInput,
        result: &ExportOpportunityResult,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO export_results
                (business_id, product_category, local_price, monthly_qty,
                 destination, multiplier, local_revenue, export_revenue,
                 export_cost, net_profit, additional_income, roi_percent,
                 annual_additional)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(business_id)
        .bind(input.product_category.as_key())
        .bind(input.local_unit_price)
        .bind(input.monthly_quantity)
        .bind(input.destination.as_label())
        .bind(result.multiplier)
        .bind(result.local_revenue)
        .bind(result.export_revenue)
        .bind(result.export_cost)
        .bind(result.net_export_profit)
        .bind(result.additional_income)
        .bind(result.roi_percent)
        .bind(result.annual_additional)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn latest_export(
        &self,
        business_id: Uuid,
    ) -> Result<Option<ExportRow>, DbError> {
        let row = sqlx::query_as::<_, ExportRow>(
            "SELECT * FROM export_results WHERE business_id = $1
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
