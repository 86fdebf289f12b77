use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use database::{
    AiThreatRow, Business, ExportRow, LeadSummary, LossAuditRow, NewBusiness, NightLossRow,
    VisibilityRow,
};
use metrics::{
    AiThreatInput, AiThreatResult, ExportOpportunityInput, ExportOpportunityResult,
    LossAuditInput, LossAuditResult, NightLossInput, NightLossResult, VisibilityInput,
    VisibilityResult,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// A calculator request: the input record, optionally tied to a captured
/// lead. Without a business id the result is computed but not persisted
/// (the pre-signup teaser flow).
#[derive(Debug, Deserialize)]
pub struct MetricRequest<T> {
    #[serde(default)]
    pub business_id: Option<Uuid>,
    #[serde(flatten)]
    pub input: T,
}

// ---------------------------------------------------------------------------
// Lead capture
// ---------------------------------------------------------------------------

/// # POST /api/businesses
///
/// Registers a lead. A previously seen email or phone yields 409 carrying
/// the existing business id so the client can offer a login instead.
pub async fn register_business(
    State(state): State<Arc<AppState>>,
    Json(lead): Json<NewBusiness>,
) -> Result<Json<Business>, AppError> {
    if let Some(existing) = state
        .repo
        .find_business_by_contact(&lead.email, &lead.phone)
        .await?
    {
        return Err(AppError::DuplicateContact {
            existing_id: existing.id,
        });
    }

    let business = state.repo.register_business(&lead).await?;
    Ok(Json(business))
}

/// # GET /api/businesses/:business_id
pub async fn get_business(
    Path(business_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Business>, AppError> {
    state
        .repo
        .get_business(business_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No business with id {business_id}")))
}

// ---------------------------------------------------------------------------
// Calculators
// ---------------------------------------------------------------------------

/// # POST /api/metrics/loss-audit
pub async fn run_loss_audit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MetricRequest<LossAuditInput>>,
) -> Result<Json<LossAuditResult>, AppError> {
    let result = state.engine.loss_audit(&request.input);
    if let Some(business_id) = request.business_id {
        state
            .repo
            .save_loss_audit(business_id, &request.input, &result)
            .await?;
    }
    Ok(Json(result))
}

/// # GET /api/metrics/loss-audit/:business_id
pub async fn latest_loss_audit(
    Path(business_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<LossAuditRow>, AppError> {
    state
        .repo
        .latest_loss_audit(business_id)
        .await?
        .map(Json)
        .ok_or_else(|| no_result("loss audit", business_id))
}

/// # POST /api/metrics/night-loss
pub async fn run_night_loss(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MetricRequest<NightLossInput>>,
) -> Result<Json<NightLossResult>, AppError> {
    let result = state.engine.night_loss(&request.input);
    if let Some(business_id) = request.business_id {
        let days_used = request
            .input
            .monthly_operating_days
            .unwrap_or(state.engine.tuning().night_loss.default_operating_days);
        state
            .repo
            .save_night_loss(business_id, &request.input, days_used, &result)
            .await?;
    }
    Ok(Json(result))
}

/// # GET /api/metrics/night-loss/:business_id
pub async fn latest_night_loss(
    Path(business_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NightLossRow>, AppError> {
    state
        .repo
        .latest_night_loss(business_id)
        .await?
        .map(Json)
        .ok_or_else(|| no_result("night loss", business_id))
}

/// # POST /api/metrics/ai-threat
pub async fn run_ai_threat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MetricRequest<AiThreatInput>>,
) -> Result<Json<AiThreatResult>, AppError> {
    let result = state.engine.ai_threat(&request.input);
    if let Some(business_id) = request.business_id {
        state
            .repo
            .save_ai_threat(business_id, &request.input, &result)
            .await?;
    }
    Ok(Json(result))
}

/// # GET /api/metrics/ai-threat/:business_id
pub async fn latest_ai_threat(
    Path(business_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AiThreatRow>, AppError> {
    state
        .repo
        .latest_ai_threat(business_id)
        .await?
        .map(Json)
        .ok_or_else(|| no_result("AI threat", business_id))
}

/// # POST /api/metrics/visibility
pub async fn run_visibility(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MetricRequest<VisibilityInput>>,
) -> Result<Json<VisibilityResult>, AppError> {
    let result = state.engine.visibility(&request.input);
    if let Some(business_id) = request.business_id {
        state
            .repo
            .save_visibility(business_id, &request.input, &result)
            .await?;
    }
    Ok(Json(result))
}

/// # GET /api/metrics/visibility/:business_id
pub async fn latest_visibility(
    Path(business_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<VisibilityRow>, AppError> {
    state
        .repo
        .latest_visibility(business_id)
        .await?
        .map(Json)
        .ok_or_else(|| no_result("visibility", business_id))
}

/// # POST /api/metrics/export
pub async fn run_export(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MetricRequest<ExportOpportunityInput>>,
) -> Result<Json<ExportOpportunityResult>, AppError> {
    let result = state.engine.export_opportunity(&request.input);
    if let Some(business_id) = request.business_id {
        state
            .repo
            .save_export(business_id, &request.input, &result)
            .await?;
    }
    Ok(Json(result))
}

/// # GET /api/metrics/export/:business_id
pub async fn latest_export(
    Path(business_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExportRow>, AppError> {
    state
        .repo
        .latest_export(business_id)
        .await?
        .map(Json)
        .ok_or_else(|| no_result("export opportunity", business_id))
}

// ---------------------------------------------------------------------------
// Admin aggregation
// ---------------------------------------------------------------------------

/// # GET /api/admin/leads
/// All captured leads, newest first.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Business>>, AppError> {
    let leads = state.repo.list_leads().await?;
    Ok(Json(leads))
}

/// # GET /api/admin/summary
/// Per-metric completion counts and the aggregate captured burn.
pub async fn lead_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeadSummary>, AppError> {
    let summary = state.repo.lead_summary().await?;
    Ok(Json(summary))
}

fn no_result(metric: &str, business_id: Uuid) -> AppError {
    AppError::NotFound(format!(
        "No stored {metric} result for business {business_id}"
    ))
}
