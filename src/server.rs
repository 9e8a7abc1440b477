//! Web server exposing the planning engine as a JSON API.
//!
//! Every endpoint is a pure function of its request body; the server keeps
//! no state between requests.

use std::net::SocketAddr;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::attempts::project_attempts;
use crate::domain::{
    Attempt, AttemptSlot, DynamicWarmupSettings, Lift, ScoringFormula, WarmupPlan, WarmupStrategy,
    parse_gender,
};
use crate::error::InputError;
use crate::formulas::calculate_score;
use crate::gameday::{AttemptStatus, GameDayLift, current_total};
use crate::plan::{CompetitionPlan, PlanSummary};
use crate::plates::{
    DisplayPlate, DisplaySize, MAX_TOTAL_KG, plates_for_display, resolve_plates,
};
use crate::warmups::generate_warmups;

/// Input errors become 422 responses with a JSON message.
pub struct ApiError(InputError);

impl From<InputError> for ApiError {
    fn from(e: InputError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

// === Request / Response Types ===

#[derive(Deserialize)]
pub struct AttemptsRequest {
    pub lift: Lift,
    pub attempts: Attempt,
}

#[derive(Deserialize)]
pub struct WarmupsRequest {
    pub lift: Lift,
    pub opener: String,
    #[serde(default)]
    pub strategy: WarmupStrategy,
    #[serde(default)]
    pub settings: DynamicWarmupSettings,
}

#[derive(Deserialize)]
pub struct PlatesRequest {
    pub total: f64,
    #[serde(default)]
    pub collars: bool,
    #[serde(default)]
    pub size: DisplaySize,
}

#[derive(Serialize)]
pub struct PlatesResponse {
    pub status: &'static str,
    pub text: String,
    pub plates: Vec<DisplayPlate>,
    pub loaded_weight: Option<f64>,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub total: f64,
    pub bodyweight: f64,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub formula: ScoringFormula,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub formula: ScoringFormula,
    pub score: f64,
}

#[derive(Serialize)]
pub struct PlanResponse {
    pub plan: CompetitionPlan,
    pub summary: PlanSummary,
    pub errors: Vec<String>,
}

#[derive(Deserialize)]
pub struct AttemptStatusRequest {
    pub lift: GameDayLift,
    pub attempt: String,
    pub status: AttemptStatus,
    /// Weight change made at the table before the attempt.
    #[serde(default)]
    pub weight: Option<String>,
}

#[derive(Deserialize)]
pub struct WarmupToggleRequest {
    pub lift: GameDayLift,
    pub index: usize,
}

#[derive(Deserialize)]
pub struct GameDayTotalRequest {
    pub lifts: Vec<GameDayLift>,
    #[serde(default)]
    pub bodyweight: f64,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub formula: ScoringFormula,
}

#[derive(Serialize)]
pub struct GameDayResponse {
    pub total: f64,
    pub score: f64,
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/attempts", post(post_attempts))
        .route("/api/warmups", post(post_warmups))
        .route("/api/plates", post(post_plates))
        .route("/api/score", post(post_score))
        .route("/api/plan", post(post_plan))
        .route("/api/gameday/start", post(post_gameday_start))
        .route("/api/gameday/attempt", post(post_gameday_attempt))
        .route("/api/gameday/warmup", post(post_gameday_warmup))
        .route("/api/gameday/total", post(post_gameday_total))
}

/// Runs the web server.
pub async fn run_server(port: u16) -> anyhow::Result<()> {
    let app = create_router();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("Server running at http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// === API Handlers ===

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// POST /api/attempts - Project the missing attempts.
async fn post_attempts(Json(req): Json<AttemptsRequest>) -> Result<Json<Attempt>, ApiError> {
    Ok(Json(project_attempts(req.lift, &req.attempts)?))
}

/// POST /api/warmups - Generate the eight warm-up slots.
async fn post_warmups(Json(req): Json<WarmupsRequest>) -> Result<Json<WarmupPlan>, ApiError> {
    let plan = generate_warmups(req.lift, &req.opener, req.strategy, &req.settings)?;
    Ok(Json(plan))
}

/// POST /api/plates - Resolve a bar total into plates.
async fn post_plates(Json(req): Json<PlatesRequest>) -> Result<Json<PlatesResponse>, ApiError> {
    if req.total > MAX_TOTAL_KG {
        return Err(InputError::TooHeavy(req.total).into());
    }

    let load = resolve_plates(req.total, req.collars);

    Ok(Json(PlatesResponse {
        status: load.status(),
        text: load.to_string(),
        plates: plates_for_display(req.total, req.collars, req.size),
        loaded_weight: load.loaded_weight(),
    }))
}

/// POST /api/score - Score a total.
async fn post_score(Json(req): Json<ScoreRequest>) -> Result<Json<ScoreResponse>, ApiError> {
    let gender = parse_gender(&req.gender)?;
    Ok(Json(ScoreResponse {
        formula: req.formula,
        score: calculate_score(req.total, req.bodyweight, gender, req.formula),
    }))
}

/// POST /api/plan - Fill in a competition plan and summarize it.
async fn post_plan(Json(mut plan): Json<CompetitionPlan>) -> Json<PlanResponse> {
    let errors = plan
        .fill_in()
        .into_iter()
        .map(|(lift, e)| format!("{}: {}", lift, e))
        .collect();
    let summary = plan.summary(Local::now().date_naive());

    Json(PlanResponse {
        plan,
        summary,
        errors,
    })
}

/// POST /api/gameday/start - Game-day state for every lift of a plan.
async fn post_gameday_start(Json(plan): Json<CompetitionPlan>) -> Json<Vec<GameDayLift>> {
    let lifts = Lift::all()
        .iter()
        .map(|lift| GameDayLift::from_plan(*lift, plan.lifts.get(*lift)))
        .collect();
    Json(lifts)
}

/// POST /api/gameday/attempt - Record an attempt outcome.
async fn post_gameday_attempt(
    Json(req): Json<AttemptStatusRequest>,
) -> Result<Json<GameDayLift>, ApiError> {
    let slot: AttemptSlot = req.attempt.parse()?;
    let mut lift = req.lift;
    if let Some(weight) = req.weight {
        lift.set_attempt_weight(slot, &weight);
    }
    lift.set_attempt_status(slot, req.status);
    Ok(Json(lift))
}

/// POST /api/gameday/warmup - Check off a warm-up set.
async fn post_gameday_warmup(
    Json(req): Json<WarmupToggleRequest>,
) -> Result<Json<GameDayLift>, ApiError> {
    let mut lift = req.lift;
    lift.toggle_warmup(req.index)?;
    Ok(Json(lift))
}

/// POST /api/gameday/total - Running total and score from attempt outcomes.
async fn post_gameday_total(
    Json(req): Json<GameDayTotalRequest>,
) -> Result<Json<GameDayResponse>, ApiError> {
    let gender = parse_gender(&req.gender)?;
    let total = current_total(&req.lifts);
    Ok(Json(GameDayResponse {
        total,
        score: calculate_score(total, req.bodyweight, gender, req.formula),
    }))
}
