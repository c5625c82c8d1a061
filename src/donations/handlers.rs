use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    donations::{
        dto::{CountResponse, DonationRequest, DonationResponse},
        eligibility::check_eligibility,
        repo_types::Donation,
    },
    error::ApiError,
    state::AppState,
};

const RECENT_WINDOW_DAYS: i64 = 7;
const RECENT_LIMIT: i64 = 20;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/donations/count", get(count_donations))
        .route("/donations/recent", get(recent_donors))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/donations", post(create_donation))
}

#[instrument(skip(state, payload))]
pub async fn create_donation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<DonationRequest>,
) -> Result<Json<DonationResponse>, ApiError> {
    check_eligibility(payload.age, payload.weight)?;

    let donation = Donation::create(&state.db, &payload, user_id).await?;
    info!(donation_id = %donation.id, user_id = %user_id, "donation recorded");

    Ok(Json(DonationResponse {
        msg: "Thanks for filling data, You are eligible to donate!",
        donation,
    }))
}

#[instrument(skip(state))]
pub async fn count_donations(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = Donation::count(&state.db).await?;
    Ok(Json(CountResponse { count }))
}

#[instrument(skip(state))]
pub async fn recent_donors(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let names = Donation::recent_names(&state.db, RECENT_WINDOW_DAYS, RECENT_LIMIT).await?;
    Ok(Json(names))
}
