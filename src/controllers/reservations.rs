use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::error::AppResult;
use crate::i18n::CountryCode;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reservations", get(index))
}

// GET /reservations
//
// Localized booker name of the first reservation, or `null` when there are
// no reservations at all.
pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Json<Option<String>>> {
    let Some(reservation) = state.store.first_reservation().await? else {
        tracing::debug!("no reservations stored");
        return Ok(Json(None));
    };

    let name = reservation
        .booker_name_i18n(state.store.as_ref(), CountryCode::Ko)
        .await?;

    Ok(Json(name))
}
