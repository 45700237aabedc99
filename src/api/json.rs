//! JSON metadata endpoint

use axum::{extract::State, Json};

use crate::metadata::VmSnapshot;
use crate::AppState;

/// GET /json
///
/// The current metadata snapshot as a JSON object. Field names match the
/// snapshot's attribute names; a field whose lookup failed carries its
/// fallback value, never an error.
pub async fn metadata_json(State(state): State<AppState>) -> Json<VmSnapshot> {
    Json(VmSnapshot::gather(&state.metadata).await)
}
