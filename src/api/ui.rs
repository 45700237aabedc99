//! HTML dashboard
//!
//! Server-renders the metadata snapshot into the dashboard template on every
//! request.

use axum::{extract::State, response::Html};

use crate::metadata::VmSnapshot;
use crate::AppState;

const INDEX_TEMPLATE: &str = include_str!("../ui/index.html");

/// GET /
///
/// Renders the dashboard page with the eight snapshot fields.
pub async fn serve_dashboard(State(state): State<AppState>) -> Html<String> {
    let snapshot = VmSnapshot::gather(&state.metadata).await;
    Html(render_dashboard(&snapshot))
}

/// Substitute snapshot values into the dashboard template.
fn render_dashboard(snapshot: &VmSnapshot) -> String {
    INDEX_TEMPLATE
        .replace("{instance_name}", &snapshot.instance_name)
        .replace("{instance_id}", &snapshot.instance_id)
        .replace("{zone}", &snapshot.zone)
        .replace("{project_id}", &snapshot.project_id)
        .replace("{machine_type}", &snapshot.machine_type)
        .replace("{internal_ip}", &snapshot.internal_ip)
        .replace("{external_ip}", &snapshot.external_ip)
        .replace("{hostname}", &snapshot.hostname)
}
