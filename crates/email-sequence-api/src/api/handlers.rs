//! HTTP request handlers.

use super::types::{
    ClientsResponse, InfoResponse, RegisterClientRequest, RegisterClientResponse,
    TriggerSequenceRequest,
};
use super::AppState;
use crate::error::ApiError;
use crate::sequence::{self, SequenceStarted};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

/// Paths advertised by the root route.
pub const ENDPOINTS: [&str; 3] = ["/register_client", "/trigger_sequence", "/clients"];

/// Service information. Does not require an API key.
pub async fn service_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        status: "running".to_string(),
        message: "Email Sequence Backend API".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// Register a new client.
pub async fn register_client(
    State(state): State<AppState>,
    payload: Result<Json<RegisterClientRequest>, JsonRejection>,
) -> Result<Json<RegisterClientResponse>, ApiError> {
    let Json(request) = payload?;

    let message = match request.name.as_deref() {
        Some(name) => format!("Client {} registered successfully", name),
        None => "Client registered successfully".to_string(),
    };

    let client_id = state
        .registry
        .write()
        .await
        .register(request.name, request.email, request.company);

    info!(client_id, "Client registered");

    Ok(Json(RegisterClientResponse {
        client_id,
        status: "registered".to_string(),
        message,
    }))
}

/// Trigger an email sequence for a registered client.
pub async fn trigger_sequence(
    State(state): State<AppState>,
    payload: Result<Json<TriggerSequenceRequest>, JsonRejection>,
) -> Result<Json<SequenceStarted>, ApiError> {
    let Json(request) = payload?;
    let (client_id, sequence_id) = request.validate()?;

    let registry = state.registry.read().await;
    let started = sequence::trigger(&registry, client_id, &sequence_id)?;

    Ok(Json(started))
}

/// List all registered clients.
pub async fn list_clients(State(state): State<AppState>) -> Json<ClientsResponse> {
    let registry = state.registry.read().await;

    Json(ClientsResponse {
        clients: registry.list().clone(),
        total: registry.count(),
    })
}
