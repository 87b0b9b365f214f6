use crate::{
    api::{models::*, openapi::ApiDoc},
    core::{
        models::{
            audit::AppLog,
            participant::Participant,
            results::{NetBalance, ResultMode},
            transaction::Transaction,
        },
        services::SplitSmartService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;

pub type AppState = Arc<SplitSmartService<InMemoryLogging, InMemoryStorage, InMemoryCache>>;

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    Router::new()
        .route("/participants", post(add_participant).get(list_participants))
        .route("/participants/{name}", delete(remove_participant))
        .route("/transactions", post(add_transaction).get(list_transactions))
        .route(
            "/transactions/{transaction_id}",
            get(get_transaction).delete(remove_transaction),
        )
        .route("/results", get(get_results))
        .route("/results/{mode}", get(get_results_for_mode))
        .route("/balances", get(get_net_balances))
        .route("/session/reset", post(reset_session))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = AddParticipantRequest,
    responses(
        (status = 201, description = "Participant added", body = Participant),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 409, description = "Name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_participant(
    State(service): State<AppState>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<(StatusCode, Json<Participant>), ApiError> {
    let participant = service.add_participant(&req.name).await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "Participants in insertion order", body = [Participant]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_participants(State(service): State<AppState>) -> Result<Json<Vec<Participant>>, ApiError> {
    Ok(Json(service.list_participants().await?))
}

#[utoipa::path(
    delete,
    path = "/api/participants/{name}",
    params(
        ("name" = String, Path, description = "Name of the participant to remove")
    ),
    responses(
        (status = 200, description = "Participant and referencing transactions removed", body = RemoveParticipantResponse),
        (status = 404, description = "Participant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn remove_participant(
    State(service): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RemoveParticipantResponse>, ApiError> {
    let removed_transactions = service.remove_participant(&name).await?;
    Ok(Json(RemoveParticipantResponse {
        name,
        removed_transactions,
    }))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = AddTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded", body = Transaction),
        (status = 400, description = "Invalid transaction", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_transaction(
    State(service): State<AppState>,
    Json(req): Json<AddTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let new_transaction = req.into_new_transaction()?;
    let transaction = service.add_transaction(new_transaction).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Transactions in creation order", body = [Transaction]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_transactions(State(service): State<AppState>) -> Result<Json<Vec<Transaction>>, ApiError> {
    Ok(Json(service.list_transactions().await?))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{transaction_id}",
    params(
        ("transaction_id" = String, Path, description = "ID of the transaction")
    ),
    responses(
        (status = 200, description = "Transaction details", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_transaction(
    State(service): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(service.get_transaction(&transaction_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{transaction_id}",
    params(
        ("transaction_id" = String, Path, description = "ID of the transaction to remove")
    ),
    responses(
        (status = 200, description = "Transaction removed", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn remove_transaction(
    State(service): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(service.remove_transaction(&transaction_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "All three transfer lists", body = ResultsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_results(State(service): State<AppState>) -> Result<Json<ResultsResponse>, ApiError> {
    let results = service.get_results().await?;
    Ok(Json(ResultsResponse {
        has_data: results.has_data,
        results,
    }))
}

#[utoipa::path(
    get,
    path = "/api/results/{mode}",
    params(
        ("mode" = String, Path, description = "One of detailed, normal or advanced")
    ),
    responses(
        (status = 200, description = "Transfers for the selected mode", body = ModeResultsResponse),
        (status = 400, description = "Unknown mode", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_results_for_mode(
    State(service): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Json<ModeResultsResponse>, ApiError> {
    let mode: ResultMode = mode.parse()?;
    let results = service.get_results().await?;
    Ok(Json(ModeResultsResponse {
        mode,
        has_data: results.has_data,
        transfers: results.select(mode).to_vec(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/balances",
    responses(
        (status = 200, description = "Net balance per participant", body = [NetBalance]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_net_balances(State(service): State<AppState>) -> Result<Json<Vec<NetBalance>>, ApiError> {
    Ok(Json(service.get_net_balances().await?))
}

#[utoipa::path(
    post,
    path = "/api/session/reset",
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn reset_session(State(service): State<AppState>) -> Result<StatusCode, ApiError> {
    service.reset_session().await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Audit log of session changes", body = [AppLog]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_app_logs(State(service): State<AppState>) -> Result<Json<Vec<AppLog>>, ApiError> {
    Ok(Json(service.get_app_logs().await?))
}
