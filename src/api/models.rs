use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitSmartError;
use crate::core::models::{
    results::{ResultMode, ResultSet, Transfer},
    transaction::{Contribution, NewTransaction},
};
use crate::core::services::normalize_amount;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct AddParticipantRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ContributionRequest {
    pub payer: String,
    /// Rounded to the nearest whole unit; must not be negative.
    pub amount: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct AddTransactionRequest {
    pub contributors: Vec<ContributionRequest>,
    pub beneficiaries: Vec<String>,
    pub note: Option<String>,
}

impl AddTransactionRequest {
    pub fn into_new_transaction(self) -> Result<NewTransaction, SplitSmartError> {
        let contributors = self
            .contributors
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let amount = normalize_amount(&format!("contributors[{}].amount", i), c.amount)?;
                Ok(Contribution::new(c.payer, amount))
            })
            .collect::<Result<Vec<_>, SplitSmartError>>()?;
        Ok(NewTransaction {
            contributors,
            beneficiaries: self.beneficiaries,
            note: self.note,
        })
    }
}

#[derive(Serialize, ToSchema)]
pub struct RemoveParticipantResponse {
    pub name: String,
    pub removed_transactions: Vec<String>,
}

/// Results for one mode. `has_data` is false only when the session has no
/// participants or no transactions, so clients can tell "nothing entered yet"
/// apart from "everything already cancels out".
#[derive(Serialize, ToSchema)]
pub struct ModeResultsResponse {
    pub mode: ResultMode,
    pub has_data: bool,
    pub transfers: Vec<Transfer>,
}

#[derive(Serialize, ToSchema)]
pub struct ResultsResponse {
    pub has_data: bool,
    pub results: ResultSet,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitSmartError to implement IntoResponse
pub struct ApiError(pub SplitSmartError);

impl From<SplitSmartError> for ApiError {
    fn from(err: SplitSmartError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SplitSmartError::ParticipantAlreadyExists(_) => StatusCode::CONFLICT,
            SplitSmartError::ParticipantNotFound(_) | SplitSmartError::TransactionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            SplitSmartError::UnknownParticipant(_)
            | SplitSmartError::NoParticipants
            | SplitSmartError::NoContributors
            | SplitSmartError::NoBeneficiaries
            | SplitSmartError::UnknownResultMode(_)
            | SplitSmartError::InvalidInput(_, _) => StatusCode::BAD_REQUEST,
            SplitSmartError::InvariantViolation(_)
            | SplitSmartError::StorageError(_)
            | SplitSmartError::LoggingError(_)
            | SplitSmartError::CacheError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.0 {
            SplitSmartError::InvalidInput(field, detail) => {
                format!("Invalid input for {}: {}", field, detail.description)
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
