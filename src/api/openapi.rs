use utoipa::OpenApi;

use crate::{
    api::models::{
        AddParticipantRequest, AddTransactionRequest, ContributionRequest, ErrorResponse, ModeResultsResponse,
        RemoveParticipantResponse, ResultsResponse,
    },
    core::models::{
        audit::AppLog,
        participant::Participant,
        results::{NetBalance, ResultMode, ResultSet, Transfer},
        transaction::{Contribution, Transaction},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::add_participant,
        super::handlers::list_participants,
        super::handlers::remove_participant,
        super::handlers::add_transaction,
        super::handlers::list_transactions,
        super::handlers::get_transaction,
        super::handlers::remove_transaction,
        super::handlers::get_results,
        super::handlers::get_results_for_mode,
        super::handlers::get_net_balances,
        super::handlers::reset_session,
        super::handlers::get_app_logs
    ),
    components(schemas(
        AddParticipantRequest,
        ContributionRequest,
        AddTransactionRequest,
        RemoveParticipantResponse,
        ResultsResponse,
        ModeResultsResponse,
        ErrorResponse,
        Participant,
        Contribution,
        Transaction,
        Transfer,
        ResultMode,
        ResultSet,
        NetBalance,
        AppLog
    )),
    info(
        title = "SplitSmart API",
        description = "API for tracking shared expenses and settling debts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
