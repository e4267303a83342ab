//! User Handlers
//!
//! Thin adapters from HTTP onto the command and query handlers. Every
//! outcome is counted in `user_operations_total`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateUserRequest, DataResponse, UserResponse};
use crate::application::{
    CreateUser, CreateUserHandler, GetUserById, GetUserByIdHandler, UserError,
};
use crate::domain::{Identifier, User};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn record<T>(operation: &str, result: &Result<T, UserError>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(err) => err.kind(),
    };
    metrics::record_user_operation(operation, outcome);
}

/// Create a user under a freshly generated id
///
/// Returns 201 with the stored user.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<DataResponse<UserResponse>>), AppError> {
    let id = Identifier::generate().value();

    let created = CreateUserHandler::new(state.users.clone())
        .handle(CreateUser {
            id: id.clone(),
            name: body.name,
            email: body.email,
        })
        .await;
    record("create_user", &created);
    created?;

    let user = fetch(&state, id).await?;
    tracing::info!(user_id = %user.id(), "User created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(UserResponse::from(&user))),
    ))
}

/// Get a user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<UserResponse>>, AppError> {
    let user = fetch(&state, id).await?;

    Ok(Json(DataResponse::new(UserResponse::from(user))))
}

async fn fetch(state: &AppState, id: String) -> Result<User, UserError> {
    let found = GetUserByIdHandler::new(state.users.clone())
        .handle(GetUserById { id })
        .await;
    record("get_user_by_id", &found);
    found
}
