//! User management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        pagination::{next_from, total_pages},
        user::{CreateUser, UpdateUser, UserEnvelope, UserQuery, UserSuccess, UsersPage},
        StatusResponse,
    },
};

use super::RequireApiKey;

/// List users with pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("api_key" = [])),
    params(UserQuery),
    responses(
        (status = 200, description = "List of users", body = UsersPage),
        (status = 400, description = "Invalid pagination or sort column"),
        (status = 403, description = "Missing or invalid Api-Key")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<UsersPage>> {
    let (users, total_count) = state.services.users.list_users(&query).await?;

    Ok(Json(UsersPage {
        next_from: next_from(query.offset, query.limit, users.len()),
        count: users.len(),
        total_pages: total_pages(total_count, query.limit),
        total_count,
        users,
    }))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserEnvelope),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Find a user by phone number
#[utoipa::path(
    get,
    path = "/users/phone/{phone_number}",
    tag = "users",
    security(("api_key" = [])),
    params(
        ("phone_number" = String, Path, description = "Phone number, 7 followed by ten digits")
    ),
    responses(
        (status = 200, description = "User details", body = UserEnvelope),
        (status = 400, description = "Malformed phone number"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_phone(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(phone_number): Path<String>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.services.users.get_by_phone(&phone_number).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("api_key" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserSuccess),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Json(user): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserSuccess>)> {
    let id = state.services.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(UserSuccess::new(id))))
}

/// Update some fields of a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserSuccess),
        (status = 400, description = "Invalid input or nothing to update"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
    Json(user): Json<UpdateUser>,
) -> AppResult<Json<UserSuccess>> {
    let id = state.services.users.update_user(id, user).await?;
    Ok(Json(UserSuccess::new(id)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = StatusResponse),
        (status = 400, description = "User still has borrow records"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatusResponse>> {
    state.services.users.delete_user(id).await?;
    Ok(Json(StatusResponse::success()))
}
