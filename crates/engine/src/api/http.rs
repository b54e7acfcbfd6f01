//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use worldbuilder_domain::WorldId;
use worldbuilder_shared::{
    AddObjectRequest, CreateWorldRequest, LoginRequest, LoginResponse, ObjectCreatedResponse,
    RegisterRequest, RegisterResponse, WorldData, WorldDetailsResponse,
};

use super::auth::Auth;
use super::error::ApiError;
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/worlds", get(list_worlds).post(create_world))
        .route("/api/worlds/{id}", get(get_world).delete(delete_world))
        .route("/api/worlds/{id}/objects", post(add_object))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Auth
// =============================================================================

async fn register(
    State(app): State<Arc<App>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let account_id = app
        .use_cases
        .auth
        .register
        .execute(&req.username, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(account_id.into())))
}

async fn login(
    State(app): State<Arc<App>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let issued = app
        .use_cases
        .auth
        .login
        .execute(&req.username, &req.password)
        .await?;
    Ok(Json(LoginResponse {
        account_id: issued.account_id.as_i64(),
        token: issued.token,
        expires_at: issued.expires_at.to_rfc3339(),
    }))
}

// =============================================================================
// Worlds
// =============================================================================

async fn list_worlds(
    State(app): State<Arc<App>>,
    Auth(owner): Auth,
) -> Result<Json<Vec<WorldData>>, ApiError> {
    let worlds = app.use_cases.world.crud.list(owner).await?;
    Ok(Json(worlds.iter().map(WorldData::from).collect()))
}

async fn create_world(
    State(app): State<Arc<App>>,
    Auth(owner): Auth,
    Json(req): Json<CreateWorldRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<WorldData>), ApiError> {
    let world = app
        .use_cases
        .world
        .crud
        .create(owner, &req.name, req.width, req.height)
        .await?;
    let location = format!("/api/worlds/{}", world.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WorldData::from(&world)),
    ))
}

async fn get_world(
    State(app): State<Arc<App>>,
    Auth(owner): Auth,
    Path(id): Path<i64>,
) -> Result<Json<WorldDetailsResponse>, ApiError> {
    let details = app
        .use_cases
        .world
        .crud
        .get(owner, WorldId::from_i64(id))
        .await?;
    Ok(Json(WorldDetailsResponse::from(&details)))
}

async fn delete_world(
    State(app): State<Arc<App>>,
    Auth(owner): Auth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .world
        .crud
        .delete(owner, WorldId::from_i64(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_object(
    State(app): State<Arc<App>>,
    Auth(owner): Auth,
    Path(id): Path<i64>,
    Json(req): Json<AddObjectRequest>,
) -> Result<(StatusCode, Json<ObjectCreatedResponse>), ApiError> {
    let object_id = app
        .use_cases
        .world
        .add_object
        .execute(owner, WorldId::from_i64(id), &req.object_type, req.x, req.y)
        .await?;
    Ok((StatusCode::CREATED, Json(object_id.into())))
}
