use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use super::path_input;
use crate::controllers::UserController;
use crate::dto::ActionResult;
use crate::middleware::auth::BearerToken;
use crate::models::user::UserRecord;
use crate::state::AppState;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:uid", get(get_user))
        .route("/profile", get(get_profile))
}

async fn list_users(
    State(state): State<AppState>,
    token: BearerToken,
) -> Json<ActionResult<Vec<UserRecord>>> {
    let controller = UserController::new(&state);
    Json(controller.list_users(token.as_deref()).await)
}

async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
    uid: Result<Path<String>, PathRejection>,
) -> Json<ActionResult<UserRecord>> {
    let controller = UserController::new(&state);
    Json(controller.get_user(token.as_deref(), path_input(uid)).await)
}

async fn get_profile(
    State(state): State<AppState>,
    token: BearerToken,
) -> Json<ActionResult<UserRecord>> {
    let controller = UserController::new(&state);
    Json(controller.get_profile(token.as_deref()).await)
}
