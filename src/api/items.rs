use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Item;

fn error_response(status: StatusCode, e: DomainError) -> Response {
    (status, Json(json!({ "detail": e.to_string() }))).into_response()
}

#[utoipa::path(
    post,
    path = "/rest/items",
    request_body = Item,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, description = "An item with this id already exists")
    )
)]
pub async fn create_item(State(state): State<AppState>, Json(item): Json<Item>) -> Response {
    match state.item_repo.create(item).await {
        Ok(item) => Json(item).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e),
    }
}

#[utoipa::path(
    get,
    path = "/rest/items",
    responses(
        (status = 200, description = "All items in insertion order", body = [Item])
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Response {
    match state.item_repo.find_all().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

#[utoipa::path(
    get,
    path = "/rest/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.item_repo.find_by_id(id).await {
        Ok(item) => Json(item).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e),
    }
}

/// The path id selects the record; the stored record is the payload as sent,
/// including its own `id`.
#[utoipa::path(
    put,
    path = "/rest/items/{id}",
    params(("id" = i64, Path, description = "Id of the item to replace")),
    request_body = Item,
    responses(
        (status = 200, description = "Item replaced", body = Item),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(item): Json<Item>,
) -> Response {
    if item.id != id {
        tracing::debug!(path_id = id, payload_id = item.id, "Update changes the item id");
    }

    match state.item_repo.update(id, item).await {
        Ok(item) => Json(item).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e),
    }
}

#[utoipa::path(
    delete,
    path = "/rest/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.item_repo.delete(id).await {
        Ok(()) => Json(json!({ "message": "Item deleted" })).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e),
    }
}

#[utoipa::path(
    delete,
    path = "/rest/items",
    responses(
        (status = 200, description = "All items deleted")
    )
)]
pub async fn delete_all_items(State(state): State<AppState>) -> impl IntoResponse {
    match state.item_repo.delete_all().await {
        Ok(()) => Json(json!({ "message": "All items deleted" })).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}
