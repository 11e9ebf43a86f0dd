//! JSON handlers for `/api/tools`.
//!
//! Each handler is one store call; nothing is kept between requests.

use aicatch_types::{
    DeleteAllRequest, DeleteAllResponse, MessageResponse, Tool, ToolDraft, ToolId,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::ApiError;
use crate::router::AppState;

/// Parses a JSON request body regardless of its `Content-Type`.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
}

fn parse_id(raw: String) -> Result<ToolId, ApiError> {
    ToolId::new(raw).map_err(ApiError::from)
}

/// `GET /api/tools`
pub(crate) async fn list_tools(State(state): State<AppState>) -> Result<Json<Vec<Tool>>, ApiError> {
    let tools = state
        .repo
        .list()
        .await
        .map_err(|e| ApiError::store("Error listing tools", e))?;
    Ok(Json(tools))
}

/// `POST /api/tools`
///
/// Absent fields go straight to the store, which rejects them.
pub(crate) async fn create_tool(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Tool>), ApiError> {
    let draft: ToolDraft = parse_body(&body)?;
    let tool = state
        .repo
        .create(&draft)
        .await
        .map_err(|e| ApiError::store("Error creating tool", e))?;
    info!(id = %tool.id, name = %tool.name, "tool created");
    Ok((StatusCode::CREATED, Json(tool)))
}

/// `GET /api/tools/{id}`
pub(crate) async fn get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tool>, ApiError> {
    let id = parse_id(id)?;
    state
        .repo
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::store("Error getting tool", e))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `PUT /api/tools/{id}` — all four fields are required.
pub(crate) async fn update_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<Tool>, ApiError> {
    let id = parse_id(id)?;
    let draft: ToolDraft = parse_body(&body)?;
    let fields = draft.require_all()?;
    let tool = state
        .repo
        .update(&id, &fields)
        .await
        .map_err(|e| ApiError::store("Error updating tool", e))?;
    info!(id = %tool.id, "tool updated");
    Ok(Json(tool))
}

/// `DELETE /api/tools/{id}`
pub(crate) async fn delete_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(id)?;
    let existed = state
        .repo
        .delete(&id)
        .await
        .map_err(|e| ApiError::store("Error deleting tool", e))?;
    if !existed {
        return Err(ApiError::NotFound);
    }
    info!(%id, "tool deleted");
    Ok(Json(MessageResponse {
        message: "Tool deleted successfully".into(),
    }))
}

/// `POST /api/tools/delete-all` — an empty body means "no exclusion".
pub(crate) async fn delete_all_tools(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<DeleteAllResponse>, ApiError> {
    let request: DeleteAllRequest = if body.trim().is_empty() {
        DeleteAllRequest::default()
    } else {
        parse_body(&body)?
    };
    let exclude = request
        .exclude_tool_name
        .as_deref()
        .filter(|name| !name.is_empty());

    let deleted = state
        .repo
        .delete_all(exclude)
        .await
        .map_err(|e| ApiError::store("Error deleting all tools", e))?;
    info!(deleted, exclude = ?exclude, "bulk delete complete");

    let message = match exclude {
        Some(_) => "All tools deleted successfully (except excluded)",
        None => "All tools deleted successfully",
    };
    Ok(Json(DeleteAllResponse {
        message: message.into(),
        deleted,
    }))
}
