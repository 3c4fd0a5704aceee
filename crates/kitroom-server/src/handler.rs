use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use kitroom_inventory::Inventory;
use kitroom_types::{InventoryItem, IssueRequest, IssuedItem, ItemId, NewItem};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Body of `201 Created` for `POST /inventory`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: ItemId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

/// Decode a JSON body regardless of its declared content type.
fn decode<T: DeserializeOwned>(body: &[u8]) -> ServerResult<T> {
    serde_json::from_slice(body).map_err(|e| ServerError::BadRequest(e.to_string()))
}

/// `GET /inventory`
pub async fn list_inventory(State(inventory): State<Arc<Inventory>>) -> Json<Vec<InventoryItem>> {
    Json(inventory.list_items().await)
}

/// `POST /inventory`
pub async fn add_item(
    State(inventory): State<Arc<Inventory>>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<CreatedResponse>)> {
    let candidate: NewItem = decode(&body)?;
    let id = inventory.add_item(candidate).await?;
    tracing::info!(id, "item added");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// `POST /issue`
pub async fn issue_item(
    State(inventory): State<Arc<Inventory>>,
    body: Bytes,
) -> ServerResult<StatusCode> {
    let request: IssueRequest = decode(&body)?;
    let record = inventory.issue_item(request).await?;
    tracing::info!(
        item_id = record.item_id,
        person = %record.person,
        issued_by = %record.issued_by,
        "item issued"
    );
    Ok(StatusCode::CREATED)
}

/// `GET /issued`
pub async fn list_issued(State(inventory): State<Arc<Inventory>>) -> Json<Vec<IssuedItem>> {
    Json(inventory.list_issued().await)
}

/// `GET /healthz`
pub async fn health_handler(State(inventory): State<Arc<Inventory>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        store: inventory.backend().into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reports_syntax_errors() {
        let err = decode::<NewItem>(b"{not json").unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn decode_rejects_wrong_types() {
        let err = decode::<IssueRequest>(br#"{"itemId":"one"}"#).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_reports_backend() {
        let Json(health) = health_handler(State(Arc::new(Inventory::in_memory()))).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.store, "memory");
    }
}
