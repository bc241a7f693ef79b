//! WebSocket stream of a room's live data
//!
//! Each connection receives the current data as a JSON text frame, then one
//! frame per later write. A deleted document is sent as `null`.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;

use crate::application::ports::outbound::DocumentSubscription;
use crate::domain::value_objects::RoomId;
use crate::infrastructure::http::{parse_room_id, service_error};
use crate::infrastructure::state::AppState;

/// WebSocket upgrade handler; the listener is registered before upgrading
pub async fn room_data_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let room_id = parse_room_id(&id)?;
    let subscription = state
        .room_data_service
        .listen_room_data(room_id)
        .await
        .map_err(service_error)?;

    Ok(ws.on_upgrade(move |socket| stream_room_data(socket, room_id, subscription)))
}

async fn stream_room_data(socket: WebSocket, room_id: RoomId, mut subscription: DocumentSubscription) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    tracing::info!(room_id = %room_id, "Room data listener connected");

    loop {
        tokio::select! {
            snapshot = subscription.next() => {
                let Some(snapshot) = snapshot else {
                    tracing::warn!(room_id = %room_id, "Document store closed");
                    break;
                };
                let json = snapshot.unwrap_or(Value::Null).to_string();
                if ws_sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
            incoming = ws_receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::error!(room_id = %room_id, "WebSocket error: {}", e);
                        break;
                    }
                    // Viewers only listen; anything else they send is ignored
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    tracing::info!(room_id = %room_id, "Room data listener disconnected");
}
