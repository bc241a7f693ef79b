//! Room entities - play tables owned by a user, plus their live data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::{RoomId, ScriptId, StoreUserId};

/// Full room document (`rooms/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub uid: String,
    pub create_user_id: StoreUserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<ScriptId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Editor-owned fields the engine passes through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Name-only copy kept under the owner (`users/{sid}/rooms/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<ScriptId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoomSummary {
    pub fn of(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            uid: room.uid.clone(),
            script_id: room.script_id,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// Live table state streamed to viewers (`roomsData/{roomId}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomData {
    pub room_id: RoomId,
    pub uid: String,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}
