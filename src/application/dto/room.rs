use serde::Deserialize;
use serde_json::{Map, Value};

use crate::application::services::SaveRoomRequest;
use crate::domain::value_objects::{RoomId, ScriptId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoomRequestDto {
    #[serde(default)]
    pub id: Option<RoomId>,
    pub name: String,
    #[serde(default)]
    pub script_id: Option<ScriptId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<SaveRoomRequestDto> for SaveRoomRequest {
    fn from(dto: SaveRoomRequestDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            script_id: dto.script_id,
            extra: dto.extra,
        }
    }
}
