//! Scenario and script request shapes
//!
//! Both carry the editor's document as-is next to the name; the engine only
//! interprets a script body when it is exported.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::services::{CreateScenarioRequest, SaveScriptRequest};
use crate::domain::value_objects::ScriptId;

#[derive(Debug, Deserialize)]
pub struct CreateScenarioRequestDto {
    pub name: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl From<CreateScenarioRequestDto> for CreateScenarioRequest {
    fn from(dto: CreateScenarioRequestDto) -> Self {
        Self {
            name: dto.name,
            body: dto.body,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveScriptRequestDto {
    #[serde(default)]
    pub id: Option<ScriptId>,
    pub name: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl From<SaveScriptRequestDto> for SaveScriptRequest {
    fn from(dto: SaveScriptRequestDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            body: dto.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteScriptResponseDto {
    pub deleted: bool,
}
