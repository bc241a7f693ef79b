//! Scenario and script documents authored in the editor
//!
//! Both carry an editor-defined JSON body that the engine stores verbatim,
//! plus ownership and timestamps. A name-only summary is kept under the owner
//! so listing does not load every body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::{ScenarioId, ScriptId, StoreUserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub uid: String,
    pub create_user_id: StoreUserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub name: String,
    pub uid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScenarioSummary {
    pub fn of(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id,
            name: scenario.name.clone(),
            uid: scenario.uid.clone(),
            created_at: scenario.created_at,
            updated_at: scenario.updated_at,
        }
    }
}

/// A script: the private side of a scenario (cast, incidents, loop setup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: ScriptId,
    pub name: String,
    pub uid: String,
    pub create_user_id: StoreUserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSummary {
    pub id: ScriptId,
    pub name: String,
    pub uid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScriptSummary {
    pub fn of(script: &Script) -> Self {
        Self {
            id: script.id,
            name: script.name.clone(),
            uid: script.uid.clone(),
            created_at: script.created_at,
            updated_at: script.updated_at,
        }
    }
}
