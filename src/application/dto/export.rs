use serde::{Deserialize, Serialize};

use crate::application::services::ScenarioExport;
use crate::domain::value_objects::{CharacterId, IncidentEntry, MetadataError, ScenarioMetadata};

/// Export payload sent by the editor, also the shape of a stored script body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportScenarioRequestDto {
    pub characters: Vec<CharacterId>,
    pub setting_label: String,
    pub number_of_loops: u32,
    pub days_per_loop: u32,
    #[serde(default)]
    pub extra_text: String,
    #[serde(default)]
    pub incidents: Vec<IncidentEntry>,
}

impl TryFrom<ExportScenarioRequestDto> for ScenarioExport {
    type Error = MetadataError;

    fn try_from(dto: ExportScenarioRequestDto) -> Result<Self, Self::Error> {
        let metadata = ScenarioMetadata::new(
            dto.setting_label,
            dto.number_of_loops,
            dto.days_per_loop,
            dto.extra_text,
            dto.incidents,
        )?;
        Ok(ScenarioExport {
            characters: dto.characters,
            metadata,
        })
    }
}
