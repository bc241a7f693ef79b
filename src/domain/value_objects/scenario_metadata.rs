//! Public campaign metadata printed on the exported note

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("Number of loops must be at least 1, got {0}")]
    InvalidLoopCount(u32),
    #[error("Days per loop must be at least 1, got {0}")]
    InvalidDaysPerLoop(u32),
    #[error("Incident day must be at least 1, got {day} for '{label}'")]
    InvalidIncidentDay { day: u32, label: String },
}

/// A scheduled incident
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentEntry {
    pub day: u32,
    pub incident_label: String,
}

impl IncidentEntry {
    #[cfg(test)]
    pub fn new(day: u32, incident_label: impl Into<String>) -> Self {
        Self {
            day,
            incident_label: incident_label.into(),
        }
    }

    /// Display line, e.g. `2日目：殺人事件`
    pub fn line(&self) -> String {
        format!("{}日目：{}", self.day, self.incident_label)
    }
}

/// Validated scenario metadata
///
/// Fields are private so every instance has passed [`ScenarioMetadata::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioMetadata {
    setting_label: String,
    number_of_loops: u32,
    days_per_loop: u32,
    extra_text: String,
    incidents: Vec<IncidentEntry>,
}

impl ScenarioMetadata {
    pub fn new(
        setting_label: impl Into<String>,
        number_of_loops: u32,
        days_per_loop: u32,
        extra_text: impl Into<String>,
        incidents: Vec<IncidentEntry>,
    ) -> Result<Self, MetadataError> {
        if number_of_loops < 1 {
            return Err(MetadataError::InvalidLoopCount(number_of_loops));
        }
        if days_per_loop < 1 {
            return Err(MetadataError::InvalidDaysPerLoop(days_per_loop));
        }
        if let Some(bad) = incidents.iter().find(|i| i.day < 1) {
            return Err(MetadataError::InvalidIncidentDay {
                day: bad.day,
                label: bad.incident_label.clone(),
            });
        }

        Ok(Self {
            setting_label: setting_label.into(),
            number_of_loops,
            days_per_loop,
            extra_text: extra_text.into(),
            incidents,
        })
    }

    pub fn setting_label(&self) -> &str {
        &self.setting_label
    }

    pub fn number_of_loops(&self) -> u32 {
        self.number_of_loops
    }

    pub fn days_per_loop(&self) -> u32 {
        self.days_per_loop
    }

    pub fn extra_text(&self) -> &str {
        &self.extra_text
    }

    /// Incidents in the order they were supplied
    pub fn incidents(&self) -> &[IncidentEntry] {
        &self.incidents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_loops_and_days() {
        assert_eq!(
            ScenarioMetadata::new("学校", 0, 3, "", vec![]),
            Err(MetadataError::InvalidLoopCount(0))
        );
        assert_eq!(
            ScenarioMetadata::new("学校", 2, 0, "", vec![]),
            Err(MetadataError::InvalidDaysPerLoop(0))
        );
    }

    #[test]
    fn test_rejects_day_zero_incident() {
        let result = ScenarioMetadata::new("学校", 2, 3, "", vec![IncidentEntry::new(0, "殺人事件")]);
        assert!(matches!(result, Err(MetadataError::InvalidIncidentDay { day: 0, .. })));
    }

    #[test]
    fn test_incident_line_format() {
        assert_eq!(IncidentEntry::new(2, "B").line(), "2日目：B");
    }
}
