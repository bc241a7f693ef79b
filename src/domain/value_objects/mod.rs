//! Value objects - Immutable objects defined by their attributes

mod character_id;
mod document;
mod ids;
mod scenario_metadata;

pub use character_id::{CharacterId, StartingLocation};
pub use document::DocumentElement;
pub use ids::*;
pub use scenario_metadata::{IncidentEntry, MetadataError, ScenarioMetadata};
