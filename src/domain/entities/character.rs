//! Character definition - the static data bound to each playable character

use crate::domain::value_objects::{CharacterId, StartingLocation};

/// Static data for one playable character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterDefinition {
    pub id: CharacterId,
    pub display_name: &'static str,
    pub starting_location: StartingLocation,
    /// Two-digit, zero-padded card artwork number
    pub artwork_index: &'static str,
}

impl CharacterDefinition {
    /// Name of the exported card file
    pub fn file_name(&self) -> String {
        format!("{}.xml", self.display_name)
    }
}
