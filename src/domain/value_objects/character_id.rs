//! Playable character identifiers and their starting locations

use serde::{Deserialize, Serialize};

/// Closed set of playable characters
///
/// The wire form is the variant name (`"BoyStudent"`). Any other string is
/// rejected when a payload is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterId {
    BoyStudent,
    GirlStudent,
    RichMansDaughter,
    ShrineMaiden,
    PoliceOfficer,
    OfficeWorker,
    Informer,
    Doctor,
    Patient,
    ClassRep,
    MysteryBoy,
    Alien,
    GodlyBeing,
    PopIdol,
    Journalist,
    Boss,
    Nurse,
    Henchman,
    Soldier,
    BlackCat,
    LittleGirl,
    Teacher,
    TransferStudent,
    Scholar,
    Illusion,
    ForensicSpecialist,
    AI,
}

impl CharacterId {
    /// Every character, in card artwork order
    #[cfg(test)]
    pub const ALL: [CharacterId; 27] = [
        CharacterId::BoyStudent,
        CharacterId::GirlStudent,
        CharacterId::RichMansDaughter,
        CharacterId::ShrineMaiden,
        CharacterId::PoliceOfficer,
        CharacterId::OfficeWorker,
        CharacterId::Informer,
        CharacterId::Doctor,
        CharacterId::Patient,
        CharacterId::ClassRep,
        CharacterId::MysteryBoy,
        CharacterId::Alien,
        CharacterId::GodlyBeing,
        CharacterId::PopIdol,
        CharacterId::Journalist,
        CharacterId::Boss,
        CharacterId::Nurse,
        CharacterId::Henchman,
        CharacterId::Soldier,
        CharacterId::BlackCat,
        CharacterId::LittleGirl,
        CharacterId::Teacher,
        CharacterId::TransferStudent,
        CharacterId::Scholar,
        CharacterId::Illusion,
        CharacterId::ForensicSpecialist,
        CharacterId::AI,
    ];
}

/// Board location a character card starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartingLocation {
    Hospital,
    Shrine,
    City,
    School,
}

impl StartingLocation {
    /// Label printed on the card
    pub fn label(&self) -> &'static str {
        match self {
            StartingLocation::Hospital => "病院",
            StartingLocation::Shrine => "神社",
            StartingLocation::City => "都市",
            StartingLocation::School => "学校",
        }
    }
}

impl std::fmt::Display for StartingLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
