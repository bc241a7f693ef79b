//! Character catalog - total mapping from character id to its card data
//!
//! The mapping is an exhaustive `match`, so a new [`CharacterId`] variant
//! without an entry here does not compile.

use crate::domain::entities::CharacterDefinition;
use crate::domain::value_objects::{CharacterId, StartingLocation};

/// Look up the static definition of a character
pub fn lookup(id: CharacterId) -> CharacterDefinition {
    use StartingLocation::{City, Hospital, School, Shrine};

    let (display_name, starting_location, artwork_index) = match id {
        CharacterId::BoyStudent => ("男子学生", School, "01"),
        CharacterId::GirlStudent => ("女子学生", School, "02"),
        CharacterId::RichMansDaughter => ("お嬢様", School, "03"),
        CharacterId::ShrineMaiden => ("巫女", Shrine, "04"),
        CharacterId::PoliceOfficer => ("刑事", City, "05"),
        CharacterId::OfficeWorker => ("サラリーマン", City, "06"),
        CharacterId::Informer => ("情報屋", City, "07"),
        CharacterId::Doctor => ("医者", Hospital, "08"),
        CharacterId::Patient => ("患者", Hospital, "09"),
        CharacterId::ClassRep => ("委員長", School, "10"),
        CharacterId::MysteryBoy => ("イレギュラー", School, "11"),
        CharacterId::Alien => ("異世界人", Shrine, "12"),
        CharacterId::GodlyBeing => ("神格", Shrine, "13"),
        CharacterId::PopIdol => ("アイドル", City, "14"),
        CharacterId::Journalist => ("マスコミ", City, "15"),
        CharacterId::Boss => ("大物", City, "16"),
        CharacterId::Nurse => ("ナース", Hospital, "17"),
        CharacterId::Henchman => ("手先", City, "18"),
        CharacterId::Soldier => ("軍人", Hospital, "19"),
        CharacterId::BlackCat => ("黒猫", Shrine, "20"),
        CharacterId::LittleGirl => ("女の子", School, "21"),
        CharacterId::Teacher => ("教師", School, "22"),
        CharacterId::TransferStudent => ("転校生", School, "23"),
        CharacterId::Scholar => ("学者", Hospital, "24"),
        CharacterId::Illusion => ("幻想", Shrine, "25"),
        CharacterId::ForensicSpecialist => ("鑑識官", City, "26"),
        CharacterId::AI => ("A.I.", City, "27"),
    };

    CharacterDefinition {
        id,
        display_name,
        starting_location,
        artwork_index,
    }
}
