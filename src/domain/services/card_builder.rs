//! Card builder - instantiates the card template for one character

use crate::domain::entities::{
    CardCommon, CardDocument, CardImage, CardPose, CharacterDefinition, NumberResource,
    TableLocation,
};

const ARTWORK_DIR: &str = "./assets/images/tragedy_commons_5th/chara_cards";
const CARD_SIZE: &str = "3";

/// Artwork path for one side of a card; side 1 is the front, 0 the back
pub fn artwork_path(artwork_index: &str, side: u8) -> String {
    format!("{ARTWORK_DIR}/character_{artwork_index}_{side}.png")
}

/// Build the card document for a character
pub fn build_card(definition: &CharacterDefinition) -> CardDocument {
    let location = definition.starting_location.label();

    CardDocument {
        location: TableLocation {
            name: "table".to_string(),
            x: 600,
            y: 950,
        },
        pose: CardPose {
            pos_z: 0,
            rotate: 0,
            roll: 0,
            z_index: 0,
        },
        state: 0,
        image: CardImage {
            identifier: String::new(),
            front: artwork_path(definition.artwork_index, 1),
            back: artwork_path(definition.artwork_index, 0),
        },
        common: CardCommon {
            name: definition.display_name.to_string(),
            size: CARD_SIZE.to_string(),
            position: location.to_string(),
            initial_position: location.to_string(),
        },
        favor: NumberResource::zeroed("友好"),
        anxiety: NumberResource::zeroed("不安"),
        scheming: NumberResource::zeroed("暗躍"),
        detail: Vec::new(),
    }
}
