//! Character card document - a playable token for the tabletop tool

use crate::domain::value_objects::DocumentElement;

/// Placement of a piece on the shared table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLocation {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPose {
    pub pos_z: i32,
    pub rotate: i32,
    pub roll: i32,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Filled in by the tabletop tool once the images are imported
    pub identifier: String,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCommon {
    pub name: String,
    pub size: String,
    pub position: String,
    pub initial_position: String,
}

/// A counter shown on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberResource {
    pub label: String,
    pub current_value: u32,
    pub value: u32,
}

impl NumberResource {
    pub const TYPE_TAG: &'static str = "numberResource";

    pub fn zeroed(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            current_value: 0,
            value: 0,
        }
    }

    fn to_element(&self) -> DocumentElement {
        DocumentElement::data(&self.label)
            .with_attribute("type", Self::TYPE_TAG)
            .with_attribute("currentValue", self.current_value.to_string())
            .with_text(self.value.to_string())
    }
}

/// Full card document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDocument {
    pub location: TableLocation,
    pub pose: CardPose,
    pub state: u8,
    pub image: CardImage,
    pub common: CardCommon,
    /// 友好
    pub favor: NumberResource,
    /// 不安
    pub anxiety: NumberResource,
    /// 暗躍
    pub scheming: NumberResource,
    /// Reserved for per-character notes; exported empty
    pub detail: Vec<DocumentElement>,
}

impl CardDocument {
    pub const ROOT_TAG: &'static str = "rooper-card";

    pub fn resources(&self) -> [&NumberResource; 3] {
        [&self.favor, &self.anxiety, &self.scheming]
    }

    /// Lower the card into a document tree
    pub fn to_document(&self) -> DocumentElement {
        let image = DocumentElement::data("image")
            .with_child(
                DocumentElement::data("imageIdentifier")
                    .with_attribute("type", "image")
                    .with_text(self.image.identifier.clone()),
            )
            .with_child(
                DocumentElement::data("front")
                    .with_attribute("type", "image")
                    .with_text(self.image.front.clone()),
            )
            .with_child(
                DocumentElement::data("back")
                    .with_attribute("type", "image")
                    .with_text(self.image.back.clone()),
            );

        let mut common = DocumentElement::data("common")
            .with_child(DocumentElement::data("name").with_text(self.common.name.clone()))
            .with_child(DocumentElement::data("size").with_text(self.common.size.clone()))
            .with_child(DocumentElement::data("位置").with_text(self.common.position.clone()))
            .with_child(
                DocumentElement::data("初期位置").with_text(self.common.initial_position.clone()),
            );
        for resource in self.resources() {
            common.append_child(resource.to_element());
        }

        let mut detail = DocumentElement::data("detail");
        for element in &self.detail {
            detail.append_child(element.clone());
        }

        let card = DocumentElement::data(Self::ROOT_TAG)
            .with_child(image)
            .with_child(common)
            .with_child(detail);

        DocumentElement::new(Self::ROOT_TAG)
            .with_attribute("location.name", self.location.name.clone())
            .with_attribute("location.x", self.location.x.to_string())
            .with_attribute("location.y", self.location.y.to_string())
            .with_attribute("posZ", self.pose.pos_z.to_string())
            .with_attribute("rotate", self.pose.rotate.to_string())
            .with_attribute("roll", self.pose.roll.to_string())
            .with_attribute("zindex", self.pose.z_index.to_string())
            .with_attribute("state", self.state.to_string())
            .with_child(card)
    }
}
