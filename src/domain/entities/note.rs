//! Public note document - the campaign overview sheet

use crate::domain::value_objects::DocumentElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDocument {
    pub title: String,
    pub height: String,
    pub width: String,
    pub font_size: String,
    pub text: String,
}

impl NoteDocument {
    pub const ROOT_TAG: &'static str = "text-note";
    pub const TITLE: &'static str = "公開シート";

    pub fn file_name(&self) -> String {
        format!("{}.xml", self.title)
    }

    /// Lower the note into a document tree
    pub fn to_document(&self) -> DocumentElement {
        let image = DocumentElement::data("image").with_child(
            DocumentElement::data("imageIdentifier")
                .with_attribute("type", "image")
                .with_text(""),
        );

        let common = DocumentElement::data("common")
            .with_child(DocumentElement::data("title").with_text(self.title.clone()))
            .with_child(DocumentElement::data("height").with_text(self.height.clone()))
            .with_child(DocumentElement::data("width").with_text(self.width.clone()))
            .with_child(DocumentElement::data("fontsize").with_text(self.font_size.clone()))
            .with_child(
                DocumentElement::data("text")
                    .with_attribute("type", "note")
                    .with_text(self.text.clone()),
            );

        DocumentElement::new(Self::ROOT_TAG)
            .with_attribute("location.name", "table")
            .with_attribute("location.x", "0")
            .with_attribute("location.y", "0")
            .with_attribute("posZ", "0")
            .with_attribute("rotate", "0")
            .with_attribute("zindex", "0")
            .with_attribute("password", "")
            .with_child(
                DocumentElement::data(Self::ROOT_TAG)
                    .with_child(image)
                    .with_child(common)
                    .with_child(DocumentElement::data("detail")),
            )
    }
}
