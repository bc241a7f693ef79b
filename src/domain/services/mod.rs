//! Domain services - pure builders for the exported documents

pub mod card_builder;
pub mod character_catalog;
pub mod note_builder;
