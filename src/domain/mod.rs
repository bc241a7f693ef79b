//! Domain layer - Core scenario model with no I/O
//!
//! This layer contains:
//! - Entities: character definitions, card and note documents, rooms, scenarios, scripts, users
//! - Value Objects: character ids, document trees, scenario metadata, typed ids
//! - Domain Services: the character catalog and the card/note builders

pub mod entities;
pub mod services;
pub mod value_objects;
