//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - Ports: serializer, archive and document store interfaces
//! - Services: scenario export plus user, room, scenario and script management
//! - DTOs: JSON shapes exchanged with the editor UI

pub mod dto;
pub mod ports;
pub mod services;
