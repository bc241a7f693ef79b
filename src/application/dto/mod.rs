//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP/WebSocket) can
//! serialize/deserialize without pulling wire concerns into the services.

pub mod export;
pub mod room;
pub mod script;
pub mod user;

pub use export::*;
pub use room::*;
pub use script::*;
pub use user::*;
