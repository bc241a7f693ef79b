//! Domain entities - Core business objects

mod card;
mod character;
mod note;
mod room;
mod scenario;
mod user;

pub use card::{CardCommon, CardDocument, CardImage, CardPose, NumberResource, TableLocation};
pub use character::CharacterDefinition;
pub use note::NoteDocument;
pub use room::{Room, RoomData, RoomSummary};
pub use scenario::{Scenario, ScenarioSummary, Script, ScriptSummary};
pub use user::User;
