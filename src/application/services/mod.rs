//! Application services - Use case implementations
//!
//! Each service takes its outbound ports as `Arc<dyn ...>` and returns domain
//! entities; HTTP concerns stay in the infrastructure layer.

pub mod error;
pub mod room_data_service;
pub mod room_service;
pub mod scenario_export_service;
pub mod scenario_service;
pub mod script_service;
pub mod user_service;

pub use error::{ServiceError, ServiceResult};

// Re-export export pipeline types
pub use scenario_export_service::{ExportError, ScenarioExport, ScenarioExportService};

// Re-export management service types
pub use room_data_service::RoomDataService;
pub use room_service::{RoomService, SaveRoomRequest};
pub use scenario_service::{CreateScenarioRequest, ScenarioService};
pub use script_service::{SaveScriptRequest, ScriptService};
pub use user_service::{SignInRequest, UserService};
