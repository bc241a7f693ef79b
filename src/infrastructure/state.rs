//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{
    RoomDataService, RoomService, ScenarioExportService, ScenarioService, ScriptService,
    UserService,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::export::{XmlSerializer, ZipArchiver};
use crate::infrastructure::persistence::create_document_store;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub export_service: Arc<ScenarioExportService>,
    pub user_service: UserService,
    pub room_service: RoomService,
    pub room_data_service: RoomDataService,
    pub scenario_service: ScenarioService,
    pub script_service: ScriptService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let store = create_document_store(&config).await?;

        // Export pipeline: XML documents bundled into one zip
        let export_service = Arc::new(ScenarioExportService::new(
            Arc::new(XmlSerializer::new()),
            Arc::new(ZipArchiver::new()),
        ));

        let user_service = UserService::new(store.clone());
        let room_service = RoomService::new(store.clone());
        let room_data_service = RoomDataService::new(store.clone());
        let scenario_service = ScenarioService::new(store.clone());
        let script_service = ScriptService::new(store.clone(), export_service.clone());

        Ok(Self {
            config,
            export_service,
            user_service,
            room_service,
            room_data_service,
            scenario_service,
            script_service,
        })
    }
}
