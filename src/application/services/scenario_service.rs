//! Scenario Service - public scenario sheets authored in the editor

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::application::ports::outbound::{
    list_documents, read_document, write_document, DocumentPath, DocumentStorePort,
};
use crate::application::services::error::{strip_reserved, validate_name};
use crate::application::services::user_service::USERS;
use crate::application::services::{ServiceError, ServiceResult};
use crate::domain::entities::{Scenario, ScenarioSummary, User};
use crate::domain::value_objects::ScenarioId;

pub const SCENARIOS: &str = "scenarios";

#[derive(Debug, Clone, Default)]
pub struct CreateScenarioRequest {
    pub name: String,
    pub body: Map<String, Value>,
}

pub struct ScenarioService {
    store: Arc<dyn DocumentStorePort>,
}

impl ScenarioService {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    fn summary_collection(user: &User) -> String {
        format!("{}/{}/{}", USERS, user.store_user_id, SCENARIOS)
    }

    #[instrument(skip(self, user, request), fields(uid = %user.uid))]
    pub async fn add_scenario(
        &self,
        user: &User,
        request: CreateScenarioRequest,
    ) -> ServiceResult<Scenario> {
        validate_name("Scenario", &request.name)?;

        let now = self.store.server_timestamp();
        let scenario = Scenario {
            id: ScenarioId::new(),
            name: request.name,
            uid: user.uid.clone(),
            create_user_id: user.store_user_id,
            created_at: now,
            updated_at: now,
            body: strip_reserved(request.body),
        };

        write_document(
            self.store.as_ref(),
            &DocumentPath::new(Self::summary_collection(user), scenario.id),
            &ScenarioSummary::of(&scenario),
        )
        .await?;
        write_document(
            self.store.as_ref(),
            &DocumentPath::new(SCENARIOS, scenario.id),
            &scenario,
        )
        .await?;

        info!(scenario_id = %scenario.id, "Created scenario");
        Ok(scenario)
    }

    /// Names of every scenario the user has written
    pub async fn read_scenario_names(&self, user: &User) -> ServiceResult<Vec<ScenarioSummary>> {
        Ok(list_documents(self.store.as_ref(), &Self::summary_collection(user)).await?)
    }

    pub async fn read_scenario(&self, id: ScenarioId) -> ServiceResult<Scenario> {
        read_document(self.store.as_ref(), &DocumentPath::new(SCENARIOS, id))
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Scenario {}", id)))
    }
}
