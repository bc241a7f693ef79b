//! Script Service - private scenario scripts and their export
//!
//! Scripts follow the same dual-write layout as rooms. Only the owner can
//! read a script back; to anyone else it does not exist.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument};

use crate::application::dto::ExportScenarioRequestDto;
use crate::application::ports::outbound::{
    list_documents, read_document, write_document, DocumentPath, DocumentStorePort,
    SavedArchive,
};
use crate::application::services::error::{strip_reserved, validate_name};
use crate::application::services::user_service::USERS;
use crate::application::services::{
    ScenarioExport, ScenarioExportService, ServiceError, ServiceResult,
};
use crate::domain::entities::{Script, ScriptSummary, User};
use crate::domain::value_objects::ScriptId;

pub const SCRIPTS: &str = "scripts";

#[derive(Debug, Clone, Default)]
pub struct SaveScriptRequest {
    /// `None` creates a new script
    pub id: Option<ScriptId>,
    pub name: String,
    pub body: Map<String, Value>,
}

pub struct ScriptService {
    store: Arc<dyn DocumentStorePort>,
    exporter: Arc<ScenarioExportService>,
}

impl ScriptService {
    pub fn new(store: Arc<dyn DocumentStorePort>, exporter: Arc<ScenarioExportService>) -> Self {
        Self { store, exporter }
    }

    fn summary_collection(user: &User) -> String {
        format!("{}/{}/{}", USERS, user.store_user_id, SCRIPTS)
    }

    async fn write(&self, user: &User, script: &Script) -> ServiceResult<()> {
        let summary_path = DocumentPath::new(Self::summary_collection(user), script.id);
        write_document(self.store.as_ref(), &summary_path, &ScriptSummary::of(script)).await?;
        write_document(
            self.store.as_ref(),
            &DocumentPath::new(SCRIPTS, script.id),
            script,
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self, user, request), fields(uid = %user.uid))]
    pub async fn add_script(&self, user: &User, request: SaveScriptRequest) -> ServiceResult<Script> {
        validate_name("Script", &request.name)?;

        let now = self.store.server_timestamp();
        let script = Script {
            id: ScriptId::new(),
            name: request.name,
            uid: user.uid.clone(),
            create_user_id: user.store_user_id,
            created_at: now,
            updated_at: now,
            body: strip_reserved(request.body),
        };
        self.write(user, &script).await?;

        info!(script_id = %script.id, "Created script");
        Ok(script)
    }

    /// Overwrite a script, keeping its original creation time
    #[instrument(skip(self, user, request), fields(uid = %user.uid))]
    pub async fn update_script(
        &self,
        user: &User,
        id: ScriptId,
        request: SaveScriptRequest,
    ) -> ServiceResult<Script> {
        validate_name("Script", &request.name)?;

        let summary_path = DocumentPath::new(Self::summary_collection(user), id);
        let existing: ScriptSummary = read_document(self.store.as_ref(), &summary_path)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Script {}", id)))?;

        let script = Script {
            id,
            name: request.name,
            uid: user.uid.clone(),
            create_user_id: user.store_user_id,
            created_at: existing.created_at,
            updated_at: self.store.server_timestamp(),
            body: strip_reserved(request.body),
        };
        self.write(user, &script).await?;

        debug!(script_id = %script.id, "Updated script");
        Ok(script)
    }

    pub async fn save_script(&self, user: &User, request: SaveScriptRequest) -> ServiceResult<Script> {
        match request.id {
            Some(id) => self.update_script(user, id, request).await,
            None => self.add_script(user, request).await,
        }
    }

    pub async fn read_script_names(&self, user: &User) -> ServiceResult<Vec<ScriptSummary>> {
        Ok(list_documents(self.store.as_ref(), &Self::summary_collection(user)).await?)
    }

    pub async fn read_script(&self, user: &User, id: ScriptId) -> ServiceResult<Script> {
        let script: Option<Script> =
            read_document(self.store.as_ref(), &DocumentPath::new(SCRIPTS, id)).await?;
        script
            .filter(|script| script.uid == user.uid)
            .ok_or_else(|| ServiceError::NotFound(format!("Script {}", id)))
    }

    /// Delete a script and its summary; reports failure as `false`
    #[instrument(skip(self, user), fields(uid = %user.uid))]
    pub async fn delete_script(&self, user: &User, id: ScriptId) -> bool {
        match self.try_delete(user, id).await {
            Ok(()) => {
                info!(script_id = %id, "Deleted script");
                true
            }
            Err(e) => {
                error!(script_id = %id, error = %e, "Failed to delete script");
                false
            }
        }
    }

    async fn try_delete(&self, user: &User, id: ScriptId) -> ServiceResult<()> {
        self.read_script(user, id).await?;
        self.store
            .delete(&DocumentPath::new(SCRIPTS, id))
            .await?;
        self.store
            .delete(&DocumentPath::new(Self::summary_collection(user), id))
            .await?;
        Ok(())
    }

    /// Export a stored script whose body holds the cast and public metadata
    #[instrument(skip(self, user), fields(uid = %user.uid))]
    pub async fn export_script(&self, user: &User, id: ScriptId) -> ServiceResult<SavedArchive> {
        let script = self.read_script(user, id).await?;

        let dto: ExportScenarioRequestDto = serde_json::from_value(Value::Object(script.body))
            .map_err(|e| ServiceError::InvalidInput(format!("Script {} is not exportable: {}", id, e)))?;
        let export = ScenarioExport::try_from(dto)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        Ok(self.exporter.export_scenario(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{
        ArchiveError, ArchivePort, DocumentSerializerPort, NamedTextFile, SerializationError,
    };
    use crate::domain::value_objects::{DocumentElement, StoreUserId};
    use crate::infrastructure::persistence::InMemoryDocumentStore;
    use serde_json::json;

    struct TagSerializer;

    impl DocumentSerializerPort for TagSerializer {
        fn to_markup(&self, root: &DocumentElement) -> Result<String, SerializationError> {
            Ok(format!("<{}/>", root.tag))
        }
    }

    struct ListingArchiver;

    impl ArchivePort for ListingArchiver {
        fn save(
            &self,
            files: Vec<NamedTextFile>,
            base_name: &str,
        ) -> Result<SavedArchive, ArchiveError> {
            let listing = files
                .iter()
                .map(|f| f.filename.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(SavedArchive {
                file_name: format!("{}.zip", base_name),
                content_type: "application/zip".to_string(),
                bytes: listing.into_bytes(),
            })
        }
    }

    fn service() -> ScriptService {
        let exporter = ScenarioExportService::new(Arc::new(TagSerializer), Arc::new(ListingArchiver));
        ScriptService::new(Arc::new(InMemoryDocumentStore::new(16)), Arc::new(exporter))
    }

    fn user(uid: &str) -> User {
        User {
            store_user_id: StoreUserId::new(),
            uid: uid.to_string(),
            display_name: String::new(),
            twitter_screen_name: uid.to_string(),
            twitter_profile_image_url: String::new(),
        }
    }

    fn exportable_body() -> Map<String, Value> {
        match json!({
            "characters": ["BoyStudent", "GirlStudent"],
            "settingLabel": "学校",
            "numberOfLoops": 2,
            "daysPerLoop": 3,
            "extraText": "",
            "incidents": []
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn request(name: &str, body: Map<String, Value>) -> SaveScriptRequest {
        SaveScriptRequest {
            id: None,
            name: name.to_string(),
            body,
        }
    }

    #[tokio::test]
    async fn test_only_owner_reads_script() {
        let service = service();
        let owner = user("owner");
        let script = service
            .add_script(&owner, request("Script", Map::new()))
            .await
            .expect("add");

        assert_eq!(service.read_script(&owner, script.id).await.expect("read").id, script.id);
        let other = service.read_script(&user("other"), script.id).await;
        assert!(matches!(other, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_upserts_and_keeps_created_at() {
        let service = service();
        let owner = user("owner");
        let created = service
            .save_script(&owner, request("Draft", Map::new()))
            .await
            .expect("create");

        let mut update = request("Final", Map::new());
        update.id = Some(created.id);
        let updated = service.save_script(&owner, update).await.expect("update");

        assert_eq!(updated.created_at, created.created_at);
        let names = service.read_script_names(&owner).await.expect("names");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].name, "Final");
    }

    #[tokio::test]
    async fn test_delete_reports_outcome() {
        let service = service();
        let owner = user("owner");
        let script = service
            .add_script(&owner, request("Doomed", Map::new()))
            .await
            .expect("add");

        assert!(!service.delete_script(&user("other"), script.id).await);
        assert!(service.delete_script(&owner, script.id).await);
        assert!(!service.delete_script(&owner, script.id).await);
        assert!(service.read_script_names(&owner).await.expect("names").is_empty());
    }

    #[tokio::test]
    async fn test_export_stored_script() {
        let service = service();
        let owner = user("owner");
        let script = service
            .add_script(&owner, request("Export me", exportable_body()))
            .await
            .expect("add");

        let archive = service.export_script(&owner, script.id).await.expect("export");
        assert_eq!(archive.file_name, "scenario.zip");
        let listing = String::from_utf8(archive.bytes).expect("utf8");
        assert_eq!(listing, "男子学生.xml\n女子学生.xml\n公開シート.xml");
    }

    #[tokio::test]
    async fn test_export_of_incomplete_script_is_invalid() {
        let service = service();
        let owner = user("owner");
        let script = service
            .add_script(&owner, request("Empty", Map::new()))
            .await
            .expect("add");

        let result = service.export_script(&owner, script.id).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
}
