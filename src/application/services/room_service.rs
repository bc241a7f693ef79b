//! Room Service - play rooms owned by a user
//!
//! Each room is written twice: the full document under `rooms/{id}` and a
//! name-only summary under `users/{sid}/rooms/{id}` for listing.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    query_documents, read_document, write_document, DocumentPath, DocumentStorePort,
};
use crate::application::services::error::{strip_reserved, validate_name};
use crate::application::services::user_service::USERS;
use crate::application::services::{ServiceError, ServiceResult};
use crate::domain::entities::{Room, RoomSummary, User};
use crate::domain::value_objects::{RoomId, ScriptId};

pub const ROOMS: &str = "rooms";

/// Room fields supplied by the editor
#[derive(Debug, Clone, Default)]
pub struct SaveRoomRequest {
    /// `None` creates a new room
    pub id: Option<RoomId>,
    pub name: String,
    pub script_id: Option<ScriptId>,
    pub extra: Map<String, Value>,
}

pub struct RoomService {
    store: Arc<dyn DocumentStorePort>,
}

impl RoomService {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    fn summary_collection(user: &User) -> String {
        format!("{}/{}/{}", USERS, user.store_user_id, ROOMS)
    }

    async fn write(&self, user: &User, room: &Room) -> ServiceResult<()> {
        let summary_path = DocumentPath::new(Self::summary_collection(user), room.id);
        write_document(self.store.as_ref(), &summary_path, &RoomSummary::of(room)).await?;
        write_document(self.store.as_ref(), &DocumentPath::new(ROOMS, room.id), room).await?;
        Ok(())
    }

    /// Create a room owned by `user`
    #[instrument(skip(self, user, request), fields(uid = %user.uid))]
    pub async fn add_room(&self, user: &User, request: SaveRoomRequest) -> ServiceResult<Room> {
        validate_name("Room", &request.name)?;

        let now = self.store.server_timestamp();
        let room = Room {
            id: RoomId::new(),
            name: request.name,
            uid: user.uid.clone(),
            create_user_id: user.store_user_id,
            script_id: request.script_id,
            created_at: now,
            updated_at: now,
            extra: strip_reserved(request.extra),
        };
        self.write(user, &room).await?;

        info!(room_id = %room.id, "Created room");
        Ok(room)
    }

    /// Overwrite a room, keeping its original creation time
    #[instrument(skip(self, user, request), fields(uid = %user.uid))]
    pub async fn update_room(
        &self,
        user: &User,
        id: RoomId,
        request: SaveRoomRequest,
    ) -> ServiceResult<Room> {
        validate_name("Room", &request.name)?;

        let summary_path = DocumentPath::new(Self::summary_collection(user), id);
        let existing: RoomSummary = read_document(self.store.as_ref(), &summary_path)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Room {}", id)))?;

        let room = Room {
            id,
            name: request.name,
            uid: user.uid.clone(),
            create_user_id: user.store_user_id,
            script_id: request.script_id,
            created_at: existing.created_at,
            updated_at: self.store.server_timestamp(),
            extra: strip_reserved(request.extra),
        };
        self.write(user, &room).await?;

        debug!(room_id = %room.id, "Updated room");
        Ok(room)
    }

    /// Create when the request has no id, update otherwise
    pub async fn save_room(&self, user: &User, request: SaveRoomRequest) -> ServiceResult<Room> {
        match request.id {
            Some(id) => self.update_room(user, id, request).await,
            None => self.add_room(user, request).await,
        }
    }

    /// Rooms owned by `user`
    pub async fn read_rooms(&self, user: &User) -> ServiceResult<Vec<RoomSummary>> {
        let rooms = query_documents(
            self.store.as_ref(),
            &Self::summary_collection(user),
            "uid",
            &Value::from(user.uid.as_str()),
        )
        .await?;
        Ok(rooms)
    }

    pub async fn read_room(&self, id: RoomId) -> ServiceResult<Room> {
        read_document(self.store.as_ref(), &DocumentPath::new(ROOMS, id))
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Room {}", id)))
    }

    /// Make sure a user has at least one room, creating `room-{screen name}` if not
    pub async fn ensure_default_room(&self, user: &User) -> ServiceResult<Vec<RoomSummary>> {
        let rooms = self.read_rooms(user).await?;
        if !rooms.is_empty() {
            return Ok(rooms);
        }

        self.add_room(
            user,
            SaveRoomRequest {
                name: user.default_room_name(),
                ..Default::default()
            },
        )
        .await?;
        self.read_rooms(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::StoreUserId;
    use crate::infrastructure::persistence::InMemoryDocumentStore;

    fn user(uid: &str) -> User {
        User {
            store_user_id: StoreUserId::new(),
            uid: uid.to_string(),
            display_name: "Writer".to_string(),
            twitter_screen_name: "writer".to_string(),
            twitter_profile_image_url: String::new(),
        }
    }

    fn named(name: &str) -> SaveRoomRequest {
        SaveRoomRequest {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_and_read_room() {
        let service = RoomService::new(Arc::new(InMemoryDocumentStore::new(16)));
        let owner = user("uid-1");

        let room = service.add_room(&owner, named("Table A")).await.expect("add");
        let loaded = service.read_room(room.id).await.expect("read");

        assert_eq!(loaded, room);
        assert_eq!(loaded.create_user_id, owner.store_user_id);
        let summaries = service.read_rooms(&owner).await.expect("list");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Table A");
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let service = RoomService::new(Arc::new(InMemoryDocumentStore::new(16)));
        let owner = user("uid-1");
        let room = service.add_room(&owner, named("Old")).await.expect("add");

        let script_id = ScriptId::new();
        let updated = service
            .save_room(
                &owner,
                SaveRoomRequest {
                    id: Some(room.id),
                    name: "New".to_string(),
                    script_id: Some(script_id),
                    extra: Map::new(),
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.created_at, room.created_at);
        assert_eq!(updated.script_id, Some(script_id));
        assert_eq!(service.read_room(room.id).await.expect("read").name, "New");
    }

    #[tokio::test]
    async fn test_update_of_someone_elses_room_is_not_found() {
        let service = RoomService::new(Arc::new(InMemoryDocumentStore::new(16)));
        let room = service.add_room(&user("uid-1"), named("Mine")).await.expect("add");

        let result = service
            .update_room(&user("uid-2"), room.id, named("Stolen"))
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_default_room_created_once() {
        let service = RoomService::new(Arc::new(InMemoryDocumentStore::new(16)));
        let owner = user("uid-1");

        let rooms = service.ensure_default_room(&owner).await.expect("ensure");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "room-writer");

        let again = service.ensure_default_room(&owner).await.expect("ensure again");
        assert_eq!(again.len(), 1);
    }

    #[tokio::test]
    async fn test_editor_cannot_override_owner_fields() {
        let service = RoomService::new(Arc::new(InMemoryDocumentStore::new(16)));
        let owner = user("uid-1");
        let mut extra = Map::new();
        extra.insert("uid".to_string(), Value::from("intruder"));
        extra.insert("layout".to_string(), Value::from("wide"));

        let room = service
            .add_room(
                &owner,
                SaveRoomRequest {
                    name: "Table".to_string(),
                    extra,
                    ..Default::default()
                },
            )
            .await
            .expect("add");

        let loaded = service.read_room(room.id).await.expect("read");
        assert_eq!(loaded.uid, "uid-1");
        assert_eq!(loaded.extra.get("layout"), Some(&Value::from("wide")));
        assert!(!loaded.extra.contains_key("uid"));
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let service = RoomService::new(Arc::new(InMemoryDocumentStore::new(16)));
        let result = service.add_room(&user("uid-1"), named(" ")).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
}
