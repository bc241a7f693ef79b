//! Room Data Service - live table state streamed to everyone watching a room

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::application::ports::outbound::{
    read_document, write_document, DocumentPath, DocumentStorePort, DocumentSubscription,
};
use crate::application::services::room_service::ROOMS;
use crate::application::services::{ServiceError, ServiceResult};
use crate::domain::entities::{Room, RoomData, User};
use crate::domain::value_objects::RoomId;

pub const ROOMS_DATA: &str = "roomsData";

pub struct RoomDataService {
    store: Arc<dyn DocumentStorePort>,
}

impl RoomDataService {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    fn path(room_id: RoomId) -> DocumentPath {
        DocumentPath::new(ROOMS_DATA, room_id)
    }

    /// Replace the live data of a room; only the room owner may write it
    #[instrument(skip(self, user, data), fields(uid = %user.uid))]
    pub async fn update_room_data(
        &self,
        user: &User,
        room_id: RoomId,
        data: Map<String, Value>,
    ) -> ServiceResult<RoomData> {
        let room: Room = read_document(self.store.as_ref(), &DocumentPath::new(ROOMS, room_id))
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Room {}", room_id)))?;
        if room.uid != user.uid {
            return Err(ServiceError::Forbidden(format!(
                "room {} belongs to another user",
                room_id
            )));
        }

        let mut data = data;
        for key in ["roomId", "uid", "updatedAt"] {
            data.remove(key);
        }

        let room_data = RoomData {
            room_id,
            uid: user.uid.clone(),
            updated_at: self.store.server_timestamp(),
            data,
        };
        write_document(self.store.as_ref(), &Self::path(room_id), &room_data).await?;

        debug!(room_id = %room_id, "Updated room data");
        Ok(room_data)
    }

    pub async fn read_room_data(&self, room_id: RoomId) -> ServiceResult<Option<RoomData>> {
        Ok(read_document(self.store.as_ref(), &Self::path(room_id)).await?)
    }

    /// Listen for changes to a room's data; drop the subscription to stop
    pub async fn listen_room_data(&self, room_id: RoomId) -> ServiceResult<DocumentSubscription> {
        Ok(self.store.listen(&Self::path(room_id)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{RoomService, SaveRoomRequest};
    use crate::domain::value_objects::StoreUserId;
    use crate::infrastructure::persistence::InMemoryDocumentStore;

    fn user(uid: &str) -> User {
        User {
            store_user_id: StoreUserId::new(),
            uid: uid.to_string(),
            display_name: String::new(),
            twitter_screen_name: uid.to_string(),
            twitter_profile_image_url: String::new(),
        }
    }

    async fn setup() -> (RoomDataService, User, RoomId) {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new(16));
        let owner = user("owner");
        let room = RoomService::new(store.clone())
            .add_room(
                &owner,
                SaveRoomRequest {
                    name: "Table".to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("add room");
        (RoomDataService::new(store), owner, room.id)
    }

    fn payload(loop_count: u32) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("loop".to_string(), Value::from(loop_count));
        data
    }

    #[tokio::test]
    async fn test_listener_sees_current_then_updates() {
        let (service, owner, room_id) = setup().await;
        service
            .update_room_data(&owner, room_id, payload(1))
            .await
            .expect("first write");

        let mut subscription = service.listen_room_data(room_id).await.expect("listen");
        let current = subscription.next().await.flatten().expect("current data");
        assert_eq!(current["loop"], 1);

        service
            .update_room_data(&owner, room_id, payload(2))
            .await
            .expect("second write");
        let next = subscription.next().await.flatten().expect("updated data");
        assert_eq!(next["loop"], 2);
        assert_eq!(next["roomId"], room_id.to_string());
    }

    #[tokio::test]
    async fn test_only_owner_can_write() {
        let (service, _owner, room_id) = setup().await;
        let result = service
            .update_room_data(&user("visitor"), room_id, payload(1))
            .await;
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_unknown_room_is_not_found() {
        let (service, owner, _room_id) = setup().await;
        let result = service
            .update_room_data(&owner, RoomId::new(), payload(1))
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert!(service
            .read_room_data(RoomId::new())
            .await
            .expect("read")
            .is_none());
    }
}
