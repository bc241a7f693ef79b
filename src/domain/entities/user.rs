//! Registered editor user

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StoreUserId;

/// A user as stored in `users/{storeUserId}`
///
/// `uid` is the identity assigned by the external authentication provider;
/// `store_user_id` is the document id everything else is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub store_user_id: StoreUserId,
    pub uid: String,
    pub display_name: String,
    pub twitter_screen_name: String,
    pub twitter_profile_image_url: String,
}

impl User {
    /// Name given to the room created on first sign-in
    pub fn default_room_name(&self) -> String {
        format!("room-{}", self.twitter_screen_name)
    }
}
