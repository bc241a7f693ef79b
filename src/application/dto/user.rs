use serde::{Deserialize, Serialize};

use crate::application::services::SignInRequest;
use crate::domain::entities::{RoomSummary, User};

/// Profile forwarded by the front end after the provider signs the user in
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequestDto {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub twitter_screen_name: String,
    #[serde(default)]
    pub twitter_profile_image_url: String,
}

impl SignInRequestDto {
    pub fn into_request(self, uid: String) -> SignInRequest {
        SignInRequest {
            uid,
            display_name: self.display_name,
            twitter_screen_name: self.twitter_screen_name,
            twitter_profile_image_url: self.twitter_profile_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub store_user_id: String,
    pub uid: String,
    pub display_name: String,
    pub twitter_screen_name: String,
    pub twitter_profile_image_url: String,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            store_user_id: user.store_user_id.to_string(),
            uid: user.uid,
            display_name: user.display_name,
            twitter_screen_name: user.twitter_screen_name,
            twitter_profile_image_url: user.twitter_profile_image_url,
        }
    }
}

/// Signed-in user plus their rooms (at least the default one)
#[derive(Debug, Serialize)]
pub struct SessionResponseDto {
    pub user: UserResponseDto,
    pub rooms: Vec<RoomSummary>,
}
