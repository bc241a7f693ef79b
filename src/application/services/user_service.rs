//! User Service - registration of editor users
//!
//! Identity comes from the external authentication provider as a `uid`; the
//! engine files everything a user owns under their store user id.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument};

use crate::application::ports::outbound::{
    query_documents, write_document, DocumentPath, DocumentStorePort,
};
use crate::application::services::{ServiceError, ServiceResult};
use crate::domain::entities::User;
use crate::domain::value_objects::StoreUserId;

pub const USERS: &str = "users";

/// Profile reported by the authentication provider at sign-in
#[derive(Debug, Clone, Default)]
pub struct SignInRequest {
    pub uid: String,
    pub display_name: String,
    pub twitter_screen_name: String,
    pub twitter_profile_image_url: String,
}

pub struct UserService {
    store: Arc<dyn DocumentStorePort>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    /// Find the user registered for a provider uid
    pub async fn find_by_uid(&self, uid: &str) -> ServiceResult<Option<User>> {
        let users: Vec<User> =
            query_documents(self.store.as_ref(), USERS, "uid", &Value::from(uid)).await?;
        Ok(users.into_iter().next())
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(uid = %request.uid))]
    pub async fn create_user(&self, request: SignInRequest) -> ServiceResult<User> {
        let user = User {
            store_user_id: StoreUserId::new(),
            uid: request.uid,
            display_name: request.display_name,
            twitter_screen_name: request.twitter_screen_name,
            twitter_profile_image_url: request.twitter_profile_image_url,
        };

        let path = DocumentPath::new(USERS, user.store_user_id);
        write_document(self.store.as_ref(), &path, &user).await?;

        info!(store_user_id = %user.store_user_id, "Registered user");
        Ok(user)
    }

    /// Return the registered user, registering them on first sign-in
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<User> {
        if request.uid.trim().is_empty() {
            return Err(ServiceError::InvalidInput("uid cannot be empty".to_string()));
        }

        match self.find_by_uid(&request.uid).await? {
            Some(user) => Ok(user),
            None => self.create_user(request).await,
        }
    }
}
