//! Write side of an entity collection, behind a trait so form submission
//! can run against a recording fake in tests.

use super::{client, ApiError};
use crate::shared::api_utils::{create_path, update_path};
use async_trait::async_trait;
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::EntityDescriptor;
use contracts::shared::multipart::MultipartPayload;
use serde_json::Value;

#[async_trait(?Send)]
pub trait EntityGateway {
    /// Create a resource; returns the stored entity
    async fn create(&self, payload: MultipartPayload) -> Result<Value, ApiError>;

    /// Partially update the resource addressed by `key`
    async fn update(&self, key: &EntityKey, payload: MultipartPayload) -> Result<Value, ApiError>;
}

/// `POST C/create/` and `PATCH C/K/update/`
#[derive(Debug, Clone, Copy)]
pub struct HttpGateway {
    collection: &'static str,
}

impl HttpGateway {
    pub fn new(descriptor: &EntityDescriptor) -> Self {
        Self {
            collection: descriptor.info.collection_name,
        }
    }
}

#[async_trait(?Send)]
impl EntityGateway for HttpGateway {
    async fn create(&self, payload: MultipartPayload) -> Result<Value, ApiError> {
        log::debug!("create {} ({} parts)", self.collection, payload.parts().len());
        client::post_multipart(&create_path(self.collection), &payload).await
    }

    async fn update(&self, key: &EntityKey, payload: MultipartPayload) -> Result<Value, ApiError> {
        log::debug!("update {}/{} ({} parts)", self.collection, key, payload.parts().len());
        client::patch_multipart(&update_path(self.collection, key), &payload).await
    }
}

/// The signed-in owner's school; it has no create endpoint and its update
/// path does not carry a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnProfileGateway;

pub const OWN_PROFILE_PATH: &str = "/schools/me/";

#[async_trait(?Send)]
impl EntityGateway for OwnProfileGateway {
    async fn create(&self, _payload: MultipartPayload) -> Result<Value, ApiError> {
        Err(ApiError::Server(
            "A school profile can only be updated".to_string(),
        ))
    }

    async fn update(&self, _key: &EntityKey, payload: MultipartPayload) -> Result<Value, ApiError> {
        log::debug!("update own profile ({} parts)", payload.parts().len());
        client::patch_multipart("/schools/me/update/", &payload).await
    }
}
