use tracing::debug;

use super::{client::SportmonksClient, types::Envelope};
use crate::error::Result;
use crate::models::Entity;

/// Typed lookups of provider entities, one resource path per entity kind.
#[derive(Debug, Clone)]
pub struct UpstreamService {
    client: SportmonksClient,
}

impl UpstreamService {
    pub fn new(client: SportmonksClient) -> Self {
        Self { client }
    }

    /// First page of the entity collection, unwrapped from the envelope.
    pub async fn get_all<E: Entity>(&self, include: Option<&str>) -> Result<Vec<E>> {
        let params: Vec<(&str, &str)> = include.map(|i| ("include", i)).into_iter().collect();
        let body = self.client.get(E::KIND.upstream_path(), &params).await?;
        let envelope: Envelope<Vec<E>> = serde_json::from_value(body)?;
        debug!(entity = %E::KIND, count = envelope.data.len(), "fetched provider collection");
        Ok(envelope.into_data())
    }

    /// Single entity by provider id, unwrapped from the envelope.
    pub async fn get_by_id<E: Entity>(&self, id: i64) -> Result<E> {
        let endpoint = format!("{}/{id}", E::KIND.upstream_path());
        let body = self.client.get(&endpoint, &[]).await?;
        let envelope: Envelope<E> = serde_json::from_value(body)?;
        Ok(envelope.into_data())
    }
}
