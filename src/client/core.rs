use crate::client::config::ClientConfig;
use crate::client::request::{self, ENTITIES_PATH, MESSAGE_PATH};
use crate::client::response::process;
use crate::client::validation::{blank_entity_id, validate_entity_id, validate_sentence};
use crate::client::WitClientBuilder;
use crate::logging::{Reporter, Severity};
use crate::transport::HttpTransport;
use crate::types::{Entity, EntityDescriptor, SentenceRequest, SentenceResult};
use crate::Result;
use reqwest::Method;
use tracing::info;

/// Client for the Wit HTTP API.
///
/// Cheap to clone; clones share the connection pool. Every operation is a single
/// request/response exchange with no retry and no timeout; wrap calls in
/// `tokio::time::timeout` when one is needed.
#[derive(Debug, Clone)]
pub struct WitClient {
    pub(crate) transport: HttpTransport,
    pub(crate) reporter: Reporter,
    pub(crate) api_version: String,
}

impl WitClient {
    /// Build a client from a config with default transport settings and no log sinks.
    pub fn new(config: ClientConfig) -> Result<Self> {
        WitClientBuilder::new().config(config).build()
    }

    pub fn builder() -> WitClientBuilder {
        WitClientBuilder::new()
    }

    pub fn severity(&self) -> Severity {
        self.reporter.severity()
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Extract the meaning of a sentence.
    ///
    /// Validation failures go through the severity policy. Under anything but
    /// [`Severity::Exceptions`] the request is still sent as given.
    pub async fn sentence_meaning(&self, sentence: &SentenceRequest) -> Result<SentenceResult> {
        if let Some(error) = validate_sentence(sentence) {
            self.reporter
                .report(Some("sentence validation failed"), error)
                .await?;
        }

        let query = request::sentence_query(sentence, &self.api_version)?;
        let response = self
            .transport
            .send(Method::GET, &[MESSAGE_PATH], &query, None)
            .await?;
        process(&self.reporter, response).await
    }

    /// Names of all entities in the app.
    pub async fn list_entities(&self) -> Result<Vec<String>> {
        let response = self
            .transport
            .send(
                Method::GET,
                &[ENTITIES_PATH],
                &request::version_query(&self.api_version),
                None,
            )
            .await?;
        process(&self.reporter, response).await
    }

    /// Create an entity and return it as stored by the service.
    pub async fn create_entity(&self, id: &str, description: &str) -> Result<Entity> {
        let descriptor = EntityDescriptor::new(id, description);
        let body = serde_json::to_value(&descriptor)?;
        let response = self
            .transport
            .send(
                Method::POST,
                &[ENTITIES_PATH],
                &request::version_query(&self.api_version),
                Some(&body),
            )
            .await?;
        let entity: Entity = process(&self.reporter, response).await?;
        info!(entity = id, "created wit entity");
        Ok(entity)
    }

    /// Look up an entity, including its validated expressions.
    ///
    /// A blank id is reported through the severity policy and then returned as an
    /// error under every severity: there is no entity route to send it to.
    pub async fn get_entity(&self, id: &str) -> Result<Entity> {
        if let Some(error) = validate_entity_id(id) {
            self.reporter
                .report(Some("entity lookup validation failed"), error)
                .await?;
            return Err(blank_entity_id());
        }

        let response = self
            .transport
            .send(
                Method::GET,
                &[ENTITIES_PATH, id],
                &request::version_query(&self.api_version),
                None,
            )
            .await?;
        process(&self.reporter, response).await
    }
}
