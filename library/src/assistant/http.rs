use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::FlowAssistant;
use super::schema::{
    DescriptionRequest, DescriptionResponse, FlowAnalysis, FlowAnalysisRequest,
    FlowGenerationRequest, GeneratedFlow,
};
use crate::error::{FlowError, FlowResult};

#[derive(Clone, Debug, PartialEq)]
pub struct AssistantConfig {
    /// Base of the API, e.g. `http://localhost:3001/api`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001/api".to_string(),
            timeout_secs: 30,
        }
    }
}

/// `FlowAssistant` over the assistant service's JSON endpoints.
#[derive(Clone, Debug)]
pub struct HttpAssistant {
    config: AssistantConfig,
    client: Client,
}

impl HttpAssistant {
    pub fn new(config: AssistantConfig) -> FlowResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/ai/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Body is read as text first so schema mismatches surface as
    /// `InvalidResponse` with the endpoint name.
    async fn post_text<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> FlowResult<String> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FlowError::Assistant(format!("{} returned {}", path, status)));
        }
        Ok(response.text().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> FlowResult<T> {
        let text = self.post_text(path, body).await?;
        serde_json::from_str(&text)
            .map_err(|e| FlowError::InvalidResponse(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl FlowAssistant for HttpAssistant {
    async fn describe_node(&self, request: DescriptionRequest) -> FlowResult<String> {
        let response: DescriptionResponse =
            self.post_json("generate-node-description", &request).await?;
        Ok(response.description)
    }

    async fn generate_flow(&self, request: FlowGenerationRequest) -> FlowResult<GeneratedFlow> {
        let text = self.post_text("generate-flow", &request).await?;
        GeneratedFlow::parse(&text)
    }

    async fn analyze_flow(&self, request: FlowAnalysisRequest) -> FlowResult<FlowAnalysis> {
        self.post_json("analyze-flow-completeness", &request).await
    }
}
