//! Client side of the AI assistant service.
//!
//! Failures never reach the canvas: callers go through
//! [`describe_or_fallback`] and [`analyze_or_default`], or handle the
//! `FlowError` of `generate_flow` as a retry prompt.

pub mod http;
pub mod schema;
pub mod worker;

use async_trait::async_trait;
use log::{error, warn};

use crate::error::{FlowError, FlowResult};

pub use http::{AssistantConfig, HttpAssistant};
pub use schema::{
    DescriptionRequest, FlowAnalysis, FlowAnalysisRequest, FlowGenerationRequest, GeneratedFlow,
};
pub use worker::{AssistantEvent, AssistantJob, AssistantWorker};

/// Substituted for a description that could not be generated.
pub const FALLBACK_DESCRIPTION: &str = "Could not generate description.";

/// Chat reply when a generated flow came back without nodes or edges.
pub const RETRY_PROMPT: &str =
    "I encountered an issue generating your flow. Could you please describe your automation requirement again with more details?";

/// Chat reply when the generation request itself failed.
pub const GENERATION_FAILED: &str =
    "Sorry, there was an error creating your flow. Please try again.";

#[async_trait]
pub trait FlowAssistant: Send + Sync {
    async fn describe_node(&self, request: DescriptionRequest) -> FlowResult<String>;

    async fn generate_flow(&self, request: FlowGenerationRequest) -> FlowResult<GeneratedFlow>;

    async fn analyze_flow(&self, request: FlowAnalysisRequest) -> FlowResult<FlowAnalysis>;
}

pub async fn describe_or_fallback(
    assistant: &dyn FlowAssistant,
    request: DescriptionRequest,
) -> String {
    match assistant.describe_node(request).await {
        Ok(description) => description,
        Err(e) => {
            warn!("Node description failed: {}", e);
            FALLBACK_DESCRIPTION.to_string()
        }
    }
}

pub async fn analyze_or_default(
    assistant: &dyn FlowAssistant,
    request: FlowAnalysisRequest,
) -> FlowAnalysis {
    assistant.analyze_flow(request).await.unwrap_or_else(|e| {
        error!("Flow analysis failed: {}", e);
        FlowAnalysis::default()
    })
}

/// Chat reply for the outcome of a generation request.
///
/// The service answered but gave no usable flow (bad shape or an error
/// status): the user is asked to rephrase. Anything else means the request
/// never completed.
pub fn generation_reply(result: &FlowResult<GeneratedFlow>) -> String {
    match result {
        Ok(flow) => flow.announcement(),
        Err(FlowError::InvalidResponse(_) | FlowError::Assistant(_)) => RETRY_PROMPT.to_string(),
        Err(_) => GENERATION_FAILED.to_string(),
    }
}
