//! Tool dispatch
//!
//! Every transport funnels into [`ToolDispatcher::dispatch`], which runs the
//! validate → query → assemble pipeline for one of the two registered tools.

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::domain::errors::GatewayError;
use crate::domain::models::ToolCallEnvelope;
use crate::domain::ports::RepositoryProvider;
use crate::services::criteria_builder::{BuiltCriteria, CriteriaBuilder, SearchDomain};
use crate::services::result_assembler::{ResultAssembler, ToolOutput};
use crate::services::search_service::{CatalogSearchService, ContentSearchService};

pub const SEARCH_PRODUCTS: &str = "search_products";
pub const SEARCH_POSTS: &str = "search_posts";

/// The tools this gateway knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    SearchProducts,
    SearchPosts,
}

impl ToolName {
    pub const ALL: [Self; 2] = [Self::SearchProducts, Self::SearchPosts];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            SEARCH_PRODUCTS => Some(Self::SearchProducts),
            SEARCH_POSTS => Some(Self::SearchPosts),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SearchProducts => SEARCH_PRODUCTS,
            Self::SearchPosts => SEARCH_POSTS,
        }
    }

    pub const fn domain(&self) -> SearchDomain {
        match self {
            Self::SearchProducts => SearchDomain::Catalog,
            Self::SearchPosts => SearchDomain::Content,
        }
    }
}

/// Why a call did not produce a [`ToolOutput`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Failed(#[from] GatewayError),
}

pub struct ToolDispatcher {
    catalog: CatalogSearchService,
    content: ContentSearchService,
}

impl ToolDispatcher {
    pub fn new(provider: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            catalog: CatalogSearchService::new(Arc::clone(&provider)),
            content: ContentSearchService::new(provider),
        }
    }

    /// Run one tool call to completion. Arguments are never logged.
    pub async fn dispatch(&self, envelope: ToolCallEnvelope) -> Result<ToolOutput, DispatchError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("tool_call", %request_id, tool = %envelope.name);

        async move {
            let started = Instant::now();
            let Some(tool) = ToolName::parse(&envelope.name) else {
                warn!("unknown tool requested");
                return Err(DispatchError::UnknownTool(envelope.name));
            };

            let outcome = self.run(tool, &envelope).await;
            let elapsed_ms = started.elapsed().as_millis();
            match &outcome {
                Ok(output) => info!(elapsed_ms, summary = %output.message, "tool call succeeded"),
                Err(err) if err.is_client_error() => info!(
                    elapsed_ms,
                    error = %err,
                    field = err.validation_field(),
                    "tool call rejected"
                ),
                Err(err) if err.is_connection() => {
                    warn!(elapsed_ms, error = %err, "platform unreachable");
                }
                Err(err) => warn!(elapsed_ms, error = %err, "tool call failed"),
            }
            outcome.map_err(DispatchError::from)
        }
        .instrument(span)
        .await
    }

    async fn run(&self, tool: ToolName, envelope: &ToolCallEnvelope) -> Result<ToolOutput, GatewayError> {
        match CriteriaBuilder::build(tool.domain(), &envelope.arguments)? {
            BuiltCriteria::Catalog {
                criteria,
                credentials,
            } => {
                let result = self.catalog.search(&criteria, credentials).await?;
                ResultAssembler::render_catalog(&result)
            }
            BuiltCriteria::Content { criteria, site } => {
                let result = self.content.search(&criteria, site).await?;
                ResultAssembler::render_content(&result)
            }
        }
    }
}
