use async_trait::async_trait;
use std::fmt;

use crate::schema::Schema;
use crate::Result;

/// One instruction sent to a text-generation backend together with the
/// shape its answer must take.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub schema: Schema,
}

#[async_trait]
pub trait CompletionModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Issue a single request and return the raw response text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
