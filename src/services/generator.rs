use async_trait::async_trait;

use crate::error::AppResult;
use crate::prompt::GenerationRequest;

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Produces the announcement text for a prepared request. Implementations
    /// report delivery problems through the error channel and reserve the Ok
    /// value for text that came back from the model.
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}
