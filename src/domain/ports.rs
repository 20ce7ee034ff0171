use crate::utils::error::Result;
use async_trait::async_trait;

/// The single effectful seam: prompt in, reading text out.
/// Implemented by the Gemini adapter in production and by stubs in tests.
#[async_trait]
pub trait ReadingClient: Send + Sync {
    async fn submit(&self, prompt: &str) -> Result<String>;
}
