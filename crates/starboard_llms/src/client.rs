//! The text-completion seam: prompt in, raw reply text out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Short identifier used in logs (e.g. "gemini").
    fn provider_id(&self) -> &str;

    /// Send a single prompt and return the model's reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for Arc<T> {
    fn provider_id(&self) -> &str {
        (**self).provider_id()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for Box<T> {
    fn provider_id(&self) -> &str {
        (**self).provider_id()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}
