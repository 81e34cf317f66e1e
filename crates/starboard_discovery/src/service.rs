//! The discovery entry point: prompt the model, normalize the reply, and
//! fall back on any failure.

use std::time::Instant;

use starboard_core::{DiscoverRequest, DiscoveryResult};
use starboard_llms::ModelClient;
use starboard_observability::{discovery_span, record_duration, record_error, upstream_span};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::ExtractError;
use crate::fallback::FallbackGenerator;
use crate::normalize::Normalizer;
use crate::prompt::build_discovery_prompt;

pub struct DiscoveryService<C> {
    client: C,
    normalizer: Normalizer,
}

impl<C: ModelClient> DiscoveryService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            normalizer: Normalizer::default(),
        }
    }

    /// Replace the keyword fallback table.
    pub fn with_fallback(mut self, fallback: FallbackGenerator) -> Self {
        self.normalizer = Normalizer::new(fallback);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ranked suggestions for `description`. Never fails: upstream errors,
    /// empty replies and unusable JSON all yield the fallback result.
    pub async fn discover(&self, description: &str) -> DiscoveryResult {
        let request_id = Uuid::new_v4();
        let span = discovery_span!(request_id);

        async move {
            let started = Instant::now();
            let result = self.run(description).await;

            record_duration("duration_ms", started.elapsed());
            let span = tracing::Span::current();
            span.record("source", result.source().as_str());
            span.record("total_found", result.total_found() as u64);
            tracing::info!(
                source = %result.source(),
                total_found = result.total_found(),
                "discovery complete"
            );
            result
        }
        .instrument(span)
        .await
    }

    pub async fn discover_request(&self, request: &DiscoverRequest) -> DiscoveryResult {
        self.discover(request.description()).await
    }

    async fn run(&self, description: &str) -> DiscoveryResult {
        let prompt = build_discovery_prompt(description);
        let upstream = upstream_span!(self.client.provider_id());

        let reply = async {
            let started = Instant::now();
            let reply = self.client.complete(&prompt).await;
            record_duration("duration_ms", started.elapsed());
            reply
        }
        .instrument(upstream)
        .await;

        match reply {
            Ok(text) if !text.trim().is_empty() => self.normalizer.normalize(&text, description),
            Ok(_) => self.degrade(
                ExtractError::UpstreamFailure("empty reply".to_string()),
                description,
            ),
            Err(e) => self.degrade(ExtractError::from(e), description),
        }
    }

    fn degrade(&self, err: ExtractError, description: &str) -> DiscoveryResult {
        record_error(&err);
        self.normalizer.fallback().generate(description)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use starboard_core::ResultSource;
    use starboard_llms::Error;

    use super::*;
    use crate::fallback::{KeywordPredicate, KeywordRule};

    /// Replies with fixed text and records the prompts it saw.
    struct ScriptedClient {
        reply: String,
        calls: AtomicUsize,
        last_prompt: std::sync::Mutex<Option<String>>,
    }

    impl ScriptedClient {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedClient {
        fn provider_id(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, prompt: &str) -> starboard_llms::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl ModelClient for FailingClient {
        fn provider_id(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _prompt: &str) -> starboard_llms::Result<String> {
            Err(Error::Timeout(30))
        }
    }

    #[tokio::test]
    async fn test_ai_path() {
        let client = ScriptedClient::new(
            r#"Here: {"suggestions":[{"name":"Coldplay","category":"Band","confidence_score":0.97,"estimated_fanbase":50000000}],"query_interpretation":"British rock bands"}"#,
        );
        let service = DiscoveryService::new(client);
        let result = service.discover("British rock band").await;

        assert_eq!(result.source(), ResultSource::Ai);
        assert_eq!(result.total_found(), 1);
        assert_eq!(result.suggestions()[0].name, "Coldplay");
        assert_eq!(result.query_interpretation(), "British rock bands");

        let client = service.client();
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        let prompt = client.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("\"British rock band\""));
    }

    #[tokio::test]
    async fn test_upstream_error_falls_back() {
        let service = DiscoveryService::new(FailingClient);
        let result = service.discover("Punjabi singer and British rock fan").await;
        assert!(result.is_fallback());
        assert_eq!(result.total_found(), 2);
        assert_eq!(
            result.query_interpretation(),
            "Fallback search results for: Punjabi singer and British rock fan"
        );
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let service = DiscoveryService::new(ScriptedClient::new("   \n"));
        let result = service.discover("xyz completely unrelated text").await;
        assert!(result.is_fallback());
        assert_eq!(result.suggestions()[0].name, "Global Celebrity");
    }

    #[tokio::test]
    async fn test_unparseable_reply_matches_direct_fallback() {
        let description = "an Indian singer";
        let service = DiscoveryService::new(ScriptedClient::new("I am not sure, sorry."));
        let result = service.discover(description).await;
        assert_eq!(result, FallbackGenerator::default().generate(description));
    }

    #[tokio::test]
    async fn test_custom_fallback_table() {
        let mut record = FallbackGenerator::default().generate("none").into_suggestions()[0].clone();
        record.name = "Local Hero".into();
        let service = DiscoveryService::new(FailingClient).with_fallback(FallbackGenerator::new(
            vec![KeywordRule::new(KeywordPredicate::any(["hero"]), record)],
        ));
        let result = service.discover("hometown hero").await;
        assert_eq!(result.suggestions()[0].name, "Local Hero");
    }

    #[tokio::test]
    async fn test_discover_request() {
        let service = DiscoveryService::new(FailingClient);
        let request = DiscoverRequest::new("  British rock  ").unwrap();
        let result = service.discover_request(&request).await;
        assert_eq!(
            result.query_interpretation(),
            "Fallback search results for: British rock"
        );
    }

    #[tokio::test]
    async fn test_shared_across_tasks() {
        let service = Arc::new(DiscoveryService::new(ScriptedClient::new(
            r#"{"suggestions":[{"name":"A"},{"name":"B"}]}"#,
        )));
        let mut handles = Vec::new();
        for i in 0..8 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.discover(&format!("query {}", i)).await
            }));
        }
        for handle in handles {
            let result = handle.await.unwrap();
            assert_eq!(result.total_found(), 2);
        }
        assert_eq!(service.client().calls.load(Ordering::SeqCst), 8);
    }
}
