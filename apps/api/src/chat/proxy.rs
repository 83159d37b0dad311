use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::chat::prompts::{build_chat_prompt, FALLBACK_REPLY, PLACEHOLDER_REPLY};
use crate::llm_client::extract::extract_text;
use crate::llm_client::{LlmError, TextProvider};

/// What a single chat turn produced. Every variant carries a user-safe reply.
#[derive(Debug)]
pub enum ChatOutcome {
    Replied(String),
    /// Blank message; provider was not called.
    Placeholder,
    /// Provider failed; `reason` is for operators only.
    Fallback { reason: LlmError },
}

impl ChatOutcome {
    pub fn reply(&self) -> &str {
        match self {
            ChatOutcome::Replied(text) => text,
            ChatOutcome::Placeholder => PLACEHOLDER_REPLY,
            ChatOutcome::Fallback { .. } => FALLBACK_REPLY,
        }
    }
}

/// Stateless proxy: one provider call per non-blank message, bounded by `timeout`.
#[derive(Clone)]
pub struct ChatProxy {
    provider: Arc<dyn TextProvider>,
    timeout: Duration,
}

impl ChatProxy {
    pub fn new(provider: Arc<dyn TextProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub async fn chat_reply(&self, message: &str) -> ChatOutcome {
        let message = message.trim();
        if message.is_empty() {
            return ChatOutcome::Placeholder;
        }

        match self.ask_provider(message).await {
            Ok(text) => ChatOutcome::Replied(text),
            Err(reason) => {
                warn!("Chat fell back to canned reply: {reason}");
                ChatOutcome::Fallback { reason }
            }
        }
    }

    async fn ask_provider(&self, message: &str) -> Result<String, LlmError> {
        let prompt = build_chat_prompt(message);
        let envelope = tokio::time::timeout(self.timeout, self.provider.generate(&prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;
        extract_text(&envelope).ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    pub(crate) enum Behavior {
        Respond(Value),
        Fail,
        Hang,
    }

    /// Provider double that records how often it was called.
    pub(crate) struct FakeProvider {
        pub behavior: Behavior,
        pub calls: AtomicUsize,
        pub last_prompt: std::sync::Mutex<Option<String>>,
    }

    impl FakeProvider {
        pub fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextProvider for FakeProvider {
        async fn generate(&self, prompt: &str) -> Result<Value, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.behavior {
                Behavior::Respond(value) => Ok(value.clone()),
                Behavior::Fail => Err(LlmError::Api {
                    status: 403,
                    message: "API key not valid".to_string(),
                }),
                Behavior::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    fn proxy(provider: Arc<FakeProvider>) -> ChatProxy {
        ChatProxy::new(provider, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_blank_message_skips_provider() {
        let provider = FakeProvider::new(Behavior::Respond(json!({ "text": "unused" })));
        let outcome = proxy(provider.clone()).chat_reply("  ").await;
        assert!(matches!(outcome, ChatOutcome::Placeholder));
        assert_eq!(outcome.reply(), PLACEHOLDER_REPLY);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_reply_is_extracted_from_envelope() {
        let provider = FakeProvider::new(Behavior::Respond(json!({
            "candidates": [{ "content": { "parts": [{ "text": "That sounds like a lot to hold." }] } }]
        })));
        let outcome = proxy(provider.clone()).chat_reply("  I'm worried \n").await;
        assert_eq!(outcome.reply(), "That sounds like a lot to hold.");
        assert_eq!(provider.calls(), 1);
        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.ends_with("Parent: I'm worried\nCompanion:"));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let provider = FakeProvider::new(Behavior::Fail);
        let outcome = proxy(provider.clone()).chat_reply("hello").await;
        assert!(matches!(outcome, ChatOutcome::Fallback { .. }));
        assert_eq!(outcome.reply(), FALLBACK_REPLY);
        assert!(!outcome.reply().contains("API key"));
    }

    #[tokio::test]
    async fn test_garbled_envelope_falls_back() {
        let provider = FakeProvider::new(Behavior::Respond(json!({ "candidates": [{}] })));
        let outcome = proxy(provider).chat_reply("hello").await;
        assert!(matches!(
            outcome,
            ChatOutcome::Fallback {
                reason: LlmError::EmptyContent
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out_to_fallback() {
        let provider = FakeProvider::new(Behavior::Hang);
        let outcome = proxy(provider.clone()).chat_reply("hello").await;
        assert!(matches!(
            outcome,
            ChatOutcome::Fallback {
                reason: LlmError::Timeout(_)
            }
        ));
        assert_eq!(provider.calls(), 1);
    }
}
