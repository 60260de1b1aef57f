//! Mock provider implementation for testing and keyless development.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider.
pub struct MockTextProvider {
    enabled: bool,
    reply: Option<String>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            reply: None,
        }
    }

    /// Always answer with `reply`, whatever the prompt.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            enabled: true,
            reply: Some(reply.into()),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(self
            .reply
            .clone()
            .unwrap_or_else(|| format!("Mock response for: {}", prompt)))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echoes_prompt() {
        let provider = MockTextProvider::new(true);
        let text = provider.complete("capital of France?").await.unwrap();
        assert_eq!(text, "Mock response for: capital of France?");
    }

    #[tokio::test]
    async fn test_mock_fixed_reply() {
        let provider = MockTextProvider::with_reply("Paris is the capital.");
        assert_eq!(provider.complete("anything").await.unwrap(), "Paris is the capital.");
        assert!(provider.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_disabled_mock_fails() {
        let provider = MockTextProvider::new(false);
        let err = provider.complete("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
        assert!(provider.health_check().await.is_err());
    }
}
