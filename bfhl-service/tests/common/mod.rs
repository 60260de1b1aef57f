use bfhl_service::config::{BfhlConfig, GeminiSettings, IdentityConfig, DEFAULT_GEMINI_API_BASE};
use bfhl_service::services::providers::TextProvider;
use bfhl_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_EMAIL: &str = "student@example.edu";

pub fn test_config() -> BfhlConfig {
    BfhlConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        identity: IdentityConfig {
            official_email: TEST_EMAIL.to_string(),
        },
        gemini: GeminiSettings {
            api_key: String::new(),
            model: "gemini-pro".to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: 5,
        },
    }
}

pub struct TestApp {
    pub http_address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn with the provider the configuration selects (the mock, since the
    /// test configuration has no API key).
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");
        Self::serve(app).await
    }

    pub async fn spawn_with_provider(text_provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), text_provider)
            .await
            .expect("Failed to build test application");
        Self::serve(app).await
    }

    async fn serve(app: Application) -> Self {
        let http_address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            client,
        }
    }

    /// POST a raw JSON value to `/bfhl`, returning status and parsed body.
    pub async fn post_bfhl(&self, body: serde_json::Value) -> (u16, serde_json::Value) {
        let response = self
            .client
            .post(format!("{}/bfhl", self.http_address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse JSON");
        (status, body)
    }
}
