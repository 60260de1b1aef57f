use serde::Serialize;

/// Uniform response wrapper used by every route.
///
/// Exactly one of `data` / `error` is set on a `/bfhl` response; the health
/// envelope carries neither.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(official_email: &str, data: T) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(official_email: &str, error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }
}

impl Envelope<()> {
    pub fn healthy(official_email: &str) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
            error: None,
        }
    }
}
