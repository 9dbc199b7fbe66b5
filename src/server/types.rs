use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

pub const INDEX_HTML: &str = "<h1>Myra ChatBot API</h1><p>API is running. Use endpoints to interact with the chatbot.</p>";
