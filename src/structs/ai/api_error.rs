use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Body of a non-2xx reply: `{"type":"error","error":{...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}
