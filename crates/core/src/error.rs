#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
