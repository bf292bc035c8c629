use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Chart error: {0}")]
    ChartError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GenError {
    /// Message suitable for the `detail` field of an error body.
    pub fn detail(&self) -> String {
        match self {
            GenError::NotFound(msg) | GenError::ValidationError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            GenError::ProviderError(_) | GenError::RequestError(_) | GenError::ResponseError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_detail_is_bare_message() {
        let err = GenError::NotFound("Chart image not found".into());
        assert_eq!(err.detail(), "Chart image not found");
        assert_eq!(err.to_string(), "Chart image not found");
    }

    #[test]
    fn provider_failures_are_grouped() {
        assert!(GenError::ProviderError("boom".into()).is_provider_failure());
        assert!(GenError::ResponseError("bad json".into()).is_provider_failure());
        assert!(!GenError::ChartError("draw".into()).is_provider_failure());
        assert_eq!(
            GenError::ProviderError("boom".into()).detail(),
            "Provider error: boom"
        );
    }
}
