use thiserror::Error;

/// Failures of one page data load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Unknown page type: {0}")]
    UnknownPageType(String),

    #[error("Network error while fetching {path}: {message}")]
    Network { path: String, message: String },

    #[error("Failed to load {path}: HTTP {status}")]
    Http { path: String, status: u16 },

    #[error("Invalid data in {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LoadError::Http {
            path: "data/museums.json".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to load data/museums.json: HTTP 404");
        assert_eq!(
            LoadError::UnknownPageType("bars".into()).to_string(),
            "Unknown page type: bars"
        );
    }
}
