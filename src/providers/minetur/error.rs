use thiserror::Error;

#[derive(Debug, Error)]
pub enum MineturError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Upstream HTTP error: {0}")]
    Http(reqwest::StatusCode),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Upstream rejected query: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_http_status() {
        let err = MineturError::Http(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Upstream HTTP error: 502 Bad Gateway");
    }

    #[test]
    fn error_display_parse() {
        let err = MineturError::Parse("expected value at line 1".into());
        assert_eq!(err.to_string(), "Parse error: expected value at line 1");
    }

    #[test]
    fn error_display_rejected() {
        let err = MineturError::Rejected("SIN RESULTADOS".into());
        assert_eq!(err.to_string(), "Upstream rejected query: SIN RESULTADOS");
    }
}
