use thiserror::Error;

/// 單次 HTTP 呼叫的失敗結果
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Request payload could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// 建立狀態碼錯誤；伺服器送來的 reason phrase 優先，其次是標準描述
    pub fn from_response(response: &reqwest::Response) -> Self {
        let wire_reason = response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok());

        Self::with_reason(response.status(), wire_reason)
    }

    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::with_reason(status, None)
    }

    fn with_reason(status: reqwest::StatusCode, reason: Option<&str>) -> Self {
        let status_text = reason
            .or_else(|| status.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());

        FetchError::Status {
            status: status.as_u16(),
            status_text,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
            FetchError::Encode(_) => "encode",
            FetchError::Transport(_) => "transport",
        }
    }

    /// 所有失敗都經過這裡寫入 operator log
    pub fn report(&self, request: &str) {
        tracing::error!(
            request = request,
            kind = self.kind(),
            "❌ Ruh-roh! Something's gone wrong: {}",
            self
        );
    }
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl ViewerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ViewerError::Fetch(_) => 2,
            ViewerError::IoError(_) => 1,
            ViewerError::ConfigError { .. }
            | ViewerError::InvalidConfigValueError { .. }
            | ViewerError::ConfigValidationError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_error_uses_canonical_reason() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Not Found");

        let err = FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(
            err,
            FetchError::Status { ref status_text, .. } if status_text == "Internal Server Error"
        ));
    }

    #[test]
    fn test_status_error_without_reason_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = FetchError::from_status(status);
        assert!(matches!(
            err,
            FetchError::Status { ref status_text, .. } if status_text == "599"
        ));
    }

    #[test]
    fn test_exit_codes() {
        let fetch: ViewerError = FetchError::from_status(StatusCode::BAD_GATEWAY).into();
        assert_eq!(fetch.exit_code(), 2);

        let config = ViewerError::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
    }
}
