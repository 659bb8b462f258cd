use crate::utils::error::{Result, ViewerError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ViewerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ViewerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.dog_api_base", "https://dog.ceo/api").is_ok());
        assert!(validate_url("api.dog_api_base", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api.dog_api_base", "").is_err());
        assert!(validate_url("api.dog_api_base", "   ").is_err());
        assert!(validate_url("api.dog_api_base", "dog.ceo/api").is_err());
        assert!(validate_url("api.dog_api_base", "ftp://dog.ceo").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());

        let err = validate_one_of("logging.format", "pretty", &["compact", "json"]).unwrap_err();
        match err {
            ViewerError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "logging.format");
                assert_eq!(value, "pretty");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
