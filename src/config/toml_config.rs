use crate::core::endpoints::{DEFAULT_COMMENTS_ENDPOINT, DEFAULT_DOG_API_BASE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::{validate_one_of, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_dog_api_base")]
    pub dog_api_base: String,
    #[serde(default = "default_comments_endpoint")]
    pub comments_endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            dog_api_base: default_dog_api_base(),
            comments_endpoint: default_comments_endpoint(),
        }
    }
}

fn default_dog_api_base() -> String {
    DEFAULT_DOG_API_BASE.to_string()
}

fn default_comments_endpoint() -> String {
    DEFAULT_COMMENTS_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ViewerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ViewerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOG_API_BASE})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ViewerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.format.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn dog_api_base(&self) -> &str {
        &self.api.dog_api_base
    }

    fn comments_endpoint(&self) -> &str {
        &self.api.comments_endpoint
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.dog_api_base", &self.api.dog_api_base)?;
        validate_url("api.comments_endpoint", &self.api.comments_endpoint)?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        if let Some(format) = self.log_format() {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[api]
dog_api_base = "http://localhost:8080/api"
comments_endpoint = "http://localhost:8080/comments"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.dog_api_base(), "http://localhost:8080/api");
        assert_eq!(config.comments_endpoint(), "http://localhost:8080/comments");
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), Some("json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.dog_api_base(), DEFAULT_DOG_API_BASE);
        assert_eq!(config.comments_endpoint(), DEFAULT_COMMENTS_ENDPOINT);
        assert!(config.logging.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BREED_VIEWER_TEST_API", "https://test.dog.api");

        let toml_content = r#"
[api]
dog_api_base = "${BREED_VIEWER_TEST_API}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.dog_api_base(), "https://test.dog.api");

        std::env::remove_var("BREED_VIEWER_TEST_API");
    }

    #[test]
    fn test_unset_env_var_stays_literal_and_fails_validation() {
        let toml_content = r#"
[api]
comments_endpoint = "${BREED_VIEWER_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.comments_endpoint(), "${BREED_VIEWER_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[api]
dog_api_base = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[logging]
format = "pretty"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[api\n").unwrap_err();
        assert!(matches!(err, ViewerError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
dog_api_base = "https://dog.example.com/api"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.dog_api_base(), "https://dog.example.com/api");
    }
}
