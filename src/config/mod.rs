#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::endpoints::{DEFAULT_COMMENTS_ENDPOINT, DEFAULT_DOG_API_BASE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::{validate_one_of, validate_url, Validate};
use std::str::FromStr;
use toml_config::{TomlConfig, LOG_FORMATS, LOG_LEVELS};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ViewerError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: other.to_string(),
                reason: "Allowed values: compact, json".to_string(),
            }),
        }
    }
}

/// 合併後的最終設定：CLI 參數 > TOML 檔案 > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSettings {
    pub dog_api_base: String,
    pub comments_endpoint: String,
    pub log_level: Option<String>,
    /// 合併完成後才驗證，所以先保留原字串
    pub log_format: String,
    pub verbose: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            dog_api_base: DEFAULT_DOG_API_BASE.to_string(),
            comments_endpoint: DEFAULT_COMMENTS_ENDPOINT.to_string(),
            log_level: None,
            log_format: LogFormat::default().as_str().to_string(),
            verbose: false,
        }
    }
}

impl ViewerSettings {
    /// 只合併不驗證；驗證在所有來源套用後由 [`Validate`] 進行
    pub fn from_file(file: &TomlConfig) -> Self {
        let defaults = Self::default();

        Self {
            dog_api_base: file.api.dog_api_base.clone(),
            comments_endpoint: file.api.comments_endpoint.clone(),
            log_level: file.log_level().map(str::to_string),
            log_format: file
                .log_format()
                .map(str::to_string)
                .unwrap_or(defaults.log_format),
            verbose: false,
        }
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        self.log_format.parse()
    }

    pub fn with_dog_api_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            self.dog_api_base = base;
        }
        self
    }

    pub fn with_comments_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.comments_endpoint = endpoint;
        }
        self
    }

    pub fn with_log_format(mut self, format: Option<LogFormat>) -> Self {
        if let Some(format) = format {
            self.log_format = format.as_str().to_string();
        }
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl ConfigProvider for ViewerSettings {
    fn dog_api_base(&self) -> &str {
        &self.dog_api_base
    }

    fn comments_endpoint(&self) -> &str {
        &self.comments_endpoint
    }
}

impl Validate for ViewerSettings {
    fn validate(&self) -> Result<()> {
        validate_url("dog_api_base", &self.dog_api_base)?;
        validate_url("comments_endpoint", &self.comments_endpoint)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        validate_one_of("log_format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}
