use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, ViewerSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "breed-viewer")]
#[command(about = "Browse random dog breed images and post comments")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Base URL of the dog image API")]
    pub dog_api_base: Option<String>,

    #[arg(long, global = true, help = "URL that receives posted comments")]
    pub comments_endpoint: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive session: pick breeds, click for more images, post comments
    Browse,
    /// Load the breed list and a random image once
    Startup,
    /// Fetch a random image of one breed
    Image { breed: String },
    /// Post a name/comment pair
    Comment {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse)
    }

    pub fn load_settings(&self) -> Result<ViewerSettings> {
        let base = match &self.config {
            Some(path) => ViewerSettings::from_file(&TomlConfig::from_file(path)?),
            None => ViewerSettings::default(),
        };

        let settings = base
            .with_dog_api_base(self.dog_api_base.clone())
            .with_comments_endpoint(self.comments_endpoint.clone())
            .with_log_format(self.log_format)
            .with_verbose(self.verbose);

        settings.validate()?;
        Ok(settings)
    }
}
