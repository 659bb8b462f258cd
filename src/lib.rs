pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use crate::app::{App, AppHandle, AppState};
pub use crate::config::{LogFormat, ViewerSettings};
pub use crate::core::{
    backend::RemoteBackend, breed_image::BreedImageFetcher, comment::CommentSubmitter,
    endpoints::Endpoints, http::JsonClient, startup::StartupAggregator,
};
pub use domain::model::{Card, CommentSubmission, ImageReference, StartupData};
pub use domain::ports::{ConfigProvider, Presenter, ViewerBackend};
pub use utils::error::{FetchError, Result, ViewerError};
