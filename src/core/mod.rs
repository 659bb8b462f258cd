pub mod backend;
pub mod breed_image;
pub mod comment;
pub mod endpoints;
pub mod http;
pub mod startup;

pub use crate::domain::model::{CommentSubmission, ImageReference, StartupData};
pub use crate::domain::ports::{ConfigProvider, Presenter, ViewerBackend};
pub use crate::utils::error::FetchError;
