use crate::core::breed_image::BreedImageFetcher;
use crate::core::comment::CommentSubmitter;
use crate::core::endpoints::Endpoints;
use crate::core::http::JsonClient;
use crate::core::startup::StartupAggregator;
use crate::domain::model::{CommentSubmission, ImageReference, StartupData};
use crate::domain::ports::{ConfigProvider, ViewerBackend};
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// 以遠端 HTTP API 實作的 backend，三個元件共用同一個 client
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    startup: StartupAggregator,
    breed_image: BreedImageFetcher,
    comment: CommentSubmitter,
}

impl RemoteBackend {
    pub fn new(client: JsonClient, endpoints: Endpoints) -> Self {
        Self {
            startup: StartupAggregator::new(client.clone(), endpoints.clone()),
            breed_image: BreedImageFetcher::new(client.clone(), endpoints.clone()),
            comment: CommentSubmitter::new(client, endpoints),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(JsonClient::new(), Endpoints::from_config(config))
    }
}

#[async_trait]
impl ViewerBackend for RemoteBackend {
    async fn load_startup(&self) -> Result<StartupData, FetchError> {
        self.startup.load().await
    }

    async fn fetch_breed_image(&self, breed: &str) -> Result<ImageReference, FetchError> {
        self.breed_image.fetch(breed).await
    }

    async fn submit_comment(
        &self,
        submission: &CommentSubmission,
    ) -> Result<serde_json::Value, FetchError> {
        self.comment.submit(submission).await
    }
}
