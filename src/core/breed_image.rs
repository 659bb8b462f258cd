use crate::core::endpoints::Endpoints;
use crate::core::http::JsonClient;
use crate::domain::model::{ApiMessage, ImageReference};
use crate::utils::error::FetchError;

#[derive(Debug, Clone)]
pub struct BreedImageFetcher {
    client: JsonClient,
    endpoints: Endpoints,
}

impl BreedImageFetcher {
    pub fn new(client: JsonClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn fetch(&self, breed: &str) -> Result<ImageReference, FetchError> {
        let url = self.endpoints.breed_image(breed);
        let image: ApiMessage<String> = self.client.get_json(&url).await?;

        Ok(ImageReference::new(image.message).with_alt(breed))
    }
}
