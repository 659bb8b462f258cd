use crate::core::endpoints::Endpoints;
use crate::core::http::JsonClient;
use crate::domain::model::{ApiMessage, BreedList, ImageReference, StartupData};
use crate::utils::error::FetchError;

/// 頁面載入時同時抓品種清單與一張隨機圖片
#[derive(Debug, Clone)]
pub struct StartupAggregator {
    client: JsonClient,
    endpoints: Endpoints,
}

impl StartupAggregator {
    pub fn new(client: JsonClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// 兩個請求都成功才有結果；任一失敗時另一個結果直接丟棄
    pub async fn load(&self) -> Result<StartupData, FetchError> {
        let breeds_url = self.endpoints.breeds_list();
        let image_url = self.endpoints.random_image();

        let (breeds, image) = tokio::try_join!(
            self.client.get_json::<ApiMessage<BreedList>>(&breeds_url),
            self.client.get_json::<ApiMessage<String>>(&image_url),
        )?;

        tracing::debug!(
            "Startup loaded {} breeds and image {}",
            breeds.message.len(),
            image.message
        );

        Ok(StartupData {
            breeds: breeds.message,
            image: ImageReference::new(image.message),
        })
    }
}
