use crate::core::endpoints::Endpoints;
use crate::core::http::JsonClient;
use crate::domain::model::CommentSubmission;
use crate::utils::error::FetchError;

#[derive(Debug, Clone)]
pub struct CommentSubmitter {
    client: JsonClient,
    endpoints: Endpoints,
}

impl CommentSubmitter {
    pub fn new(client: JsonClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// 送出後伺服器會回傳同一份資料，只記錄不解讀
    pub async fn submit(
        &self,
        submission: &CommentSubmission,
    ) -> Result<serde_json::Value, FetchError> {
        let echo: serde_json::Value = self
            .client
            .post_json(self.endpoints.comments(), submission)
            .await?;

        tracing::info!("📨 Comment accepted: {}", echo);
        Ok(echo)
    }
}
