use crate::domain::model::{Action, Card, CommentSubmission, ImageReference, StartupData};
use crate::utils::error::FetchError;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn dog_api_base(&self) -> &str;
    fn comments_endpoint(&self) -> &str;
}

/// 三個使用者動作背後的遠端呼叫
#[async_trait]
pub trait ViewerBackend: Send + Sync {
    async fn load_startup(&self) -> Result<StartupData, FetchError>;
    async fn fetch_breed_image(&self, breed: &str) -> Result<ImageReference, FetchError>;
    async fn submit_comment(
        &self,
        submission: &CommentSubmission,
    ) -> Result<serde_json::Value, FetchError>;
}

/// 呈現層邊界：選單、圖片區塊、表單回應
pub trait Presenter: Send {
    fn set_options(&mut self, breeds: &[String], selected: Option<&str>);
    fn show_card(&mut self, card: &Card);
    fn show_failure(&mut self, action: Action, message: &str);
    fn show_comment_echo(&mut self, echo: &serde_json::Value);
}
