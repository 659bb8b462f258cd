use crate::utils::error::FetchError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 所有網路呼叫共用的 JSON 請求包裝
///
/// 只有 2xx 視為成功；其餘狀態碼、JSON 解碼失敗、傳輸失敗都轉成
/// `FetchError`，記錄一次後以 `Err` 回傳給呼叫端。
#[derive(Debug, Clone, Default)]
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.request_json::<T, ()>(Method::GET, url, &[], None).await
    }

    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::POST, url, &[], Some(body)).await
    }

    pub async fn request_json<T, B>(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = format!("{} {}", method, url);

        match self.send(method, url, headers, body).await {
            Ok(value) => Ok(value),
            Err(e) => {
                e.report(&request);
                Err(e)
            }
        }
    }

    async fn send<T, B>(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("🌐 {} {}", method, url);

        let mut builder = self.client.request(method, url);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(FetchError::Encode)?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::from_response(&response));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(FetchError::Decode)
    }
}
