use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) type HttpResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    JsonParsing { error: reqwest::Error },
    Network { error: reqwest::Error },
    Http { code: u16, message: String },
    Unknown { message: String },
}

#[async_trait]
pub trait HttpClient {
    /// Post `body` as JSON and decode the response body into `T`.
    ///
    /// A non-success status reads the error body instead and surfaces it as
    /// [ApiError::Http]; the body is consumed on every branch so the
    /// connection goes back to the pool.
    async fn post_json<T, B>(&self, url: String, body: &B) -> HttpResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized;
}

#[async_trait]
impl HttpClient for Client {
    async fn post_json<T, B>(&self, url: String, body: &B) -> HttpResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network { error: e })?;

        match response.error_for_status_ref() {
            Ok(_) => response
                .json()
                .await
                .map_err(|e| ApiError::JsonParsing { error: e }),
            Err(e) => {
                let message = response.text().await.map_err(|e| ApiError::Unknown {
                    message: format!("Could not decode response, got {:?}", e),
                })?;
                let status = e.status().ok_or(ApiError::Unknown {
                    message: format!("Could not decode status, got {:?}", e),
                })?;
                Err(ApiError::Http {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }
}
