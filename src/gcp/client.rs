use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::gcp::constants;
use crate::gcp::oauth::{self, CredentialError};
use crate::http::{HttpClient, HttpResult};

/// An HTTP client bound to one project's FCM send endpoint, carrying the
/// bearer token in its default headers.
pub struct FcmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) project_id: String,
    pub(crate) base_url: String,
}

pub async fn get_fcm_client() -> Result<FcmClient, CredentialError> {
    let oauth = oauth::get_oauth_token().await?;
    let _ = env_logger::try_init();
    Ok(FcmClient::new(
        &oauth.project_id,
        constants::BASE_URL,
        &oauth.token,
    ))
}

impl FcmClient {
    pub fn new(project_id: &str, base_url: &str, token: &str) -> FcmClient {
        let mut header_map = HeaderMap::new();

        let authorization_header = &*format!("Bearer {}", token);
        let mut auth_value = HeaderValue::from_str(authorization_header).unwrap();
        auth_value.set_sensitive(true);
        header_map.append(AUTHORIZATION, auth_value);

        header_map.append(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; UTF-8"),
        );

        FcmClient {
            client: reqwest::Client::builder()
                .default_headers(header_map)
                .connection_verbose(true)
                .build()
                .unwrap(),
            project_id: project_id.to_string(),
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl HttpClient for FcmClient {
    async fn post_json<T, B>(&self, url: String, body: &B) -> HttpResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.client.post_json(url, body).await
    }
}
