use async_trait::async_trait;

use crate::gcp::client::FcmClient;
use crate::gcp::json::{Envelope, PushNotification, SendResponse};
use crate::http::{HttpClient, HttpResult};

#[async_trait]
pub trait FcmApi {
    async fn send_message(&self, envelope: &Envelope) -> HttpResult<SendResponse>;

    async fn send_notification(&self, request: &PushNotification) -> HttpResult<SendResponse>;

    async fn send_override_notification(
        &self,
        request: &PushNotification,
    ) -> HttpResult<SendResponse>;

    fn send_url(&self) -> String;
}

#[async_trait]
impl FcmApi for FcmClient {
    async fn send_message(&self, envelope: &Envelope) -> HttpResult<SendResponse> {
        log::debug!("Posting FCM message to {}", self.send_url());
        self.post_json(self.send_url(), envelope).await
    }

    async fn send_notification(&self, request: &PushNotification) -> HttpResult<SendResponse> {
        self.send_message(&Envelope::notification_message(request))
            .await
    }

    async fn send_override_notification(
        &self,
        request: &PushNotification,
    ) -> HttpResult<SendResponse> {
        self.send_message(&Envelope::override_message(request)).await
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.base_url, self.project_id
        )
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::gcp::constants::BASE_URL;
    use crate::gcp::json::fixtures::*;
    use crate::http::ApiError;

    #[test]
    fn it_builds_the_send_endpoint_url() {
        let client = FcmClient::new("test-project", BASE_URL, "test-token");
        assert_eq!(
            client.send_url(),
            "https://fcm.googleapis.com/v1/projects/test-project/messages:send"
        );
    }

    #[tokio::test]
    async fn it_returns_the_message_name_on_success() {
        let server = MockServer::start().await;
        let envelope = Envelope::notification_message(&token_notification());
        Mock::given(method("POST"))
            .and(path("/v1/projects/test-project/messages:send"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(&envelope))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "projects/p/messages/123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FcmClient::new("test-project", &server.uri(), "test-token");
        let response = client.send_message(&envelope).await.unwrap();
        assert_eq!(response.name, "projects/p/messages/123");
    }

    #[tokio::test]
    async fn it_surfaces_the_error_body_on_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/test-project/messages:send"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": { "code": 404, "status": "NOT_FOUND" }
            })))
            .mount(&server)
            .await;

        let client = FcmClient::new("test-project", &server.uri(), "test-token");
        let result = client
            .send_notification(&topic_notification())
            .await;
        match result {
            Err(ApiError::Http { code, message }) => {
                assert_eq!(code, 404);
                assert!(message.contains("NOT_FOUND"));
            }
            other => panic!("Expected an http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn it_sends_the_override_payload() {
        let server = MockServer::start().await;
        let expected = Envelope::override_message(&token_notification());
        Mock::given(method("POST"))
            .and(path("/v1/projects/test-project/messages:send"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "projects/p/messages/456"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FcmClient::new("test-project", &server.uri(), "test-token");
        let response = client
            .send_override_notification(&token_notification())
            .await
            .unwrap();
        assert_eq!(response.name, "projects/p/messages/456");
    }
}
