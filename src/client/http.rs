use crate::client::{DeleteParams, FetchParams, RecordClient, Response, WriteParams};
use crate::config::BackendConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

const PROJECT_HEADER: &str = "X-Project-Id";

/// `RecordClient` backed by the record store's JSON-over-HTTP API.
pub struct HttpRecordClient {
    client: Client,
    base_url: String,
    project_id: String,
    public_key: SecretString,
}

impl HttpRecordClient {
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            public_key: SecretString::from(public_key.into()),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            project_id: config.project_id.clone(),
            public_key: config.public_key.clone(),
        }
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self, collection: &str, verb: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, verb)
    }

    async fn post<P: Serialize + Sync>(
        &self,
        url: String,
        params: &P,
    ) -> Result<Response, ClientError> {
        tracing::debug!(%url, "record store request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header(PROJECT_HEADER, &self.project_id)
            .header("Authorization", format!("Bearer {}", self.public_key.expose_secret()))
            .json(params)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json::<Response>()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Invalid response: {}", e)))
    }
}

/// Prefers the `message` of a JSON error body over the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl RecordClient for HttpRecordClient {
    async fn fetch_records(
        &self,
        collection: &str,
        params: &FetchParams,
    ) -> Result<Response, ClientError> {
        self.post(self.endpoint(collection, "fetch"), params).await
    }

    async fn get_record_by_id(
        &self,
        collection: &str,
        id: i64,
        params: &FetchParams,
    ) -> Result<Response, ClientError> {
        self.post(self.endpoint(collection, &format!("get/{}", id)), params).await
    }

    async fn create_records(
        &self,
        collection: &str,
        params: &WriteParams,
    ) -> Result<Response, ClientError> {
        self.post(self.endpoint(collection, "create"), params).await
    }

    async fn update_records(
        &self,
        collection: &str,
        params: &WriteParams,
    ) -> Result<Response, ClientError> {
        self.post(self.endpoint(collection, "update"), params).await
    }

    async fn delete_records(
        &self,
        collection: &str,
        params: &DeleteParams,
    ) -> Result<Response, ClientError> {
        self.post(self.endpoint(collection, "delete"), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpRecordClient {
        HttpRecordClient::new(server.uri(), "proj-1", "pk-123")
    }

    #[tokio::test]
    async fn test_fetch_posts_projection_with_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/class/fetch"))
            .and(header("X-Project-Id", "proj-1"))
            .and(header("Authorization", "Bearer pk-123"))
            .and(body_json(json!({"fields": [{"field": {"Name": "Name"}}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"Id": 1, "Name": "Algebra"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .fetch_records("class", &FetchParams::new(["Name"]))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.data.unwrap()[0]["Name"], "Algebra");
    }

    #[tokio::test]
    async fn test_get_by_id_route() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/student/get/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"Id": 42}
            })))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_record_by_id("student", 42, &FetchParams::new(["Name"]))
            .await
            .unwrap();

        assert_eq!(response.data.unwrap()["Id"], 42);
    }

    #[tokio::test]
    async fn test_delete_sends_record_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/grade/delete"))
            .and(body_json(json!({"RecordIds": [9]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "results": [{"success": true}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .delete_records("grade", &DeleteParams { record_ids: vec![9] })
            .await
            .unwrap();

        assert_eq!(response.results.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_error_status_uses_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance/create"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "invalid public key"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_records("attendance", &WriteParams { records: vec![] })
            .await
            .unwrap_err();

        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid public key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_falls_back_to_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assignment/update"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .update_records("assignment", &WriteParams { records: vec![] })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Status { status: 502, ref message } if message == "bad gateway"
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/class/fetch"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_records("class", &FetchParams::new(["Name"]))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_custom_http_client_is_used() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/class/fetch"))
            .and(header("User-Agent", "classroom-records-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let http = Client::builder()
            .user_agent("classroom-records-test")
            .build()
            .unwrap();
        let response = client_for(&server)
            .with_http_client(http)
            .fetch_records("class", &FetchParams::new(["Name"]))
            .await
            .unwrap();

        assert!(response.success);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = HttpRecordClient::new("http://localhost:9000/", "p", "k");
        assert_eq!(client.endpoint("class", "fetch"), "http://localhost:9000/class/fetch");
    }
}
