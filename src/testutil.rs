//! Scripted `RecordClient` for accessor tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{DeleteParams, FetchParams, RecordClient, Response, WriteParams};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch { collection: String, params: FetchParams },
    Get { collection: String, id: i64, params: FetchParams },
    Create { collection: String, params: WriteParams },
    Update { collection: String, params: WriteParams },
    Delete { collection: String, params: DeleteParams },
}

/// Answers each call with the next queued reply, in order, and records it.
pub struct StubClient {
    replies: Mutex<VecDeque<Result<Response, ClientError>>>,
    calls: Mutex<Vec<Call>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Builder: queue a backend response envelope.
    pub fn reply(self, response: serde_json::Value) -> Self {
        let response: Response = serde_json::from_value(response).unwrap();
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Builder: queue a transport failure.
    pub fn fail(self, error: ClientError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<Response, ClientError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("StubClient has no reply queued")
    }
}

#[async_trait]
impl RecordClient for StubClient {
    async fn fetch_records(
        &self,
        collection: &str,
        params: &FetchParams,
    ) -> Result<Response, ClientError> {
        self.answer(Call::Fetch {
            collection: collection.to_string(),
            params: params.clone(),
        })
    }

    async fn get_record_by_id(
        &self,
        collection: &str,
        id: i64,
        params: &FetchParams,
    ) -> Result<Response, ClientError> {
        self.answer(Call::Get {
            collection: collection.to_string(),
            id,
            params: params.clone(),
        })
    }

    async fn create_records(
        &self,
        collection: &str,
        params: &WriteParams,
    ) -> Result<Response, ClientError> {
        self.answer(Call::Create {
            collection: collection.to_string(),
            params: params.clone(),
        })
    }

    async fn update_records(
        &self,
        collection: &str,
        params: &WriteParams,
    ) -> Result<Response, ClientError> {
        self.answer(Call::Update {
            collection: collection.to_string(),
            params: params.clone(),
        })
    }

    async fn delete_records(
        &self,
        collection: &str,
        params: &DeleteParams,
    ) -> Result<Response, ClientError> {
        self.answer(Call::Delete {
            collection: collection.to_string(),
            params: params.clone(),
        })
    }
}
