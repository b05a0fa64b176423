pub mod http;

pub use http::HttpRecordClient;

use crate::error::ClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One backend record in wire format.
pub type Record = Map<String, Value>;

/// Capability surface of the remote record store.
///
/// Every verb is one round trip. Implementations return `Ok` for any
/// response envelope the backend produced, including `success: false`;
/// `Err` is reserved for transport failures.
#[async_trait]
pub trait RecordClient: Send + Sync {
    async fn fetch_records(
        &self,
        collection: &str,
        params: &FetchParams,
    ) -> Result<Response, ClientError>;

    async fn get_record_by_id(
        &self,
        collection: &str,
        id: i64,
        params: &FetchParams,
    ) -> Result<Response, ClientError>;

    async fn create_records(
        &self,
        collection: &str,
        params: &WriteParams,
    ) -> Result<Response, ClientError>;

    async fn update_records(
        &self,
        collection: &str,
        params: &WriteParams,
    ) -> Result<Response, ClientError>;

    async fn delete_records(
        &self,
        collection: &str,
        params: &DeleteParams,
    ) -> Result<Response, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchParams {
    pub fields: Vec<FieldSelector>,
}

impl FetchParams {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: names
                .into_iter()
                .map(|name| FieldSelector {
                    field: FieldName { name: name.to_string() },
                })
                .collect(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.field.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub field: FieldName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteParams {
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<i64>,
}

/// Response envelope shared by every verb.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RecordResult>>,
}

/// Per-record outcome of a write or delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
