//! Generic CRUD accessor over one backend collection.
//!
//! Reads never fail: a rejected or broken request is logged and comes back
//! as an empty list or `None`. Writes log and then return a [`ServiceError`]
//! whose message is fit for display.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::client::{DeleteParams, RecordClient, RecordResult, Response, WriteParams};
use crate::error::{ClientError, ServiceError};
use crate::mapping::{decode_record, encode_entity, projection, Entity};

pub struct EntityAccessor<E> {
    client: Arc<dyn RecordClient>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for EntityAccessor<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> EntityAccessor<E> {
    pub fn new(client: Arc<dyn RecordClient>) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub async fn list_all(&self) -> Vec<E> {
        let response = match self.client.fetch_records(E::COLLECTION, &projection::<E>()).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching {} records: {}", E::NAME, e);
                return Vec::new();
            }
        };

        if !response.success {
            tracing::error!(
                "Fetching {} records was rejected: {}",
                E::NAME,
                response.message.as_deref().unwrap_or_default()
            );
            return Vec::new();
        }

        match response.data {
            Some(Value::Array(records)) => records
                .iter()
                .filter_map(Value::as_object)
                .map(decode_record::<E>)
                .collect(),
            other => {
                tracing::error!("Fetching {} records returned no list: {:?}", E::NAME, other);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Option<E> {
        let response = match self
            .client
            .get_record_by_id(E::COLLECTION, id, &projection::<E>())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching {} with ID {}: {}", E::NAME, id, e);
                return None;
            }
        };

        if !response.success {
            tracing::error!(
                "Fetching {} with ID {} was rejected: {}",
                E::NAME,
                id,
                response.message.as_deref().unwrap_or_default()
            );
            return None;
        }

        match response.data {
            Some(Value::Object(record)) => Some(decode_record(&record)),
            _ => {
                tracing::warn!("No {} found with ID {}", E::NAME, id);
                None
            }
        }
    }

    pub async fn create(&self, entity: &E) -> Result<E, ServiceError> {
        const VERB: &str = "create";

        let params = self.write_params(VERB, entity, None)?;
        let outcome = self.client.create_records(E::COLLECTION, &params).await;
        self.written_record(VERB, outcome)
    }

    /// Overwrites the record `id` with every writable field of `entity`.
    /// `entity.id` is ignored.
    pub async fn update(&self, id: i64, entity: &E) -> Result<E, ServiceError> {
        const VERB: &str = "update";

        let params = self.write_params(VERB, entity, Some(id))?;
        let outcome = self.client.update_records(E::COLLECTION, &params).await;
        self.written_record(VERB, outcome)
    }

    /// `Ok(false)` means the backend answered without a `results` list, so
    /// the deletion is unconfirmed rather than failed.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        const VERB: &str = "delete";

        let params = DeleteParams { record_ids: vec![id] };
        let outcome = self.client.delete_records(E::COLLECTION, &params).await;
        let response = self.accepted(VERB, outcome)?;

        match response.results {
            Some(results) => {
                self.check_results(VERB, &results)?;
                Ok(true)
            }
            None => {
                tracing::warn!("Deleting {} {} returned no results", E::NAME, id);
                Ok(false)
            }
        }
    }

    fn write_params(
        &self,
        verb: &'static str,
        entity: &E,
        id: Option<i64>,
    ) -> Result<WriteParams, ServiceError> {
        let record = encode_entity(entity, id).map_err(|e| {
            tracing::error!("Error encoding {} to {}: {}", E::NAME, verb, e);
            ServiceError::Encode(e)
        })?;
        Ok(WriteParams { records: vec![record] })
    }

    /// Unwraps a response the backend accepted as a whole.
    fn accepted(
        &self,
        verb: &'static str,
        outcome: Result<Response, ClientError>,
    ) -> Result<Response, ServiceError> {
        let response = outcome.map_err(|e| {
            tracing::error!("Error trying to {} {}: {}", verb, E::NAME, e);
            ServiceError::Transport(e)
        })?;

        if !response.success {
            let message = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| ServiceError::fallback_message(verb, E::NAME));
            tracing::error!("Request to {} {} was rejected: {}", verb, E::NAME, message);
            return Err(ServiceError::Rejected(message));
        }

        Ok(response)
    }

    fn check_results(
        &self,
        verb: &'static str,
        results: &[RecordResult],
    ) -> Result<(), ServiceError> {
        let failed: Vec<&RecordResult> = results.iter().filter(|r| !r.success).collect();
        let Some(first) = failed.first() else {
            return Ok(());
        };

        tracing::error!(
            "Failed to {} {}: {}",
            verb,
            E::NAME,
            serde_json::to_string(&failed).unwrap_or_default()
        );

        let message = first
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| ServiceError::fallback_message(verb, E::NAME));
        Err(ServiceError::RecordFailed(message))
    }

    fn written_record(
        &self,
        verb: &'static str,
        outcome: Result<Response, ClientError>,
    ) -> Result<E, ServiceError> {
        let response = self.accepted(verb, outcome)?;

        if let Some(results) = &response.results {
            self.check_results(verb, results)?;

            let record = results
                .iter()
                .find(|r| r.success)
                .and_then(|r| r.data.as_ref())
                .and_then(Value::as_object);
            if let Some(record) = record {
                return Ok(decode_record(record));
            }
        }

        tracing::error!("No data returned from {} {} operation", E::NAME, verb);
        Err(ServiceError::NoData { verb })
    }
}
