//! Runs one operation end to end and reports it.
//!
//! # Design
//! Every operation follows the same line: build the request, send it,
//! interpret the response, report to the sink. Errors never leave this
//! module; each becomes a `ResponseOutcome::Failure`. There are no retries
//! and no state carried between calls, so operations may run concurrently
//! on the same executor.

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::ResourceClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::outcome::{DisplayResult, Operation, ResponseOutcome};
use crate::sink::PresentationSink;
use crate::transport::{ReqwestTransport, Transport};

/// Issues CRUD requests against one collection and reports each outcome to
/// the injected sink.
#[derive(Debug)]
pub struct RequestExecutor<T, S> {
    client: ResourceClient,
    transport: T,
    sink: S,
}

impl<S: PresentationSink> RequestExecutor<ReqwestTransport, S> {
    /// Executor talking to `collection_url` over real HTTP.
    pub fn over_http(collection_url: &str, sink: S) -> Self {
        Self::new(ResourceClient::new(collection_url), ReqwestTransport::new(), sink)
    }
}

impl<T: Transport, S: PresentationSink> RequestExecutor<T, S> {
    pub fn new(client: ResourceClient, transport: T, sink: S) -> Self {
        Self {
            client,
            transport,
            sink,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// GET the collection, asking the server for at most `limit` items.
    pub async fn fetch_collection(&self, limit: Option<u32>) -> DisplayResult {
        let request = self.client.build_fetch_collection(limit);
        self.execute(Operation::FetchCollection, Ok(request)).await
    }

    pub async fn fetch_resource(&self, id: u64) -> DisplayResult {
        let request = self.client.build_fetch_resource(id);
        self.execute(Operation::FetchResource, Ok(request)).await
    }

    /// POST `payload` as JSON. The server usually echoes it with a new id.
    pub async fn create_resource<P>(&self, payload: &P) -> DisplayResult
    where
        P: Serialize + ?Sized + Sync,
    {
        let request = self.client.build_create_resource(payload);
        self.execute(Operation::CreateResource, request).await
    }

    /// PUT `payload` as the full new state of resource `id`.
    pub async fn replace_resource<P>(&self, id: u64, payload: &P) -> DisplayResult
    where
        P: Serialize + ?Sized + Sync,
    {
        let request = self.client.build_replace_resource(id, payload);
        self.execute(Operation::ReplaceResource, request).await
    }

    /// DELETE resource `id`. An empty response body reads as `{}`.
    pub async fn delete_resource(&self, id: u64) -> DisplayResult {
        let request = self.client.build_delete_resource(id);
        self.execute(Operation::DeleteResource, Ok(request)).await
    }

    async fn execute(
        &self,
        operation: Operation,
        request: Result<HttpRequest, ApiError>,
    ) -> DisplayResult {
        let outcome = match self.round_trip(request).await {
            Ok((status, payload)) => ResponseOutcome::Success { status, payload },
            Err(err) => {
                warn!(operation = operation.label(), error = %err, "request failed");
                ResponseOutcome::from(err)
            }
        };
        let result = DisplayResult { operation, outcome };
        self.present(&result);
        result
    }

    async fn round_trip(
        &self,
        request: Result<HttpRequest, ApiError>,
    ) -> Result<(u16, serde_json::Value), ApiError> {
        let request = request?;
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        let status = response.status;
        let payload = self.client.parse_response(response)?;
        Ok((status, payload))
    }

    fn present(&self, result: &DisplayResult) {
        self.sink.set_status(&result.status_message(), result.is_success());
        if let ResponseOutcome::Success { payload, .. } = &result.outcome {
            self.sink.set_result(payload);
        }
    }
}
