//! Async CRUD client core for a REST posts collection.
//!
//! # Overview
//! `RequestExecutor` issues one of five operations (fetch collection, fetch
//! one, create, replace, delete), interprets the response and reports a
//! normalized `DisplayResult` to an injected `PresentationSink`.
//!
//! # Design
//! - `ResourceClient` is sans-IO: it builds `HttpRequest` values and parses
//!   `HttpResponse` values. It holds only the collection URL.
//! - The network sits behind the `Transport` trait; `ReqwestTransport` is
//!   the production implementation and tests script their own.
//! - Every failure ends as `ResponseOutcome::Failure`; no operation returns
//!   `Result` or panics on a bad response.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod demo;
pub mod error;
pub mod executor;
pub mod http;
pub mod outcome;
pub mod sink;
pub mod transport;
pub mod types;

pub use client::ResourceClient;
pub use error::{ApiError, TransportError};
pub use executor::RequestExecutor;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::{DisplayResult, Operation, ResponseOutcome};
pub use sink::{MemorySink, PresentationSink, SinkEvent};
pub use transport::{ReqwestTransport, Transport};
pub use types::{NewPost, Post};
