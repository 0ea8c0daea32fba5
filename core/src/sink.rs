//! Where `RequestExecutor` reports what happened.
//!
//! # Design
//! The sink is injected at construction instead of being looked up
//! globally, so an embedding (a terminal, a page, a test) picks where the
//! status line and the result land. Methods take `&self`: concurrent
//! operations may report to the same sink, last write wins.

use std::sync::{Mutex, PoisonError};

use serde_json::Value;

/// Receives the status line and the decoded result of each operation.
pub trait PresentationSink: Send + Sync {
    fn set_status(&self, message: &str, success: bool);
    fn set_result(&self, data: &Value);
}

/// One call received by a `MemorySink`.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Status { message: String, success: bool },
    Result(Value),
}

/// Sink that records every call in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SinkEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent status line and its success flag.
    pub fn last_status(&self) -> Option<(String, bool)> {
        self.events().into_iter().rev().find_map(|event| match event {
            SinkEvent::Status { message, success } => Some((message, success)),
            SinkEvent::Result(_) => None,
        })
    }

    pub fn last_result(&self) -> Option<Value> {
        self.events().into_iter().rev().find_map(|event| match event {
            SinkEvent::Result(data) => Some(data),
            SinkEvent::Status { .. } => None,
        })
    }

    fn push(&self, event: SinkEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl PresentationSink for MemorySink {
    fn set_status(&self, message: &str, success: bool) {
        self.push(SinkEvent::Status {
            message: message.to_string(),
            success,
        });
    }

    fn set_result(&self, data: &Value) {
        self.push(SinkEvent::Result(data.clone()));
    }
}
