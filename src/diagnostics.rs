//! Diagnostics sinks
//!
//! The parser narrates what it does (every token at TRACE, every node read at INFO, failures at
//! WARN/ERROR) to an optional sink chosen when the parser is built. Reports are advisory: no sink,
//! or a sink that drops everything, yields the same parse result.

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Receiver for parser diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, level: Level, message: &str);
}

/// Forwards diagnostics as `tracing` events under the `crswkt` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: "crswkt", "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(target: "crswkt", "{}", message);
        } else if level == Level::INFO {
            tracing::info!(target: "crswkt", "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "crswkt", "{}", message);
        } else {
            tracing::trace!(target: "crswkt", "{}", message);
        }
    }
}

/// Keeps every report in memory; handy for tests and for tools that show a parse log
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far
    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, level: Level, message: &str) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push((level, message.to_string()));
    }
}

/// Handle used inside the pipeline; a no-op when no sink was configured
#[derive(Clone, Default)]
pub struct Diagnostics {
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Diagnostics {
    pub fn new(sink: Option<Arc<dyn DiagnosticSink>>) -> Self {
        Self { sink }
    }

    pub fn none() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn report(&self, level: Level, message: impl FnOnce() -> String) {
        if let Some(sink) = &self.sink {
            sink.report(level, &message());
        }
    }

    pub fn trace(&self, message: impl FnOnce() -> String) {
        self.report(Level::TRACE, message);
    }

    pub fn info(&self, message: impl FnOnce() -> String) {
        self.report(Level::INFO, message);
    }

    pub fn warn(&self, message: impl FnOnce() -> String) {
        self.report(Level::WARN, message);
    }

    pub fn error(&self, message: impl FnOnce() -> String) {
        self.report(Level::ERROR, message);
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
