//! Guarded memory with quarantine for flagged content.
//!
//! Quarantine is inert storage: quarantined events never update policy
//! memory, and entries never move between the two buffers. Flagging is
//! case-insensitive substring matching against a fixed phrase set.

use std::sync::Mutex;

use serde_json::Value;
use thiserror::Error;

/// Appended to stored events that were cut at the length cap, so downstream
/// consumers can tell content is missing.
pub const TRUNCATION_MARKER: &str = "…[truncated]";

/// Default case-insensitive flagged phrases.
pub const DEFAULT_FLAGGED_PHRASES: [&str; 4] = ["SECRET", "password", "api_key", "token:"];

/// Default cap on stored event size. A sanity limit, not a security boundary.
pub const DEFAULT_MAX_EVENT_CHARS: usize = 10_000;

/// Caller contract violation at the memory gate. Distinct from routing
/// outcomes: when this is returned, neither buffer was touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("event must be a string, got {0}")]
    NotText(&'static str),
}

/// Where an ingested event landed. Exactly one of the two, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Policy,
    Quarantine,
}

#[derive(Debug, Default)]
struct Buffers {
    policy_memory: Vec<String>,
    quarantine: Vec<String>,
}

/// Guarded memory gate.
#[derive(Debug)]
pub struct GuardedMemory {
    /// Lowercased at construction; the scan lowercases the event once.
    flagged_phrases: Vec<String>,
    max_event_chars: usize,
    buffers: Mutex<Buffers>,
}

impl Default for GuardedMemory {
    fn default() -> Self {
        Self::new(
            DEFAULT_FLAGGED_PHRASES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_MAX_EVENT_CHARS,
        )
    }
}

impl GuardedMemory {
    pub fn new(flagged_phrases: Vec<String>, max_event_chars: usize) -> Self {
        Self {
            flagged_phrases: flagged_phrases.iter().map(|s| s.to_lowercase()).collect(),
            max_event_chars,
            buffers: Mutex::new(Buffers::default()),
        }
    }

    /// Ingest a wire event. Anything but a JSON string is a hard failure;
    /// there is no silent coercion.
    pub fn ingest(&self, event: &Value) -> Result<Route, GateError> {
        match event.as_str() {
            Some(text) => Ok(self.ingest_text(text)),
            None => Err(GateError::NotText(json_type_name(event))),
        }
    }

    /// Ingest a text event: normalize line endings, cap length, scan, route.
    ///
    /// The flag scan sees the stored form (normalized and possibly
    /// truncated), so what is scanned is exactly what lands in a buffer.
    pub fn ingest_text(&self, event: &str) -> Route {
        let normalized = event.replace("\r\n", "\n").replace('\r', "\n");
        let stored = if normalized.chars().count() > self.max_event_chars {
            let capped: String = normalized.chars().take(self.max_event_chars).collect();
            format!("{capped}{TRUNCATION_MARKER}")
        } else {
            normalized
        };

        let lowered = stored.to_lowercase();
        let flagged = self.flagged_phrases.iter().any(|phrase| lowered.contains(phrase));

        let mut buffers = self.buffers.lock().expect("memory buffers lock poisoned");
        if flagged {
            tracing::warn!(chars = stored.chars().count(), "flagged event quarantined");
            buffers.quarantine.push(stored);
            Route::Quarantine
        } else {
            buffers.policy_memory.push(stored);
            Route::Policy
        }
    }

    /// Snapshot of the trusted policy memory.
    pub fn policy_memory(&self) -> Vec<String> {
        self.buffers
            .lock()
            .expect("memory buffers lock poisoned")
            .policy_memory
            .clone()
    }

    /// Snapshot of the quarantine buffer.
    pub fn quarantine(&self) -> Vec<String> {
        self.buffers
            .lock()
            .expect("memory buffers lock poisoned")
            .quarantine
            .clone()
    }

    /// (policy, quarantine) entry counts.
    pub fn counts(&self) -> (usize, usize) {
        let buffers = self.buffers.lock().expect("memory buffers lock poisoned");
        (buffers.policy_memory.len(), buffers.quarantine.len())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
