#![warn(missing_docs)]
//! Deterministic testing surfaces: newline-delimited JSON event logs for
//! worldtests.

use anyhow::{Context, Result};
use deathchest_core::SimTick;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Primary event record captured by headless tests.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a, P: Serialize> {
    /// Simulation tick when the event occurred.
    pub tick: SimTick,
    /// Human-readable kind label.
    pub kind: &'a str,
    /// Structured payload.
    pub payload: &'a P,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
    lines: usize,
}

impl JsonlSink {
    /// Create a new sink at `path`, truncating any previous log.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create event log {}", path.display()))?;
        Ok(Self { file, lines: 0 })
    }

    /// Append an event to the log.
    pub fn write<P: Serialize>(&mut self, event: &EventRecord<'_, P>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn len(&self) -> usize {
        self.lines
    }

    /// Returns true when nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

/// Read back a JSONL log written by [`JsonlSink`].
pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<serde_json::Value>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read event log {}", path.display()))?;
    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: invalid JSON", path.display(), index + 1))?;
        records.push(value);
    }
    tracing::debug!(records = records.len(), path = %path.display(), "read event log");
    Ok(records)
}
