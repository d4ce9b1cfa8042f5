// src/data.rs
use crate::debounce::GestureEvent;
use anyhow::Result;
use chrono::Local;
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct EventRecord {
    frame: u64,
    timestamp: String,
    hand: String,
    kind: String,
    gesture: String,
    previous: Option<String>,
}

/// Collects accepted gesture events and writes them out as one CSV per
/// session under `<output_dir>/<session_name>/events.csv`.
pub struct EventLog {
    output_dir: PathBuf,
    session_name: String,
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn new(output_dir: impl AsRef<Path>, session_name: Option<String>) -> Self {
        let session_name = session_name
            .unwrap_or_else(|| format!("session_{}", Local::now().format("%Y%m%d_%H%M%S")));

        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            session_name,
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, frame: u64, event: &GestureEvent) {
        self.records.push(EventRecord {
            frame,
            timestamp: Local::now().to_rfc3339(),
            hand: event.hand.to_string(),
            kind: event.kind.to_string(),
            gesture: event.gesture.to_string(),
            previous: event.previous.map(|g| g.to_string()),
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn export_csv(&self) -> Result<PathBuf> {
        let csv_path = self
            .output_dir
            .join(&self.session_name)
            .join("events.csv");

        if let Some(parent) = csv_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&csv_path)?;
        let mut writer = Writer::from_writer(file);
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(csv_path)
    }
}

pub fn default_output_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.join("HandTracker")))
        .unwrap_or_else(|| PathBuf::from("./output"))
}
