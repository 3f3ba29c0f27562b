//! Word-frequency vector service
//!
//! Streams a text source line by line through a [`WordCounter`] and
//! serializes the result as JSON.

use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{WordCounter, WordFrequencies};
use crate::infrastructure::traits::FileSystem;

/// JSON shape of a word-frequency result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Array of counts ordered by sorted word
    #[default]
    Vector,
    /// Object mapping word to count
    Map,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vector" => Ok(OutputFormat::Vector),
            "map" => Ok(OutputFormat::Map),
            other => Err(format!(
                "unknown words format '{}' (expected vector or map)",
                other
            )),
        }
    }
}

/// Service for building word-frequency vectors.
pub struct WordService {
    fs: Arc<dyn FileSystem>,
}

impl WordService {
    /// Create a new word service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Count the words of a text file.
    pub fn vectorize(&self, path: &Path) -> ApplicationResult<WordFrequencies> {
        debug!("vectorize: path={}", path.display());
        let mut reader = self
            .fs
            .open_buffered(path)
            .with_path_context("open text input", path)?;
        self.vectorize_reader(&mut reader, &path.display().to_string())
    }

    /// Count the words of any buffered reader. `origin` names the source in errors.
    pub fn vectorize_reader(
        &self,
        reader: &mut dyn BufRead,
        origin: &str,
    ) -> ApplicationResult<WordFrequencies> {
        let mut counter = WordCounter::new();
        let mut line = Vec::new();
        let mut lines = 0usize;

        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .with_context(&format!("read text input {}", origin))?;
            if read == 0 {
                break;
            }
            // Invalid UTF-8 becomes U+FFFD, which the tokenizer treats as a separator
            counter.feed(&String::from_utf8_lossy(&line));
            lines += 1;
        }

        let frequencies = counter.finish();
        debug!(
            "vectorize: origin={} lines={} distinct={} total={}",
            origin,
            lines,
            frequencies.len(),
            frequencies.total()
        );
        Ok(frequencies)
    }

    /// Serialize frequencies in the requested format.
    pub fn to_json(
        &self,
        frequencies: &WordFrequencies,
        format: OutputFormat,
        pretty: bool,
    ) -> ApplicationResult<String> {
        let result = match (format, pretty) {
            (OutputFormat::Vector, false) => serde_json::to_string(&frequencies.vector()),
            (OutputFormat::Vector, true) => serde_json::to_string_pretty(&frequencies.vector()),
            (OutputFormat::Map, false) => serde_json::to_string(frequencies),
            (OutputFormat::Map, true) => serde_json::to_string_pretty(frequencies),
        };
        result.map_err(|e| ApplicationError::OperationFailed {
            context: "serialize word frequencies".to_string(),
            source: Box::new(e),
        })
    }

    /// Write serialized frequencies to `path`, creating parent directories.
    pub fn write(&self, path: &Path, json: &str) -> ApplicationResult<()> {
        debug!("write: path={} bytes={}", path.display(), json.len());
        self.fs
            .ensure_parent(path)
            .with_path_context("create output directory", path)?;
        self.fs
            .write(path, json)
            .with_path_context("write word vector", path)
    }
}
