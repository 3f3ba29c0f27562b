//! Word-frequency vectors over streamed text.
//!
//! Text arrives in arbitrary chunks. Complete lines are tokenized immediately;
//! the trailing partial line stays buffered until more input or [`WordCounter::finish`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{instrument, trace};

/// Anything that is neither a Latin/Cyrillic lowercase letter nor whitespace.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zа-яё\s]").expect("static regex"));

/// Normalize a line and split it into words.
pub fn tokenize(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Line-buffered word counter.
#[derive(Debug, Default)]
pub struct WordCounter {
    buffer: String,
    counts: BTreeMap<String, u64>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of text. Only `\n`-terminated lines are counted now.
    pub fn feed(&mut self, chunk: &str) {
        self.buffer.push_str(chunk);
        if let Some(end) = self.buffer.rfind('\n') {
            let rest = self.buffer.split_off(end + 1);
            let complete = std::mem::replace(&mut self.buffer, rest);
            for line in complete.lines() {
                self.count_line(line);
            }
        }
    }

    fn count_line(&mut self, line: &str) {
        for word in tokenize(line) {
            *self.counts.entry(word).or_insert(0) += 1;
        }
    }

    /// Count the buffered remainder and return the frequencies.
    #[instrument(level = "debug", skip(self))]
    pub fn finish(mut self) -> WordFrequencies {
        let rest = std::mem::take(&mut self.buffer);
        if !rest.is_empty() {
            self.count_line(&rest);
        }
        trace!("finish: {} distinct words", self.counts.len());
        WordFrequencies {
            counts: self.counts,
        }
    }
}

/// Word counts keyed by word, in ascending word order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordFrequencies {
    counts: BTreeMap<String, u64>,
}

impl WordFrequencies {
    pub fn from_text(text: &str) -> Self {
        let mut counter = WordCounter::new();
        counter.feed(text);
        counter.finish()
    }

    /// Counts ordered by sorted word.
    pub fn vector(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    pub fn words(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
