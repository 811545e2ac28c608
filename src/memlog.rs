//! A bounded in-memory log, newest record first.
//!
//! Capacity is counted in characters of record text. Old records are dropped
//! to make room for new ones.

use core::fmt::Display;

use alloc::{collections::VecDeque, string::String, vec::Vec};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use embassy_time::Instant;

static GLOBAL_LOGGER: Mutex<CriticalSectionRawMutex, LogStorage> =
    Mutex::new(LogStorage::with_capacity(DISCARD_WARNING.len()));

const DISCARD_WARNING: &str = "record discarded: larger than the log";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub instant: Instant,
    pub level: Level,
    pub text: String,
}

impl Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let millis = self.instant.as_millis();
        write!(
            f,
            "[{:>5}.{:03}] {} {}",
            millis / 1000,
            millis % 1000,
            self.level,
            self.text
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERRO",
        })
    }
}

struct LogStorage {
    records: VecDeque<Record>,
    // In characters.
    utilization: usize,
    capacity: usize,
}

impl LogStorage {
    const fn with_capacity(capacity: usize) -> Self {
        LogStorage {
            records: VecDeque::new(),
            utilization: 0,
            capacity,
        }
    }

    fn add_record(&mut self, instant: Instant, level: Level, text: String) {
        if text.len() > self.capacity {
            self.add_record(instant, Level::Warn, DISCARD_WARNING.into());
            return;
        }

        while self.capacity - self.utilization < text.len() {
            match self.records.pop_back() {
                Some(removed) => self.utilization -= removed.text.len(),
                None => break,
            }
        }

        self.utilization += text.len();
        self.records.push_front(Record {
            instant,
            level,
            text,
        });
    }

    fn clear(&mut self) {
        self.utilization = 0;
        self.records.clear();
    }
}

/// Replaces the log with an empty one of the given capacity.
///
/// Panics if the capacity can't hold the discard warning.
pub async fn init(capacity: usize) {
    if capacity < DISCARD_WARNING.len() {
        panic!("minimum log capacity is {}", DISCARD_WARNING.len());
    }

    *GLOBAL_LOGGER.lock().await = LogStorage::with_capacity(capacity);
}

pub async fn log(level: Level, text: impl Into<String>) {
    GLOBAL_LOGGER
        .lock()
        .await
        .add_record(Instant::now(), level, text.into());
}

pub async fn info(text: impl Into<String>) {
    log(Level::Info, text).await
}
pub async fn warn(text: impl Into<String>) {
    log(Level::Warn, text).await
}

pub async fn clear() {
    GLOBAL_LOGGER.lock().await.clear();
}

/// A copy of the current records, newest first.
pub async fn records() -> Vec<Record> {
    GLOBAL_LOGGER.lock().await.records.iter().cloned().collect()
}
