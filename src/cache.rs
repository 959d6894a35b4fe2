use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BoardError, BoardResult};

pub const CACHE_FILE: &str = "jokes_cache.json";

/// The one record the board keeps: the current joke and when it came in.
/// No `last_fetch` means a refresh is always due.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JokeRecord {
    pub joke: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,
}

// On-disk shape; the timestamp travels as RFC 3339 text.
#[derive(Debug, Deserialize, Serialize)]
struct CacheFile {
    joke: Option<String>,
    last_fetch: Option<String>,
}

pub struct JokeCache {
    path: PathBuf,
}

impl JokeCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Standard cache file inside the plugin's data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty record. Anything else unreadable is an
    /// error; the caller decides whether to continue without a cache.
    pub fn load(&self) -> BoardResult<JokeRecord> {
        if !self.path.exists() {
            return Ok(JokeRecord::default());
        }

        let txt = std::fs::read_to_string(&self.path)
            .map_err(|e| self.io_err(e.to_string()))?;
        let file: CacheFile = serde_json::from_str(&txt)
            .map_err(|e| self.io_err(format!("bad json: {}", e)))?;

        let last_fetch = match file.last_fetch {
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| self.io_err(format!("bad last_fetch '{}': {}", raw, e)))?
                    .with_timezone(&Utc),
            ),
            None => None,
        };

        Ok(JokeRecord {
            joke: file.joke,
            last_fetch,
        })
    }

    /// Overwrites the whole file; the cache holds exactly one record.
    pub fn save(&self, record: &JokeRecord) -> BoardResult<()> {
        let file = CacheFile {
            joke: record.joke.clone(),
            last_fetch: record.last_fetch.map(|t| t.to_rfc3339()),
        };
        let txt = serde_json::to_string_pretty(&file)
            .map_err(|e| self.io_err(e.to_string()))?;
        std::fs::write(&self.path, txt).map_err(|e| self.io_err(e.to_string()))
    }

    fn io_err(&self, message: impl Into<String>) -> BoardError {
        BoardError::cache_io(self.path.display().to_string(), message)
    }
}
