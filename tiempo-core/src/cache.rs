//! Day-partitioned filesystem cache for raw forecast documents.
//!
//! Entries are keyed by `(source id, location code)` under a directory
//! named after the current local date, so a blob written yesterday is
//! simply not addressable today. Nothing is ever deleted here; stale
//! partitions accumulate and must be reaped externally.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use tracing::debug;

/// Directory name format for a day partition, e.g. `20180308`.
const PARTITION_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone)]
pub struct DayCache {
    root: PathBuf,
}

impl DayCache {
    /// Cache rooted at an explicit directory (created lazily on write).
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Cache rooted at the platform cache directory.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "tiempo", "tiempo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform cache directory"))?;

        Ok(Self::new(dirs.cache_dir().to_path_buf()))
    }

    /// Look up the blob for `(source, code)` under today's partition.
    pub fn get(&self, source: &str, code: &str) -> Option<Vec<u8>> {
        self.get_on(Local::now().date_naive(), source, code)
    }

    /// Write/overwrite the blob for `(source, code)` under today's
    /// partition. Last write wins.
    pub fn set(&self, source: &str, code: &str, bytes: &[u8]) -> Result<()> {
        self.set_on(Local::now().date_naive(), source, code, bytes)
    }

    fn entry_path(&self, day: NaiveDate, source: &str, code: &str) -> PathBuf {
        // e.g. <root>/20180308/tiempo-30625
        self.root
            .join(day.format(PARTITION_FORMAT).to_string())
            .join(format!("{source}-{code}"))
    }

    fn get_on(&self, day: NaiveDate, source: &str, code: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(day, source, code);
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), "cache hit");
                Some(bytes)
            }
            // A partition that does not exist yet means "no entries".
            Err(err) => {
                debug!(path = %path.display(), error = %err, "cache miss");
                None
            }
        }
    }

    fn set_on(&self, day: NaiveDate, source: &str, code: &str, bytes: &[u8]) -> Result<()> {
        let path = self.entry_path(day, source, code);
        let partition = path
            .parent()
            .ok_or_else(|| anyhow!("cache entry path has no parent: {}", path.display()))?;

        // Idempotent: succeeds if the partition already exists.
        fs::create_dir_all(partition).with_context(|| {
            format!("Failed to create cache partition: {}", partition.display())
        })?;

        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write cache entry: {}", path.display()))?;

        debug!(path = %path.display(), len = bytes.len(), "cache write");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn round_trip_within_the_same_partition() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DayCache::new(dir.path().to_path_buf());
        let today = day("2026-08-27");

        cache.set_on(today, "tiempo", "30625", b"<report/>").unwrap();
        assert_eq!(
            cache.get_on(today, "tiempo", "30625").as_deref(),
            Some(b"<report/>".as_slice())
        );
    }

    #[test]
    fn entries_are_invisible_across_day_partitions() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DayCache::new(dir.path().to_path_buf());

        cache
            .set_on(day("2026-08-26"), "tiempo", "30625", b"yesterday")
            .unwrap();
        assert!(cache.get_on(day("2026-08-27"), "tiempo", "30625").is_none());
    }

    #[test]
    fn keys_are_namespaced_by_source_and_code() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DayCache::new(dir.path().to_path_buf());
        let today = day("2026-08-27");

        cache.set_on(today, "tiempo", "30625", b"orvieto").unwrap();
        assert!(cache.get_on(today, "tiempo", "31553").is_none());
        assert!(cache.get_on(today, "other", "30625").is_none());
    }

    #[test]
    fn last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DayCache::new(dir.path().to_path_buf());
        let today = day("2026-08-27");

        cache.set_on(today, "tiempo", "30625", b"first").unwrap();
        cache.set_on(today, "tiempo", "30625", b"second").unwrap();
        assert_eq!(
            cache.get_on(today, "tiempo", "30625").as_deref(),
            Some(b"second".as_slice())
        );
    }

    #[test]
    fn missing_partition_is_a_miss_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DayCache::new(dir.path().join("never-created"));
        assert!(cache.get_on(day("2026-08-27"), "tiempo", "30625").is_none());
    }

    #[test]
    fn today_wrappers_use_the_local_date() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DayCache::new(dir.path().to_path_buf());

        cache.set("tiempo", "30625", b"today").unwrap();
        assert_eq!(cache.get("tiempo", "30625").as_deref(), Some(b"today".as_slice()));
        assert_eq!(
            cache
                .get_on(Local::now().date_naive(), "tiempo", "30625")
                .as_deref(),
            Some(b"today".as_slice())
        );
    }
}
