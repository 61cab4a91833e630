//! Flat-file cache store.
//!
//! One CSV table per record kind under the platform cache directory. Reads
//! go through a small in-memory LRU of parsed rows so repeated loads in one
//! process skip the disk; writes always go to a temporary sibling first and
//! atomically replace the old file, so an interrupted refresh leaves the
//! previous table intact.

use lru::LruCache;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Mutex;

use super::csv;
use super::models::{CacheKind, CacheRecord};
use crate::cli::types::Season;
use crate::error::{Result, ShotsError};

/// Outcome of a merge, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Rows already in the cache before the merge.
    pub existing: usize,
    /// Staged rows with a key not seen before.
    pub added: usize,
    /// Staged rows that overwrote a cached row with the same key.
    pub replaced: usize,
    /// Rows in the table after the merge.
    pub total: usize,
}

/// Coverage report for one cache file.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub kind: CacheKind,
    pub exists: bool,
    pub rows: usize,
    pub seasons: BTreeSet<Season>,
    pub entities: BTreeSet<String>,
    #[serde(skip)]
    pub pairs: BTreeSet<(Season, String)>,
}

impl CacheStatus {
    fn empty(kind: CacheKind) -> Self {
        Self {
            kind,
            exists: false,
            rows: 0,
            seasons: BTreeSet::new(),
            entities: BTreeSet::new(),
            pairs: BTreeSet::new(),
        }
    }

    /// Whether the cache already holds any rows for this (season, entity).
    pub fn covers(&self, season: Season, entity: &str) -> bool {
        self.pairs.contains(&(season, entity.to_string()))
    }
}

/// Owns the on-disk cache tables.
pub struct CacheStore {
    root: PathBuf,
    memory: Mutex<LruCache<CacheKind, Vec<Vec<String>>>>,
}

impl CacheStore {
    /// Store rooted at the platform cache dir, e.g. `~/.cache/nba-shots/`.
    pub fn new() -> anyhow::Result<Self> {
        let base = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine cache directory"))?;
        Ok(Self::with_root(base.join("nba-shots")))
    }

    /// Store rooted at an explicit directory (used by tests).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            memory: Mutex::new(LruCache::new(
                NonZeroUsize::new(CacheKind::ALL.len()).unwrap(),
            )),
        }
    }

    /// Path of the cache file for a record kind.
    pub fn path(&self, kind: CacheKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    /// Data rows (header stripped) from memory if cached, else from disk.
    /// `None` means the file does not exist.
    fn data_rows(&self, kind: CacheKind) -> Result<Option<Vec<Vec<String>>>> {
        if let Some(rows) = self.memory.lock().unwrap().get(&kind) {
            return Ok(Some(rows.clone()));
        }

        let path = self.path(kind);
        if !path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        let mut rows = csv::parse_rows(&text);
        if !rows.is_empty() {
            rows.remove(0); // header line
        }
        self.memory.lock().unwrap().put(kind, rows.clone());
        Ok(Some(rows))
    }

    /// Read the full table for a record kind.
    ///
    /// Fails with [`ShotsError::CacheMiss`] if the file does not exist,
    /// which callers interpret as "must fetch".
    pub fn load<R: CacheRecord>(&self, kind: CacheKind) -> Result<Vec<R>> {
        let rows = self
            .data_rows(kind)?
            .ok_or(ShotsError::CacheMiss { kind })?;
        rows.iter().map(|row| R::from_row(row)).collect()
    }

    /// Merge staged rows into the cached table and persist the union.
    ///
    /// Rows are keyed by their natural key; a staged row wins over a cached
    /// row with the same key. The combined table is written atomically, so a
    /// crash mid-write never corrupts the previous file.
    pub fn merge_and_save<R: CacheRecord>(
        &self,
        kind: CacheKind,
        staged: Vec<R>,
    ) -> Result<MergeStats> {
        let mut table: BTreeMap<R::Key, R> = BTreeMap::new();

        let existing = match self.data_rows(kind)? {
            Some(rows) => {
                for row in &rows {
                    let record = R::from_row(row)?;
                    table.insert(record.key(), record);
                }
                rows.len()
            }
            None => 0,
        };

        let mut added = 0;
        let mut replaced = 0;
        for record in staged {
            if table.insert(record.key(), record).is_some() {
                replaced += 1;
            } else {
                added += 1;
            }
        }

        let total = table.len();
        self.write_atomic(kind, R::HEADER, table.values().map(R::to_row).collect())?;

        Ok(MergeStats {
            existing,
            added,
            replaced,
            total,
        })
    }

    /// Hard-refresh path: replace the table wholesale, no merge.
    ///
    /// Staged rows still collapse on their natural key (last write wins).
    pub fn replace<R: CacheRecord>(&self, kind: CacheKind, staged: Vec<R>) -> Result<usize> {
        let mut table: BTreeMap<R::Key, R> = BTreeMap::new();
        for record in staged {
            table.insert(record.key(), record);
        }

        let total = table.len();
        self.write_atomic(kind, R::HEADER, table.values().map(R::to_row).collect())?;
        Ok(total)
    }

    fn write_atomic(
        &self,
        kind: CacheKind,
        header: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        let path = self.path(kind);
        let tmp = path.with_extension("csv.tmp");
        fs::write(&tmp, csv::table_to_string(header, &rows))?;
        fs::rename(&tmp, &path)?;

        self.memory.lock().unwrap().put(kind, rows);
        Ok(())
    }

    /// Report whether a cache file exists and which seasons/entities it
    /// covers. A missing file is a normal answer here, not an error; only
    /// [`CacheStore::load`] treats absence as a miss.
    pub fn status(&self, kind: CacheKind) -> Result<CacheStatus> {
        let rows = match self.data_rows(kind)? {
            Some(rows) => rows,
            None => return Ok(CacheStatus::empty(kind)),
        };

        let mut status = CacheStatus::empty(kind);
        status.exists = true;
        status.rows = rows.len();

        for row in &rows {
            let (season_raw, entity) = match (row.first(), row.get(1)) {
                (Some(s), Some(e)) => (s, e),
                _ => {
                    return Err(ShotsError::Cache {
                        message: format!("{kind} cache row missing SEASON/ENTITY columns"),
                    })
                }
            };
            let season: Season = season_raw.parse()?;
            status.seasons.insert(season);
            status.entities.insert(entity.clone());
            status.pairs.insert((season, entity.clone()));
        }

        Ok(status)
    }
}
