//! Compound store
//!
//! Keeps the compounds a user has calculated and persists them as line
//! delimited JSON, one object per compound:
//!
//! ```text
//! {"Formula":"H2O","Peso Molecular":18.015,"Elementos":{"H":2,"O":1}}
//! {"Formula":"Ca(OH)2","Peso Molecular":74.092,"Elementos":{"Ca":1,"H":2,"O":2}}
//! ```
//!
//! ## Behaviour
//!
//! - **Keyed by formula**: adding a formula that is already stored replaces
//!   the entry in place (its position in the file does not change).
//! - **Forgiving load**: blank lines are ignored and malformed lines are
//!   skipped with a warning instead of failing the whole file.
//! - **Atomic save**: the file is written to a sibling temp file and renamed
//!   over the target.


use anyhow::Context;
use molweight_formula::Compound;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

// ============================================================================
// Core Types
// ============================================================================

/// One persisted compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCompound {
    #[serde(rename = "Formula")]
    pub formula: String,
    /// g/mol
    #[serde(rename = "Peso Molecular")]
    pub molecular_weight: f64,
    #[serde(rename = "Elementos")]
    pub elements: BTreeMap<String, u32>,
}

impl From<&Compound> for StoredCompound {
    fn from(compound: &Compound) -> Self {
        Self {
            formula: compound.formula().to_string(),
            molecular_weight: compound.weight(),
            elements: compound.composition().as_map().clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added,
    /// The formula was already stored; its entry now holds the new values.
    Replaced,
}

// ============================================================================
// Storage Configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the `.jsonl` file
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./compounds.jsonl"),
        }
    }
}

impl StoreConfig {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

// ============================================================================
// Compound Store
// ============================================================================

pub struct CompoundStore {
    config: StoreConfig,
    /// Entries in insertion order
    entries: RwLock<Vec<StoredCompound>>,
    /// Unsaved changes since the last load/save
    dirty: AtomicBool,
}

impl CompoundStore {
    /// Open the store, loading the file if it exists.
    pub fn open(config: StoreConfig) -> anyhow::Result<Self> {
        let entries = if config.path.exists() {
            let contents = fs::read_to_string(&config.path)
                .with_context(|| format!("failed to read {}", config.path.display()))?;
            Self::parse_lines(&config.path, &contents)
        } else {
            tracing::debug!(path = %config.path.display(), "no compound file yet; starting empty");
            Vec::new()
        };

        tracing::info!(
            path = %config.path.display(),
            compounds = entries.len(),
            "loaded compound store"
        );

        Ok(Self {
            config,
            entries: RwLock::new(entries),
            dirty: AtomicBool::new(false),
        })
    }

    fn parse_lines(path: &Path, contents: &str) -> Vec<StoredCompound> {
        let mut entries: Vec<StoredCompound> = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<StoredCompound>(line) {
                Ok(entry) => {
                    Self::upsert(&mut entries, entry);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        line = index + 1,
                        error = %err,
                        "skipping malformed compound line"
                    );
                }
            }
        }
        entries
    }

    fn upsert(entries: &mut Vec<StoredCompound>, entry: StoredCompound) -> InsertOutcome {
        match entries.iter_mut().find(|e| e.formula == entry.formula) {
            Some(existing) => {
                *existing = entry;
                InsertOutcome::Replaced
            }
            None => {
                entries.push(entry);
                InsertOutcome::Added
            }
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Add a parsed compound (in memory; call [`save`](Self::save) to persist).
    pub fn insert(&self, compound: &Compound) -> InsertOutcome {
        let mut entries = self.entries.write();
        let outcome = Self::upsert(&mut entries, compound.into());
        self.dirty.store(true, Ordering::Release);
        drop(entries);
        tracing::debug!(formula = compound.formula(), ?outcome, "stored compound");
        outcome
    }

    /// Write every entry to disk, replacing the file.
    ///
    /// Holds the upgradable read lock from snapshot to rename: inserts and
    /// other saves wait, plain readers do not. A failed save leaves no temp
    /// file behind and keeps the store dirty.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = &self.config.path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let entries = self.entries.upgradable_read();
        let tmp_path = tmp_sibling(path);
        let written = write_lines(&tmp_path, &entries).and_then(|()| {
            fs::rename(&tmp_path, path).with_context(|| {
                format!("failed to move {} to {}", tmp_path.display(), path.display())
            })
        });
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::debug!(path = %tmp_path.display(), error = %cleanup, "temp file not removed");
            }
            return Err(err);
        }

        self.dirty.store(false, Ordering::Release);
        tracing::info!(path = %path.display(), compounds = entries.len(), "saved compound store");
        Ok(())
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    pub fn get(&self, formula: &str) -> Option<StoredCompound> {
        self.entries
            .read()
            .iter()
            .find(|e| e.formula == formula)
            .cloned()
    }

    /// The most recently added compound.
    pub fn last(&self) -> Option<StoredCompound> {
        self.entries.read().last().cloned()
    }

    /// All compounds in insertion order.
    pub fn list(&self) -> Vec<StoredCompound> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Whether there are changes that have not been saved yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

fn write_lines(tmp_path: &Path, entries: &[StoredCompound]) -> anyhow::Result<()> {
    let file = fs::File::create(tmp_path)
        .with_context(|| format!("failed to create {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        serde_json::to_writer(&mut writer, entry)
            .with_context(|| format!("failed to encode {}", entry.formula))?;
        writer
            .write_all(b"\n")
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
    }
    writer
        .into_inner()
        .map_err(|err| err.into_error())
        .and_then(|file| file.sync_all())
        .with_context(|| format!("failed to write {}", tmp_path.display()))
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "compounds.jsonl".into());
    name.push(".tmp");
    path.with_file_name(name)
}
