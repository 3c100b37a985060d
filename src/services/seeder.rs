//! # Character Seeder
//!
//! Loads character definition files (`*.json`) from a directory into the
//! store at startup. A file is only inserted when no stored character
//! already matches its name, so restarting against the same database never
//! duplicates records.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use super::store::{CharacterStore, StoreError};
use crate::models::Character;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read seed file")]
    Read(#[from] std::io::Error),

    #[error("malformed character definition")]
    Parse(#[from] serde_json::Error),

    #[error("invalid character definition")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("store rejected character")]
    Store(#[from] StoreError),
}

/// What a seeding pass did, file by file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<String>,
    /// Names that already had a matching stored character.
    pub existing: Vec<String>,
    pub failed: Vec<PathBuf>,
}

enum FileOutcome {
    Inserted(String),
    Existing(String),
}

/// Seeds `store` from every `*.json` file in `source_dir`, in file name order.
///
/// Failures of individual files are logged and reported in
/// [`SeedReport::failed`]; only an unreadable directory aborts the pass.
#[instrument(skip_all, fields(source_dir = %source_dir.display()))]
pub async fn load_all(
    store: &dyn CharacterStore,
    source_dir: &Path,
) -> Result<SeedReport, SeedError> {
    let read_dir_err = |source| SeedError::ReadDir {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(source_dir).await.map_err(read_dir_err)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
        let path = entry.path();
        let is_file = fs::metadata(&path).await.is_ok_and(|m| m.is_file());
        if is_file && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-definition entry");
        }
    }
    files.sort();

    let mut report = SeedReport::default();
    for path in files {
        match load_file(store, &path).await {
            Ok(FileOutcome::Inserted(name)) => {
                info!(%name, "Character saved to store");
                report.inserted.push(name);
            }
            Ok(FileOutcome::Existing(name)) => {
                debug!(%name, "Character already present, skipping");
                report.existing.push(name);
            }
            Err(e) => {
                warn!(path = %path.display(), error = ?e, "Failed to seed character");
                report.failed.push(path);
            }
        }
    }

    info!(
        inserted = report.inserted.len(),
        existing = report.existing.len(),
        failed = report.failed.len(),
        "Seeding finished"
    );
    Ok(report)
}

async fn load_file(store: &dyn CharacterStore, path: &Path) -> Result<FileOutcome, SeedError> {
    let raw = fs::read_to_string(path).await?;
    let character: Character = serde_json::from_str(&raw)?;
    character.validate()?;

    if store.find_by_name(&character.name).await?.is_some() {
        return Ok(FileOutcome::Existing(character.name));
    }

    store.insert(&character).await?;
    Ok(FileOutcome::Inserted(character.name))
}
