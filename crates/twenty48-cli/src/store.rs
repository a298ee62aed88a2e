use std::{
    fs::{self, File},
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk shape of the persisted high score.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
    updated_at: DateTime<Utc>,
}

/// Single-slot store for the best score.
///
/// One well-known JSON file holds one scalar. Loading tolerates a file
/// that does not exist yet; saving creates parent directories on demand
/// and overwrites the slot wholesale (the session always computes the new
/// value in memory first, so there is no read-modify-write here).
#[derive(Debug)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the persisted best score, or `None` before the first save.
    pub fn load(&self) -> anyhow::Result<Option<u32>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to open best score file: {}", self.path.display())
                });
            }
        };
        let record: BestScoreRecord = serde_json::from_reader(io::BufReader::new(file))
            .with_context(|| {
                format!("Failed to parse best score file: {}", self.path.display())
            })?;
        Ok(Some(record.best))
    }

    /// Overwrites the slot with a new best score.
    pub fn save(&self, best: u32) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let record = BestScoreRecord {
            best,
            updated_at: Utc::now(),
        };
        let file = File::create(&self.path).with_context(|| {
            format!("Failed to create best score file: {}", self.path.display())
        })?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &record)
            .with_context(|| format!("Failed to write JSON to {}", self.path.display()))?;
        writeln!(&mut writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to flush output to {}", self.path.display()))?;
        Ok(())
    }
}
