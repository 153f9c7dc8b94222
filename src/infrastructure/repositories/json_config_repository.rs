use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::domain::entities::GuildConfig;
use crate::domain::repositories::{ConfigStoreError, GuildConfigRepository};

/// Guild configuration cached in memory and persisted to a single JSON file.
///
/// Writers are serialized; the cache is replaced only after the file write
/// succeeds, so readers never observe a value that is not on disk.
pub struct JsonConfigRepository {
    file_path: PathBuf,
    data: RwLock<GuildConfig>,
    write_lock: Mutex<()>,
}

impl JsonConfigRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let data = Self::load(&file_path);
        if data.is_empty() {
            info!("No voice log channels configured yet ({})", file_path.display());
        } else {
            info!(
                "Loaded voice log configuration for {} guild(s) from {}",
                data.len(),
                file_path.display()
            );
        }

        Self {
            file_path,
            data: RwLock::new(data),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the mapping from disk. A missing file is an empty mapping; an
    /// unreadable or malformed one is logged and also treated as empty.
    pub fn load(file_path: &Path) -> GuildConfig {
        if !file_path.exists() {
            return GuildConfig::new();
        }

        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to read guild config {}: {}. Starting with an empty configuration",
                    file_path.display(),
                    e
                );
                return GuildConfig::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Guild config {} is not valid JSON: {}. Starting with an empty configuration",
                    file_path.display(),
                    e
                );
                GuildConfig::new()
            }
        }
    }

    /// Writes the full mapping to a sibling temp file and renames it over the
    /// target, so a crash mid-write leaves the previous file intact.
    pub fn save(file_path: &Path, config: &GuildConfig) -> Result<(), ConfigStoreError> {
        let json = serde_json::to_string_pretty(config)?;

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = Self::temp_path(file_path);
        let written = Self::write_synced(&tmp_path, json.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, file_path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    pub fn snapshot(&self) -> GuildConfig {
        self.data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn temp_path(file_path: &Path) -> PathBuf {
        let mut name = file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        file_path.with_file_name(name)
    }
}

impl GuildConfigRepository for JsonConfigRepository {
    fn set_log_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), ConfigStoreError> {
        let _writer = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut updated = self.snapshot();
        updated.set_log_channel(guild_id, channel_id);
        Self::save(&self.file_path, &updated)?;

        *self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = updated;
        Ok(())
    }

    fn get_log_channel(&self, guild_id: u64) -> Option<u64> {
        self.data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .log_channel(guild_id)
    }
}

impl std::fmt::Debug for JsonConfigRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonConfigRepository")
            .field("file_path", &self.file_path)
            .finish()
    }
}
