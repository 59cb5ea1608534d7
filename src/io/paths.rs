use crate::{AuditError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable naming the catalog data directory
pub const DATA_DIR_ENV: &str = "DEGREE_AUDIT_DATA";

/// Locations of catalog files and the settings file
#[derive(Debug, Clone)]
pub struct AuditPaths {
    /// Directory holding the five catalog JSON files
    pub data_dir: PathBuf,
}

impl AuditPaths {
    /// Resolve the data directory: explicit flag, then `DEGREE_AUDIT_DATA`,
    /// then the platform data directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(dir) = explicit {
            return Ok(Self::for_dir(dir));
        }

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::for_dir(Path::new(&dir)));
        }

        Self::new()
    }

    /// Use the platform data directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "degree-audit").ok_or_else(|| {
            AuditError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Use a specific directory
    pub fn for_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Fail early with a readable message when the directory is missing
    pub fn ensure_exists(&self) -> Result<()> {
        if self.data_dir.is_dir() {
            Ok(())
        } else {
            Err(AuditError::Path(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )))
        }
    }
}
