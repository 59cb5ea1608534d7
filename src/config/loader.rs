use super::types::AuditSettings;
use crate::{AuditError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Settings file looked up in the data directory when no explicit path is given
pub const SETTINGS_FILE_NAME: &str = "degree-audit.yaml";

/// Loader for `degree-audit.yaml` settings files
#[derive(Debug, Default)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Create new settings loader
    pub fn new() -> Self {
        Self
    }

    /// Resolve settings: an explicit file wins, then `<data_dir>/degree-audit.yaml`,
    /// then built-in defaults.
    pub fn load(&self, explicit: Option<&Path>, data_dir: &Path) -> Result<AuditSettings> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        let discovered = data_dir.join(SETTINGS_FILE_NAME);
        if discovered.is_file() {
            return self.load_file(&discovered);
        }

        debug!("No settings file in {:?}, using defaults", data_dir);
        Ok(AuditSettings::default())
    }

    /// Load and validate a settings file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<AuditSettings> {
        let path = path.as_ref();
        info!("Loading settings from: {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AuditError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: AuditSettings = serde_yaml_ng::from_str(&contents).map_err(|e| {
            AuditError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        self.validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings values that serde cannot express
    fn validate(&self, settings: &AuditSettings) -> Result<()> {
        settings.area_columns.validate()?;

        if settings.marker.is_empty() {
            return Err(AuditError::Config("marker must not be empty".to_string()));
        }

        let credit = settings.default_credit;
        if credit.validated().is_none() {
            return Err(AuditError::Config(format!(
                "default_credit must be a finite range with min <= max, got min {} and max {}",
                credit.min, credit.max
            )));
        }

        Ok(())
    }
}
