pub mod analyze;
pub mod fulfillment;
pub mod list;

use std::path::PathBuf;

use crate::catalog::{CatalogLoader, CatalogStore};
use crate::config::{AuditSettings, SettingsLoader};
use crate::io::AuditPaths;
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Error with message
    Error(String),
    /// Warning with message
    Warning(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Error(_) => 1,
            CommandResult::Warning(_) => 0,
        }
    }
}

/// Where catalogs and settings come from, shared by every command
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl CatalogSource {
    pub fn new(data_dir: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        Self { data_dir, config }
    }

    /// Resolve settings and load all catalogs. Any failure here stops the
    /// command before analysis starts.
    pub fn load(&self) -> Result<(AuditSettings, CatalogStore)> {
        let paths = AuditPaths::resolve(self.data_dir.as_deref())?;
        paths.ensure_exists()?;

        let settings = SettingsLoader::new().load(self.config.as_deref(), &paths.data_dir)?;

        let store = CatalogLoader::new().load_store(&paths.data_dir, &settings.catalogs)?;
        Ok((settings, store))
    }
}
