pub mod loader;
pub mod types;

pub use loader::{SettingsLoader, SETTINGS_FILE_NAME};
pub use types::{AreaColumns, AuditSettings, CatalogFiles};
