pub mod paths;

pub use paths::{AuditPaths, DATA_DIR_ENV};
