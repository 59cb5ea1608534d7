//! Catalog Provider - reads the five JSON documents from a data directory
//!
//! A loader that is kept around (a long-running caller analyzing many
//! selections) reuses parsed documents while their files are unchanged.

use super::{CatalogDocuments, CatalogKind, CatalogStore};
use crate::config::CatalogFiles;
use crate::{AuditError, Result};
use anyhow::Context;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

/// File identity used to decide whether a cached document is still current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: SystemTime,
    len: u64,
}

impl FileStamp {
    fn of(path: &Path) -> Option<Self> {
        let metadata = std::fs::metadata(path).ok()?;
        Some(Self {
            modified: metadata.modified().ok()?,
            len: metadata.len(),
        })
    }
}

/// Reads catalog documents from a data directory
pub struct CatalogLoader {
    /// Parsed documents keyed by path, with the file stamp they were read at
    cache: HashMap<PathBuf, (Value, FileStamp)>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Load all five catalogs. The first document that cannot be read or
    /// parsed aborts the load.
    pub fn load_store(&mut self, data_dir: &Path, files: &CatalogFiles) -> Result<CatalogStore> {
        let documents = self.load_documents(data_dir, files)?;
        Ok(CatalogStore::from_documents(&documents))
    }

    /// Load all five raw documents
    pub fn load_documents(
        &mut self,
        data_dir: &Path,
        files: &CatalogFiles,
    ) -> Result<CatalogDocuments> {
        info!("Loading curriculum catalogs from {:?}", data_dir);

        let mut documents = CatalogDocuments::default();
        for kind in CatalogKind::ALL {
            let path = data_dir.join(files.file_name(kind));
            let document = self.load_document(kind, &path)?;
            documents.set(kind, document);
        }
        Ok(documents)
    }

    /// Load one document, reusing the cached copy if the file is unchanged
    pub fn load_document(&mut self, kind: CatalogKind, path: &Path) -> Result<Value> {
        let stamp = FileStamp::of(path);

        if let (Some(stamp), Some((cached, cached_stamp))) = (stamp, self.cache.get(path)) {
            if stamp == *cached_stamp {
                debug!("Using cached {} from {:?}", kind, path);
                return Ok(cached.clone());
            }
        }

        let document = read_json(path).map_err(|e| AuditError::CatalogLoad {
            name: kind.logical_name().to_string(),
            reason: format!("{:#}", e),
        })?;

        if let Some(stamp) = stamp {
            self.cache
                .insert(path.to_path_buf(), (document.clone(), stamp));
        }

        debug!("Loaded {} from {:?}", kind, path);
        Ok(document)
    }

    /// Number of cached documents
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {}", path.display()))
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}
