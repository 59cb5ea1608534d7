//! Catalog Store - the five parsed curriculum documents
//!
//! The store is read-only once built. It can be filled from documents the
//! caller already parsed (`CatalogStore::from_documents`) or from JSON files
//! on disk through `CatalogLoader`.

use serde_json::Value;
use std::fmt;

pub mod loader;
pub mod types;

pub use loader::CatalogLoader;
pub use types::{
    CourseEntry, CourseRecord, GenEdCatalog, InterdisciplinaryCatalog, LiberalArtsCatalog,
    MajorCatalog, MajorRecord, MinorCatalog, MinorSection, MinorTree,
};

/// Logical names of the catalog documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Minor,
    GenEd,
    Major,
    LiberalArts,
    Interdisciplinary,
}

impl CatalogKind {
    /// Load order used by the provider
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Minor,
        CatalogKind::GenEd,
        CatalogKind::Major,
        CatalogKind::LiberalArts,
        CatalogKind::Interdisciplinary,
    ];

    pub fn logical_name(&self) -> &'static str {
        match self {
            CatalogKind::Minor => "minor_data",
            CatalogKind::GenEd => "gened_data",
            CatalogKind::Major => "major_data",
            CatalogKind::LiberalArts => "lib_data",
            CatalogKind::Interdisciplinary => "ID_data",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.logical_name())
    }
}

/// Raw documents handed over by a catalog provider
#[derive(Debug, Clone, Default)]
pub struct CatalogDocuments {
    pub minor_data: Value,
    pub gened_data: Value,
    pub major_data: Value,
    pub lib_data: Value,
    pub id_data: Value,
}

impl CatalogDocuments {
    pub fn set(&mut self, kind: CatalogKind, document: Value) {
        match kind {
            CatalogKind::Minor => self.minor_data = document,
            CatalogKind::GenEd => self.gened_data = document,
            CatalogKind::Major => self.major_data = document,
            CatalogKind::LiberalArts => self.lib_data = document,
            CatalogKind::Interdisciplinary => self.id_data = document,
        }
    }
}

/// In-memory holder of the typed catalogs
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    pub minors: MinorCatalog,
    pub gened: GenEdCatalog,
    pub majors: MajorCatalog,
    pub liberal_arts: LiberalArtsCatalog,
    pub interdisciplinary: InterdisciplinaryCatalog,
}

impl CatalogStore {
    pub fn from_documents(documents: &CatalogDocuments) -> Self {
        Self {
            minors: MinorCatalog::from_value(&documents.minor_data),
            gened: GenEdCatalog::from_value(&documents.gened_data),
            majors: MajorCatalog::from_value(&documents.major_data),
            liberal_arts: LiberalArtsCatalog::from_value(&documents.lib_data),
            interdisciplinary: InterdisciplinaryCatalog::from_value(&documents.id_data),
        }
    }

    /// Selectable major names, in document order
    pub fn major_names(&self) -> Vec<&str> {
        self.majors.names().collect()
    }

    /// Selectable minor names, in document order
    pub fn minor_names(&self) -> Vec<&str> {
        self.minors.names().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_store_from_documents() {
        let mut documents = CatalogDocuments::default();
        documents.set(CatalogKind::Minor, json!({"M": {"Core": [{"Course": "X1"}]}}));
        documents.set(
            CatalogKind::Major,
            json!({"MAJ": {"Core": ["X1"], "Electives": []}, "OTHER": {}}),
        );
        documents.set(CatalogKind::Interdisciplinary, json!({"X1": {}}));

        let store = CatalogStore::from_documents(&documents);
        assert_eq!(store.minor_names(), vec!["M"]);
        assert_eq!(store.major_names(), vec!["MAJ", "OTHER"]);
        assert!(store.interdisciplinary.contains("X1"));
        assert!(store.gened.merged().is_empty());
        assert!(store.liberal_arts.lib_art.is_empty());
    }

    #[test]
    fn test_logical_names() {
        let names: Vec<&str> = CatalogKind::ALL.iter().map(|k| k.logical_name()).collect();
        assert_eq!(
            names,
            vec!["minor_data", "gened_data", "major_data", "lib_data", "ID_data"]
        );
    }
}
