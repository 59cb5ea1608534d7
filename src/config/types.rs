use serde::{Deserialize, Serialize};

use crate::catalog::CatalogKind;
use crate::engine::credit::CreditRange;

/// Tag added when a course is in the selected major's core list
pub const MAJOR_CORE: &str = "Major_Core";
/// Tag added when a course is in the selected major's electives list
pub const MAJOR_ELEC: &str = "Major_Elec";
/// Liberal-arts tag
pub const LIB_ART: &str = "Lib Art";
/// Advanced liberal-arts tag (always accompanied by `LIB_ART`)
pub const ADV_LIB_ART: &str = "Adv Lib Art";
/// Interdisciplinary tag
pub const INTERDISCIPLINARY: &str = "ID";

/// Column order used when no settings file overrides it
pub const DEFAULT_AREA_COLUMNS: [&str; 13] = [
    "EC",
    "MQR",
    "LPS",
    "WCGI",
    "USED",
    "IS",
    "CE",
    "SW",
    LIB_ART,
    ADV_LIB_ART,
    INTERDISCIPLINARY,
    MAJOR_CORE,
    MAJOR_ELEC,
];

/// Ordered Requirement Area vocabulary.
///
/// One value is shared by the resolver (to recognise known tags) and the
/// materializer (to lay out flag columns), so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaColumns(Vec<String>);

impl AreaColumns {
    /// Build a column list, rejecting empty lists and duplicate tags
    pub fn new(columns: Vec<String>) -> crate::Result<Self> {
        let columns = Self(columns);
        columns.validate()?;
        Ok(columns)
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.0.is_empty() {
            return Err(crate::AuditError::Config(
                "area_columns must name at least one requirement area".to_string(),
            ));
        }
        for (i, tag) in self.0.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(crate::AuditError::Config(format!(
                    "area_columns entry {} is blank",
                    i
                )));
            }
            if self.0[..i].contains(tag) {
                return Err(crate::AuditError::Config(format!(
                    "area_columns lists '{}' more than once",
                    tag
                )));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|c| c == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for AreaColumns {
    fn default() -> Self {
        Self(DEFAULT_AREA_COLUMNS.iter().map(|s| s.to_string()).collect())
    }
}

/// File names for the five catalog documents, relative to the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFiles {
    #[serde(default = "default_minor_file")]
    pub minor_data: String,

    #[serde(default = "default_gened_file")]
    pub gened_data: String,

    #[serde(default = "default_major_file")]
    pub major_data: String,

    #[serde(default = "default_lib_file")]
    pub lib_data: String,

    #[serde(rename = "ID_data", default = "default_id_file")]
    pub id_data: String,
}

fn default_minor_file() -> String {
    "minors_v3.json".to_string()
}

fn default_gened_file() -> String {
    "gened_v2.json".to_string()
}

fn default_major_file() -> String {
    "all-majors.json".to_string()
}

fn default_lib_file() -> String {
    "liberal_arts_courses.json".to_string()
}

fn default_id_file() -> String {
    "ID.json".to_string()
}

impl CatalogFiles {
    pub fn file_name(&self, kind: CatalogKind) -> &str {
        match kind {
            CatalogKind::Minor => &self.minor_data,
            CatalogKind::GenEd => &self.gened_data,
            CatalogKind::Major => &self.major_data,
            CatalogKind::LiberalArts => &self.lib_data,
            CatalogKind::Interdisciplinary => &self.id_data,
        }
    }
}

impl Default for CatalogFiles {
    fn default() -> Self {
        Self {
            minor_data: default_minor_file(),
            gened_data: default_gened_file(),
            major_data: default_major_file(),
            lib_data: default_lib_file(),
            id_data: default_id_file(),
        }
    }
}

/// Settings file structure (degree-audit.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSettings {
    /// Requirement Area columns, in display order
    #[serde(default)]
    pub area_columns: AreaColumns,

    /// Catalog file names
    #[serde(default)]
    pub catalogs: CatalogFiles,

    /// Credit range used when a course declares none
    #[serde(default)]
    pub default_credit: CreditRange,

    /// Text shown in a flag column when the area is satisfied
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_marker() -> String {
    "X".to_string()
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            area_columns: AreaColumns::default(),
            catalogs: CatalogFiles::default(),
            default_credit: CreditRange::default(),
            marker: default_marker(),
        }
    }
}
