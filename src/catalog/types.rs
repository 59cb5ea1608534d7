//! Typed views over the five catalog documents
//!
//! Every parser here is lenient: an element that does not have the expected
//! shape is skipped (with a `debug!` event) rather than failing the document.
//! Catalog correctness is the provider's concern.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::engine::credit::{find_declared_credit, DeclaredCredit};

/// Field naming a course on every catalog entry
pub const COURSE_FIELD: &str = "Course";
/// Field naming a conditional group on a minor entry
pub const GROUP_FIELD: &str = "group";
/// Gen-ed groups merged into one lookup, in merge order
pub const GENED_GROUPS: [&str; 2] = ["Required Core", "Flexible Core"];

// =============================================================================
// Minor requirement trees
// =============================================================================

/// A single course as it appears in a minor's requirement tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<DeclaredCredit>,
}

impl CourseRecord {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: None,
            credit: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_credit(mut self, credit: DeclaredCredit) -> Self {
        self.credit = Some(credit);
        self
    }

    /// Parse an object carrying a string `Course` field
    fn from_fields(fields: &Map<String, Value>) -> Option<Self> {
        let code = fields.get(COURSE_FIELD)?.as_str()?;
        Some(Self {
            code: code.to_string(),
            title: fields
                .get("Title")
                .and_then(Value::as_str)
                .map(str::to_string),
            credit: find_declared_credit(fields),
        })
    }
}

/// One entry of a minor section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CourseEntry {
    /// A course taken directly
    Direct(CourseRecord),
    /// A "choose N of" cluster
    Group {
        name: String,
        courses: Vec<CourseEntry>,
    },
}

impl CourseEntry {
    /// Classify one raw section element.
    ///
    /// An object with a string `Course` is a direct entry. Any other object is
    /// a group named by its `group` field (or, failing that, by its first
    /// list-valued key) whose members are the direct entries found in its
    /// list-valued fields, in document order. Only one level of nesting is
    /// read.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;

        if fields.contains_key(COURSE_FIELD) {
            let record = CourseRecord::from_fields(fields);
            if record.is_none() {
                debug!("Skipping entry with non-string Course: {}", value);
            }
            return record.map(CourseEntry::Direct);
        }

        let mut name = fields
            .get(GROUP_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string);
        let mut courses = Vec::new();

        for (key, field) in fields {
            let Some(items) = field.as_array() else {
                continue;
            };
            if name.is_none() {
                name = Some(key.clone());
            }
            courses.extend(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .filter_map(CourseRecord::from_fields)
                    .map(CourseEntry::Direct),
            );
        }

        match name {
            Some(name) if !courses.is_empty() => Some(CourseEntry::Group { name, courses }),
            _ => {
                debug!("Skipping entry with no courses: {}", value);
                None
            }
        }
    }
}

/// A named top-level section ("Core", "Electives", ...) of a minor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinorSection {
    pub name: String,
    pub entries: Vec<CourseEntry>,
}

/// Requirement tree for one minor, sections in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MinorTree {
    pub sections: Vec<MinorSection>,
}

impl MinorTree {
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            debug!("Minor record is not an object");
            return Self::default();
        };

        let sections = fields
            .iter()
            .filter_map(|(name, section)| match section.as_array() {
                Some(items) => Some(MinorSection {
                    name: name.clone(),
                    entries: items.iter().filter_map(CourseEntry::from_value).collect(),
                }),
                None => {
                    debug!("Skipping non-list minor section '{}'", name);
                    None
                }
            })
            .collect();

        Self { sections }
    }

    /// Look up a section by exact name
    pub fn section(&self, name: &str) -> Option<&MinorSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.entries.is_empty())
    }
}

/// Minor name -> requirement tree
#[derive(Debug, Clone, Default)]
pub struct MinorCatalog {
    minors: Vec<(String, MinorTree)>,
    index: HashMap<String, usize>,
}

impl MinorCatalog {
    pub fn from_value(value: &Value) -> Self {
        let mut catalog = Self::default();
        if let Some(fields) = value.as_object() {
            for (name, tree) in fields {
                catalog.insert(name.clone(), MinorTree::from_value(tree));
            }
        }
        catalog
    }

    pub fn insert(&mut self, name: String, tree: MinorTree) {
        match self.index.get(&name) {
            Some(&i) => self.minors[i].1 = tree,
            None => {
                self.index.insert(name.clone(), self.minors.len());
                self.minors.push((name, tree));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&MinorTree> {
        self.index.get(name).map(|&i| &self.minors[i].1)
    }

    /// Minor names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.minors.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.minors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minors.is_empty()
    }
}

// =============================================================================
// Course lists shared by the major and liberal-arts catalogs
// =============================================================================

/// A course reference: either a bare code or an object with a `Course` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CourseRef {
    Code(String),
    Entry {
        #[serde(rename = "Course")]
        course: String,
    },
}

impl CourseRef {
    fn into_code(self) -> String {
        match self {
            CourseRef::Code(code) => code,
            CourseRef::Entry { course } => course,
        }
    }
}

/// Read a list of course references, skipping malformed elements
fn course_codes(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match CourseRef::deserialize(item) {
            Ok(course) => Some(course.into_code()),
            Err(_) => {
                debug!("Skipping malformed course reference: {}", item);
                None
            }
        })
        .collect()
}

// =============================================================================
// Gen-ed catalog
// =============================================================================

/// `Area(s)` may be a single tag, a list, or missing
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum AreaValue {
    #[default]
    Missing,
    One(String),
    Many(Vec<String>),
}

impl AreaValue {
    fn into_areas(self) -> Vec<String> {
        match self {
            AreaValue::Missing => Vec::new(),
            AreaValue::One(area) if area.is_empty() => Vec::new(),
            AreaValue::One(area) => vec![area],
            AreaValue::Many(areas) => areas,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenEdRow {
    #[serde(rename = "Course")]
    course: String,
    #[serde(rename = "Area(s)", default)]
    areas: AreaValue,
}

/// A course and the gen-ed areas it satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenEdEntry {
    pub code: String,
    pub areas: Vec<String>,
}

/// General-education catalog, grouped as in the source document
#[derive(Debug, Clone, Default)]
pub struct GenEdCatalog {
    groups: Vec<(String, Vec<GenEdEntry>)>,
}

impl GenEdCatalog {
    /// Read `gened."Required Core"` and `gened."Flexible Core"`. Missing groups are empty.
    pub fn from_value(value: &Value) -> Self {
        let root = value.get("gened");
        let groups = GENED_GROUPS
            .iter()
            .map(|group| {
                let entries = root
                    .and_then(|r| r.get(*group))
                    .and_then(Value::as_array)
                    .map(|rows| {
                        rows.iter()
                            .filter_map(|row| match GenEdRow::deserialize(row) {
                                Ok(row) => Some(GenEdEntry {
                                    code: row.course,
                                    areas: row.areas.into_areas(),
                                }),
                                Err(_) => {
                                    debug!("Skipping malformed gen-ed row: {}", row);
                                    None
                                }
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                (group.to_string(), entries)
            })
            .collect();
        Self { groups }
    }

    /// Merge all groups into one course -> areas lookup. A course listed in
    /// more than one group keeps the areas of the last occurrence.
    pub fn merged(&self) -> HashMap<&str, &[String]> {
        self.groups
            .iter()
            .flat_map(|(_, entries)| entries)
            .map(|entry| (entry.code.as_str(), entry.areas.as_slice()))
            .collect()
    }
}

// =============================================================================
// Major catalog
// =============================================================================

/// Core and elective course lists of one major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MajorRecord {
    pub core: Vec<String>,
    pub electives: Vec<String>,
}

/// Major name -> course lists
#[derive(Debug, Clone, Default)]
pub struct MajorCatalog {
    majors: Vec<(String, MajorRecord)>,
}

impl MajorCatalog {
    pub fn from_value(value: &Value) -> Self {
        let majors = value
            .as_object()
            .map(|fields| {
                fields
                    .iter()
                    .map(|(name, record)| {
                        let record = MajorRecord {
                            core: course_codes(record.get("Core")),
                            electives: course_codes(record.get("Electives")),
                        };
                        (name.clone(), record)
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { majors }
    }

    pub fn get(&self, name: &str) -> Option<&MajorRecord> {
        self.majors
            .iter()
            .find(|(major, _)| major == name)
            .map(|(_, record)| record)
    }

    /// Major names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.majors.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }
}

// =============================================================================
// Liberal-arts and interdisciplinary catalogs
// =============================================================================

/// `Lib Art` and `Adv Lib Art` course lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiberalArtsCatalog {
    pub lib_art: Vec<String>,
    pub adv_lib_art: Vec<String>,
}

impl LiberalArtsCatalog {
    pub fn from_value(value: &Value) -> Self {
        Self {
            lib_art: course_codes(value.get("Lib Art")),
            adv_lib_art: course_codes(value.get("Adv Lib Art")),
        }
    }
}

/// Courses explicitly classified as interdisciplinary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterdisciplinaryCatalog {
    codes: HashSet<String>,
}

impl InterdisciplinaryCatalog {
    /// Accepts an object keyed by course code, or a list of course references
    pub fn from_value(value: &Value) -> Self {
        let codes = match value {
            Value::Object(fields) => fields.keys().cloned().collect(),
            Value::Array(_) => course_codes(Some(value)).into_iter().collect(),
            _ => HashSet::new(),
        };
        Self { codes }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for InterdisciplinaryCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
