//! Fulfillment Resolver - which requirement areas a course satisfies
//!
//! Every check is independent and additive: gen-ed areas, major core/elective
//! membership, liberal-arts lists, and the interdisciplinary catalog or
//! naming convention. Course codes are compared exactly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::catalog::{CatalogStore, InterdisciplinaryCatalog};
use crate::config::types::{
    AreaColumns, ADV_LIB_ART, INTERDISCIPLINARY, LIB_ART, MAJOR_CORE, MAJOR_ELEC,
};

/// Codes ending in digits followed by "ID" are interdisciplinary by convention
static INTERDISCIPLINARY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+ID$").expect("interdisciplinary pattern is valid"));

pub fn is_interdisciplinary_code(code: &str) -> bool {
    INTERDISCIPLINARY_CODE.is_match(code)
}

/// Requirement areas satisfied by one course, in the order they were found.
/// Inserting a tag that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AreaSet(Vec<String>);

impl AreaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: &str) {
        if !self.contains(tag) {
            self.0.push(tag.to_string());
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
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
}

impl<'a> FromIterator<&'a str> for AreaSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = AreaSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// One course of the extracted list with its resolved areas
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseFulfillment {
    pub course: String,
    pub areas: AreaSet,
}

/// Resolved areas for every extracted course.
///
/// `entries` follows extraction order and keeps duplicates; `get` answers
/// with the last entry for a code.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FulfillmentResult {
    entries: Vec<CourseFulfillment>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FulfillmentResult {
    pub fn push(&mut self, course: String, areas: AreaSet) {
        self.index.insert(course.clone(), self.entries.len());
        self.entries.push(CourseFulfillment { course, areas });
    }

    pub fn get(&self, course: &str) -> Option<&AreaSet> {
        self.index.get(course).map(|&i| &self.entries[i].areas)
    }

    pub fn entries(&self) -> &[CourseFulfillment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lookup tables for one analysis (one major selection)
pub struct FulfillmentResolver<'a> {
    gened: HashMap<&'a str, &'a [String]>,
    major_core: HashSet<&'a str>,
    major_electives: HashSet<&'a str>,
    lib_art: HashSet<&'a str>,
    adv_lib_art: HashSet<&'a str>,
    interdisciplinary: &'a InterdisciplinaryCatalog,
    columns: &'a AreaColumns,
    has_major: bool,
}

impl<'a> FulfillmentResolver<'a> {
    /// Build the lookups for `major`. An unknown major contributes no
    /// Major_Core/Major_Elec tags.
    pub fn new(store: &'a CatalogStore, major: &str, columns: &'a AreaColumns) -> Self {
        let record = store.majors.get(major);
        if record.is_none() {
            warn!("Major '{}' not found in catalog", major);
        }

        let codes = |list: &'a [String]| list.iter().map(String::as_str).collect::<HashSet<_>>();

        Self {
            gened: store.gened.merged(),
            major_core: record.map(|r| codes(&r.core)).unwrap_or_default(),
            major_electives: record.map(|r| codes(&r.electives)).unwrap_or_default(),
            lib_art: codes(&store.liberal_arts.lib_art),
            adv_lib_art: codes(&store.liberal_arts.adv_lib_art),
            interdisciplinary: &store.interdisciplinary,
            columns,
            has_major: record.is_some(),
        }
    }

    pub fn has_major(&self) -> bool {
        self.has_major
    }

    /// Areas satisfied by `course`
    pub fn resolve(&self, course: &str) -> AreaSet {
        let mut areas = AreaSet::new();

        if let Some(gened_areas) = self.gened.get(course) {
            for area in gened_areas.iter() {
                areas.insert(area);
            }
        }
        if self.major_core.contains(course) {
            areas.insert(MAJOR_CORE);
        }
        if self.major_electives.contains(course) {
            areas.insert(MAJOR_ELEC);
        }
        if self.lib_art.contains(course) {
            areas.insert(LIB_ART);
        }
        if self.adv_lib_art.contains(course) {
            areas.insert(LIB_ART);
            areas.insert(ADV_LIB_ART);
        }
        if self.interdisciplinary.contains(course) || is_interdisciplinary_code(course) {
            areas.insert(INTERDISCIPLINARY);
        }

        debug!("Resolved {} -> {:?}", course, areas);
        areas
    }

    /// Resolve every course of an extracted list
    pub fn resolve_all(&self, courses: &[String]) -> FulfillmentResult {
        let mut result = FulfillmentResult::default();
        for course in courses {
            result.push(course.clone(), self.resolve(course));
        }
        result
    }

    /// Tags in `areas` that have no column and will not be displayed
    pub fn unknown_tags<'b>(&self, areas: &'b AreaSet) -> Vec<&'b str> {
        areas.iter().filter(|tag| !self.columns.contains(tag)).collect()
    }
}
