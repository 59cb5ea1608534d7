//! Course Extractor - flattens a minor's requirement tree into course codes

use tracing::debug;

use crate::catalog::{CourseEntry, MinorCatalog, MinorTree};

/// Course codes of `minor`, in section order.
///
/// Duplicates are kept. An unknown minor yields an empty list, which callers
/// report as "no data available".
pub fn extract_courses(minor: &str, catalog: &MinorCatalog) -> Vec<String> {
    match catalog.get(minor) {
        Some(tree) => extract_tree_courses(tree),
        None => {
            debug!("Minor '{}' not found in catalog", minor);
            Vec::new()
        }
    }
}

/// Course codes of every section of `tree`, in document order
pub fn extract_tree_courses(tree: &MinorTree) -> Vec<String> {
    let mut courses = Vec::new();
    for section in &tree.sections {
        for entry in &section.entries {
            collect(entry, &mut courses);
        }
    }
    courses
}

fn collect(entry: &CourseEntry, courses: &mut Vec<String>) {
    match entry {
        CourseEntry::Direct(record) => courses.push(record.code.clone()),
        CourseEntry::Group { courses: members, .. } => {
            for member in members {
                collect(member, courses);
            }
        }
    }
}
