//! Curriculum Materializer - turns a minor's requirement tree into a sectioned table
//!
//! Core is laid out before Electives. Within each, the direct entries form
//! sub-section "A." and every conditional group forms its own "B." sub-section,
//! in source order. Rows keep encounter order inside a sub-section.

use serde::Serialize;
use tracing::debug;

use super::credit::{resolve_credit, CreditRange, CreditSource};
use super::resolver::FulfillmentResult;
use crate::catalog::{CourseEntry, CourseRecord, MinorTree};
use crate::config::AreaColumns;

/// Top-level minor sections that are materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Core,
    Electives,
}

impl SectionKind {
    /// Traversal order
    pub const ALL: [SectionKind; 2] = [SectionKind::Core, SectionKind::Electives];

    /// Section key in the minor catalog
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Core => "Core",
            SectionKind::Electives => "Electives",
        }
    }

    pub fn direct_label(&self) -> &'static str {
        match self {
            SectionKind::Core => "A. Mandatory Core Courses",
            SectionKind::Electives => "A. General Electives List",
        }
    }

    pub fn group_label(&self, group: &str) -> String {
        match self {
            SectionKind::Core => format!("B. Conditional Core: {}", group),
            SectionKind::Electives => format!("B. Conditional Elective: {}", group),
        }
    }

    /// Title given to a direct entry that has none
    fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Core => "Mandatory",
            SectionKind::Electives => "",
        }
    }
}

/// One course row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub course: String,
    pub title: String,
    pub credit: CreditRange,
    pub credit_source: CreditSource,
    /// One flag per area column, in column order
    pub flags: Vec<bool>,
}

impl TableRow {
    /// "3" or "1-4"
    pub fn credit_display(&self) -> String {
        self.credit.to_string()
    }
}

/// A run of rows sharing one sub-section label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubSection {
    pub label: String,
    pub section: SectionKind,
    pub rows: Vec<TableRow>,
}

/// Materialized fulfillment table for one minor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumTable {
    pub minor: String,
    pub columns: AreaColumns,
    pub sub_sections: Vec<SubSection>,
}

impl CurriculumTable {
    pub fn empty(minor: &str, columns: &AreaColumns) -> Self {
        Self {
            minor: minor.to_string(),
            columns: columns.clone(),
            sub_sections: Vec::new(),
        }
    }

    /// Number of rows across all sub-sections
    pub fn len(&self) -> usize {
        self.sub_sections.iter().map(|s| s.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in display order, each paired with its sub-section
    pub fn rows(&self) -> impl Iterator<Item = (&SubSection, &TableRow)> {
        self.sub_sections
            .iter()
            .flat_map(|s| s.rows.iter().map(move |row| (s, row)))
    }

    /// Flat indices of the last row of every sub-section except the final
    /// one. Sub-sections without rows have no boundary.
    pub fn section_boundaries(&self) -> Vec<usize> {
        let mut boundaries = Vec::new();
        let mut offset = 0;
        for sub_section in self.sub_sections.iter().filter(|s| !s.rows.is_empty()) {
            offset += sub_section.rows.len();
            boundaries.push(offset - 1);
        }
        boundaries.pop();
        boundaries
    }

    /// Flag of `row` for the column named `tag`; `None` for unknown columns
    pub fn flag(&self, row: &TableRow, tag: &str) -> Option<bool> {
        let column = self.columns.iter().position(|c| c == tag)?;
        row.flags.get(column).copied()
    }

    pub fn caption(&self, major: &str) -> String {
        format!(
            "{} Major and {} Minor Course Fulfillment Overview",
            major, self.minor
        )
    }
}

/// Builds `CurriculumTable`s for a fixed column vocabulary
pub struct Materializer<'a> {
    columns: &'a AreaColumns,
    default_credit: CreditRange,
}

impl<'a> Materializer<'a> {
    pub fn new(columns: &'a AreaColumns, default_credit: CreditRange) -> Self {
        Self {
            columns,
            default_credit,
        }
    }

    pub fn materialize(
        &self,
        minor: &str,
        tree: &MinorTree,
        fulfillment: &FulfillmentResult,
    ) -> CurriculumTable {
        let mut table = CurriculumTable::empty(minor, self.columns);

        for kind in SectionKind::ALL {
            let Some(section) = tree.section(kind.key()) else {
                continue;
            };

            let mut direct = SubSection {
                label: kind.direct_label().to_string(),
                section: kind,
                rows: Vec::new(),
            };
            let mut groups = Vec::new();

            for entry in &section.entries {
                match entry {
                    CourseEntry::Direct(record) => {
                        direct
                            .rows
                            .push(self.row(record, kind.default_title(), fulfillment));
                    }
                    CourseEntry::Group { name, courses } => {
                        let mut group = SubSection {
                            label: kind.group_label(name),
                            section: kind,
                            rows: Vec::new(),
                        };
                        self.push_members(courses, fulfillment, &mut group.rows);
                        groups.push(group);
                    }
                }
            }

            table.sub_sections.extend(
                std::iter::once(direct)
                    .chain(groups)
                    .filter(|s| !s.rows.is_empty()),
            );
        }

        debug!(
            "Materialized {} rows in {} sub-sections for minor '{}'",
            table.len(),
            table.sub_sections.len(),
            minor
        );
        table
    }

    fn push_members(
        &self,
        members: &[CourseEntry],
        fulfillment: &FulfillmentResult,
        rows: &mut Vec<TableRow>,
    ) {
        for member in members {
            match member {
                CourseEntry::Direct(record) => rows.push(self.row(record, "", fulfillment)),
                CourseEntry::Group { courses, .. } => self.push_members(courses, fulfillment, rows),
            }
        }
    }

    fn row(
        &self,
        record: &CourseRecord,
        default_title: &str,
        fulfillment: &FulfillmentResult,
    ) -> TableRow {
        let (credit, credit_source) = resolve_credit(record.credit.as_ref(), self.default_credit);
        if credit_source == CreditSource::Default {
            debug!(
                "No credit metadata for {}, using default {}",
                record.code, credit
            );
        }

        let areas = fulfillment.get(&record.code);
        let flags = self
            .columns
            .iter()
            .map(|tag| areas.is_some_and(|a| a.contains(tag)))
            .collect();

        TableRow {
            course: record.code.clone(),
            title: record
                .title
                .clone()
                .unwrap_or_else(|| default_title.to_string()),
            credit,
            credit_source,
            flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::resolver::AreaSet;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn materialize(tree: serde_json::Value, fulfillment: &FulfillmentResult) -> CurriculumTable {
        let columns = AreaColumns::default();
        let tree = MinorTree::from_value(&tree);
        Materializer::new(&columns, CreditRange::default()).materialize("M", &tree, fulfillment)
    }

    fn labels(table: &CurriculumTable) -> Vec<&str> {
        table.sub_sections.iter().map(|s| s.label.as_str()).collect()
    }

    fn courses(table: &CurriculumTable) -> Vec<&str> {
        table.rows().map(|(_, row)| row.course.as_str()).collect()
    }

    #[test]
    fn test_core_before_electives() {
        let table = materialize(
            json!({
                "Electives": [{"Course": "C"}],
                "Core": [{"Course": "A"}, {"Course": "B"}]
            }),
            &FulfillmentResult::default(),
        );

        assert_eq!(courses(&table), vec!["A", "B", "C"]);
        assert_eq!(
            labels(&table),
            vec!["A. Mandatory Core Courses", "A. General Electives List"]
        );
    }

    #[test]
    fn test_direct_entries_precede_groups() {
        let table = materialize(
            json!({
                "Core": [
                    {"Course": "A1"},
                    {"group": "Lab", "courses": [{"Course": "L1"}, {"Course": "L2"}]},
                    {"Course": "A2"},
                    {"group": "Lab", "courses": [{"Course": "L3"}]}
                ],
                "Electives": [
                    {"group": "Theory", "courses": [{"Course": "T1", "Title": "Logic"}]}
                ]
            }),
            &FulfillmentResult::default(),
        );

        assert_eq!(courses(&table), vec!["A1", "A2", "L1", "L2", "L3", "T1"]);
        assert_eq!(
            labels(&table),
            vec![
                "A. Mandatory Core Courses",
                "B. Conditional Core: Lab",
                "B. Conditional Core: Lab",
                "B. Conditional Elective: Theory",
            ]
        );
        assert_eq!(table.section_boundaries(), vec![1, 3, 4]);
    }

    #[test]
    fn test_default_titles() {
        let table = materialize(
            json!({
                "Core": [{"Course": "A1"}, {"group": "G", "courses": [{"Course": "G1"}]}],
                "Electives": [{"Course": "E1"}]
            }),
            &FulfillmentResult::default(),
        );

        let titles: Vec<&str> = table.rows().map(|(_, row)| row.title.as_str()).collect();
        assert_eq!(titles, vec!["Mandatory", "", ""]);
    }

    #[test]
    fn test_credit_resolution() {
        let table = materialize(
            json!({
                "Core": [
                    {"Course": "A1", "Credit": {"Min": 4, "Max": 4}},
                    {"Course": "A2", "Credits (range)": {"Min": 1, "Max": 3}},
                    {"Course": "A3", "Credit": "four"}
                ]
            }),
            &FulfillmentResult::default(),
        );

        let credits: Vec<String> = table.rows().map(|(_, row)| row.credit_display()).collect();
        assert_eq!(credits, vec!["4", "1-3", "3"]);

        let sources: Vec<&CreditSource> = table.rows().map(|(_, row)| &row.credit_source).collect();
        assert_eq!(sources[0], &CreditSource::Explicit);
        assert_eq!(sources[2], &CreditSource::Default);
    }

    #[test]
    fn test_fractional_credits_are_displayed() {
        let table = materialize(
            json!({
                "Core": [
                    {"Course": "A1", "Credit": {"Min": 0.5, "Max": 1}},
                    {"Course": "A2", "Credit": {"Min": 3.0, "Max": 4.0}},
                    {"Course": "A3", "Credit": {"Min": 4, "Max": 3}}
                ]
            }),
            &FulfillmentResult::default(),
        );

        let credits: Vec<String> = table.rows().map(|(_, row)| row.credit_display()).collect();
        assert_eq!(credits, vec!["0.5-1", "3-4", "3"]);

        let sources: Vec<&CreditSource> = table.rows().map(|(_, row)| &row.credit_source).collect();
        assert_eq!(sources[1], &CreditSource::Explicit);
        assert_eq!(sources[2], &CreditSource::Default);
    }

    #[test]
    fn test_flags_follow_columns() {
        let mut fulfillment = FulfillmentResult::default();
        fulfillment.push(
            "A1".to_string(),
            ["EC", "Major_Core", "Other"].into_iter().collect::<AreaSet>(),
        );

        let table = materialize(
            json!({"Core": [{"Course": "A1"}, {"Course": "Z9"}]}),
            &fulfillment,
        );
        let rows: Vec<&TableRow> = table.rows().map(|(_, row)| row).collect();

        assert_eq!(rows[0].flags.len(), 13);
        assert_eq!(table.flag(rows[0], "EC"), Some(true));
        assert_eq!(table.flag(rows[0], "Major_Core"), Some(true));
        assert_eq!(table.flag(rows[0], "MQR"), Some(false));
        assert_eq!(table.flag(rows[0], "Other"), None);
        assert!(rows[1].flags.iter().all(|flag| !flag));
    }

    #[test]
    fn test_empty_tree_gives_empty_table() {
        let table = materialize(json!({"Core": [], "Electives": []}), &FulfillmentResult::default());
        assert!(table.is_empty());
        assert!(table.section_boundaries().is_empty());

        let table = materialize(json!({"Capstone": [{"Course": "X"}]}), &FulfillmentResult::default());
        assert!(table.is_empty());
    }

    #[test]
    fn test_boundaries_skip_rowless_sub_sections() {
        let mut table = materialize(
            json!({"Core": [{"Course": "A"}], "Electives": [{"Course": "B"}, {"Course": "C"}]}),
            &FulfillmentResult::default(),
        );
        table.sub_sections.insert(
            0,
            SubSection {
                label: "A. Mandatory Core Courses".to_string(),
                section: SectionKind::Core,
                rows: Vec::new(),
            },
        );

        assert_eq!(table.section_boundaries(), vec![0]);
    }

    #[test]
    fn test_single_section_has_no_boundary() {
        let table = materialize(
            json!({"Core": [{"Course": "A"}, {"Course": "B"}]}),
            &FulfillmentResult::default(),
        );
        assert!(table.section_boundaries().is_empty());
        assert_eq!(table.caption("Physics"), "Physics Major and M Minor Course Fulfillment Overview");
    }
}
