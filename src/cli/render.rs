//! Text rendering of analysis results

use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style,
    },
    Table, Tabled,
};

use crate::engine::{CurriculumTable, FulfillmentResult};

pub const UNPROCESSABLE_NOTICE: &str =
    "The selected minor curriculum data structure could not be processed into the table format.";

pub const LEGEND: &str = "\
Legend:
  Major_Core   Fulfills a Major Core requirement.
  Major_Elec   Fulfills a Major Elective requirement.
  Lib Art      Counts as Liberal Arts.
  Adv Lib Art  Counts as Advanced Liberal Arts.
  ID           Interdisciplinary course.";

/// Leading columns before the area flags
const ROW_HEADERS: [&str; 4] = ["Sub-Section", "Course", "Name", "Credit"];

pub fn no_courses_notice(minor: &str) -> String {
    format!("No course data found for minor: {}", minor)
}

pub fn unknown_minor_notice(minor: &str) -> String {
    format!(
        "Minor '{}' is not in the minor catalog. Run `degree-audit list minors` for the available names.",
        minor
    )
}

/// Render the curriculum table with its caption.
///
/// The sub-section label is printed on the first row of each sub-section
/// only, so section changes read as group transitions.
pub fn render_table(table: &CurriculumTable, major: &str, marker: &str) -> String {
    let mut builder = Builder::default();

    let mut header: Vec<String> = ROW_HEADERS.iter().map(|h| h.to_string()).collect();
    header.extend(table.columns.iter().map(str::to_string));
    builder.push_record(header);

    for sub_section in &table.sub_sections {
        for (i, row) in sub_section.rows.iter().enumerate() {
            let label = if i == 0 {
                sub_section.label.clone()
            } else {
                String::new()
            };

            let mut record = vec![
                label,
                row.course.clone(),
                row.title.clone(),
                row.credit_display(),
            ];
            record.extend(row.flags.iter().map(|&flag| {
                if flag {
                    marker.to_string()
                } else {
                    String::new()
                }
            }));
            builder.push_record(record);
        }
    }

    let grid = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Columns::new(ROW_HEADERS.len()..)).with(Alignment::center()))
        .to_string();

    format!("{}\n{}", table.caption(major), grid)
}

#[derive(Tabled)]
struct FulfillmentRow {
    #[tabled(rename = "Courses in Minor")]
    course: String,
    #[tabled(rename = "Fulfilled Areas")]
    areas: String,
}

/// Render the per-course fulfillment list
pub fn render_fulfillment(result: &FulfillmentResult) -> String {
    let rows: Vec<FulfillmentRow> = result
        .entries()
        .iter()
        .map(|entry| FulfillmentRow {
            course: entry.course.clone(),
            areas: entry.areas.iter().collect::<Vec<_>>().join(", "),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MinorTree;
    use crate::config::AreaColumns;
    use crate::engine::{AreaSet, CreditRange, Materializer};
    use serde_json::json;

    fn table() -> CurriculumTable {
        let columns = AreaColumns::new(vec!["EC".to_string(), "Major_Core".to_string()]).unwrap();
        let mut fulfillment = FulfillmentResult::default();
        fulfillment.push("X1".to_string(), ["Major_Core"].into_iter().collect::<AreaSet>());

        let tree = MinorTree::from_value(&json!({
            "Core": [
                {"Course": "X1", "Title": "Intro"},
                {"Course": "X2", "Title": "Methods"},
                {"group": "Pick one", "courses": [{"Course": "Y1", "Credit": {"Min": 1, "Max": 4}}]}
            ]
        }));
        Materializer::new(&columns, CreditRange::default()).materialize("Stats", &tree, &fulfillment)
    }

    #[test]
    fn test_render_table_contents() {
        let output = render_table(&table(), "Biology", "X");

        assert!(output.starts_with("Biology Major and Stats Minor Course Fulfillment Overview\n"));
        assert!(output.contains("Sub-Section"));
        assert!(output.contains("Major_Core"));
        assert!(output.contains("A. Mandatory Core Courses"));
        assert!(output.contains("B. Conditional Core: Pick one"));
        assert!(output.contains("1-4"));
    }

    #[test]
    fn test_render_table_labels_first_row_only() {
        let output = render_table(&table(), "Biology", "X");
        assert_eq!(output.matches("A. Mandatory Core Courses").count(), 1);
    }

    #[test]
    fn test_render_table_uses_marker() {
        let output = render_table(&table(), "Biology", "✓");
        assert_eq!(output.matches('✓').count(), 1);
    }

    #[test]
    fn test_render_fulfillment() {
        let mut result = FulfillmentResult::default();
        result.push("PHIL200".to_string(), ["IS", "Lib Art"].into_iter().collect::<AreaSet>());
        result.push("ZZZ999".to_string(), AreaSet::new());

        let output = render_fulfillment(&result);
        assert!(output.contains("Courses in Minor"));
        assert!(output.contains("IS, Lib Art"));
        assert!(output.contains("ZZZ999"));
    }
}
