#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn minors() -> Value {
    json!({
        "Data Science": {
            "Core": [
                {"Course": "CSCI101", "Title": "Intro to Programming", "Credit": {"Min": 4, "Max": 4}},
                {"Course": "STAT200"},
                {"group": "Choose one methods course", "courses": [
                    {"Course": "MATH210", "Title": "Linear Algebra"},
                    {"Course": "DATA150ID", "Title": "Data and Society", "credit hours": {"Min": 1, "Max": 3}}
                ]}
            ],
            "Electives": [
                {"Course": "PHIL220", "Title": "Ethics of Information"},
                {"Choose 1": [{"Course": "ARTS310", "Title": "Visualization"}, {"Course": "HIST330"}]}
            ]
        },
        "Empty Minor": {"Core": [], "Electives": []},
        "Capstone Only": {"Capstone": [{"Course": "CAP499"}]}
    })
}

pub fn gened() -> Value {
    json!({
        "gened": {
            "Required Core": [
                {"Course": "CSCI101", "Area(s)": ["MQR"]},
                {"Course": "PHIL220", "Area(s)": "EC"}
            ],
            "Flexible Core": [
                {"Course": "HIST330", "Area(s)": ["WCGI", "USED"]},
                {"Course": "stat200", "Area(s)": ["MQR"]}
            ]
        }
    })
}

pub fn majors() -> Value {
    json!({
        "Computer Science": {
            "Core": [{"Course": "CSCI101"}, {"Course": "MATH210"}],
            "Electives": [{"Course": "STAT200"}]
        },
        "History": {
            "Core": [{"Course": "HIST330"}],
            "Electives": []
        }
    })
}

pub fn liberal_arts() -> Value {
    json!({
        "Lib Art": [{"Course": "PHIL220"}],
        "Adv Lib Art": [{"Course": "ARTS310"}, {"Course": "HIST330"}]
    })
}

pub fn interdisciplinary() -> Value {
    json!({"ARTS310": {"Title": "Visualization"}})
}

/// Write the five catalogs under their default file names
pub fn write_catalogs(dir: &Path) {
    let files = [
        ("minors_v3.json", minors()),
        ("gened_v2.json", gened()),
        ("all-majors.json", majors()),
        ("liberal_arts_courses.json", liberal_arts()),
        ("ID.json", interdisciplinary()),
    ];
    for (name, document) in files {
        fs::write(dir.join(name), serde_json::to_string_pretty(&document).unwrap()).unwrap();
    }
}

pub fn catalog_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_catalogs(dir.path());
    dir
}
