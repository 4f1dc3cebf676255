//! Chapter event-list document checks
//!
//! An event list is a JSON object with a fixed set of fields:
//!
//! ```json
//! {
//!   "基础信息": { "标题": "...", "版本": "..." },
//!   "详细版": [ ... ],
//!   "简化版": [ ... ],
//!   "极简版": [ ... ],
//!   "绘图提示词": "..."
//! }
//! ```
//!
//! Missing fields and wrong types are errors. Item counts outside the
//! recommended ranges for the condensed lists are warnings only.

use std::fmt;
use std::ops::RangeInclusive;

use serde_json::{Map, Value};

use crate::error::Result;

/// Basic information object
pub const BASIC_INFO: &str = "基础信息";
/// Full event list
pub const DETAILED: &str = "详细版";
/// Condensed event list
pub const SIMPLIFIED: &str = "简化版";
/// Minimal event list
pub const MINIMAL: &str = "极简版";
/// Illustration prompt
pub const DRAWING_PROMPT: &str = "绘图提示词";

/// Fields required inside the basic information object
pub const BASIC_INFO_FIELDS: [&str; 2] = ["标题", "版本"];

const SIMPLIFIED_RANGE: RangeInclusive<usize> = 3..=5;
const MINIMAL_RANGE: RangeInclusive<usize> = 2..=4;

/// JSON kind expected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON object
    Object,
    /// JSON array
    Array,
    /// JSON string
    String,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Object => value.is_object(),
            FieldKind::Array => value.is_array(),
            FieldKind::String => value.is_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Object => write!(f, "object"),
            FieldKind::Array => write!(f, "array"),
            FieldKind::String => write!(f, "string"),
        }
    }
}

const REQUIRED_FIELDS: [(&str, FieldKind); 5] = [
    (BASIC_INFO, FieldKind::Object),
    (DETAILED, FieldKind::Array),
    (SIMPLIFIED, FieldKind::Array),
    (MINIMAL, FieldKind::Array),
    (DRAWING_PROMPT, FieldKind::String),
];

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// Top-level field absent
    MissingField(&'static str),
    /// Field present with the wrong JSON kind
    WrongType {
        /// Field name
        field: &'static str,
        /// Expected kind
        expected: FieldKind,
    },
    /// Field absent from the basic information object
    MissingInfoField(&'static str),
    /// List length outside the recommended range
    CountOutOfRange {
        /// Field name
        field: &'static str,
        /// Actual item count
        count: usize,
        /// Recommended minimum
        min: usize,
        /// Recommended maximum
        max: usize,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingField(field) => write!(f, "missing required field: {field}"),
            Issue::WrongType { field, expected } => {
                write!(f, "field {field} should be of type {expected}")
            }
            Issue::MissingInfoField(field) => {
                write!(f, "missing required field in {BASIC_INFO}: {field}")
            }
            Issue::CountOutOfRange {
                field,
                count,
                min,
                max,
            } => write!(
                f,
                "{field} has {count} events, {min}-{max} recommended"
            ),
        }
    }
}

/// Outcome of checking one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListReport {
    /// Problems that make the document invalid
    pub errors: Vec<Issue>,
    /// Advisory findings
    pub warnings: Vec<Issue>,
    /// Number of detailed events, when that list is present
    pub detailed_events: Option<usize>,
    /// Number of simplified events, when that list is present
    pub simplified_events: Option<usize>,
    /// Number of minimal events, when that list is present
    pub minimal_events: Option<usize>,
}

impl EventListReport {
    /// True when no errors were found
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse and check an event-list document
pub fn check_str(json: &str) -> Result<EventListReport> {
    let value: Value = serde_json::from_str(json)?;
    Ok(check_value(&value))
}

/// Check an already-parsed event-list document
pub fn check_value(value: &Value) -> EventListReport {
    let mut report = EventListReport::default();

    let Some(object) = value.as_object() else {
        report.errors.extend(
            REQUIRED_FIELDS
                .iter()
                .map(|&(field, _)| Issue::MissingField(field)),
        );
        return report;
    };

    for (field, kind) in REQUIRED_FIELDS {
        match object.get(field) {
            None => report.errors.push(Issue::MissingField(field)),
            Some(v) if !kind.matches(v) => report.errors.push(Issue::WrongType {
                field,
                expected: kind,
            }),
            Some(_) => {}
        }
    }

    if let Some(info) = object.get(BASIC_INFO).and_then(Value::as_object) {
        for field in BASIC_INFO_FIELDS {
            if !info.contains_key(field) {
                report.errors.push(Issue::MissingInfoField(field));
            }
        }
    }

    report.detailed_events = array_len(object, DETAILED);
    report.simplified_events = array_len(object, SIMPLIFIED);
    report.minimal_events = array_len(object, MINIMAL);

    for (field, count, range) in [
        (SIMPLIFIED, report.simplified_events, SIMPLIFIED_RANGE),
        (MINIMAL, report.minimal_events, MINIMAL_RANGE),
    ] {
        if let Some(count) = count {
            if !range.contains(&count) {
                report.warnings.push(Issue::CountOutOfRange {
                    field,
                    count,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
    }

    report
}

fn array_len(object: &Map<String, Value>, field: &str) -> Option<usize> {
    object.get(field).and_then(Value::as_array).map(Vec::len)
}
