mod config;
use log::debug;

use serde::Serialize;

pub use crate::config::*;

pub mod builder;

use crate::builder::Builder;

// ********* Data model ***********

/// One candidate, as read from one row of a list.
///
/// The field names of the JSON output are the ones expected by the ballot
/// layout tooling (`number`, `name`, `subjects`).
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Candidate {
    /// The position on the list. It is kept as text because some lists
    /// use placeholders instead of numbers.
    #[serde(rename = "number")]
    pub position: String,
    #[serde(rename = "name")]
    pub full_name: String,
    #[serde(rename = "subjects")]
    pub field_of_study: String,
}

/// A complete list, one per source file.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct CandidateList {
    // Always exactly one element. The ballot renderer reading the document
    // accepts one or two lines here.
    #[serde(rename = "listname")]
    pub label: Vec<String>,
    #[serde(rename = "people")]
    pub candidates: Vec<Candidate>,
}

impl CandidateList {
    /// The label of the list.
    pub fn name(&self) -> &str {
        self.label.first().map_or("", |s| s.as_str())
    }
}

// ********* Conversion ***********

/// Cleans up the first line of a list file into the label of the list.
///
/// The line ending, trailing commas (left over by spreadsheet exports of a
/// one-cell row) and surrounding whitespace are removed.
pub fn clean_label(line: &str) -> String {
    line.trim_start_matches('\u{feff}')
        .trim()
        .trim_end_matches(',')
        .trim()
        .to_string()
}

/// Joins the first name(s) and the last name with a single space.
/// Both sides are trimmed independently.
pub fn full_name(first_names: &str, last_name: &str) -> String {
    format!("{} {}", first_names.trim(), last_name.trim())
}

/// Converts a whole table into a candidate list.
///
/// Arguments:
/// * `label_line` the first line of the source, before the table
/// * `header` the header row of the table
/// * `rows` the data rows, in order
/// * `rules` the column names and the policy for short rows
///
/// Fails without any partial result if the header misses one of the read
/// columns.
pub fn convert_records<S: AsRef<str>>(
    label_line: &str,
    header: &[S],
    rows: &[Vec<S>],
    rules: &ConvertRules,
) -> Result<CandidateList, ListErrors> {
    let mut builder = Builder::new(label_line, header, rules)?;
    // The label line and the header come first.
    for (idx, row) in rows.iter().enumerate() {
        builder.add_row(idx + 3, row.as_slice());
    }
    let res = builder.build();
    debug!(
        "convert_records: list {:?} with {} candidates",
        res.name(),
        res.candidates.len()
    );
    Ok(res)
}
