// ********* Input configuration ***********

use std::error::Error;
use std::fmt::Display;

/// The names of the header columns that are read from a candidate list.
///
/// All of them must be present in the header. Any other column in the
/// source table is ignored.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ColumnNames {
    /// The position of the candidate on the list.
    pub position: String,
    pub first_names: String,
    pub last_name: String,
    pub field_of_study: String,
}

impl ColumnNames {
    pub const POSITION: &'static str = "Listenplatz / Position";
    pub const FIRST_NAMES: &'static str = "Vorname(n) / First name(s)";
    pub const LAST_NAME: &'static str = "Nachname / Last name";
    pub const FIELD_OF_STUDY: &'static str = "Studienfach / Degree programme";

    /// The bilingual column names used by the election committee exports.
    pub fn default_columns() -> ColumnNames {
        ColumnNames {
            position: ColumnNames::POSITION.to_string(),
            first_names: ColumnNames::FIRST_NAMES.to_string(),
            last_name: ColumnNames::LAST_NAME.to_string(),
            field_of_study: ColumnNames::FIELD_OF_STUDY.to_string(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames::default_columns()
    }
}

/// What to do with a data row that has fewer fields than the header.
///
/// Rows with more fields than the header are always accepted, the extra
/// fields are dropped.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum RaggedRowPolicy {
    /// Missing fields are read as empty strings.
    EmptyFill,
    /// The row is dropped if any of the read columns is missing from it.
    Skip,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ConvertRules {
    pub columns: ColumnNames,
    pub ragged_rows: RaggedRowPolicy,
}

impl Default for ConvertRules {
    fn default() -> Self {
        ConvertRules {
            columns: ColumnNames::default_columns(),
            ragged_rows: RaggedRowPolicy::EmptyFill,
        }
    }
}

/// Errors that prevent a table from being turned into a candidate list.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ListErrors {
    /// The header does not contain the given (required) column.
    MissingColumn(String),
}

impl Error for ListErrors {}

impl Display for ListErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListErrors::MissingColumn(name) => {
                write!(f, "Incorrect csv format, could not find '{}'", name)
            }
        }
    }
}
