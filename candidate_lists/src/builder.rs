pub use crate::config::*;
use crate::{clean_label, full_name, Candidate, CandidateList};

use log::{debug, warn};

// Position of each read column in the header.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct ColumnIndices {
    position: usize,
    first_names: usize,
    last_name: usize,
    field_of_study: usize,
}

/// A builder that assembles a candidate list row by row.
///
/// The header is checked once at construction, so a table without one of
/// the read columns never yields a partial list.
///
/// ```
/// use candidate_lists::builder::Builder;
/// use candidate_lists::{ConvertRules, ListErrors};
///
/// let header = [
///     "Listenplatz / Position",
///     "Vorname(n) / First name(s)",
///     "Nachname / Last name",
///     "Studienfach / Degree programme",
/// ];
/// let mut builder = Builder::new("Liste A,,", &header, &ConvertRules::default())?;
/// builder.add_row(3, &["1", " Anna ", "Müller", "Physik"]);
/// let list = builder.build();
///
/// assert_eq!(list.label, vec!["Liste A".to_string()]);
/// assert_eq!(list.candidates[0].full_name, "Anna Müller");
/// # Ok::<(), ListErrors>(())
/// ```
pub struct Builder {
    _rules: ConvertRules,
    _indices: ColumnIndices,
    _label: String,
    _candidates: Vec<Candidate>,
}

impl Builder {
    /// Starts a new list from the raw label line and the header row.
    pub fn new<S: AsRef<str>>(
        label_line: &str,
        header: &[S],
        rules: &ConvertRules,
    ) -> Result<Builder, ListErrors> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.as_ref() == name)
                .ok_or_else(|| ListErrors::MissingColumn(name.to_string()))
        };
        let columns = &rules.columns;
        // The position column is checked first, it names the failure in most
        // malformed files.
        let indices = ColumnIndices {
            position: find(columns.position.as_str())?,
            first_names: find(columns.first_names.as_str())?,
            last_name: find(columns.last_name.as_str())?,
            field_of_study: find(columns.field_of_study.as_str())?,
        };
        debug!("builder: column indices {:?}", indices);

        Ok(Builder {
            _rules: rules.clone(),
            _indices: indices,
            _label: clean_label(label_line),
            _candidates: Vec::new(),
        })
    }

    /// Adds one data row.
    ///
    /// `lineno` is only used for diagnostics. Returns false if the row was
    /// dropped under the `Skip` policy.
    pub fn add_row<S: AsRef<str>>(&mut self, lineno: usize, fields: &[S]) -> bool {
        let idx = self._indices;
        let wanted = [
            idx.position,
            idx.first_names,
            idx.last_name,
            idx.field_of_study,
        ];
        let is_short = wanted.iter().any(|i| *i >= fields.len());
        if is_short {
            match self._rules.ragged_rows {
                RaggedRowPolicy::Skip => {
                    warn!(
                        "Dropping line {}: {} fields, missing some of the expected columns",
                        lineno,
                        fields.len()
                    );
                    return false;
                }
                RaggedRowPolicy::EmptyFill => {
                    debug!(
                        "Line {} has only {} fields, missing values are read as empty",
                        lineno,
                        fields.len()
                    );
                }
            }
        }

        let candidate = Candidate {
            position: field(fields, idx.position).to_string(),
            full_name: full_name(field(fields, idx.first_names), field(fields, idx.last_name)),
            field_of_study: field(fields, idx.field_of_study).to_string(),
        };
        self._candidates.push(candidate);
        true
    }

    pub fn build(self) -> CandidateList {
        CandidateList {
            label: vec![self._label],
            candidates: self._candidates,
        }
    }
}

fn field<S: AsRef<str>>(fields: &[S], idx: usize) -> &str {
    fields.get(idx).map_or("", |s| s.as_ref())
}
