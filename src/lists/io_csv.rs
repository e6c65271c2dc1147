// Reading one candidate list from a CSV file.
//
// The first line holds the name of the list. The table, with its header,
// starts on the second line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use candidate_lists::{convert_records, CandidateList, ConvertRules};
use log::debug;
use snafu::prelude::*;

use crate::lists::*;

pub fn read_candidate_list(path: &Path, rules: &ConvertRules) -> ListResult<CandidateList> {
    let p = path.display().to_string();
    let file = File::open(path).context(OpeningInputSnafu { path: p.clone() })?;
    let mut reader = BufReader::new(file);

    let mut label_line = String::new();
    reader
        .read_line(&mut label_line)
        .context(ReadingLabelSnafu { path: p.clone() })?;
    debug!("read_candidate_list: label line {:?}", label_line);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let header: Vec<String> = rdr
        .headers()
        .context(ParsingCsvSnafu {
            path: p.clone(),
            lineno: 2_usize,
        })?
        .iter()
        .map(|s| s.to_string())
        .collect();
    debug!("read_candidate_list: header {:?}", header);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, record_r) in rdr.records().enumerate() {
        // The csv reader does not see the label line.
        let record = record_r.context(ParsingCsvSnafu {
            path: p.clone(),
            lineno: idx + 3,
        })?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    convert_records(&label_line, &header, &rows, rules).context(FormatSnafu { path: p })
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_lists::ListErrors;
    use std::fs;
    use tempfile::tempdir;

    fn read_str(content: &str) -> ListResult<CandidateList> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("liste.csv");
        fs::write(&path, content).unwrap();
        read_candidate_list(&path, &ConvertRules::default())
    }

    const HEADER: &str = "Listenplatz / Position,Vorname(n) / First name(s),Nachname / Last name,Studienfach / Degree programme";

    #[test]
    fn reads_label_and_rows() {
        let content = format!(
            "Liste A,,,\r\n{}\r\n1, Anna ,Müller,Physik\r\n2,Ben,Roth,\"Jura, Staatsexamen\"\r\n",
            HEADER
        );
        let list = read_str(&content).unwrap();
        assert_eq!(list.label, vec!["Liste A".to_string()]);
        assert_eq!(list.candidates.len(), 2);
        assert_eq!(list.candidates[0].full_name, "Anna Müller");
        assert_eq!(list.candidates[1].field_of_study, "Jura, Staatsexamen");
    }

    #[test]
    fn quoted_label_is_kept_raw() {
        let content = format!("\"Liste \"\"Grün\"\"\",,\n{}\n", HEADER);
        let list = read_str(&content).unwrap();
        assert_eq!(list.label, vec!["\"Liste \"\"Grün\"\"\"".to_string()]);
    }

    #[test]
    fn missing_required_column() {
        let content = "Liste B\nNummer,Vorname(n) / First name(s)\n1,Anna\n";
        let res = read_str(content);
        assert!(matches!(res, Err(ListError::Format { .. })));
    }

    #[test]
    fn missing_name_column() {
        let content = "Liste\nListenplatz / Position,Vorname(n) / First name(s),Studienfach / Degree programme\n1,Anna,Physik\n";
        match read_str(content) {
            Err(ListError::Format { source, .. }) => assert_eq!(
                source,
                ListErrors::MissingColumn("Nachname / Last name".to_string())
            ),
            x => panic!("expected a format error, got {:?}", x),
        }
    }

    #[test]
    fn empty_file() {
        let res = read_str("");
        assert!(matches!(res, Err(ListError::Format { .. })));
    }

    #[test]
    fn ragged_rows() {
        let content = format!("Liste C\n{}\n1,Anna\n2,Ben,Roth,Jura,extra,more\n", HEADER);
        let list = read_str(&content).unwrap();
        assert_eq!(list.candidates.len(), 2);
        assert_eq!(list.candidates[0].full_name, "Anna ");
        assert_eq!(list.candidates[0].field_of_study, "");
        assert_eq!(list.candidates[1].field_of_study, "Jura");
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let res = read_candidate_list(&dir.path().join("nope.csv"), &ConvertRules::default());
        assert!(matches!(res, Err(ListError::OpeningInput { .. })));
    }
}
