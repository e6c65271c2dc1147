use log::{debug, error, info, warn};

use candidate_lists::*;
use snafu::{prelude::*, Snafu};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

pub mod io_common;
pub mod io_csv;
pub mod log_level;

use crate::lists::io_common::{list_input_files, simplify_file_name};
use crate::lists::io_csv::read_candidate_list;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ListError {
    #[snafu(display("Error reading input folder {path}"))]
    ReadingDirectory {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading an entry of {path}"))]
    ReadingEntry {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading the list name (first line) of {path}"))]
    ReadingLabel {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing {path} around line {lineno}"))]
    ParsingCsv {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("{path}: {source}"))]
    Format { source: ListErrors, path: String },
    #[snafu(display("Error creating output file {path}"))]
    CreatingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing JSON to {path}"))]
    WritingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error reading reference file {path}"))]
    ReadingReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing reference file {path}"))]
    ParsingReference {
        source: serde_json::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ListResult<T> = Result<T, ListError>;

/// Options of one conversion run.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RunOptions {
    /// Process the files sorted by name instead of in directory order.
    pub sort: bool,
    pub pretty: bool,
    /// A JSON file that the output must match.
    pub reference: Option<PathBuf>,
    pub rules: ConvertRules,
}

/// What happened during a run.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of files turned into a list.
    pub converted: usize,
    /// Files that were rejected because of their format. They appear as
    /// `null` in the output.
    pub failed: Vec<PathBuf>,
    /// Hidden files and entries that are not regular files.
    pub skipped: usize,
}

/// Converts all the files of a folder, in order.
///
/// A file with a wrong format takes a `None` slot, any other error stops
/// the conversion.
pub fn convert_folder(
    input_folder: &Path,
    options: &RunOptions,
) -> ListResult<(Vec<Option<CandidateList>>, RunSummary)> {
    let (paths, skipped) = list_input_files(input_folder, options.sort)?;
    let mut summary = RunSummary {
        skipped,
        ..RunSummary::default()
    };
    let mut res: Vec<Option<CandidateList>> = Vec::new();
    for path in paths {
        debug!("Currently processing file {}", path.display());
        match read_candidate_list(&path, &options.rules) {
            Ok(list) => {
                debug!("finished with {} and generated {:?}", path.display(), list);
                summary.converted += 1;
                res.push(Some(list));
            }
            Err(ListError::Format { source, path: p }) => {
                error!("{}: {}", p, source);
                summary.failed.push(path);
                res.push(None);
            }
            Err(e) => return Err(e),
        }
    }
    Ok((res, summary))
}

/// Writes the lists as one JSON document. Failed lists are written as `null`.
///
/// Non-ASCII characters are written as they are.
pub fn write_json(
    output_path: &Path,
    lists: &[Option<CandidateList>],
    pretty: bool,
) -> ListResult<()> {
    let path = output_path.display().to_string();
    let file = File::create(output_path).context(CreatingOutputSnafu { path: path.clone() })?;
    let mut writer = BufWriter::new(file);
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, lists)
    } else {
        serde_json::to_writer(&mut writer, lists)
    };
    written.context(WritingJsonSnafu { path: path.clone() })?;
    writer.flush().context(CreatingOutputSnafu { path })?;
    Ok(())
}

fn read_reference(path: &Path) -> ListResult<JSValue> {
    let p = path.display().to_string();
    let contents = fs::read_to_string(path).context(ReadingReferenceSnafu { path: p.clone() })?;
    let js: JSValue =
        serde_json::from_str(contents.as_str()).context(ParsingReferenceSnafu { path: p })?;
    Ok(js)
}

/// Compares the produced lists with a reference document.
pub fn check_reference(lists: &[Option<CandidateList>], reference: &Path) -> ListResult<()> {
    let reference_js = read_reference(reference)?;
    let pretty_ref = serde_json::to_string_pretty(&reference_js).context(ParsingReferenceSnafu {
        path: reference.display().to_string(),
    })?;
    // Both sides go through JSValue so that the keys are ordered the same way.
    let lists_js = serde_json::to_value(lists).context(WritingJsonSnafu {
        path: reference.display().to_string(),
    })?;
    let pretty_lists = serde_json::to_string_pretty(&lists_js).context(WritingJsonSnafu {
        path: reference.display().to_string(),
    })?;
    if pretty_ref != pretty_lists {
        warn!("Found differences with the reference file");
        print_diff(pretty_ref.as_str(), pretty_lists.as_str(), "\n");
        whatever!(
            "Difference detected between generated lists and reference {}",
            reference.display()
        )
    }
    Ok(())
}

/// Converts every list of `input_folder` and writes them to `output_path`.
pub fn run_conversion(
    input_folder: &Path,
    output_path: &Path,
    options: &RunOptions,
) -> ListResult<RunSummary> {
    info!(
        "Converting lists in {} to {}",
        input_folder.display(),
        output_path.display()
    );
    let (lists, summary) = convert_folder(input_folder, options)?;
    write_json(output_path, &lists, options.pretty)?;
    info!(
        "Wrote {} lists to {} ({} converted, {} rejected, {} skipped)",
        lists.len(),
        simplify_file_name(output_path),
        summary.converted,
        summary.failed.len(),
        summary.skipped
    );

    if let Some(reference) = &options.reference {
        check_reference(&lists, reference)?;
        info!("Output matches reference {}", reference.display());
    }
    Ok(summary)
}
