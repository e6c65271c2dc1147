use std::path::PathBuf;

use clap::Parser;

/// Generates the JSON document of all the candidate lists from a folder of CSV tables.
///
/// The verbosity is read from the LOGLEVEL environment variable (debug, info, warning, error, critical).
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (folder path) The folder where the csv files lie. Each file is one list: the first line is
    /// the name of the list, the rest is a table with a header.
    #[clap(value_parser)]
    pub input_folder: PathBuf,

    /// (file path) The file to write the JSON document to. It is overwritten if it exists.
    #[clap(value_parser)]
    pub output_filename: PathBuf,

    /// If passed as an argument, the files are processed sorted by name instead of in the
    /// order of the directory listing.
    #[clap(long, takes_value = false)]
    pub sort: bool,

    /// If passed as an argument, the JSON document is indented.
    #[clap(long, takes_value = false)]
    pub pretty: bool,

    /// (file path) A reference file containing the expected JSON document. If provided, the
    /// generated lists are checked against it.
    #[clap(short, long, value_parser)]
    pub reference: Option<PathBuf>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
