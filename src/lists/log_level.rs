// Logger setup for the command line.

use log::LevelFilter;

/// The environment variable that selects the verbosity.
pub const LOG_LEVEL_VAR: &str = "LOGLEVEL";

/// Reads a verbosity name, regardless of case.
///
/// `warning` and `critical` are accepted next to the names of the `log`
/// crate.
pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "error" | "critical" | "fatal" => Some(LevelFilter::Error),
        _ => None,
    }
}

/// The level to use, given the content of the variable and the verbose flag.
///
/// The second element is the value of the variable if it was not understood.
pub fn select_log_level(env_value: Option<&str>, verbose: bool) -> (LevelFilter, Option<String>) {
    if verbose {
        return (LevelFilter::Debug, None);
    }
    match env_value {
        None => (LevelFilter::Info, None),
        Some(v) => match parse_log_level(v) {
            Some(level) => (level, None),
            None => (LevelFilter::Info, Some(v.to_string())),
        },
    }
}

/// Sets up the process logger. Must be called once, before anything is logged.
pub fn init_logging(env_value: Option<&str>, verbose: bool) -> Option<String> {
    let (level, unknown) = select_log_level(env_value, verbose);
    env_logger::Builder::new().filter_level(level).init();
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_any_case() {
        assert_eq!(parse_log_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level("Info"), Some(LevelFilter::Info));
        assert_eq!(parse_log_level("warning"), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level("CRITICAL"), Some(LevelFilter::Error));
        assert_eq!(parse_log_level("error"), Some(LevelFilter::Error));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn default_and_overrides() {
        assert_eq!(select_log_level(None, false), (LevelFilter::Info, None));
        assert_eq!(
            select_log_level(Some("error"), false),
            (LevelFilter::Error, None)
        );
        assert_eq!(
            select_log_level(Some("error"), true),
            (LevelFilter::Debug, None)
        );
        assert_eq!(
            select_log_level(Some("loud"), false),
            (LevelFilter::Info, Some("loud".to_string()))
        );
    }
}
