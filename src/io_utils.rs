use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData | UnexpectedEof => "File appears truncated or corrupted.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn universle_cli_error(context: &str, err: crate::UniversleError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Dataset loading failure for `path`, with an actionable hint.
pub fn dataset_cli_error(path: &Path, err: crate::UniversleError) -> CliError {
    match err {
        crate::UniversleError::Io(io) => CliError {
            msg: format_io_error("reading dataset", path, &io),
            source: Some(Box::new(io)),
        },
        other => universle_cli_error(&format!("Error loading '{}'", path.display()), other),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &crate::UniversleError) -> String {
    use crate::UniversleError::*;
    match err {
        EmptyDataset => "No institutions to choose from. Supply a dataset with --data.".into(),
        Dataset(msg) => format!("{msg}. Check the dataset file."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Json(e) => format!("{e}. Expected a JSON array of institutions."),
        Csv(e) => format!("{e}. Expected a CSV file with an id,name,lat,lng header."),
        Io(io) => format!("{io}"),
    }
}
